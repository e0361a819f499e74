use serde::Serialize;

use crate::i18n::Language;

/// Home screen model: static copy plus input/submit enablement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeView {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub placeholder: &'static str,
    pub disclaimer: &'static str,
    pub submit_label: &'static str,
    pub busy: bool,
    pub input_enabled: bool,
    pub submit_enabled: bool,
}

pub fn render_home(query: &str, loading: bool, language: Language) -> HomeView {
    let bundle = language.bundle();
    HomeView {
        title: bundle.title,
        subtitle: bundle.subtitle,
        placeholder: bundle.placeholder,
        disclaimer: bundle.disclaimer,
        submit_label: if loading {
            bundle.analyzing
        } else {
            bundle.search_button
        },
        busy: loading,
        input_enabled: !loading,
        submit_enabled: !loading && !query.trim().is_empty(),
    }
}
