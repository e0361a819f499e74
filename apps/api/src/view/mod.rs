// Pure view models for the mobile front-end: home screen, result sheet, language selector.

pub mod home;
pub mod result;
pub mod selector;
