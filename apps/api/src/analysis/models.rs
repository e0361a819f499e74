use serde::{Deserialize, Deserializer, Serialize};

/// Description used whenever the external analysis produced no usable verdict.
pub const UNAVAILABLE_DESCRIPTION: &str = "Service temporarily unavailable. Please try again later.";

/// The safety verdict for a phone number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SafetyStatus {
    Safe,
    Scam,
    Unknown,
}

impl SafetyStatus {
    pub const ALL: [SafetyStatus; 3] = [SafetyStatus::Safe, SafetyStatus::Scam, SafetyStatus::Unknown];

    pub fn as_str(self) -> &'static str {
        match self {
            SafetyStatus::Safe => "SAFE",
            SafetyStatus::Scam => "SCAM",
            SafetyStatus::Unknown => "UNKNOWN",
        }
    }
}

/// Structured verdict as returned by the classifier.
///
/// `entityName` and `website` treat absent, `null`, empty and
/// whitespace-only values alike: all become `None`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub status: SafetyStatus,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub entity_name: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub website: Option<String>,
    pub description: String,
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Normalized analysis outcome for one submitted phone number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub status: SafetyStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub description: String,
    pub phone_number: String,
}

impl AnalysisResult {
    /// Builds a result from a classifier verdict. The phone number always
    /// comes from the caller, never from the service.
    pub fn from_verdict(phone_number: &str, verdict: Verdict) -> Self {
        Self {
            status: verdict.status,
            entity_name: verdict.entity_name,
            website: verdict.website,
            description: verdict.description,
            phone_number: phone_number.to_string(),
        }
    }

    /// The UNKNOWN result substituted for any failed analysis.
    pub fn unavailable(phone_number: &str) -> Self {
        Self {
            status: SafetyStatus::Unknown,
            entity_name: None,
            website: None,
            description: UNAVAILABLE_DESCRIPTION.to_string(),
            phone_number: phone_number.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serde_uppercase() {
        for status in SafetyStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
        assert!(serde_json::from_str::<SafetyStatus>(r#""safe""#).is_err());
    }

    #[test]
    fn test_verdict_full_deserializes() {
        let json = r#"{
            "status": "SAFE",
            "entityName": "City Hall",
            "website": "city.example.jp",
            "description": "Verified line."
        }"#;
        let verdict: Verdict = serde_json::from_str(json).unwrap();
        assert_eq!(verdict.status, SafetyStatus::Safe);
        assert_eq!(verdict.entity_name.as_deref(), Some("City Hall"));
        assert_eq!(verdict.website.as_deref(), Some("city.example.jp"));
        assert_eq!(verdict.description, "Verified line.");
    }

    #[test]
    fn test_verdict_absent_null_and_blank_optionals_are_none() {
        let absent: Verdict =
            serde_json::from_str(r#"{"status": "SCAM", "description": "d"}"#).unwrap();
        let null: Verdict = serde_json::from_str(
            r#"{"status": "SCAM", "entityName": null, "website": null, "description": "d"}"#,
        )
        .unwrap();
        let blank: Verdict = serde_json::from_str(
            r#"{"status": "SCAM", "entityName": "", "website": "   ", "description": "d"}"#,
        )
        .unwrap();

        for verdict in [absent, null, blank] {
            assert_eq!(verdict.entity_name, None);
            assert_eq!(verdict.website, None);
        }
    }

    #[test]
    fn test_verdict_requires_status_and_description() {
        assert!(serde_json::from_str::<Verdict>(r#"{"status": "SAFE"}"#).is_err());
        assert!(serde_json::from_str::<Verdict>(r#"{"description": "d"}"#).is_err());
        assert!(
            serde_json::from_str::<Verdict>(r#"{"status": "MAYBE", "description": "d"}"#).is_err()
        );
    }

    #[test]
    fn test_unavailable_preserves_phone_number() {
        let result = AnalysisResult::unavailable("0120-000-000");
        assert_eq!(result.status, SafetyStatus::Unknown);
        assert_eq!(result.phone_number, "0120-000-000");
        assert_eq!(result.entity_name, None);
        assert_eq!(result.website, None);
        assert!(!result.description.is_empty());
    }

    #[test]
    fn test_result_serializes_camel_case_and_omits_missing_optionals() {
        let result = AnalysisResult::unavailable("03-1234-5678");
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["phoneNumber"], "03-1234-5678");
        assert_eq!(value["status"], "UNKNOWN");
        assert!(value.get("entityName").is_none());
        assert!(value.get("website").is_none());
    }
}
