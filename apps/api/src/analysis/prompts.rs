// Prompt and response schema for phone number classification.

use serde_json::{json, Value};

use crate::analysis::models::SafetyStatus;
use crate::i18n::Language;

/// Classification prompt template.
/// Replace: {phone_number}, {language}
pub const CLASSIFY_PROMPT_TEMPLATE: &str = r#"You are an expert security system for analyzing Japanese phone numbers.
Analyze the following phone number: "{phone_number}".

Context: The user is in Japan. There are many scams impersonating the Immigration Bureau (入管局), National Tax Agency (国税庁), Police, or Embassies.

Your task:
1. Identify if this number belongs to a KNOWN official entity (e.g., specific Immigration Bureau branch, City Hall, Bank, Courier).
2. Identify if this number is associated with known scams, robo-calls, or highly suspicious patterns reported in Japan.
3. If it is neither clearly official nor clearly a scam, mark it as UNKNOWN.

Respond in the user's language: {language}.

Return JSON strictly adhering to the schema."#;

pub fn build_classify_prompt(phone_number: &str, language: Language) -> String {
    // The number goes in last and is never rescanned for placeholders
    CLASSIFY_PROMPT_TEMPLATE
        .replace("{language}", language.code())
        .replace("{phone_number}", phone_number)
}

/// Response schema in Gemini's OpenAPI-subset dialect.
pub fn verdict_schema() -> Value {
    let statuses: Vec<&str> = SafetyStatus::ALL.iter().map(|s| s.as_str()).collect();
    json!({
        "type": "OBJECT",
        "properties": {
            "status": {
                "type": "STRING",
                "enum": statuses,
                "description": "The safety verdict of the number."
            },
            "entityName": {
                "type": "STRING",
                "description": "Name of the organization if Safe/Official. Or 'Unknown' if not found."
            },
            "website": {
                "type": "STRING",
                "description": "Official URL if Safe. Null or empty string if unknown or scam."
            },
            "description": {
                "type": "STRING",
                "description": "A short explanation in the requested language. If safe, explain who it is. If scam, explain the type of scam (e.g. Immigration scam). If unknown, warn to be cautious."
            }
        },
        "required": ["status", "description"]
    })
}
