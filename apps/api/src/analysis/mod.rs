// Phone number analysis: prompt, schema, classifier seam and result normalization.
// All Gemini calls go through llm_client.

pub mod client;
pub mod handlers;
pub mod models;
pub mod prompts;
