use std::env;

pub const DEFAULT_MODEL_ID: &str = "anthropic.claude-3-sonnet-20240229-v1:0";

/// Per-invocation settings. Read from the environment on every call, never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerConfig {
    pub index_id: Option<String>,
    pub model_id: String,
}

impl HandlerConfig {
    pub fn new(index_id: impl Into<String>, model_id: impl Into<String>) -> Self {
        Self {
            index_id: Some(index_id.into()),
            model_id: model_id.into(),
        }
    }

    pub fn from_env() -> Self {
        let index_id = env::var("KENDRA_INDEX_ID")
            .ok()
            .filter(|id| !id.trim().is_empty());
        let model_id = env::var("BEDROCK_MODEL_ID")
            .ok()
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL_ID.to_string());

        Self { index_id, model_id }
    }
}
