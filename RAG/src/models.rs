use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";
pub const MAX_TOKENS: u32 = 1000;
pub const TEMPERATURE: f32 = 0.7;

/// Inbound event as delivered by the API gateway. Only `body` is read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryEvent {
    #[serde(default)]
    pub body: Option<String>,
}

impl QueryEvent {
    pub fn with_body(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultItemType {
    Document,
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrievalResultItem {
    pub item_type: ResultItemType,
    pub document_title: Option<String>,
    pub document_excerpt: Option<String>,
}

impl RetrievalResultItem {
    pub fn document(title: impl Into<String>, excerpt: impl Into<String>) -> Self {
        Self {
            item_type: ResultItemType::Document,
            document_title: Some(title.into()),
            document_excerpt: Some(excerpt.into()),
        }
    }

    pub fn is_document(&self) -> bool {
        self.item_type == ResultItemType::Document
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub role: String,
    pub content: String,
}

/// Body of an InvokeModel call. `model_id` travels as a call parameter, not in the body.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GenerationRequest {
    #[serde(skip)]
    pub model_id: String,
    pub anthropic_version: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub messages: Vec<Message>,
}

impl GenerationRequest {
    pub fn new(model_id: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            anthropic_version: ANTHROPIC_VERSION.to_string(),
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt.into(),
            }],
        }
    }

    pub fn prompt(&self) -> &str {
        self.messages
            .first()
            .map(|m| m.content.as_str())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ContentBlock {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GenerationResponse {
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

impl GenerationResponse {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentBlock {
                text: Some(text.into()),
            }],
        }
    }

    pub fn first_text(&self) -> Option<&str> {
        self.content.first().and_then(|c| c.text.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HttpResponse {
    pub status_code: u16,
    pub body: String,
    pub headers: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn generation_request_serializes_wire_body_without_model_id() {
        let request = GenerationRequest::new("some-model", "hello");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["anthropic_version"], "bedrock-2023-05-31");
        assert_eq!(value["max_tokens"], 1000);
        assert_eq!(value["messages"], json!([{"role": "user", "content": "hello"}]));
        assert!(value.get("model_id").is_none());
        assert!((value["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn first_text_handles_missing_segments() {
        let empty: GenerationResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.first_text(), None);

        let no_text: GenerationResponse = serde_json::from_str(r#"{"content":[{}]}"#).unwrap();
        assert_eq!(no_text.first_text(), None);

        let reply: GenerationResponse =
            serde_json::from_str(r#"{"content":[{"type":"text","text":"a"},{"text":"b"}]}"#)
                .unwrap();
        assert_eq!(reply.first_text(), Some("a"));
    }

    #[test]
    fn http_response_uses_camel_case_keys() {
        let response = HttpResponse {
            status_code: 200,
            body: "{}".to_string(),
            headers: BTreeMap::new(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["statusCode"], 200);
        assert!(value.get("status_code").is_none());
    }
}
