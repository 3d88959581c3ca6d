use crate::error::QueryError;
use crate::models::HttpResponse;
use serde_json::{json, Value};
use std::collections::BTreeMap;

pub fn cors_headers() -> BTreeMap<String, String> {
    [
        ("Content-Type", "application/json"),
        ("Access-Control-Allow-Origin", "*"),
        ("Access-Control-Allow-Headers", "Content-Type"),
        ("Access-Control-Allow-Methods", "OPTIONS,POST"),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_string(), value.to_string()))
    .collect()
}

pub fn json_response(status_code: u16, payload: &Value) -> HttpResponse {
    HttpResponse {
        status_code,
        body: payload.to_string(),
        headers: cors_headers(),
    }
}

pub fn success(answer: &str) -> HttpResponse {
    json_response(200, &json!({ "response": answer }))
}

pub fn from_error(err: &QueryError) -> HttpResponse {
    json_response(err.status_code(), &json!({ "error": err.to_string() }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_wraps_answer() {
        let response = success("The policy allows 15 days.");
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, r#"{"response":"The policy allows 15 days."}"#);
    }

    #[test]
    fn errors_map_to_fixed_bodies() {
        let bad = from_error(&QueryError::MissingQuery);
        assert_eq!(bad.status_code, 400);
        assert_eq!(bad.body, r#"{"error":"Missing query parameter"}"#);

        let search = from_error(&QueryError::Search(anyhow::anyhow!("timeout")));
        assert_eq!(search.status_code, 500);
        assert_eq!(search.body, r#"{"error":"Error searching documents"}"#);
    }

    #[test]
    fn headers_are_identical_for_every_shape() {
        let responses = [
            success("ok"),
            from_error(&QueryError::MissingQuery),
            from_error(&QueryError::Search(anyhow::anyhow!("x"))),
            from_error(&QueryError::Generation(anyhow::anyhow!("y"))),
        ];
        for response in &responses {
            assert_eq!(response.headers, cors_headers());
        }
        assert_eq!(cors_headers().len(), 4);
        assert_eq!(cors_headers()["Access-Control-Allow-Methods"], "OPTIONS,POST");
    }
}
