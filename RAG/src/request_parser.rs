use crate::models::QueryRequest;
use serde_json::Value;

/// Pulls the query out of a JSON request body.
///
/// A missing or undecodable body is treated as an empty object, and a `query`
/// that is absent, not a string, or blank yields `None`.
pub fn parse_query(body: Option<&str>) -> Option<QueryRequest> {
    let parsed = body
        .and_then(|raw| serde_json::from_str::<Value>(raw).ok())
        .unwrap_or(Value::Null);

    let query = parsed
        .get("query")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .trim();

    if query.is_empty() {
        return None;
    }

    Some(QueryRequest {
        query: query.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_and_trims_query() {
        let request = parse_query(Some(r#"{"query": "  what is the leave policy?  "}"#)).unwrap();
        assert_eq!(request.query, "what is the leave policy?");
    }

    #[test]
    fn rejects_missing_or_empty_query() {
        assert_eq!(parse_query(None), None);
        assert_eq!(parse_query(Some("")), None);
        assert_eq!(parse_query(Some("not json")), None);
        assert_eq!(parse_query(Some("[1, 2]")), None);
        assert_eq!(parse_query(Some("{}")), None);
        assert_eq!(parse_query(Some(r#"{"query": ""}"#)), None);
        assert_eq!(parse_query(Some(r#"{"query": "   "}"#)), None);
        assert_eq!(parse_query(Some(r#"{"query": 42}"#)), None);
    }

    #[test]
    fn ignores_unrelated_fields() {
        let request = parse_query(Some(r#"{"query": "hi", "max_results": 3}"#)).unwrap();
        assert_eq!(request.query, "hi");
    }
}
