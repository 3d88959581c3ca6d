use lambda_runtime::{service_fn, Error, LambdaEvent};
use rag_handler::{HandlerConfig, HttpResponse, QueryEvent, QueryService};
use std::sync::Arc;

pub async fn run(query_service: Arc<QueryService>) -> Result<(), Error> {
    lambda_runtime::run(service_fn(move |event: LambdaEvent<QueryEvent>| {
        let query_service = query_service.clone();
        async move { handle_event(&query_service, event).await }
    }))
    .await
}

async fn handle_event(
    query_service: &QueryService,
    event: LambdaEvent<QueryEvent>,
) -> Result<HttpResponse, Error> {
    log::info!("Handling request {}", event.context.request_id);

    let config = HandlerConfig::from_env();
    Ok(query_service.handle(&event.payload, &config).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;
    use lambda_runtime::Context;

    #[tokio::test]
    async fn event_without_body_is_rejected() {
        let event: QueryEvent = serde_json::from_str(r#"{"httpMethod":"POST","body":null}"#).unwrap();
        let response = handle_event(
            &test_support::query_service(),
            LambdaEvent::new(event, Context::default()),
        )
        .await
        .unwrap();

        assert_eq!(response.status_code, 400);
        assert_eq!(response.body, r#"{"error":"Missing query parameter"}"#);
    }

    #[tokio::test]
    async fn serialized_response_matches_gateway_shape() {
        let response = handle_event(
            &test_support::query_service(),
            LambdaEvent::new(QueryEvent::default(), Context::default()),
        )
        .await
        .unwrap();

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["statusCode"], 400);
        assert!(value["body"].is_string());
        assert_eq!(value["headers"]["Content-Type"], "application/json");
    }
}
