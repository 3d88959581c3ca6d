use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use rag_handler::{HandlerConfig, HttpResponse, QueryEvent, QueryService};
use serde_json::{json, Value};
use std::env;
use std::sync::Arc;
use uuid::Uuid;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

pub fn router(query_service: Arc<QueryService>) -> Router {
    Router::new()
        .route("/query", post(handle_query))
        .route("/health", get(health))
        .with_state(query_service)
}

pub async fn serve(query_service: Arc<QueryService>) -> anyhow::Result<()> {
    let addr = env::var("API_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, router(query_service)).await?;
    Ok(())
}

async fn handle_query(State(query_service): State<Arc<QueryService>>, body: Bytes) -> Response {
    log::info!("Handling request {}", Uuid::new_v4());

    let event = QueryEvent::with_body(String::from_utf8_lossy(&body));
    let response = query_service.handle(&event, &HandlerConfig::from_env()).await;
    into_axum_response(response)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

fn into_axum_response(response: HttpResponse) -> Response {
    let status =
        StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut headers = HeaderMap::new();
    for (name, value) in &response.headers {
        match (HeaderName::from_bytes(name.as_bytes()), HeaderValue::from_str(value)) {
            (Ok(name), Ok(value)) => {
                headers.insert(name, value);
            }
            _ => log::warn!("Dropping invalid response header {}", name),
        }
    }

    (status, headers, response.body).into_response()
}
