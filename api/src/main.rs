mod lambda_handler;
mod local_server;

use aws_config::BehaviorVersion;
use rag_handler::{BedrockService, KendraSearchService, QueryService};
use std::env;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    // Initialize environment variables and logging
    dotenv::dotenv().ok();
    env_logger::init();

    let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let query_service = Arc::new(QueryService::new(
        Arc::new(KendraSearchService::new(aws_sdk_kendra::Client::new(&sdk_config))),
        Arc::new(BedrockService::new(aws_sdk_bedrockruntime::Client::new(&sdk_config))),
    ));

    if env::var("AWS_LAMBDA_RUNTIME_API").is_ok() {
        log::info!("Starting Lambda runtime");
        lambda_handler::run(query_service).await
    } else {
        local_server::serve(query_service).await.map_err(Into::into)
    }
}
