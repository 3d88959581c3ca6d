use crate::bedrock_service::{build_prompt, GenerationService};
use crate::config::HandlerConfig;
use crate::context_assembler::build_context;
use crate::error::QueryError;
use crate::models::*;
use crate::request_parser::parse_query;
use crate::response;
use crate::search_service::SearchService;
use std::sync::Arc;

pub struct QueryService {
    search_service: Arc<dyn SearchService>,
    generation_service: Arc<dyn GenerationService>,
}

impl QueryService {
    pub fn new(
        search_service: Arc<dyn SearchService>,
        generation_service: Arc<dyn GenerationService>,
    ) -> Self {
        Self {
            search_service,
            generation_service,
        }
    }

    /// Runs one request to completion. Every path ends in exactly one response.
    pub async fn handle(&self, event: &QueryEvent, config: &HandlerConfig) -> HttpResponse {
        let start_time = std::time::Instant::now();

        let response = match self.answer(event, config).await {
            Ok(answer) => response::success(&answer),
            Err(err) => response::from_error(&err),
        };

        log::info!(
            "Request finished with status {} in {} ms",
            response.status_code,
            start_time.elapsed().as_millis()
        );
        response
    }

    async fn answer(&self, event: &QueryEvent, config: &HandlerConfig) -> Result<String, QueryError> {
        let request = parse_query(event.body.as_deref()).ok_or_else(|| {
            log::warn!("Rejecting request without a query");
            QueryError::MissingQuery
        })?;

        let items = self.retrieve(&request.query, config).await?;
        let context = build_context(&items);
        self.generate(&request.query, &context, config).await
    }

    async fn retrieve(
        &self,
        query: &str,
        config: &HandlerConfig,
    ) -> Result<Vec<RetrievalResultItem>, QueryError> {
        let result = match config.index_id.as_deref() {
            Some(index_id) => self.search_service.search(query, index_id).await,
            None => Err(anyhow::anyhow!("KENDRA_INDEX_ID environment variable not set")),
        };

        result.map_err(|e| {
            log::error!("Error querying Kendra: {:#}", e);
            QueryError::Search(e)
        })
    }

    async fn generate(
        &self,
        query: &str,
        context: &str,
        config: &HandlerConfig,
    ) -> Result<String, QueryError> {
        let request = GenerationRequest::new(config.model_id.as_str(), build_prompt(context, query));

        let result = self
            .generation_service
            .generate(&request)
            .await
            .and_then(|reply| {
                reply
                    .first_text()
                    .map(str::to_string)
                    .ok_or_else(|| anyhow::anyhow!("Bedrock response contained no text content"))
            });

        result.map_err(|e| {
            log::error!("Error generating response with Bedrock: {:#}", e);
            QueryError::Generation(e)
        })
    }
}
