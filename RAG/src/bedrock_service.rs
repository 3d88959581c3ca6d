use crate::models::{GenerationRequest, GenerationResponse};
use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_sdk_bedrockruntime::error::DisplayErrorContext;
use aws_sdk_bedrockruntime::primitives::Blob;
use aws_sdk_bedrockruntime::Client;

/// Single-shot text generation against a hosted model.
#[async_trait]
pub trait GenerationService: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse>;
}

pub struct BedrockService {
    client: Client,
}

impl BedrockService {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GenerationService for BedrockService {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse> {
        let payload = serde_json::to_vec(request).context("Failed to encode Bedrock request")?;

        log::info!("Invoking Bedrock model {}", request.model_id);

        let output = self
            .client
            .invoke_model()
            .model_id(&request.model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(payload))
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("Bedrock invocation failed: {}", DisplayErrorContext(&e)))?;

        let response: GenerationResponse = serde_json::from_slice(output.body().as_ref())
            .context("Failed to decode Bedrock response")?;

        Ok(response)
    }
}

pub fn build_prompt(context: &str, query: &str) -> String {
    format!(
        "You are a helpful assistant answering questions based on the following document context:\n\n{context}\n\nThe query is: {query}\n\nPlease answer based on the information provided in the context. If the context doesn't contain relevant information to answer the query, please say so."
    )
}
