pub mod bedrock_service;
pub mod config;
pub mod context_assembler;
pub mod error;
pub mod models;
pub mod query_service;
pub mod request_parser;
pub mod response;
pub mod search_service;

pub use bedrock_service::{BedrockService, GenerationService};
pub use config::HandlerConfig;
pub use error::QueryError;
pub use models::*;
pub use query_service::QueryService;
pub use search_service::{KendraSearchService, SearchService};
