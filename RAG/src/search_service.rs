use crate::models::{ResultItemType, RetrievalResultItem};
use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_kendra::error::DisplayErrorContext;
use aws_sdk_kendra::types::{QueryResultItem, QueryResultType};
use aws_sdk_kendra::Client;

/// Ranked document search. Implementations return items in the service's relevance order.
#[async_trait]
pub trait SearchService: Send + Sync {
    async fn search(&self, query: &str, index_id: &str) -> Result<Vec<RetrievalResultItem>>;
}

pub struct KendraSearchService {
    client: Client,
}

impl KendraSearchService {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SearchService for KendraSearchService {
    async fn search(&self, query: &str, index_id: &str) -> Result<Vec<RetrievalResultItem>> {
        log::info!("Querying Kendra index {}", index_id);

        let output = self
            .client
            .query()
            .query_text(query)
            .index_id(index_id)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("Kendra query failed: {}", DisplayErrorContext(&e)))?;

        let items: Vec<RetrievalResultItem> = output
            .result_items()
            .iter()
            .map(RetrievalResultItem::from)
            .collect();

        log::info!("Kendra returned {} result items", items.len());
        Ok(items)
    }
}

impl From<&QueryResultItem> for RetrievalResultItem {
    fn from(item: &QueryResultItem) -> Self {
        let item_type = match item.r#type() {
            Some(QueryResultType::Document) => ResultItemType::Document,
            Some(other) => ResultItemType::Other(other.as_str().to_string()),
            None => ResultItemType::Other(String::new()),
        };

        Self {
            item_type,
            document_title: item
                .document_title()
                .and_then(|t| t.text())
                .map(str::to_string),
            document_excerpt: item
                .document_excerpt()
                .and_then(|t| t.text())
                .map(str::to_string),
        }
    }
}
