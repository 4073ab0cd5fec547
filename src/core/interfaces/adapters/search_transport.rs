use async_trait::async_trait;

use crate::core::models::{SearchError, SearchRequest, SearchResult};

#[async_trait]
pub trait SearchTransport: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResult, SearchError>;
}
