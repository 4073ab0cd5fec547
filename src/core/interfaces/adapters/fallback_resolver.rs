use async_trait::async_trait;

use crate::core::models::{SearchRequest, SearchResult};

/// Produces a stand-in result when the transport fails. Must never fail itself.
#[async_trait]
pub trait FallbackResolver: Send + Sync {
    async fn resolve_fallback(&self, request: &SearchRequest) -> SearchResult;
}
