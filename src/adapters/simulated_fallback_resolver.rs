use async_trait::async_trait;
use std::time::Duration;

use crate::core::interfaces::adapters::FallbackResolver;
use crate::core::models::{ImageResult, SearchRequest, SearchResult};
use crate::global_constants;

/// Answers with a canned result after a short pause so the loading state is still visible.
pub struct SimulatedFallbackResolver {
    delay: Duration,
}

impl SimulatedFallbackResolver {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn build_simulated_result(request: &SearchRequest) -> SearchResult {
        let subject = request
            .text()
            .unwrap_or(global_constants::FALLBACK_IMAGE_PLACEHOLDER);

        let answer = format!(
            "{}{}{}",
            global_constants::FALLBACK_ANSWER_PREFIX,
            subject,
            global_constants::FALLBACK_ANSWER_SUFFIX
        );

        let images = global_constants::FALLBACK_IMAGES
            .iter()
            .map(|(caption, url)| ImageResult::new(caption, url))
            .collect();

        SearchResult { answer, images }
    }
}

#[async_trait]
impl FallbackResolver for SimulatedFallbackResolver {
    async fn resolve_fallback(&self, request: &SearchRequest) -> SearchResult {
        log::info!(
            "[FALLBACK] Producing simulated result in {} ms",
            self.delay.as_millis()
        );

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        Self::build_simulated_result(request)
    }
}
