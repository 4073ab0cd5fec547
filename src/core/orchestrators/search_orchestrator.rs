use std::sync::Arc;

use crate::core::interfaces::adapters::{FallbackResolver, SearchTransport};
use crate::core::models::{GenericFailure, SearchError, SearchRequest, SearchResult};

/// Real search first, simulated result on any transport failure, visible error otherwise.
pub struct SearchOrchestrator {
    transport: Arc<dyn SearchTransport>,
    fallback_resolver: Arc<dyn FallbackResolver>,
}

impl SearchOrchestrator {
    pub fn build(
        transport: Arc<dyn SearchTransport>,
        fallback_resolver: Arc<dyn FallbackResolver>,
    ) -> Self {
        Self {
            transport,
            fallback_resolver,
        }
    }

    pub async fn run(&self, request: &SearchRequest) -> Result<SearchResult, GenericFailure> {
        match self.transport.search(request).await {
            Ok(result) => {
                log::info!("[ORCHESTRATOR] Search service answered");
                Ok(result)
            }
            Err(SearchError::Transport(error)) => {
                log::warn!(
                    "[ORCHESTRATOR] Search failed, using simulated result: {}",
                    error
                );
                Ok(self.fallback_resolver.resolve_fallback(request).await)
            }
            Err(SearchError::Unexpected(message)) => {
                log::error!("[ORCHESTRATOR] Search aborted: {}", message);
                Err(GenericFailure::from_message(&message))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::SimulatedFallbackResolver;
    use crate::core::models::{ImageResult, TransportError};
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::Duration;

    struct MockSearchTransport {
        outcome: Result<SearchResult, SearchError>,
        received_requests: Arc<Mutex<Vec<SearchRequest>>>,
    }

    impl MockSearchTransport {
        fn returning(outcome: Result<SearchResult, SearchError>) -> Self {
            Self {
                outcome,
                received_requests: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn get_call_count(&self) -> usize {
            self.received_requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl SearchTransport for MockSearchTransport {
        async fn search(&self, request: &SearchRequest) -> Result<SearchResult, SearchError> {
            self.received_requests.lock().unwrap().push(request.clone());
            self.outcome.clone()
        }
    }

    struct CountingFallbackResolver {
        call_count: Arc<Mutex<usize>>,
    }

    impl CountingFallbackResolver {
        fn new() -> Self {
            Self {
                call_count: Arc::new(Mutex::new(0)),
            }
        }

        fn get_call_count(&self) -> usize {
            *self.call_count.lock().unwrap()
        }
    }

    #[async_trait]
    impl FallbackResolver for CountingFallbackResolver {
        async fn resolve_fallback(&self, request: &SearchRequest) -> SearchResult {
            *self.call_count.lock().unwrap() += 1;
            SimulatedFallbackResolver::build_simulated_result(request)
        }
    }

    fn unreachable() -> SearchError {
        TransportError::NetworkUnreachable {
            endpoint: "http://localhost:8000".to_string(),
            reason: "connection refused".to_string(),
        }
        .into()
    }

    fn text_request(text: &str) -> SearchRequest {
        SearchRequest::build(Some(text), None).unwrap()
    }

    #[tokio::test]
    async fn test_successful_search_skips_fallback() {
        let backend_result = SearchResult {
            answer: "x".to_string(),
            images: Vec::new(),
        };
        let transport = Arc::new(MockSearchTransport::returning(Ok(backend_result.clone())));
        let fallback = Arc::new(CountingFallbackResolver::new());
        let orchestrator = SearchOrchestrator::build(transport.clone(), fallback.clone());

        let result = orchestrator.run(&text_request("dogs")).await.unwrap();

        assert_eq!(result, backend_result);
        assert_eq!(transport.get_call_count(), 1);
        assert_eq!(fallback.get_call_count(), 0);
    }

    #[tokio::test]
    async fn test_unreachable_backend_yields_fallback_result() {
        let transport = Arc::new(MockSearchTransport::returning(Err(unreachable())));
        let fallback = Arc::new(CountingFallbackResolver::new());
        let orchestrator = SearchOrchestrator::build(transport, fallback.clone());
        let request = text_request("cats");

        let result = orchestrator.run(&request).await.unwrap();

        assert_eq!(
            result,
            SimulatedFallbackResolver::build_simulated_result(&request)
        );
        assert!(result.answer.contains("cats"));
        assert_eq!(result.images.len(), 4);
        assert_eq!(fallback.get_call_count(), 1);
    }

    #[tokio::test]
    async fn test_server_error_yields_fallback_result() {
        let transport = Arc::new(MockSearchTransport::returning(Err(
            TransportError::ServerError {
                status: 503,
                status_text: "Service Unavailable".to_string(),
            }
            .into(),
        )));
        let fallback = Arc::new(SimulatedFallbackResolver::new(Duration::ZERO));
        let orchestrator = SearchOrchestrator::build(transport, fallback);
        let request = text_request("dogs");

        let result = orchestrator.run(&request).await.unwrap();

        assert_eq!(
            result,
            SimulatedFallbackResolver::build_simulated_result(&request)
        );
    }

    #[tokio::test]
    async fn test_malformed_response_yields_fallback_result() {
        let transport = Arc::new(MockSearchTransport::returning(Err(
            TransportError::MalformedResponse {
                reason: "expected value at line 1 column 1".to_string(),
            }
            .into(),
        )));
        let fallback = Arc::new(CountingFallbackResolver::new());
        let orchestrator = SearchOrchestrator::build(transport, fallback.clone());

        assert!(orchestrator.run(&text_request("dogs")).await.is_ok());
        assert_eq!(fallback.get_call_count(), 1);
    }

    #[tokio::test]
    async fn test_unexpected_failure_surfaces_error_without_fallback() {
        let transport = Arc::new(MockSearchTransport::returning(Err(
            SearchError::unexpected("Invalid media type"),
        )));
        let fallback = Arc::new(CountingFallbackResolver::new());
        let orchestrator = SearchOrchestrator::build(transport, fallback.clone());

        let error = orchestrator.run(&text_request("dogs")).await.unwrap_err();

        assert_eq!(error.message, "Invalid media type");
        assert_eq!(fallback.get_call_count(), 0);
    }

    #[tokio::test]
    async fn test_unexpected_failure_without_message_is_unknown_error() {
        let transport = Arc::new(MockSearchTransport::returning(Err(SearchError::unexpected(""))));
        let fallback = Arc::new(CountingFallbackResolver::new());
        let orchestrator = SearchOrchestrator::build(transport, fallback);

        let error = orchestrator.run(&text_request("dogs")).await.unwrap_err();

        assert_eq!(error.message, crate::global_constants::UNKNOWN_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_backend_image_order_reaches_caller_unchanged() {
        let images = vec![
            ImageResult::new("third", "https://x/3"),
            ImageResult::new("first", "https://x/1"),
            ImageResult::new("second", "https://x/2"),
        ];
        let transport = Arc::new(MockSearchTransport::returning(Ok(SearchResult {
            answer: String::new(),
            images: images.clone(),
        })));
        let fallback = Arc::new(CountingFallbackResolver::new());
        let orchestrator = SearchOrchestrator::build(transport, fallback);

        let result = orchestrator.run(&text_request("order")).await.unwrap();

        assert_eq!(result.images, images);
    }
}
