mod browser_image_viewer;
mod http_search_transport;
mod simulated_fallback_resolver;

pub use browser_image_viewer::BrowserImageViewer;
pub use http_search_transport::HttpSearchTransport;
pub use simulated_fallback_resolver::SimulatedFallbackResolver;
