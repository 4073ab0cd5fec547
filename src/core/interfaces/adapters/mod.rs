mod fallback_resolver;
mod image_viewer;
mod search_transport;

pub use fallback_resolver::FallbackResolver;
pub use image_viewer::ImageViewer;
pub use search_transport::SearchTransport;
