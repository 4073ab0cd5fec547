mod image_upload;
mod search_error;
mod search_request;
mod search_result;
mod user_settings;

pub use image_upload::ImageUpload;
pub use search_error::{GenericFailure, SearchError, TransportError};
pub use search_request::SearchRequest;
pub use search_result::{ImageResult, SearchResult};
pub use user_settings::UserSettings;
