mod image_carousel;
mod prompt_command;
mod results_view;

pub use image_carousel::ImageCarousel;
pub use prompt_command::PromptCommand;
pub use results_view::{render_failure, ResultsView, ResultsViewMessage};
