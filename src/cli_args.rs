use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "quantic-search",
    version,
    about = "Find information using text, images, or both"
)]
pub struct CliArgs {
    /// Text to search for
    #[arg(short, long)]
    pub query: Option<String>,

    /// Image file to search with
    #[arg(short, long)]
    pub image: Option<PathBuf>,

    /// Start the interactive prompt even when a query or image is given
    #[arg(long)]
    pub interactive: bool,

    /// Base address of the search service, e.g. http://localhost:8000
    #[arg(long, env = "QUANTIC_SEARCH_BACKEND_URL")]
    pub backend_url: Option<String>,

    /// Open the first result image in the default browser
    #[arg(long)]
    pub open: bool,

    /// Do not write a default settings file when none exists
    #[arg(long)]
    pub no_save_settings: bool,
}

impl CliArgs {
    pub fn is_one_shot(&self) -> bool {
        !self.interactive && (self.query.is_some() || self.image.is_some())
    }
}
