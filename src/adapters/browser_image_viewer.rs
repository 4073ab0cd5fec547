use anyhow::Result;

use crate::core::interfaces::adapters::ImageViewer;

pub struct BrowserImageViewer;

impl BrowserImageViewer {
    pub fn new() -> Self {
        Self
    }
}

impl ImageViewer for BrowserImageViewer {
    fn show_image(&self, url: &str) -> Result<()> {
        log::info!("[VIEWER] Opening image in the default browser");
        log::debug!("[VIEWER] Image URL: {}", url);

        open::that(url)?;
        Ok(())
    }
}
