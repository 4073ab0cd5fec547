use anyhow::Result;

pub trait ImageViewer: Send + Sync {
    fn show_image(&self, url: &str) -> Result<()>;
}
