use anyhow::{Context, Result};
use std::path::Path;

#[derive(Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub media_type: String,
    bytes: Vec<u8>,
}

impl std::fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageUpload")
            .field("file_name", &self.file_name)
            .field("media_type", &self.media_type)
            .field("size_bytes", &self.bytes.len())
            .finish()
    }
}

impl ImageUpload {
    /// Wraps bytes that the caller already knows to be an image of `media_type`.
    pub fn build_from_bytes(file_name: &str, media_type: &str, bytes: Vec<u8>) -> Self {
        log::debug!(
            "[IMAGE] building upload: name={}, type={}, size={}",
            file_name,
            media_type,
            bytes.len()
        );

        Self {
            file_name: file_name.to_string(),
            media_type: media_type.to_string(),
            bytes,
        }
    }

    /// Sniffs the format from the magic bytes; anything that is not an image is rejected.
    pub fn detect_from_bytes(file_name: &str, bytes: Vec<u8>) -> Result<Self> {
        if bytes.is_empty() {
            anyhow::bail!("{} is empty", file_name);
        }

        let format = ::image::guess_format(&bytes)
            .map_err(|_| anyhow::anyhow!("{} is not a supported image file", file_name))?;

        Ok(Self::build_from_bytes(
            file_name,
            format.to_mime_type(),
            bytes,
        ))
    }

    pub async fn load_from_path(path: &Path) -> Result<Self> {
        log::info!("[IMAGE] Loading image from {:?}", path);

        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Unable to read image file {}", path.display()))?;

        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("image")
            .to_string();

        Self::detect_from_bytes(&file_name, bytes)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }
}
