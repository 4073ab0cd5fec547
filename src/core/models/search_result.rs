use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageResult {
    pub caption: String,
    pub url: String,
}

impl ImageResult {
    pub fn new(caption: &str, url: &str) -> Self {
        Self {
            caption: caption.to_string(),
            url: url.to_string(),
        }
    }
}

/// Answer plus related images, in display order. Field names follow the backend's JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "respuesta")]
    pub answer: String,
    #[serde(rename = "resultados")]
    pub images: Vec<ImageResult>,
}

impl SearchResult {
    /// First `max_chars` characters of the answer, with `...` appended when cut.
    pub fn summary(&self, max_chars: usize) -> String {
        if self.answer.chars().count() <= max_chars {
            return self.answer.clone();
        }

        let mut summary: String = self.answer.chars().take(max_chars).collect();
        summary.push_str("...");
        summary
    }
}
