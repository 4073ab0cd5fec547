use super::ImageUpload;

/// What a user submitted. There is no variant without both text and image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchRequest {
    Text(String),
    Image(ImageUpload),
    TextAndImage(String, ImageUpload),
}

impl SearchRequest {
    /// Returns `None` when neither a non-blank text nor an image was supplied.
    pub fn build(text: Option<&str>, image: Option<ImageUpload>) -> Option<Self> {
        let text = text
            .map(str::trim)
            .filter(|trimmed| !trimmed.is_empty())
            .map(str::to_string);

        match (text, image) {
            (Some(text), Some(image)) => Some(Self::TextAndImage(text, image)),
            (Some(text), None) => Some(Self::Text(text)),
            (None, Some(image)) => Some(Self::Image(image)),
            (None, None) => {
                log::debug!("[REQUEST] nothing to search, request not built");
                None
            }
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) | Self::TextAndImage(text, _) => Some(text),
            Self::Image(_) => None,
        }
    }

    pub fn image(&self) -> Option<&ImageUpload> {
        match self {
            Self::Image(image) | Self::TextAndImage(_, image) => Some(image),
            Self::Text(_) => None,
        }
    }

    pub fn has_image(&self) -> bool {
        self.image().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_image() -> ImageUpload {
        ImageUpload::build_from_bytes("cat.png", "image/png", vec![1, 2, 3])
    }

    #[test]
    fn test_build_with_nothing_returns_none() {
        assert_eq!(SearchRequest::build(None, None), None);
    }

    #[test]
    fn test_build_with_blank_text_and_no_image_returns_none() {
        assert_eq!(SearchRequest::build(Some(""), None), None);
        assert_eq!(SearchRequest::build(Some("   \t\n"), None), None);
    }

    #[test]
    fn test_build_trims_text() {
        let request = SearchRequest::build(Some("  cats  "), None).unwrap();

        assert_eq!(request, SearchRequest::Text("cats".to_string()));
        assert_eq!(request.text(), Some("cats"));
        assert!(!request.has_image());
    }

    #[test]
    fn test_build_with_blank_text_and_image_is_image_only() {
        let request = SearchRequest::build(Some("  "), Some(sample_image())).unwrap();

        assert_eq!(request.text(), None);
        assert_eq!(request.image(), Some(&sample_image()));
    }

    #[test]
    fn test_build_with_text_and_image() {
        let request = SearchRequest::build(Some("tabby"), Some(sample_image())).unwrap();

        assert_eq!(
            request,
            SearchRequest::TextAndImage("tabby".to_string(), sample_image())
        );
        assert!(request.has_image());
    }
}
