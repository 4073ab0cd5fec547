use std::fmt::Write;

use crate::core::models::{GenericFailure, ImageResult, SearchResult};
use crate::global_constants;
use crate::presentation::ImageCarousel;

pub struct ResultsView {
    title: String,
    result: SearchResult,
    summary_length: usize,
    carousel: Option<ImageCarousel>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsViewMessage {
    NextImage,
    PreviousImage,
    GoToImage(usize),
}

impl ResultsView {
    pub fn build_with_result(title: String, result: SearchResult, summary_length: usize) -> Self {
        log::info!(
            "[RESULTS_VIEW] Showing result with {} images",
            result.images.len()
        );

        let carousel = ImageCarousel::build_for(result.images.len());
        Self {
            title,
            result,
            summary_length,
            carousel,
        }
    }

    pub fn update(&mut self, message: ResultsViewMessage) -> bool {
        let Some(carousel) = self.carousel.as_mut() else {
            log::debug!("[RESULTS_VIEW] No images to navigate");
            return false;
        };

        match message {
            ResultsViewMessage::NextImage => {
                carousel.next();
                true
            }
            ResultsViewMessage::PreviousImage => {
                carousel.previous();
                true
            }
            ResultsViewMessage::GoToImage(index) => carousel.go_to(index),
        }
    }

    pub fn current_image(&self) -> Option<&ImageResult> {
        let carousel = self.carousel.as_ref()?;
        self.result.images.get(carousel.current_index())
    }

    pub fn render_summary(&self) -> String {
        let mut output = String::new();

        let _ = writeln!(output, "\n== {} ==", self.title);
        let _ = writeln!(output, "\n{}", self.result.summary(self.summary_length));

        match (&self.carousel, self.current_image()) {
            (Some(carousel), Some(image)) => {
                let _ = writeln!(output, "\nImages ({}):", carousel.position_label());
                for (index, entry) in self.result.images.iter().enumerate() {
                    let marker = if index == carousel.current_index() {
                        ">"
                    } else {
                        " "
                    };
                    let _ = writeln!(output, " {} {}. {}", marker, index + 1, entry.caption);
                }
                let _ = writeln!(output, "\n  {}", image.url);
                if carousel.has_multiple() {
                    let _ = writeln!(output, "  (:next / :prev / :go <n> to browse, :open to view)");
                }
            }
            _ => {
                let _ = writeln!(output, "\nNo related images.");
            }
        }

        output
    }

    pub fn render_full_answer(&self) -> String {
        format!("\n{}\n", self.result.answer)
    }
}

pub fn render_failure(error: &GenericFailure) -> String {
    format!(
        "\n[ERROR] {}\n{}\n",
        error.message,
        global_constants::USER_MESSAGE_RETRY_HINT
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with_images(count: usize) -> SearchResult {
        SearchResult {
            answer: "Orange cats are usually male.".to_string(),
            images: (1..=count)
                .map(|n| ImageResult::new(&format!("cat {}", n), &format!("https://img/{}", n)))
                .collect(),
        }
    }

    #[test]
    fn test_summary_shows_title_answer_and_current_image() {
        let view = ResultsView::build_with_result(
            "Search: \"cats\"".to_string(),
            result_with_images(3),
            200,
        );

        let rendered = view.render_summary();

        assert!(rendered.contains("== Search: \"cats\" =="));
        assert!(rendered.contains("Orange cats are usually male."));
        assert!(rendered.contains("Images (1 of 3)"));
        assert!(rendered.contains(" > 1. cat 1"));
        assert!(rendered.contains("https://img/1"));
    }

    #[test]
    fn test_images_are_listed_in_result_order() {
        let view = ResultsView::build_with_result("t".to_string(), result_with_images(3), 200);

        let rendered = view.render_summary();

        let first = rendered.find("cat 1").unwrap();
        let second = rendered.find("cat 2").unwrap();
        let third = rendered.find("cat 3").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_navigation_moves_current_image() {
        let mut view = ResultsView::build_with_result("t".to_string(), result_with_images(3), 200);

        assert!(view.update(ResultsViewMessage::PreviousImage));

        assert_eq!(view.current_image().unwrap().caption, "cat 3");
        assert!(view.render_summary().contains(" > 3. cat 3"));
    }

    #[test]
    fn test_go_to_out_of_range_keeps_current_image() {
        let mut view = ResultsView::build_with_result("t".to_string(), result_with_images(2), 200);

        assert!(!view.update(ResultsViewMessage::GoToImage(5)));

        assert_eq!(view.current_image().unwrap().caption, "cat 1");
    }

    #[test]
    fn test_result_without_images_has_no_carousel() {
        let mut view = ResultsView::build_with_result("t".to_string(), result_with_images(0), 200);

        assert!(!view.update(ResultsViewMessage::NextImage));
        assert!(view.current_image().is_none());
        assert!(view.render_summary().contains("No related images."));
    }

    #[test]
    fn test_summary_is_truncated_but_full_answer_is_not() {
        let long_result = SearchResult {
            answer: "word ".repeat(100),
            images: Vec::new(),
        };
        let view = ResultsView::build_with_result("t".to_string(), long_result.clone(), 20);

        assert!(view.render_summary().contains(&format!("{}...", &long_result.answer[..20])));
        assert!(view.render_full_answer().contains(&long_result.answer));
    }

    #[test]
    fn test_render_failure_offers_retry() {
        let rendered = render_failure(&GenericFailure::from_message("boom"));

        assert!(rendered.contains("[ERROR] boom"));
        assert!(rendered.contains(":retry"));
    }
}
