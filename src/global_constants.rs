pub const APPLICATION_TITLE: &str = "Quantic Search";

pub const CONFIG_DIR_NAME: &str = "quantic-search";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const SEARCH_PATH: &str = "/search";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_FALLBACK_DELAY_MS: u64 = 1500;
pub const DEFAULT_SUMMARY_LENGTH: usize = 200;

pub const FORM_FIELD_QUERY: &str = "query";
pub const FORM_FIELD_IMAGE: &str = "image";

pub const FALLBACK_IMAGE_PLACEHOLDER: &str = "uploaded image";
pub const FALLBACK_ANSWER_PREFIX: &str = "This is a simulated response for the query: \"";
pub const FALLBACK_ANSWER_SUFFIX: &str = "\". In a real environment this answer would be \
generated by the AI model from a multimodal analysis of the provided input. It would include \
relevant information, context and specific details related to the query or the processed image.";

pub const FALLBACK_IMAGES: [(&str, &str); 4] = [
    (
        "Related image 1 - Example visual result",
        "https://images.pexels.com/photos/1181467/pexels-photo-1181467.jpeg?auto=compress&cs=tinysrgb&w=800&h=600&fit=crop",
    ),
    (
        "Related image 2 - Similar visual content",
        "https://images.pexels.com/photos/1181244/pexels-photo-1181244.jpeg?auto=compress&cs=tinysrgb&w=800&h=600&fit=crop",
    ),
    (
        "Related image 3 - Visual search result",
        "https://images.pexels.com/photos/1181263/pexels-photo-1181263.jpeg?auto=compress&cs=tinysrgb&w=800&h=600&fit=crop",
    ),
    (
        "Related image 4 - Additional context",
        "https://images.pexels.com/photos/1181292/pexels-photo-1181292.jpeg?auto=compress&cs=tinysrgb&w=800&h=600&fit=crop",
    ),
];

pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

pub const TITLE_DEFAULT: &str = "Search result";
pub const TITLE_IMAGE_ONLY: &str = "Image search";

pub const USER_MESSAGE_SEARCHING: &str = "[INFO] Searching...";
pub const USER_MESSAGE_NOTHING_TO_SEARCH: &str =
    "[INFO] Type a query or stage an image with :image <path> first.";
pub const USER_MESSAGE_SEARCH_ABANDONED: &str = "[INFO] Search abandoned.";
pub const USER_MESSAGE_RETRY_HINT: &str = "Type :retry to try again.";

pub const PROMPT_HELP: &str = r#"
  <text>          search for <text> (with the staged image, if any)
  :image <path>   stage an image for the next search
  :clear          unstage the image
  :search         search with only the staged image
  :next / :prev   move through the result images
  :go <n>         jump to image <n>
  :open           open the current image in your browser
  :full           print the full answer
  :retry          repeat the last search after an error
  :help           show this help
  :quit           exit
"#;

pub const STARTUP_BANNER: &str = r#"
╔════════════════════════════════════════════════════════╗
║  Quantic Search                                        ║
║                                                        ║
║  Find information using text, images, or both.         ║
║  Type :help for commands, :quit to exit.               ║
║                                                        ║
╚════════════════════════════════════════════════════════╝
"#;
