use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptCommand {
    Search(String),
    SearchImageOnly,
    StageImage(PathBuf),
    ClearImage,
    NextImage,
    PreviousImage,
    GoToImage(usize),
    OpenImage,
    ShowFullAnswer,
    Retry,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl PromptCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();

        if line.is_empty() {
            return Self::Empty;
        }

        let Some(command) = line.strip_prefix(':') else {
            return Self::Search(line.to_string());
        };

        let (name, argument) = match command.split_once(char::is_whitespace) {
            Some((name, argument)) => (name, argument.trim()),
            None => (command, ""),
        };

        match (name, argument) {
            ("image", "") => Self::Unknown(line.to_string()),
            ("image", path) => Self::StageImage(PathBuf::from(path)),
            ("clear", _) => Self::ClearImage,
            ("search", _) => Self::SearchImageOnly,
            ("next", _) => Self::NextImage,
            ("prev", _) => Self::PreviousImage,
            ("go", position) => match position.parse::<usize>() {
                Ok(position) if position > 0 => Self::GoToImage(position - 1),
                _ => Self::Unknown(line.to_string()),
            },
            ("open", _) => Self::OpenImage,
            ("full", _) => Self::ShowFullAnswer,
            ("retry", _) => Self::Retry,
            ("help", _) => Self::Help,
            ("quit", _) | ("q", _) | ("exit", _) => Self::Quit,
            _ => Self::Unknown(line.to_string()),
        }
    }
}
