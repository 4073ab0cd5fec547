use uuid::Uuid;

use crate::core::models::{GenericFailure, ImageUpload, SearchRequest, SearchResult};
use crate::global_constants;

/// Identifies one submission. Results carrying an older ticket are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchTicket(Uuid);

impl SearchTicket {
    fn issue() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for SearchTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
    Idle,
    Searching { ticket: SearchTicket },
    Succeeded { result: SearchResult },
    Failed { error: GenericFailure },
}

/// Everything the presentation layer shows about searches. The state is
/// always replaced whole, so loading, result and error cannot disagree.
#[derive(Debug)]
pub struct SearchSession {
    state: SearchState,
    last_request: Option<SearchRequest>,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSession {
    pub fn new() -> Self {
        Self {
            state: SearchState::Idle,
            last_request: None,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, SearchState::Searching { .. })
    }

    pub fn result(&self) -> Option<&SearchResult> {
        match &self.state {
            SearchState::Succeeded { result } => Some(result),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn error(&self) -> Option<&GenericFailure> {
        match &self.state {
            SearchState::Failed { error } => Some(error),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn last_request(&self) -> Option<&SearchRequest> {
        self.last_request.as_ref()
    }

    /// Starts a search for the user's input. Blank text with no image does nothing.
    pub fn submit(
        &mut self,
        text: Option<&str>,
        image: Option<ImageUpload>,
    ) -> Option<(SearchTicket, SearchRequest)> {
        let request = SearchRequest::build(text, image)?;
        Some(self.begin(request))
    }

    /// Replays the last submitted request. Not available while a search is running.
    pub fn retry(&mut self) -> Option<(SearchTicket, SearchRequest)> {
        if self.is_loading() {
            log::debug!("[SESSION] retry ignored, search in flight");
            return None;
        }

        let request = self.last_request.clone()?;
        log::info!("[SESSION] Retrying last search");
        Some(self.begin(request))
    }

    fn begin(&mut self, request: SearchRequest) -> (SearchTicket, SearchRequest) {
        if let SearchState::Searching { ticket } = &self.state {
            log::info!("[SESSION] Search {} superseded", ticket);
        }

        let ticket = SearchTicket::issue();
        log::info!("[SESSION] Search {} started", ticket);

        self.last_request = Some(request.clone());
        self.state = SearchState::Searching { ticket };
        (ticket, request)
    }

    /// Stores the outcome if `ticket` is still current. Returns whether it was stored.
    pub fn commit(
        &mut self,
        ticket: SearchTicket,
        outcome: Result<SearchResult, GenericFailure>,
    ) -> bool {
        if !self.is_current(ticket) {
            log::info!("[SESSION] Dropping stale outcome of search {}", ticket);
            return false;
        }

        self.state = match outcome {
            Ok(result) => SearchState::Succeeded { result },
            Err(error) => SearchState::Failed { error },
        };
        log::info!("[SESSION] Search {} finished", ticket);
        true
    }

    /// Gives up on a running search; a late outcome for it will be dropped.
    pub fn abandon(&mut self, ticket: SearchTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }

        log::info!("[SESSION] Search {} abandoned", ticket);
        self.state = SearchState::Idle;
        true
    }

    fn is_current(&self, ticket: SearchTicket) -> bool {
        matches!(&self.state, SearchState::Searching { ticket: current } if *current == ticket)
    }

    /// Heading for the current result, derived from what was submitted.
    pub fn title(&self) -> String {
        let text = self.last_request.as_ref().and_then(SearchRequest::text);
        let has_image = self
            .last_request
            .as_ref()
            .map(SearchRequest::has_image)
            .unwrap_or(false);

        match (text, has_image) {
            (Some(text), true) => format!("Search: \"{}\" with image", text),
            (Some(text), false) => format!("Search: \"{}\"", text),
            (None, true) => global_constants::TITLE_IMAGE_ONLY.to_string(),
            (None, false) => global_constants::TITLE_DEFAULT.to_string(),
        }
    }
}
