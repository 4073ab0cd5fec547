use std::future::Future;
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::adapters::{BrowserImageViewer, HttpSearchTransport, SimulatedFallbackResolver};
use crate::core::interfaces::adapters::ImageViewer;
use crate::core::models::{ImageUpload, SearchRequest, UserSettings};
use crate::core::orchestrators::{SearchOrchestrator, SearchSession, SearchState, SearchTicket};
use crate::global_constants;
use crate::presentation::{render_failure, PromptCommand, ResultsView, ResultsViewMessage};

#[derive(Debug, PartialEq, Eq)]
pub enum PromptReply {
    Print(String),
    Quit,
}

pub struct SearchApp {
    orchestrator: Arc<SearchOrchestrator>,
    image_viewer: Arc<dyn ImageViewer>,
    session: SearchSession,
    results_view: Option<ResultsView>,
    staged_image: Option<ImageUpload>,
    summary_length: usize,
}

impl SearchApp {
    pub fn build(settings: &UserSettings) -> Result<Self> {
        log::info!("[APP] Initializing application");

        let transport = Arc::new(HttpSearchTransport::build(settings)?);
        let fallback_resolver = Arc::new(SimulatedFallbackResolver::new(settings.fallback_delay()));
        let orchestrator = SearchOrchestrator::build(transport, fallback_resolver);

        Ok(Self::build_with(
            orchestrator,
            Arc::new(BrowserImageViewer::new()),
            settings.summary_length,
        ))
    }

    pub fn build_with(
        orchestrator: SearchOrchestrator,
        image_viewer: Arc<dyn ImageViewer>,
        summary_length: usize,
    ) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
            image_viewer,
            session: SearchSession::new(),
            results_view: None,
            staged_image: None,
            summary_length,
        }
    }

    #[cfg(test)]
    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    /// Runs one search to completion and prints the outcome.
    pub async fn run_once(
        &mut self,
        query: Option<&str>,
        image_path: Option<&Path>,
        open_first_image: bool,
    ) -> Result<ExitCode> {
        let image = match image_path {
            Some(path) => Some(ImageUpload::load_from_path(path).await?),
            None => None,
        };

        let Some((ticket, request)) = self.session.submit(query, image) else {
            println!("{}", global_constants::USER_MESSAGE_NOTHING_TO_SEARCH);
            return Ok(ExitCode::from(2));
        };

        println!("{}", global_constants::USER_MESSAGE_SEARCHING);
        let output = self
            .execute(ticket, request, std::future::pending::<()>())
            .await;
        println!("{}", output);

        if open_first_image {
            if let Err(error) = self.open_current_image() {
                log::warn!("[APP] Unable to open image: {:#}", error);
                println!("[ERROR] {:#}", error);
            }
        }

        match self.session.state() {
            SearchState::Failed { .. } => Ok(ExitCode::FAILURE),
            _ => Ok(ExitCode::SUCCESS),
        }
    }

    pub async fn run_interactive(&mut self) -> Result<()> {
        println!("{}", global_constants::STARTUP_BANNER);

        self.run_prompt(BufReader::new(tokio::io::stdin()), wait_for_ctrl_c)
            .await?;

        log::info!("[APP] Exiting");
        Ok(())
    }

    /// Reads commands until `:quit`, end of input, or `interrupt` fires at the prompt.
    /// While a search runs, `interrupt` abandons it instead.
    pub async fn run_prompt<R, F, Fut>(&mut self, input: R, interrupt: F) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        F: Fn() -> Fut,
        Fut: Future<Output = ()>,
    {
        let mut lines = input.lines();

        loop {
            print!("{}> ", self.prompt_prefix());
            std::io::stdout().flush()?;

            let line = tokio::select! {
                line = lines.next_line() => line?,
                _ = interrupt() => {
                    log::info!("[PROMPT] Interrupted");
                    println!();
                    None
                }
            };

            let Some(line) = line else {
                log::info!("[PROMPT] Input closed");
                break;
            };

            let command = PromptCommand::parse(&line);
            log::debug!("[PROMPT] command: {:?}", command);

            match self.handle_command(command, interrupt()).await {
                PromptReply::Print(output) => {
                    if !output.is_empty() {
                        println!("{}", output);
                    }
                }
                PromptReply::Quit => break,
            }
        }

        Ok(())
    }

    fn prompt_prefix(&self) -> String {
        match &self.staged_image {
            Some(image) => format!("[{}] ", image.file_name),
            None => String::new(),
        }
    }

    /// `cancel` abandons a search that is still running when it completes.
    pub async fn handle_command(
        &mut self,
        command: PromptCommand,
        cancel: impl Future<Output = ()>,
    ) -> PromptReply {
        let output = match command {
            PromptCommand::Search(text) => {
                let image = self.staged_image.clone();
                self.search(Some(text.as_str()), image, cancel).await
            }
            PromptCommand::SearchImageOnly => {
                let image = self.staged_image.clone();
                self.search(None, image, cancel).await
            }
            PromptCommand::Retry => match self.session.retry() {
                Some((ticket, request)) => self.execute(ticket, request, cancel).await,
                None => "[INFO] Nothing to retry.".to_string(),
            },
            PromptCommand::StageImage(path) => match ImageUpload::load_from_path(&path).await {
                Ok(image) => {
                    let message = format!(
                        "[INFO] Staged {} ({}, {} bytes)",
                        image.file_name,
                        image.media_type,
                        image.size_bytes()
                    );
                    self.staged_image = Some(image);
                    message
                }
                Err(error) => format!("[ERROR] {:#}", error),
            },
            PromptCommand::ClearImage => {
                self.staged_image = None;
                "[INFO] Image cleared.".to_string()
            }
            PromptCommand::NextImage => self.navigate(ResultsViewMessage::NextImage),
            PromptCommand::PreviousImage => self.navigate(ResultsViewMessage::PreviousImage),
            PromptCommand::GoToImage(index) => self.navigate(ResultsViewMessage::GoToImage(index)),
            PromptCommand::OpenImage => match self.open_current_image() {
                Ok(()) => String::new(),
                Err(error) => format!("[ERROR] {:#}", error),
            },
            PromptCommand::ShowFullAnswer => match &self.results_view {
                Some(view) => view.render_full_answer(),
                None => "[INFO] No result yet.".to_string(),
            },
            PromptCommand::Help => global_constants::PROMPT_HELP.to_string(),
            PromptCommand::Quit => return PromptReply::Quit,
            PromptCommand::Empty => String::new(),
            PromptCommand::Unknown(input) => {
                format!("[INFO] Unknown command {}. Type :help for commands.", input)
            }
        };

        PromptReply::Print(output)
    }

    async fn search(
        &mut self,
        text: Option<&str>,
        image: Option<ImageUpload>,
        cancel: impl Future<Output = ()>,
    ) -> String {
        match self.session.submit(text, image) {
            Some((ticket, request)) => {
                println!("{}", global_constants::USER_MESSAGE_SEARCHING);
                self.execute(ticket, request, cancel).await
            }
            None => global_constants::USER_MESSAGE_NOTHING_TO_SEARCH.to_string(),
        }
    }

    async fn execute(
        &mut self,
        ticket: SearchTicket,
        request: SearchRequest,
        cancel: impl Future<Output = ()>,
    ) -> String {
        // The session is searching now, so this drops the previous result's view.
        self.refresh_results_view();
        let orchestrator = Arc::clone(&self.orchestrator);

        let finished = tokio::select! {
            outcome = orchestrator.run(&request) => {
                self.session.commit(ticket, outcome);
                true
            }
            _ = cancel => {
                self.session.abandon(ticket);
                false
            }
        };
        self.refresh_results_view();

        if finished {
            self.render_state()
        } else {
            global_constants::USER_MESSAGE_SEARCH_ABANDONED.to_string()
        }
    }

    /// Rebuilds the view from the session so it never shows a result the session dropped.
    fn refresh_results_view(&mut self) {
        self.results_view = self.session.result().map(|result| {
            ResultsView::build_with_result(
                self.session.title(),
                result.clone(),
                self.summary_length,
            )
        });
    }

    fn render_state(&self) -> String {
        match self.session.state() {
            SearchState::Succeeded { .. } => self
                .results_view
                .as_ref()
                .map(ResultsView::render_summary)
                .unwrap_or_default(),
            SearchState::Failed { error } => render_failure(error),
            SearchState::Searching { .. } => global_constants::USER_MESSAGE_SEARCHING.to_string(),
            SearchState::Idle => String::new(),
        }
    }

    fn navigate(&mut self, message: ResultsViewMessage) -> String {
        match self.results_view.as_mut() {
            Some(view) => {
                if !view.update(message) {
                    return "[INFO] No such image.".to_string();
                }
                view.render_summary()
            }
            None => "[INFO] No result yet.".to_string(),
        }
    }

    fn open_current_image(&self) -> Result<()> {
        let Some(image) = self
            .results_view
            .as_ref()
            .and_then(ResultsView::current_image)
        else {
            println!("[INFO] No image to open.");
            return Ok(());
        };

        self.image_viewer.show_image(&image.url)
    }
}

/// Completes on Ctrl+C. Never completes if the signal cannot be listened for.
async fn wait_for_ctrl_c() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        log::warn!("[PROMPT] Unable to listen for Ctrl+C: {}", error);
        std::future::pending::<()>().await;
    }
}
