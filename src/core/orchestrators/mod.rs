mod search_orchestrator;
mod search_session;

pub use search_orchestrator::SearchOrchestrator;
pub use search_session::{SearchSession, SearchState, SearchTicket};
