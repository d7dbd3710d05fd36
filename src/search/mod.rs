mod orchestrator;
mod session;

pub use orchestrator::SearchOrchestrator;
pub use session::{SearchSession, SearchSnapshot, SearchState};
