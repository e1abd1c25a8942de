//! Search pipeline for villemeteo: state transitions, orchestration and text
//! rendering of results.

pub mod render;
pub mod session;
pub mod state;

pub use render::{population_label, render_record};
pub use session::{SearchOutcome, Session};
pub use state::{SearchGeneration, SearchPhase, SearchState};
