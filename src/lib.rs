//! Terminal typing quiz (workspace facade crate).
//!
//! This package keeps a stable `tui_quiz::{core,bank,report,sound,input,term,types}`
//! public API while the implementation lives in dedicated crates under `crates/`.

pub use tui_quiz_bank as bank;
pub use tui_quiz_core as core;
pub use tui_quiz_input as input;
pub use tui_quiz_report as report;
pub use tui_quiz_sound as sound;
pub use tui_quiz_term as term;
pub use tui_quiz_types as types;
