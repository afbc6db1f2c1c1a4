//! Falling-word vocabulary game (workspace facade crate).
//!
//! This package keeps a stable `tui_wordfall::{core,dataset,sim,term,types}`
//! public API while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_wordfall_core as core;
pub use tui_wordfall_dataset as dataset;
pub use tui_wordfall_sim as sim;
pub use tui_wordfall_term as term;
pub use tui_wordfall_types as types;
