//! TUI Spring (workspace facade crate).
//!
//! This package keeps a stable `tui_spring::{core,term,types}` public API
//! while the implementation lives in dedicated crates under `crates/`.

pub use tui_spring_core as core;
pub use tui_spring_term as term;
pub use tui_spring_types as types;
