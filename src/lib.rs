//! `bemine` — a terminal valentine greeting.
//!
//! The flow logic lives in [`bemine_flow`] and the ratatui front end in
//! [`bemine_tui`]; this crate hosts the binary and the directory plumbing
//! it needs.

pub mod app_dirs;

pub use bemine_flow as flow;
pub use bemine_tui as tui;
