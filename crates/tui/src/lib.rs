//! Interactive terminal UI for the `bemine` greeting flow.
//!
//! Renders one screen per flow step and forwards user gestures to the
//! [`FlowController`](bemine_flow::FlowController). All flow logic lives in
//! `bemine-flow`; this crate only draws and translates key presses.

mod actions;
mod app;
mod input;
mod render;
mod runtime;
#[cfg(test)]
mod screen_tests;
mod theme;

pub use app::App;
pub use runtime::run;
pub use theme::Theme;
