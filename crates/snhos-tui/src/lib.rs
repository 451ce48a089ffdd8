//! snhos-tui - Terminal UI for SNH_OS
//!
//! This crate provides the ratatui-based front end. It owns the terminal,
//! polls crossterm for keys, feeds [`snhos_app::Message`]s through the TEA
//! loop in `snhos-app` and draws [`snhos_app::AppState`] every frame.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
