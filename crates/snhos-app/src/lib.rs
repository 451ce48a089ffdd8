//! snhos-app - Application state and orchestration for SNH_OS
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! desktop: the shell and its sub-experiences, boot and crash screens,
//! toasts, the command palette, configuration loading and the joke fetch.
//! It has no terminal dependency; `snhos-tui` renders [`AppState`] and feeds
//! [`Message`]s back in.

pub mod actions;
pub mod boot;
pub mod config;
pub mod glitch;
pub mod handler;
pub mod input_key;
pub mod joke;
pub mod konami;
pub mod message;
pub mod modes;
pub mod palette;
pub mod process;
pub mod shell;
pub mod signals;
pub mod state;
pub mod toast;

// Re-export primary types
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use joke::{ConfiguredJokeSource, JokeSource};
pub use message::Message;
pub use state::AppState;
