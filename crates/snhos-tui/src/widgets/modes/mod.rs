//! Views for the modes that take over the terminal panel

mod editor;
mod hacking;
mod matrix;
mod pong;
mod runner;

pub use editor::{NanoView, VimView};
pub use hacking::HackingView;
pub use matrix::MatrixView;
pub use pong::PongView;
pub use runner::RunnerView;
