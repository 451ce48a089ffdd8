//! Sub-experiences that take over the terminal panel.
//!
//! Exactly one [`Mode`] is active at a time. Each variant owns its state, so
//! leaving a mode drops its buffers, timers and RNG with it.
//!
//! - `hacking`: RobCo password terminal
//! - `matrix`: digital rain
//! - `vim` / `nano`: toy editors over a [`buffer::TextBuffer`]
//! - `runner`: lane runner
//! - `pong`: pong against the AI

pub mod buffer;
pub mod hacking;
pub mod matrix;
pub mod nano;
pub mod pong;
pub mod runner;
pub mod vim;

use std::time::Instant;

use crate::input_key::InputKey;

pub use hacking::HackingGame;
pub use matrix::MatrixRain;
pub use nano::NanoEditor;
pub use pong::PongGame;
pub use runner::RunnerGame;
pub use vim::VimEditor;

/// What a mode asks of the shell after a key or tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeSignal {
    Continue,
    /// Return to the shell
    Exit,
    /// Return to the shell after winning (hacking)
    Won,
}

#[derive(Debug, Default)]
pub enum Mode {
    #[default]
    Shell,
    Hacking(HackingGame),
    Matrix(MatrixRain),
    Vim(VimEditor),
    Nano(NanoEditor),
    Runner(RunnerGame),
    Pong(PongGame),
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Shell => "shell",
            Mode::Hacking(_) => "hack",
            Mode::Matrix(_) => "matrix",
            Mode::Vim(_) => "vim",
            Mode::Nano(_) => "nano",
            Mode::Runner(_) => "runner",
            Mode::Pong(_) => "pong",
        }
    }

    pub fn is_shell(&self) -> bool {
        matches!(self, Mode::Shell)
    }

    pub fn handle_key(&mut self, key: &InputKey, now: Instant) -> ModeSignal {
        match self {
            Mode::Shell => ModeSignal::Continue,
            Mode::Hacking(game) => game.handle_key(key, now),
            Mode::Matrix(rain) => rain.handle_key(key),
            Mode::Vim(editor) => editor.handle_key(key, now),
            Mode::Nano(editor) => editor.handle_key(key),
            Mode::Runner(game) => game.handle_key(key, now),
            Mode::Pong(game) => game.handle_key(key, now),
        }
    }

    pub fn tick(&mut self, now: Instant) -> ModeSignal {
        match self {
            Mode::Shell | Mode::Nano(_) => ModeSignal::Continue,
            Mode::Hacking(game) => game.tick(now),
            Mode::Matrix(rain) => rain.tick(now),
            Mode::Vim(editor) => editor.tick(now),
            Mode::Runner(game) => game.tick(now),
            Mode::Pong(game) => game.tick(now),
        }
    }
}
