//! Message types for the application (TEA pattern)

use std::time::Instant;

use snhos_core::{Severity, Theme};

use crate::input_key::InputKey;
use crate::joke::{Joke, JokeError};
use crate::palette::PaletteAction;
use crate::shell::output::EntryId;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Periodic tick carrying the current instant; drives every deadline
    Tick(Instant),

    /// Leave the application (Ctrl+Q)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Boot / Crash
    // ─────────────────────────────────────────────────────────
    /// Jump past the boot sequence
    SkipBoot,
    /// Show the blue screen
    Crash,
    /// Back to the boot screen with a fresh desktop
    Reboot,

    // ─────────────────────────────────────────────────────────
    // Terminal
    // ─────────────────────────────────────────────────────────
    /// Key for the shell prompt
    ShellKey(InputKey),
    /// Key for the active sub-experience (editor, game, matrix)
    ModeKey(InputKey),
    /// Background joke fetch finished
    JokeFetched {
        entry: EntryId,
        result: Result<Joke, JokeError>,
    },

    // ─────────────────────────────────────────────────────────
    // Desktop
    // ─────────────────────────────────────────────────────────
    /// Move focus between the terminal and the sections panel
    ToggleFocus,
    NextSection,
    PrevSection,
    /// Move the project highlight by the given amount
    SelectProject(isize),
    OpenBlueprint,
    CloseBlueprint,
    ChangeTheme(Theme),
    ToggleGodMode,

    // ─────────────────────────────────────────────────────────
    // Palette / Toasts
    // ─────────────────────────────────────────────────────────
    TogglePalette,
    PaletteKey(InputKey),
    RunPaletteAction(PaletteAction),
    ShowToast {
        title: String,
        message: String,
        severity: Severity,
    },
    /// Remove the newest toast
    DismissToast,
}
