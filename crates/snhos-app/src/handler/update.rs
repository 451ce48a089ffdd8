//! Main update function - handles state transitions (TEA pattern)

use std::time::Duration;

use snhos_core::Severity;
use tracing::{debug, warn};

use crate::message::Message;
use crate::palette::{CommandPalette, PaletteAction, PaletteOutcome};
use crate::shell::ShellEffect;
use crate::state::{AppState, Focus, Screen, REBOOT_DELAY};

use super::{keys::handle_key, UpdateResult};

/// Delay between the resume "download" toast and its completion toast
const RESUME_DELAY: Duration = Duration::from_millis(1500);

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            // god mode listens to every key on the desktop, whoever handles it
            if state.screen.is_desktop() && state.konami.observe(&key) {
                state.toggle_god_mode();
            }
            match handle_key(state, key) {
                Some(msg) => UpdateResult::follow_up(msg),
                None => UpdateResult::none(),
            }
        }

        Message::Tick(now) => handle_tick(state, now),

        // ─────────────────────────────────────────────────────────
        // Boot / Crash
        // ─────────────────────────────────────────────────────────
        Message::SkipBoot => {
            state.finish_boot();
            UpdateResult::none()
        }

        Message::Crash => {
            state.crash();
            UpdateResult::none()
        }

        Message::Reboot => {
            state.reboot();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Terminal
        // ─────────────────────────────────────────────────────────
        Message::ShellKey(key) => {
            let now = state.now;
            match state.shell.handle_key(&key, now) {
                Some(effect) => handle_shell_effect(state, effect),
                None => UpdateResult::none(),
            }
        }

        Message::ModeKey(key) => {
            let now = state.now;
            state.shell.handle_mode_key(&key, now);
            UpdateResult::none()
        }

        Message::JokeFetched { entry, result } => {
            if let Err(e) = &result {
                warn!("Joke fetch failed: {}", e);
            }
            state.shell.apply_joke(entry, result);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Desktop
        // ─────────────────────────────────────────────────────────
        Message::ToggleFocus => {
            state.focus = match state.focus {
                Focus::Terminal => Focus::Sections,
                Focus::Sections => Focus::Terminal,
            };
            UpdateResult::none()
        }

        Message::NextSection => {
            state.section = state.section.next();
            UpdateResult::none()
        }

        Message::PrevSection => {
            state.section = state.section.prev();
            UpdateResult::none()
        }

        Message::SelectProject(delta) => {
            state.select_project(delta);
            UpdateResult::none()
        }

        Message::OpenBlueprint => {
            if state.selected_project < state.project_count() {
                state.blueprint = Some(state.selected_project);
            }
            UpdateResult::none()
        }

        Message::CloseBlueprint => {
            state.blueprint = None;
            UpdateResult::none()
        }

        Message::ChangeTheme(theme) => {
            state.set_theme(theme);
            UpdateResult::none()
        }

        Message::ToggleGodMode => {
            state.toggle_god_mode();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Palette / Toasts
        // ─────────────────────────────────────────────────────────
        Message::TogglePalette => {
            state.palette = match state.palette {
                Some(_) => None,
                None => Some(CommandPalette::new()),
            };
            UpdateResult::none()
        }

        Message::PaletteKey(key) => {
            let Some(palette) = state.palette.as_mut() else {
                return UpdateResult::none();
            };
            match palette.handle_key(&key) {
                PaletteOutcome::Continue => UpdateResult::none(),
                PaletteOutcome::Close => {
                    state.palette = None;
                    UpdateResult::none()
                }
                PaletteOutcome::Run(action) => {
                    state.palette = None;
                    UpdateResult::follow_up(Message::RunPaletteAction(action))
                }
            }
        }

        Message::RunPaletteAction(action) => handle_palette_action(state, action),

        Message::ShowToast {
            title,
            message,
            severity,
        } => {
            state.show_toast(&title, &message, severity);
            UpdateResult::none()
        }

        Message::DismissToast => {
            state.toasts.dismiss_newest();
            UpdateResult::none()
        }
    }
}

fn handle_tick(state: &mut AppState, now: std::time::Instant) -> UpdateResult {
    state.now = now;
    state.toasts.tick(now);

    if let Screen::Boot(boot) = &mut state.screen {
        if boot.tick(now) {
            debug!("Boot sequence complete");
            state.finish_boot();
        }
        return UpdateResult::none();
    }

    if let Some(at) = state.reboot_at {
        if now >= at {
            return UpdateResult::follow_up(Message::Reboot);
        }
    }

    if state.screen.is_desktop() {
        state.glitch.tick(now);
        state.shell.tick(now);
    }
    UpdateResult::none()
}

fn handle_shell_effect(state: &mut AppState, effect: ShellEffect) -> UpdateResult {
    match effect {
        ShellEffect::Crash => UpdateResult::follow_up(Message::Crash),
        ShellEffect::ChangeTheme(theme) => UpdateResult::follow_up(Message::ChangeTheme(theme)),
        ShellEffect::ScheduleReboot => {
            state.reboot_at = Some(state.now + REBOOT_DELAY);
            UpdateResult::none()
        }
        ShellEffect::FetchJoke(entry) => UpdateResult::fetch_joke(entry),
    }
}

fn handle_palette_action(state: &mut AppState, action: PaletteAction) -> UpdateResult {
    match action {
        PaletteAction::Navigate(section) => {
            state.section = section;
            state.focus = Focus::Sections;
            UpdateResult::none()
        }
        PaletteAction::SetTheme(theme) => UpdateResult::follow_up(Message::ChangeTheme(theme)),
        PaletteAction::CopyEmail => {
            let email = state.catalog().personal.email;
            state.show_toast(
                "Clipboard",
                &format!("Email address copied: {email}"),
                Severity::Info,
            );
            UpdateResult::none()
        }
        PaletteAction::DownloadResume => {
            state.show_toast("System", "Initiating file transfer protocol...", Severity::Info);
            state.toasts.schedule(
                RESUME_DELAY,
                "Download",
                "Resume file transfer complete (Simulated).",
                Severity::Info,
                state.now,
            );
            UpdateResult::none()
        }
    }
}
