//! Key event handlers for the different screens

use crate::input_key::InputKey;
use crate::message::Message;
use crate::modes::Mode;
use crate::state::{AppState, Focus, Screen, Section};

/// Convert key events to messages based on the current screen and overlays
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Quit works everywhere
    if key == InputKey::CharCtrl('q') {
        return Some(Message::Quit);
    }

    match &state.screen {
        Screen::Boot(_) => handle_key_boot(key),
        Screen::Crash => Some(Message::Reboot),
        Screen::Desktop => handle_key_desktop(state, key),
    }
}

/// Enter, Esc or Space skip the boot sequence
fn handle_key_boot(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Esc | InputKey::Char(' ') => Some(Message::SkipBoot),
        _ => None,
    }
}

fn handle_key_desktop(state: &AppState, key: InputKey) -> Option<Message> {
    // Overlays take the keyboard first
    if state.palette.is_some() {
        return Some(Message::PaletteKey(key));
    }
    if key == InputKey::CharCtrl('k') {
        return Some(Message::TogglePalette);
    }
    if state.blueprint.is_some() {
        return match key {
            InputKey::Esc | InputKey::Enter => Some(Message::CloseBlueprint),
            _ => None,
        };
    }

    let in_nano = matches!(state.shell.mode(), Mode::Nano(_));
    match key {
        // nano owns Ctrl+X while it is open
        InputKey::CharCtrl('x') if !in_nano && !state.toasts.is_empty() => {
            Some(Message::DismissToast)
        }
        InputKey::Tab | InputKey::BackTab => Some(Message::ToggleFocus),
        key => match state.focus {
            Focus::Terminal => Some(handle_key_terminal(state, key)),
            Focus::Sections => handle_key_sections(state, key),
        },
    }
}

fn handle_key_terminal(state: &AppState, key: InputKey) -> Message {
    if state.shell.mode().is_shell() {
        Message::ShellKey(key)
    } else {
        Message::ModeKey(key)
    }
}

fn handle_key_sections(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Left | InputKey::Char('h') => Some(Message::PrevSection),
        InputKey::Right | InputKey::Char('l') => Some(Message::NextSection),
        InputKey::Up | InputKey::Char('k') if state.section == Section::Projects => {
            Some(Message::SelectProject(-1))
        }
        InputKey::Down | InputKey::Char('j') if state.section == Section::Projects => {
            Some(Message::SelectProject(1))
        }
        InputKey::Enter if state.section == Section::Projects => Some(Message::OpenBlueprint),
        _ => None,
    }
}
