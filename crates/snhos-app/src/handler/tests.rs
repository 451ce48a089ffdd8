//! Tests for handler module

use std::time::{Duration, Instant};

use snhos_core::Theme;

use super::*;
use crate::config::Settings;
use crate::input_key::InputKey;
use crate::konami::SEQUENCE;
use crate::message::Message;
use crate::modes::Mode;
use crate::palette::PaletteAction;
use crate::state::{AppState, Focus, Screen, Section};

fn desktop() -> AppState {
    let mut settings = Settings::default();
    settings.ui.skip_boot = true;
    AppState::new(settings, Instant::now())
}

/// Run a message and every follow-up, collecting actions
fn process(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update(state, m);
        actions.extend(result.action);
        msg = result.message;
    }
    actions
}

fn press(state: &mut AppState, key: InputKey) -> Vec<UpdateAction> {
    process(state, Message::Key(key))
}

fn type_line(state: &mut AppState, line: &str) -> Vec<UpdateAction> {
    for ch in line.chars() {
        press(state, InputKey::Char(ch));
    }
    press(state, InputKey::Enter)
}

fn tick(state: &mut AppState, after: Duration) {
    let now = state.now + after;
    process(state, Message::Tick(now));
}

#[test]
fn test_ctrl_q_quits_from_any_screen() {
    let mut state = AppState::new(Settings::default(), Instant::now());
    assert!(matches!(state.screen, Screen::Boot(_)));
    press(&mut state, InputKey::CharCtrl('q'));
    assert!(state.should_quit());
}

#[test]
fn test_boot_skip_keys() {
    for key in [InputKey::Enter, InputKey::Esc, InputKey::Char(' ')] {
        let mut state = AppState::new(Settings::default(), Instant::now());
        press(&mut state, key);
        assert!(state.screen.is_desktop());
    }
}

#[test]
fn test_other_keys_do_not_skip_boot() {
    let mut state = AppState::new(Settings::default(), Instant::now());
    press(&mut state, InputKey::Char('x'));
    assert!(matches!(state.screen, Screen::Boot(_)));
}

#[test]
fn test_boot_completes_on_ticks() {
    let mut state = AppState::new(Settings::default(), Instant::now());
    tick(&mut state, Duration::from_millis(1500));
    assert!(matches!(state.screen, Screen::Boot(_)));
    tick(&mut state, Duration::from_millis(800));
    assert!(state.screen.is_desktop());
}

#[test]
fn test_typing_reaches_shell() {
    let mut state = desktop();
    type_line(&mut state, "cd projects");
    assert_eq!(state.shell.location(), "~/projects");
}

#[test]
fn test_destructive_command_crashes_then_any_key_reboots() {
    let mut state = desktop();
    type_line(&mut state, "sudo rm -rf /");
    assert!(matches!(state.screen, Screen::Crash));

    press(&mut state, InputKey::Char('z'));
    assert!(matches!(state.screen, Screen::Boot(_)));
    // fresh shell after reboot
    assert_eq!(state.shell.history().count(), 0);
}

#[test]
fn test_theme_command_changes_theme_and_toasts() {
    let mut state = desktop();
    type_line(&mut state, "theme purple");
    assert_eq!(state.theme, Theme::Purple);
    let toast = state.toasts.toasts().last().unwrap();
    assert_eq!(toast.title, "Theme Updated");
    assert_eq!(toast.message, "Neon protocol loaded.");
}

#[test]
fn test_reboot_command_fires_after_delay() {
    let mut state = desktop();
    type_line(&mut state, "reboot");
    assert!(state.screen.is_desktop());

    tick(&mut state, Duration::from_millis(500));
    assert!(state.screen.is_desktop());
    tick(&mut state, Duration::from_millis(500));
    assert!(matches!(state.screen, Screen::Boot(_)));
    assert!(state.reboot_at.is_none());
}

#[test]
fn test_theme_survives_reboot() {
    let mut state = desktop();
    type_line(&mut state, "theme green");
    process(&mut state, Message::Reboot);
    assert_eq!(state.theme, Theme::Green);
}

#[test]
fn test_joke_command_requests_fetch() {
    let mut state = desktop();
    let actions = type_line(&mut state, "joke");
    assert_eq!(actions.len(), 1);
    let UpdateAction::FetchJoke { entry } = actions[0];
    assert_eq!(state.shell.entries().last().map(|e| e.id), Some(entry));
}

#[test]
fn test_joke_result_updates_entry() {
    let mut state = desktop();
    let actions = type_line(&mut state, "joke");
    let UpdateAction::FetchJoke { entry } = actions[0];

    process(
        &mut state,
        Message::JokeFetched {
            entry,
            result: Err(crate::joke::JokeError::Status(503)),
        },
    );
    let last = state.shell.entries().last().unwrap();
    assert_eq!(
        last.lines.last().unwrap().text(),
        "Error: 404 Humor Not Found. Connection terminated."
    );
}

#[test]
fn test_mode_keys_go_to_active_mode() {
    let mut state = desktop();
    type_line(&mut state, "vim");
    assert!(matches!(state.shell.mode(), Mode::Vim(_)));

    assert!(matches!(
        handle_key(&state, InputKey::Char('i')),
        Some(Message::ModeKey(InputKey::Char('i')))
    ));

    for ch in ":q".chars() {
        press(&mut state, InputKey::Char(ch));
    }
    press(&mut state, InputKey::Enter);
    assert!(state.shell.mode().is_shell());
}

#[test]
fn test_tab_toggles_focus() {
    let mut state = desktop();
    press(&mut state, InputKey::Tab);
    assert_eq!(state.focus, Focus::Sections);
    press(&mut state, InputKey::Tab);
    assert_eq!(state.focus, Focus::Terminal);
}

#[test]
fn test_sections_navigation_and_blueprint() {
    let mut state = desktop();
    press(&mut state, InputKey::Tab);
    press(&mut state, InputKey::Right);
    assert_eq!(state.section, Section::Experience);
    press(&mut state, InputKey::Right);
    assert_eq!(state.section, Section::Projects);

    press(&mut state, InputKey::Down);
    assert_eq!(state.selected_project, 1);
    press(&mut state, InputKey::Enter);
    assert_eq!(state.blueprint, Some(1));

    // blueprint swallows navigation
    press(&mut state, InputKey::Right);
    assert_eq!(state.section, Section::Projects);
    press(&mut state, InputKey::Esc);
    assert_eq!(state.blueprint, None);
}

#[test]
fn test_enter_outside_projects_does_nothing() {
    let mut state = desktop();
    press(&mut state, InputKey::Tab);
    press(&mut state, InputKey::Enter);
    assert_eq!(state.blueprint, None);
}

#[test]
fn test_palette_open_filter_run() {
    let mut state = desktop();
    press(&mut state, InputKey::CharCtrl('k'));
    assert!(state.palette.is_some());

    for ch in "matrix".chars() {
        press(&mut state, InputKey::Char(ch));
    }
    press(&mut state, InputKey::Enter);
    assert!(state.palette.is_none());
    assert_eq!(state.theme, Theme::Green);
    // typed characters went to the palette, not the shell
    assert_eq!(state.shell.input(), "");
}

#[test]
fn test_palette_escape_closes() {
    let mut state = desktop();
    press(&mut state, InputKey::CharCtrl('k'));
    press(&mut state, InputKey::Esc);
    assert!(state.palette.is_none());
}

#[test]
fn test_palette_navigate_focuses_sections() {
    let mut state = desktop();
    process(
        &mut state,
        Message::RunPaletteAction(PaletteAction::Navigate(Section::Skills)),
    );
    assert_eq!(state.section, Section::Skills);
    assert_eq!(state.focus, Focus::Sections);
}

#[test]
fn test_download_resume_shows_two_toasts() {
    let mut state = desktop();
    process(
        &mut state,
        Message::RunPaletteAction(PaletteAction::DownloadResume),
    );
    assert_eq!(state.toasts.toasts().len(), 1);
    assert_eq!(state.toasts.toasts()[0].title, "System");

    tick(&mut state, Duration::from_millis(1500));
    let titles: Vec<_> = state.toasts.toasts().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["System", "Download"]);
}

#[test]
fn test_copy_email_toast_carries_address() {
    let mut state = desktop();
    process(&mut state, Message::RunPaletteAction(PaletteAction::CopyEmail));
    let email = state.catalog().personal.email;
    assert!(state.toasts.toasts()[0].message.contains(email));
}

#[test]
fn test_toasts_expire_on_tick() {
    let mut state = desktop();
    process(&mut state, Message::ChangeTheme(Theme::Amber));
    assert_eq!(state.toasts.toasts().len(), 1);
    tick(&mut state, Duration::from_millis(4000));
    assert!(state.toasts.is_empty());
}

#[test]
fn test_ctrl_x_dismisses_newest_toast() {
    let mut state = desktop();
    process(&mut state, Message::ChangeTheme(Theme::Green));
    press(&mut state, InputKey::CharCtrl('x'));
    assert!(state.toasts.is_empty());
}

#[test]
fn test_ctrl_x_in_nano_exits_editor() {
    let mut state = desktop();
    process(&mut state, Message::ChangeTheme(Theme::Green));
    type_line(&mut state, "nano");
    press(&mut state, InputKey::CharCtrl('x'));
    assert!(state.shell.mode().is_shell());
    assert_eq!(state.toasts.toasts().len(), 1);
}

#[test]
fn test_konami_toggles_god_mode() {
    let mut state = desktop();
    for key in SEQUENCE {
        press(&mut state, key);
    }
    assert!(state.god_mode);
    assert_eq!(
        state.toasts.toasts().last().unwrap().title,
        "GOD MODE ACTIVATED"
    );

    for key in SEQUENCE {
        press(&mut state, key);
    }
    assert!(!state.god_mode);
}

#[test]
fn test_konami_ignored_during_boot() {
    let mut state = AppState::new(Settings::default(), Instant::now());
    for key in SEQUENCE {
        press(&mut state, key);
    }
    assert!(!state.god_mode);
}

#[test]
fn test_ticks_advance_scripts() {
    let mut state = desktop();
    type_line(&mut state, "scan");
    tick(&mut state, Duration::from_millis(4000));
    let last = state.shell.entries().last().unwrap();
    assert_eq!(
        last.lines.last().unwrap().text(),
        "Scan complete. System integrity: 100%"
    );
}
