//! Integration tests driving a whole SNH_OS session through the message loop
//!
//! Run with: cargo test --test session

use std::fs;
use std::sync::Arc;
use std::time::{Duration, Instant};

use snhos_app::config::{load_settings, Settings, SettingsOverrides};
use snhos_app::joke::{Joke, JokeError};
use snhos_app::modes::Mode;
use snhos_app::process::process_message;
use snhos_app::state::Screen;
use snhos_app::{AppState, InputKey, JokeSource, Message};
use snhos_core::Theme;
use tempfile::TempDir;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

// ─────────────────────────────────────────────────────────
// Test Harness
// ─────────────────────────────────────────────────────────

struct CannedJoke;

impl JokeSource for CannedJoke {
    async fn fetch(&self) -> Result<Joke, JokeError> {
        Ok(Joke {
            id: 42,
            kind: "programming".to_string(),
            setup: "Why do programmers prefer dark mode?".to_string(),
            punchline: "Because light attracts bugs.".to_string(),
        })
    }
}

struct Session {
    state: AppState,
    tx: mpsc::Sender<Message>,
    rx: mpsc::Receiver<Message>,
    source: Arc<CannedJoke>,
    tasks: Vec<JoinHandle<()>>,
}

impl Session {
    fn new(settings: Settings) -> Self {
        let (tx, rx) = mpsc::channel(16);
        Self {
            state: AppState::new(settings, Instant::now()),
            tx,
            rx,
            source: Arc::new(CannedJoke),
            tasks: Vec::new(),
        }
    }

    fn desktop() -> Self {
        let mut settings = Settings::default();
        settings.ui.skip_boot = true;
        Self::new(settings)
    }

    fn send(&mut self, message: Message) {
        process_message(
            &mut self.state,
            message,
            &self.tx,
            &self.source,
            &mut self.tasks,
        );
    }

    fn key(&mut self, key: InputKey) {
        self.send(Message::Key(key));
    }

    fn type_line(&mut self, line: &str) {
        for ch in line.chars() {
            self.key(InputKey::Char(ch));
        }
        self.key(InputKey::Enter);
    }

    fn advance(&mut self, by: Duration) {
        let now = self.state.now + by;
        self.send(Message::Tick(now));
    }

    fn last_lines(&self) -> Vec<String> {
        self.state
            .shell
            .entries()
            .last()
            .map(|e| e.lines.iter().map(|l| l.text()).collect())
            .unwrap_or_default()
    }
}

// ─────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_boot_then_explore_filesystem() {
    let mut session = Session::new(Settings::default());
    assert!(matches!(session.state.screen, Screen::Boot(_)));

    session.advance(Duration::from_millis(1600));
    session.advance(Duration::from_millis(900));
    assert!(session.state.screen.is_desktop());

    session.type_line("cd projects");
    session.type_line("pwd");
    assert_eq!(
        session.last_lines(),
        vec!["visitor@desktop:~/projects$ pwd", "/home/visitor/projects"]
    );
}

#[tokio::test]
async fn test_joke_arrives_through_channel() {
    let mut session = Session::desktop();
    session.type_line("joke");
    assert_eq!(session.tasks.len(), 1);

    let message = tokio::time::timeout(Duration::from_secs(5), session.rx.recv())
        .await
        .expect("joke result in time")
        .expect("channel open");
    session.send(message);

    let lines = session.last_lines();
    assert!(lines.contains(&"\"Why do programmers prefer dark mode?\"".to_string()));
    assert!(lines.contains(&"> Because light attracts bugs.".to_string()));
    assert!(lines.contains(&"[JOKE_ID: 42] [TYPE: PROGRAMMING]".to_string()));
}

#[tokio::test]
async fn test_crash_and_reboot_keeps_theme() {
    let mut session = Session::desktop();
    session.type_line("theme purple");
    assert_eq!(session.state.theme, Theme::Purple);

    session.type_line("sudo rm -rf /");
    assert!(matches!(session.state.screen, Screen::Crash));

    session.key(InputKey::Char('x'));
    assert!(matches!(session.state.screen, Screen::Boot(_)));
    assert_eq!(session.state.theme, Theme::Purple);
}

#[tokio::test]
async fn test_game_round_trip() {
    let mut session = Session::desktop();
    session.type_line("pong");
    assert!(matches!(session.state.shell.mode(), Mode::Pong(_)));

    session.advance(Duration::from_millis(100));
    session.key(InputKey::Esc);
    assert!(session.state.shell.mode().is_shell());
}

#[tokio::test]
async fn test_quit_stops_session() {
    let mut session = Session::desktop();
    session.key(InputKey::CharCtrl('q'));
    assert!(session.state.should_quit());
}

#[test]
fn test_config_file_and_cli_overrides() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[ui]
theme = "green"

[shell]
user = "guest"
"#,
    )
    .unwrap();

    let mut settings = load_settings(Some(&path));
    assert_eq!(settings.ui.theme, Theme::Green);
    assert_eq!(settings.shell.user, "guest");

    settings.apply(SettingsOverrides {
        theme: Some(Theme::Amber),
        skip_boot: true,
        user: None,
    });
    let state = AppState::new(settings, Instant::now());
    assert_eq!(state.theme, Theme::Amber);
    assert!(state.screen.is_desktop());
    assert_eq!(state.shell.prompt(), "guest@desktop:~$");
}

#[test]
fn test_malformed_config_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[ui\ntheme = ").unwrap();

    let settings = load_settings(Some(&path));
    assert_eq!(settings.ui.theme, Settings::default().ui.theme);
    assert_eq!(settings.shell.user, "visitor");
}
