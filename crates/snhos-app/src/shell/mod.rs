//! The fake shell: session state, line editing and command dispatch.
//!
//! The shell owns the active [`Mode`]. Commands such as `vim` or `game pong`
//! swap the mode in; the mode hands control back with [`ModeSignal::Exit`].
//! Nothing in here spawns timers: scripted output and the train advance on
//! [`Shell::tick`].

pub mod commands;
pub mod output;
pub mod script;

use std::collections::VecDeque;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use snhos_core::{ContentCatalog, Theme, VirtualFs};
use tracing::{debug, info};

use crate::input_key::InputKey;
use crate::joke::{Joke, JokeError};
use crate::modes::{Mode, ModeSignal};
use commands::{Invocation, Response};
use output::{EntryId, LiveOutput, OutputLine, ShellEntry, Tone};

/// Lines that crash the whole desktop
const DESTRUCTIVE: [&str; 2] = ["sudo rm -rf /", "sudo rm -rf /*"];

/// Entries kept in the scrollback; older ones are dropped with their live output
pub const MAX_ENTRIES: usize = 1000;

/// Commands bound to F1..F7 in the quick-run bar
pub const QUICK_RUN: [&str; 7] = ["ls", "scan", "ping google.com", "game", "deploy", "top", "help"];

/// App-level consequences of a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEffect {
    /// Show the crash screen
    Crash,
    ChangeTheme(Theme),
    /// Return to the boot screen after a short delay
    ScheduleReboot,
    /// Fetch a joke for the given entry
    FetchJoke(EntryId),
}

#[derive(Debug)]
pub struct Shell {
    fs: VirtualFs,
    catalog: ContentCatalog,
    /// Directory names below `~`
    cwd: Vec<String>,
    user: String,
    host: String,
    /// Newest first
    history: VecDeque<String>,
    history_cursor: Option<usize>,
    input: String,
    entries: Vec<ShellEntry>,
    next_entry: EntryId,
    mode: Mode,
    booted_at: Instant,
    pub(crate) rng: StdRng,
}

impl Shell {
    pub fn new(catalog: ContentCatalog, user: &str, host: &str, now: Instant) -> Self {
        let mut shell = Self {
            fs: VirtualFs::build(&catalog),
            catalog,
            cwd: Vec::new(),
            user: user.to_string(),
            host: host.to_string(),
            history: VecDeque::new(),
            history_cursor: None,
            input: String::new(),
            entries: Vec::new(),
            next_entry: 0,
            mode: Mode::Shell,
            booted_at: now,
            rng: StdRng::from_entropy(),
        };
        shell.push_entry(welcome_lines(), None);
        shell
    }

    /// Replace the random source, for reproducible tests
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    // ─────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────

    pub fn fs(&self) -> &VirtualFs {
        &self.fs
    }

    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    pub fn cwd(&self) -> &[String] {
        &self.cwd
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn entries(&self) -> &[ShellEntry] {
        &self.entries
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Mutable access for views that size the mode to the panel
    pub fn mode_mut(&mut self) -> &mut Mode {
        &mut self.mode
    }

    /// Command history, oldest first
    pub fn history(&self) -> impl Iterator<Item = &str> {
        self.history.iter().rev().map(String::as_str)
    }

    /// Whole minutes since the shell started
    pub fn uptime_minutes(&self, now: Instant) -> u64 {
        now.saturating_duration_since(self.booted_at).as_secs() / 60
    }

    /// `~` at the root, `~/<dir>` below it
    pub fn location(&self) -> String {
        match self.cwd.last() {
            Some(dir) => format!("~/{dir}"),
            None => "~".to_string(),
        }
    }

    pub fn prompt(&self) -> String {
        format!("{}@{}:{}$", self.user, self.host, self.location())
    }

    // ─────────────────────────────────────────────────────────
    // Session mutation used by handlers
    // ─────────────────────────────────────────────────────────

    pub(crate) fn set_cwd(&mut self, cwd: Vec<String>) {
        self.cwd = cwd;
    }

    pub(crate) fn set_user(&mut self, user: &str) {
        self.user = user.to_string();
    }

    // ─────────────────────────────────────────────────────────
    // Line editing
    // ─────────────────────────────────────────────────────────

    pub fn insert_char(&mut self, ch: char) {
        self.input.push(ch);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn history_up(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let next = match self.history_cursor {
            None => 0,
            Some(idx) => (idx + 1).min(self.history.len() - 1),
        };
        self.history_cursor = Some(next);
        self.input = self.history[next].clone();
    }

    pub fn history_down(&mut self) {
        match self.history_cursor {
            Some(0) => {
                self.history_cursor = None;
                self.input.clear();
            }
            Some(idx) => {
                self.history_cursor = Some(idx - 1);
                self.input = self.history[idx - 1].clone();
            }
            None => {}
        }
    }

    /// Ctrl+C: echo the abandoned line with `^C` and start over
    pub fn interrupt(&mut self) {
        let line = self.echo_line(&format!("{}^C", self.input));
        self.push_entry(vec![line], None);
        self.input.clear();
        self.history_cursor = None;
    }

    /// Keys typed while the shell itself is active
    pub fn handle_key(&mut self, key: &InputKey, now: Instant) -> Option<ShellEffect> {
        match key {
            InputKey::Enter => return self.submit(now),
            InputKey::Backspace => self.backspace(),
            InputKey::Up => self.history_up(),
            InputKey::Down => self.history_down(),
            InputKey::CharCtrl('c') => self.interrupt(),
            InputKey::F(n @ 1..=7) => {
                return self.execute(QUICK_RUN[usize::from(*n) - 1], now);
            }
            // completion is not supported; swallow it
            InputKey::Tab => {}
            other => {
                if let Some(ch) = other.printable() {
                    self.insert_char(ch);
                }
            }
        }
        None
    }

    /// Enter: record and run the current input
    pub fn submit(&mut self, now: Instant) -> Option<ShellEffect> {
        let line = std::mem::take(&mut self.input);
        self.history_cursor = None;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        self.history.push_front(trimmed.to_string());
        self.execute(trimmed, now)
    }

    // ─────────────────────────────────────────────────────────
    // Dispatch
    // ─────────────────────────────────────────────────────────

    /// Run one command line without touching history
    pub fn execute(&mut self, line: &str, now: Instant) -> Option<ShellEffect> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        if DESTRUCTIVE.contains(&line) {
            info!("Destructive command entered, crashing");
            return Some(ShellEffect::Crash);
        }

        let invocation = Invocation::parse(line, now);
        debug!(command = %invocation.name, "Dispatching shell command");

        let response = match commands::lookup(&invocation.name) {
            Some(spec) => (spec.handler)(self, &invocation),
            None => Response::error(format!("Command not found: '{line}'. Type 'help'.")),
        };

        self.apply(line, response)
    }

    fn apply(&mut self, line: &str, response: Response) -> Option<ShellEffect> {
        let Response {
            lines,
            live,
            effect,
            mode,
            clear,
        } = response;

        if clear {
            // dropping the entries drops their players
            self.entries.clear();
            return effect;
        }

        let mut all = Vec::with_capacity(lines.len() + 1);
        all.push(self.echo_line(line));
        all.extend(lines);

        let live = live.map(|live| match live {
            LiveOutput::Joke { placeholder } => LiveOutput::Joke {
                placeholder: placeholder + 1,
            },
            other => other,
        });
        let is_joke = matches!(live, Some(LiveOutput::Joke { .. }));
        let id = self.push_entry(all, live);

        if let Some(mode) = mode {
            self.enter_mode(mode);
        }

        if is_joke {
            return Some(ShellEffect::FetchJoke(id));
        }
        effect
    }

    fn enter_mode(&mut self, mode: Mode) {
        info!(mode = mode.name(), "Entering mode");
        for entry in &mut self.entries {
            if let Some(LiveOutput::Script(player)) = &mut entry.live {
                player.cancel();
            }
        }
        self.mode = mode;
    }

    fn leave_mode(&mut self) {
        info!(mode = self.mode.name(), "Leaving mode");
        self.mode = Mode::Shell;
    }

    fn echo_line(&self, line: &str) -> OutputLine {
        OutputLine::success(self.prompt())
            .bold()
            .then(Tone::Bright, format!(" {line}"))
    }

    fn push_entry(&mut self, lines: Vec<OutputLine>, live: Option<LiveOutput>) -> EntryId {
        let id = self.next_entry;
        self.next_entry += 1;
        self.entries.push(ShellEntry { id, lines, live });
        if self.entries.len() > MAX_ENTRIES {
            let excess = self.entries.len() - MAX_ENTRIES;
            self.entries.drain(..excess);
        }
        id
    }

    // ─────────────────────────────────────────────────────────
    // Time and modes
    // ─────────────────────────────────────────────────────────

    /// Keys while a sub-experience is active
    pub fn handle_mode_key(&mut self, key: &InputKey, now: Instant) {
        let signal = self.mode.handle_key(key, now);
        self.apply_signal(signal);
    }

    fn apply_signal(&mut self, signal: ModeSignal) {
        match signal {
            ModeSignal::Continue => {}
            ModeSignal::Exit => self.leave_mode(),
            ModeSignal::Won => {
                self.leave_mode();
                self.push_entry(
                    vec![OutputLine::success("ACCESS GRANTED. Welcome, admin.").bold()],
                    None,
                );
            }
        }
    }

    /// Advance scripts, the train and the active mode
    pub fn tick(&mut self, now: Instant) {
        for entry in &mut self.entries {
            let done = match &mut entry.live {
                Some(LiveOutput::Script(player)) => {
                    entry.lines.extend(player.advance(now));
                    player.is_finished()
                }
                Some(LiveOutput::Train(ride)) => !ride.advance(now),
                _ => false,
            };
            if done {
                entry.live = None;
            }
        }

        let signal = self.mode.tick(now);
        self.apply_signal(signal);
    }

    /// Fill in a joke placeholder. Returns `false` when the entry is gone.
    pub fn apply_joke(&mut self, id: EntryId, result: Result<Joke, JokeError>) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) else {
            debug!(entry = id, "Joke arrived for a cleared entry");
            return false;
        };
        let Some(LiveOutput::Joke { placeholder }) = entry.live else {
            return false;
        };

        entry.lines.truncate(placeholder);
        match result {
            Ok(joke) => {
                entry.lines.push(OutputLine::plain(format!("\"{}\"", joke.setup)));
                entry
                    .lines
                    .push(OutputLine::secondary(format!("> {}", joke.punchline)).bold());
                entry.lines.push(OutputLine::faint(format!(
                    "[JOKE_ID: {}] [TYPE: {}]",
                    joke.id,
                    joke.kind.to_uppercase()
                )));
            }
            Err(_) => entry.lines.push(OutputLine::error(
                "Error: 404 Humor Not Found. Connection terminated.",
            )),
        }
        entry.live = None;
        true
    }
}

fn welcome_lines() -> Vec<OutputLine> {
    vec![
        OutputLine::secondary("Welcome to SNH_OS v1.0.0 (tty1)"),
        OutputLine::muted("System initialized... ").then(Tone::Success, "OK"),
        OutputLine::muted("Type ")
            .then(Tone::Primary, "'help'")
            .then(Tone::Muted, " for commands or explore the file system with ")
            .then(Tone::Primary, "'ls'")
            .then(Tone::Muted, "."),
    ]
}
