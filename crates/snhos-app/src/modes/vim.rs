//! Modal editor with NORMAL, INSERT and COMMAND states

use std::time::{Duration, Instant};

use super::buffer::TextBuffer;
use super::ModeSignal;
use crate::input_key::InputKey;

const STATUS_TTL: Duration = Duration::from_secs(3);
pub const NO_NAME: &str = "[No Name]";
/// Screen rows the editor pads with `~`
pub const PAGE_ROWS: usize = 20;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VimMode {
    #[default]
    Normal,
    Insert,
    Command,
}

impl VimMode {
    pub fn label(&self) -> &'static str {
        match self {
            VimMode::Normal => "NORMAL",
            VimMode::Insert => "INSERT",
            VimMode::Command => "COMMAND",
        }
    }
}

#[derive(Debug, Clone)]
pub struct VimEditor {
    filename: String,
    buffer: TextBuffer,
    mode: VimMode,
    /// Includes the leading `:`
    command: String,
    status: Option<(String, Instant)>,
}

impl VimEditor {
    pub fn new(filename: Option<&str>, content: &str) -> Self {
        Self {
            filename: filename.unwrap_or(NO_NAME).to_string(),
            buffer: TextBuffer::from_text(content),
            mode: VimMode::Normal,
            command: String::new(),
            status: None,
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn mode(&self) -> VimMode {
        self.mode
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_ref().map(|(s, _)| s.as_str())
    }

    /// Cursor row as a share of the buffer, rounded down
    pub fn percent(&self) -> usize {
        self.buffer.cursor().row * 100 / self.buffer.line_count().max(1)
    }

    /// Number of `~` rows below the text
    pub fn tilde_rows(&self) -> usize {
        PAGE_ROWS.saturating_sub(self.buffer.line_count())
    }

    fn set_status(&mut self, msg: impl Into<String>, now: Instant) {
        self.status = Some((msg.into(), now));
    }

    pub fn handle_key(&mut self, key: &InputKey, now: Instant) -> ModeSignal {
        match self.mode {
            VimMode::Normal => self.normal_key(key, now),
            VimMode::Insert => self.insert_key(key),
            VimMode::Command => return self.command_key(key, now),
        }
        ModeSignal::Continue
    }

    fn normal_key(&mut self, key: &InputKey, now: Instant) {
        match key {
            InputKey::Char('i') => {
                self.mode = VimMode::Insert;
                self.set_status("-- INSERT --", now);
            }
            InputKey::Char(':') => {
                self.mode = VimMode::Command;
                self.command = ":".into();
            }
            InputKey::Char('h') | InputKey::Left => self.buffer.move_left(),
            InputKey::Char('l') | InputKey::Right => self.buffer.move_right(),
            InputKey::Char('j') | InputKey::Down => self.buffer.move_down(),
            InputKey::Char('k') | InputKey::Up => self.buffer.move_up(),
            InputKey::Char('0') => self.buffer.line_start(),
            InputKey::Char('$') => self.buffer.line_end(),
            InputKey::Char('x') => {
                self.buffer.delete_under_cursor();
            }
            _ => {}
        }
    }

    fn insert_key(&mut self, key: &InputKey) {
        match key {
            InputKey::Esc => {
                self.mode = VimMode::Normal;
                self.status = None;
                let len = self.buffer.line_len(self.buffer.cursor().row);
                self.buffer.clamp_col(len.saturating_sub(1));
            }
            InputKey::Enter => self.buffer.split_line(),
            InputKey::Backspace => {
                self.buffer.backspace();
            }
            InputKey::Left => self.buffer.move_left(),
            InputKey::Right => self.buffer.move_right(),
            InputKey::Up => self.buffer.move_up(),
            InputKey::Down => self.buffer.move_down(),
            other => {
                if let Some(ch) = other.printable() {
                    self.buffer.insert_char(ch);
                }
            }
        }
    }

    fn command_key(&mut self, key: &InputKey, now: Instant) -> ModeSignal {
        match key {
            InputKey::Esc => {
                self.mode = VimMode::Normal;
                self.command.clear();
            }
            InputKey::Enter => {
                let cmd = self.command.trim_start_matches(':').trim().to_string();
                self.command.clear();
                self.mode = VimMode::Normal;
                match cmd.as_str() {
                    "q" | "q!" | "wq" => return ModeSignal::Exit,
                    "w" => {
                        let msg = format!("\"{}\" written (simulated)", self.filename);
                        self.set_status(msg, now);
                    }
                    other => self.set_status(format!("E492: Not an editor command: {other}"), now),
                }
            }
            InputKey::Backspace => {
                if self.command.chars().count() <= 1 {
                    self.command.clear();
                    self.mode = VimMode::Normal;
                } else {
                    self.command.pop();
                }
            }
            other => {
                if let Some(ch) = other.printable() {
                    self.command.push(ch);
                }
            }
        }
        ModeSignal::Continue
    }

    /// Expire the status message
    pub fn tick(&mut self, now: Instant) -> ModeSignal {
        if self
            .status
            .as_ref()
            .is_some_and(|(_, at)| now.saturating_duration_since(*at) >= STATUS_TTL)
        {
            self.status = None;
        }
        ModeSignal::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(editor: &mut VimEditor, input: &str, now: Instant) -> ModeSignal {
        let mut last = ModeSignal::Continue;
        for ch in input.chars() {
            last = editor.handle_key(&InputKey::Char(ch), now);
        }
        last
    }

    #[test]
    fn test_defaults_to_no_name() {
        let editor = VimEditor::new(None, "");
        assert_eq!(editor.filename(), "[No Name]");
        assert_eq!(editor.buffer().lines(), [""]);
        assert_eq!(editor.tilde_rows(), 19);
    }

    #[test]
    fn test_insert_and_escape_clamps() {
        let now = Instant::now();
        let mut editor = VimEditor::new(Some("a.txt"), "");
        keys(&mut editor, "ihi", now);
        assert_eq!(editor.mode(), VimMode::Insert);
        assert_eq!(editor.status(), Some("-- INSERT --"));
        assert_eq!(editor.buffer().text(), "hi");
        assert_eq!(editor.buffer().cursor().col, 2);

        editor.handle_key(&InputKey::Esc, now);
        assert_eq!(editor.mode(), VimMode::Normal);
        assert_eq!(editor.status(), None);
        assert_eq!(editor.buffer().cursor().col, 1);
    }

    #[test]
    fn test_x_deletes_under_cursor() {
        let now = Instant::now();
        let mut editor = VimEditor::new(None, "abc");
        keys(&mut editor, "lx", now);
        assert_eq!(editor.buffer().text(), "ac");
    }

    #[test]
    fn test_write_reports_filename() {
        let now = Instant::now();
        let mut editor = VimEditor::new(Some("about.txt"), "bio");
        keys(&mut editor, ":w", now);
        assert_eq!(editor.command(), ":w");
        editor.handle_key(&InputKey::Enter, now);
        assert_eq!(editor.status(), Some("\"about.txt\" written (simulated)"));
        assert_eq!(editor.mode(), VimMode::Normal);

        editor.tick(now + Duration::from_millis(2999));
        assert!(editor.status().is_some());
        editor.tick(now + STATUS_TTL);
        assert!(editor.status().is_none());
    }

    #[test]
    fn test_quit_commands_exit() {
        let now = Instant::now();
        for cmd in [":q", ":q!", ":wq"] {
            let mut editor = VimEditor::new(None, "");
            keys(&mut editor, cmd, now);
            assert_eq!(editor.handle_key(&InputKey::Enter, now), ModeSignal::Exit);
        }
    }

    #[test]
    fn test_unknown_command() {
        let now = Instant::now();
        let mut editor = VimEditor::new(None, "");
        keys(&mut editor, ":foo", now);
        editor.handle_key(&InputKey::Enter, now);
        assert_eq!(editor.status(), Some("E492: Not an editor command: foo"));
    }

    #[test]
    fn test_backspace_on_bare_colon_leaves_command_mode() {
        let now = Instant::now();
        let mut editor = VimEditor::new(None, "");
        keys(&mut editor, ":", now);
        editor.handle_key(&InputKey::Backspace, now);
        assert_eq!(editor.mode(), VimMode::Normal);
        assert_eq!(editor.command(), "");
    }

    #[test]
    fn test_percent_rounds_down() {
        let now = Instant::now();
        let mut editor = VimEditor::new(None, "a\nb\nc");
        assert_eq!(editor.percent(), 0);
        keys(&mut editor, "j", now);
        assert_eq!(editor.percent(), 33);
    }
}
