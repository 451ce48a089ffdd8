//! Modeless editor driven by Ctrl shortcuts

use super::buffer::TextBuffer;
use super::ModeSignal;
use crate::input_key::InputKey;

pub const NEW_BUFFER: &str = "New Buffer";

#[derive(Debug, Clone)]
pub struct NanoEditor {
    filename: Option<String>,
    buffer: TextBuffer,
    modified: bool,
    exit_prompt: bool,
    /// Message line, e.g. `[ Wrote 3 lines ]`
    message: Option<String>,
}

impl NanoEditor {
    pub fn new(filename: Option<&str>, content: &str) -> Self {
        Self {
            filename: filename.map(str::to_string),
            buffer: TextBuffer::from_text(content),
            modified: false,
            exit_prompt: false,
            message: None,
        }
    }

    /// Title shown in the header bar
    pub fn title(&self) -> &str {
        self.filename.as_deref().unwrap_or(NEW_BUFFER)
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn is_prompting(&self) -> bool {
        self.exit_prompt
    }

    /// Text for the message line
    pub fn message(&self) -> Option<&str> {
        if let Some(msg) = &self.message {
            Some(msg.as_str())
        } else if self.modified {
            Some("File modified")
        } else {
            None
        }
    }

    pub fn handle_key(&mut self, key: &InputKey) -> ModeSignal {
        if self.exit_prompt {
            return match key {
                InputKey::Char('y' | 'Y' | 'n' | 'N') => ModeSignal::Exit,
                InputKey::CharCtrl('c') => {
                    self.exit_prompt = false;
                    ModeSignal::Continue
                }
                _ => ModeSignal::Continue,
            };
        }

        match key {
            InputKey::CharCtrl('x') => {
                if !self.modified {
                    return ModeSignal::Exit;
                }
                self.exit_prompt = true;
            }
            InputKey::CharCtrl('o') => {
                self.modified = false;
                self.message = Some(format!("[ Wrote {} lines ]", self.buffer.line_count()));
            }
            InputKey::Left => self.buffer.move_left(),
            InputKey::Right => self.buffer.move_right(),
            InputKey::Up => self.buffer.move_up(),
            InputKey::Down => self.buffer.move_down(),
            InputKey::Home => self.buffer.line_start(),
            InputKey::End => self.buffer.line_end(),
            InputKey::Enter => {
                self.buffer.split_line();
                self.touch();
            }
            InputKey::Backspace => {
                if self.buffer.backspace() {
                    self.touch();
                }
            }
            InputKey::Delete => {
                if self.buffer.delete_forward() {
                    self.touch();
                }
            }
            other => {
                if let Some(ch) = other.printable() {
                    self.buffer.insert_char(ch);
                    self.touch();
                }
            }
        }
        ModeSignal::Continue
    }

    fn touch(&mut self) {
        self.modified = true;
        self.message = None;
    }
}
