//! Terminal-independent keyboard input.
//!
//! `snhos-app` never sees crossterm types. The TUI converts each key event
//! into an [`InputKey`] at the boundary, so the shell, the editors and the
//! games can be driven from plain values in tests.

/// A single key press, converted from `crossterm::event::KeyEvent` by the TUI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character, including shifted ones
    Char(char),
    /// Character pressed together with Ctrl (Ctrl+k arrives as `CharCtrl('k')`)
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    Enter,
    Esc,
    Tab,
    BackTab,
    Backspace,
    Delete,

    /// Function key (F1-F12)
    F(u8),
}

impl InputKey {
    /// The character a plain key press would type, if any
    pub fn printable(&self) -> Option<char> {
        match self {
            InputKey::Char(c) if !c.is_control() => Some(*c),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_and_plain_chars_differ() {
        assert_ne!(InputKey::CharCtrl('k'), InputKey::Char('k'));
    }

    #[test]
    fn test_printable() {
        assert_eq!(InputKey::Char('x').printable(), Some('x'));
        assert_eq!(InputKey::Char(' ').printable(), Some(' '));
        assert_eq!(InputKey::CharCtrl('x').printable(), None);
        assert_eq!(InputKey::Enter.printable(), None);
        assert_eq!(InputKey::Char('\u{7}').printable(), None);
    }
}
