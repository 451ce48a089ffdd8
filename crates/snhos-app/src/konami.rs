//! Konami code detection for god mode

use crate::input_key::InputKey;

pub const SEQUENCE: [InputKey; 10] = [
    InputKey::Up,
    InputKey::Up,
    InputKey::Down,
    InputKey::Down,
    InputKey::Left,
    InputKey::Right,
    InputKey::Left,
    InputKey::Right,
    InputKey::Char('b'),
    InputKey::Char('a'),
];

/// Tracks progress through [`SEQUENCE`]. A wrong key resets to the start.
#[derive(Debug, Clone, Copy, Default)]
pub struct KonamiDetector {
    cursor: usize,
}

impl KonamiDetector {
    /// Feed one key. Returns `true` when the sequence completes.
    pub fn observe(&mut self, key: &InputKey) -> bool {
        if *key == SEQUENCE[self.cursor] {
            self.cursor += 1;
            if self.cursor == SEQUENCE.len() {
                self.cursor = 0;
                return true;
            }
        } else {
            self.cursor = 0;
        }
        false
    }

    pub fn progress(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_sequence_fires_once() {
        let mut detector = KonamiDetector::default();
        let fired: Vec<bool> = SEQUENCE.iter().map(|k| detector.observe(k)).collect();
        assert_eq!(fired.iter().filter(|f| **f).count(), 1);
        assert!(fired[9]);
        assert_eq!(detector.progress(), 0);
    }

    #[test]
    fn test_wrong_key_resets() {
        let mut detector = KonamiDetector::default();
        detector.observe(&InputKey::Up);
        detector.observe(&InputKey::Up);
        detector.observe(&InputKey::Char('x'));
        assert_eq!(detector.progress(), 0);
    }

    #[test]
    fn test_wrong_key_is_not_reused_as_start() {
        let mut detector = KonamiDetector::default();
        detector.observe(&InputKey::Up);
        detector.observe(&InputKey::Up);
        // third Up is wrong (Down expected) and resets without counting
        detector.observe(&InputKey::Up);
        assert_eq!(detector.progress(), 0);
    }
}
