//! Styled output lines and the entries that hold them

use super::script::{ScriptPlayer, TrainRide};

/// Semantic colour of a piece of output. The TUI maps tones onto the active
/// theme palette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tone {
    #[default]
    Normal,
    /// Secondary text (zinc-400)
    Muted,
    /// Barely visible text (zinc-500/600)
    Faint,
    Primary,
    Secondary,
    Success,
    Error,
    /// Bright white, used for emphasis inside tables
    Bright,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub tone: Tone,
    pub bold: bool,
}

/// One rendered row of shell output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputLine {
    pub segments: Vec<Segment>,
}

impl OutputLine {
    pub fn new(tone: Tone, text: impl Into<String>) -> Self {
        Self {
            segments: vec![Segment {
                text: text.into(),
                tone,
                bold: false,
            }],
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(Tone::Normal, text)
    }

    pub fn muted(text: impl Into<String>) -> Self {
        Self::new(Tone::Muted, text)
    }

    pub fn faint(text: impl Into<String>) -> Self {
        Self::new(Tone::Faint, text)
    }

    pub fn primary(text: impl Into<String>) -> Self {
        Self::new(Tone::Primary, text)
    }

    pub fn secondary(text: impl Into<String>) -> Self {
        Self::new(Tone::Secondary, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(Tone::Success, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(Tone::Error, text)
    }

    pub fn blank() -> Self {
        Self::default()
    }

    /// Append another segment
    pub fn then(mut self, tone: Tone, text: impl Into<String>) -> Self {
        self.segments.push(Segment {
            text: text.into(),
            tone,
            bold: false,
        });
        self
    }

    /// Mark every segment bold
    pub fn bold(mut self) -> Self {
        for seg in &mut self.segments {
            seg.bold = true;
        }
        self
    }

    /// Concatenated text without styling
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Split multi-line text into one line per row, all in the same tone
pub fn block(tone: Tone, text: &str) -> Vec<OutputLine> {
    text.split('\n').map(|l| OutputLine::new(tone, l)).collect()
}

/// Identifies an entry for late updates (joke results)
pub type EntryId = u64;

/// Output that keeps changing after the command returned
#[derive(Debug)]
pub enum LiveOutput {
    /// Lines revealed on a schedule
    Script(ScriptPlayer),
    /// `sl` locomotive crossing the panel
    Train(TrainRide),
    /// Waiting for the joke fetch; the line at `placeholder` is replaced
    Joke { placeholder: usize },
}

/// One block of shell output: the echoed prompt plus the response
#[derive(Debug)]
pub struct ShellEntry {
    pub id: EntryId,
    pub lines: Vec<OutputLine>,
    pub live: Option<LiveOutput>,
}

impl ShellEntry {
    pub fn train(&self) -> Option<&TrainRide> {
        match &self.live {
            Some(LiveOutput::Train(ride)) => Some(ride),
            _ => None,
        }
    }

    pub fn is_live(&self) -> bool {
        self.live.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_concatenates_segments() {
        let line = OutputLine::success("visitor@desktop:~$")
            .then(Tone::Normal, " ")
            .then(Tone::Normal, "ls");
        assert_eq!(line.text(), "visitor@desktop:~$ ls");
    }

    #[test]
    fn test_block_splits_lines() {
        let lines = block(Tone::Muted, "a\n\nb");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].text(), "");
        assert!(lines.iter().all(|l| l.segments[0].tone == Tone::Muted));
    }

    #[test]
    fn test_bold_applies_to_all_segments() {
        let line = OutputLine::primary("A").then(Tone::Muted, "B").bold();
        assert!(line.segments.iter().all(|s| s.bold));
    }
}
