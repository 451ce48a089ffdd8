//! Line buffer shared by the vim and nano editors.
//!
//! Columns count characters, not bytes, so multi-byte text (the `°` in the
//! weather report, `–` in certification names) edits cleanly.

/// Cursor position, both zero-based
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<String>,
    cursor: Cursor,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self {
            lines: vec![String::new()],
            cursor: Cursor::default(),
        }
    }
}

impl TextBuffer {
    /// Split `text` on `\n`. An empty text gives a single empty line.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
            cursor: Cursor::default(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Character count of `row`
    pub fn line_len(&self, row: usize) -> usize {
        self.lines.get(row).map_or(0, |l| l.chars().count())
    }

    fn current_len(&self) -> usize {
        self.line_len(self.cursor.row)
    }

    fn byte_index(line: &str, col: usize) -> usize {
        line.char_indices()
            .nth(col)
            .map_or(line.len(), |(idx, _)| idx)
    }

    // ─────────────────────────────────────────────────────────
    // Movement
    // ─────────────────────────────────────────────────────────

    pub fn move_left(&mut self) {
        self.cursor.col = self.cursor.col.saturating_sub(1);
    }

    /// Move right, allowing the position just past the last character
    pub fn move_right(&mut self) {
        self.cursor.col = (self.cursor.col + 1).min(self.current_len());
    }

    /// Move up one row, clamping the column to the new line
    pub fn move_up(&mut self) {
        self.cursor.row = self.cursor.row.saturating_sub(1);
        self.clamp_col(self.current_len());
    }

    /// Move down one row, clamping the column to the new line
    pub fn move_down(&mut self) {
        self.cursor.row = (self.cursor.row + 1).min(self.lines.len() - 1);
        self.clamp_col(self.current_len());
    }

    pub fn line_start(&mut self) {
        self.cursor.col = 0;
    }

    pub fn line_end(&mut self) {
        self.cursor.col = self.current_len();
    }

    /// Keep the column at or below `max`
    pub fn clamp_col(&mut self, max: usize) {
        self.cursor.col = self.cursor.col.min(max);
    }

    // ─────────────────────────────────────────────────────────
    // Editing
    // ─────────────────────────────────────────────────────────

    pub fn insert_char(&mut self, ch: char) {
        let line = &mut self.lines[self.cursor.row];
        let idx = Self::byte_index(line, self.cursor.col);
        line.insert(idx, ch);
        self.cursor.col += 1;
    }

    /// Split the current line at the cursor
    pub fn split_line(&mut self) {
        let line = &mut self.lines[self.cursor.row];
        let idx = Self::byte_index(line, self.cursor.col);
        let rest = line.split_off(idx);
        self.lines.insert(self.cursor.row + 1, rest);
        self.cursor = Cursor {
            row: self.cursor.row + 1,
            col: 0,
        };
    }

    /// Delete before the cursor, merging into the previous line at column 0.
    /// Returns `false` when there was nothing to delete.
    pub fn backspace(&mut self) -> bool {
        if self.cursor.col > 0 {
            let line = &mut self.lines[self.cursor.row];
            let idx = Self::byte_index(line, self.cursor.col - 1);
            line.remove(idx);
            self.cursor.col -= 1;
            true
        } else if self.cursor.row > 0 {
            let current = self.lines.remove(self.cursor.row);
            self.cursor.row -= 1;
            self.cursor.col = self.current_len();
            self.lines[self.cursor.row].push_str(&current);
            true
        } else {
            false
        }
    }

    /// Delete the character under the cursor, joining the next line when the
    /// cursor sits past the end. Returns `false` when nothing changed.
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor.col < self.current_len() {
            let line = &mut self.lines[self.cursor.row];
            let idx = Self::byte_index(line, self.cursor.col);
            line.remove(idx);
            true
        } else if self.cursor.row + 1 < self.lines.len() {
            let next = self.lines.remove(self.cursor.row + 1);
            self.lines[self.cursor.row].push_str(&next);
            true
        } else {
            false
        }
    }

    /// Delete the character under the cursor without joining lines
    pub fn delete_under_cursor(&mut self) -> bool {
        if self.cursor.col < self.current_len() {
            self.delete_forward()
        } else {
            false
        }
    }
}
