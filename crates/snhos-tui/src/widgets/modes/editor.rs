//! Views for the vim and nano toy editors

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};
use snhos_app::modes::buffer::TextBuffer;
use snhos_app::modes::vim::VimMode;
use snhos_app::modes::{NanoEditor, VimEditor};
use snhos_core::Theme;

use crate::theme::{palette, styles};

/// Buffer text clipped to `height` rows, scrolled so the cursor row is
/// visible, with the cursor cell drawn in `cursor_style`
fn text_lines(buffer: &TextBuffer, height: usize, cursor_style: Style) -> Vec<Line<'_>> {
    let cursor = buffer.cursor();
    let skip = (cursor.row + 1).saturating_sub(height);

    buffer
        .lines()
        .iter()
        .enumerate()
        .skip(skip)
        .take(height)
        .map(|(row, text)| {
            if row != cursor.row {
                return Line::styled(text.as_str(), styles::text_normal());
            }
            let split = text
                .char_indices()
                .nth(cursor.col)
                .map_or(text.len(), |(idx, _)| idx);
            let (before, rest) = text.split_at(split);
            let mut chars = rest.chars();
            let under = chars.next().map_or(" ".to_string(), String::from);
            Line::from(vec![
                Span::styled(before, styles::text_normal()),
                Span::styled(under, cursor_style),
                Span::styled(chars.as_str(), styles::text_normal()),
            ])
        })
        .collect()
}

pub struct VimView<'a> {
    editor: &'a VimEditor,
    theme: Theme,
}

impl<'a> VimView<'a> {
    pub fn new(editor: &'a VimEditor, theme: Theme) -> Self {
        Self { editor, theme }
    }

    fn cursor_style(&self) -> Style {
        match self.editor.mode() {
            VimMode::Insert => Style::default()
                .fg(palette::TEXT_BRIGHT)
                .add_modifier(Modifier::UNDERLINED),
            _ => Style::default().fg(palette::CONTRAST_FG).bg(palette::TEXT_NORMAL),
        }
    }

    fn status_bar(&self) -> (Line<'a>, Line<'static>) {
        let cursor = self.editor.buffer().cursor();
        let left = Line::from(vec![
            Span::styled(
                format!(" {} ", self.editor.mode().label()),
                styles::selected(self.theme),
            ),
            Span::styled(format!(" {}", self.editor.filename()), styles::status_bar()),
        ]);
        let right = Line::styled(
            format!(
                "utf-8  {}%  {},{} ",
                self.editor.percent(),
                cursor.row + 1,
                cursor.col + 1
            ),
            styles::status_bar(),
        );
        (left, right)
    }
}

impl Widget for VimView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [body, status_area, command_area] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let height = body.height as usize;
        let mut lines = text_lines(self.editor.buffer(), height, self.cursor_style());
        let tilde = Style::default().fg(palette::VIM_TILDE);
        let free = height.saturating_sub(lines.len());
        lines.extend((0..self.editor.tilde_rows().min(free)).map(|_| Line::styled("~", tilde)));
        Paragraph::new(lines).render(body, buf);

        let (left, right) = self.status_bar();
        Block::default().style(styles::status_bar()).render(status_area, buf);
        Paragraph::new(left).render(status_area, buf);
        Paragraph::new(right)
            .alignment(Alignment::Right)
            .render(status_area, buf);

        let command = match self.editor.mode() {
            VimMode::Command => Line::styled(self.editor.command(), styles::text_bright()),
            _ => Line::styled(self.editor.status().unwrap_or_default(), styles::text_muted()),
        };
        Paragraph::new(command).render(command_area, buf);
    }
}

const NANO_SHORTCUTS: [(&str, &str); 12] = [
    ("^G", "Get Help"),
    ("^O", "Write Out"),
    ("^W", "Where Is"),
    ("^K", "Cut Text"),
    ("^J", "Justify"),
    ("^C", "Cur Pos"),
    ("^X", "Exit"),
    ("^R", "Read File"),
    ("^/", "Replace"),
    ("^U", "Uncut Text"),
    ("^T", "To Spell"),
    ("^_", "Go To Line"),
];

const NANO_PROMPT_KEYS: [(&str, &str); 3] = [(" Y", "Yes"), (" N", "No"), ("^C", "Cancel")];

pub struct NanoView<'a> {
    editor: &'a NanoEditor,
}

impl<'a> NanoView<'a> {
    pub fn new(editor: &'a NanoEditor) -> Self {
        Self { editor }
    }
}

/// Shortcut rows, six per line, keys drawn inverted
fn shortcut_lines(keys: &[(&'static str, &'static str)]) -> Vec<Line<'static>> {
    keys.chunks(6)
        .map(|row| {
            Line::from(
                row.iter()
                    .flat_map(|(key, label)| {
                        [
                            Span::styled(*key, styles::status_bar()),
                            Span::styled(format!(" {label:<11}"), styles::text_normal()),
                        ]
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect()
}

impl Widget for NanoView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [header, body, message_area, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .areas(area);

        Block::default().style(styles::status_bar()).render(header, buf);
        Paragraph::new(Span::styled("  GNU nano 6.2", styles::status_bar())).render(header, buf);
        Paragraph::new(Span::styled(self.editor.title(), styles::status_bar()))
            .alignment(Alignment::Center)
            .render(header, buf);
        if self.editor.is_modified() {
            Paragraph::new(Span::styled("Modified  ", styles::status_bar()))
                .alignment(Alignment::Right)
                .render(header, buf);
        }

        let cursor_style = Style::default().fg(palette::CONTRAST_FG).bg(palette::TEXT_NORMAL);
        Paragraph::new(text_lines(
            self.editor.buffer(),
            body.height as usize,
            cursor_style,
        ))
        .render(body, buf);

        if self.editor.is_prompting() {
            Paragraph::new(Line::styled(
                "Save modified buffer?  (Answering \"No\" will destroy changes) ?",
                styles::status_bar(),
            ))
            .render(message_area, buf);
            Paragraph::new(shortcut_lines(&NANO_PROMPT_KEYS)).render(footer, buf);
        } else {
            if let Some(message) = self.editor.message() {
                Paragraph::new(Line::styled(message, styles::text_muted()))
                    .alignment(Alignment::Center)
                    .render(message_area, buf);
            }
            Paragraph::new(shortcut_lines(&NANO_SHORTCUTS)).render(footer, buf);
        }
    }
}
