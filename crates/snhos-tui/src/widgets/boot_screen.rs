//! Boot log with a progress bar

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};
use snhos_app::boot::BootSequence;
use snhos_core::Theme;

use crate::theme::{palette, styles};

const BAR_WIDTH: u16 = 40;

pub struct BootScreen<'a> {
    boot: &'a BootSequence,
    theme: Theme,
}

impl<'a> BootScreen<'a> {
    pub fn new(boot: &'a BootSequence, theme: Theme) -> Self {
        Self { boot, theme }
    }

    fn log_lines(&self) -> Vec<Line<'a>> {
        let mut lines: Vec<Line> = self
            .boot
            .lines()
            .iter()
            .enumerate()
            .map(|(i, text)| {
                Line::from(vec![
                    Span::styled(BootSequence::stamp(i), styles::text_faint()),
                    Span::raw(" "),
                    Span::styled(*text, styles::primary(self.theme)),
                ])
            })
            .collect();
        lines.push(Line::styled("_", styles::primary(self.theme)));
        lines
    }

    fn progress_lines(&self, width: u16) -> Vec<Line<'static>> {
        let progress = self.boot.progress();
        let filled = (u32::from(width) * u32::from(progress) / 100) as usize;
        let empty = usize::from(width).saturating_sub(filled);

        vec![
            Line::from(vec![
                Span::styled("System Loading", styles::text_muted()),
                Span::raw(" "),
                Span::styled(format!("{progress}%"), styles::primary_bold(self.theme)),
            ]),
            Line::from(vec![
                Span::styled("█".repeat(filled), styles::primary(self.theme)),
                Span::styled("░".repeat(empty), Style::default().fg(palette::BORDER_DIM)),
            ]),
        ]
    }
}

impl Widget for BootScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .style(Style::default().bg(palette::VOID_BG))
            .render(area, buf);

        let inner = area.inner(ratatui::layout::Margin::new(2, 1));
        let [log_area, bar_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(2)]).areas(inner);

        Paragraph::new(self.log_lines()).render(log_area, buf);

        let bar_width = BAR_WIDTH.min(bar_area.width);
        let bar_area = Rect::new(bar_area.x, bar_area.y, bar_width, bar_area.height);
        Paragraph::new(self.progress_lines(bar_width)).render(bar_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_boot_screen_shows_revealed_lines() {
        let start = Instant::now();
        let mut boot = BootSequence::new(start);
        boot.tick(start + Duration::from_millis(900));

        let mut term = TestTerminal::with_size(80, 20);
        let area = term.area();
        term.render_widget(BootScreen::new(&boot, Theme::Amber), area);

        assert!(term.buffer_contains("[0.0000] Initializing BIOS..."));
        assert!(term.buffer_contains("[0.1200] Checking CPU... OK"));
        assert!(!term.buffer_contains("Checking RAM"));
        assert!(term.buffer_contains("System Loading"));
    }

    #[test]
    fn test_boot_screen_full_bar() {
        let start = Instant::now();
        let mut boot = BootSequence::new(start);
        boot.tick(start + Duration::from_millis(2000));

        let mut term = TestTerminal::with_size(80, 20);
        let area = term.area();
        term.render_widget(BootScreen::new(&boot, Theme::Green), area);

        assert!(term.buffer_contains("100%"));
        assert!(term.buffer_contains(&"█".repeat(40)));
        assert!(!term.buffer_contains("░"));
    }
}
