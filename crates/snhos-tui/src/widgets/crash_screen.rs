//! Blue screen shown after `sudo rm -rf /`

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

use super::modal_overlay::centered_rect;
use crate::theme::palette;

const TEXT_WIDTH: u16 = 72;

pub struct CrashScreen;

impl CrashScreen {
    fn lines() -> Vec<Line<'static>> {
        let text = Style::default().fg(palette::TEXT_BRIGHT).bg(palette::BSOD_BG);
        let title = Style::default()
            .fg(palette::BSOD_BG)
            .bg(palette::BSOD_TITLE_BG)
            .add_modifier(Modifier::BOLD);

        vec![
            Line::from(Span::styled(" SNH_OS ", title)).alignment(Alignment::Center),
            Line::default(),
            Line::styled(
                "A fatal exception 0E has occurred at 0028:C0011E36 in VXD VMM(01) + \
                 00010E36. The current application will be terminated.",
                text,
            ),
            Line::default(),
            Line::styled(
                "*  Press any key to terminate the current application.",
                text,
            ),
            Line::styled(
                "*  Press CTRL+ALT+DEL again to restart your computer. You will lose \
                 any unsaved information in all applications.",
                text,
            ),
            Line::default(),
            Line::from(Span::styled("Press any key to continue _", text))
                .alignment(Alignment::Center),
        ]
    }
}

impl Widget for CrashScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .style(Style::default().bg(palette::BSOD_BG))
            .render(area, buf);

        let body = centered_rect(TEXT_WIDTH, 14, area);
        Paragraph::new(Self::lines())
            .wrap(Wrap { trim: true })
            .render(body, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_crash_screen_text() {
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(CrashScreen, area);

        assert!(term.buffer_contains("SNH_OS"));
        assert!(term.buffer_contains("A fatal exception 0E has occurred"));
        assert!(term.buffer_contains("Press any key to continue _"));
    }

    #[test]
    fn test_crash_screen_fills_blue() {
        let mut term = TestTerminal::with_size(40, 10);
        let area = term.area();
        term.render_widget(CrashScreen, area);

        assert_eq!(term.buffer()[(0, 0)].bg, palette::BSOD_BG);
        assert_eq!(term.buffer()[(39, 9)].bg, palette::BSOD_BG);
    }
}
