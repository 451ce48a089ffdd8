//! RobCo termlink: memory dump on the left, attempt log on the right

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use snhos_app::modes::hacking::{DumpRow, HackOutcome, MAX_ATTEMPTS};
use snhos_app::modes::HackingGame;
use snhos_core::Theme;

use crate::theme::styles;

const LOG_WIDTH: u16 = 28;

pub struct HackingView<'a> {
    game: &'a HackingGame,
    theme: Theme,
}

impl<'a> HackingView<'a> {
    pub fn new(game: &'a HackingGame, theme: Theme) -> Self {
        Self { game, theme }
    }

    fn dump_line(&self, row: &'a DumpRow) -> Line<'a> {
        let mut spans = vec![
            Span::styled(row.address.as_str(), styles::primary(self.theme)),
            Span::raw("  "),
        ];
        match row.word {
            Some((offset, word)) => {
                let end = offset + word.len();
                let style = if self.game.selected_word() == Some(word) {
                    styles::selected(self.theme)
                } else {
                    styles::text_bright()
                };
                spans.push(Span::styled(&row.content[..offset], styles::text_faint()));
                spans.push(Span::styled(&row.content[offset..end], style));
                spans.push(Span::styled(&row.content[end..], styles::text_faint()));
            }
            None => spans.push(Span::styled(row.content.as_str(), styles::text_faint())),
        }
        Line::from(spans)
    }

    fn attempts_line(&self) -> Line<'static> {
        let left = self.game.attempts();
        let boxes: String = (0..MAX_ATTEMPTS)
            .map(|i| if i < left { "■ " } else { "□ " })
            .collect();
        Line::from(vec![
            Span::styled("ATTEMPTS REMAINING: ", styles::text_normal()),
            Span::styled(boxes, styles::primary(self.theme)),
        ])
    }

    fn log_lines(&self) -> Vec<Line<'a>> {
        self.game
            .log()
            .iter()
            .map(|entry| {
                let style = if entry.contains("ACCEPTED") || entry.contains("EXACT") {
                    styles::success()
                } else if entry.contains("DENIED") || entry.contains("LOCKED") {
                    styles::error()
                } else {
                    styles::text_muted()
                };
                Line::styled(entry.as_str(), style)
            })
            .collect()
    }

    fn status_lines(&self) -> Vec<Line<'static>> {
        match self.game.outcome() {
            HackOutcome::Won { .. } => vec![Line::styled(
                "ACCESS GRANTED",
                styles::success().add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK),
            )],
            HackOutcome::Locked => vec![
                Line::styled("TERMINAL LOCKED", styles::error().add_modifier(Modifier::BOLD)),
                Line::styled("PLEASE CONTACT ADMINISTRATOR", styles::error()),
                Line::styled("[ENTER] EXIT", styles::text_faint()),
            ],
            HackOutcome::Playing => vec![
                Line::styled("↑/↓ select · ENTER guess", styles::text_faint()),
                Line::styled("[ESC] ABORT", styles::text_faint()),
            ],
        }
    }
}

impl Widget for HackingView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [title_area, body] =
            Layout::vertical([Constraint::Length(4), Constraint::Min(1)]).areas(area);

        Paragraph::new(vec![
            Line::styled(
                "ROBCO INDUSTRIES (TM) TERMLINK PROTOCOL",
                styles::primary_bold(self.theme),
            ),
            Line::styled("ENTER PASSWORD TO UNLOCK", styles::secondary(self.theme)),
            self.attempts_line(),
        ])
        .render(title_area, buf);

        let [dump_area, side_area] =
            Layout::horizontal([Constraint::Min(20), Constraint::Length(LOG_WIDTH)])
                .spacing(2)
                .areas(body);

        let dump: Vec<Line> = self.game.rows().iter().map(|r| self.dump_line(r)).collect();
        Paragraph::new(dump).render(dump_area, buf);

        let status = self.status_lines();
        let [log_area, status_area] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(status.len() as u16),
        ])
        .areas(side_area);
        // newest entries stay on top; older ones fall off the bottom
        Paragraph::new(self.log_lines()).render(log_area, buf);
        Paragraph::new(status).render(status_area, buf);
    }
}
