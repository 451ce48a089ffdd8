//! Lane runner board

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};
use snhos_app::modes::runner::{Cell, HEIGHT, WIDTH};
use snhos_app::modes::RunnerGame;
use snhos_core::Theme;

use crate::theme::{palette, styles};
use crate::widgets::modal_overlay::centered_rect;

pub struct RunnerView<'a> {
    game: &'a RunnerGame,
    theme: Theme,
}

impl<'a> RunnerView<'a> {
    pub fn new(game: &'a RunnerGame, theme: Theme) -> Self {
        Self { game, theme }
    }

    fn cell_style(&self, cell: Cell) -> Style {
        match cell {
            Cell::Empty => Style::default(),
            Cell::Road => styles::text_faint(),
            Cell::Obstacle => styles::error().add_modifier(Modifier::BOLD),
            Cell::Coin => Style::default()
                .fg(palette::STATUS_YELLOW)
                .add_modifier(Modifier::BOLD),
            Cell::Player => styles::primary_bold(self.theme),
            Cell::Wreck => styles::error().add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK),
        }
    }

    fn board(&self) -> Vec<Line<'static>> {
        let border = styles::primary(self.theme);
        let edge = format!("+{}+", "-".repeat(WIDTH as usize));

        let mut lines = vec![Line::styled(edge.clone(), border)];
        for y in 0..HEIGHT {
            let mut spans = vec![Span::styled("|", border)];
            spans.extend((0..WIDTH).map(|x| {
                let cell = self.game.cell(x, y);
                Span::styled(cell.glyph().to_string(), self.cell_style(cell))
            }));
            spans.push(Span::styled("|", border));
            lines.push(Line::from(spans));
        }
        lines.push(Line::styled(edge, border));
        lines
    }

    fn render_crash(&self, board: Rect, buf: &mut Buffer) {
        let rect = centered_rect(WIDTH as u16 - 4, 6, board);
        Clear.render(rect, buf);
        Paragraph::new(vec![
            Line::styled("CRASHED", styles::error().add_modifier(Modifier::BOLD)),
            Line::styled(
                format!("FINAL SCORE: {}", self.game.score()),
                styles::text_bright(),
            ),
            Line::default(),
            Line::styled("RETRY [ENTER]", styles::primary(self.theme)),
            Line::styled("EXIT [ESC]", styles::text_muted()),
        ])
        .alignment(Alignment::Center)
        .style(Style::default().bg(palette::POPUP_BG))
        .render(rect, buf);
    }
}

impl Widget for RunnerView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let board_width = WIDTH as u16 + 2;
        let board_height = HEIGHT as u16 + 2;
        let x = area.x + area.width.saturating_sub(board_width) / 2;

        let score = Line::from(vec![
            Span::styled(
                format!("SCORE: {:05}", self.game.score()),
                styles::primary_bold(self.theme),
            ),
            Span::styled(
                format!("   SPEED: {}", self.game.speed_level()),
                styles::text_muted(),
            ),
        ]);
        Paragraph::new(score)
            .alignment(Alignment::Center)
            .render(Rect::new(area.x, area.y, area.width, area.height.min(1)), buf);

        let board = Rect::new(
            x,
            area.y + 1,
            board_width.min(area.width),
            board_height.min(area.height.saturating_sub(1)),
        );
        Paragraph::new(self.board()).render(board, buf);

        if board.bottom() < area.bottom() {
            Paragraph::new(Line::styled(
                "CONTROLS: LEFT/RIGHT ARROWS | DODGE '#' | COLLECT '$'",
                styles::text_faint(),
            ))
            .alignment(Alignment::Center)
            .render(Rect::new(area.x, board.bottom(), area.width, 1), buf);
        }

        if self.game.is_crashed() {
            self.render_crash(board, buf);
        }
    }
}
