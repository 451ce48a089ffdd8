//! Pong court scaled from the simulation field onto terminal cells

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};
use snhos_app::modes::pong::{FIELD_HEIGHT, FIELD_WIDTH, PADDLE_HEIGHT};
use snhos_app::modes::PongGame;
use snhos_core::Theme;

use crate::theme::styles;
use crate::widgets::modal_overlay::centered_rect;

pub struct PongView<'a> {
    game: &'a PongGame,
    theme: Theme,
}

impl<'a> PongView<'a> {
    pub fn new(game: &'a PongGame, theme: Theme) -> Self {
        Self { game, theme }
    }
}

/// Map a field coordinate onto `cells` cells
fn scale(value: f64, field: f64, cells: u16) -> u16 {
    if cells == 0 {
        return 0;
    }
    let max = f64::from(cells - 1);
    (value / field * max).round().clamp(0.0, max) as u16
}

fn set(buf: &mut Buffer, x: u16, y: u16, ch: char, style: Style) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_char(ch).set_style(style);
    }
}

impl PongView<'_> {
    fn render_paddle(&self, buf: &mut Buffer, court: Rect, x: u16, top: f64) {
        let from = scale(top, FIELD_HEIGHT, court.height);
        let to = scale(top + PADDLE_HEIGHT, FIELD_HEIGHT, court.height).max(from);
        for row in from..=to {
            set(buf, x, court.y + row, '█', styles::primary(self.theme));
        }
    }

    fn render_game_over(&self, court: Rect, buf: &mut Buffer) {
        let rect = centered_rect(24, 5, court);
        let banner = if self.game.player_won() {
            styles::success()
        } else {
            styles::error()
        };
        Clear.render(rect, buf);
        Paragraph::new(vec![
            Line::styled(self.game.result_label(), banner.add_modifier(Modifier::BOLD)),
            Line::default(),
            Line::styled("RESTART [ENTER]", styles::primary(self.theme)),
            Line::styled("EXIT [ESC]", styles::text_muted()),
        ])
        .alignment(Alignment::Center)
        .block(styles::modal_block(self.theme))
        .render(rect, buf);
    }
}

impl Widget for PongView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [score_area, court_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(area);

        let (player, ai) = self.game.scores();
        Paragraph::new(Line::styled(
            format!("YOU {player}  :  {ai} CPU"),
            styles::text_bright(),
        ))
        .alignment(Alignment::Center)
        .render(score_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Plain)
            .border_style(styles::text_faint());
        let court = block.inner(court_area);
        block.render(court_area, buf);
        if court.width < 3 || court.height == 0 {
            return;
        }

        let net_x = court.x + court.width / 2;
        for row in (0..court.height).step_by(2) {
            set(buf, net_x, court.y + row, '┊', styles::text_faint());
        }

        self.render_paddle(buf, court, court.x, self.game.player_y());
        self.render_paddle(buf, court, court.right() - 1, self.game.ai_y());

        let ball = self.game.ball();
        set(
            buf,
            court.x + scale(ball.x, FIELD_WIDTH, court.width),
            court.y + scale(ball.y, FIELD_HEIGHT, court.height),
            '●',
            styles::secondary(self.theme).add_modifier(Modifier::BOLD),
        );

        Paragraph::new(Line::styled(
            "↑/↓: Move Paddle | ESC: Exit",
            styles::text_faint(),
        ))
        .alignment(Alignment::Center)
        .render(help_area, buf);

        if self.game.is_over() {
            self.render_game_over(court, buf);
        }
    }
}
