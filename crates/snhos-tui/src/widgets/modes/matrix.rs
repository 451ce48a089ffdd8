//! Digital rain drawn from the rain field

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};
use snhos_app::modes::matrix::{Glyph, GLYPH_TTL};
use snhos_app::modes::MatrixRain;

use crate::theme::{palette, styles};

/// Renders a [`MatrixRain`] that has already been sized to the area
pub struct MatrixView<'a> {
    rain: &'a MatrixRain,
}

impl<'a> MatrixView<'a> {
    pub fn new(rain: &'a MatrixRain) -> Self {
        Self { rain }
    }
}

/// Fresh glyphs are white, then fade through green
fn glyph_style(glyph: Glyph) -> Style {
    if glyph.ttl == GLYPH_TTL {
        return Style::default()
            .fg(palette::TEXT_BRIGHT)
            .add_modifier(Modifier::BOLD);
    }
    let Color::Rgb(r, g, b) = palette::MATRIX_GREEN else {
        return Style::default().fg(palette::MATRIX_GREEN);
    };
    let fade = |c: u8| (u16::from(c) * u16::from(glyph.ttl) / u16::from(GLYPH_TTL)) as u8;
    Style::default().fg(Color::Rgb(fade(r), fade(g), fade(b)))
}

impl Widget for MatrixView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = area.width.min(self.rain.width());
        let height = area.height.min(self.rain.height());
        for y in 0..height {
            for x in 0..width {
                if let Some(glyph) = self.rain.glyph_at(x, y) {
                    if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
                        cell.set_char(glyph.ch).set_style(glyph_style(glyph));
                    }
                }
            }
        }

        if area.height > 0 {
            let hint = Rect::new(area.x, area.bottom() - 1, area.width, 1);
            Paragraph::new(Line::styled(
                "Press any key to exit matrix...",
                styles::text_muted(),
            ))
            .alignment(Alignment::Center)
            .render(hint, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_matrix_draws_glyphs_after_frames() {
        let now = Instant::now();
        let mut rain = MatrixRain::new(now, 42);
        rain.resize(40, 12);
        rain.tick(now + Duration::from_millis(200));

        let mut term = TestTerminal::with_size(40, 12);
        let area = term.area();
        term.render_widget(MatrixView::new(&rain), area);

        // every column drops a glyph on each frame
        let row_one: String = (0..40).map(|x| term.buffer()[(x, 1)].symbol().to_string()).collect();
        assert!(row_one.chars().all(|c| c != ' '));
        assert!(term.line_contains(11, "Press any key to exit matrix..."));
    }

    #[test]
    fn test_glyph_style_fades() {
        let head = glyph_style(Glyph { ch: '1', ttl: GLYPH_TTL });
        assert_eq!(head.fg, Some(palette::TEXT_BRIGHT));

        let tail = glyph_style(Glyph { ch: '1', ttl: 1 });
        assert_ne!(tail.fg, Some(palette::MATRIX_GREEN));
    }
}
