//! Ctrl+K command palette modal

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};
use snhos_app::palette::CommandPalette;
use snhos_core::Theme;

use super::modal_overlay::{centered_rect, render_shadow};
use crate::theme::styles;

const WIDTH: u16 = 60;

pub struct CommandPaletteModal<'a> {
    palette: &'a CommandPalette,
    theme: Theme,
}

impl<'a> CommandPaletteModal<'a> {
    pub fn new(palette: &'a CommandPalette, theme: Theme) -> Self {
        Self { palette, theme }
    }

    fn input_line(&self) -> Line<'a> {
        let mut spans = vec![Span::styled("❯ ", styles::primary_bold(self.theme))];
        if self.palette.query().is_empty() {
            spans.push(Span::styled("Type a command...", styles::text_faint()));
        } else {
            spans.push(Span::styled(self.palette.query(), styles::text_bright()));
            spans.push(Span::styled("█", styles::primary(self.theme)));
        }
        Line::from(spans)
    }

    fn item_lines(&self) -> Vec<Line<'static>> {
        let items = self.palette.filtered();
        if items.is_empty() {
            return vec![Line::styled("  No commands found.", styles::text_faint())];
        }
        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                if i == self.palette.selected() {
                    Line::styled(
                        format!(" {} {} ", item.icon, item.label),
                        styles::selected(self.theme),
                    )
                } else {
                    Line::from(vec![
                        Span::styled(format!(" {} ", item.icon), styles::text_faint()),
                        Span::styled(item.label, styles::text_normal()),
                    ])
                }
            })
            .collect()
    }
}

impl Widget for CommandPaletteModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let items = self.item_lines();
        // input, rule, items, rule, footer plus borders
        let height = items.len() as u16 + 6;

        let top_third = Rect::new(area.x, area.y, area.width, area.height * 2 / 3);
        let rect = centered_rect(WIDTH, height, top_third);

        Clear.render(rect, buf);
        render_shadow(buf, rect);
        let block = styles::modal_block(self.theme);
        let inner = block.inner(rect);
        block.render(rect, buf);

        let [input_area, rule_top, list_area, rule_bottom, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(self.input_line()).render(input_area, buf);
        let esc = Rect::new(input_area.right().saturating_sub(3), input_area.y, 3, 1);
        if input_area.width > 20 {
            Paragraph::new(Span::styled("ESC", styles::text_faint())).render(esc, buf);
        }

        let rule = Line::styled("─".repeat(inner.width as usize), styles::text_faint());
        Paragraph::new(rule.clone()).render(rule_top, buf);
        Paragraph::new(items).render(list_area, buf);
        Paragraph::new(rule).render(rule_bottom, buf);

        let count = format!("{} results", self.palette.filtered().len());
        let footer = Line::from(vec![
            Span::styled("ProTip: ", styles::primary(self.theme)),
            Span::styled("You can change themes here", styles::text_faint()),
        ]);
        Paragraph::new(footer).render(footer_area, buf);
        let count_width = count.len() as u16;
        if footer_area.width > count_width + 36 {
            let count_area = Rect::new(
                footer_area.right() - count_width,
                footer_area.y,
                count_width,
                1,
            );
            Paragraph::new(Span::styled(count, styles::text_faint())).render(count_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use snhos_app::input_key::InputKey;

    fn render(palette: &CommandPalette) -> TestTerminal {
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(CommandPaletteModal::new(palette, Theme::Amber), area);
        term
    }

    #[test]
    fn test_palette_lists_all_commands() {
        let palette = CommandPalette::new();
        let term = render(&palette);

        assert!(term.buffer_contains("Type a command..."));
        assert!(term.buffer_contains("Go to About Me"));
        assert!(term.buffer_contains("Download Resume"));
        assert!(term.buffer_contains("9 results"));
        assert!(term.buffer_contains("ESC"));
    }

    #[test]
    fn test_palette_filters_by_query() {
        let mut palette = CommandPalette::new();
        for ch in "theme".chars() {
            palette.handle_key(&InputKey::Char(ch));
        }
        let term = render(&palette);

        assert!(term.buffer_contains("❯ theme"));
        assert!(term.buffer_contains("Theme: Neon Purple"));
        assert!(!term.buffer_contains("Go to Projects"));
        assert!(term.buffer_contains("3 results"));
    }

    #[test]
    fn test_palette_empty_results() {
        let mut palette = CommandPalette::new();
        for ch in "zzz".chars() {
            palette.handle_key(&InputKey::Char(ch));
        }
        let term = render(&palette);

        assert!(term.buffer_contains("No commands found."));
        assert!(term.buffer_contains("0 results"));
    }
}
