//! Header bar: brand, section tabs and shortcut hints

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use snhos_app::state::Section;
use snhos_core::Theme;

use crate::theme::{palette, styles};

pub struct MainHeader {
    theme: Theme,
    god_mode: bool,
    active: Section,
    sections_focused: bool,
}

impl MainHeader {
    pub fn new(theme: Theme, active: Section) -> Self {
        Self {
            theme,
            god_mode: false,
            active,
            sections_focused: false,
        }
    }

    pub fn god_mode(mut self, enabled: bool) -> Self {
        self.god_mode = enabled;
        self
    }

    /// Highlight the active tab as focused
    pub fn sections_focused(mut self, focused: bool) -> Self {
        self.sections_focused = focused;
        self
    }

    fn brand(&self) -> Vec<Span<'static>> {
        let dot = if self.god_mode {
            Style::default().fg(palette::TEXT_BRIGHT)
        } else {
            styles::success()
        };
        let mut spans = vec![
            Span::styled("● ", dot),
            Span::styled("SNH_510", styles::text_bright()),
        ];
        if self.god_mode {
            spans.push(Span::styled(" [GOD_MODE]", styles::primary_bold(self.theme)));
        }
        spans
    }

    fn tabs(&self) -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        for section in Section::ALL {
            let style = if section != self.active {
                styles::text_muted()
            } else if self.sections_focused {
                styles::selected(self.theme)
            } else {
                styles::primary_bold(self.theme)
            };
            spans.push(Span::raw("  "));
            spans.push(Span::styled(section.tab_label(), style));
        }
        spans
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false, self.theme);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut spans = self.brand();
        spans.extend(self.tabs());
        Paragraph::new(Line::from(spans)).render(inner, buf);

        let hints = Line::from(vec![
            Span::styled("CTRL+K", styles::secondary(self.theme)),
            Span::styled(" palette  ", styles::text_faint()),
            Span::styled("TAB", styles::secondary(self.theme)),
            Span::styled(" focus  ", styles::text_faint()),
            Span::styled("CTRL+Q", styles::secondary(self.theme)),
            Span::styled(" quit", styles::text_faint()),
        ]);
        let width = hints.width() as u16;
        if inner.width > width + 40 {
            let hint_area = Rect::new(inner.right() - width, inner.y, width, 1);
            Paragraph::new(hints).render(hint_area, buf);
        }
    }
}
