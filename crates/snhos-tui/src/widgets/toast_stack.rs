//! Toasts stacked upward from the bottom-right corner

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};
use snhos_app::toast::Toast;
use snhos_core::{Severity, Theme};

use crate::theme::{palette, styles};

const TOAST_WIDTH: u16 = 38;
const TOAST_HEIGHT: u16 = 4;
const MARGIN: u16 = 1;

pub struct ToastStack<'a> {
    toasts: &'a [Toast],
    theme: Theme,
}

impl<'a> ToastStack<'a> {
    pub fn new(toasts: &'a [Toast], theme: Theme) -> Self {
        Self { toasts, theme }
    }
}

fn icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "i",
        Severity::Success => "✓",
        Severity::Warning => "!",
        Severity::Error => "✗",
    }
}

impl Widget for ToastStack<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = TOAST_WIDTH.min(area.width.saturating_sub(MARGIN * 2));
        if width < 10 {
            return;
        }
        let x = area.right() - MARGIN - width;
        let mut bottom = area.bottom().saturating_sub(MARGIN);

        // newest sits at the bottom
        for toast in self.toasts.iter().rev() {
            if bottom < area.y + TOAST_HEIGHT {
                break;
            }
            let rect = Rect::new(x, bottom - TOAST_HEIGHT, width, TOAST_HEIGHT);
            bottom -= TOAST_HEIGHT;

            let accent = styles::severity(toast.severity, self.theme);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(accent)
                .style(Style::default().bg(palette::POPUP_BG));
            let inner = block.inner(rect);

            Clear.render(rect, buf);
            block.render(rect, buf);
            Paragraph::new(vec![
                Line::from(vec![
                    Span::styled(format!("{} ", icon(toast.severity)), accent),
                    Span::styled(
                        toast.title.as_str(),
                        styles::text_bright().add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::styled(toast.message.as_str(), styles::text_muted()),
            ])
            .wrap(Wrap { trim: true })
            .render(inner, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::test_utils::TestTerminal;
    use snhos_app::toast::ToastQueue;

    fn queue() -> ToastQueue {
        let now = Instant::now();
        let mut queue = ToastQueue::new(Duration::from_secs(4));
        queue.push("System", "Generating PDF...", Severity::Info, now);
        queue.push("Download", "Resume ready", Severity::Success, now);
        queue
    }

    #[test]
    fn test_toasts_stack_newest_last() {
        let queue = queue();
        let mut term = TestTerminal::with_size(80, 20);
        let area = term.area();
        term.render_widget(ToastStack::new(queue.toasts(), Theme::Amber), area);

        let content = term.content();
        let system = content.find("System").expect("system toast");
        let download = content.find("Download").expect("download toast");
        assert!(system < download);
        assert!(term.buffer_contains("Resume ready"));
    }

    #[test]
    fn test_toasts_skip_tiny_area() {
        let queue = queue();
        let mut term = TestTerminal::with_size(8, 4);
        let area = term.area();
        term.render_widget(ToastStack::new(queue.toasts(), Theme::Amber), area);
        assert!(!term.buffer_contains("System"));
    }
}
