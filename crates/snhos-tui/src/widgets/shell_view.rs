//! Shell panel: scrollback, prompt line, quick-run bar and the `sl` train

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use snhos_app::shell::output::OutputLine;
use snhos_app::shell::script::TRAIN_ART;
use snhos_app::shell::{Shell, QUICK_RUN};
use snhos_core::Theme;
use unicode_width::UnicodeWidthChar;

use crate::theme::styles;

/// Below this the quick-run bar gives its row back to the scrollback
const QUICK_RUN_MIN_HEIGHT: u16 = 4;

pub struct ShellView<'a> {
    shell: &'a Shell,
    theme: Theme,
}

impl<'a> ShellView<'a> {
    pub fn new(shell: &'a Shell, theme: Theme) -> Self {
        Self { shell, theme }
    }

    fn output_line(&self, line: &'a OutputLine) -> Line<'a> {
        Line::from(
            line.segments
                .iter()
                .map(|seg| styles::segment(seg, self.theme))
                .collect::<Vec<_>>(),
        )
    }

    fn prompt_line(&self) -> Line<'a> {
        Line::from(vec![
            Span::styled(self.shell.prompt(), styles::primary(self.theme)),
            Span::raw(" "),
            Span::styled(self.shell.input(), styles::text_normal()),
            Span::styled("█", styles::primary(self.theme)),
        ])
    }

    /// `Quick Run: F1 ls  F2 scan ...`
    fn quick_run_line(&self) -> Line<'static> {
        let mut spans = vec![Span::styled(" Quick Run:", styles::text_faint())];
        for (i, cmd) in QUICK_RUN.iter().enumerate() {
            spans.push(Span::styled(format!(" F{}", i + 1), styles::primary(self.theme)));
            spans.push(Span::styled(format!(" {cmd} "), styles::text_muted()));
        }
        Line::from(spans)
    }

    /// Offset of the live train, if any, in percent of the panel width
    fn train_position(&self) -> Option<i32> {
        self.shell
            .entries()
            .iter()
            .find_map(|e| e.train())
            .map(|ride| ride.position())
    }
}

impl Widget for ShellView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let mut body = area;
        if area.height >= QUICK_RUN_MIN_HEIGHT {
            body.height -= 1;
            let bar = Rect::new(area.x, area.bottom() - 1, area.width, 1);
            Paragraph::new(self.quick_run_line()).render(bar, buf);
        }

        // Stick to the bottom like a real terminal: wrap from the newest
        // line backwards until the panel is full
        let width = area.width as usize;
        let height = body.height as usize;
        let mut visible: Vec<Line> = wrap_line(self.prompt_line(), width);
        'fill: for entry in self.shell.entries().iter().rev() {
            for line in entry.lines.iter().rev() {
                if visible.len() >= height {
                    break 'fill;
                }
                let rows = wrap_line(self.output_line(line), width);
                visible.splice(0..0, rows);
            }
        }
        let skip = visible.len().saturating_sub(height);
        Paragraph::new(visible.split_off(skip)).render(body, buf);

        if let Some(position) = self.train_position() {
            render_train(buf, area, position, styles::text_bright());
        }
    }
}

/// Hard-wrap a styled line to `width` columns
pub fn wrap_line(line: Line<'_>, width: usize) -> Vec<Line<'static>> {
    let width = width.max(1);
    let mut rows = vec![Vec::new()];
    let mut used = 0;

    for span in line.spans {
        let style = span.style;
        let mut chunk = String::new();
        for ch in span.content.chars() {
            let w = ch.width().unwrap_or(0);
            if used + w > width && used > 0 {
                if let Some(row) = rows.last_mut().filter(|_| !chunk.is_empty()) {
                    row.push(Span::styled(std::mem::take(&mut chunk), style));
                }
                rows.push(Vec::new());
                used = 0;
            }
            chunk.push(ch);
            used += w;
        }
        if !chunk.is_empty() {
            if let Some(row) = rows.last_mut() {
                row.push(Span::styled(chunk, style));
            }
        }
    }

    rows.into_iter().map(Line::from).collect()
}

/// Draw the locomotive with its left edge `position` percent across `area`
fn render_train(buf: &mut Buffer, area: Rect, position: i32, style: Style) {
    let art: Vec<&str> = TRAIN_ART.lines().collect();
    let left = area.x as i32 + area.width as i32 * position / 100;
    let top = area.y as i32 + (area.height as i32 - art.len() as i32).max(0) / 2;

    for (row, text) in art.iter().enumerate() {
        let y = top + row as i32;
        if y < area.top() as i32 || y >= area.bottom() as i32 {
            continue;
        }
        for (col, ch) in text.chars().enumerate() {
            let x = left + col as i32;
            if x < area.left() as i32 || x >= area.right() as i32 || ch == ' ' {
                continue;
            }
            if let Some(cell) = buf.cell_mut((x as u16, y as u16)) {
                cell.set_char(ch).set_style(style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::test_utils::TestTerminal;
    use snhos_app::input_key::InputKey;
    use snhos_core::ContentCatalog;

    fn shell() -> Shell {
        Shell::new(ContentCatalog::builtin(), "visitor", "desktop", Instant::now())
    }

    #[test]
    fn test_shell_view_shows_welcome_and_prompt() {
        let shell = shell();
        let mut term = TestTerminal::with_size(80, 20);
        let area = term.area();
        term.render_widget(ShellView::new(&shell, Theme::Amber), area);

        assert!(term.buffer_contains("Welcome to SNH_OS"));
        assert!(term.buffer_contains("visitor@desktop:~$"));
    }

    #[test]
    fn test_shell_view_sticks_to_bottom() {
        let mut shell = shell();
        let now = Instant::now();
        for i in 0..30 {
            shell.execute(&format!("echo line-{i}"), now);
        }
        shell.insert_char('l');

        let mut term = TestTerminal::with_size(80, 10);
        let area = term.area();
        term.render_widget(ShellView::new(&shell, Theme::Green), area);

        assert!(term.line_contains(8, "visitor@desktop:~$ l"));
        assert!(term.buffer_contains("line-29"));
        assert!(!term.buffer_contains("line-0 "));
        assert!(!term.buffer_contains("Welcome"));
    }

    #[test]
    fn test_quick_run_bar_lists_function_keys() {
        let shell = shell();
        let mut term = TestTerminal::with_size(120, 12);
        let area = term.area();
        term.render_widget(ShellView::new(&shell, Theme::Amber), area);

        assert!(term.line_contains(11, "Quick Run:"));
        assert!(term.line_contains(11, "F1 ls"));
        assert!(term.line_contains(11, "F3 ping google.com"));
        assert!(term.line_contains(11, "F7 help"));
        assert!(term.line_contains(10, "visitor@desktop:~$"));
    }

    #[test]
    fn test_quick_run_bar_hidden_in_tiny_panel() {
        let shell = shell();
        let mut term = TestTerminal::with_size(80, 3);
        let area = term.area();
        term.render_widget(ShellView::new(&shell, Theme::Amber), area);

        assert!(!term.buffer_contains("Quick Run:"));
        assert!(term.line_contains(2, "visitor@desktop:~$"));
    }

    #[test]
    fn test_long_scrollback_shows_only_the_tail() {
        let mut shell = shell();
        let now = Instant::now();
        for i in 0..500 {
            shell.execute(&format!("echo row-{i}"), now);
        }

        let mut term = TestTerminal::with_size(80, 8);
        let area = term.area();
        term.render_widget(ShellView::new(&shell, Theme::Amber), area);

        // 7 rows above the bar: three entries of two lines, then the prompt
        assert!(term.line_contains(5, "row-499"));
        assert!(term.line_contains(1, "row-497"));
        assert!(!term.buffer_contains("row-496 "));
        assert!(term.line_contains(6, "visitor@desktop:~$"));
    }

    #[test]
    fn test_train_drawn_while_riding() {
        let mut shell = shell();
        let now = Instant::now();
        shell.handle_key(&InputKey::Char('s'), now);
        shell.handle_key(&InputKey::Char('l'), now);
        shell.handle_key(&InputKey::Enter, now);
        // halfway across
        shell.tick(now + Duration::from_millis(30 * 100));

        let mut term = TestTerminal::with_size(100, 20);
        let area = term.area();
        term.render_widget(ShellView::new(&shell, Theme::Amber), area);

        assert!(term.buffer_contains("===="));
    }

    #[test]
    fn test_wrap_line_splits_long_text() {
        let line = Line::from("abcdefghij");
        let rows = wrap_line(line, 4);
        let texts: Vec<String> = rows.iter().map(|l| l.to_string()).collect();
        assert_eq!(texts, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_line_keeps_empty_line() {
        assert_eq!(wrap_line(Line::default(), 10).len(), 1);
    }
}
