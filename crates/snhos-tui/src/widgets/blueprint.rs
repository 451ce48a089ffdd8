//! Project schematic modal opened from the Projects section

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};
use snhos_core::{Project, Theme};

use super::modal_overlay::{centered_rect, render_shadow};
use crate::theme::{palette, styles};

const MAX_WIDTH: u16 = 96;
const MAX_HEIGHT: u16 = 30;

pub struct BlueprintModal<'a> {
    project: &'a Project,
    /// Position in the catalog, printed as the figure number
    index: usize,
    theme: Theme,
}

impl<'a> BlueprintModal<'a> {
    pub fn new(project: &'a Project, index: usize, theme: Theme) -> Self {
        Self {
            project,
            index,
            theme,
        }
    }

    fn heading(&self, text: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::styled("▌ ", styles::primary(self.theme)),
            Span::styled(text, styles::secondary(self.theme).add_modifier(Modifier::BOLD)),
        ])
    }

    fn diagram(&self) -> Vec<Line<'static>> {
        let boxes = styles::primary(self.theme);
        let arrow = styles::secondary(self.theme);
        vec![
            Line::styled("ARCH_DIAGRAM_V1.0", styles::text_faint()),
            Line::styled("┌────────┐     ┌────────┐     ┌────────┐", boxes),
            Line::from(vec![
                Span::styled("│ CLIENT │", boxes),
                Span::styled(" ──▶ ", arrow),
                Span::styled("│ SERVER │", boxes),
                Span::styled(" ──▶ ", arrow),
                Span::styled("│   DB   │", boxes),
            ]),
            Line::styled("└────────┘     └────────┘     └────────┘", boxes),
        ]
    }

    fn left_column(&self) -> Vec<Line<'a>> {
        let mut lines = self.diagram();
        lines.push(Line::default());
        lines.push(self.heading("SYSTEM_DESCRIPTION"));
        lines.push(Line::styled(self.project.description, styles::text_normal()));
        lines.push(Line::default());
        lines.push(self.heading("ARCHITECTURE_NOTES"));
        lines.push(Line::styled(
            self.project.architecture.unwrap_or("N/A"),
            styles::text_muted(),
        ));
        lines
    }

    fn right_column(&self) -> Vec<Line<'a>> {
        let mut lines = vec![Line::styled("TECH_STACK", styles::text_faint())];
        let tags: Vec<Span> = self
            .project
            .tech_stack
            .iter()
            .map(|tech| Span::styled(format!("[{tech}] "), styles::primary(self.theme)))
            .collect();
        lines.push(Line::from(tags));
        lines.push(Line::default());
        lines.push(Line::styled("KEY_FEATURES", styles::text_faint()));
        for feature in self.project.features.unwrap_or_default() {
            lines.push(Line::from(vec![
                Span::styled("- ", styles::secondary(self.theme)),
                Span::styled(*feature, styles::text_normal()),
            ]));
        }
        lines.push(Line::default());
        lines.push(Line::styled(
            "CONFIDENTIAL / RESTRICTED ACCESS",
            styles::error().add_modifier(Modifier::BOLD),
        ));
        lines
    }
}

/// Stable nine-character document id derived from the project name
pub fn doc_id(name: &str) -> String {
    const ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    // FNV-1a
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in name.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0100_0000_01b3);
    }
    (0..9)
        .map(|_| {
            let ch = ALPHABET[(hash % 36) as usize] as char;
            hash /= 36;
            ch
        })
        .collect()
}

impl Widget for BlueprintModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = MAX_WIDTH.min(area.width.saturating_sub(4));
        let height = MAX_HEIGHT.min(area.height.saturating_sub(2));
        let rect = centered_rect(width, height, area);

        Clear.render(rect, buf);
        render_shadow(buf, rect);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(styles::primary(self.theme))
            .style(Style::default().bg(palette::BLUEPRINT_BG));
        let inner = block.inner(rect);
        block.render(rect, buf);

        let [header, body, footer] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let bar = Style::default().bg(palette::BLUEPRINT_BAR);
        Block::default().style(bar).render(header, buf);
        Paragraph::new(vec![
            Line::styled(format!("FIG. 0{}", self.index % 10), styles::text_faint()),
            Line::styled(
                format!("SCHEMATIC: {}", self.project.name.to_uppercase()),
                styles::text_bright(),
            ),
        ])
        .render(header, buf);
        Paragraph::new(Line::styled("[CLOSE_VIEW]", styles::secondary(self.theme)))
            .alignment(Alignment::Right)
            .render(header, buf);

        let [left, right] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .spacing(2)
                .areas(body.inner(ratatui::layout::Margin::new(1, 1)));
        Paragraph::new(self.left_column())
            .wrap(Wrap { trim: true })
            .render(left, buf);
        Paragraph::new(self.right_column())
            .wrap(Wrap { trim: true })
            .render(right, buf);

        Paragraph::new(Line::styled("APPROVED_BY: SNH-510", styles::text_faint()))
            .render(footer, buf);
        Paragraph::new(Line::styled(
            format!("DOC_ID: {}", doc_id(self.project.name)),
            styles::text_faint(),
        ))
        .alignment(Alignment::Right)
        .render(footer, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use snhos_core::ContentCatalog;

    #[test]
    fn test_blueprint_shows_schematic() {
        let catalog = ContentCatalog::builtin();
        let project = &catalog.projects[0];
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(BlueprintModal::new(project, 0, Theme::Amber), area);

        let title = format!("SCHEMATIC: {}", project.name.to_uppercase());
        assert!(term.buffer_contains(&title));
        assert!(term.buffer_contains("[CLOSE_VIEW]"));
        assert!(term.buffer_contains("│ CLIENT │"));
        assert!(term.buffer_contains("SYSTEM_DESCRIPTION"));
        assert!(term.buffer_contains("KEY_FEATURES"));
        assert!(term.buffer_contains("APPROVED_BY: SNH-510"));
        if let Some(features) = project.features {
            assert!(term.buffer_contains(&format!("- {}", features[0])));
        }
    }

    #[test]
    fn test_doc_id_is_stable() {
        let id = doc_id("HireHub");
        assert_eq!(id.len(), 9);
        assert_eq!(id, doc_id("HireHub"));
        assert_ne!(id, doc_id("Welfare Society CMS"));
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
