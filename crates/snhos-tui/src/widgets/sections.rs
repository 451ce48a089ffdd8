//! Portfolio sections panel: About, Experience, Projects, Skills & Education

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use snhos_app::state::Section;
use snhos_core::{ContentCatalog, Theme};

use crate::theme::styles;

pub struct SectionsPanel<'a> {
    catalog: &'a ContentCatalog,
    section: Section,
    theme: Theme,
    focused: bool,
    selected_project: usize,
    /// Name as currently shown by the glitch effect
    display_name: &'a str,
}

impl<'a> SectionsPanel<'a> {
    pub fn new(catalog: &'a ContentCatalog, section: Section, theme: Theme) -> Self {
        Self {
            catalog,
            section,
            theme,
            focused: false,
            selected_project: 0,
            display_name: catalog.personal.name,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn selected_project(mut self, index: usize) -> Self {
        self.selected_project = index;
        self
    }

    pub fn display_name(mut self, name: &'a str) -> Self {
        self.display_name = name;
        self
    }

    fn about(&self) -> Vec<Line<'a>> {
        let p = self.catalog.personal;
        vec![
            Line::styled("Hi, my name is", styles::secondary(self.theme)),
            Line::styled(self.display_name, styles::text_bright()),
            Line::styled("I build intelligent backends.", styles::text_muted()),
            Line::default(),
            Line::styled(p.role, styles::primary(self.theme)),
            Line::styled(p.bio, styles::text_normal()),
            Line::default(),
            link_line("GITHUB", p.github, self.theme),
            link_line("LINKEDIN", p.linkedin, self.theme),
            link_line("EMAIL", p.email, self.theme),
            link_line("LOCATION", p.location, self.theme),
        ]
    }

    fn experience(&self) -> Vec<Line<'a>> {
        let mut lines = Vec::new();
        for job in self.catalog.experience {
            lines.push(Line::from(vec![
                Span::styled(job.role, styles::text_bright()),
                Span::styled(" @ ", styles::text_faint()),
                Span::styled(job.company, styles::primary_bold(self.theme)),
            ]));
            lines.push(Line::styled(
                format!("{} | {}", job.period, job.location),
                styles::text_faint(),
            ));
            for detail in job.details {
                lines.push(Line::from(vec![
                    Span::styled("▹ ", styles::secondary(self.theme)),
                    Span::styled(*detail, styles::text_muted()),
                ]));
            }
            lines.push(Line::default());
        }
        lines
    }

    fn projects(&self) -> Vec<Line<'a>> {
        let mut lines = Vec::new();
        for (i, project) in self.catalog.projects.iter().enumerate() {
            let selected = i == self.selected_project;
            let (marker, name_style) = if selected {
                ("▶ ", styles::secondary(self.theme).add_modifier(ratatui::style::Modifier::BOLD))
            } else {
                ("  ", styles::text_bright())
            };
            let tag_style = if selected && self.focused {
                styles::primary(self.theme)
            } else {
                styles::text_faint()
            };
            lines.push(Line::from(vec![
                Span::styled(marker, styles::primary(self.theme)),
                Span::styled(project.name, name_style),
                Span::raw("  "),
                Span::styled("[VIEW_SCHEMATIC]", tag_style),
            ]));
            lines.push(Line::styled(
                format!("  {}", project.description),
                styles::text_muted(),
            ));
            lines.push(Line::styled(
                format!("  {}", project.tech_stack.join(" · ")),
                styles::primary(self.theme),
            ));
            lines.push(Line::default());
        }
        lines.push(Line::styled(
            "↑/↓ select · ENTER view schematic",
            styles::text_faint(),
        ));
        lines
    }

    fn skills(&self) -> Vec<Line<'a>> {
        let mut lines = Vec::new();
        for category in self.catalog.skills {
            lines.push(Line::styled(
                category.category,
                styles::secondary(self.theme).add_modifier(ratatui::style::Modifier::BOLD),
            ));
            lines.push(Line::styled(
                format!("  {}", category.items.join(", ")),
                styles::text_normal(),
            ));
        }

        let edu = self.catalog.education;
        lines.push(Line::default());
        lines.push(Line::styled("EDUCATION", styles::primary_bold(self.theme)));
        lines.push(Line::from(vec![
            Span::styled(edu.institution, styles::text_bright()),
            Span::styled(format!(", {}", edu.location), styles::text_faint()),
        ]));
        lines.push(Line::styled(
            format!("{} ({})", edu.degree, edu.date),
            styles::text_normal(),
        ));
        lines.push(Line::styled(format!("GPA: {}", edu.gpa), styles::text_muted()));
        lines.push(Line::styled(edu.awards, styles::text_muted()));
        lines.push(Line::styled(
            format!("Coursework: {}", edu.coursework),
            styles::text_faint(),
        ));

        lines.push(Line::default());
        lines.push(Line::styled("CERTIFICATIONS", styles::primary_bold(self.theme)));
        for cert in self.catalog.certifications {
            lines.push(Line::from(vec![
                Span::styled("▹ ", styles::secondary(self.theme)),
                Span::styled(*cert, styles::text_normal()),
            ]));
        }
        lines
    }

    /// Line where the selected project starts; each project takes four lines
    fn selected_offset(&self) -> u16 {
        (self.selected_project * 4) as u16
    }
}

fn link_line<'a>(label: &'a str, value: &'a str, theme: Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled("./", styles::secondary(theme)),
        Span::styled(format!("{label:<10}"), styles::text_muted()),
        Span::styled(value, styles::text_normal()),
    ])
}

impl Widget for SectionsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" {:02b}. {} ", self.section.index(), self.section.title());
        let block = styles::panel_block(self.focused, self.theme)
            .title(Span::styled(title, styles::primary_bold(self.theme)));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (lines, scroll) = match self.section {
            Section::About => (self.about(), 0),
            Section::Experience => (self.experience(), 0),
            Section::Projects => (
                self.projects(),
                self.selected_offset().saturating_sub(inner.height / 3),
            ),
            Section::Skills => (self.skills(), 0),
        };

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn render(panel: SectionsPanel<'_>) -> TestTerminal {
        let mut term = TestTerminal::with_size(100, 40);
        let area = term.area();
        term.render_widget(panel, area);
        term
    }

    #[test]
    fn test_about_shows_name_and_links() {
        let catalog = ContentCatalog::builtin();
        let term = render(SectionsPanel::new(&catalog, Section::About, Theme::Amber));

        assert!(term.buffer_contains("00. About"));
        assert!(term.buffer_contains(catalog.personal.name));
        assert!(term.buffer_contains("./GITHUB"));
        assert!(term.buffer_contains(catalog.personal.email));
    }

    #[test]
    fn test_about_uses_glitched_name() {
        let catalog = ContentCatalog::builtin();
        let term = render(
            SectionsPanel::new(&catalog, Section::About, Theme::Amber).display_name("S#ed N!sar"),
        );
        assert!(term.buffer_contains("S#ed N!sar"));
    }

    #[test]
    fn test_experience_lists_companies() {
        let catalog = ContentCatalog::builtin();
        let term = render(SectionsPanel::new(&catalog, Section::Experience, Theme::Green));

        for job in catalog.experience {
            assert!(term.buffer_contains(job.company), "missing {}", job.company);
        }
    }

    #[test]
    fn test_projects_marks_selection() {
        let catalog = ContentCatalog::builtin();
        let term = render(
            SectionsPanel::new(&catalog, Section::Projects, Theme::Amber).selected_project(1),
        );

        let selected = format!("▶ {}", catalog.projects[1].name);
        assert!(term.buffer_contains(&selected));
        assert!(term.buffer_contains("[VIEW_SCHEMATIC]"));
    }

    #[test]
    fn test_skills_include_education() {
        let catalog = ContentCatalog::builtin();
        let term = render(SectionsPanel::new(&catalog, Section::Skills, Theme::Purple));

        assert!(term.buffer_contains("Skills & Education"));
        assert!(term.buffer_contains(catalog.education.institution));
        assert!(term.buffer_contains("CERTIFICATIONS"));
    }
}
