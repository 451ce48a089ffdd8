//! Screen layout definitions for the desktop
//!
//! Wide terminals put the sections panel and the terminal side by side;
//! narrow ones stack them.

use ratatui::layout::{Constraint, Layout, Rect};

/// Below this width the panels are stacked
pub const SIDE_BY_SIDE_MIN_WIDTH: u16 = 100;

/// Screen areas for the desktop
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Brand, section tabs and shortcut hints
    pub header: Rect,

    /// About / Experience / Projects / Skills
    pub sections: Rect,

    /// The shell or the active sub-experience
    pub terminal: Rect,

    /// Tips and credits line
    pub footer: Rect,
}

pub fn create(area: Rect) -> ScreenAreas {
    let rows = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(6),
        Constraint::Length(1),
    ])
    .split(area);

    let body = if area.width >= SIDE_BY_SIDE_MIN_WIDTH {
        Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)]).split(rows[1])
    } else {
        Layout::vertical([Constraint::Percentage(40), Constraint::Percentage(60)]).split(rows[1])
    };

    ScreenAreas {
        header: rows[0],
        sections: body[0],
        terminal: body[1],
        footer: rows[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_layout_is_side_by_side() {
        let layout = create(Rect::new(0, 0, 120, 40));

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.footer.height, 1);
        assert_eq!(layout.footer.y, 39);
        assert_eq!(layout.sections.y, layout.terminal.y);
        assert!(layout.terminal.x > layout.sections.x);
        assert_eq!(layout.sections.width + layout.terminal.width, 120);
    }

    #[test]
    fn test_narrow_layout_stacks() {
        let layout = create(Rect::new(0, 0, 80, 40));

        assert_eq!(layout.sections.x, layout.terminal.x);
        assert!(layout.terminal.y > layout.sections.y);
        assert_eq!(layout.terminal.width, 80);
    }

    #[test]
    fn test_layout_areas_contiguous() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area);

        assert_eq!(
            layout.header.height + layout.sections.height + layout.terminal.height
                + layout.footer.height,
            area.height
        );
    }
}
