//! Helpers shared by the palette and blueprint modals.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::theme::palette;

/// Center a fixed-size rect within an area, clamped to the area
///
/// # Examples
/// ```
/// use ratatui::layout::Rect;
/// use snhos_tui::widgets::modal_overlay::centered_rect;
///
/// let area = Rect::new(0, 0, 80, 24);
/// assert_eq!(centered_rect(40, 10, area), Rect::new(20, 7, 40, 10));
/// ```
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Fade everything under a modal
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    let dim_style = Style::default()
        .fg(palette::TEXT_FAINT)
        .bg(palette::VOID_BG);

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim_style);
            }
        }
    }
}

/// One-cell shadow along the right and bottom edges of a modal
pub fn render_shadow(buf: &mut Buffer, modal: Rect) {
    let shadow_style = Style::default().fg(palette::SHADOW).bg(palette::SHADOW);

    let right_x = modal.right();
    for y in modal.top().saturating_add(1)..=modal.bottom() {
        if let Some(cell) = buf.cell_mut((right_x, y)) {
            cell.set_style(shadow_style);
        }
    }

    let bottom_y = modal.bottom();
    for x in modal.left().saturating_add(1)..=modal.right() {
        if let Some(cell) = buf.cell_mut((x, bottom_y)) {
            cell.set_style(shadow_style);
        }
    }
}
