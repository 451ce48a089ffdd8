//! Colour palette for the retro desktop.
//!
//! Neutral tones are fixed; the primary/secondary accents follow the active
//! [`Theme`].

use ratatui::style::Color;
use snhos_core::Theme;

// --- Background layers ---
pub const VOID_BG: Color = Color::Rgb(9, 9, 11);
pub const PANEL_BG: Color = Color::Rgb(18, 18, 22);
pub const POPUP_BG: Color = Color::Rgb(24, 24, 27);
pub const SHADOW: Color = Color::Rgb(3, 3, 5);

// --- Borders ---
pub const BORDER_DIM: Color = Color::Rgb(39, 39, 42);

// --- Text ---
pub const TEXT_NORMAL: Color = Color::Rgb(212, 212, 216);
pub const TEXT_MUTED: Color = Color::Rgb(161, 161, 170);
pub const TEXT_FAINT: Color = Color::Rgb(82, 82, 91);
pub const TEXT_BRIGHT: Color = Color::White;
pub const CONTRAST_FG: Color = Color::Black;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Rgb(16, 185, 129);
pub const STATUS_RED: Color = Color::Rgb(244, 63, 94);
pub const STATUS_YELLOW: Color = Color::Rgb(234, 179, 8);
pub const STATUS_BLUE: Color = Color::Rgb(56, 189, 248);

// --- Screens ---
pub const BSOD_BG: Color = Color::Rgb(0, 0, 170);
pub const BSOD_TITLE_BG: Color = Color::Rgb(170, 170, 170);
pub const BLUEPRINT_BG: Color = Color::Rgb(15, 23, 42);
pub const BLUEPRINT_BAR: Color = Color::Rgb(30, 41, 59);
pub const VIM_TILDE: Color = Color::Rgb(30, 58, 138);
pub const MATRIX_GREEN: Color = Color::Rgb(0, 255, 70);

/// Accent pair for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accents {
    pub primary: Color,
    pub secondary: Color,
}

pub fn accents(theme: Theme) -> Accents {
    match theme {
        Theme::Amber => Accents {
            primary: Color::Rgb(0xfb, 0xbf, 0x24),
            secondary: Color::Rgb(0x22, 0xd3, 0xee),
        },
        Theme::Green => Accents {
            primary: Color::Rgb(0x4a, 0xde, 0x80),
            secondary: Color::Rgb(0x22, 0xd3, 0xee),
        },
        Theme::Purple => Accents {
            primary: Color::Rgb(0xc0, 0x84, 0xfc),
            secondary: Color::Rgb(0xf4, 0x72, 0xb6),
        },
    }
}
