//! Semantic style builders.

use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders};
use snhos_app::shell::output::{Segment, Tone};
use snhos_core::{Severity, Theme};

use super::palette;

// --- Text styles ---
pub fn text_normal() -> Style {
    Style::default().fg(palette::TEXT_NORMAL)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn text_faint() -> Style {
    Style::default().fg(palette::TEXT_FAINT)
}

pub fn text_bright() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

// --- Accent styles ---
pub fn primary(theme: Theme) -> Style {
    Style::default().fg(palette::accents(theme).primary)
}

pub fn primary_bold(theme: Theme) -> Style {
    primary(theme).add_modifier(Modifier::BOLD)
}

pub fn secondary(theme: Theme) -> Style {
    Style::default().fg(palette::accents(theme).secondary)
}

pub fn success() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

pub fn error() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

/// Accent background with dark text, used for selections
pub fn selected(theme: Theme) -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::accents(theme).primary)
        .add_modifier(Modifier::BOLD)
}

/// Inverted status bars (vim, nano)
pub fn status_bar() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::TEXT_NORMAL)
        .add_modifier(Modifier::BOLD)
}

/// Map a shell output tone onto the active theme
pub fn tone(tone: Tone, theme: Theme) -> Style {
    match tone {
        Tone::Normal => text_normal(),
        Tone::Muted => text_muted(),
        Tone::Faint => text_faint(),
        Tone::Primary => primary(theme),
        Tone::Secondary => secondary(theme),
        Tone::Success => success(),
        Tone::Error => error(),
        Tone::Bright => Style::default().fg(palette::TEXT_BRIGHT),
    }
}

pub fn segment(segment: &Segment, theme: Theme) -> Span<'_> {
    let mut style = tone(segment.tone, theme);
    if segment.bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    Span::styled(segment.text.as_str(), style)
}

pub fn severity(severity: Severity, theme: Theme) -> Style {
    match severity {
        Severity::Info => primary(theme),
        Severity::Success => success(),
        Severity::Warning => Style::default().fg(palette::STATUS_YELLOW),
        Severity::Error => error(),
    }
}

// --- Block builders ---
pub fn panel_block(focused: bool, theme: Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            primary(theme)
        } else {
            Style::default().fg(palette::BORDER_DIM)
        })
        .style(Style::default().bg(palette::PANEL_BG))
}

pub fn modal_block(theme: Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(primary(theme))
        .style(Style::default().bg(palette::POPUP_BG))
}
