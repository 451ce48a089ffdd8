//! Ctrl+K command palette

use snhos_core::Theme;

use crate::input_key::InputKey;
use crate::state::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteAction {
    Navigate(Section),
    SetTheme(Theme),
    CopyEmail,
    DownloadResume,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteItem {
    pub label: &'static str,
    pub icon: &'static str,
    pub action: PaletteAction,
}

const fn item(label: &'static str, icon: &'static str, action: PaletteAction) -> PaletteItem {
    PaletteItem {
        label,
        icon,
        action,
    }
}

pub const PALETTE_ITEMS: [PaletteItem; 9] = [
    item("Go to About Me", ">", PaletteAction::Navigate(Section::About)),
    item("Go to Experience", ">", PaletteAction::Navigate(Section::Experience)),
    item("Go to Projects", ">", PaletteAction::Navigate(Section::Projects)),
    item("Go to Skills", ">", PaletteAction::Navigate(Section::Skills)),
    item("Theme: Cyber Amber", "*", PaletteAction::SetTheme(Theme::Amber)),
    item("Theme: Matrix Green", "*", PaletteAction::SetTheme(Theme::Green)),
    item("Theme: Neon Purple", "*", PaletteAction::SetTheme(Theme::Purple)),
    item("Copy Email Address", "@", PaletteAction::CopyEmail),
    item("Download Resume", "#", PaletteAction::DownloadResume),
];

/// Result of a key press inside the palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteOutcome {
    Continue,
    Close,
    Run(PaletteAction),
}

#[derive(Debug, Clone, Default)]
pub struct CommandPalette {
    query: String,
    selected: usize,
}

impl CommandPalette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Items whose label contains the query, case-insensitively
    pub fn filtered(&self) -> Vec<&'static PaletteItem> {
        let needle = self.query.to_lowercase();
        PALETTE_ITEMS
            .iter()
            .filter(|item| item.label.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn handle_key(&mut self, key: &InputKey) -> PaletteOutcome {
        match key {
            InputKey::Esc | InputKey::CharCtrl('k') => PaletteOutcome::Close,
            InputKey::Down => {
                let len = self.filtered().len();
                if len > 0 {
                    self.selected = (self.selected + 1) % len;
                }
                PaletteOutcome::Continue
            }
            InputKey::Up => {
                let len = self.filtered().len();
                if len > 0 {
                    self.selected = (self.selected + len - 1) % len;
                }
                PaletteOutcome::Continue
            }
            InputKey::Enter => match self.filtered().get(self.selected) {
                Some(item) => PaletteOutcome::Run(item.action),
                None => PaletteOutcome::Continue,
            },
            InputKey::Backspace => {
                self.query.pop();
                self.selected = 0;
                PaletteOutcome::Continue
            }
            other => {
                if let Some(ch) = other.printable() {
                    self.query.push(ch);
                    self.selected = 0;
                }
                PaletteOutcome::Continue
            }
        }
    }
}
