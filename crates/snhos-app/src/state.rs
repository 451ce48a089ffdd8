//! Application state (Model in TEA pattern)

use std::time::{Duration, Instant};

use snhos_core::{ContentCatalog, Severity, Theme};
use tracing::info;

use crate::boot::BootSequence;
use crate::config::Settings;
use crate::glitch::GlitchText;
use crate::konami::KonamiDetector;
use crate::palette::CommandPalette;
use crate::shell::Shell;
use crate::toast::ToastQueue;

/// Delay between `shutdown`/`reboot` and the boot screen
pub const REBOOT_DELAY: Duration = Duration::from_secs(1);

/// Which full-screen view is up
#[derive(Debug)]
pub enum Screen {
    Boot(BootSequence),
    Desktop,
    /// Blue screen after the destructive command
    Crash,
}

impl Screen {
    pub fn is_desktop(&self) -> bool {
        matches!(self, Screen::Desktop)
    }
}

/// Portfolio sections on the desktop, in header order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    About,
    Experience,
    Projects,
    Skills,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::About,
        Section::Experience,
        Section::Projects,
        Section::Skills,
    ];

    /// Header tab label
    pub fn tab_label(&self) -> &'static str {
        match self {
            Section::About => "00.ABOUT",
            Section::Experience => "01.EXP",
            Section::Projects => "10.WORK",
            Section::Skills => "11.SKILLS",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Skills => "Skills & Education",
        }
    }

    pub fn index(&self) -> usize {
        Section::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Section::ALL[(self.index() + 1) % Section::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Section::ALL[(self.index() + Section::ALL.len() - 1) % Section::ALL.len()]
    }
}

/// Which desktop panel receives keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Terminal,
    Sections,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub settings: Settings,
    pub screen: Screen,
    pub theme: Theme,
    pub god_mode: bool,

    pub focus: Focus,
    pub section: Section,
    /// Highlighted project in the Projects section
    pub selected_project: usize,
    /// Project whose blueprint modal is open
    pub blueprint: Option<usize>,
    pub palette: Option<CommandPalette>,
    pub toasts: ToastQueue,
    pub konami: KonamiDetector,
    pub glitch: GlitchText,
    pub shell: Shell,

    /// When a scheduled reboot fires
    pub reboot_at: Option<Instant>,
    /// Instant of the latest tick; keys are timed against it
    pub now: Instant,
    quitting: bool,
}

impl AppState {
    pub fn new(settings: Settings, now: Instant) -> Self {
        let catalog = ContentCatalog::builtin();
        let screen = if settings.ui.skip_boot {
            Screen::Desktop
        } else {
            Screen::Boot(BootSequence::new(now))
        };

        Self {
            theme: settings.ui.theme,
            screen,
            god_mode: false,
            focus: Focus::default(),
            section: Section::default(),
            selected_project: 0,
            blueprint: None,
            palette: None,
            toasts: ToastQueue::new(settings.behavior.toast_duration()),
            konami: KonamiDetector::default(),
            glitch: GlitchText::new(catalog.personal.name, now, 510),
            shell: new_shell(&settings, catalog, now),
            reboot_at: None,
            now,
            quitting: false,
            settings,
        }
    }

    pub fn catalog(&self) -> &ContentCatalog {
        self.shell.catalog()
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }

    pub fn quit(&mut self) {
        info!("Quit requested");
        self.quitting = true;
    }

    pub fn show_toast(&mut self, title: &str, message: &str, severity: Severity) {
        self.toasts.push(title, message, severity, self.now);
    }

    pub fn set_theme(&mut self, theme: Theme) {
        info!(theme = %theme, "Theme changed");
        self.theme = theme;
        self.show_toast("Theme Updated", theme.announcement(), Severity::Success);
    }

    pub fn toggle_god_mode(&mut self) {
        self.god_mode = !self.god_mode;
        info!(enabled = self.god_mode, "God mode toggled");
        self.show_toast(
            "GOD MODE ACTIVATED",
            "System resources overclocked. RGB initialized.",
            Severity::Success,
        );
    }

    pub fn crash(&mut self) {
        info!("Crashing to blue screen");
        self.reboot_at = None;
        self.screen = Screen::Crash;
    }

    /// Back to the boot screen with a fresh desktop. Theme and god mode
    /// survive.
    pub fn reboot(&mut self) {
        info!("Rebooting");
        let now = self.now;
        let catalog = *self.shell.catalog();
        self.shell = new_shell(&self.settings, catalog, now);
        self.screen = Screen::Boot(BootSequence::new(now));
        self.focus = Focus::default();
        self.section = Section::default();
        self.selected_project = 0;
        self.blueprint = None;
        self.palette = None;
        self.toasts = ToastQueue::new(self.settings.behavior.toast_duration());
        self.konami = KonamiDetector::default();
        self.reboot_at = None;
    }

    pub fn finish_boot(&mut self) {
        if matches!(self.screen, Screen::Boot(_)) {
            self.screen = Screen::Desktop;
        }
    }

    pub fn project_count(&self) -> usize {
        self.catalog().projects.len()
    }

    pub fn select_project(&mut self, delta: isize) {
        let count = self.project_count();
        if count == 0 {
            return;
        }
        self.selected_project =
            (self.selected_project as isize + delta).rem_euclid(count as isize) as usize;
    }
}

fn new_shell(settings: &Settings, catalog: ContentCatalog, now: Instant) -> Shell {
    Shell::new(catalog, &settings.shell.user, &settings.shell.host, now)
}
