//! Custom widget components

mod blueprint;
mod boot_screen;
mod command_palette;
mod crash_screen;
mod header;
pub mod modal_overlay;
pub mod modes;
mod sections;
mod shell_view;
mod toast_stack;

pub use blueprint::{doc_id, BlueprintModal};
pub use boot_screen::BootScreen;
pub use command_palette::CommandPaletteModal;
pub use crash_screen::CrashScreen;
pub use header::MainHeader;
pub use sections::SectionsPanel;
pub use shell_view::{wrap_line, ShellView};
pub use toast_stack::ToastStack;
