//! SNH_OS - a retro terminal portfolio
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use snhos_app::config::{self, SettingsOverrides};
use snhos_core::Theme;

/// SNH_OS - a retro terminal portfolio
#[derive(Parser, Debug)]
#[command(name = "snhos", version)]
#[command(about = "A retro terminal portfolio that runs in your terminal", long_about = None)]
struct Args {
    /// Settings file (defaults to <config_dir>/snh-os/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Go straight to the desktop
    #[arg(long)]
    skip_boot: bool,

    /// Accent theme: amber, green or purple
    #[arg(long, value_name = "THEME")]
    theme: Option<Theme>,

    /// User name shown in the prompt
    #[arg(long, value_name = "NAME")]
    user: Option<String>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    snhos_core::logging::init()?;

    let mut settings = config::load_settings(args.config.as_deref());
    settings.apply(SettingsOverrides {
        theme: args.theme,
        skip_boot: args.skip_boot,
        user: args.user,
    });

    snhos_tui::run(settings).await?;
    Ok(())
}
