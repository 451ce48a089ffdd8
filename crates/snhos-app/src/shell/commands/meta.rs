//! Help, theme, power, game launchers and content shortcuts

use rand::Rng;
use snhos_core::Theme;

use super::{Invocation, Response, COMMANDS};
use crate::modes::{HackingGame, MatrixRain, Mode, PongGame, RunnerGame};
use crate::shell::output::{OutputLine, Tone};
use crate::shell::{Shell, ShellEffect};

/// Width of the usage column in `help`
const USAGE_WIDTH: usize = 16;

const GAMES: [(&str, &str); 3] = [
    ("hack", "Fallout-style password hacking"),
    ("runner", "Infinite ASCII runner"),
    ("pong", "Classic Ping Pong"),
];

pub(super) fn help(_shell: &mut Shell, _inv: &Invocation<'_>) -> Response {
    let mut lines = vec![OutputLine::primary("AVAILABLE COMMANDS:").bold()];
    lines.extend(COMMANDS.iter().filter(|c| c.listed).map(|c| {
        OutputLine::secondary(format!("{:<USAGE_WIDTH$}", c.usage))
            .then(Tone::Faint, format!("- {}", c.summary))
    }));
    lines.push(OutputLine::blank());
    lines.push(OutputLine::faint("Type any command to execute."));
    Response::lines(lines)
}

pub(super) fn clear(_shell: &mut Shell, _inv: &Invocation<'_>) -> Response {
    Response {
        clear: true,
        ..Response::default()
    }
}

pub(super) fn theme(_shell: &mut Shell, inv: &Invocation<'_>) -> Response {
    let Some(name) = inv.arg(0) else {
        return Response::line(OutputLine::muted("Usage: theme [amber|green|purple]"));
    };
    match name.parse::<Theme>() {
        Ok(theme) => Response::line(OutputLine::success(format!(
            "System theme updated to '{theme}'."
        )))
        .with_effect(ShellEffect::ChangeTheme(theme)),
        Err(_) => Response::error("Invalid theme."),
    }
}

pub(super) fn game(shell: &mut Shell, inv: &Invocation<'_>) -> Response {
    let Some(name) = inv.arg(0) else {
        let mut lines = vec![OutputLine::primary("AVAILABLE GAMES:").bold()];
        for (game, blurb) in GAMES {
            lines.push(
                OutputLine::secondary(format!("{game:<8}"))
                    .bold()
                    .then(Tone::Normal, format!(" - {blurb}")),
            );
        }
        lines.push(OutputLine::blank());
        lines.push(OutputLine::faint("Usage: game [name]"));
        return Response::lines(lines);
    };

    let mode = match name.to_lowercase().as_str() {
        "hack" => Mode::Hacking(HackingGame::new(&mut shell.rng)),
        "runner" => Mode::Runner(RunnerGame::new(inv.now, shell.rng.gen())),
        "pong" => Mode::Pong(PongGame::new(inv.now)),
        _ => {
            return Response::error(format!("Game '{name}' not found. Type 'game' for list."));
        }
    };
    Response::enter(mode)
}

pub(super) fn matrix(shell: &mut Shell, inv: &Invocation<'_>) -> Response {
    Response::enter(Mode::Matrix(MatrixRain::new(inv.now, shell.rng.gen())))
}

pub(super) fn deploy(_shell: &mut Shell, _inv: &Invocation<'_>) -> Response {
    Response::lines(vec![
        OutputLine::secondary("Initiating CI/CD Pipeline..."),
        OutputLine::plain("✔ Fetching source code..."),
        OutputLine::plain("✔ Running tests (pytest)... ").then(Tone::Success, "PASSED"),
        OutputLine::plain("✔ Building Docker image..."),
        OutputLine::plain("✔ Pushing to Google Cloud Run..."),
        OutputLine::blank(),
        OutputLine::success("DEPLOYMENT SUCCESSFUL."),
    ])
}

pub(super) fn shutdown(_shell: &mut Shell, _inv: &Invocation<'_>) -> Response {
    Response::error("System halting...").with_effect(ShellEffect::ScheduleReboot)
}

pub(super) fn reboot(_shell: &mut Shell, _inv: &Invocation<'_>) -> Response {
    Response::line(OutputLine::primary("System rebooting..."))
        .with_effect(ShellEffect::ScheduleReboot)
}

pub(super) fn about(shell: &mut Shell, _inv: &Invocation<'_>) -> Response {
    Response::line(OutputLine::plain(shell.catalog().personal.bio))
}

pub(super) fn contact(shell: &mut Shell, _inv: &Invocation<'_>) -> Response {
    let personal = shell.catalog().personal;
    Response::lines(vec![
        OutputLine::plain(format!("EMAIL: {}", personal.email)),
        OutputLine::plain(format!("LINKEDIN: {}", personal.linkedin)),
    ])
}

/// `projects`, `experience` and `skills` point at the file system instead
pub(super) fn explore_tip(_shell: &mut Shell, inv: &Invocation<'_>) -> Response {
    Response::line(OutputLine::muted(format!(
        "Tip: Try using 'ls' and 'cd' to explore {} as files.",
        inv.name
    )))
}
