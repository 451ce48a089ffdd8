//! Command table and the handlers behind it.
//!
//! Handlers are plain functions over the shell session. They never touch the
//! terminal and never fail: every problem becomes an output line.
//!
//! - `fs`: navigation, `cat`, `grep` and the editors
//! - `system`: system information theater and `apt`
//! - `network`: `ping`, `curl`, `whois`, `scan`, `trace`, `joke`
//! - `fun`: toys and small utilities
//! - `meta`: help, theme, games, power and content shortcuts

mod fs;
mod fun;
mod meta;
mod network;
mod system;

use std::time::Instant;

use super::output::{LiveOutput, OutputLine};
use super::script::TimedScript;
use super::{Shell, ShellEffect};
use crate::modes::Mode;

/// A parsed command line
#[derive(Debug, Clone)]
pub struct Invocation<'a> {
    /// Trimmed line as typed
    pub line: &'a str,
    /// First token, lowercased
    pub name: String,
    /// Remaining tokens
    pub args: Vec<&'a str>,
    pub now: Instant,
}

impl<'a> Invocation<'a> {
    /// Split a trimmed, non-empty line
    pub fn parse(line: &'a str, now: Instant) -> Self {
        let mut tokens = line.split_whitespace();
        let name = tokens.next().unwrap_or_default().to_lowercase();
        Self {
            line,
            name,
            args: tokens.collect(),
            now,
        }
    }

    pub fn arg(&self, idx: usize) -> Option<&'a str> {
        self.args.get(idx).copied()
    }

    /// Arguments joined with `sep`
    pub fn rest(&self, sep: &str) -> String {
        self.args.join(sep)
    }
}

/// What a handler produced
#[derive(Debug, Default)]
pub struct Response {
    pub lines: Vec<OutputLine>,
    pub live: Option<LiveOutput>,
    pub effect: Option<ShellEffect>,
    pub mode: Option<Mode>,
    /// Drop every entry instead of appending one
    pub clear: bool,
}

impl Response {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn lines(lines: Vec<OutputLine>) -> Self {
        Self {
            lines,
            ..Self::default()
        }
    }

    pub fn line(line: OutputLine) -> Self {
        Self::lines(vec![line])
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::line(OutputLine::error(text))
    }

    /// Lines shown now plus a script revealing the rest over time
    pub fn scripted(lines: Vec<OutputLine>, script: TimedScript, now: Instant) -> Self {
        Self {
            lines,
            live: Some(LiveOutput::Script(script.start(now))),
            ..Self::default()
        }
    }

    pub fn enter(mode: Mode) -> Self {
        Self {
            mode: Some(mode),
            ..Self::default()
        }
    }

    pub fn with_effect(mut self, effect: ShellEffect) -> Self {
        self.effect = Some(effect);
        self
    }
}

pub type Handler = fn(&mut Shell, &Invocation<'_>) -> Response;

/// One row of the command table
pub struct CommandSpec {
    pub name: &'static str,
    /// Usage as printed by `help`
    pub usage: &'static str,
    pub summary: &'static str,
    /// Whether `help` lists the command
    pub listed: bool,
    pub handler: Handler,
}

const fn listed(
    name: &'static str,
    usage: &'static str,
    summary: &'static str,
    handler: Handler,
) -> CommandSpec {
    CommandSpec {
        name,
        usage,
        summary,
        listed: true,
        handler,
    }
}

const fn hidden(name: &'static str, handler: Handler) -> CommandSpec {
    CommandSpec {
        name,
        usage: name,
        summary: "",
        listed: false,
        handler,
    }
}

/// Every command the shell understands, listed ones in `help` order
pub static COMMANDS: &[CommandSpec] = &[
    listed("ls", "ls", "List directory contents", fs::ls),
    listed("cd", "cd [dir]", "Change the current working directory", fs::cd),
    listed("cat", "cat [file]", "Concatenate and display file content", fs::cat),
    listed("grep", "grep [str]", "Search for patterns in files", fs::grep),
    listed("vi", "vi [file]", "Edit file (Vim editor)", fs::vim),
    listed("nano", "nano [file]", "Edit file (Nano editor)", fs::nano),
    listed("apt", "apt [cmd]", "Package manager (update, install)", system::apt),
    listed("pwd", "pwd", "Print working directory", fs::pwd),
    listed("neofetch", "neofetch", "Display system information", system::neofetch),
    listed("git", "git [cmd]", "Execute git commands (status, log)", fun::git),
    listed("calc", "calc [exp]", "Calculate math expression", fun::calc),
    listed("clear", "clear", "Clear the terminal screen", meta::clear),
    listed("top", "top", "Display active system processes", system::top),
    listed("scan", "scan", "Perform network vulnerability scan", network::scan),
    listed("ping", "ping [host]", "Ping a remote host", network::ping),
    listed("sl", "sl", "Steam Locomotive", fun::sl),
    listed("cowsay", "cowsay [msg]", "Make the cow speak", fun::cowsay),
    listed("fortune", "fortune", "Display a random dev quote", fun::fortune),
    listed("joke", "joke", "Tell a random programming joke", network::joke),
    listed("shop", "shop", "Open developer item shop", fun::shop),
    listed("ascii", "ascii", "Show random ASCII art", fun::ascii),
    listed("history", "history", "Show command history", system::history),
    listed("game", "game [name]", "Play games (pong, runner, hack)", meta::game),
    listed("deploy", "deploy", "Simulate deployment pipeline", meta::deploy),
    listed("trace", "trace", "Trace route to server", network::trace),
    listed("matrix", "matrix", "Enter the matrix", meta::matrix),
    listed("weather", "weather", "Fetch weather report", fun::weather),
    listed("theme", "theme [color]", "Change system theme (amber, green, purple)", meta::theme),
    listed("shutdown", "shutdown", "Halt system", meta::shutdown),
    listed("reboot", "reboot", "Reboot system", meta::reboot),
    hidden("help", meta::help),
    hidden("vim", fs::vim),
    hidden("uptime", system::uptime),
    hidden("whoami", system::whoami),
    hidden("who", system::who),
    hidden("date", system::date),
    hidden("su", system::su),
    hidden("curl", network::curl),
    hidden("whois", network::whois),
    hidden("buy", fun::buy),
    hidden("credits", fun::credits),
    hidden("echo", fun::echo),
    hidden("man", fun::man),
    hidden("about", meta::about),
    hidden("contact", meta::contact),
    hidden("projects", meta::explore_tip),
    hidden("experience", meta::explore_tip),
    hidden("skills", meta::explore_tip),
];

pub fn lookup(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|c| c.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_names_are_unique() {
        let mut names: Vec<_> = COMMANDS.iter().map(|c| c.name).collect();
        names.sort_unstable();
        let before = names.len();
        names.dedup();
        assert_eq!(before, names.len());
    }

    #[test]
    fn test_help_lists_thirty_commands() {
        assert_eq!(COMMANDS.iter().filter(|c| c.listed).count(), 30);
        assert_eq!(COMMANDS[0].name, "ls");
        assert_eq!(COMMANDS[29].name, "reboot");
    }

    #[test]
    fn test_parse_lowercases_name_only() {
        let inv = Invocation::parse("CAT  About.txt", Instant::now());
        assert_eq!(inv.name, "cat");
        assert_eq!(inv.args, ["About.txt"]);
        assert_eq!(inv.line, "CAT  About.txt");
    }

    #[test]
    fn test_lookup() {
        assert!(lookup("neofetch").is_some());
        assert!(lookup("sudo").is_none());
    }
}
