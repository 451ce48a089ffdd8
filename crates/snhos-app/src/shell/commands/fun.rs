//! Toys and small utilities

use chrono::Local;
use rand::seq::SliceRandom;
use snhos_core::calc;

use super::{Invocation, Response};
use crate::shell::output::{block, LiveOutput, OutputLine, Tone};
use crate::shell::script::TrainRide;
use crate::shell::Shell;

const FORTUNES: [&str; 7] = [
    "\"First, solve the problem. Then, write the code.\" - John Johnson",
    "\"Experience is the name everyone gives to their mistakes.\" - Oscar Wilde",
    "\"Java is to JavaScript what car is to Carpet.\" - Chris Heilmann",
    "\"Knowledge is power.\" - Francis Bacon",
    "\"Simplicity is the soul of efficiency.\" - Austin Freeman",
    "\"Before software can be reusable it first has to be usable.\" - Ralph Johnson",
    "\"Make it work, make it right, make it fast.\" - Kent Beck",
];

const ASCII_ART: [&str; 3] = [
    r"    \_/_/
    ( o.o )
     > ^ <
   (robot)",
    r"   /\___/\
  (  o o  )
  /   *   \
  \__\_/__/
   (cat)",
    r"      .--.
    |o_o |
    |:_/ |
   //   \ \
  (|     | )
 /'\_   _/`\
 \___)=(___/
   (tux)",
];

const COW: &str = r"        \   ^__^
         \  (oo)\_______
            (__)\       )\/\
                ||----w |
                ||     ||";

const WEATHER_ICON: &str = r"   \   /
    .-.
 ― (   ) ―
    `-'
   /   \";

/// `(id, item, cost in XP)`
const SHOP_ITEMS: [(&str, &str, u32); 5] = [
    ("01", "Coffee Refill", 50),
    ("02", "Mechanical Switch (Blue)", 150),
    ("03", "Dark Mode License", 500),
    ("04", "RTX 5090 Ti", 9999),
    ("05", "StackOverflow Premium", 1337),
];

pub(super) fn git(shell: &mut Shell, inv: &Invocation<'_>) -> Response {
    match inv.arg(0) {
        Some("status") => Response::lines(vec![
            OutputLine::plain("On branch main"),
            OutputLine::plain("Your branch is up to date with 'origin/main'."),
            OutputLine::blank(),
            OutputLine::plain("nothing to commit, working tree clean"),
        ]),
        Some("log") => {
            let personal = shell.catalog().personal;
            Response::lines(vec![
                OutputLine::primary("commit 8d2f1a... (HEAD -> main)"),
                OutputLine::muted(format!("Author: {} <{}>", personal.name, personal.email)),
                OutputLine::muted(format!("Date:   {}", Local::now().format("%a %b %d %Y"))),
                OutputLine::muted("    Update portfolio features"),
            ])
        }
        Some("commit") => {
            Response::error("fatal: nothing added to commit but untracked files present")
        }
        other => Response::line(OutputLine::plain(format!(
            "git: '{}' is not a git command. See 'git --help'.",
            other.unwrap_or_default()
        ))),
    }
}

pub(super) fn calc(_shell: &mut Shell, inv: &Invocation<'_>) -> Response {
    let expr = inv.rest("");
    match calc::evaluate(&expr) {
        Ok(value) => Response::line(OutputLine::success(calc::format_number(value))),
        Err(_) => Response::error("Error: Invalid expression. Usage: calc 2+2"),
    }
}

pub(super) fn sl(_shell: &mut Shell, inv: &Invocation<'_>) -> Response {
    Response {
        live: Some(LiveOutput::Train(TrainRide::start(inv.now))),
        ..Response::default()
    }
}

pub(super) fn cowsay(_shell: &mut Shell, inv: &Invocation<'_>) -> Response {
    let msg = match inv.rest(" ") {
        m if m.is_empty() => "Moo".to_string(),
        m => m,
    };
    let width = msg.chars().count() + 2;
    let mut lines = vec![
        OutputLine::plain(format!(" {}", "_".repeat(width))),
        OutputLine::plain(format!("< {msg} >")),
        OutputLine::plain(format!(" {}", "-".repeat(width))),
    ];
    lines.extend(block(Tone::Normal, COW));
    Response::lines(lines)
}

pub(super) fn fortune(shell: &mut Shell, _inv: &Invocation<'_>) -> Response {
    let quote = FORTUNES.choose(&mut shell.rng).copied().unwrap_or(FORTUNES[0]);
    Response::line(OutputLine::secondary(quote))
}

pub(super) fn shop(_shell: &mut Shell, _inv: &Invocation<'_>) -> Response {
    let mut lines = vec![
        OutputLine::primary("--- DEV_SHOP_V1.0 ---").bold(),
        OutputLine::secondary(format!("{:<4}{:<28}{:>10}", "ID", "ITEM", "COST (XP)")),
    ];
    for (id, item, cost) in SHOP_ITEMS {
        lines.push(
            OutputLine::muted(format!("{id:<4}"))
                .then(Tone::Normal, format!("{item:<28}"))
                .then(Tone::Success, format!("{cost:>10}")),
        );
    }
    lines.push(OutputLine::blank());
    lines.push(OutputLine::muted("To buy, type: buy [ID]"));
    Response::lines(lines)
}

pub(super) fn buy(_shell: &mut Shell, _inv: &Invocation<'_>) -> Response {
    Response::error("Transaction Failed: Insufficient Credits (Current: 0 XP)")
}

pub(super) fn ascii(shell: &mut Shell, _inv: &Invocation<'_>) -> Response {
    let art = ASCII_ART.choose(&mut shell.rng).copied().unwrap_or(ASCII_ART[0]);
    Response::lines(block(Tone::Primary, art))
}

pub(super) fn weather(_shell: &mut Shell, _inv: &Invocation<'_>) -> Response {
    let mut lines = block(Tone::Primary, WEATHER_ICON);
    lines.push(OutputLine::blank());
    for (label, value) in [
        ("LOCATION:", "Karachi, PK"),
        ("TEMP:", "32°C (Feels like 40°C)"),
        ("CONDITION:", "Clear Sky / Haze"),
    ] {
        lines.push(OutputLine::secondary(label).then(Tone::Normal, format!(" {value}")));
    }
    Response::lines(lines)
}

pub(super) fn credits(shell: &mut Shell, _inv: &Invocation<'_>) -> Response {
    Response::lines(vec![
        OutputLine::primary("PROJECT CREDITS").bold(),
        OutputLine::plain(format!("Director: {}", shell.catalog().personal.name)),
        OutputLine::plain("Tech Stack: Rust, Ratatui, Tokio"),
        OutputLine::plain("Inspiration: Retro Terminals, Cyberpunk, Linux"),
        OutputLine::plain("Thanks for visiting!"),
    ])
}

pub(super) fn echo(_shell: &mut Shell, inv: &Invocation<'_>) -> Response {
    Response::line(OutputLine::plain(inv.rest(" ")))
}

pub(super) fn man(_shell: &mut Shell, inv: &Invocation<'_>) -> Response {
    let text = match inv.arg(0) {
        Some(page) => format!("No manual entry for {page}"),
        None => "What manual page do you want?".to_string(),
    };
    Response::line(OutputLine::plain(text))
}
