//! System information theater and the package manager

use chrono::Local;
use rand::Rng;

use super::{Invocation, Response};
use crate::shell::output::{block, OutputLine, Tone};
use crate::shell::script::TimedScript;
use crate::shell::Shell;

const NEOFETCH_LOGO: &str = r"       .---.
      /     \
      | SNH |
      \     /
       '---'
     .       .
    /|       |\
   / |       | \
  /  |       |  \
     |       |";

pub(super) fn neofetch(shell: &mut Shell, inv: &Invocation<'_>) -> Response {
    let personal = shell.catalog().personal;
    let field = |name: &str, value: String| {
        OutputLine::primary(name).then(Tone::Normal, format!(": {value}"))
    };

    let mut lines = block(Tone::Primary, NEOFETCH_LOGO);
    lines.push(OutputLine::blank());
    lines.push(OutputLine::primary(format!("{}@SNH_OS", shell.user())).bold());
    lines.push(OutputLine::plain("-----------------"));
    lines.push(field("OS", "SNH Arch Linux x86_64".into()));
    lines.push(field("Host", "Portfolio Web v2.5".into()));
    lines.push(field("Kernel", "React 19.2.0".into()));
    lines.push(field("Uptime", format!("{} mins", shell.uptime_minutes(inv.now))));
    lines.push(field("Packages", format!("{} (projects)", shell.fs().count("projects"))));
    lines.push(field("Shell", "bash 5.1".into()));
    lines.push(field("Role", personal.role.into()));
    lines.push(field("Location", personal.location.into()));
    Response::lines(lines)
}

pub(super) fn top(shell: &mut Shell, inv: &Invocation<'_>) -> Response {
    let user = shell.user().to_string();
    let procs: [(u32, &str, i32, char, f32, f32, &str); 5] = [
        (1337, &user, 20, 'R', 12.5, 4.2, "portfolio_v2"),
        (1, "root", 20, 'S', 0.0, 0.1, "systemd"),
        (420, &user, 20, 'S', 0.2, 1.5, "react_renderer"),
        (69, "root", -20, 'S', 0.0, 0.0, "kworker"),
        (8080, &user, 20, 'S', 0.1, 2.3, "node"),
    ];

    let mut lines = vec![
        OutputLine::muted(format!(
            "top - {} up {} min,  1 user,  load average: 0.15, 0.05, 0.01",
            Local::now().format("%-I:%M:%S %p"),
            shell.uptime_minutes(inv.now)
        )),
        OutputLine::plain("Tasks: 12 total,   1 running,  11 sleeping,   0 stopped,   0 zombie"),
        OutputLine::blank(),
        OutputLine::secondary(format!(
            "{:<7}{:<10}{:<5}{:<4}{:<3}{:<6}{:<6}{}",
            "PID", "USER", "PR", "NI", "S", "%CPU", "%MEM", "COMMAND"
        ))
        .bold(),
    ];
    for (pid, user, pr, state, cpu, mem, cmd) in procs {
        lines.push(
            OutputLine::primary(format!("{pid:<7}"))
                .then(
                    Tone::Muted,
                    format!("{user:<10}{pr:<5}{:<4}{state:<3}{cpu:<6.1}{mem:<6.1}", 0),
                )
                .then(Tone::Bright, cmd),
        );
    }
    Response::lines(lines)
}

pub(super) fn uptime(shell: &mut Shell, inv: &Invocation<'_>) -> Response {
    Response::line(OutputLine::plain(format!(
        "up {} minutes, 1 user, load average: 0.08, 0.03, 0.01",
        shell.uptime_minutes(inv.now)
    )))
}

pub(super) fn whoami(shell: &mut Shell, _inv: &Invocation<'_>) -> Response {
    Response::line(OutputLine::plain(format!("{} (Guest User)", shell.user())))
}

pub(super) fn who(shell: &mut Shell, _inv: &Invocation<'_>) -> Response {
    Response::line(OutputLine::plain(format!(
        "{}  pts/0        {} 10:00 (127.0.0.1)",
        shell.user(),
        Local::now().format("%Y-%m-%d")
    )))
}

pub(super) fn date(_shell: &mut Shell, _inv: &Invocation<'_>) -> Response {
    Response::line(OutputLine::plain(
        Local::now().format("%a %b %d %Y %H:%M:%S GMT%z").to_string(),
    ))
}

/// Numbered from 1, oldest first. The running command is already recorded.
pub(super) fn history(shell: &mut Shell, _inv: &Invocation<'_>) -> Response {
    Response::lines(
        shell
            .history()
            .enumerate()
            .map(|(idx, cmd)| OutputLine::muted(format!("{}  {cmd}", idx + 1)))
            .collect(),
    )
}

pub(super) fn su(shell: &mut Shell, inv: &Invocation<'_>) -> Response {
    match inv.arg(0) {
        Some(user) => {
            shell.set_user(user);
            Response::line(OutputLine::plain(format!("Switched user to {user}")))
        }
        None => Response::line(OutputLine::plain("Usage: su [username]")),
    }
}

const APT_REPOS: [&str; 3] = [
    "http://security.ubuntu.com/ubuntu jammy-security InRelease",
    "http://archive.ubuntu.com/ubuntu jammy InRelease",
    "http://archive.ubuntu.com/ubuntu jammy-updates InRelease",
];

pub(super) fn apt(shell: &mut Shell, inv: &Invocation<'_>) -> Response {
    let Some(sub) = inv.arg(0) else {
        return Response::lines(vec![
            OutputLine::plain("apt 2.4.10 (amd64)"),
            OutputLine::plain("Usage: apt command [options]"),
        ]);
    };

    let first = vec![OutputLine::muted("Reading package lists... Done")];
    let script = match sub {
        "update" => {
            let mut script = TimedScript::new();
            for (idx, repo) in APT_REPOS.iter().enumerate() {
                let kb = shell.rng.gen_range(0..200);
                script = script.at(
                    (idx as u64 + 1) * 300,
                    OutputLine::muted(format!("Get:{} {repo} [{kb} kB]", idx + 1)),
                );
            }
            script.at_all(
                1500,
                [
                    OutputLine::muted("Fetched 4,200 kB in 1s (3,500 kB/s)"),
                    OutputLine::muted("Reading package lists... Done"),
                ],
            )
        }
        "upgrade" => TimedScript::new().at_all(
            800,
            [
                OutputLine::muted("Calculating upgrade... Done"),
                OutputLine::muted(
                    "0 upgraded, 0 newly installed, 0 to remove and 0 not upgraded.",
                ),
            ],
        ),
        "install" => match inv.arg(1) {
            None => {
                let mut lines = first;
                lines.push(OutputLine::muted("apt install: missing package name"));
                return Response::lines(lines);
            }
            Some(pkg) => install_script(shell, pkg),
        },
        _ => return Response::lines(first),
    };

    Response::scripted(first, script, inv.now)
}

fn install_script(shell: &mut Shell, pkg: &str) -> TimedScript {
    let archive_kb = shell.rng.gen_range(0..5000);
    let package_kb = shell.rng.gen_range(0..5000);
    let steps = [
        (300, "Building dependency tree... Done".to_string()),
        (600, "Reading state information... Done".to_string()),
        (900, format!("The following NEW packages will be installed: {pkg}")),
        (1200, "0 upgraded, 1 newly installed, 0 to remove.".to_string()),
        (1500, format!("Need to get {archive_kb} kB of archives.")),
        (
            2000,
            format!(
                "Get:1 http://archive.ubuntu.com/ubuntu jammy/main amd64 {pkg} [{package_kb} kB]"
            ),
        ),
        (2500, format!("Selecting previously unselected package {pkg}.")),
        (
            2800,
            "(Reading database ... 254302 files and directories currently installed.)".to_string(),
        ),
        (3100, format!("Preparing to unpack .../{pkg} ...")),
        (3400, format!("Unpacking {pkg} ...")),
        (4000, format!("Setting up {pkg} ...")),
        (4500, "Processing triggers for man-db (2.10.2-1) ...".to_string()),
    ];
    steps
        .into_iter()
        .fold(TimedScript::new(), |script, (at, text)| {
            script.at(at, OutputLine::muted(text))
        })
}
