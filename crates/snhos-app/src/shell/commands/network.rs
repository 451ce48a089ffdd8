//! Simulated network tools. Only `joke` reaches the real network, and it does
//! so through an action, never from the handler.

use rand::Rng;

use super::{Invocation, Response};
use crate::shell::output::{LiveOutput, OutputLine};
use crate::shell::script::TimedScript;
use crate::shell::Shell;

const SCAN_STEPS: [(u64, &str); 8] = [
    (400, "Target: localhost (127.0.0.1)"),
    (800, "Scanning ports 1-1024..."),
    (1200, "Found open port: 80 (HTTP) - Nginx"),
    (1600, "Found open port: 443 (HTTPS) - OpenSSL"),
    (2000, "Found open port: 3000 (React Dev Server)"),
    (2500, "Analyzing services..."),
    (3200, "Vulnerability check: CVE-2025-XXXX... SAFE"),
    (3800, "Scan complete. System integrity: 100%"),
];

pub(super) fn scan(_shell: &mut Shell, inv: &Invocation<'_>) -> Response {
    let last = SCAN_STEPS.len() - 1;
    let script = SCAN_STEPS
        .iter()
        .enumerate()
        .fold(TimedScript::new(), |script, (idx, (at, text))| {
            let line = if idx == last {
                OutputLine::success(*text).bold()
            } else if text.contains("SAFE") || text.contains("integrity") {
                OutputLine::success(*text)
            } else {
                OutputLine::muted(*text)
            };
            script.at(*at, line)
        });
    Response::scripted(
        vec![OutputLine::muted("Initializing network scan...")],
        script,
        inv.now,
    )
}

pub(super) fn ping(shell: &mut Shell, inv: &Invocation<'_>) -> Response {
    let host = inv.arg(0).unwrap_or("google.com");
    let mut script = TimedScript::new();
    for seq in 1..=4u64 {
        let time = shell.rng.gen_range(10..60);
        script = script.at(
            seq * 1000,
            OutputLine::plain(format!(
                "64 bytes from {host}: icmp_seq={seq} ttl=117 time={time} ms"
            )),
        );
    }
    let script = script.at_all(
        4500,
        [
            OutputLine::blank(),
            OutputLine::plain(format!("--- {host} ping statistics ---")),
            OutputLine::plain("4 packets transmitted, 4 received, 0% packet loss"),
        ],
    );
    Response::scripted(
        vec![OutputLine::plain(format!(
            "PING {host} ({host}) 56(84) bytes of data."
        ))],
        script,
        inv.now,
    )
}

pub(super) fn trace(_shell: &mut Shell, _inv: &Invocation<'_>) -> Response {
    Response::lines(vec![
        OutputLine::muted("Tracing route to nisar-syed-portfolio [127.0.0.1]..."),
        OutputLine::muted("1  192.168.1.1     <1 ms  <1 ms  <1 ms  Localhost"),
        OutputLine::muted(
            "2  10.244.0.1      2 ms   1 ms   3 ms   gateway.kubernetes.docker.internal",
        ),
        OutputLine::success("3  127.0.0.1       1 ms   1 ms   1 ms   TARGET REACHED"),
    ])
}

pub(super) fn curl(_shell: &mut Shell, inv: &Invocation<'_>) -> Response {
    let url = inv.arg(0).unwrap_or("localhost");
    Response::lines(vec![
        OutputLine::muted("> GET / HTTP/1.1"),
        OutputLine::muted(format!("> Host: {url}")),
        OutputLine::muted("> User-Agent: curl/7.68.0"),
        OutputLine::muted("> Accept: */*"),
        OutputLine::muted("< HTTP/1.1 200 OK"),
        OutputLine::muted("< Content-Type: text/html"),
        OutputLine::muted("< Content-Length: 420"),
        OutputLine::blank(),
        OutputLine::primary("<!DOCTYPE html><html><body><h1>Hello World</h1></body></html>"),
    ])
}

pub(super) fn whois(shell: &mut Shell, inv: &Invocation<'_>) -> Response {
    let domain = inv.arg(0).unwrap_or("snh.dev");
    let personal = shell.catalog().personal;
    Response::lines(vec![
        OutputLine::muted(format!("Domain Name: {}", domain.to_uppercase())),
        OutputLine::muted("Registry Domain ID: 8675309_DOMAIN_COM-VRSN"),
        OutputLine::muted("Registrar WHOIS Server: whois.google.com"),
        OutputLine::muted("Registrar URL: http://www.google.com"),
        OutputLine::muted("Updated Date: 2025-01-01T12:00:00Z"),
        OutputLine::muted("Creation Date: 2020-05-10T04:20:00Z"),
        OutputLine::muted("Registrar: GOOGLE INC."),
        OutputLine::muted(format!("Registrant Name: {}", personal.name)),
        OutputLine::muted("Registrant City: Karachi"),
        OutputLine::muted("Registrant Country: PK"),
        OutputLine::blank(),
        OutputLine::success(
            "Status: clientTransferProhibited https://icann.org/epp#clientTransferProhibited",
        ),
    ])
}

/// Prints a placeholder; the shell turns the live marker into a fetch
pub(super) fn joke(_shell: &mut Shell, _inv: &Invocation<'_>) -> Response {
    Response {
        lines: vec![OutputLine::faint("Connecting to humor database...")],
        // index within the response lines; the echo line shifts it by one
        live: Some(LiveOutput::Joke { placeholder: 0 }),
        ..Response::default()
    }
}
