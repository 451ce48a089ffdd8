//! Main TUI runner - entry point and event loop
//!
//! The loop drains background messages, draws, then waits for a key no
//! longer than the time left until the next tick. Ticks are emitted on
//! schedule even while keys keep arriving, so animations never stall.

use std::sync::Arc;
use std::time::{Duration, Instant};

use snhos_app::config::Settings;
use snhos_app::process::process_message;
use snhos_app::signals::spawn_signal_handler;
use snhos_app::{AppState, ConfiguredJokeSource, JokeSource, Message};
use snhos_core::prelude::*;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::{event, render, terminal};

/// Run the desktop until the user quits
pub async fn run(settings: Settings) -> Result<()> {
    terminal::install_panic_hook();

    let source = Arc::new(ConfiguredJokeSource::from_settings(&settings.network));
    info!(
        "Starting SNH_OS: theme={} skip_boot={} network={}",
        settings.ui.theme.as_str(),
        settings.ui.skip_boot,
        source.is_enabled()
    );
    if let Some(url) = source.endpoint() {
        debug!("Jokes from {}", url);
    }
    let tick_rate = settings.ui.tick_rate();

    let mut term = ratatui::init();
    let mut state = AppState::new(settings, Instant::now());

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(64);
    let signal_task = spawn_signal_handler(msg_tx.clone());
    let mut tasks: Vec<JoinHandle<()>> = Vec::new();

    let result = run_loop(
        &mut term,
        &mut state,
        msg_rx,
        &msg_tx,
        &source,
        &mut tasks,
        tick_rate,
    );

    // Abandon in-flight fetches; their results have nowhere to go
    signal_task.abort();
    for task in tasks.drain(..) {
        task.abort();
    }

    ratatui::restore();
    info!("SNH_OS shut down");
    result
}

fn run_loop<S>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: &mpsc::Sender<Message>,
    source: &Arc<S>,
    tasks: &mut Vec<JoinHandle<()>>,
    tick_rate: Duration,
) -> Result<()>
where
    S: JokeSource + Sync + 'static,
{
    let mut last_tick = Instant::now();

    while !state.should_quit() {
        // Results from background tasks and the signal handler
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, msg_tx, source, tasks);
        }

        terminal
            .draw(|frame| render::view(frame, state))
            .context("Failed to draw frame")?;

        let timeout = poll_timeout(last_tick.elapsed(), tick_rate);
        if let Some(message) = event::poll(timeout)? {
            process_message(state, message, msg_tx, source, tasks);
        }

        if last_tick.elapsed() >= tick_rate {
            let now = Instant::now();
            process_message(state, Message::Tick(now), msg_tx, source, tasks);
            last_tick = now;
        }
    }

    Ok(())
}

/// How long to wait for input before the next tick is due
pub fn poll_timeout(since_tick: Duration, tick_rate: Duration) -> Duration {
    tick_rate.saturating_sub(since_tick)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_timeout_counts_down() {
        let rate = Duration::from_millis(33);
        assert_eq!(poll_timeout(Duration::ZERO, rate), rate);
        assert_eq!(
            poll_timeout(Duration::from_millis(20), rate),
            Duration::from_millis(13)
        );
    }

    #[test]
    fn test_poll_timeout_never_negative() {
        let rate = Duration::from_millis(33);
        assert_eq!(poll_timeout(Duration::from_millis(50), rate), Duration::ZERO);
    }
}
