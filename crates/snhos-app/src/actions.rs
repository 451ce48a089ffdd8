//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::joke::JokeSource;
use crate::message::Message;
use crate::shell::output::EntryId;
use crate::UpdateAction;

/// Pause before a fetched joke is revealed, so the "Connecting" line is seen
pub const JOKE_REVEAL_DELAY: Duration = Duration::from_millis(800);

/// Execute an action by spawning a background task
///
/// Handles are pushed onto `tasks` so the runner can abort them on shutdown.
pub fn handle_action<S>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    source: &Arc<S>,
    tasks: &mut Vec<JoinHandle<()>>,
) where
    S: JokeSource + Sync + 'static,
{
    tasks.retain(|handle| !handle.is_finished());

    match action {
        UpdateAction::FetchJoke { entry } => {
            let handle = spawn_joke_fetch(entry, msg_tx, source.clone(), JOKE_REVEAL_DELAY);
            tasks.push(handle);
        }
    }
}

/// Fetch one joke and report it as [`Message::JokeFetched`]
///
/// Successful fetches wait `reveal_delay` first; failures report at once.
pub(crate) fn spawn_joke_fetch<S>(
    entry: EntryId,
    msg_tx: mpsc::Sender<Message>,
    source: Arc<S>,
    reveal_delay: Duration,
) -> JoinHandle<()>
where
    S: JokeSource + Sync + 'static,
{
    tokio::spawn(async move {
        let result = JokeSource::fetch(&*source).await;
        if result.is_ok() && !reveal_delay.is_zero() {
            tokio::time::sleep(reveal_delay).await;
        }
        if msg_tx
            .send(Message::JokeFetched { entry, result })
            .await
            .is_err()
        {
            debug!(entry, "Joke arrived after shutdown");
        }
    })
}
