//! Message processing: runs the TEA update loop and dispatches actions

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::actions::handle_action;
use crate::handler;
use crate::joke::JokeSource;
use crate::message::Message;
use crate::state::AppState;

/// Process a message and every follow-up it produces
pub fn process_message<S>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    source: &Arc<S>,
    tasks: &mut Vec<JoinHandle<()>>,
) where
    S: JokeSource + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), source, tasks);
        }

        msg = result.message;
    }
}
