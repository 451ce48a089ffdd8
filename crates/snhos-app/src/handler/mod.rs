//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key routing per screen, overlay and focus

pub(crate) mod keys;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use crate::message::Message;
use crate::shell::output::EntryId;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Fetch a joke in the background and report back with
    /// [`Message::JokeFetched`]
    FetchJoke { entry: EntryId },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    /// Nothing further to do
    pub fn none() -> Self {
        Self::default()
    }

    /// Feed `msg` straight back into `update`
    pub fn follow_up(msg: Message) -> Self {
        Self {
            message: Some(msg),
            ..Self::default()
        }
    }

    /// Start the background fetch whose result fills `entry`
    pub fn fetch_joke(entry: EntryId) -> Self {
        Self {
            action: Some(UpdateAction::FetchJoke { entry }),
            ..Self::default()
        }
    }
}
