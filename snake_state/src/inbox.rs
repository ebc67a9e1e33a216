// inbox.rs - Hand-off between the chat bridge and the game loop

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::sync::mpsc::error::TryRecvError;

/// Producer half, cloned into the chat handler.
#[derive(Debug, Clone)]
pub struct MessageSender {
    tx: UnboundedSender<String>,
}

/// Consumer half, owned by the game.
#[derive(Debug)]
pub struct MessageInbox {
    rx: UnboundedReceiver<String>,
}

pub fn channel() -> (MessageSender, MessageInbox) {
    let (tx, rx) = mpsc::unbounded_channel();
    (MessageSender { tx }, MessageInbox { rx })
}

impl MessageSender {
    /// Returns false once the game side has been dropped.
    pub fn send(&self, message: impl Into<String>) -> bool {
        self.tx.send(message.into()).is_ok()
    }
}

impl MessageInbox {
    /// Empties the queue and returns only the most recent message.
    pub fn take_last(&mut self) -> Option<String> {
        let mut last = None;
        loop {
            match self.rx.try_recv() {
                Ok(message) => last = Some(message),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        last
    }
}
