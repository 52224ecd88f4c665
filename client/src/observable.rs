//! Observable value primitives for presentation layers.
//!
//! Two flavours exist and they must not be confused:
//!
//! - [`StateCell`] holds a current value. Subscribers created at any time see
//!   the latest value first (replay of one).
//! - [`EventStream`] publishes one-shot events. Only subscriptions that exist
//!   at emission time receive an event; nothing is kept for later.

use tokio::sync::{broadcast, watch};

/// Per-subscriber backlog for [`EventStream`].
///
/// Subscribers that fall further behind skip the oldest events.
const EVENT_BACKLOG: usize = 16;

/// Writable last-value cell.
///
/// # Examples
/// ```
/// use food_delivery_client::observable::StateCell;
///
/// let cell = StateCell::new(1_u8);
/// cell.set(2);
/// let mut late = cell.view();
/// assert_eq!(late.get(), 2);
/// ```
#[derive(Debug)]
pub struct StateCell<T> {
    sender: watch::Sender<T>,
}

impl<T: Clone> StateCell<T> {
    /// Create a cell holding `initial`.
    pub fn new(initial: T) -> Self {
        let (sender, _receiver) = watch::channel(initial);
        Self { sender }
    }

    /// Replace the current value and notify every view.
    ///
    /// Works with zero views; the value is kept for future ones.
    pub fn set(&self, value: T) {
        self.sender.send_replace(value);
    }

    /// Clone of the current value.
    pub fn get(&self) -> T {
        self.sender.borrow().clone()
    }

    /// Read-only view that starts at the current value.
    pub fn view(&self) -> StateView<T> {
        StateView {
            receiver: self.sender.subscribe(),
        }
    }
}

/// Read side of a [`StateCell`].
#[derive(Debug, Clone)]
pub struct StateView<T> {
    receiver: watch::Receiver<T>,
}

impl<T: Clone> StateView<T> {
    /// Clone of the latest value, marking it as seen.
    pub fn get(&mut self) -> T {
        self.receiver.borrow_and_update().clone()
    }

    /// Clone of the latest value without marking it as seen.
    pub fn peek(&self) -> T {
        self.receiver.borrow().clone()
    }

    /// Wait until a value newer than the last one seen is published.
    ///
    /// Returns `None` once the owning cell has been dropped.
    pub async fn changed(&mut self) -> Option<T> {
        self.receiver.changed().await.ok()?;
        Some(self.get())
    }
}

/// Fire-and-forget event publisher.
#[derive(Debug)]
pub struct EventStream<T> {
    sender: broadcast::Sender<T>,
}

impl<T: Clone> EventStream<T> {
    /// Create a publisher with no subscribers.
    pub fn new() -> Self {
        let (sender, _receiver) = broadcast::channel(EVENT_BACKLOG);
        Self { sender }
    }

    /// Publish `event` to current subscribers and return how many received it.
    ///
    /// With no subscribers the event is dropped and `0` is returned.
    pub fn emit(&self, event: T) -> usize {
        self.sender.send(event).unwrap_or(0)
    }

    /// Subscribe to events emitted from now on.
    pub fn subscribe(&self) -> EventSubscription<T> {
        EventSubscription {
            receiver: self.sender.subscribe(),
        }
    }
}

impl<T: Clone> Default for EventStream<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving side of an [`EventStream`].
#[derive(Debug)]
pub struct EventSubscription<T> {
    receiver: broadcast::Receiver<T>,
}

impl<T: Clone> EventSubscription<T> {
    /// Wait for the next event.
    ///
    /// Returns `None` once the publisher has been dropped and every pending
    /// event was consumed.
    pub async fn recv(&mut self) -> Option<T> {
        loop {
            match self.receiver.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "event subscriber lagged");
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    /// Take the next pending event without waiting.
    pub fn try_recv(&mut self) -> Option<T> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) => return Some(event),
                Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "event subscriber lagged");
                }
                Err(
                    broadcast::error::TryRecvError::Empty | broadcast::error::TryRecvError::Closed,
                ) => return None,
            }
        }
    }
}
