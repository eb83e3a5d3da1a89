//! Event ingress channel.
//!
//! - The host publishes via `EventPublisher::publish()`, from any thread
//! - The plugin polls via `EventBus::drain()` on its serialized queue
//!
//! Order is preserved: events come out exactly as they went in.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use super::types::PipEvent;

/// Single-consumer ingress queue for overlay events.
///
/// # Example
///
/// ```
/// use pip_overlay::events::{EventBus, PipEvent};
///
/// let bus = EventBus::new();
/// let publisher = bus.publisher();
///
/// publisher.publish(PipEvent::OverlayModeChanged { active: true });
///
/// let events = bus.drain();
/// assert_eq!(events.len(), 1);
/// ```
#[derive(Debug)]
pub struct EventBus {
    sender: Sender<PipEvent>,
    receiver: Receiver<PipEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// Get a publisher handle that can be cloned and sent to other threads.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
        }
    }

    /// Try to receive the next event without blocking.
    pub fn try_recv(&self) -> Option<PipEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            // The bus owns a sender, so Disconnected cannot happen while it lives
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Drain all pending events in delivery order.
    pub fn drain(&self) -> Vec<PipEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// A cloneable, thread-safe event publisher.
#[derive(Debug, Clone)]
pub struct EventPublisher {
    sender: Sender<PipEvent>,
}

impl EventPublisher {
    /// Publish an event to the bus.
    ///
    /// Non-blocking. If the bus is gone (session detached) the event is
    /// dropped silently.
    pub fn publish(&self, event: PipEvent) {
        let _ = self.sender.send(event);
    }
}
