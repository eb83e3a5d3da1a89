//! Upward notifications to the application layer.
//!
//! Delivery is fire-and-forget. By the time a notification is sent the
//! overlay state has already changed, so a failed delivery is logged and
//! dropped rather than reported back.

pub mod channel;

pub use channel::{ChannelSink, MethodCall, MethodResult, OutboundMessage};

use tracing::debug;

use crate::error::Result;
use crate::model::PipAction;

/// Notification emitted to the application layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// One per accepted invocation, after the order was updated.
    ActionInvoked { identity: PipAction },
    OverlayEntered,
    OverlayExited,
}

/// Transport for notifications.
pub trait NotificationSink {
    fn deliver(&self, notification: &Notification) -> Result<()>;
}

/// Forwards notifications to an optional listener.
#[derive(Default)]
pub struct ActionBridge {
    sink: Option<Box<dyn NotificationSink>>,
}

impl ActionBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sink(sink: Box<dyn NotificationSink>) -> Self {
        Self { sink: Some(sink) }
    }

    pub fn set_sink(&mut self, sink: Option<Box<dyn NotificationSink>>) {
        self.sink = sink;
    }

    pub fn has_listener(&self) -> bool {
        self.sink.is_some()
    }

    /// Send without waiting. Missing listeners and delivery errors are swallowed.
    pub fn notify(&self, notification: Notification) {
        let Some(sink) = &self.sink else {
            debug!(?notification, "no listener attached, notification dropped");
            return;
        };
        if let Err(err) = sink.deliver(&notification) {
            debug!(?notification, error = %err, "notification delivery failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipError;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Collect(Rc<RefCell<Vec<Notification>>>);

    impl NotificationSink for Collect {
        fn deliver(&self, notification: &Notification) -> Result<()> {
            self.0.borrow_mut().push(*notification);
            Ok(())
        }
    }

    struct Broken;

    impl NotificationSink for Broken {
        fn deliver(&self, _notification: &Notification) -> Result<()> {
            Err(PipError::DeliveryFailed {
                reason: "listener gone",
            })
        }
    }

    #[test]
    fn test_notify_without_listener_is_silent() {
        let bridge = ActionBridge::new();
        assert!(!bridge.has_listener());
        bridge.notify(Notification::OverlayEntered);
    }

    #[test]
    fn test_notify_forwards_to_sink() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let bridge = ActionBridge::with_sink(Box::new(Collect(seen.clone())));
        bridge.notify(Notification::ActionInvoked {
            identity: PipAction::Next,
        });
        assert_eq!(
            *seen.borrow(),
            vec![Notification::ActionInvoked {
                identity: PipAction::Next
            }]
        );
    }

    #[test]
    fn test_delivery_failure_is_swallowed() {
        let bridge = ActionBridge::with_sink(Box::new(Broken));
        bridge.notify(Notification::OverlayExited);
    }
}
