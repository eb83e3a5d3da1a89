//! Event dispatcher for overlay events.
//!
//! Drains the ingress bus and applies each event in delivery order. Two taps
//! on the same slot are computed one after the other; nothing is coalesced.
//!
//! ```text
//! EventBus::drain() → dispatch_single_event() → state machine → bridge
//! ```

use tracing::{debug, warn};

use crate::app::Plugin;
use crate::bridge::Notification;
use crate::error::PipError;
use crate::events::PipEvent;
use crate::model::PipAction;

impl Plugin {
    /// Dispatch all pending events. Returns how many were processed.
    ///
    /// Call from the queue that serializes host callbacks.
    pub fn dispatch_events(&mut self) -> usize {
        let events = match &self.ingress {
            Some(ingress) => ingress.bus.drain(),
            None => return 0,
        };

        let count = events.len();
        for event in events {
            self.dispatch_single_event(event);
        }
        count
    }

    fn dispatch_single_event(&mut self, event: PipEvent) {
        debug!(event = event.description(), "dispatching");
        match event {
            PipEvent::ActionInvoked { identity } => self.on_action_invoked(&identity),
            PipEvent::OverlayModeChanged { active } => self.on_overlay_mode_changed(active),
        }
    }

    /// Apply a tap reported by the host, then notify the application.
    ///
    /// Identities outside the catalog are logged and ignored.
    pub fn on_action_invoked(&mut self, identity: &str) {
        let action: PipAction = match identity.parse() {
            Ok(action) => action,
            Err(err) => {
                warn!(identity, error = %err, "ignoring invocation");
                return;
            }
        };

        if action.successor().is_some() {
            let (session, mut renderer) = self.split_renderer();
            match session.apply_invocation(action, &mut renderer) {
                Ok(_) | Err(PipError::NotApplicable { .. }) => {}
                Err(err) => warn!(action = %action, error = %err, "toggle failed"),
            }
        }

        self.bridge.notify(Notification::ActionInvoked { identity: action });
    }

    /// Track overlay presentation reported by the host.
    pub fn on_overlay_mode_changed(&mut self, active: bool) {
        self.session.set_overlay_active(active);
        self.bridge.notify(if active {
            Notification::OverlayEntered
        } else {
            Notification::OverlayExited
        });
    }
}
