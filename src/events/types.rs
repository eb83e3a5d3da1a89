//! Events delivered by the host platform.
//!
//! These are the out-of-band notifications the overlay produces. The host
//! posts them through an `EventPublisher`; the plugin drains and applies
//! them strictly in delivery order.

/// Host-to-core events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipEvent {
    /// A control inside the overlay was tapped.
    ///
    /// The identity is the raw string the host received and may name an
    /// action outside the catalog.
    ActionInvoked { identity: String },

    /// The overlay window was presented or dismissed.
    OverlayModeChanged { active: bool },
}

impl PipEvent {
    /// Returns a human-readable description of the event for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            PipEvent::ActionInvoked { .. } => "Overlay action invoked",
            PipEvent::OverlayModeChanged { active: true } => "Overlay entered",
            PipEvent::OverlayModeChanged { active: false } => "Overlay exited",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_equality() {
        let a = PipEvent::ActionInvoked {
            identity: "PLAY".into(),
        };
        let b = PipEvent::ActionInvoked {
            identity: "PLAY".into(),
        };
        assert_eq!(a, b);
        assert_ne!(a, PipEvent::OverlayModeChanged { active: true });
    }

    #[test]
    fn test_all_events_have_descriptions() {
        let events = [
            PipEvent::ActionInvoked {
                identity: "NEXT".into(),
            },
            PipEvent::OverlayModeChanged { active: true },
            PipEvent::OverlayModeChanged { active: false },
        ];

        for event in events {
            assert!(!event.description().is_empty());
        }
    }
}
