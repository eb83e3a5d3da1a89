//! Picture-in-picture overlay actions.
//!
//! A host app shows a few controls (play/pause, skip, custom buttons) inside
//! an OS-managed overlay window. Taps reach the app out-of-band; this crate
//! keeps the displayed controls in step with them.
//!
//! - [`model`]: action catalog, layout registry, session state machine
//! - [`events`]: ingress bus the host posts taps onto
//! - [`handlers`]: event dispatch and method-channel calls
//! - [`bridge`]: notifications back up to the application layer
//! - [`platform`]: host collaborator traits and a headless host
//! - [`app`]: the [`Plugin`] tying it together
//!
//! Everything except `platform` implementations is free of OS bindings so
//! the whole core runs under the normal test harness.

pub mod app;
pub mod bridge;
pub mod config;
pub mod error;
pub mod events;
pub mod handlers;
pub mod logging;
pub mod model;
pub mod platform;

// Re-export the main types for convenience
pub use app::Plugin;
pub use bridge::{ActionBridge, MethodCall, MethodResult, Notification};
pub use config::PluginConfig;
pub use error::{PipError, Result};
pub use events::{EventBus, EventPublisher, PipEvent};
pub use model::{Action, LayoutKind, PipAction, SessionState};
