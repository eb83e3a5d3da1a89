//! Event ingress from the host platform.
//!
//! The overlay is a separate rendering surface: taps inside it reach the
//! app out-of-band. The host posts them onto the bus and the plugin drains
//! them on its own serialized queue.
//!
//! ```text
//! ┌─────────────────────┐
//! │  Host receiver      │  (OS broadcast / callback thread)
//! └──────────┬──────────┘
//!            │ publish()
//!            ▼
//! ┌─────────────────────┐
//! │      EventBus       │  (mpsc channel)
//! └──────────┬──────────┘
//!            │ drain()
//!            ▼
//! ┌─────────────────────┐
//! │ Plugin dispatcher   │ → state machine → renderer → bridge
//! └─────────────────────┘
//! ```
//!
//! - [`types`]: Event definitions (`PipEvent` enum)
//! - [`bus`]: `EventBus` and `EventPublisher` types

pub mod bus;
pub mod types;

pub use bus::{EventBus, EventPublisher};
pub use types::PipEvent;
