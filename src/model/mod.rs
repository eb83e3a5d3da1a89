//! Overlay domain model.
//!
//! Pure logic with no host dependencies: the action catalog, the layout
//! registry and the per-session layout state machine.
//!
//! Host collaborators are in `platform`.

pub mod action;
pub mod constants;
pub mod layout;
pub mod session;

pub use action::{lookup, Action, PipAction, ToggleGroup};
pub use constants::*;
pub use layout::{resolve_names, LayoutKind};
pub use session::{MachineState, SessionState};
