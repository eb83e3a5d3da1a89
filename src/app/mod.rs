//! Plugin facade.
//!
//! Ties the session state machine to its host collaborators: the renderer,
//! the ingress registration and the bridge. Event dispatch and method-call
//! handling live in `handlers`.

pub mod plugin;

pub use plugin::Plugin;
