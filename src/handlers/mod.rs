//! Event dispatching and method-call handling.
//!
//! - [`dispatcher`]: drains the ingress bus and applies overlay events
//! - [`methods`]: answers method-channel calls from the application layer

pub mod dispatcher;
pub mod methods;
