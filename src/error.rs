//! Error taxonomy for the overlay core.
//!
//! None of these are fatal. Boundary operations fold them into `bool`
//! results; the method-channel layer maps them to error replies.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipError>;

#[derive(Debug, Error)]
pub enum PipError {
    #[error("unknown layout: {name}")]
    UnknownLayout { name: String },

    #[error("unknown action: {identity}")]
    UnknownAction { identity: String },

    /// Valid in principle, nothing to do (e.g. no play/pause slot).
    #[error("not applicable: {reason}")]
    NotApplicable { reason: &'static str },

    #[error("overlay rendering unavailable")]
    RenderingUnavailable,

    #[error("no host window attached")]
    HostNotAttached,

    #[error("not supported by host: {feature}")]
    Unsupported { feature: String },

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("notification delivery failed: {reason}")]
    DeliveryFailed { reason: &'static str },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PipError {
    #[must_use]
    pub fn unknown_layout(name: impl Into<String>) -> Self {
        Self::UnknownLayout { name: name.into() }
    }

    #[must_use]
    pub fn unknown_action(identity: impl Into<String>) -> Self {
        Self::UnknownAction {
            identity: identity.into(),
        }
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn unsupported(feature: impl Into<String>) -> Self {
        Self::Unsupported {
            feature: feature.into(),
        }
    }

    /// Error code used on the method channel.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownLayout { .. } => "UnknownLayout",
            Self::UnknownAction { .. } => "UnknownAction",
            Self::NotApplicable { .. } => "NotApplicable",
            Self::RenderingUnavailable => "RenderingUnavailable",
            Self::HostNotAttached => "ActivityNotInitialized",
            Self::Unsupported { .. } => "NotSupported",
            Self::InvalidArgument { .. } => "InvalidArgument",
            Self::DeliveryFailed { .. } => "DeliveryFailed",
            Self::Json(_) => "InvalidJson",
        }
    }
}
