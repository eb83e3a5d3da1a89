//! Method-channel wire types.
//!
//! Inbound calls arrive as `{"method": "...", "arguments": {...}}`; replies
//! and outbound notifications are plain JSON so any RPC transport can carry
//! them.

use std::sync::mpsc::Sender;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Notification, NotificationSink};
use crate::error::{PipError, Result};
use crate::model::{NOTIFY_PIP_ACTION, NOTIFY_PIP_ENTERED, NOTIFY_PIP_EXITED};

/// Inbound request from the application layer.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub arguments: Value,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, arguments: Value) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }

    /// Optional typed argument. Absent or `null` is `None`; a present value
    /// of the wrong shape is an error.
    pub fn argument<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        match self.arguments.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|err| PipError::invalid(format!("argument `{key}`: {err}"))),
        }
    }
}

/// Reply to a [`MethodCall`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MethodResult {
    Success {
        value: Value,
    },
    Error {
        code: String,
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<Value>,
    },
    NotImplemented,
}

impl MethodResult {
    pub fn success(value: impl Into<Value>) -> Self {
        Self::Success {
            value: value.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl From<PipError> for MethodResult {
    fn from(err: PipError) -> Self {
        Self::Error {
            code: err.code().to_string(),
            message: err.to_string(),
            details: None,
        }
    }
}

/// Outbound notification as carried on the channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutboundMessage {
    pub method: String,
    pub arguments: Value,
}

impl From<&Notification> for OutboundMessage {
    fn from(notification: &Notification) -> Self {
        let (method, arguments) = match notification {
            Notification::ActionInvoked { identity } => (
                NOTIFY_PIP_ACTION,
                Value::String(identity.name().to_ascii_lowercase()),
            ),
            Notification::OverlayEntered => (NOTIFY_PIP_ENTERED, Value::Null),
            Notification::OverlayExited => (NOTIFY_PIP_EXITED, Value::Null),
        };
        Self {
            method: method.to_string(),
            arguments,
        }
    }
}

/// Sink that pushes JSON-encoded [`OutboundMessage`]s over a channel.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    sender: Sender<String>,
}

impl ChannelSink {
    pub fn new(sender: Sender<String>) -> Self {
        Self { sender }
    }
}

impl NotificationSink for ChannelSink {
    fn deliver(&self, notification: &Notification) -> Result<()> {
        let json = serde_json::to_string(&OutboundMessage::from(notification))?;
        self.sender
            .send(json)
            .map_err(|_| PipError::DeliveryFailed {
                reason: "listener disconnected",
            })
    }
}
