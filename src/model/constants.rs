//! Channel names, method names and configuration defaults.
//!
//! This module contains the identifiers shared between the core and the
//! host platform, plus the default overlay parameters.

// === Channel ===

/// Default method channel name.
pub const DEFAULT_CHANNEL: &str = "pip_overlay";

// === Inbound Methods ===

pub const METHOD_PLATFORM_VERSION: &str = "getPlatformVersion";
pub const METHOD_IS_PIP_AVAILABLE: &str = "isPipAvailable";
pub const METHOD_IS_PIP_ACTIVATED: &str = "isPipActivated";
pub const METHOD_ENTER_PIP_MODE: &str = "enterPipMode";
pub const METHOD_SET_PIP_LAYOUT: &str = "setPipLayout";
pub const METHOD_SET_IS_PLAYING: &str = "setIsPlaying";
pub const METHOD_SET_AUTO_PIP_MODE: &str = "setAutoPipMode";

// === Outbound Notifications ===

/// Sent once per accepted invocation, argument is the lowercase identity.
pub const NOTIFY_PIP_ACTION: &str = "onPipAction";

pub const NOTIFY_PIP_ENTERED: &str = "onPipEntered";

pub const NOTIFY_PIP_EXITED: &str = "onPipExited";

// === Overlay Defaults ===

/// Default aspect ratio (width, height).
pub const DEFAULT_ASPECT_RATIO: (u32, u32) = (16, 9);

/// Default for entering the overlay automatically when the app is backgrounded.
pub const DEFAULT_AUTO_ENTER: bool = false;

/// Default for seamless resize of non-video content.
pub const DEFAULT_SEAMLESS_RESIZE: bool = false;

/// Layout applied when a session attaches.
pub const DEFAULT_LAYOUT: &str = "none";

// === Config ===

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "PIP_OVERLAY_CONFIG";

/// Config file looked up in the working directory when the variable is unset.
pub const CONFIG_FILE_NAME: &str = "pip_overlay.json";
