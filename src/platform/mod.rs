//! Host platform collaborators.
//!
//! The core never talks to an OS directly. It renders through an
//! [`OverlayRenderer`], drives the overlay window lifecycle through a
//! [`PipHost`], and registers for tap delivery through a
//! [`ReceiverRegistry`]. Real hosts implement these at the plugin boundary;
//! [`headless`] provides an in-memory host for tests and the CLI driver.

pub mod headless;

pub use headless::{DetachedRenderer, HeadlessHost, HeadlessRegistry};

use crate::error::{PipError, Result};
use crate::events::EventPublisher;
use crate::model::Action;

/// Paints an ordered action list into the live overlay window.
///
/// The contract is "replace wholesale": every call carries the full list.
/// Returning [`PipError::RenderingUnavailable`] means the host dropped the
/// render (e.g. no overlay presented); callers must not treat it as fatal.
pub trait OverlayRenderer {
    fn render_actions(&mut self, actions: &[Action]) -> Result<()>;
}

/// Overlay window lifecycle owned by the host.
pub trait PipHost: OverlayRenderer {
    fn is_pip_available(&self) -> bool;

    fn is_in_pip_mode(&self) -> bool;

    /// Present the overlay. `Ok(false)` means the host declined.
    fn enter_pip_mode(&mut self, params: &PipParams, actions: &[Action]) -> Result<bool>;

    /// Update parameters used for automatic entry.
    fn set_pip_params(&mut self, params: &PipParams, actions: &[Action]) -> Result<()>;

    fn platform_version(&self) -> String;
}

/// Registration for out-of-band tap delivery.
pub trait ReceiverRegistry {
    fn register(&mut self, publisher: EventPublisher);

    fn unregister(&mut self);
}

/// Overlay aspect ratio, width:height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AspectRatio {
    width: u32,
    height: u32,
}

impl AspectRatio {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(PipError::invalid(format!(
                "aspect ratio terms must be positive, got {width}:{height}"
            )));
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_f64(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

/// Parameters handed to the host when entering or arming the overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipParams {
    pub aspect_ratio: AspectRatio,
    pub auto_enter: bool,
    pub seamless_resize: bool,
}
