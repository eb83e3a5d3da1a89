//! In-memory host platform.
//!
//! Stands in for a real OS overlay: it records every call so tests and the
//! CLI driver can observe what the core asked for. Handles are cheap clones
//! over shared state, so a caller can keep one after boxing another into
//! the plugin.

use std::cell::RefCell;
use std::rc::Rc;

use super::{OverlayRenderer, PipHost, PipParams, ReceiverRegistry};
use crate::error::{PipError, Result};
use crate::events::{EventPublisher, PipEvent};
use crate::model::{Action, PipAction};

#[derive(Debug)]
struct HostState {
    available: bool,
    supports_auto_enter: bool,
    version: String,
    in_pip: bool,
    /// Set once parameters exist; renders before that are dropped.
    armed: bool,
    params: Option<PipParams>,
    presented: Vec<PipAction>,
    render_calls: Vec<Vec<PipAction>>,
}

/// Recording [`PipHost`].
#[derive(Debug, Clone)]
pub struct HeadlessHost {
    state: Rc<RefCell<HostState>>,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(HostState {
                available: true,
                supports_auto_enter: true,
                version: "Headless 1.0".to_string(),
                in_pip: false,
                armed: false,
                params: None,
                presented: Vec::new(),
                render_calls: Vec::new(),
            })),
        }
    }

    pub fn set_available(&self, available: bool) {
        self.state.borrow_mut().available = available;
    }

    pub fn set_supports_auto_enter(&self, supported: bool) {
        self.state.borrow_mut().supports_auto_enter = supported;
    }

    /// Simulate the user closing the overlay window.
    pub fn exit_pip(&self) {
        self.state.borrow_mut().in_pip = false;
    }

    /// Every render call received, accepted or not.
    pub fn render_calls(&self) -> Vec<Vec<PipAction>> {
        self.state.borrow().render_calls.clone()
    }

    pub fn render_count(&self) -> usize {
        self.state.borrow().render_calls.len()
    }

    /// Action list the overlay currently shows.
    pub fn presented(&self) -> Vec<PipAction> {
        self.state.borrow().presented.clone()
    }

    pub fn params(&self) -> Option<PipParams> {
        self.state.borrow().params
    }
}

impl Default for HeadlessHost {
    fn default() -> Self {
        Self::new()
    }
}

fn identities(actions: &[Action]) -> Vec<PipAction> {
    actions.iter().map(|a| a.identity).collect()
}

impl OverlayRenderer for HeadlessHost {
    fn render_actions(&mut self, actions: &[Action]) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.render_calls.push(identities(actions));
        if !state.armed {
            return Err(PipError::RenderingUnavailable);
        }
        state.presented = identities(actions);
        Ok(())
    }
}

impl PipHost for HeadlessHost {
    fn is_pip_available(&self) -> bool {
        self.state.borrow().available
    }

    fn is_in_pip_mode(&self) -> bool {
        self.state.borrow().in_pip
    }

    fn enter_pip_mode(&mut self, params: &PipParams, actions: &[Action]) -> Result<bool> {
        let mut state = self.state.borrow_mut();
        if !state.available {
            return Ok(false);
        }
        state.in_pip = true;
        state.armed = true;
        state.params = Some(*params);
        state.presented = identities(actions);
        Ok(true)
    }

    fn set_pip_params(&mut self, params: &PipParams, actions: &[Action]) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if !state.supports_auto_enter {
            return Err(PipError::unsupported("setAutoPipMode"));
        }
        state.armed = true;
        state.params = Some(*params);
        state.presented = identities(actions);
        Ok(())
    }

    fn platform_version(&self) -> String {
        self.state.borrow().version.clone()
    }
}

/// Renderer used while no host window is attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct DetachedRenderer;

impl OverlayRenderer for DetachedRenderer {
    fn render_actions(&mut self, _actions: &[Action]) -> Result<()> {
        Err(PipError::RenderingUnavailable)
    }
}

#[derive(Debug, Default)]
struct RegistryState {
    publisher: Option<EventPublisher>,
    registered: usize,
    unregistered: usize,
}

/// Recording [`ReceiverRegistry`] that can simulate OS deliveries.
#[derive(Debug, Clone, Default)]
pub struct HeadlessRegistry {
    state: Rc<RefCell<RegistryState>>,
}

impl HeadlessRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver a tap as the OS would. Returns false if nobody is registered.
    pub fn tap(&self, identity: &str) -> bool {
        self.deliver(PipEvent::ActionInvoked {
            identity: identity.to_string(),
        })
    }

    /// Deliver an overlay mode change.
    pub fn mode_changed(&self, active: bool) -> bool {
        self.deliver(PipEvent::OverlayModeChanged { active })
    }

    fn deliver(&self, event: PipEvent) -> bool {
        match &self.state.borrow().publisher {
            Some(publisher) => {
                publisher.publish(event);
                true
            }
            None => false,
        }
    }

    pub fn is_registered(&self) -> bool {
        self.state.borrow().publisher.is_some()
    }

    pub fn register_count(&self) -> usize {
        self.state.borrow().registered
    }

    pub fn unregister_count(&self) -> usize {
        self.state.borrow().unregistered
    }
}

impl ReceiverRegistry for HeadlessRegistry {
    fn register(&mut self, publisher: EventPublisher) {
        let mut state = self.state.borrow_mut();
        state.publisher = Some(publisher);
        state.registered += 1;
    }

    fn unregister(&mut self) {
        let mut state = self.state.borrow_mut();
        state.publisher = None;
        state.unregistered += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::AspectRatio;

    fn params() -> PipParams {
        PipParams {
            aspect_ratio: AspectRatio::new(16, 9).unwrap(),
            auto_enter: false,
            seamless_resize: false,
        }
    }

    #[test]
    fn test_render_before_armed_is_unavailable() {
        let mut host = HeadlessHost::new();
        let err = host.render_actions(&[*PipAction::Play.action()]).unwrap_err();
        assert!(matches!(err, PipError::RenderingUnavailable));
        assert_eq!(host.render_count(), 1);
        assert!(host.presented().is_empty());
    }

    #[test]
    fn test_enter_arms_rendering() {
        let mut host = HeadlessHost::new();
        assert!(host.enter_pip_mode(&params(), &[]).unwrap());
        assert!(host.is_in_pip_mode());
        host.render_actions(&[*PipAction::Pause.action()]).unwrap();
        assert_eq!(host.presented(), vec![PipAction::Pause]);
    }

    #[test]
    fn test_unavailable_host_declines_entry() {
        let mut host = HeadlessHost::new();
        host.set_available(false);
        assert!(!host.enter_pip_mode(&params(), &[]).unwrap());
        assert!(!host.is_in_pip_mode());
    }

    #[test]
    fn test_clones_share_state() {
        let host = HeadlessHost::new();
        let mut boxed: Box<dyn PipHost> = Box::new(host.clone());
        boxed.enter_pip_mode(&params(), &[]).unwrap();
        assert!(host.is_in_pip_mode());
    }

    #[test]
    fn test_detached_renderer_always_unavailable() {
        let err = DetachedRenderer.render_actions(&[]).unwrap_err();
        assert!(matches!(err, PipError::RenderingUnavailable));
    }

    #[test]
    fn test_registry_tap_without_registration() {
        let registry = HeadlessRegistry::new();
        assert!(!registry.tap("PLAY"));
    }
}
