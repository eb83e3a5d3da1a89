//! Plugin instance: one attachment to the host runtime.
//!
//! Owns the session state, the ingress bus and the bridge. The host window
//! comes and goes independently (it is re-attached across configuration
//! changes), so it is held as an `Option`.

use tracing::{debug, info, warn};

use crate::bridge::ActionBridge;
use crate::config::PluginConfig;
use crate::error::{PipError, Result};
use crate::events::EventBus;
use crate::model::{Action, SessionState};
use crate::platform::{DetachedRenderer, OverlayRenderer, PipHost, PipParams, ReceiverRegistry};

/// Ingress registration held for the lifetime of an attachment.
pub(crate) struct Ingress {
    pub(crate) bus: EventBus,
    registry: Box<dyn ReceiverRegistry>,
}

/// Renders through the attached host, or drops the render when none is.
pub(crate) struct HostRenderer<'a> {
    host: Option<&'a mut (dyn PipHost + 'static)>,
}

impl OverlayRenderer for HostRenderer<'_> {
    fn render_actions(&mut self, actions: &[Action]) -> Result<()> {
        match self.host.as_deref_mut() {
            Some(host) => host.render_actions(actions),
            None => DetachedRenderer.render_actions(actions),
        }
    }
}

/// One attachment of the overlay core to the host runtime.
///
/// Holds the layout session, the tap ingress registration, the optional host
/// window and the bridge back to the application. Created by
/// [`Plugin::attach`]; the registration is released on [`Plugin::detach`] or
/// drop.
pub struct Plugin {
    pub(crate) config: PluginConfig,
    pub(crate) session: SessionState,
    pub(crate) host: Option<Box<dyn PipHost>>,
    pub(crate) bridge: ActionBridge,
    pub(crate) ingress: Option<Ingress>,
}

impl Plugin {
    /// Attach to the host runtime.
    ///
    /// Registers for tap delivery and selects the configured initial layout.
    /// The registration is released exactly once, by [`Plugin::detach`] or
    /// on drop.
    pub fn attach(
        config: PluginConfig,
        mut registry: Box<dyn ReceiverRegistry>,
        bridge: ActionBridge,
    ) -> Self {
        let bus = EventBus::new();
        registry.register(bus.publisher());

        let mut plugin = Self {
            config,
            session: SessionState::new(),
            host: None,
            bridge,
            ingress: Some(Ingress { bus, registry }),
        };

        let initial = plugin.config.initial_layout.clone();
        if !plugin.select_layout(&initial) {
            warn!(layout = %initial, "configured initial layout is unknown");
        }
        info!(channel = %plugin.config.channel, "plugin attached");
        plugin
    }

    /// Release the ingress registration and reset the session. Idempotent.
    pub fn detach(&mut self) {
        let Some(mut ingress) = self.ingress.take() else {
            return;
        };
        ingress.registry.unregister();
        self.session.reset();
        self.host = None;
        self.bridge.set_sink(None);
        info!("plugin detached");
    }

    pub fn is_attached(&self) -> bool {
        self.ingress.is_some()
    }

    /// Attach the host window (activity attach or re-attach).
    pub fn attach_host(&mut self, host: Box<dyn PipHost>) {
        debug!("host attached");
        self.host = Some(host);
    }

    /// Detach the host window. Session state is kept.
    pub fn detach_host(&mut self) -> Option<Box<dyn PipHost>> {
        debug!("host detached");
        self.host.take()
    }

    pub fn has_host(&self) -> bool {
        self.host.is_some()
    }

    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub(crate) fn split_renderer(&mut self) -> (&mut SessionState, HostRenderer<'_>) {
        (
            &mut self.session,
            HostRenderer {
                host: self.host.as_deref_mut(),
            },
        )
    }

    // === Boundary operations ===

    /// Select a layout by name. `false` on an unknown name; the previous
    /// layout stays in place.
    pub fn select_layout(&mut self, name: &str) -> bool {
        let (session, mut renderer) = self.split_renderer();
        match session.select_layout(name, &mut renderer) {
            Ok(()) => true,
            Err(err) => {
                debug!(layout = name, error = %err, "layout not applied");
                false
            }
        }
    }

    /// Force the play/pause slot. `false` when the layout has no such slot.
    pub fn set_playback_state(&mut self, is_playing: bool) -> bool {
        let (session, mut renderer) = self.split_renderer();
        match session.set_playing(is_playing, &mut renderer) {
            Ok(()) => true,
            Err(err) => {
                debug!(is_playing, error = %err, "playback state not applied");
                false
            }
        }
    }

    /// Whether the overlay window is currently presented.
    pub fn query_overlay_active(&self) -> bool {
        match &self.host {
            Some(host) => host.is_in_pip_mode(),
            None => self.session.overlay_active(),
        }
    }

    // === Host lifecycle ===

    pub fn is_overlay_available(&self) -> bool {
        self.host.as_ref().is_some_and(|h| h.is_pip_available())
    }

    pub fn platform_version(&self) -> Result<String> {
        self.host
            .as_ref()
            .map(|h| h.platform_version())
            .ok_or(PipError::HostNotAttached)
    }

    /// Present the overlay with the current actions. `params` falls back to
    /// the configured defaults.
    pub fn enter_overlay(&mut self, params: Option<PipParams>) -> Result<bool> {
        let params = match params {
            Some(params) => params,
            None => self.config.default_params()?,
        };
        let host = self.host.as_deref_mut().ok_or(PipError::HostNotAttached)?;
        let entered = host.enter_pip_mode(&params, self.session.current_order())?;
        if entered {
            self.session.set_overlay_active(true);
            self.session.mark_presented();
        }
        info!(entered, auto_enter = params.auto_enter, "enter overlay requested");
        Ok(entered)
    }

    /// Arm automatic entry with the current actions.
    pub fn set_auto_enter(&mut self, params: Option<PipParams>) -> Result<()> {
        let params = match params {
            Some(params) => params,
            None => self.config.default_params()?,
        };
        let host = self.host.as_deref_mut().ok_or(PipError::HostNotAttached)?;
        host.set_pip_params(&params, self.session.current_order())?;
        self.session.mark_presented();
        debug!(auto_enter = params.auto_enter, "overlay parameters updated");
        Ok(())
    }
}

impl Drop for Plugin {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PipAction;
    use crate::platform::{HeadlessHost, HeadlessRegistry};

    fn plugin_with(config: PluginConfig) -> (Plugin, HeadlessRegistry) {
        let registry = HeadlessRegistry::new();
        let plugin = Plugin::attach(config, Box::new(registry.clone()), ActionBridge::new());
        (plugin, registry)
    }

    #[test]
    fn test_attach_registers_and_selects_initial_layout() {
        let config = PluginConfig {
            initial_layout: "media".into(),
            ..PluginConfig::default()
        };
        let (plugin, registry) = plugin_with(config);
        assert!(registry.is_registered());
        assert_eq!(
            plugin.session().current_identities(),
            vec![PipAction::Previous, PipAction::Pause, PipAction::Next]
        );
    }

    #[test]
    fn test_unknown_initial_layout_stays_inactive() {
        let config = PluginConfig {
            initial_layout: "bogus".into(),
            ..PluginConfig::default()
        };
        let (plugin, _) = plugin_with(config);
        assert!(!plugin.session().is_active());
    }

    #[test]
    fn test_detach_then_drop_unregisters_once() {
        let (mut plugin, registry) = plugin_with(PluginConfig::default());
        plugin.detach();
        plugin.detach();
        drop(plugin);
        assert_eq!(registry.register_count(), 1);
        assert_eq!(registry.unregister_count(), 1);
    }

    #[test]
    fn test_select_without_host_updates_state() {
        let (mut plugin, _) = plugin_with(PluginConfig::default());
        assert!(plugin.select_layout("playback"));
        assert!(plugin.session().is_render_stale());
        assert_eq!(plugin.session().current_identities(), vec![PipAction::Play]);
    }

    #[test]
    fn test_enter_overlay_requires_host() {
        let (mut plugin, _) = plugin_with(PluginConfig::default());
        let err = plugin.enter_overlay(None).unwrap_err();
        assert!(matches!(err, PipError::HostNotAttached));
    }

    #[test]
    fn test_enter_overlay_presents_current_actions() {
        let (mut plugin, _) = plugin_with(PluginConfig::default());
        let host = HeadlessHost::new();
        plugin.attach_host(Box::new(host.clone()));
        plugin.select_layout("custom3");

        assert!(plugin.enter_overlay(None).unwrap());
        assert!(plugin.query_overlay_active());
        assert_eq!(
            host.presented(),
            vec![PipAction::Forward, PipAction::Play, PipAction::Rewind]
        );
        assert!(!plugin.session().is_render_stale());
    }
}
