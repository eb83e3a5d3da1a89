//! End-to-end tests for the plugin against the headless host.

use std::sync::mpsc;

use pip_overlay::bridge::{ChannelSink, OutboundMessage};
use pip_overlay::platform::{HeadlessHost, HeadlessRegistry};
use pip_overlay::{ActionBridge, PipAction, Plugin, PluginConfig};

struct Harness {
    plugin: Plugin,
    host: HeadlessHost,
    registry: HeadlessRegistry,
    notifications: mpsc::Receiver<String>,
}

impl Harness {
    fn new(initial_layout: &str) -> Self {
        let (tx, rx) = mpsc::channel();
        Self::build(
            initial_layout,
            ActionBridge::with_sink(Box::new(ChannelSink::new(tx))),
            rx,
        )
    }

    fn without_listener(initial_layout: &str) -> Self {
        let (_tx, rx) = mpsc::channel();
        Self::build(initial_layout, ActionBridge::new(), rx)
    }

    fn build(
        initial_layout: &str,
        bridge: ActionBridge,
        notifications: mpsc::Receiver<String>,
    ) -> Self {
        let registry = HeadlessRegistry::new();
        let host = HeadlessHost::new();
        let config = PluginConfig {
            initial_layout: initial_layout.to_string(),
            ..PluginConfig::default()
        };
        let mut plugin = Plugin::attach(config, Box::new(registry.clone()), bridge);
        plugin.attach_host(Box::new(host.clone()));
        Self {
            plugin,
            host,
            registry,
            notifications,
        }
    }

    fn entered(initial_layout: &str) -> Self {
        let mut harness = Self::new(initial_layout);
        assert!(harness.plugin.enter_overlay(None).unwrap());
        harness
    }

    fn outbound(&self) -> Vec<OutboundMessage> {
        self.notifications
            .try_iter()
            .map(|json| serde_json::from_str(&json).unwrap())
            .collect()
    }
}

#[test]
fn bogus_layout_keeps_overlay_and_layout() {
    let mut h = Harness::entered("media");
    assert!(!h.plugin.select_layout("bogus"));
    assert!(h.plugin.query_overlay_active());
    assert_eq!(
        h.plugin.session().current_identities(),
        vec![PipAction::Previous, PipAction::Pause, PipAction::Next]
    );
}

#[test]
fn select_layout_repaints_overlay() {
    let mut h = Harness::entered("none");
    assert!(h.plugin.select_layout("custom3"));
    assert_eq!(
        h.host.presented(),
        vec![PipAction::Forward, PipAction::Play, PipAction::Rewind]
    );
}

#[test]
fn playback_state_without_slot_returns_false_and_skips_render() {
    let mut h = Harness::entered("none");
    let renders = h.host.render_count();
    assert!(!h.plugin.set_playback_state(true));
    assert_eq!(h.host.render_count(), renders);
}

#[test]
fn playback_state_updates_slot() {
    let mut h = Harness::entered("media");
    assert!(h.plugin.set_playback_state(false));
    assert_eq!(
        h.host.presented(),
        vec![PipAction::Previous, PipAction::Play, PipAction::Next]
    );
}

#[test]
fn tap_repaints_then_notifies() {
    let mut h = Harness::entered("playback");
    h.registry.tap("PLAY");
    assert_eq!(h.plugin.dispatch_events(), 1);

    assert_eq!(h.host.presented(), vec![PipAction::Pause]);
    let outbound = h.outbound();
    assert_eq!(outbound.len(), 1);
    assert_eq!(outbound[0].method, "onPipAction");
    assert_eq!(outbound[0].arguments, serde_json::json!("play"));
}

#[test]
fn tap_without_listener_still_toggles() {
    let mut h = Harness::without_listener("playback");
    assert!(h.plugin.enter_overlay(None).unwrap());
    h.registry.tap("PLAY");

    assert_eq!(h.plugin.dispatch_events(), 1);
    assert_eq!(h.plugin.session().current_identities(), vec![PipAction::Pause]);
    assert_eq!(h.host.presented(), vec![PipAction::Pause]);
}

#[test]
fn disconnected_listener_keeps_toggle() {
    let mut h = Harness::entered("playback");
    drop(h.notifications);
    h.registry.tap("PLAY");
    h.registry.tap("PAUSE");

    assert_eq!(h.plugin.dispatch_events(), 2);
    assert_eq!(h.plugin.session().current_identities(), vec![PipAction::Play]);
    assert_eq!(h.host.presented(), vec![PipAction::Play]);
}

#[test]
fn quick_taps_on_one_slot_are_sequential() {
    let mut h = Harness::entered("custom3");
    h.registry.tap("PLAY");
    h.registry.tap("PAUSE");
    h.registry.tap("PLAY");
    h.plugin.dispatch_events();

    assert_eq!(
        h.host.render_calls(),
        vec![
            vec![PipAction::Forward, PipAction::Pause, PipAction::Rewind],
            vec![PipAction::Forward, PipAction::Play, PipAction::Rewind],
            vec![PipAction::Forward, PipAction::Pause, PipAction::Rewind],
        ]
    );
    assert_eq!(h.outbound().len(), 3);
}

#[test]
fn terminal_tap_notifies_without_render() {
    let mut h = Harness::entered("custom3");
    let renders = h.host.render_count();
    h.registry.tap("forward");
    h.plugin.dispatch_events();

    assert_eq!(h.host.render_count(), renders);
    assert_eq!(h.outbound()[0].arguments, serde_json::json!("forward"));
}

#[test]
fn unknown_tap_is_dropped() {
    let mut h = Harness::entered("playback");
    h.registry.tap("SELF_DESTRUCT");
    h.plugin.dispatch_events();

    assert_eq!(h.host.presented(), vec![PipAction::Play]);
    assert!(h.outbound().is_empty());
}

#[test]
fn render_before_overlay_is_caught_up_later() {
    let mut h = Harness::new("playback");
    h.registry.tap("PLAY");
    h.plugin.dispatch_events();
    assert!(h.plugin.session().is_render_stale());
    assert!(h.host.presented().is_empty());

    assert!(h.plugin.enter_overlay(None).unwrap());
    assert_eq!(h.host.presented(), vec![PipAction::Pause]);
}

#[test]
fn overlay_exit_is_reported() {
    let mut h = Harness::entered("playback");
    h.host.exit_pip();
    h.registry.mode_changed(false);
    h.plugin.dispatch_events();

    assert!(!h.plugin.query_overlay_active());
    let methods: Vec<_> = h.outbound().into_iter().map(|m| m.method).collect();
    assert_eq!(methods, vec!["onPipExited"]);
}

#[test]
fn host_detach_keeps_session() {
    let mut h = Harness::entered("playback");
    h.registry.tap("PLAY");
    h.plugin.dispatch_events();

    assert!(h.plugin.detach_host().is_some());
    h.registry.tap("PAUSE");
    h.plugin.dispatch_events();
    assert_eq!(h.plugin.session().current_identities(), vec![PipAction::Play]);

    h.plugin.attach_host(Box::new(h.host.clone()));
    assert!(h.plugin.set_playback_state(true));
    assert_eq!(h.host.presented(), vec![PipAction::Pause]);
}

#[test]
fn detach_releases_registration_once_and_resets() {
    let mut h = Harness::entered("media");
    h.plugin.detach();

    assert!(!h.plugin.is_attached());
    assert!(!h.plugin.session().is_active());
    assert!(!h.registry.is_registered());

    let Harness { plugin, registry, .. } = h;
    drop(plugin);
    assert_eq!(registry.unregister_count(), 1);
}

#[test]
fn drop_without_detach_releases_registration() {
    let h = Harness::new("none");
    let registry = h.registry.clone();
    drop(h);
    assert_eq!(registry.unregister_count(), 1);
}
