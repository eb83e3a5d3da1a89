//! Headless driver.
//!
//! Runs the plugin against the in-memory host and speaks JSON lines on
//! stdin/stdout. Each input line is one of:
//!
//! ```text
//! {"method": "setPipLayout", "arguments": {"layout": "media"}}
//! {"tap": "PAUSE"}
//! {"overlay_active": false}
//! ```
//!
//! Replies and outbound notifications are printed one per line.

use std::io::{self, BufRead, Write};
use std::sync::mpsc;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

use pip_overlay::bridge::ChannelSink;
use pip_overlay::platform::{HeadlessHost, HeadlessRegistry};
use pip_overlay::{config, logging, ActionBridge, MethodCall, Plugin};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Input {
    Call(MethodCall),
    Tap { tap: String },
    Mode { overlay_active: bool },
}

fn main() -> Result<()> {
    let config = config::load();
    logging::init(config.debug_logging);

    let (tx, rx) = mpsc::channel();
    let registry = HeadlessRegistry::new();
    let host = HeadlessHost::new();

    let mut plugin = Plugin::attach(
        config,
        Box::new(registry.clone()),
        ActionBridge::with_sink(Box::new(ChannelSink::new(tx))),
    );
    plugin.attach_host(Box::new(host.clone()));

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let input: Input = match serde_json::from_str(&line) {
            Ok(input) => input,
            Err(err) => {
                warn!(error = %err, "skipping malformed input line");
                continue;
            }
        };

        match input {
            Input::Call(call) => {
                let reply = plugin.on_method_call(&call);
                writeln!(stdout, "{}", serde_json::to_string(&reply)?)?;
            }
            Input::Tap { tap } => {
                registry.tap(&tap);
            }
            Input::Mode { overlay_active } => {
                if !overlay_active {
                    host.exit_pip();
                }
                registry.mode_changed(overlay_active);
            }
        }

        plugin.dispatch_events();

        for notification in rx.try_iter() {
            writeln!(stdout, "{notification}")?;
        }
        let presented: Vec<_> = host.presented().iter().map(|a| a.name()).collect();
        writeln!(stdout, "{}", json!({ "presented": presented }))?;
        stdout.flush()?;
    }

    plugin.detach();
    info!("stdin closed, plugin detached");
    Ok(())
}
