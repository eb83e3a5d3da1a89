//! Method-channel call handling.

use serde_json::Value;
use tracing::debug;

use crate::app::Plugin;
use crate::bridge::{MethodCall, MethodResult};
use crate::error::{PipError, Result};
use crate::model::constants::*;
use crate::platform::{AspectRatio, PipParams};

impl Plugin {
    /// Answer one call from the application layer.
    ///
    /// Every call fails with `ActivityNotInitialized` while no host window
    /// is attached.
    pub fn on_method_call(&mut self, call: &MethodCall) -> MethodResult {
        if !self.has_host() {
            return PipError::HostNotAttached.into();
        }

        let outcome = match call.method.as_str() {
            METHOD_PLATFORM_VERSION => self.platform_version().map(Value::from),
            METHOD_IS_PIP_AVAILABLE => Ok(Value::from(self.is_overlay_available())),
            METHOD_IS_PIP_ACTIVATED => Ok(Value::from(self.query_overlay_active())),
            METHOD_ENTER_PIP_MODE => self.call_enter_pip_mode(call),
            METHOD_SET_PIP_LAYOUT => Ok(self.call_set_pip_layout(call)),
            METHOD_SET_IS_PLAYING => Ok(self.call_set_is_playing(call)),
            METHOD_SET_AUTO_PIP_MODE => self.call_set_auto_pip_mode(call),
            other => {
                debug!(method = other, "method not implemented");
                return MethodResult::NotImplemented;
            }
        };

        match outcome {
            Ok(value) => MethodResult::success(value),
            Err(err) => err.into(),
        }
    }

    fn call_enter_pip_mode(&mut self, call: &MethodCall) -> Result<Value> {
        let params = self.params_from_call(call)?;
        self.enter_overlay(Some(params)).map(Value::from)
    }

    fn call_set_auto_pip_mode(&mut self, call: &MethodCall) -> Result<Value> {
        let params = self.params_from_call(call)?;
        self.set_auto_enter(Some(params))?;
        Ok(Value::from(true))
    }

    // A missing or malformed layout name is a plain `false`, like an unknown one.
    fn call_set_pip_layout(&mut self, call: &MethodCall) -> Value {
        let name = call.argument::<String>("layout").ok().flatten();
        Value::from(name.is_some_and(|name| self.select_layout(&name)))
    }

    fn call_set_is_playing(&mut self, call: &MethodCall) -> Value {
        let is_playing = call.argument::<bool>("isPlaying").ok().flatten();
        Value::from(is_playing.is_some_and(|playing| self.set_playback_state(playing)))
    }

    fn params_from_call(&self, call: &MethodCall) -> Result<PipParams> {
        let defaults = self.config.default_params()?;

        let aspect_ratio = match call.argument::<Vec<u32>>("aspectRatio")? {
            Some(terms) => match terms.as_slice() {
                [width, height] => AspectRatio::new(*width, *height)?,
                _ => {
                    return Err(PipError::invalid(format!(
                        "aspectRatio needs two terms, got {}",
                        terms.len()
                    )))
                }
            },
            None => defaults.aspect_ratio,
        };

        Ok(PipParams {
            aspect_ratio,
            auto_enter: call.argument("autoEnter")?.unwrap_or(defaults.auto_enter),
            seamless_resize: call
                .argument("seamlessResize")?
                .unwrap_or(defaults.seamless_resize),
        })
    }
}
