//! Layout registry.
//!
//! Named, ordered sets of catalog actions. The definitions are canonical
//! and never mutated; a session works on a resolved copy.

use std::fmt;
use std::str::FromStr;

use super::action::{Action, PipAction};
use crate::error::{PipError, Result};

/// Selectable overlay configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    /// No controls.
    None,
    Media,
    MediaOnlyPause,
    MediaLive,
    Playback,
    Custom3,
}

impl LayoutKind {
    pub const ALL: [LayoutKind; 6] = [
        LayoutKind::None,
        LayoutKind::Media,
        LayoutKind::MediaOnlyPause,
        LayoutKind::MediaLive,
        LayoutKind::Playback,
        LayoutKind::Custom3,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LayoutKind::None => "none",
            LayoutKind::Media => "media",
            LayoutKind::MediaOnlyPause => "media_only_pause",
            LayoutKind::MediaLive => "media_live",
            LayoutKind::Playback => "playback",
            LayoutKind::Custom3 => "custom3",
        }
    }

    /// Declared default order.
    pub fn actions(self) -> &'static [PipAction] {
        match self {
            LayoutKind::None => &[],
            LayoutKind::Media => &[PipAction::Previous, PipAction::Pause, PipAction::Next],
            LayoutKind::MediaOnlyPause => &[PipAction::Pause],
            LayoutKind::MediaLive => &[PipAction::Live, PipAction::Pause],
            LayoutKind::Playback => &[PipAction::Play],
            LayoutKind::Custom3 => &[PipAction::Forward, PipAction::Play, PipAction::Rewind],
        }
    }

    pub fn is_empty(self) -> bool {
        self.actions().is_empty()
    }

    /// Resolve the declared order through the catalog.
    pub fn resolve(self) -> Result<Vec<Action>> {
        resolve_names(self.actions().iter().map(|a| a.name()))
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LayoutKind {
    type Err = PipError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        LayoutKind::ALL
            .iter()
            .copied()
            .find(|l| l.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| PipError::unknown_layout(s))
    }
}

/// Resolve identities in order; any unknown name fails the whole list.
pub fn resolve_names<'a, I>(names: I) -> Result<Vec<Action>>
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .map(|name| super::action::lookup(name).copied())
        .collect()
}
