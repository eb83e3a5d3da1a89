//! Action catalog (pure Rust, no host dependencies).
//!
//! The catalog is a closed set: every [`PipAction`] resolves to exactly one
//! immutable [`Action`] record. Records are `'static` and shared freely.

use std::fmt;
use std::str::FromStr;

use crate::error::{PipError, Result};

/// Identity of an overlay control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipAction {
    Play,
    Pause,
    Next,
    Previous,
    Live,
    Rewind,
    Forward,
}

/// Group of actions that alternate within a single slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToggleGroup {
    PlayPause,
}

/// Immutable catalog record for one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action {
    pub identity: PipAction,
    /// Icon resource the host resolves.
    pub icon: &'static str,
    /// Accessible title shown by the host.
    pub label: &'static str,
    /// Stable ordinal the host uses to keep platform intents distinct.
    pub request_code: i32,
    /// Action that replaces this one in its slot after it fires.
    pub successor: Option<PipAction>,
}

impl PipAction {
    /// All catalog identities in declaration order.
    pub const ALL: [PipAction; 7] = [
        PipAction::Play,
        PipAction::Pause,
        PipAction::Next,
        PipAction::Previous,
        PipAction::Live,
        PipAction::Rewind,
        PipAction::Forward,
    ];

    /// Canonical symbolic name, also the event identifier the host emits.
    pub fn name(self) -> &'static str {
        match self {
            PipAction::Play => "PLAY",
            PipAction::Pause => "PAUSE",
            PipAction::Next => "NEXT",
            PipAction::Previous => "PREVIOUS",
            PipAction::Live => "LIVE",
            PipAction::Rewind => "REWIND",
            PipAction::Forward => "FORWARD",
        }
    }

    /// Action that takes this one's slot after it fires, from the catalog record.
    pub fn successor(self) -> Option<PipAction> {
        self.action().successor
    }

    pub fn toggle_group(self) -> Option<ToggleGroup> {
        match self {
            PipAction::Play | PipAction::Pause => Some(ToggleGroup::PlayPause),
            _ => None,
        }
    }

    /// Resolve to the catalog record.
    pub fn action(self) -> &'static Action {
        &CATALOG[self as usize]
    }
}

impl fmt::Display for PipAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PipAction {
    type Err = PipError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        PipAction::ALL
            .iter()
            .copied()
            .find(|a| a.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| PipError::unknown_action(s))
    }
}

// Indexed by `PipAction as usize`; order must match the enum.
static CATALOG: [Action; 7] = [
    Action {
        identity: PipAction::Play,
        icon: "ic_play_arrow_24dp",
        label: "Play",
        request_code: 0,
        successor: Some(PipAction::Pause),
    },
    Action {
        identity: PipAction::Pause,
        icon: "ic_pause_24dp",
        label: "Pause",
        request_code: 1,
        successor: Some(PipAction::Play),
    },
    Action {
        identity: PipAction::Next,
        icon: "ic_skip_next_24dp",
        label: "Next",
        request_code: 2,
        successor: None,
    },
    Action {
        identity: PipAction::Previous,
        icon: "ic_skip_previous_24dp",
        label: "Previous",
        request_code: 3,
        successor: None,
    },
    Action {
        identity: PipAction::Live,
        icon: "ic_live_tv_24dp",
        label: "Live",
        request_code: 4,
        successor: None,
    },
    Action {
        identity: PipAction::Rewind,
        icon: "ic_fast_rewind_24dp",
        label: "Rewind",
        request_code: 5,
        successor: None,
    },
    Action {
        identity: PipAction::Forward,
        icon: "ic_fast_forward_24dp",
        label: "Forward",
        request_code: 6,
        successor: None,
    },
];

/// Look up an action by identity string.
///
/// Fails with [`PipError::UnknownAction`] for names outside the catalog.
pub fn lookup(identity: &str) -> Result<&'static Action> {
    identity.parse::<PipAction>().map(PipAction::action)
}
