//! Layout state machine and per-attachment session state.
//!
//! The session holds its own copy of the active layout's actions, so toggles
//! never touch the registry's canonical definitions.
//!
//! ```text
//!              select_layout(name)
//!   Inactive ───────────────────────▶ Active(layout, order)
//!      ▲                                 │  ▲
//!      │ deactivate() / reset()          │  │ apply_invocation(action)
//!      └─────────────────────────────────┘  │ set_playing(bool)
//!                                           └─ select_layout(name)
//! ```
//!
//! Every transition that changes the order calls the renderer exactly once
//! with the full list.

use tracing::{debug, warn};

use super::action::{Action, PipAction, ToggleGroup};
use super::layout::LayoutKind;
use crate::error::{PipError, Result};
use crate::platform::OverlayRenderer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MachineState {
    Inactive,
    Active {
        layout: LayoutKind,
        /// Current rendering order; diverges from the declared order after toggles.
        order: Vec<Action>,
    },
}

/// Session state owned by one plugin attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    state: MachineState,
    /// Last list the renderer accepted.
    last_rendered: Option<Vec<Action>>,
    /// The last render was dropped by the host.
    render_stale: bool,
    overlay_active: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            state: MachineState::Inactive,
            last_rendered: None,
            render_stale: false,
            overlay_active: false,
        }
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &MachineState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, MachineState::Active { .. })
    }

    pub fn active_layout(&self) -> Option<LayoutKind> {
        match &self.state {
            MachineState::Active { layout, .. } => Some(*layout),
            MachineState::Inactive => None,
        }
    }

    /// Current rendering order; empty while inactive.
    pub fn current_order(&self) -> &[Action] {
        match &self.state {
            MachineState::Active { order, .. } => order,
            MachineState::Inactive => &[],
        }
    }

    pub fn current_identities(&self) -> Vec<PipAction> {
        self.current_order().iter().map(|a| a.identity).collect()
    }

    pub fn last_rendered(&self) -> Option<&[Action]> {
        self.last_rendered.as_deref()
    }

    pub fn is_render_stale(&self) -> bool {
        self.render_stale
    }

    pub fn overlay_active(&self) -> bool {
        self.overlay_active
    }

    pub fn set_overlay_active(&mut self, active: bool) {
        self.overlay_active = active;
    }

    /// Replace the active layout with `name` at its declared order.
    ///
    /// On failure the previous layout and order are untouched. Re-selecting
    /// the active layout while it still shows its declared order is a no-op.
    pub fn select_layout(&mut self, name: &str, renderer: &mut dyn OverlayRenderer) -> Result<()> {
        let layout: LayoutKind = name.parse()?;
        let order = layout.resolve()?;

        if let MachineState::Active {
            layout: current,
            order: current_order,
        } = &self.state
        {
            if *current == layout && *current_order == order && !self.render_stale {
                debug!(layout = %layout, "layout already active");
                return Ok(());
            }
        }

        debug!(layout = %layout, actions = order.len(), "layout selected");
        self.state = MachineState::Active { layout, order };
        self.render(renderer);
        Ok(())
    }

    /// Apply a tap on `action`.
    ///
    /// Returns whether the rendering order changed. Actions without a
    /// successor are terminal and never change the order.
    pub fn apply_invocation(
        &mut self,
        action: PipAction,
        renderer: &mut dyn OverlayRenderer,
    ) -> Result<bool> {
        let order = match &mut self.state {
            MachineState::Active { order, .. } => order,
            MachineState::Inactive => {
                return Err(PipError::NotApplicable {
                    reason: "no active layout",
                })
            }
        };

        let Some(successor) = action.successor() else {
            debug!(action = %action, "terminal action, order unchanged");
            return Ok(false);
        };

        let Some(slot) = toggle_slot(order, action) else {
            debug!(action = %action, "no slot for toggled action");
            return Ok(false);
        };

        let changed = replace_slot(order, slot, successor);
        debug!(action = %action, slot, successor = %successor, changed, "toggle applied");

        if changed || self.render_stale {
            self.render(renderer);
        }
        Ok(changed)
    }

    /// Force the play/pause slot to reflect external playback state.
    ///
    /// Fails with `NotApplicable` when the active layout has no such slot;
    /// nothing is rendered in that case.
    pub fn set_playing(&mut self, is_playing: bool, renderer: &mut dyn OverlayRenderer) -> Result<()> {
        let order = match &mut self.state {
            MachineState::Active { order, .. } => order,
            MachineState::Inactive => {
                return Err(PipError::NotApplicable {
                    reason: "no active layout",
                })
            }
        };

        let Some(slot) = group_slot(order, ToggleGroup::PlayPause) else {
            return Err(PipError::NotApplicable {
                reason: "layout has no play/pause slot",
            });
        };

        let target = if is_playing {
            PipAction::Pause
        } else {
            PipAction::Play
        };
        let changed = replace_slot(order, slot, target);
        debug!(is_playing, slot, changed, "playback state applied");

        if changed || self.render_stale {
            self.render(renderer);
        }
        Ok(())
    }

    /// Record that the host presented the current order by other means
    /// (entering the overlay, arming automatic entry).
    pub fn mark_presented(&mut self) {
        self.last_rendered = Some(self.current_order().to_vec());
        self.render_stale = false;
    }

    /// Drop the active layout. Nothing is rendered.
    pub fn deactivate(&mut self) {
        if self.is_active() {
            debug!("layout deactivated");
        }
        self.state = MachineState::Inactive;
    }

    /// Back to a fresh session: inactive, flags cleared.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn render(&mut self, renderer: &mut dyn OverlayRenderer) {
        let order = self.current_order().to_vec();
        match renderer.render_actions(&order) {
            Ok(()) => {
                self.last_rendered = Some(order);
                self.render_stale = false;
            }
            Err(PipError::RenderingUnavailable) => {
                debug!("render dropped, overlay not presented");
                self.render_stale = true;
            }
            Err(err) => {
                warn!(error = %err, "render failed");
                self.render_stale = true;
            }
        }
    }
}

/// First slot occupied by the fired action's toggle group, or by the action
/// itself when it has no group.
fn toggle_slot(order: &[Action], action: PipAction) -> Option<usize> {
    match action.toggle_group() {
        Some(group) => group_slot(order, group),
        None => order.iter().position(|a| a.identity == action),
    }
}

fn group_slot(order: &[Action], group: ToggleGroup) -> Option<usize> {
    order
        .iter()
        .position(|a| a.identity.toggle_group() == Some(group))
}

fn replace_slot(order: &mut [Action], slot: usize, with: PipAction) -> bool {
    let replacement = *with.action();
    let changed = order[slot] != replacement;
    order[slot] = replacement;
    changed
}
