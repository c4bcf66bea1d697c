//! Open/close transition contract.
//!
//! Animations are played by the host. The menu only ever stops whatever is
//! running and starts a named transition when its open state flips.

use crate::domain::MenuId;
use std::time::Duration;

/// Duration of every open/close transition.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(200);

/// Transition played when no other is configured.
pub const DEFAULT_TRANSITION: &str = "slide down";

/// A named, timed visual effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Effect name, e.g. `"slide down"`.
    pub name: String,
    /// How long the effect runs.
    pub duration: Duration,
}

impl Transition {
    /// Creates a transition with the standard open/close duration.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            duration: TRANSITION_DURATION,
        }
    }
}

/// Host capability that plays transitions for a menu.
pub trait TransitionController {
    /// Stops every transition running on `menu`.
    fn stop_all(&mut self, menu: MenuId);

    /// Starts `transition` on `menu`.
    fn animate(&mut self, menu: MenuId, transition: Transition);
}

/// One call made on a [`TransitionLog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionCall {
    /// `stop_all` was called.
    StopAll(MenuId),
    /// `animate` was called.
    Animate(MenuId, Transition),
}

/// [`TransitionController`] that records calls instead of animating.
///
/// The terminal host has nothing to animate; it logs the calls at trace level
/// and clears the log after every event. Tests use it to check transitions ran
/// exactly once per open-state flip.
#[derive(Debug, Clone, Default)]
pub struct TransitionLog {
    calls: Vec<TransitionCall>,
}

impl TransitionLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls, oldest first.
    #[must_use]
    pub fn calls(&self) -> &[TransitionCall] {
        &self.calls
    }

    /// Transitions started on `menu`, oldest first.
    #[must_use]
    pub fn animations_for(&self, menu: MenuId) -> Vec<&Transition> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                TransitionCall::Animate(m, t) if *m == menu => Some(t),
                _ => None,
            })
            .collect()
    }

    /// Forgets all recorded calls.
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl TransitionController for TransitionLog {
    fn stop_all(&mut self, menu: MenuId) {
        tracing::trace!(?menu, "stopping transitions");
        self.calls.push(TransitionCall::StopAll(menu));
    }

    fn animate(&mut self, menu: MenuId, transition: Transition) {
        tracing::trace!(?menu, name = %transition.name, "starting transition");
        self.calls.push(TransitionCall::Animate(menu, transition));
    }
}
