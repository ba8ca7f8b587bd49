//! Frame-stepped state machine.

use super::history::{StateHistory, StateTransition};
use super::id::StateId;
use super::registry::StateRegistry;
use chrono::Utc;
use tracing::{debug, trace};

/// State machine driven by a host loop, one [`tick`](Self::tick) per frame.
///
/// Per tick the current state first handles input, which may yield a
/// transition: the old state exits, the new one is entered with the
/// transition's parameters. The (possibly new) current state is then ticked,
/// so a freshly entered state receives its first tick on the frame it was
/// entered.
///
/// Exactly one state is current at any time, and transitions only happen at
/// tick boundaries.
pub struct StateMachine<C: ?Sized, K: StateId, P> {
    registry: StateRegistry<C, K, P>,
    current: K,
    history: StateHistory<K>,
    frame: u64,
}

impl<C: ?Sized, K: StateId, P> StateMachine<C, K, P> {
    /// Create a machine in `initial`, entering it without parameters.
    pub fn new(registry: StateRegistry<C, K, P>, initial: K) -> Self {
        let mut machine = Self {
            registry,
            current: initial,
            history: StateHistory::new(),
            frame: 0,
        };
        machine.registry.get_mut(initial).enter(None);
        debug!(state = initial.name(), "state machine started");
        machine
    }

    /// Retain at most `limit` transitions in the history.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history = StateHistory::bounded(limit);
        self
    }

    /// Get current state
    pub fn current_state(&self) -> K {
        self.current
    }

    /// Number of completed ticks.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn history(&self) -> &StateHistory<K> {
        &self.history
    }

    pub fn registry(&self) -> &StateRegistry<C, K, P> {
        &self.registry
    }

    /// Let the current state handle input and perform the transition it asks
    /// for, if any.
    ///
    /// Returns the state that was entered. A transition to the current state
    /// is ignored: neither `exit` nor `enter` runs and its parameters are
    /// dropped.
    pub fn handle_input(&mut self, host: &C, delta: f32) -> Option<K> {
        let transition = self.registry.get_mut(self.current).handle_input(host, delta)?;

        let from = self.current;
        let to = transition.to;
        if to == from {
            trace!(state = from.name(), "ignoring transition to current state");
            return None;
        }

        self.registry.get_mut(from).exit();
        self.current = to;
        self.registry.get_mut(to).enter(transition.params);

        self.history.record(StateTransition {
            from,
            to,
            timestamp: Utc::now(),
            frame: self.frame,
        });
        debug!(
            from = from.name(),
            to = to.name(),
            frame = self.frame,
            "state transition"
        );

        Some(to)
    }

    /// Advance one frame.
    ///
    /// Returns the state entered on this frame, if any.
    pub fn tick(&mut self, host: &mut C, delta: f32) -> Option<K> {
        let entered = self.handle_input(host, delta);
        self.registry.get_mut(self.current).tick(host, delta);
        self.frame += 1;
        entered
    }
}

impl<C: ?Sized, K: StateId, P> std::fmt::Debug for StateMachine<C, K, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateMachine")
            .field("current", &self.current)
            .field("frame", &self.frame)
            .field("history", &self.history.len())
            .finish()
    }
}
