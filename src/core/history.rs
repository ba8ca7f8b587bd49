//! State transition history tracking.
//!
//! A machine records every transition it performs. Game loops run for a long
//! time, so a history may be bounded: once full, the oldest records are
//! dropped first.

use super::id::StateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use delve::core::StateTransition;
/// use delve::state_id;
/// use chrono::Utc;
///
/// state_id! {
///     enum Gait {
///         Standing,
///         Walking,
///     }
/// }
///
/// let transition = StateTransition {
///     from: Gait::Standing,
///     to: Gait::Walking,
///     timestamp: Utc::now(),
///     frame: 12,
/// };
/// assert_eq!(transition.frame, 12);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<K: StateId> {
    /// The state being transitioned from
    pub from: K,
    /// The state being transitioned to
    pub to: K,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// Machine frame on which the transition occurred
    pub frame: u64,
}

/// Ordered history of state transitions.
///
/// # Example
///
/// ```rust
/// use delve::core::{StateHistory, StateTransition};
/// use delve::state_id;
/// use chrono::Utc;
///
/// state_id! {
///     enum Phase {
///         One,
///         Two,
///         Three,
///     }
/// }
///
/// let mut history = StateHistory::bounded(8);
///
/// history.record(StateTransition {
///     from: Phase::One,
///     to: Phase::Two,
///     timestamp: Utc::now(),
///     frame: 1,
/// });
/// history.record(StateTransition {
///     from: Phase::Two,
///     to: Phase::Three,
///     timestamp: Utc::now(),
///     frame: 2,
/// });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&Phase::One, &Phase::Two, &Phase::Three]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<K: StateId> {
    transitions: Vec<StateTransition<K>>,
    limit: Option<usize>,
}

impl<K: StateId> Default for StateHistory<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: StateId> StateHistory<K> {
    /// Create a new empty, unbounded history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
            limit: None,
        }
    }

    /// Create a new empty history retaining at most `limit` transitions.
    pub fn bounded(limit: usize) -> Self {
        Self {
            transitions: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Maximum number of retained transitions, if bounded.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Record a transition, evicting the oldest records past the limit.
    pub fn record(&mut self, transition: StateTransition<K>) {
        self.transitions.push(transition);
        if let Some(limit) = self.limit {
            if self.transitions.len() > limit {
                let excess = self.transitions.len() - limit;
                self.transitions.drain(..excess);
            }
        }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest retained transition, then the
    /// `to` state of each transition. Empty when nothing is recorded.
    pub fn get_path(&self) -> Vec<&K> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        path.extend(self.transitions.iter().map(|t| &t.to));
        path
    }

    /// Wall-clock time between the oldest and newest retained transitions.
    ///
    /// `None` when nothing is recorded.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// All retained transitions, oldest first.
    pub fn transitions(&self) -> &[StateTransition<K>] {
        &self.transitions
    }

    /// Most recent transition.
    pub fn last(&self) -> Option<&StateTransition<K>> {
        self.transitions.last()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
