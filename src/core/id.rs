//! Identifiers for the states of a state machine.
//!
//! A machine never looks its behaviours up by string. Each behaviour lives in a
//! dense table slot addressed by a [`StateId`], so identifiers are small `Copy`
//! enums that know their own slot.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state identifiers.
///
/// # Required Traits
///
/// - `Copy` + `Eq` + `Hash`: identifiers are passed by value and used as keys
/// - `Debug`: identifiers show up in diagnostics
/// - `Serialize` + `Deserialize`: identifiers are recorded in transition history
///
/// # Contract
///
/// `ALL` lists every identifier exactly once and `ALL[i].index() == i` for
/// every slot. The registry builder rejects identifiers that break this.
///
/// Prefer the [`state_id!`](crate::state_id) macro over implementing this by
/// hand.
///
/// # Example
///
/// ```rust
/// use delve::core::StateId;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl StateId for Door {
///     const ALL: &'static [Self] = &[Self::Open, Self::Closed];
///
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
///
///     fn index(&self) -> usize {
///         *self as usize
///     }
/// }
///
/// assert_eq!(Door::Closed.index(), 1);
/// assert_eq!(Door::ALL.len(), 2);
/// ```
pub trait StateId:
    Copy + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Every identifier, in slot order.
    const ALL: &'static [Self];

    /// Get the identifier's name for display/logging.
    fn name(&self) -> &'static str;

    /// Slot of this identifier in [`StateId::ALL`].
    fn index(&self) -> usize;
}
