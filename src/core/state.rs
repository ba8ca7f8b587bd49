//! Behaviour of a single state and the transitions it can request.

use super::id::StateId;

/// Request to leave the current state.
///
/// Returned from [`State::handle_input`]. `params` is the explicit handoff
/// from the state that initiates the transition to the state being entered;
/// the machine passes it to [`State::enter`] untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition<K: StateId, P> {
    /// The state to enter
    pub to: K,
    /// Entry parameters for the target state
    pub params: Option<P>,
}

impl<K: StateId, P> Transition<K, P> {
    /// Transition that carries no entry parameters.
    pub fn new(to: K) -> Self {
        Self { to, params: None }
    }

    /// Transition that hands `params` to the target state's `enter`.
    pub fn with_params(to: K, params: P) -> Self {
        Self {
            to,
            params: Some(params),
        }
    }
}

/// A unit of behaviour driven once per frame by a [`StateMachine`].
///
/// `C` is the controlled entity (the host). States hold no reference to it;
/// the machine lends it on every call, immutably while deciding on a
/// transition and mutably while ticking.
///
/// # Example
///
/// ```rust
/// use delve::core::{State, Transition};
/// use delve::state_id;
///
/// state_id! {
///     enum Lamp {
///         Off,
///         On,
///     }
/// }
///
/// struct Switch {
///     flipped: bool,
///     brightness: f32,
/// }
///
/// struct OffState;
///
/// impl State<Switch> for OffState {
///     type Id = Lamp;
///     type Params = f32;
///
///     fn handle_input(&mut self, host: &Switch, _delta: f32) -> Option<Transition<Lamp, f32>> {
///         host.flipped.then(|| Transition::with_params(Lamp::On, 0.5))
///     }
///
///     fn tick(&mut self, host: &mut Switch, _delta: f32) {
///         host.brightness = 0.0;
///     }
/// }
///
/// let mut state = OffState;
/// let host = Switch { flipped: true, brightness: 0.0 };
/// let transition = state.handle_input(&host, 0.016).unwrap();
/// assert_eq!(transition.to, Lamp::On);
/// assert_eq!(transition.params, Some(0.5));
/// ```
///
/// [`StateMachine`]: crate::core::StateMachine
pub trait State<C: ?Sized> {
    /// Identifier type of the machine this state belongs to.
    type Id: StateId;

    /// Entry parameters exchanged between states of the machine.
    type Params;

    /// Inspect input and timers, returning the state to transition into, or
    /// `None` to remain.
    fn handle_input(
        &mut self,
        host: &C,
        delta: f32,
    ) -> Option<Transition<Self::Id, Self::Params>>;

    /// Advance per-frame continuous behaviour.
    fn tick(&mut self, host: &mut C, delta: f32);

    /// Called once when this state becomes current.
    fn enter(&mut self, params: Option<Self::Params>) {
        let _ = params;
    }

    /// Called once when this state stops being current.
    fn exit(&mut self) {}
}

/// Owned, dynamically dispatched state stored in a registry.
pub type BoxedState<C, K, P> = Box<dyn State<C, Id = K, Params = P>>;
