//! Dense table of the behaviours of a state machine.

use super::id::StateId;
use super::state::BoxedState;
use crate::builder::StateRegistryBuilder;

/// One behaviour per state identifier, addressed by [`StateId::index`].
///
/// A registry can only be obtained from [`StateRegistryBuilder::build`],
/// which guarantees a slot for every identifier in [`StateId::ALL`]. Lookups
/// therefore never fail.
pub struct StateRegistry<C: ?Sized, K: StateId, P> {
    states: Vec<BoxedState<C, K, P>>,
}

impl<C: ?Sized, K: StateId, P> StateRegistry<C, K, P> {
    /// Start building a registry.
    pub fn builder() -> StateRegistryBuilder<C, K, P> {
        StateRegistryBuilder::new()
    }

    /// Assumes `states` holds the behaviour for `K::ALL[i]` in slot `i`.
    pub(crate) fn from_slots(states: Vec<BoxedState<C, K, P>>) -> Self {
        Self { states }
    }

    /// Behaviour registered for `id`.
    pub fn get(&self, id: K) -> &BoxedState<C, K, P> {
        &self.states[id.index()]
    }

    /// Mutable behaviour registered for `id`.
    pub fn get_mut(&mut self, id: K) -> &mut BoxedState<C, K, P> {
        &mut self.states[id.index()]
    }

    /// Number of behaviours, one per identifier.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether the identifier set is empty.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl<C: ?Sized, K: StateId, P> std::fmt::Debug for StateRegistry<C, K, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(K::ALL.iter().map(|id| id.name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{State, Transition};
    use crate::state_id;

    state_id! {
        enum Gate {
            Shut,
            Ajar,
            Wide,
        }
    }

    /// Reports its own identifier as the transition target.
    struct Echo(Gate);

    impl State<()> for Echo {
        type Id = Gate;
        type Params = ();

        fn handle_input(&mut self, _host: &(), _delta: f32) -> Option<Transition<Gate, ()>> {
            Some(Transition::new(self.0))
        }

        fn tick(&mut self, _host: &mut (), _delta: f32) {}
    }

    fn registry() -> StateRegistry<(), Gate, ()> {
        StateRegistry::builder()
            .placeholder(|id| -> BoxedState<(), Gate, ()> { Box::new(Echo(id)) })
            .build()
            .unwrap()
    }

    #[test]
    fn lookup_returns_the_behaviour_of_each_id() {
        let mut registry = registry();

        for id in Gate::ALL {
            let transition = registry.get_mut(*id).handle_input(&(), 0.0).unwrap();
            assert_eq!(transition.to, *id);
        }
    }

    #[test]
    fn holds_one_slot_per_id() {
        let registry = registry();

        assert_eq!(registry.len(), Gate::ALL.len());
        assert!(!registry.is_empty());
        assert_eq!(format!("{:?}", registry), r#"["Shut", "Ajar", "Wide"]"#);
    }
}
