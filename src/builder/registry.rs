//! Builder for constructing state registries.

use crate::builder::error::BuildError;
use crate::core::{BoxedState, StateId, StateRegistry};
use std::collections::HashMap;
use tracing::debug;

type Placeholder<C, K, P> = Box<dyn Fn(K) -> BoxedState<C, K, P>>;

/// Builder for a [`StateRegistry`] with a fluent API.
///
/// Every identifier in [`StateId::ALL`] needs a behaviour: either registered
/// explicitly with [`state`](Self::state) or produced by the
/// [`placeholder`](Self::placeholder) factory for identifiers that have no
/// behaviour of their own yet.
pub struct StateRegistryBuilder<C: ?Sized, K: StateId, P> {
    states: HashMap<K, BoxedState<C, K, P>>,
    placeholder: Option<Placeholder<C, K, P>>,
}

impl<C: ?Sized, K: StateId, P> StateRegistryBuilder<C, K, P> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
            placeholder: None,
        }
    }

    /// Register the behaviour for `id`.
    /// Returns an error if `id` already has one.
    pub fn state(mut self, id: K, state: BoxedState<C, K, P>) -> Result<Self, BuildError> {
        if self.states.contains_key(&id) {
            return Err(BuildError::DuplicateState { state: id.name() });
        }
        self.states.insert(id, state);
        Ok(self)
    }

    /// Factory for identifiers left without a behaviour.
    pub fn placeholder<F>(mut self, factory: F) -> Self
    where
        F: Fn(K) -> BoxedState<C, K, P> + 'static,
    {
        self.placeholder = Some(Box::new(factory));
        self
    }

    /// Build the registry.
    /// Returns an error if an identifier is left without a behaviour or if
    /// `StateId::index` disagrees with the order of `StateId::ALL`.
    pub fn build(mut self) -> Result<StateRegistry<C, K, P>, BuildError> {
        let mut slots = Vec::with_capacity(K::ALL.len());

        for (slot, id) in K::ALL.iter().enumerate() {
            if id.index() != slot {
                return Err(BuildError::InconsistentIndex {
                    state: id.name(),
                    index: id.index(),
                    slot,
                });
            }

            let state = match (self.states.remove(id), &self.placeholder) {
                (Some(state), _) => state,
                (None, Some(placeholder)) => {
                    debug!(state = id.name(), "filling state with placeholder");
                    placeholder(*id)
                }
                (None, None) => return Err(BuildError::MissingState { state: id.name() }),
            };
            slots.push(state);
        }

        Ok(StateRegistry::from_slots(slots))
    }
}

impl<C: ?Sized, K: StateId, P> Default for StateRegistryBuilder<C, K, P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{State, Transition};
    use serde::{Deserialize, Serialize};
    use std::marker::PhantomData;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestId {
        Idle,
        Busy,
        Broken,
    }

    impl StateId for TestId {
        const ALL: &'static [Self] = &[Self::Idle, Self::Busy, Self::Broken];

        fn name(&self) -> &'static str {
            match self {
                Self::Idle => "Idle",
                Self::Busy => "Busy",
                Self::Broken => "Broken",
            }
        }

        fn index(&self) -> usize {
            *self as usize
        }
    }

    /// Identifier whose `index` disagrees with `ALL`.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum Shuffled {
        First,
        Second,
    }

    impl StateId for Shuffled {
        const ALL: &'static [Self] = &[Self::Second, Self::First];

        fn name(&self) -> &'static str {
            match self {
                Self::First => "First",
                Self::Second => "Second",
            }
        }

        fn index(&self) -> usize {
            *self as usize
        }
    }

    /// Writes its tag into the host on tick.
    struct Tagger<K> {
        tag: &'static str,
        _id: PhantomData<K>,
    }

    impl<K: StateId> State<Vec<&'static str>> for Tagger<K> {
        type Id = K;
        type Params = ();

        fn handle_input(&mut self, _host: &Vec<&'static str>, _delta: f32) -> Option<Transition<K, ()>> {
            None
        }

        fn tick(&mut self, host: &mut Vec<&'static str>, _delta: f32) {
            host.push(self.tag);
        }
    }

    fn tagger<K: StateId>(tag: &'static str) -> BoxedState<Vec<&'static str>, K, ()> {
        Box::new(Tagger {
            tag,
            _id: PhantomData,
        })
    }

    #[test]
    fn builder_registers_every_state() {
        let mut registry = StateRegistryBuilder::new()
            .state(TestId::Idle, tagger("idle"))
            .unwrap()
            .state(TestId::Busy, tagger("busy"))
            .unwrap()
            .state(TestId::Broken, tagger("broken"))
            .unwrap()
            .build()
            .unwrap();

        let mut host = Vec::new();
        registry.get_mut(TestId::Busy).tick(&mut host, 0.0);
        registry.get_mut(TestId::Broken).tick(&mut host, 0.0);

        assert_eq!(registry.len(), 3);
        assert_eq!(host, vec!["busy", "broken"]);
    }

    #[test]
    fn builder_rejects_duplicates() {
        let result = StateRegistryBuilder::new()
            .state(TestId::Idle, tagger("idle"))
            .unwrap()
            .state(TestId::Idle, tagger("again"));

        assert!(matches!(
            result,
            Err(BuildError::DuplicateState { state: "Idle" })
        ));
    }

    #[test]
    fn builder_requires_every_state_without_placeholder() {
        let result = StateRegistryBuilder::new()
            .state(TestId::Idle, tagger("idle"))
            .unwrap()
            .build();

        assert!(matches!(
            result,
            Err(BuildError::MissingState { state: "Busy" })
        ));
    }

    #[test]
    fn placeholder_fills_missing_states() {
        let mut registry = StateRegistryBuilder::new()
            .state(TestId::Idle, tagger("idle"))
            .unwrap()
            .placeholder(|_| tagger("placeholder"))
            .build()
            .unwrap();

        let mut host = Vec::new();
        for id in TestId::ALL {
            registry.get_mut(*id).tick(&mut host, 0.0);
        }

        assert_eq!(host, vec!["idle", "placeholder", "placeholder"]);
    }

    #[test]
    fn builder_rejects_inconsistent_index() {
        let result = StateRegistryBuilder::new()
            .placeholder(|_| tagger::<Shuffled>("any"))
            .build();

        assert!(matches!(
            result,
            Err(BuildError::InconsistentIndex { slot: 0, index: 1, .. })
        ));
    }
}
