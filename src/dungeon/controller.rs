//! The dungeon player controller.

use crate::config::ControllerConfig;
use crate::core::{BoxedState, StateHistory, StateId, StateMachine, StateRegistry};
use crate::dungeon::error::ControllerError;
use crate::dungeon::states::{
    DefaultState, DungeonPlayerStateId, PlayerHost, RotatingState, RotationParams,
};
use tracing::{debug, warn};

type PlayerState<H> = BoxedState<H, DungeonPlayerStateId, RotationParams>;

/// Stand-in behaviour for states without one of their own.
fn placeholder<H: PlayerHost + ?Sized>(id: DungeonPlayerStateId) -> PlayerState<H> {
    if id.is_implemented() {
        warn!(state = id.name(), "implemented state was not registered, running as Default");
    } else {
        debug!(state = id.name(), "state has no behaviour, running as Default");
    }
    Box::new(DefaultState)
}

/// Runs the dungeon player states against a host, one tick per frame.
///
/// Starts in [`DungeonPlayerStateId::Default`]. Walking, Running and Scanning
/// have no behaviour of their own and act like Default.
pub struct DungeonPlayerController<H: PlayerHost + ?Sized> {
    machine: StateMachine<H, DungeonPlayerStateId, RotationParams>,
}

impl<H: PlayerHost + ?Sized> DungeonPlayerController<H> {
    /// Build a controller after validating `config`.
    pub fn new(config: &ControllerConfig) -> Result<Self, ControllerError> {
        config.validate()?;

        let default: PlayerState<H> = Box::new(DefaultState);
        let rotating: PlayerState<H> = Box::new(RotatingState::with_timing(
            config.rotation_duration,
            config.completion_epsilon,
        ));

        let registry = StateRegistry::builder()
            .state(DungeonPlayerStateId::Default, default)?
            .state(DungeonPlayerStateId::Rotating, rotating)?
            .placeholder(|id| placeholder::<H>(id))
            .build()?;

        let machine = StateMachine::new(registry, DungeonPlayerStateId::Default)
            .with_history_limit(config.history_limit);
        Ok(Self { machine })
    }

    /// Controller with the stock timing.
    pub fn with_defaults() -> Result<Self, ControllerError> {
        Self::new(&ControllerConfig::default())
    }

    /// Advance one frame: handle input, then tick the current state.
    /// Returns the state entered on this frame, if any.
    pub fn tick(&mut self, host: &mut H, delta: f32) -> Option<DungeonPlayerStateId> {
        self.machine.tick(host, delta)
    }

    /// Input half of [`tick`](Self::tick) on its own.
    pub fn handle_input(&mut self, host: &H, delta: f32) -> Option<DungeonPlayerStateId> {
        self.machine.handle_input(host, delta)
    }

    pub fn current_state(&self) -> DungeonPlayerStateId {
        self.machine.current_state()
    }

    pub fn is_rotating(&self) -> bool {
        self.current_state() == DungeonPlayerStateId::Rotating
    }

    pub fn history(&self) -> &StateHistory<DungeonPlayerStateId> {
        self.machine.history()
    }

    pub fn frame(&self) -> u64 {
        self.machine.frame()
    }
}

impl<H: PlayerHost + ?Sized> std::fmt::Debug for DungeonPlayerController<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DungeonPlayerController")
            .field("machine", &self.machine)
            .finish()
    }
}
