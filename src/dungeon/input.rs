//! Input boundary of the dungeon player.
//!
//! States only ask one question: "was this logical action just pressed on
//! this frame?" ([`InputSource`]). Hosts that already track actions implement
//! it directly; [`InputState`] is a ready-made source fed by keyboard events.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::trace;

/// Logical actions of the dungeon player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Forward,
    Left,
    Right,
    Back,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Forward, Action::Left, Action::Right, Action::Back];

    /// Engine-facing action name.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Forward => "dungeon_player_forward",
            Action::Left => "dungeon_player_left",
            Action::Right => "dungeon_player_right",
            Action::Back => "dungeon_player_back",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.name() == name)
    }
}

/// Reports discrete "just pressed" edges for logical actions.
pub trait InputSource {
    fn is_action_just_pressed(&self, action: Action) -> bool;
}

/// Platform-independent keyboard events
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    KeyDown(String),
    KeyUp(String),
    FocusLost,
}

/// Key mapping configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub forward: Vec<String>,
    pub left: Vec<String>,
    pub right: Vec<String>,
    pub back: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: vec!["ArrowUp".to_string(), "w".to_string()],
            left: vec!["ArrowLeft".to_string(), "a".to_string()],
            right: vec!["ArrowRight".to_string(), "d".to_string()],
            back: vec!["ArrowDown".to_string(), "s".to_string()],
        }
    }
}

impl KeyBindings {
    pub fn keys_for(&self, action: Action) -> &[String] {
        match action {
            Action::Forward => &self.forward,
            Action::Left => &self.left,
            Action::Right => &self.right,
            Action::Back => &self.back,
        }
    }

    /// Action bound to `key`, ignoring ASCII case.
    pub fn action_for_key(&self, key: &str) -> Option<Action> {
        Action::ALL.into_iter().find(|action| {
            self.keys_for(*action)
                .iter()
                .any(|bound| bound.eq_ignore_ascii_case(key))
        })
    }

    /// First key found bound to more than one action.
    pub fn conflicting_key(&self) -> Option<&str> {
        let mut seen = HashSet::new();
        for action in Action::ALL {
            for key in self.keys_for(action) {
                if !seen.insert(key.to_ascii_lowercase()) {
                    return Some(key.as_str());
                }
            }
        }
        None
    }
}

/// Keyboard-driven action tracking with per-frame press edges.
///
/// An action becomes "just pressed" when one of its keys goes down while the
/// action is not already held. Edges stay visible until [`end_frame`]
/// (call it after the frame's tick) or until focus is lost.
///
/// [`end_frame`]: InputState::end_frame
#[derive(Debug, Clone, Default)]
pub struct InputState {
    bindings: KeyBindings,
    held: HashSet<Action>,
    just_pressed: HashSet<Action>,
}

impl InputState {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            held: HashSet::new(),
            just_pressed: HashSet::new(),
        }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Process an input event and update state
    pub fn process_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown(key) => match self.bindings.action_for_key(key) {
                Some(action) => self.press(action),
                None => trace!(key = key.as_str(), "unbound key"),
            },
            InputEvent::KeyUp(key) => {
                if let Some(action) = self.bindings.action_for_key(key) {
                    self.release(action);
                }
            }
            InputEvent::FocusLost => {
                self.held.clear();
                self.just_pressed.clear();
            }
        }
    }

    pub fn press(&mut self, action: Action) {
        if self.held.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    pub fn release(&mut self, action: Action) {
        self.held.remove(&action);
    }

    pub fn is_held(&self, action: Action) -> bool {
        self.held.contains(&action)
    }

    /// Forget this frame's press edges.
    pub fn end_frame(&mut self) {
        self.just_pressed.clear();
    }
}

impl InputSource for InputState {
    fn is_action_just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_down(key: &str) -> InputEvent {
        InputEvent::KeyDown(key.to_string())
    }

    fn key_up(key: &str) -> InputEvent {
        InputEvent::KeyUp(key.to_string())
    }

    #[test]
    fn action_names_round_trip() {
        for action in Action::ALL {
            assert_eq!(Action::from_name(action.name()), Some(action));
        }
        assert_eq!(Action::from_name("dungeon_player_jump"), None);
    }

    #[test]
    fn default_bindings_map_arrows_and_wasd() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.action_for_key("ArrowLeft"), Some(Action::Left));
        assert_eq!(bindings.action_for_key("D"), Some(Action::Right));
        assert_eq!(bindings.action_for_key("w"), Some(Action::Forward));
        assert_eq!(bindings.action_for_key("Escape"), None);
        assert_eq!(bindings.conflicting_key(), None);
    }

    #[test]
    fn conflicting_key_is_detected() {
        let bindings = KeyBindings {
            right: vec!["A".to_string()],
            ..Default::default()
        };
        assert_eq!(bindings.conflicting_key(), Some("A"));
    }

    #[test]
    fn key_down_produces_edge_until_end_frame() {
        let mut input = InputState::default();
        input.process_event(&key_down("ArrowLeft"));

        assert!(input.is_action_just_pressed(Action::Left));
        assert!(input.is_held(Action::Left));

        input.end_frame();
        assert!(!input.is_action_just_pressed(Action::Left));
        assert!(input.is_held(Action::Left));
    }

    #[test]
    fn held_key_does_not_retrigger() {
        let mut input = InputState::default();
        input.process_event(&key_down("a"));
        input.end_frame();

        // key repeat
        input.process_event(&key_down("a"));
        assert!(!input.is_action_just_pressed(Action::Left));

        input.process_event(&key_up("a"));
        input.process_event(&key_down("a"));
        assert!(input.is_action_just_pressed(Action::Left));
    }

    #[test]
    fn focus_lost_releases_everything() {
        let mut input = InputState::default();
        input.process_event(&key_down("ArrowRight"));
        input.process_event(&InputEvent::FocusLost);

        assert!(!input.is_held(Action::Right));
    }

    #[test]
    fn focus_lost_drops_presses_of_the_same_frame() {
        let mut input = InputState::default();
        input.process_event(&key_down("ArrowLeft"));
        input.process_event(&InputEvent::FocusLost);

        assert!(!input.is_action_just_pressed(Action::Left));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let mut input = InputState::default();
        input.process_event(&key_down("Space"));

        assert!(Action::ALL
            .into_iter()
            .all(|action| !input.is_action_just_pressed(action)));
    }
}
