use std::collections::{HashSet, HashMap};
use std::hash::Hash;
pub use winit::keyboard::KeyCode;
pub use winit::event::MouseButton;

use glam::Vec2;

/// Represents a raw input source that can be bound to an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Key(KeyCode),
    Mouse(MouseButton),
}

/// Raw hardware state for a single frame.
#[derive(Debug, Default)]
pub struct InputState {
    pub keys_held: HashSet<KeyCode>,
    pub keys_pressed: HashSet<KeyCode>,
    pub keys_released: HashSet<KeyCode>,

    /// Logical-pixel cursor position.
    pub mouse_pos: [f32; 2],
    pub mouse_held: HashSet<MouseButton>,
    pub mouse_pressed: HashSet<MouseButton>,
    pub mouse_released: HashSet<MouseButton>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_frame_state(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.mouse_pressed.clear();
        self.mouse_released.clear();
    }

    /// Simulate a key going down this frame.
    pub fn press_key(&mut self, key: KeyCode) {
        if self.keys_held.insert(key) {
            self.keys_pressed.insert(key);
        }
    }

    pub fn release_key(&mut self, key: KeyCode) {
        if self.keys_held.remove(&key) {
            self.keys_released.insert(key);
        }
    }

    pub fn is_key_held(&self, key: KeyCode) -> bool { self.keys_held.contains(&key) }
    pub fn is_key_pressed(&self, key: KeyCode) -> bool { self.keys_pressed.contains(&key) }
    pub fn is_key_released(&self, key: KeyCode) -> bool { self.keys_released.contains(&key) }

    pub fn is_mouse_held(&self, button: MouseButton) -> bool { self.mouse_held.contains(&button) }
    pub fn is_mouse_pressed(&self, button: MouseButton) -> bool { self.mouse_pressed.contains(&button) }
    pub fn is_mouse_released(&self, button: MouseButton) -> bool { self.mouse_released.contains(&button) }
}

/// Maps logical actions (defined by the game) to one or more physical inputs.
#[derive(Debug, Clone)]
pub struct ActionMap<A: Hash + Eq + Copy> {
    bindings: HashMap<A, Vec<InputSource>>,
}

impl<A: Hash + Eq + Copy> ActionMap<A> {
    pub fn new() -> Self {
        Self { bindings: HashMap::new() }
    }

    pub fn bind(&mut self, action: A, source: InputSource) {
        self.bindings.entry(action).or_default().push(source);
    }

    /// Returns true if the action was triggered this frame (pressed).
    pub fn is_pressed(&self, action: A, input: &InputState) -> bool {
        self.bindings.get(&action).is_some_and(|sources| {
            sources.iter().any(|s| match s {
                InputSource::Key(k) => input.is_key_pressed(*k),
                InputSource::Mouse(b) => input.is_mouse_pressed(*b),
            })
        })
    }

    /// Returns true if the action is currently being held.
    pub fn is_held(&self, action: A, input: &InputState) -> bool {
        self.bindings.get(&action).is_some_and(|sources| {
            sources.iter().any(|s| match s {
                InputSource::Key(k) => input.is_key_held(*k),
                InputSource::Mouse(b) => input.is_mouse_held(*b),
            })
        })
    }
}

impl<A: Hash + Eq + Copy> Default for ActionMap<A> {
    fn default() -> Self { Self::new() }
}

// ── Game actions ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Interact,
    Pause,
    Confirm,
    ToggleZones,
}

impl Action {
    /// Default bindings. Movement uses physical key positions, so the WASD
    /// block is ZQSD on an AZERTY keyboard.
    pub fn default_map() -> ActionMap<Action> {
        use InputSource::Key;
        let mut map = ActionMap::new();
        for (action, keys) in [
            (Action::MoveUp, [KeyCode::KeyW, KeyCode::ArrowUp]),
            (Action::MoveDown, [KeyCode::KeyS, KeyCode::ArrowDown]),
            (Action::MoveLeft, [KeyCode::KeyA, KeyCode::ArrowLeft]),
            (Action::MoveRight, [KeyCode::KeyD, KeyCode::ArrowRight]),
        ] {
            for key in keys {
                map.bind(action, Key(key));
            }
        }
        map.bind(Action::Interact, Key(KeyCode::KeyE));
        map.bind(Action::Pause, Key(KeyCode::Escape));
        map.bind(Action::Confirm, Key(KeyCode::Enter));
        map.bind(Action::Confirm, Key(KeyCode::NumpadEnter));
        map.bind(Action::ToggleZones, Key(KeyCode::F1));
        map
    }

    /// Unnormalised movement direction from the held movement actions
    /// (y down). Opposing keys cancel out.
    pub fn movement(map: &ActionMap<Action>, input: &InputState) -> Vec2 {
        let axis = |neg: Action, pos: Action| {
            map.is_held(pos, input) as i32 as f32 - map.is_held(neg, input) as i32 as f32
        };
        Vec2::new(
            axis(Action::MoveLeft, Action::MoveRight),
            axis(Action::MoveUp, Action::MoveDown),
        )
    }
}
