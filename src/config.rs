use glam::Vec2;

use crate::geometry::Rect;

/// Gameplay tuning. Everything is in logical pixels and seconds.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub player_size: Vec2,
    /// Player speed in pixels per second.
    pub player_speed: f32,
    /// Fade speed in alpha units (0–255) per second.
    pub fade_rate: f32,
    /// How far outside an NPC's box the player may stand and still talk.
    pub interact_margin: f32,
    pub npc_size: Vec2,
    /// How long trigger event text stays on the HUD.
    pub event_ttl: f32,
    /// The player is clamped inside this rectangle.
    pub play_bounds: Rect,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_size: Vec2::new(40.0, 40.0),
            player_speed: 200.0,
            fade_rate: 600.0,
            interact_margin: 30.0,
            npc_size: Vec2::new(30.0, 40.0),
            event_ttl: 3.0,
            play_bounds: Rect::new(0.0, 0.0, 800.0, 600.0),
        }
    }
}
