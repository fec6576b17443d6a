use glam::Vec2;
use serde::Deserialize;

use crate::area::Area;

/// Window centre in pixel space.
pub const SCREEN_CENTER: Vec2 = Vec2::new(400.0, 300.0);

/// One hand-placed arrival point. `from: None` is the area's default entry.
#[derive(Clone, Debug, Deserialize)]
pub struct SpawnPoint {
    pub area: Area,
    #[serde(default)]
    pub from: Option<Area>,
    /// Top-left position of the player on arrival.
    pub at: [f32; 2],
}

/// Static (destination, origin) → arrival point table.
#[derive(Clone, Debug, Default)]
pub struct SpawnTable {
    points: Vec<SpawnPoint>,
}

impl SpawnTable {
    pub fn new(points: Vec<SpawnPoint>) -> Self {
        Self { points }
    }

    /// Arrival position for a player of `player_size` entering `area` from `from`.
    ///
    /// Looks for an exact (area, origin) entry, then the area's default entry,
    /// and otherwise centres the player on the window.
    pub fn lookup(&self, area: Area, from: Option<Area>, player_size: Vec2) -> Vec2 {
        let exact = from.and_then(|origin| {
            self.points.iter().find(|p| p.area == area && p.from == Some(origin))
        });
        exact
            .or_else(|| self.points.iter().find(|p| p.area == area && p.from.is_none()))
            .map(|p| Vec2::from(p.at))
            .unwrap_or_else(|| SCREEN_CENTER - player_size * 0.5)
    }

    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
}
