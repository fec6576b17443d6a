//! World data: per-area scenery, doorways, arrival points and characters.
//!
//! The tables live in `assets/world.json`, embedded at compile time, and are
//! validated once when a session starts.

use glam::Vec2;
use serde::Deserialize;

use crate::area::Area;
use crate::engine::Color;
use crate::error::ContentError;
use crate::geometry::Rect;
use crate::npc::{Npc, NpcKind};
use crate::spawn::SpawnPoint;
use crate::trigger::TriggerZone;

pub const EMBEDDED_WORLD: &str = include_str!("../assets/world.json");

/// A coloured rectangle of scenery.
#[derive(Clone, Debug, Deserialize)]
pub struct Prop {
    pub rect: Rect,
    pub color: [u8; 3],
}

impl Prop {
    pub fn color(&self) -> Color {
        Color::from(self.color)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct AreaLayout {
    pub area: Area,
    pub backdrop: [u8; 3],
    /// Drawn only.
    #[serde(default)]
    pub decor: Vec<Prop>,
    /// Drawn and solid: the player is pushed out of these.
    #[serde(default)]
    pub obstacles: Vec<Prop>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NpcEntry {
    pub kind: NpcKind,
    pub name: String,
    pub at: [f32; 2],
    pub lines: Vec<String>,
}

impl NpcEntry {
    pub fn build(&self, size: Vec2) -> Npc {
        Npc::new(self.kind, self.name.clone(), Vec2::from(self.at), size, self.lines.clone())
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct World {
    pub start: Area,
    pub areas: Vec<AreaLayout>,
    pub triggers: Vec<TriggerZone>,
    pub spawns: Vec<SpawnPoint>,
    pub npcs: Vec<NpcEntry>,
}

impl World {
    /// The world shipped with the game.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED_WORLD)
    }

    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let world: World = serde_json::from_str(json)?;
        world.validate()?;
        Ok(world)
    }

    /// Reject tables that would break the game loop: a doorway leading back
    /// into its own area, or a character with nothing to say.
    pub fn validate(&self) -> Result<(), ContentError> {
        if let Some((index, zone)) = self.triggers.iter().enumerate().find(|(_, z)| z.from == z.to) {
            return Err(ContentError::SelfLoop { index, area: zone.from.label().to_owned() });
        }
        if let Some(npc) = self.npcs.iter().find(|n| n.lines.is_empty()) {
            return Err(ContentError::Mute(npc.name.clone()));
        }
        for npc in &self.npcs {
            if !Area::ALL.iter().any(|a| a.allows(npc.kind)) {
                tracing::warn!("npc '{}' has a kind no area shows", npc.name);
            }
        }
        Ok(())
    }

    /// Layout for `area`, if the tables describe it.
    pub fn layout(&self, area: Area) -> Option<&AreaLayout> {
        self.areas.iter().find(|l| l.area == area)
    }

    /// Solid rectangles of `area`, in declaration order.
    pub fn obstacles(&self, area: Area) -> Vec<Rect> {
        self.layout(area)
            .map(|l| l.obstacles.iter().map(|p| p.rect).collect())
            .unwrap_or_default()
    }

    pub fn backdrop(&self, area: Area) -> Color {
        self.layout(area).map_or(Color::DARK_GRAY, |l| Color::from(l.backdrop))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_world_is_valid() {
        let world = World::embedded().unwrap();
        assert_eq!(world.start, Area::House);
        for area in Area::ALL {
            assert!(world.layout(area).is_some(), "{area:?} has no layout");
        }
    }

    #[test]
    fn self_loop_is_rejected() {
        let json = r#"{
            "start": "house", "areas": [], "spawns": [], "npcs": [],
            "triggers": [{ "bounds": [0, 0, 10, 10], "from": "street", "to": "street" }]
        }"#;
        assert!(matches!(World::from_json(json), Err(ContentError::SelfLoop { index: 0, .. })));
    }

    #[test]
    fn mute_npc_is_rejected() {
        let json = r#"{
            "start": "house", "areas": [], "spawns": [], "triggers": [],
            "npcs": [{ "kind": "parent", "name": "Mum", "at": [0, 0], "lines": [] }]
        }"#;
        assert!(matches!(World::from_json(json), Err(ContentError::Mute(name)) if name == "Mum"));
    }

    #[test]
    fn unknown_area_is_a_parse_error() {
        let json = r#"{ "start": "moon", "areas": [], "spawns": [], "triggers": [], "npcs": [] }"#;
        assert!(matches!(World::from_json(json), Err(ContentError::Parse(_))));
    }
}
