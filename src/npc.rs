use glam::Vec2;
use serde::Deserialize;

use crate::dialogue::DialogueCursor;
use crate::engine::Color;
use crate::entity::Entity;
use crate::geometry::Rect;
use crate::ui::UI;

/// Role of a non-player character. Decides colour, idle animation and the
/// one area it appears in (see `Area::npc_kinds`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NpcKind {
    Parent,
    Protester,
    Officer,
    Passerby,
    StationAgent,
    Conductor,
    Passenger,
    Friend,
}

impl NpcKind {
    pub const ALL: [NpcKind; 8] = [
        NpcKind::Parent,
        NpcKind::Protester,
        NpcKind::Officer,
        NpcKind::Passerby,
        NpcKind::StationAgent,
        NpcKind::Conductor,
        NpcKind::Passenger,
        NpcKind::Friend,
    ];

    pub const fn color(self) -> Color {
        match self {
            NpcKind::Parent => Color::rgb(100, 50, 150),
            NpcKind::Protester => Color::rgb(200, 100, 0),
            NpcKind::Officer | NpcKind::Conductor => Color::rgb(50, 50, 150),
            NpcKind::Passerby | NpcKind::Passenger => Color::rgb(100, 100, 200),
            NpcKind::StationAgent => Color::rgb(150, 150, 50),
            NpcKind::Friend => Color::rgb(50, 200, 50),
        }
    }

    /// Protesters pace back and forth on top of the common bob.
    pub const fn sways(self) -> bool {
        matches!(self, NpcKind::Protester)
    }
}

const SKIN: Color = Color::rgb(210, 180, 140);
const BOB_AMPLITUDE: f32 = 3.0;
const SWAY_AMPLITUDE: f32 = 20.0;
/// Animation clock speed relative to real time.
const ANIM_SPEED: f32 = 2.0;

pub struct Npc {
    pub kind: NpcKind,
    pub name: String,
    /// Anchor position; the animation never moves it.
    pos: Vec2,
    size: Vec2,
    pub dialogue: DialogueCursor,
    /// Set once the player has opened a conversation; hides the marker.
    greeted: bool,
    anim_time: f32,
}

impl Npc {
    pub fn new(kind: NpcKind, name: impl Into<String>, pos: Vec2, size: Vec2, lines: Vec<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            pos,
            size,
            dialogue: DialogueCursor::new(lines),
            greeted: false,
            anim_time: 0.0,
        }
    }

    pub fn is_greeted(&self) -> bool {
        self.greeted
    }

    pub fn mark_greeted(&mut self) {
        self.greeted = true;
    }

    /// Draw-only displacement from the anchor: a small bob for everyone plus
    /// a wide sway for protesters.
    pub fn anim_offset(&self) -> Vec2 {
        let bob = self.anim_time.sin() * BOB_AMPLITUDE;
        let sway = if self.kind.sways() {
            (self.anim_time * 0.5).sin() * SWAY_AMPLITUDE
        } else {
            0.0
        };
        Vec2::new(sway, bob)
    }

    /// Whether a player occupying `player` may talk to this NPC: the player's
    /// centre lies within `margin` pixels of the NPC's (unanimated) box.
    pub fn is_in_range(&self, player: &Rect, margin: f32) -> bool {
        self.bounds().expanded(margin).contains(player.center())
    }
}

impl Entity for Npc {
    fn update(&mut self, dt: f32) {
        self.anim_time += dt * ANIM_SPEED;
    }

    fn draw(&self, ui: &mut UI) {
        let Vec2 { x, y } = self.pos + self.anim_offset();
        ui.ui_rect(x, y, self.size.x, self.size.y, self.kind.color());
        // head and eyes
        ui.ui_rect(x + 5.0, y - 15.0, 20.0, 20.0, SKIN);
        ui.ui_rect(x + 9.0, y - 9.0, 4.0, 4.0, Color::BLACK);
        ui.ui_rect(x + 17.0, y - 9.0, 4.0, 4.0, Color::BLACK);
        if !self.greeted {
            ui.ui_rect(x + 10.0, y - 30.0, 10.0, 10.0, Color::YELLOW);
        }
    }

    fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    fn set_position(&mut self, pos: Vec2) {
        self.pos = pos;
    }
}
