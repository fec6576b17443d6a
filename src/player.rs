use glam::Vec2;

use crate::engine::Color;
use crate::entity::Entity;
use crate::geometry::Rect;
use crate::ui::UI;

const BODY: Color = Color::rgb(70, 130, 220);
const TRIM: Color = Color::rgb(230, 240, 255);

pub struct Player {
    pos: Vec2,
    size: Vec2,
    speed: f32,
    /// Direction requested by input for the next `update`; not normalised.
    intent: Vec2,
}

impl Player {
    pub fn new(pos: Vec2, size: Vec2, speed: f32) -> Self {
        Self { pos, size, speed, intent: Vec2::ZERO }
    }

    /// Set the direction of travel. Diagonals move at the same speed as
    /// straight lines.
    pub fn steer(&mut self, direction: Vec2) {
        self.intent = direction;
    }

    pub fn stop(&mut self) {
        self.intent = Vec2::ZERO;
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn is_moving(&self) -> bool {
        self.intent != Vec2::ZERO
    }
}

impl Entity for Player {
    fn update(&mut self, dt: f32) {
        self.pos += self.intent.normalize_or_zero() * self.speed * dt;
    }

    fn draw(&self, ui: &mut UI) {
        let Vec2 { x, y } = self.pos;
        ui.ui_rect(x, y, self.size.x, self.size.y, BODY);
        ui.ui_outline(x, y, self.size.x, self.size.y, 2.0, TRIM);
    }

    fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    fn set_position(&mut self, pos: Vec2) {
        self.pos = pos;
    }
}
