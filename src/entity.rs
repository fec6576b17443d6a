use glam::Vec2;

use crate::geometry::Rect;
use crate::ui::UI;

/// Anything that stands in an area: it advances with time, draws itself and
/// occupies an axis-aligned box.
///
/// `position` is the top-left corner of `bounds`.
pub trait Entity {
    fn update(&mut self, dt: f32);
    fn draw(&self, ui: &mut UI);
    fn bounds(&self) -> Rect;

    fn position(&self) -> Vec2 {
        self.bounds().pos
    }

    fn set_position(&mut self, pos: Vec2);

    fn center(&self) -> Vec2 {
        self.bounds().center()
    }
}
