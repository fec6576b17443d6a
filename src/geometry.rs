// =============================================================================
// GEOMETRY.RS: Axis-aligned rectangles in window-pixel space
//
// Everything in the game lives in one fixed 800×600 pixel space:
// - Overlap tests (trigger zones, furniture)
// - Point containment (interaction ranges, buttons)
// - Push-out resolution against solid obstacles
// =============================================================================

use glam::Vec2;
use serde::Deserialize;

/// An axis-aligned rectangle: top-left `pos` plus `size`, y pointing down.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "[f32; 4]")]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl From<[f32; 4]> for Rect {
    fn from([x, y, w, h]: [f32; 4]) -> Self {
        Self::new(x, y, w, h)
    }
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { pos: Vec2::new(x, y), size: Vec2::new(w, h) }
    }

    #[inline]
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline] pub fn left(&self) -> f32 { self.pos.x }
    #[inline] pub fn top(&self) -> f32 { self.pos.y }
    #[inline] pub fn right(&self) -> f32 { self.pos.x + self.size.x }
    #[inline] pub fn bottom(&self) -> f32 { self.pos.y + self.size.y }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Separating-axis overlap test.
    ///
    /// Touching edges count as overlapping, and zero-area rectangles go through
    /// the same inequality: a degenerate rect lying on or inside `other`
    /// overlaps it. The test is symmetric.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.right() < other.left()
            || self.left() > other.right()
            || self.bottom() < other.top()
            || self.top() > other.bottom())
    }

    /// Half-open point containment: `min <= p < max` on both axes.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.left() && p.x < self.right() && p.y >= self.top() && p.y < self.bottom()
    }

    /// Grow the rectangle by `margin` pixels on every side.
    pub fn expanded(&self, margin: f32) -> Rect {
        Rect {
            pos: self.pos - Vec2::splat(margin),
            size: self.size + Vec2::splat(margin * 2.0),
        }
    }

    /// Clamp the rectangle's position so it stays fully inside `bounds`.
    pub fn clamped_within(&self, bounds: &Rect) -> Rect {
        let max = (bounds.pos + bounds.size - self.size).max(bounds.pos);
        Rect { pos: self.pos.clamp(bounds.pos, max), size: self.size }
    }
}

// =============================================================================
// PUSH-OUT
// =============================================================================

/// Translation that moves `mover` out of `obstacle` along the axis of least
/// penetration, or `None` when the two do not overlap.
///
/// Ties favour horizontal resolution (left, right, then top, bottom).
pub fn push_out(mover: &Rect, obstacle: &Rect) -> Option<Vec2> {
    if !mover.overlaps(obstacle) {
        return None;
    }

    let from_left = mover.right() - obstacle.left();
    let from_right = obstacle.right() - mover.left();
    let from_top = mover.bottom() - obstacle.top();
    let from_bottom = obstacle.bottom() - mover.top();

    let candidates = [
        (from_left, Vec2::new(-from_left, 0.0)),
        (from_right, Vec2::new(from_right, 0.0)),
        (from_top, Vec2::new(0.0, -from_top)),
        (from_bottom, Vec2::new(0.0, from_bottom)),
    ];

    candidates
        .into_iter()
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, shift)| shift)
}

/// Resolve `mover` against every obstacle in order. Each correction is applied
/// before the next obstacle is tested, so the result is the cumulative effect
/// of sequential pushes rather than a global solve.
pub fn resolve_obstacles(mover: Rect, obstacles: &[Rect]) -> Rect {
    obstacles.iter().fold(mover, |current, obstacle| match push_out(&current, obstacle) {
        Some(shift) => Rect { pos: current.pos + shift, size: current.size },
        None => current,
    })
}
