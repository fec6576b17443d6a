use serde::Deserialize;

use crate::area::Area;
use crate::geometry::Rect;

/// A rectangular doorway from one area into another.
#[derive(Clone, Debug, Deserialize)]
pub struct TriggerZone {
    pub bounds: Rect,
    pub from: Area,
    pub to: Area,
    /// Event text flashed on the HUD when the zone fires.
    #[serde(default)]
    pub message: String,
    #[serde(skip)]
    pub used: bool,
}

impl TriggerZone {
    pub fn new(bounds: Rect, from: Area, to: Area, message: impl Into<String>) -> Self {
        Self { bounds, from, to, message: message.into(), used: false }
    }

    /// Whether this zone would fire for a player at `player` standing in `area`.
    pub fn is_armed_for(&self, area: Area, player: &Rect) -> bool {
        !self.used && self.from == area && self.bounds.overlaps(player)
    }
}

/// What a fired trigger hands to the transition controller.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub from: Area,
    pub to: Area,
    pub message: String,
}

/// All trigger zones of the world, in declaration order.
#[derive(Clone, Debug, Default)]
pub struct TriggerSet {
    zones: Vec<TriggerZone>,
}

impl TriggerSet {
    pub fn new(zones: Vec<TriggerZone>) -> Self {
        Self { zones }
    }

    /// Fire the first armed zone overlapping `player` in `area`, marking it used.
    /// Zones are tested in declaration order; the first hit wins.
    pub fn fire(&mut self, area: Area, player: &Rect) -> Option<Transition> {
        let zone = self.zones.iter_mut().find(|z| z.is_armed_for(area, player))?;
        zone.used = true;
        Some(Transition { from: zone.from, to: zone.to, message: zone.message.clone() })
    }

    /// Re-arm every zone whose source is `area`. Called on arrival in `area`.
    pub fn rearm(&mut self, area: Area) {
        for zone in self.zones.iter_mut().filter(|z| z.from == area) {
            zone.used = false;
        }
    }

    /// Zones leaving `area`, for the debug overlay.
    pub fn leaving(&self, area: Area) -> impl Iterator<Item = &TriggerZone> {
        self.zones.iter().filter(move |z| z.from == area)
    }

    pub fn len(&self) -> usize { self.zones.len() }
    pub fn is_empty(&self) -> bool { self.zones.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_declared_zone_wins() {
        let mut set = TriggerSet::new(vec![
            TriggerZone::new(Rect::new(0.0, 0.0, 100.0, 100.0), Area::Street, Area::House, "a"),
            TriggerZone::new(Rect::new(0.0, 0.0, 100.0, 100.0), Area::Street, Area::Station, "b"),
        ]);
        let player = Rect::new(10.0, 10.0, 40.0, 40.0);
        let t = set.fire(Area::Street, &player).unwrap();
        assert_eq!(t.to, Area::House);
        assert_eq!(t.message, "a");
    }

    #[test]
    fn rearm_only_touches_matching_source() {
        let mut set = TriggerSet::new(vec![
            TriggerZone::new(Rect::new(0.0, 0.0, 10.0, 10.0), Area::House, Area::Street, ""),
            TriggerZone::new(Rect::new(0.0, 0.0, 10.0, 10.0), Area::Street, Area::House, ""),
        ]);
        let player = Rect::new(0.0, 0.0, 5.0, 5.0);
        assert!(set.fire(Area::House, &player).is_some());
        assert!(set.fire(Area::Street, &player).is_some());

        set.rearm(Area::House);
        assert!(!set.zones[0].used);
        assert!(set.zones[1].used);
    }
}
