use glam::Vec2;

use walkabout::area::Area;
use walkabout::config::GameConfig;
use walkabout::content::World;
use walkabout::geometry::Rect;
use walkabout::spawn::SpawnTable;

fn world() -> World {
    World::embedded().unwrap()
}

#[test]
fn every_doorway_has_a_hand_placed_arrival() {
    let world = world();
    for zone in &world.triggers {
        assert!(
            world.spawns.iter().any(|p| p.area == zone.to && p.from == Some(zone.from)),
            "no arrival for {:?} -> {:?}",
            zone.from,
            zone.to
        );
    }
}

#[test]
fn arrivals_are_clear_of_doorways_and_furniture() {
    let world = world();
    let size = GameConfig::default().player_size;
    for point in &world.spawns {
        let player = Rect::from_pos_size(Vec2::from(point.at), size);
        for zone in world.triggers.iter().filter(|z| z.from == point.area) {
            assert!(!zone.bounds.overlaps(&player), "{point:?} lands on a doorway to {:?}", zone.to);
        }
        for obstacle in world.obstacles(point.area) {
            assert!(!obstacle.overlaps(&player), "{point:?} lands inside {obstacle:?}");
        }
    }
}

#[test]
fn arrivals_fit_in_the_window() {
    let world = world();
    let config = GameConfig::default();
    for point in &world.spawns {
        let player = Rect::from_pos_size(Vec2::from(point.at), config.player_size);
        assert_eq!(player.clamped_within(&config.play_bounds), player, "{point:?}");
    }
}

#[test]
fn every_character_has_a_home_and_something_to_say() {
    let world = world();
    for npc in &world.npcs {
        assert!(Area::ALL.iter().any(|a| a.allows(npc.kind)), "{} has no home", npc.name);
        assert!(!npc.lines.is_empty());
    }
}

#[test]
fn start_area_has_a_default_entry() {
    let world = world();
    let table = SpawnTable::new(world.spawns.clone());
    let at = table.lookup(world.start, None, GameConfig::default().player_size);
    assert_eq!(at, Vec2::new(380.0, 280.0));
}

#[test]
fn backdrop_of_a_missing_layout_falls_back() {
    let world = World::from_json(
        r#"{ "start": "house", "areas": [], "triggers": [], "spawns": [], "npcs": [] }"#,
    )
    .unwrap();
    assert!(world.layout(Area::Station).is_none());
    assert!(world.obstacles(Area::Station).is_empty());
    assert_eq!(world.backdrop(Area::Station).0[3], 1.0);
}
