use glam::Vec2;

use walkabout::area::Area;
use walkabout::config::GameConfig;
use walkabout::content::World;
use walkabout::entity::Entity;
use walkabout::npc::NpcKind;
use walkabout::session::{Controls, Outcome, Session};

const DT: f32 = 1.0 / 60.0;
const UP: Vec2 = Vec2::new(0.0, -1.0);
const DOWN: Vec2 = Vec2::new(0.0, 1.0);
const RIGHT: Vec2 = Vec2::new(1.0, 0.0);

fn session() -> Session {
    Session::embedded(GameConfig::default()).unwrap()
}

/// Tick with `controls` until `done` holds; panics after ten simulated minutes.
fn run_until(session: &mut Session, controls: Controls, mut done: impl FnMut(&Session) -> bool) -> usize {
    for ticks in 0..36_000 {
        if done(session) {
            return ticks;
        }
        session.tick(DT, &controls);
    }
    panic!("condition never reached");
}

fn shown_line(session: &Session) -> Option<String> {
    session.hud().dialogue().map(|d| d.line.clone())
}

// ── Area transitions ─────────────────────────────────────────────────────────

#[test]
fn walking_through_the_house_door_reaches_the_street() {
    let mut s = session();
    assert_eq!(s.area(), Area::House);
    assert_eq!(s.player().position(), Vec2::new(380.0, 280.0));

    let mut peak = 0.0f32;
    let mut alpha_at_swap = None;
    for _ in 0..600 {
        let before = s.area();
        s.tick(DT, &Controls::moving(UP));
        peak = peak.max(s.fade().alpha());
        if before != s.area() {
            assert!(alpha_at_swap.is_none(), "area swapped twice");
            alpha_at_swap = Some(s.fade().alpha());
        }
        if s.area() == Area::Street && !s.fade().is_active() {
            break;
        }
    }

    assert_eq!(s.area(), Area::Street);
    assert_eq!(alpha_at_swap, Some(255.0));
    assert_eq!(peak, 255.0);
    assert_eq!(s.fade().alpha(), 0.0);
    assert_eq!(s.player().position(), Vec2::new(150.0, 440.0));
    assert_eq!(s.hud().area_label(), "Street");
    assert_eq!(s.hud().event_text(), Some("You leave the house!"));
}

#[test]
fn player_is_frozen_while_the_screen_fades() {
    let mut s = session();
    run_until(&mut s, Controls::moving(UP), |s| s.fade().is_active());
    let at = s.player().position();
    s.tick(DT, &Controls::moving(UP));
    assert_eq!(s.player().position(), at);
}

#[test]
fn going_back_home_rearms_the_house_door() {
    let mut s = session();
    run_until(&mut s, Controls::moving(UP), |s| s.area() == Area::Street && !s.fade().is_active());
    run_until(&mut s, Controls::moving(DOWN), |s| s.area() == Area::House && !s.fade().is_active());
    assert_eq!(s.player().position(), Vec2::new(380.0, 120.0));
    assert_eq!(s.hud().event_text(), Some("You go back home!"));

    run_until(&mut s, Controls::moving(UP), |s| s.area() == Area::Street);
}

#[test]
fn player_cannot_leave_the_window() {
    let mut s = session();
    s.teleport_player(Vec2::new(20.0, 280.0));
    for _ in 0..120 {
        s.tick(DT, &Controls::moving(Vec2::new(-1.0, 0.0)));
    }
    assert_eq!(s.player().position().x, 0.0);
}

// ── Furniture ────────────────────────────────────────────────────────────────

#[test]
fn pushing_into_the_table_from_the_left_stops_at_its_edge() {
    let mut s = session();
    let table = s.obstacles()[2];
    s.teleport_player(Vec2::new(430.0, 350.0));
    for _ in 0..60 {
        s.tick(DT, &Controls::moving(RIGHT));
    }
    let right = s.player().bounds().right();
    assert!((right - table.left()).abs() < 1e-3, "right edge {right}");
    assert_eq!(s.player().position().y, 350.0);
}

// ── Dialogue ─────────────────────────────────────────────────────────────────

#[test]
fn five_presses_walk_a_three_line_conversation() {
    let mut s = session();
    // Next to Mum, whose reach is 490..580 × 170..270.
    s.teleport_player(Vec2::new(515.0, 210.0));
    s.tick(DT, &Controls::default());
    assert!(s.hud().prompt_visible());
    assert_eq!(s.target().map(|n| n.kind), Some(NpcKind::Parent));

    let mum = s.target().map(|n| n.dialogue.clone()).unwrap();
    assert_eq!(mum.len(), 3);

    let mut seen = Vec::new();
    for _ in 0..5 {
        assert_eq!(s.tick(DT, &Controls::interact()), Outcome::Continue);
        seen.push(shown_line(&s));
    }

    let line = |i: usize| {
        let mut c = mum.clone();
        for _ in 0..i {
            c.advance();
        }
        Some(c.current().to_owned())
    };
    assert_eq!(seen, vec![line(0), line(1), line(2), None, line(0)]);
    assert!(s.npcs().iter().any(|n| n.kind == NpcKind::Parent && n.is_greeted()));
}

#[test]
fn interact_out_of_range_does_nothing() {
    let mut s = session();
    s.tick(DT, &Controls::interact());
    assert!(!s.in_conversation());
    assert!(!s.hud().prompt_visible());
}

#[test]
fn conversation_freezes_movement() {
    let mut s = session();
    s.teleport_player(Vec2::new(515.0, 210.0));
    s.tick(DT, &Controls::interact());
    assert!(s.in_conversation());
    for _ in 0..30 {
        s.tick(DT, &Controls::moving(DOWN));
    }
    assert_eq!(s.player().position(), Vec2::new(515.0, 210.0));
}

#[test]
fn only_house_characters_are_visible_at_home() {
    let s = session();
    let kinds: Vec<_> = s.visible_npcs().map(|n| n.kind).collect();
    assert_eq!(kinds, vec![NpcKind::Parent]);
}

// ── Ending ───────────────────────────────────────────────────────────────────

fn school_world() -> World {
    World::from_json(
        r#"{
            "start": "school",
            "areas": [{ "area": "school", "backdrop": [50, 200, 50] }],
            "triggers": [],
            "spawns": [{ "area": "school", "at": [380, 330] }],
            "npcs": [
                { "kind": "friend", "name": "Leo", "at": [385, 300],
                  "lines": ["Nolan!", "No classes today!"] }
            ]
        }"#,
    )
    .unwrap()
}

#[test]
fn dismissing_the_friend_at_school_finishes_the_story() {
    let mut s = Session::new(school_world(), GameConfig::default());
    assert_eq!(s.tick(DT, &Controls::interact()), Outcome::Continue);
    assert_eq!(shown_line(&s).as_deref(), Some("Nolan!"));
    assert_eq!(s.tick(DT, &Controls::interact()), Outcome::Continue);
    assert_eq!(shown_line(&s).as_deref(), Some("No classes today!"));
    assert_eq!(s.tick(DT, &Controls::interact()), Outcome::Finished);
    assert!(s.is_finished());
    assert_eq!(s.tick(DT, &Controls::default()), Outcome::Finished);
    assert!(s.play_time() > 0.0);
}

#[test]
fn unmapped_spawn_centres_the_player() {
    let mut world = school_world();
    world.spawns.clear();
    let s = Session::new(world, GameConfig::default());
    assert_eq!(s.player().position(), Vec2::new(380.0, 280.0));
}

#[test]
fn the_whole_route_from_home_to_school() {
    let mut s = session();
    let settle = |area: Area| move |s: &Session| s.area() == area && !s.fade().is_active();

    run_until(&mut s, Controls::moving(UP), settle(Area::Street));
    run_until(&mut s, Controls::moving(RIGHT), settle(Area::ProtestStreet));
    run_until(&mut s, Controls::moving(RIGHT), settle(Area::Station));
    run_until(&mut s, Controls::moving(RIGHT), settle(Area::TrainInterior));
    run_until(&mut s, Controls::moving(RIGHT), settle(Area::School));
    assert_eq!(s.player().position(), Vec2::new(380.0, 500.0));

    run_until(&mut s, Controls::moving(UP), |s| s.target().is_some());
    assert_eq!(s.target().map(|n| n.kind), Some(NpcKind::Friend));

    let outcomes: Vec<_> = (0..4).map(|_| s.tick(DT, &Controls::interact())).collect();
    assert_eq!(outcomes[..3], [Outcome::Continue; 3]);
    assert_eq!(outcomes[3], Outcome::Finished);
}
