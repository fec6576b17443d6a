use glam::Vec2;
use walkabout::geometry::*;

fn sample_rects() -> Vec<Rect> {
    vec![
        Rect::new(0.0, 0.0, 10.0, 10.0),
        Rect::new(10.0, 0.0, 10.0, 10.0),
        Rect::new(5.0, 5.0, 1.0, 1.0),
        Rect::new(20.5, 0.0, 3.0, 3.0),
        Rect::new(-5.0, -5.0, 4.0, 4.0),
        Rect::new(3.0, 3.0, 0.0, 0.0),
        Rect::new(0.0, 11.0, 10.0, 2.0),
    ]
}

#[test]
fn overlap_is_symmetric() {
    let rects = sample_rects();
    for a in &rects {
        for b in &rects {
            assert_eq!(a.overlaps(b), b.overlaps(a), "{a:?} vs {b:?}");
        }
    }
}

#[test]
fn overlap_touching_and_separated() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(a.overlaps(&Rect::new(10.0, 10.0, 5.0, 5.0)), "corner touch counts");
    assert!(!a.overlaps(&Rect::new(10.1, 0.0, 5.0, 5.0)));
    assert!(!a.overlaps(&Rect::new(0.0, -6.0, 5.0, 5.0)));
}

#[test]
fn zero_area_rect_inside_overlaps() {
    let point = Rect::new(3.0, 3.0, 0.0, 0.0);
    assert!(point.overlaps(&Rect::new(0.0, 0.0, 10.0, 10.0)));
    assert!(point.overlaps(&point));
}

#[test]
fn clamped_within_window() {
    let window = Rect::new(0.0, 0.0, 800.0, 600.0);
    let off = Rect::new(780.0, -12.0, 40.0, 40.0).clamped_within(&window);
    assert_eq!(off.pos, Vec2::new(760.0, 0.0));
}

#[test]
fn push_in_from_left_lands_on_left_edge() {
    let table = Rect::new(480.0, 330.0, 140.0, 80.0);
    let player = Rect::new(443.0, 350.0, 40.0, 40.0);
    let out = resolve_obstacles(player, &[table]);
    assert!((out.right() - table.left()).abs() < 1e-4);
    assert_eq!(out.pos.y, 350.0);
}

#[test]
fn push_in_from_below_lands_on_bottom_edge() {
    let bed = Rect::new(60.0, 60.0, 160.0, 90.0);
    let player = Rect::new(100.0, 148.0, 40.0, 40.0);
    let out = resolve_obstacles(player, &[bed]);
    assert!((out.top() - bed.bottom()).abs() < 1e-4);
}

#[test]
fn obstacles_resolve_in_order() {
    // The push out of `a` shoves the player into `b`; `a` is not revisited.
    let a = Rect::new(0.0, 0.0, 50.0, 100.0);
    let b = Rect::new(60.0, 0.0, 50.0, 100.0);
    let player = Rect::new(45.0, 40.0, 20.0, 20.0);
    let out = resolve_obstacles(player, &[a, b]);
    // a: penetration 5 from the right → x = 50; then b: right edge 70 vs 60 → pushed to x = 40.
    assert!((out.pos.x - 40.0).abs() < 1e-4);
}

#[test]
fn no_overlap_no_push() {
    let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert_eq!(push_out(&r, &Rect::new(50.0, 50.0, 10.0, 10.0)), None);
}
