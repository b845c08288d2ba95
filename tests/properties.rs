//! Property-style checks from spec.md §8, hand-written rather than driven
//! by a property-testing crate (the teacher crate tests this way too: see
//! `fill_tests.rs`'s hand-enumerated cases).

use trapezoid_tessellation::emitter::FillRule;
use trapezoid_tessellation::geom::{Contour, Point, PolyArea};
use trapezoid_tessellation::trapezoid::TrapezoidStore;
use trapezoid_tessellation::{tessellate_polyarea, TessellateOptions};

fn area(store: &TrapezoidStore) -> i64 {
    store
        .iter()
        .map(|t| {
            let h = (t.bot - t.top) as i64;
            let top_w = (t.top_right() - t.top_left()) as i64;
            let bot_w = (t.bot_right() - t.bot_left()) as i64;
            h * (top_w + bot_w) / 2
        })
        .sum()
}

/// The shoelace formula for a simple (non-self-intersecting) polygon's
/// signed area, doubled (to stay in integer arithmetic).
fn shoelace_doubled_area(points: &[Point]) -> i64 {
    let n = points.len();
    let mut sum: i64 = 0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        sum += a.x as i64 * b.y as i64 - b.x as i64 * a.y as i64;
    }
    sum.abs()
}

fn pentagon() -> Vec<Point> {
    vec![
        Point::new(0, 0),
        Point::new(10, 0),
        Point::new(14, 6),
        Point::new(6, 12),
        Point::new(-2, 5),
    ]
}

/// Coverage: for a simple polygon, the summed trapezoid area equals the
/// shoelace area, for both fill rules (a simple polygon has winding
/// magnitude 1 everywhere inside, so EvenOdd and NonZero agree).
#[test]
fn coverage_matches_shoelace_area() {
    let points = pentagon();
    let expected = shoelace_doubled_area(&points) / 2;
    for fill_rule in [FillRule::EvenOdd, FillRule::NonZero] {
        let poly = PolyArea::from(Contour::outer(points.clone()));
        let mut store = TrapezoidStore::new();
        let options = TessellateOptions::DEFAULT.with_fill_rule(fill_rule);
        tessellate_polyarea(&poly, &options, &mut store).unwrap();
        assert_eq!(area(&store), expected, "fill_rule={fill_rule:?}");
    }
}

/// Determinism: tessellating the same input twice produces byte-for-byte
/// identical trapezoid sequences (same order, not just same total area).
#[test]
fn determinism_across_repeated_runs() {
    let poly = PolyArea::from(Contour::outer(pentagon()));
    let mut a = TrapezoidStore::new();
    let mut b = TrapezoidStore::new();
    tessellate_polyarea(&poly, &TessellateOptions::DEFAULT, &mut a).unwrap();
    tessellate_polyarea(&poly, &TessellateOptions::DEFAULT, &mut b).unwrap();
    assert_eq!(a.as_slice(), b.as_slice());
}

/// Y-monotonicity: every emitted trapezoid has strictly positive height
/// and the store, read in emission order, never decreases in `top` (the
/// sweep only ever moves down).
#[test]
fn trapezoids_are_y_monotonic_and_non_degenerate() {
    let poly = PolyArea::from(Contour::outer(pentagon()));
    let mut store = TrapezoidStore::new();
    tessellate_polyarea(&poly, &TessellateOptions::DEFAULT, &mut store).unwrap();

    let mut last_top = i32::MIN;
    for t in store.iter() {
        assert!(t.bot > t.top, "degenerate trapezoid: {t:?}");
        assert!(t.top >= last_top, "trapezoid y order went backwards: {t:?}");
        last_top = t.top;
    }
}

/// Containment: a point strictly inside the polygon falls within exactly
/// one trapezoid's x-range at its y; a point strictly outside falls within
/// none.
#[test]
fn containment_matches_emitted_trapezoids() {
    let poly = PolyArea::from(Contour::outer(pentagon()));
    let mut store = TrapezoidStore::new();
    tessellate_polyarea(&poly, &TessellateOptions::DEFAULT, &mut store).unwrap();

    let inside = Point::new(5, 5);
    let outside = Point::new(-20, 5);

    let covers = |p: Point| {
        store.iter().any(|t| {
            p.y >= t.top
                && p.y < t.bot
                && p.x >= t.left.x_at_y(p.y)
                && p.x < t.right.x_at_y(p.y)
        })
    };

    assert!(covers(inside));
    assert!(!covers(outside));
}

/// Empty input is rejected under validation rather than silently producing
/// zero trapezoids.
#[test]
fn empty_input_is_rejected() {
    let poly = PolyArea::default();
    let mut store = TrapezoidStore::new();
    let result = tessellate_polyarea(&poly, &TessellateOptions::DEFAULT, &mut store);
    assert!(result.is_err());
}
