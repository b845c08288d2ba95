//! Exact geometric predicates used to order edges in the sweep line.
//!
//! Every comparison here returns a signed `i32` interpreted as a
//! three-way compare (negative/zero/positive), the same convention as
//! `i32::cmp` collapsed to a sign. None of these ever round: they are
//! built entirely out of [`crate::wide`]'s exact 64-/128-bit arithmetic.

use crate::geom::{Coord, Edge};
use crate::wide::{cmp128, cmp64, mul32, mul64, mul64x32};

/// Compares the slope of `a` to the slope of `b`, where "slope" means the
/// direction vector from an edge's top endpoint to its bottom endpoint,
/// `(dx, dy)`. Returns the sign of `slope(a) - slope(b)` without ever
/// dividing: since `dy` is non-negative by construction for both edges,
/// `adx/ady ? bdx/bdy` rearranges to `adx*bdy ? bdx*ady` with no sign flip.
///
/// Used to break ties between edges that share a point (most commonly two
/// edges starting at the same vertex) and to detect collinearity.
pub fn slope_cmp(a: &Edge, b: &Edge) -> i32 {
    let adx = a.line.dx();
    let bdx = b.line.dx();

    // Vertical lines first: a's slope is "infinite", so it's greater than
    // any finite slope to its right and less than any to its left.
    if adx == 0 {
        return -bdx.signum();
    }
    if bdx == 0 {
        return adx.signum();
    }
    // Opposite x-directions: whichever points left has the lesser slope.
    if (adx ^ bdx) < 0 {
        return adx.signum();
    }

    let ady = a.line.dy();
    let bdy = b.line.dy();
    cmp64(mul32(adx, bdy), mul32(bdx, ady))
}

/// Compares the x coordinate of edge `a` at `y` against the literal `x`,
/// where `y` is known to lie within `a`'s range. Used when the sweep line
/// sits exactly on an endpoint of the other edge being compared, so that
/// edge's x at `y` is already known exactly.
///
/// `x` is typically another edge's endpoint, so `x - p1.x` is a cross-edge
/// difference that is not bounded by the 32-bit-delta precondition (only a
/// single edge's own `dx`/`dy` is guaranteed to fit in 32 bits) — it is
/// carried in `i64` and the product that consumes it in `i128` accordingly.
pub fn edge_cmp_x_at_y_against_x(a: &Edge, y: Coord, x: Coord) -> i32 {
    let (p1, p2) = (a.line.p1, a.line.p2);

    if x < p1.x && x < p2.x {
        return 1;
    }
    if x > p1.x && x > p2.x {
        return -1;
    }

    let adx = a.line.dx();
    let dx: i64 = x as i64 - p1.x as i64;

    if adx == 0 {
        return -(dx.signum() as i32);
    }
    if dx == 0 || ((adx as i64) ^ dx) < 0 {
        return adx.signum();
    }

    let dy = y - p1.y;
    let ady = a.line.dy();
    cmp128(mul32(dy, adx) as i128, mul64x32(dx, ady))
}

/// Compares the x coordinates of edges `a` and `b` at `y`, exactly.
///
/// Derived by cross-multiplying
/// `A_x + (Y-A_y)*A_dx/A_dy  ∘  B_x + (Y-B_y)*B_dx/B_dy`
/// into
/// `A_dy*B_dy*(A_x-B_x)  ∘  (Y-B_y)*B_dx*A_dy - (Y-A_y)*A_dx*B_dy`,
/// which needs 128-bit arithmetic in the fully general case. Most calls hit
/// one of the specializations below, which need only a bounding-box check
/// or a single 64-bit compare.
pub fn edges_cmp_x_at_y(a: &Edge, b: &Edge, y: Coord) -> i32 {
    // If the sweep line sits on an endpoint of either edge, its x there is
    // exact; prefer the cheap single-edge comparison.
    let a_exact_x = if y == a.line.p1.y {
        Some(a.line.p1.x)
    } else if y == a.line.p2.y {
        Some(a.line.p2.x)
    } else {
        None
    };
    let b_exact_x = if y == b.line.p1.y {
        Some(b.line.p1.x)
    } else if y == b.line.p2.y {
        Some(b.line.p2.x)
    } else {
        None
    };

    match (a_exact_x, b_exact_x) {
        // Both edges' x at y are exact literal coordinates from (possibly
        // unrelated) edges, so their difference is a cross-edge delta that
        // can span more than i32 on its own; compare in i64 rather than
        // subtracting directly.
        (Some(ax), Some(bx)) => cmp64(ax as i64, bx as i64),
        (Some(ax), None) => -edge_cmp_x_at_y_against_x(b, y, ax),
        (None, Some(bx)) => edge_cmp_x_at_y_against_x(a, y, bx),
        (None, None) => edges_cmp_x_at_y_general(a, b, y),
    }
}

fn minmax(a: Coord, b: Coord) -> (Coord, Coord) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

fn edges_cmp_x_at_y_general(a: &Edge, b: &Edge, y: Coord) -> i32 {
    // Bounding-box rejection: if the x-intervals of the two edges don't
    // overlap we already know the order without solving anything.
    let (amin, amax) = minmax(a.line.p1.x, a.line.p2.x);
    let (bmin, bmax) = minmax(b.line.p1.x, b.line.p2.x);
    if amax < bmin {
        return -1;
    }
    if amin > bmax {
        return 1;
    }

    let ady = a.line.dy();
    let adx = a.line.dx();
    let bdy = b.line.dy();
    let bdx = b.line.dx();
    // Cross-edge difference: unlike adx/bdx/ady/bdy (each a single edge's
    // own endpoint delta, guaranteed to fit in 32 bits), the two edges'
    // starting x coordinates can be arbitrarily far apart even when their
    // bounding boxes overlap, so this is carried in i64 and every product
    // that consumes it below goes through the i128 wide kernel instead of
    // mul32/cmp64.
    let dx: i64 = a.line.p1.x as i64 - b.line.p1.x as i64;

    let have_adx = adx != 0;
    let have_bdx = bdx != 0;
    let have_dx = dx != 0;

    match (have_dx, have_adx, have_bdx) {
        (false, false, false) => 0,
        // A_dy * B_dy * (A_x - B_x) ∘ 0; ady*bdy is positive definite.
        (true, false, false) => dx.signum() as i32,
        // 0 ∘ -(Y-A_y)*A_dx*B_dy; bdy*(y - a.top) is positive definite.
        (false, true, false) => adx.signum(),
        // 0 ∘ (Y-B_y)*B_dx*A_dy; ady*(y - b.top) is positive definite.
        (false, false, true) => -bdx.signum(),
        (false, true, true) => {
            // 0 ∘ (Y-B_y)*B_dx*A_dy - (Y-A_y)*A_dx*B_dy
            if (adx ^ bdx) < 0 {
                adx.signum()
            } else if a.line.p1.y == b.line.p1.y {
                cmp64(mul32(adx, bdy), mul32(bdx, ady))
            } else {
                let a_term = mul64x32(mul32(adx, bdy), y - a.line.p1.y);
                let b_term = mul64x32(mul32(bdx, ady), y - b.line.p1.y);
                cmp128(a_term, b_term)
            }
        }
        (true, true, false) => {
            // A_dy * (A_x - B_x) ∘ -(Y-A_y)*A_dx
            if ((-adx as i64) ^ dx) < 0 {
                dx.signum() as i32
            } else {
                let ady_dx = mul64x32(dx, ady);
                let dy_adx = mul32(a.line.p1.y - y, adx) as i128;
                cmp128(ady_dx, dy_adx)
            }
        }
        (true, false, true) => {
            // B_dy * (A_x - B_x) ∘ (Y-B_y)*B_dx
            if ((bdx as i64) ^ dx) < 0 {
                dx.signum() as i32
            } else {
                let bdy_dx = mul64x32(dx, bdy);
                let dy_bdx = mul32(y - b.line.p1.y, bdx) as i128;
                cmp128(bdy_dx, dy_bdx)
            }
        }
        (true, true, true) => {
            let l = mul64(mul32(ady, bdy), dx);
            let a_term = mul64x32(mul32(adx, bdy), y - a.line.p1.y);
            let b_term = mul64x32(mul32(bdx, ady), y - b.line.p1.y);
            cmp128(l, b_term - a_term)
        }
    }
}

/// True if `a` and `b` lie on the same infinite line: equal slope and a
/// shared point. The query y used for the "shared point" check is always
/// within both edges' y-ranges by construction (the earlier-starting edge's
/// top, compared against the other edge's x at that y).
pub fn edges_collinear(a: &Edge, b: &Edge) -> bool {
    if a.line == b.line {
        return true;
    }
    if slope_cmp(a, b) != 0 {
        return false;
    }
    if a.line.p1.y == b.line.p1.y {
        a.line.p1.x == b.line.p1.x
    } else if a.line.p1.y < b.line.p1.y {
        edge_cmp_x_at_y_against_x(b, a.line.p1.y, a.line.p1.x) == 0
    } else {
        edge_cmp_x_at_y_against_x(a, b.line.p1.y, b.line.p1.x) == 0
    }
}

/// The combined ordering used to place a newly-started edge into the
/// sweep line at `current_y`: literal-line-equal edges sort by `bottom`
/// descending (longer edge first), otherwise by x at `current_y`, then by
/// slope (callers only invoke this at edge starts, so "tied at a point"
/// always means "leftmost first"), then again by `bottom` descending for
/// truly collinear edges.
pub fn sweep_cmp(a: &Edge, b: &Edge, current_y: Coord) -> i32 {
    if a.line != b.line {
        let cmp = edges_cmp_x_at_y(a, b, current_y);
        if cmp != 0 {
            return cmp;
        }
        let cmp = slope_cmp(a, b);
        if cmp != 0 {
            return cmp;
        }
    }
    b.bottom - a.bottom
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{Edge, Point};

    fn edge(x1: Coord, y1: Coord, x2: Coord, y2: Coord) -> Edge {
        Edge::from_contour_segment(Point::new(x1, y1), Point::new(x2, y2), 1).unwrap()
    }

    #[test]
    fn slope_cmp_orders_left_to_right_from_shared_top() {
        // Both start at (0,0); one leans right, one leans left.
        let a = edge(0, 0, 10, 10);
        let b = edge(0, 0, -10, 10);
        assert!(slope_cmp(&a, &b) > 0);
        assert!(slope_cmp(&b, &a) < 0);
    }

    #[test]
    fn slope_cmp_is_zero_for_collinear() {
        let a = edge(0, 0, 10, 10);
        let b = edge(5, 5, 20, 20);
        assert_eq!(slope_cmp(&a, &b), 0);
    }

    #[test]
    fn edges_cmp_x_at_y_matches_rational_comparison() {
        let a = edge(0, 0, 10, 10); // x(y) = y
        let b = edge(5, 0, 5, 10); // x(y) = 5
        assert!(edges_cmp_x_at_y(&a, &b, 3) < 0); // 3 < 5
        assert!(edges_cmp_x_at_y(&a, &b, 7) > 0); // 7 > 5
        assert_eq!(edges_cmp_x_at_y(&a, &b, 5), 0);
    }

    // Regression: two vertical edges whose literal x coordinates differ by
    // more than i32::MAX must not overflow the cross-edge subtraction in
    // the both-endpoints-exact branch of `edges_cmp_x_at_y`.
    #[test]
    fn edges_cmp_x_at_y_exact_endpoints_do_not_overflow() {
        let a = edge(1_500_000_000, 0, 1_500_000_000, 10);
        let b = edge(-1_500_000_000, 0, -1_500_000_000, 10);
        assert!(edges_cmp_x_at_y(&a, &b, 0) > 0);
        assert!(edges_cmp_x_at_y(&b, &a, 0) < 0);
    }

    // Regression: two edges whose bounding boxes overlap (so the bbox
    // rejection fast path is skipped) but whose p1.x values are still more
    // than i32::MAX apart must not overflow `edges_cmp_x_at_y_general`'s
    // cross-edge `dx`. Verified against f64 rational arithmetic rather than
    // hand-derived expectations.
    #[test]
    fn edges_cmp_x_at_y_general_wide_separation_does_not_overflow() {
        let a = edge(2_000_000_000, 0, 0, 100);
        let b = edge(-2_000_000_000, 0, 0, 100);
        for y in [1, 50, 99] {
            let xa = a.line.p1.x as f64
                + (y - a.line.p1.y) as f64 * a.line.dx() as f64 / a.line.dy() as f64;
            let xb = b.line.p1.x as f64
                + (y - b.line.p1.y) as f64 * b.line.dx() as f64 / b.line.dy() as f64;
            let want = (xa - xb).partial_cmp(&0.0).unwrap() as i32;
            assert_eq!(edges_cmp_x_at_y(&a, &b, y).signum(), want, "y={y} xa={xa} xb={xb}");
        }
    }

    #[test]
    fn edge_cmp_x_at_y_against_x_wide_span_matches_rational_comparison() {
        // A single edge spanning close to the full i32 range; the query x
        // falls well inside it, exercising the general (non-early-exit)
        // path with large-magnitude coordinates.
        let a = edge(-1_000_000_000, 0, 1_000_000_000, 100);
        for (y, x) in [(50, 500_000_000), (50, -500_000_000), (10, 0)] {
            let xa = a.line.p1.x as f64
                + (y - a.line.p1.y) as f64 * a.line.dx() as f64 / a.line.dy() as f64;
            let want = (xa - x as f64).partial_cmp(&0.0).unwrap() as i32;
            assert_eq!(
                edge_cmp_x_at_y_against_x(&a, y, x).signum(),
                want,
                "y={y} x={x} xa={xa}"
            );
        }
    }

    #[test]
    fn edges_cmp_x_at_y_disjoint_bboxes() {
        let a = edge(0, 0, 1, 10);
        let b = edge(100, 0, 101, 10);
        assert!(edges_cmp_x_at_y(&a, &b, 5) < 0);
    }

    #[test]
    fn edges_collinear_true_for_same_line_different_segments() {
        let a = edge(0, 0, 10, 10);
        let b = edge(2, 2, 8, 8);
        assert!(edges_collinear(&a, &b));
    }

    #[test]
    fn edges_collinear_false_for_crossing_lines() {
        let a = edge(0, 0, 10, 10);
        let b = edge(0, 10, 10, 0);
        assert!(!edges_collinear(&a, &b));
    }

    #[test]
    fn sweep_cmp_breaks_tie_by_bottom_descending_for_identical_lines() {
        let a = Edge {
            bottom: 20,
            ..edge(0, 0, 0, 20)
        };
        let b = Edge {
            bottom: 10,
            ..edge(0, 0, 0, 20)
        };
        assert!(sweep_cmp(&a, &b, 0) < 0);
    }

    // Exactness property from spec.md §8: for any two non-collinear edges
    // and any y in both ranges, edges_cmp_x_at_y agrees in sign with the
    // true rational comparison.
    #[test]
    fn exactness_against_rational_arithmetic() {
        let cases = [
            (edge(0, 0, 30, 10), edge(3, 0, 3, 10)),
            (edge(-7, 0, 13, 20), edge(0, 5, 9, 15)),
            (edge(1, 1, 100, 100), edge(50, 0, -20, 90)),
        ];
        for (a, b) in cases {
            let y_lo = a.top.max(b.top);
            let y_hi = a.bottom.min(b.bottom);
            for y in y_lo..=y_hi {
                let xa = a.line.p1.x as f64
                    + (y - a.line.p1.y) as f64 * a.line.dx() as f64 / a.line.dy() as f64;
                let xb = b.line.p1.x as f64
                    + (y - b.line.p1.y) as f64 * b.line.dx() as f64 / b.line.dy() as f64;
                let got = edges_cmp_x_at_y(&a, &b, y).signum();
                let want = (xa - xb).partial_cmp(&0.0).unwrap() as i32;
                // Allow agreement-at-equal (f64 rounding can blur an exact
                // tie); require strict agreement away from ties.
                if (xa - xb).abs() > 1e-6 {
                    assert_eq!(got, want, "a={a:?} b={b:?} y={y} xa={xa} xb={xb}");
                }
            }
        }
    }
}
