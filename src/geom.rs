//! The fixed-point data model: points, lines, edges and input polygons.

use crate::wide::fixed_mul_div_floor;
use alloc::vec::Vec;

/// A signed 32-bit fixed-point coordinate. The crate does not interpret the
/// fractional scale; it is purely an integer domain with exact arithmetic.
pub type Coord = i32;

/// A point in fixed-point coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: Coord,
    pub y: Coord,
}

impl Point {
    #[inline]
    pub const fn new(x: Coord, y: Coord) -> Self {
        Point { x, y }
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    /// Lexicographic, y major then x minor, matching the sweep's event
    /// order (§3 of the spec: "Compared lexicographically with y major, x
    /// minor").
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

/// An ordered pair of points with `p1.y <= p2.y` by construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    pub p1: Point,
    pub p2: Point,
}

impl Line {
    /// Builds a line, swapping the endpoints if needed so that
    /// `p1.y <= p2.y` always holds.
    pub fn new(a: Point, b: Point) -> Self {
        if a.y <= b.y {
            Line { p1: a, p2: b }
        } else {
            Line { p1: b, p2: a }
        }
    }

    #[inline]
    pub fn dx(&self) -> Coord {
        self.p2.x - self.p1.x
    }

    #[inline]
    pub fn dy(&self) -> Coord {
        self.p2.y - self.p1.y
    }

    /// The exact x coordinate of this line at the given `y`, which must lie
    /// within `[p1.y, p2.y]`. Horizontal lines (`dy == 0`) are never queried
    /// through this path in practice (they never enter the sweep), but if
    /// they are, `p1.x` is returned.
    pub fn x_at_y(&self, y: Coord) -> Coord {
        if y == self.p1.y {
            return self.p1.x;
        }
        if y == self.p2.y {
            return self.p2.x;
        }
        let dy = self.dy();
        if dy == 0 {
            return self.p1.x;
        }
        self.p1.x + fixed_mul_div_floor(y - self.p1.y, self.dx(), dy)
    }
}

/// A directed edge participating in the sweep.
///
/// `top`/`bottom` are the y-range over which the edge is active (always
/// `line.p1.y`/`line.p2.y`: there is no clipping in this crate), and
/// `winding` is the edge's contribution to the running winding sum the
/// fill rule walks across the sweep line: `+1` when the original contour
/// segment descended (`a.y < b.y`) and `-1` when it climbed, each flipped
/// again by the contour's own orientation (see [`ContourKind`]). This is
/// the standard scanline-fill convention: a contour's left and right
/// boundaries necessarily run in opposite y directions, which is what
/// makes the running sum toggle in and out correctly.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub line: Line,
    pub top: Coord,
    pub bottom: Coord,
    pub winding: i16,
}

impl Edge {
    /// Builds an edge from two endpoints of a contour, normalizing so that
    /// `line.p1` is the upper endpoint. `orientation` is the contour's
    /// winding sign (`+1` outer, `-1` hole, from [`ContourKind::winding`]);
    /// the edge's actual `winding` combines it with the segment's original
    /// direction before `a`/`b` are reordered by y. Returns `None` for a
    /// horizontal edge (`a.y == b.y`): these are dropped before they ever
    /// reach the sweep, per the horizontal-edge policy documented in
    /// SPEC_FULL.md §5.
    pub fn from_contour_segment(a: Point, b: Point, orientation: i16) -> Option<Self> {
        if a.y == b.y {
            return None;
        }
        let direction: i16 = if a.y < b.y { 1 } else { -1 };
        let line = Line::new(a, b);
        Some(Edge {
            top: line.p1.y,
            bottom: line.p2.y,
            line,
            winding: orientation * direction,
        })
    }
}

/// Whether a contour is the outer boundary of a polygon or a hole cut out
/// of it. Conventionally outer contours are wound counter-clockwise and
/// holes the opposite way; this crate does not itself validate winding, it
/// only uses the flag to assign `Edge::winding`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub enum ContourKind {
    Outer,
    Hole,
}

impl ContourKind {
    #[inline]
    pub fn winding(self) -> i16 {
        match self {
            ContourKind::Outer => 1,
            ContourKind::Hole => -1,
        }
    }
}

/// A single closed contour: a cyclic sequence of vertices plus the
/// outer/hole flag used to derive edge winding.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct Contour {
    pub points: Vec<Point>,
    pub kind: ContourKind,
}

impl Contour {
    pub fn new(points: Vec<Point>, kind: ContourKind) -> Self {
        Contour { points, kind }
    }

    pub fn outer(points: Vec<Point>) -> Self {
        Contour::new(points, ContourKind::Outer)
    }

    pub fn hole(points: Vec<Point>) -> Self {
        Contour::new(points, ContourKind::Hole)
    }

    /// Iterates the contour's directed edges in cyclic order (last point
    /// back to the first), yielding the raw `(from, to)` pair so the caller
    /// can apply the top/bottom normalization and the horizontal-edge drop.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }
}

/// A full input polygon: a non-empty list of contours. By convention the
/// first contour is the outer boundary and the rest are holes, but each
/// contour carries its own [`ContourKind`] so mixed orderings are also
/// accepted.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct PolyArea {
    pub contours: Vec<Contour>,
}

impl PolyArea {
    pub fn new(contours: Vec<Contour>) -> Self {
        PolyArea { contours }
    }
}

impl From<Contour> for PolyArea {
    fn from(contour: Contour) -> Self {
        PolyArea {
            contours: alloc::vec![contour],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_new_orders_by_y() {
        let l = Line::new(Point::new(0, 10), Point::new(5, 0));
        assert_eq!(l.p1, Point::new(5, 0));
        assert_eq!(l.p2, Point::new(0, 10));
    }

    #[test]
    fn x_at_y_matches_endpoints_exactly() {
        let l = Line::new(Point::new(0, 0), Point::new(10, 10));
        assert_eq!(l.x_at_y(0), 0);
        assert_eq!(l.x_at_y(10), 10);
        assert_eq!(l.x_at_y(5), 5);
    }

    #[test]
    fn horizontal_edge_is_dropped() {
        assert!(Edge::from_contour_segment(Point::new(0, 0), Point::new(10, 0), 1).is_none());
    }

    #[test]
    fn point_ordering_is_y_major() {
        assert!(Point::new(100, 0) < Point::new(0, 1));
        assert!(Point::new(0, 5) < Point::new(1, 5));
    }
}
