//! The trapezoid output store: a growable array of emitted trapezoids plus
//! the bounding-box/translate/scale utilities that operate on it as a
//! whole. Grounded on `borast-traps.c` (`_borast_traps_init`, `_grow`,
//! `_add_trap`, `_init_boxes`, `_translate`, `_borast_trapezoid_array_
//! translate_and_scale`, `_borast_traps_extents`).

use crate::error::{TessellationError, TessellationResult};
use crate::geom::{Coord, Line, Point};
use alloc::vec::Vec;

/// A single output trapezoid: the y-range it covers and the two boundary
/// lines it is clipped between. `left`/`right` are the full edges that
/// bound the trapezoid, not just its corner points, so that a consumer can
/// recover exact x coordinates at any y in `[top, bot]` via
/// [`Line::x_at_y`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct Trapezoid {
    pub top: Coord,
    pub bot: Coord,
    pub left: Line,
    pub right: Line,
}

impl Trapezoid {
    #[inline]
    pub fn top_left(&self) -> Coord {
        self.left.x_at_y(self.top)
    }

    #[inline]
    pub fn top_right(&self) -> Coord {
        self.right.x_at_y(self.top)
    }

    #[inline]
    pub fn bot_left(&self) -> Coord {
        self.left.x_at_y(self.bot)
    }

    #[inline]
    pub fn bot_right(&self) -> Coord {
        self.right.x_at_y(self.bot)
    }

    /// A trapezoid is rectilinear when both its left and right boundaries
    /// are vertical lines (`dx == 0`), i.e. it is an axis-aligned box.
    pub fn is_rectilinear(&self) -> bool {
        self.left.dx() == 0 && self.right.dx() == 0
    }

    /// A rectilinear trapezoid is additionally rectangular when its left
    /// edge lies strictly to the left of its right edge everywhere (a
    /// degenerate zero-width box is rectilinear but not rectangular).
    pub fn is_rectangular(&self) -> bool {
        self.is_rectilinear() && self.top_left() < self.top_right()
    }
}

/// The growable trapezoid sink. Mirrors `borast_traps_t`'s inline-array-
/// then-heap growth (the original starts with 16 traps embedded in the
/// struct and doubles capacity on overflow; this crate keeps the doubling
/// factor but lets `Vec` own the storage throughout, since there is no
/// benefit in Rust to hand rolling the inline-then-heap split `Vec`
/// already amortises).
#[derive(Clone, Debug)]
pub struct TrapezoidStore {
    traps: Vec<Trapezoid>,
    /// An optional cap mirroring callers that want a bounded sink; `None`
    /// (the default) means unbounded.
    capacity_limit: Option<usize>,
    /// Conservative hint tracked incrementally as trapezoids are pushed,
    /// matching `_borast_traps_init_boxes`'s `maybe_region` flag: starts
    /// `true`, permanently cleared the first time a non-rectangular
    /// trapezoid is added. Unlike `is_rectangular()` (which rescans the
    /// whole store), this is O(1) per push.
    maybe_region: bool,
}

impl Default for TrapezoidStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TrapezoidStore {
    pub fn new() -> Self {
        TrapezoidStore {
            traps: Vec::with_capacity(16),
            capacity_limit: None,
            maybe_region: true,
        }
    }

    pub fn with_capacity_limit(limit: usize) -> Self {
        TrapezoidStore {
            traps: Vec::with_capacity(16.min(limit)),
            capacity_limit: Some(limit),
            maybe_region: true,
        }
    }

    pub fn clear(&mut self) {
        self.traps.clear();
        self.maybe_region = true;
    }

    pub fn len(&self) -> usize {
        self.traps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traps.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Trapezoid> {
        self.traps.iter()
    }

    pub fn as_slice(&self) -> &[Trapezoid] {
        &self.traps
    }

    /// Appends a trapezoid, degenerate (`top == bot`) ones are silently
    /// dropped since they cover zero area, matching
    /// `_borast_traps_add_trap`'s zero-height rejection.
    pub fn add_trap(&mut self, top: Coord, bot: Coord, left: Line, right: Line) -> TessellationResult {
        if top >= bot {
            return Ok(());
        }
        if let Some(limit) = self.capacity_limit {
            if self.traps.len() >= limit {
                return Err(TessellationError::NoMemory);
            }
        }
        let trap = Trapezoid { top, bot, left, right };
        if !trap.is_rectangular() {
            self.maybe_region = false;
        }
        self.traps.push(trap);
        Ok(())
    }

    /// The axis-aligned bounding box of every emitted trapezoid, computed
    /// from the exact intersection kernel at each trapezoid's top and
    /// bottom (not just its stored corner coordinates), matching
    /// `_borast_traps_extents`. Returns `None` for an empty store.
    pub fn bbox(&self) -> Option<(Point, Point)> {
        let mut traps = self.traps.iter();
        let first = traps.next()?;
        let mut min_x = first.top_left().min(first.bot_left());
        let mut max_x = first.top_right().max(first.bot_right());
        let mut min_y = first.top;
        let mut max_y = first.bot;
        for t in traps {
            min_x = min_x.min(t.top_left()).min(t.bot_left());
            max_x = max_x.max(t.top_right()).max(t.bot_right());
            min_y = min_y.min(t.top);
            max_y = max_y.max(t.bot);
        }
        Some((Point::new(min_x, min_y), Point::new(max_x, max_y)))
    }

    /// Translates every trapezoid in place by `(dx, dy)`.
    pub fn translate(&mut self, dx: Coord, dy: Coord) {
        for t in &mut self.traps {
            t.top += dy;
            t.bot += dy;
            t.left = translate_line(t.left, dx, dy);
            t.right = translate_line(t.right, dx, dy);
        }
    }

    /// Translates then scales every trapezoid by the rational factor
    /// `num/den`, matching `_borast_trapezoid_array_translate_and_scale`'s
    /// use of rational rather than floating-point scale factors (so the
    /// arithmetic stays exact, consistent with the rest of this crate).
    pub fn translate_and_scale(&mut self, dx: Coord, dy: Coord, num: i32, den: i32) {
        debug_assert!(den > 0, "translate_and_scale requires a positive denominator");
        self.translate(dx, dy);
        for t in &mut self.traps {
            t.top = scale_coord(t.top, num, den);
            t.bot = scale_coord(t.bot, num, den);
            t.left = scale_line(t.left, num, den);
            t.right = scale_line(t.right, num, den);
        }
    }

    /// Whether every trapezoid in the store is an axis-aligned box. Lets a
    /// consumer skip general trapezoid-rendering machinery for
    /// rectilinear input, matching `_borast_traps_init_boxes`'s purpose.
    pub fn is_rectilinear(&self) -> bool {
        self.traps.iter().all(Trapezoid::is_rectilinear)
    }

    /// Whether every trapezoid is non-degenerate and rectilinear, i.e. the
    /// whole store forms a set of axis-aligned rectangles.
    pub fn is_rectangular(&self) -> bool {
        self.traps.iter().all(Trapezoid::is_rectangular)
    }

    /// A conservative, incrementally-tracked hint for whether this store's
    /// trapezoids could plausibly union into a single axis-aligned region:
    /// `false` is definitive ("definitely not"), `true` only means "no
    /// trapezoid seen so far rules it out" (an empty store is trivially
    /// `true`). Mirrors `_borast_traps_init_boxes`'s `maybe_region` flag.
    pub fn maybe_region(&self) -> bool {
        self.maybe_region
    }
}

fn translate_line(line: Line, dx: Coord, dy: Coord) -> Line {
    Line::new(
        Point::new(line.p1.x + dx, line.p1.y + dy),
        Point::new(line.p2.x + dx, line.p2.y + dy),
    )
}

fn scale_coord(v: Coord, num: i32, den: i32) -> Coord {
    crate::wide::fixed_mul_div_floor(v, num, den)
}

fn scale_line(line: Line, num: i32, den: i32) -> Line {
    Line::new(
        Point::new(scale_coord(line.p1.x, num, den), scale_coord(line.p1.y, num, den)),
        Point::new(scale_coord(line.p2.x, num, den), scale_coord(line.p2.y, num, den)),
    )
}
