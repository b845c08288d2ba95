//! Turning the active-edge list into trapezoids.
//!
//! Grounded on `_active_edges_to_traps`, `_borast_bo_edge_start_or_
//! continue_trap` and `_borast_bo_edge_end_trap` in
//! `borast-bentley-ottmann.c`: at every y where the active list changes,
//! walk it left to right accumulating a winding sum, and for every span
//! currently "inside" under the fill rule, either extend a trapezoid
//! already deferred on its left edge (if the span's left/right pair is
//! unchanged since the last y) or close the old one and open a new one.

use crate::error::TessellationResult;
use crate::geom::Coord;
use crate::sweep_line::{ActiveEdges, DeferredTrap, EdgeId, SweepLine};
use crate::trapezoid::TrapezoidStore;

/// Which spans of the active-edge list count as "inside" the shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub enum FillRule {
    EvenOdd,
    NonZero,
}

impl FillRule {
    #[inline]
    fn is_in(self, winding: i32) -> bool {
        match self {
            FillRule::EvenOdd => winding % 2 != 0,
            FillRule::NonZero => winding != 0,
        }
    }
}

/// Re-evaluates every inside span of the active list at `y` and reconciles
/// it against whatever trapezoids were deferred from the previous y,
/// closing ones whose span changed and opening new ones. Called by
/// [`crate::sweep::tessellate_polyarea`] after the active list has been
/// updated for all events sharing a given y, and again just before an edge
/// is removed from the list at its `bottom`.
pub fn emit_spans(
    sweep: &SweepLine,
    arena: &mut ActiveEdges,
    y: Coord,
    fill_rule: FillRule,
    store: &mut TrapezoidStore,
) -> TessellationResult {
    let mut winding: i32 = 0;
    let mut was_in = false;
    let mut span_left: Option<EdgeId> = None;
    let mut current_spans: alloc::vec::Vec<(EdgeId, EdgeId)> = alloc::vec::Vec::new();

    for id in sweep.iter_live(arena) {
        winding += arena.edge(id).winding as i32;
        let is_in = fill_rule.is_in(winding);
        if !was_in && is_in {
            span_left = Some(id);
        } else if was_in && !is_in {
            if let Some(left) = span_left.take() {
                current_spans.push((left, id));
            }
        }
        was_in = is_in;
    }

    // Close every deferred trap whose left edge is no longer the left
    // boundary of an unchanged span.
    let live: alloc::vec::Vec<EdgeId> = sweep.iter_live(arena).collect();
    for &id in &live {
        if let Some(deferred) = arena.deferred_trap(id) {
            let still_matches = current_spans
                .iter()
                .any(|&(l, r)| l == id && r == deferred.right);
            if !still_matches {
                close_trap(arena, store, id, deferred, y)?;
                arena.set_deferred_trap(id, None);
            }
        }
    }

    // Open a fresh deferred trap for every current span whose left edge
    // doesn't already carry a matching one.
    for &(left, right) in &current_spans {
        if arena.deferred_trap(left).is_none() {
            arena.set_deferred_trap(left, Some(DeferredTrap { top: y, right }));
        }
    }

    Ok(())
}

/// Closes out every trapezoid still deferred on an edge about to leave the
/// sweep (its `bottom`), before the edge is removed from the active list.
pub fn close_edge_traps(
    arena: &mut ActiveEdges,
    store: &mut TrapezoidStore,
    id: EdgeId,
    y: Coord,
) -> TessellationResult {
    if let Some(deferred) = arena.deferred_trap(id) {
        close_trap(arena, store, id, deferred, y)?;
        arena.set_deferred_trap(id, None);
    }
    Ok(())
}

fn close_trap(
    arena: &ActiveEdges,
    store: &mut TrapezoidStore,
    left: EdgeId,
    deferred: DeferredTrap,
    bot: Coord,
) -> TessellationResult {
    let left_line = arena.edge(left).line;
    let right_line = arena.edge(deferred.right).line;
    store.add_trap(deferred.top, bot, left_line, right_line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{Edge, Point};

    fn edge(x1: Coord, y1: Coord, x2: Coord, y2: Coord, winding: i16) -> Edge {
        Edge::from_contour_segment(Point::new(x1, y1), Point::new(x2, y2), winding).unwrap()
    }

    #[test]
    fn single_span_opens_and_closes_as_a_rectangle() {
        let mut arena = ActiveEdges::default();
        let mut sweep = SweepLine::new();
        sweep.current_y = 0;
        let mut store = TrapezoidStore::new();

        let left = arena.push(edge(0, 0, 0, 10, 1));
        sweep.insert(&mut arena, left);
        let right = arena.push(edge(10, 0, 10, 10, -1));
        sweep.insert(&mut arena, right);

        emit_spans(&sweep, &mut arena, 0, FillRule::NonZero, &mut store).unwrap();
        assert!(store.is_empty());
        assert!(arena.deferred_trap(left).is_some());

        close_edge_traps(&mut arena, &mut store, left, 10).unwrap();
        close_edge_traps(&mut arena, &mut store, right, 10).unwrap();

        assert_eq!(store.len(), 1);
        let trap = store.iter().next().unwrap();
        assert_eq!(trap.top, 0);
        assert_eq!(trap.bot, 10);
    }

    #[test]
    fn even_odd_treats_two_overlapping_windings_as_outside() {
        let mut arena = ActiveEdges::default();
        let mut sweep = SweepLine::new();
        sweep.current_y = 0;
        let mut store = TrapezoidStore::new();

        // Four edges: two nested spans, even-odd XORs the middle out.
        let a = arena.push(edge(0, 0, 0, 10, 1));
        sweep.insert(&mut arena, a);
        let b = arena.push(edge(5, 0, 5, 10, 1));
        sweep.insert(&mut arena, b);
        let c = arena.push(edge(10, 0, 10, 10, -1));
        sweep.insert(&mut arena, c);
        let d = arena.push(edge(15, 0, 15, 10, -1));
        sweep.insert(&mut arena, d);

        emit_spans(&sweep, &mut arena, 0, FillRule::EvenOdd, &mut store).unwrap();
        // Spans [a,b] and [c,d] are inside; [b,c] (winding 2) is outside.
        assert!(arena.deferred_trap(a).is_some());
        assert!(arena.deferred_trap(b).is_none());
        assert!(arena.deferred_trap(c).is_some());
    }
}
