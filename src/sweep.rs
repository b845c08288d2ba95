//! The Bentley-Ottmann driver loop: converts input contours into sorted
//! start events, sweeps a horizontal line down through them maintaining
//! the active-edge list, and emits trapezoids as spans open and close.
//!
//! Grounded on `_borast_bentley_ottmann_tessellate_bo_edges` in
//! `borast-bentley-ottmann.c`, generalized to batch every event sharing a
//! y coordinate together (rather than handling one event at a time) so
//! that collinear continuations across a shared vertex can be detected and
//! the matching deferred trapezoid carried over instead of needlessly
//! closed and reopened.

use crate::emitter::{close_edge_traps, emit_spans};
use crate::error::{InvalidInputReason, TessellationError, TessellationResult};
use crate::event_queue::{EventQueue, Seq, SweepEvent};
use crate::geom::{Contour, Edge, PolyArea};
use crate::predicates::edges_collinear;
use crate::sweep_line::{ActiveEdges, SweepLine};
use crate::trapezoid::TrapezoidStore;
use crate::TessellateOptions;
use alloc::vec::Vec;

/// Converts a contour's vertex cycle into its (non-horizontal) directed
/// edges, with winding taken from `winding`.
fn contour_edges(contour: &Contour, winding: i16) -> Vec<Edge> {
    contour
        .segments()
        .filter_map(|(a, b)| Edge::from_contour_segment(a, b, winding))
        .collect()
}

/// Builds the presorted `Start` event array for an entire poly area.
/// Sorting happens once, up front; [`EventQueue`] only ever merges this
/// array against a small heap of `Stop` events discovered during the
/// sweep.
fn build_start_events(poly: &PolyArea) -> (Vec<SweepEvent>, Seq) {
    let mut edges = Vec::new();
    for contour in &poly.contours {
        edges.extend(contour_edges(contour, contour.kind.winding()));
    }

    let mut events: Vec<SweepEvent> = edges
        .into_iter()
        .map(|edge| SweepEvent::Start {
            point: edge.line.p1,
            edge,
            seq: 0,
        })
        .collect();
    events.sort_by(|a, b| a.point().cmp(&b.point()));
    for (i, event) in events.iter_mut().enumerate() {
        if let SweepEvent::Start { seq, .. } = event {
            *seq = i as Seq;
        }
    }
    let next_seq = events.len() as Seq;
    (events, next_seq)
}

fn validate(poly: &PolyArea) -> TessellationResult {
    if poly.contours.is_empty() {
        return Err(TessellationError::InvalidInput(InvalidInputReason::EmptyPolyArea));
    }
    for contour in &poly.contours {
        if contour.points.len() < 3 {
            return Err(TessellationError::InvalidInput(
                InvalidInputReason::DegenerateContour,
            ));
        }
    }
    Ok(())
}

/// Tessellates a full poly area (an outer contour plus any number of
/// holes) into `sink`.
pub fn tessellate_polyarea(
    poly: &PolyArea,
    options: &TessellateOptions,
    sink: &mut TrapezoidStore,
) -> TessellationResult {
    if options.validate {
        validate(poly)?;
    }

    let (starts, next_seq) = build_start_events(poly);
    let mut queue = EventQueue::new(starts, next_seq);
    let mut arena = ActiveEdges::default();
    let mut sweep = SweepLine::new();

    let mut pending = queue.dequeue();
    while let Some(first) = pending.take() {
        let y = first.point().y;
        let mut starts_at_y: Vec<SweepEvent> = Vec::new();
        match &first {
            SweepEvent::Start { .. } => starts_at_y.push(first),
            SweepEvent::Stop { .. } => {}
        }

        loop {
            match queue.dequeue() {
                Some(event) if event.point().y == y => {
                    if let SweepEvent::Start { .. } = event {
                        starts_at_y.push(event);
                    }
                    // Stop events carry no further information the driver
                    // needs: the edges due to stop at `y` are found by
                    // scanning the active list below, which also lets a
                    // collinear continuation be spliced in instead of
                    // closing and reopening a trapezoid at the vertex.
                }
                other => {
                    pending = other;
                    break;
                }
            }
        }

        sweep.current_y = y;

        let stopping: Vec<_> = sweep
            .iter_live(&arena)
            .filter(|&id| arena.edge(id).bottom == y)
            .collect();

        // Match each stopping edge against a same-y start that continues
        // it collinearly (same endpoint, same slope, same winding sign):
        // the deferred trapezoid on the stopping edge (if any) transfers
        // to the new edge instead of being closed here.
        let mut continuation: Vec<Option<usize>> = alloc::vec![None; starts_at_y.len()];
        for &stop_id in &stopping {
            let stop_edge = *arena.edge(stop_id);
            for (i, start_event) in starts_at_y.iter().enumerate() {
                if continuation[i].is_some() {
                    continue;
                }
                let start_edge = start_event.edge();
                if start_edge.line.p1 == stop_edge.line.p2
                    && start_edge.winding == stop_edge.winding
                    && edges_collinear(&stop_edge, start_edge)
                {
                    continuation[i] = Some(stop_id);
                    break;
                }
            }
        }

        for &stop_id in &stopping {
            let is_continued = continuation.iter().any(|c| *c == Some(stop_id));
            if !is_continued {
                close_edge_traps(&mut arena, sink, stop_id, y)?;
            }
        }
        for &stop_id in &stopping {
            sweep.delete(&mut arena, stop_id);
        }

        for (i, event) in starts_at_y.into_iter().enumerate() {
            if let SweepEvent::Start { edge, .. } = event {
                let new_id = arena.push(edge);
                sweep.insert(&mut arena, new_id);
                if let Some(old_id) = continuation[i] {
                    if let Some(deferred) = arena.deferred_trap(old_id) {
                        arena.set_deferred_trap(new_id, Some(deferred));
                    }
                    // Any other deferred trap whose right boundary was the
                    // old edge now continues against the new one.
                    let live: Vec<_> = sweep.iter_live(&arena).collect();
                    for id in live {
                        if let Some(mut deferred) = arena.deferred_trap(id) {
                            if deferred.right == old_id {
                                deferred.right = new_id;
                                arena.set_deferred_trap(id, Some(deferred));
                            }
                        }
                    }
                }
                queue.insert_stop(*arena.edge(new_id));
            }
        }

        emit_spans(&sweep, &mut arena, y, options.fill_rule, sink)?;
    }

    Ok(())
}

/// Convenience entry point for a single contour with no holes.
pub fn tessellate_contour(
    contour: &Contour,
    options: &TessellateOptions,
    sink: &mut TrapezoidStore,
) -> TessellationResult {
    tessellate_polyarea(&PolyArea::from(contour.clone()), options, sink)
}
