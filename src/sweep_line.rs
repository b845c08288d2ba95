//! The sweep line: an ordered doubly linked list of active edges.
//!
//! Design note (SPEC_FULL.md, carried from spec.md §9): the C original
//! links active edges with raw pointers into a single array of `Start`
//! event records. This module keeps the same "one arena, never freed
//! mid-sweep" shape, but the links are indices into an append-only
//! [`ActiveEdges`] arena rather than raw pointers, so there is nothing
//! unsafe here.
//!
//! spec.md §4.F describes collinear continuation across a shared vertex as
//! going through a `stopped` side list: a stopping edge's deferred
//! trapezoid is parked there and either finalised at the next y-advance or
//! spliced onto a same-point collinear `Start` that arrives first.
//! [`crate::sweep::tessellate_polyarea`] instead batches every event
//! sharing a y coordinate before touching the live list, so it can look up
//! the same-y collinear `Start` directly against the *about-to-stop* edges
//! still on the live list and transfer the deferred trapezoid in one step
//! — there is never a point where a stopped edge needs to outlive the
//! batch that stopped it. A `stopped` side list would therefore sit unused
//! between being populated and being drained; this module has no such
//! list.

use crate::geom::{Coord, Edge};
use crate::predicates::sweep_cmp;
use alloc::vec::Vec;

/// An index into an [`ActiveEdges`] arena. Stable for the lifetime of the
/// sweep: entries are never removed from the arena, only unlinked from the
/// live list once their edge stops.
pub type EdgeId = usize;

/// A deferred trapezoid attached to an edge's right side: the y where it
/// was opened and which active edge is its right partner.
#[derive(Copy, Clone, Debug)]
pub struct DeferredTrap {
    pub top: Coord,
    pub right: EdgeId,
}

struct Slot {
    edge: Edge,
    prev: Option<EdgeId>,
    next: Option<EdgeId>,
    deferred_trap: Option<DeferredTrap>,
}

/// The arena backing the live sweep-line list. Append-only: an id handed
/// out by [`ActiveEdges::push`] stays valid for the rest of the sweep.
#[derive(Default)]
pub struct ActiveEdges {
    slots: Vec<Slot>,
}

impl ActiveEdges {
    pub fn push(&mut self, edge: Edge) -> EdgeId {
        self.slots.push(Slot {
            edge,
            prev: None,
            next: None,
            deferred_trap: None,
        });
        self.slots.len() - 1
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.slots[id].edge
    }

    pub fn next(&self, id: EdgeId) -> Option<EdgeId> {
        self.slots[id].next
    }

    pub fn prev(&self, id: EdgeId) -> Option<EdgeId> {
        self.slots[id].prev
    }

    pub fn deferred_trap(&self, id: EdgeId) -> Option<DeferredTrap> {
        self.slots[id].deferred_trap
    }

    pub fn set_deferred_trap(&mut self, id: EdgeId, trap: Option<DeferredTrap>) {
        self.slots[id].deferred_trap = trap;
    }
}

/// The sweep-line state: the ordered active-edge list plus `current_y`/
/// `current_edge` used as a locality hint for insertion.
pub struct SweepLine {
    pub head: Option<EdgeId>,
    pub current_y: Coord,
    current_edge: Option<EdgeId>,
}

impl SweepLine {
    pub fn new() -> Self {
        SweepLine {
            head: None,
            current_y: Coord::MIN,
            current_edge: None,
        }
    }

    /// Inserts `id` into the live list at its position under
    /// [`sweep_cmp`] at `self.current_y`, probing bidirectionally from
    /// `current_edge` for amortised O(1) locality, exactly like
    /// `_borast_bo_sweep_line_insert`.
    pub fn insert(&mut self, arena: &mut ActiveEdges, id: EdgeId) {
        match self.current_edge {
            None => {
                self.head = Some(id);
            }
            Some(cursor) => {
                let cmp = sweep_cmp(arena.edge(cursor), arena.edge(id), self.current_y);
                if cmp < 0 {
                    // Walk forward from cursor until we find where `id` fits.
                    let mut prev = cursor;
                    let mut next = arena.next(prev);
                    while let Some(n) = next {
                        if sweep_cmp(arena.edge(n), arena.edge(id), self.current_y) < 0 {
                            prev = n;
                            next = arena.next(prev);
                        } else {
                            break;
                        }
                    }
                    arena.slots[prev].next = Some(id);
                    arena.slots[id].prev = Some(prev);
                    arena.slots[id].next = next;
                    if let Some(n) = next {
                        arena.slots[n].prev = Some(id);
                    }
                } else if cmp > 0 {
                    let mut next = cursor;
                    let mut prev = arena.prev(next);
                    while let Some(p) = prev {
                        if sweep_cmp(arena.edge(p), arena.edge(id), self.current_y) > 0 {
                            next = p;
                            prev = arena.prev(next);
                        } else {
                            break;
                        }
                    }
                    arena.slots[next].prev = Some(id);
                    arena.slots[id].next = Some(next);
                    arena.slots[id].prev = prev;
                    if let Some(p) = prev {
                        arena.slots[p].next = Some(id);
                    } else {
                        self.head = Some(id);
                    }
                } else {
                    // Tied with the cursor: splice right after it.
                    let prev = cursor;
                    let next = arena.next(prev);
                    arena.slots[prev].next = Some(id);
                    arena.slots[id].prev = Some(prev);
                    arena.slots[id].next = next;
                    if let Some(n) = next {
                        arena.slots[n].prev = Some(id);
                    }
                }
            }
        }
        self.current_edge = Some(id);
    }

    /// Unlinks `id` from the live list, ordinary doubly-linked-list
    /// removal. (spec.md §9 calls out a suspected splice bug in the
    /// original's stopped-list removal; this crate always performs plain
    /// removal and does not replicate it.)
    pub fn delete(&mut self, arena: &mut ActiveEdges, id: EdgeId) {
        let prev = arena.prev(id);
        let next = arena.next(id);
        match prev {
            Some(p) => arena.slots[p].next = next,
            None => self.head = next,
        }
        if let Some(n) = next {
            arena.slots[n].prev = prev;
        }
        if self.current_edge == Some(id) {
            self.current_edge = prev.or(next);
        }
    }

    /// Iterates the live list head-to-tail, in strictly increasing x order
    /// at `current_y` (the invariant in spec.md §4.D).
    pub fn iter_live<'a>(&self, arena: &'a ActiveEdges) -> LiveIter<'a> {
        LiveIter {
            arena,
            next: self.head,
        }
    }
}

impl Default for SweepLine {
    fn default() -> Self {
        Self::new()
    }
}

pub struct LiveIter<'a> {
    arena: &'a ActiveEdges,
    next: Option<EdgeId>,
}

impl Iterator for LiveIter<'_> {
    type Item = EdgeId;
    fn next(&mut self) -> Option<EdgeId> {
        let id = self.next?;
        self.next = self.arena.next(id);
        Some(id)
    }
}
