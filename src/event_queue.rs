//! The sweep's dual-source priority queue: a presorted array of `Start`
//! events plus a binary min-heap of `Stop` events, matching borast's
//! `pqueue_t` design (`borast-bentley-ottmann.c`).

use crate::geom::{Coord, Edge, Point};
use alloc::vec::Vec;
use core::cmp::Ordering;

/// Stable insertion order, used only to break ties between events that
/// compare equal by point and type. The C original breaks such ties by
/// pointer identity (`a - b` in `borast_bo_event_compare`); Rust has no
/// address to lean on here, so a monotonically increasing sequence number
/// stamped at construction plays the same role deterministically.
pub type Seq = u32;

/// A sweep event: either an edge becoming active (at its upper endpoint)
/// or an active edge leaving the sweep (at its lower endpoint).
#[derive(Clone, Debug)]
pub enum SweepEvent {
    Start { point: Point, edge: Edge, seq: Seq },
    Stop { point: Point, edge: Edge, seq: Seq },
}

impl SweepEvent {
    #[inline]
    pub fn point(&self) -> Point {
        match self {
            SweepEvent::Start { point, .. } | SweepEvent::Stop { point, .. } => *point,
        }
    }

    #[inline]
    fn type_rank(&self) -> u8 {
        // STOP precedes START at an equal point (spec.md §3).
        match self {
            SweepEvent::Stop { .. } => 0,
            SweepEvent::Start { .. } => 1,
        }
    }

    #[inline]
    fn seq(&self) -> Seq {
        match self {
            SweepEvent::Start { seq, .. } | SweepEvent::Stop { seq, .. } => *seq,
        }
    }

    #[inline]
    pub fn edge(&self) -> &Edge {
        match self {
            SweepEvent::Start { edge, .. } | SweepEvent::Stop { edge, .. } => edge,
        }
    }
}

/// Total event order: point (y major, x minor), then STOP before START,
/// then insertion order. This is what makes the sweep deterministic at
/// shared vertices (spec.md §3).
pub fn event_cmp(a: &SweepEvent, b: &SweepEvent) -> Ordering {
    a.point()
        .cmp(&b.point())
        .then_with(|| a.type_rank().cmp(&b.type_rank()))
        .then_with(|| a.seq().cmp(&b.seq()))
}

/// A binary min-heap of `Stop` events ordered by [`event_cmp`]. Plain
/// `Vec`-backed rather than freelist-pool-backed: Rust's allocator already
/// reuses the vector's capacity across pushes and pops without us hand
/// rolling a pool, which is what the C original needed a bespoke freelist
/// for (`borast_freepool_t`) in the absence of a general-purpose allocator
/// doing that bookkeeping already.
#[derive(Default)]
struct StopHeap {
    items: Vec<SweepEvent>,
}

impl StopHeap {
    fn push(&mut self, event: SweepEvent) {
        self.items.push(event);
        let mut i = self.items.len() - 1;
        while i > 0 {
            let parent = (i - 1) / 2;
            if event_cmp(&self.items[i], &self.items[parent]) == Ordering::Less {
                self.items.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
    }

    fn peek(&self) -> Option<&SweepEvent> {
        self.items.first()
    }

    fn pop(&mut self) -> Option<SweepEvent> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let top = self.items.pop();

        let mut i = 0;
        loop {
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            let mut smallest = i;
            if left < self.items.len()
                && event_cmp(&self.items[left], &self.items[smallest]) == Ordering::Less
            {
                smallest = left;
            }
            if right < self.items.len()
                && event_cmp(&self.items[right], &self.items[smallest]) == Ordering::Less
            {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.items.swap(i, smallest);
            i = smallest;
        }

        top
    }
}

/// The sweep's event source: a presorted array of `Start` events (built and
/// sorted once up front, then walked with a cursor) merged against a
/// min-heap of `Stop` events discovered as the sweep inserts edges.
pub struct EventQueue {
    starts: Vec<SweepEvent>,
    start_cursor: usize,
    stops: StopHeap,
    next_seq: Seq,
}

impl EventQueue {
    /// Builds the queue from the already-sorted array of `Start` events.
    /// Sorting happens once, up front, in [`crate::sweep::contour_edges`];
    /// this keeps the queue itself a pure merge of two already-ordered
    /// sources, same as the C original's `_borast_bo_event_queue_init`.
    pub fn new(starts: Vec<SweepEvent>, next_seq: Seq) -> Self {
        EventQueue {
            starts,
            start_cursor: 0,
            stops: StopHeap::default(),
            next_seq,
        }
    }

    fn fresh_seq(&mut self) -> Seq {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    /// Schedules `edge`'s `Stop` event at `y = edge.bottom`, with its exact
    /// x computed via the intersection kernel.
    pub fn insert_stop(&mut self, edge: Edge) {
        let x = edge.line.x_at_y(edge.bottom);
        let point = Point::new(x, edge.bottom);
        let seq = self.fresh_seq();
        self.stops.push(SweepEvent::Stop { point, edge, seq });
    }

    /// Returns the next event in sweep order, advancing whichever source
    /// supplied it, or `None` once both sources are exhausted.
    pub fn dequeue(&mut self) -> Option<SweepEvent> {
        let next_start = self.starts.get(self.start_cursor);
        let next_stop = self.stops.peek();

        match (next_start, next_stop) {
            (None, None) => None,
            (Some(start), None) => {
                self.start_cursor += 1;
                Some(start.clone())
            }
            (None, Some(_)) => self.stops.pop(),
            (Some(start), Some(stop)) => {
                if event_cmp(start, stop) == Ordering::Less {
                    self.start_cursor += 1;
                    Some(start.clone())
                } else {
                    self.stops.pop()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Edge as GeomEdge;

    fn edge(x1: Coord, y1: Coord, x2: Coord, y2: Coord) -> GeomEdge {
        GeomEdge::from_contour_segment(Point::new(x1, y1), Point::new(x2, y2), 1).unwrap()
    }

    #[test]
    fn dequeue_is_stable_total_order() {
        let e0 = edge(0, 0, 10, 10);
        let e1 = edge(5, 0, 15, 10);
        let starts = alloc::vec![
            SweepEvent::Start {
                point: e0.line.p1,
                edge: e0,
                seq: 0
            },
            SweepEvent::Start {
                point: e1.line.p1,
                edge: e1,
                seq: 1
            },
        ];
        let mut q = EventQueue::new(starts, 2);
        let first = q.dequeue().unwrap();
        assert_eq!(first.point(), Point::new(0, 0));
        let second = q.dequeue().unwrap();
        assert_eq!(second.point(), Point::new(5, 0));
        assert!(q.dequeue().is_none());
    }

    #[test]
    fn stop_before_start_at_equal_point() {
        let e0 = edge(0, 0, 0, 10);
        let e1 = edge(0, 10, 10, 20);
        let mut q = EventQueue::new(Vec::new(), 0);
        q.insert_stop(e0); // stop at (0, 10)
        let start_seq = q.fresh_seq();
        q.stops.push(SweepEvent::Start {
            point: Point::new(0, 10),
            edge: e1,
            seq: start_seq,
        });
        let first = q.dequeue().unwrap();
        assert!(matches!(first, SweepEvent::Stop { .. }));
    }

    #[test]
    fn heap_pop_order_matches_push_order_reversed_priority() {
        let mut heap = StopHeap::default();
        let pts = [(5, 5), (1, 1), (3, 3), (2, 2), (4, 4)];
        for (i, (x, y)) in pts.iter().enumerate() {
            heap.push(SweepEvent::Stop {
                point: Point::new(*x, *y),
                edge: edge(0, 0, 0, 100),
                seq: i as u32,
            });
        }
        let mut ys = Vec::new();
        while let Some(e) = heap.pop() {
            ys.push(e.point().y);
        }
        assert_eq!(ys, alloc::vec![1, 2, 3, 4, 5]);
    }
}
