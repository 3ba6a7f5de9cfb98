use fxhash::FxHashSet;
use grid_util::point::Point;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct FrontierEntry {
    priority: u32,
    sequence: u64,
    point: Point,
}

impl Eq for FrontierEntry {}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.sequence == other.sequence
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for the max-heap: lowest priority first, then the earliest insertion
        match other.priority.cmp(&self.priority) {
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            s => s,
        }
    }
}

/// Priority-ordered set of discovered cells.
///
/// Ties between equal priorities go to the entry inserted first. A point pushed again while it is
/// still a member gets a fresh entry; the older one is dropped when it surfaces.
#[derive(Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    members: FxHashSet<Point>,
    next_sequence: u64,
}

impl Frontier {
    pub fn new() -> Frontier {
        Frontier::default()
    }
    pub fn push(&mut self, point: Point, priority: u32) {
        self.heap.push(FrontierEntry {
            priority,
            sequence: self.next_sequence,
            point,
        });
        self.next_sequence += 1;
        self.members.insert(point);
    }
    /// Removes and returns the member with the lowest priority together with that priority.
    pub fn pop(&mut self) -> Option<(Point, u32)> {
        while let Some(FrontierEntry {
            priority, point, ..
        }) = self.heap.pop()
        {
            if self.members.remove(&point) {
                return Some((point, priority));
            }
        }
        None
    }
    pub fn contains(&self, point: &Point) -> bool {
        self.members.contains(point)
    }
    pub fn len(&self) -> usize {
        self.members.len()
    }
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
