//! LRU cache simulator.
//!
//! This module implements the fixed-capacity, fully-associative cache model
//! at the heart of the simulator. It tracks which cache lines are resident,
//! evicts the least-recently-used line when full, and counts hits and misses.
//!
//! # Performance
//!
//! Residency is indexed by a hash map and recency by an index-linked list
//! over a preallocated node pool, so `access` is O(1) regardless of
//! capacity. An ordered-array implementation would be O(capacity) per
//! access, which the brute-force optimizer multiplies by O(N^6) trials.

use std::collections::HashMap;

use crate::common::LineId;

/// Sentinel index marking the end of the recency list.
const NIL: usize = usize::MAX;

/// One entry in the recency list.
#[derive(Clone, Copy, Debug)]
struct Node {
    line: LineId,
    prev: usize,
    next: usize,
}

/// Fixed-capacity LRU cache with hit/miss accounting.
///
/// The cache stores line ids only — there is no payload, because the
/// simulation cares about access patterns, not values. Each instance is
/// exclusively owned by the run or optimizer trial that created it; create
/// a fresh instance per run.
#[derive(Debug)]
pub struct LruCache {
    capacity: usize,
    /// Node pool; `free` holds indices of vacant slots.
    nodes: Vec<Node>,
    free: Vec<usize>,
    /// Resident line id -> node index.
    index: HashMap<LineId, usize>,
    /// Oldest resident line (eviction candidate).
    head: usize,
    /// Most recently used line.
    tail: usize,
    hits: u64,
    misses: u64,
}

impl LruCache {
    /// Creates an empty cache holding at most `capacity` lines.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. Configuration validation rejects a zero
    /// capacity before any cache is built, so hitting this is a programming
    /// error in the caller.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "cache capacity must be at least one line");
        Self {
            capacity,
            nodes: Vec::with_capacity(capacity),
            free: Vec::new(),
            index: HashMap::with_capacity(capacity),
            head: NIL,
            tail: NIL,
            hits: 0,
            misses: 0,
        }
    }

    /// Touches `line`, returning `true` on a hit and `false` on a miss.
    ///
    /// On a hit the line is promoted to most-recently-used. On a miss the
    /// least-recently-used line is evicted if the cache is full, and `line`
    /// is inserted as most-recently-used.
    pub fn access(&mut self, line: LineId) -> bool {
        if let Some(&idx) = self.index.get(&line) {
            self.detach(idx);
            self.attach_mru(idx);
            self.hits += 1;
            return true;
        }

        if self.index.len() == self.capacity {
            self.evict_lru();
        }
        let idx = self.alloc(line);
        self.attach_mru(idx);
        let _ = self.index.insert(line, idx);
        self.misses += 1;
        false
    }

    /// Returns `true` if `line` is currently resident.
    ///
    /// Does not update recency or counters.
    pub fn contains(&self, line: LineId) -> bool {
        self.index.contains_key(&line)
    }

    /// Number of resident lines; never exceeds the capacity.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if no lines are resident.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Configured capacity, in lines.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Total hits recorded so far.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Total misses recorded so far.
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Hit ratio over all accesses so far.
    ///
    /// Defined as 1.0 when no accesses have been processed; every hit-ratio
    /// computation in this crate uses the same convention.
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            1.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Takes a vacant node slot for `line`, reusing freed slots first.
    fn alloc(&mut self, line: LineId) -> usize {
        let node = Node {
            line,
            prev: NIL,
            next: NIL,
        };
        if let Some(idx) = self.free.pop() {
            self.nodes[idx] = node;
            idx
        } else {
            self.nodes.push(node);
            self.nodes.len() - 1
        }
    }

    /// Removes the oldest line and returns its slot to the free list.
    fn evict_lru(&mut self) {
        let victim = self.head;
        debug_assert_ne!(victim, NIL, "evict called on an empty cache");
        self.detach(victim);
        let _ = self.index.remove(&self.nodes[victim].line);
        self.free.push(victim);
    }

    /// Unlinks node `idx` from the recency list.
    fn detach(&mut self, idx: usize) {
        let Node { prev, next, .. } = self.nodes[idx];
        if prev == NIL {
            self.head = next;
        } else {
            self.nodes[prev].next = next;
        }
        if next == NIL {
            self.tail = prev;
        } else {
            self.nodes[next].prev = prev;
        }
    }

    /// Links node `idx` at the most-recently-used end.
    fn attach_mru(&mut self, idx: usize) {
        self.nodes[idx].prev = self.tail;
        self.nodes[idx].next = NIL;
        if self.tail == NIL {
            self.head = idx;
        } else {
            self.nodes[self.tail].next = idx;
        }
        self.tail = idx;
    }
}
