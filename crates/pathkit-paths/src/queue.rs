//! Binary-heap priority queue with an order fixed at construction.
//!
//! The direction is chosen once through [`Order`]; the same type serves
//! min-first (Dijkstra) and max-first consumers.
//! Ties are not broken: callers that need a deterministic order among equal
//! priorities must encode a tiebreaker into `T` itself, e.g. `(weight, index)`.

/// Which end of the ordering is popped first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Order {
    /// Smallest element first.
    #[default]
    Ascending,
    /// Largest element first.
    Descending,
}

impl Order {
    /// Whether `a` must sit above `b` in the heap.
    #[inline]
    fn before<T: Ord>(self, a: &T, b: &T) -> bool {
        match self {
            Order::Ascending => a < b,
            Order::Descending => a > b,
        }
    }
}

/// A priority queue backed by a flat binary heap.
///
/// For every index `i` with children `2i + 1` and `2i + 2`, the parent is
/// never ordered after either child.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    heap: Vec<T>,
    order: Order,
}

impl<T: Ord> PriorityQueue<T> {
    /// Create an empty queue popping in the given order.
    pub fn new(order: Order) -> Self {
        Self {
            heap: Vec::new(),
            order,
        }
    }

    /// Create a queue from an initial set of items.
    ///
    /// Items are inserted one by one, so the pop sequence matches pushing
    /// them individually in iteration order.
    pub fn with_items(order: Order, items: impl IntoIterator<Item = T>) -> Self {
        let mut q = Self::new(order);
        q.extend(items);
        q
    }

    /// The order this queue was built with.
    pub fn order(&self) -> Order {
        self.order
    }

    /// Number of queued items.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drop every queued item, keeping the allocation.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// The next item to be popped, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.heap.first()
    }

    /// Insert an item. O(log n).
    pub fn push(&mut self, item: T) {
        self.heap.push(item);
        self.swim(self.heap.len() - 1);
    }

    /// Remove and return the highest-priority item. O(log n).
    pub fn pop(&mut self) -> Option<T> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let item = self.heap.pop();
        self.sink(0);
        item
    }

    fn swim(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.order.before(&self.heap[i], &self.heap[parent]) {
                break;
            }
            self.heap.swap(i, parent);
            i = parent;
        }
    }

    fn sink(&mut self, mut i: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * i + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut child = left;
            if right < len && self.order.before(&self.heap[right], &self.heap[left]) {
                child = right;
            }
            if !self.order.before(&self.heap[child], &self.heap[i]) {
                break;
            }
            self.heap.swap(i, child);
            i = child;
        }
    }
}

impl<T: Ord> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new(Order::Ascending)
    }
}

impl<T: Ord> Extend<T> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}
