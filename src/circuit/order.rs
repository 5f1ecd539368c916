//! Order maintenance over arena slots.
//!
//! Every slot carries a `u64` label that increases along the list, so asking
//! whether one slot comes before another is a single comparison. Inserting
//! into a gap with no free label relabels the smallest aligned label range
//! around the insertion point that is sparse enough: a range of `2^i` labels
//! may hold at most `2^(i/2)` slots.

/// Sentinel index for "no neighbour".
const NIL: usize = usize::MAX;

/// Label distance left between a slot and one inserted after it at the end.
const APPEND_GAP: u64 = 1 << 20;

/// Doubly linked list of slots with monotone labels.
///
/// Slot indices are handed out densely in insertion order, so they can be
/// shared with a parallel node arena.
#[derive(Debug, Clone, Default)]
pub(crate) struct OrderList {
    labels: Vec<u64>,
    prev: Vec<usize>,
    next: Vec<usize>,
}

impl OrderList {
    /// Number of slots ever inserted.
    pub(crate) fn len(&self) -> usize {
        self.labels.len()
    }

    /// Insert a new slot right after `after`, or as the only slot of an
    /// empty list when `after` is `None`. Returns the new slot index.
    pub(crate) fn insert_after(&mut self, after: Option<usize>) -> usize {
        let slot = self.labels.len();
        let after = match after {
            Some(after) => after,
            None => {
                debug_assert!(self.labels.is_empty(), "front insert into a non-empty list");
                self.labels.push(0);
                self.prev.push(NIL);
                self.next.push(NIL);
                return slot;
            }
        };

        let next = self.next[after];
        self.labels.push(0);
        self.prev.push(after);
        self.next.push(next);
        self.next[after] = slot;
        if next != NIL {
            self.prev[next] = slot;
        }

        let lo = self.labels[after];
        let free = if next == NIL {
            lo.checked_add(APPEND_GAP)
        } else {
            let hi = self.labels[next];
            (hi - lo >= 2).then(|| lo + (hi - lo) / 2)
        };
        match free {
            Some(label) => self.labels[slot] = label,
            None => self.relabel(after, slot),
        }
        slot
    }

    /// Check if slot `a` comes strictly before slot `b`.
    pub(crate) fn precedes(&self, a: usize, b: usize) -> bool {
        self.labels[a] < self.labels[b]
    }

    /// Spread labels over the smallest sparse range containing `after`,
    /// giving the unlabeled `slot` (linked right after it) a place too.
    fn relabel(&mut self, after: usize, slot: usize) {
        let pivot = self.labels[after] as u128;
        let mut first = after;
        let mut last = slot;
        let mut count: u128 = 2;

        for level in 1..=64u32 {
            let size = 1u128 << level;
            let base = pivot & !(size - 1);

            while self.prev[first] != NIL && self.labels[self.prev[first]] as u128 >= base {
                first = self.prev[first];
                count += 1;
            }
            while self.next[last] != NIL && (self.labels[self.next[last]] as u128) < base + size {
                last = self.next[last];
                count += 1;
            }

            if count * count <= size || level == 64 {
                let gap = size / count;
                let mut cursor = first;
                let mut label = base;
                loop {
                    self.labels[cursor] = label as u64;
                    if cursor == last {
                        break;
                    }
                    label += gap;
                    cursor = self.next[cursor];
                }
                return;
            }
        }
    }
}
