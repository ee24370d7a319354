use log::warn;

use crate::error::HeapError;
use crate::source::ValueSource;

/// Selects how strictly the heap maintains its order.
///
/// `Faithful` leaves the classic gaps in place: `insert` appends without
/// sifting up (callers re-heapify in bulk) and `extract_min` removes the
/// root by shifting the whole array down one slot, which can leave the heap
/// order partially violated. `Hardened` sifts up on insert and extracts by
/// swapping the root with the last element, so the heap order holds after
/// every operation and repeated extraction is guaranteed non-decreasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Faithful,
    Hardened,
}

/// Binary min-heap over integers, stored 1-indexed with a sentinel at slot 0.
///
/// Values must stay below [`MinHeap::INFINITY`]; the sentinel stands in for
/// missing children so heapify comparisons never promote a nonexistent child.
/// `length` counts the heap-valid elements and may be smaller than the
/// storage, since the destructive [`MinHeap::sort`] and mid-array deletes
/// leave inert slots behind.
pub struct MinHeap {
    elements: Vec<i32>,
    length: usize,
    mode: Mode,
}

impl MinHeap {
    /// Larger than any valid element (values are drawn from `[0, 100)`).
    pub const INFINITY: i32 = 101;

    pub fn new() -> Self {
        MinHeap::with_mode(Mode::Faithful)
    }

    pub fn hardened() -> Self {
        MinHeap::with_mode(Mode::Hardened)
    }

    pub fn with_mode(mode: Mode) -> Self {
        MinHeap {
            elements: vec![Self::INFINITY],
            length: 0,
            mode,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The live elements, storage indices 1..=length.
    pub fn values(&self) -> &[i32] {
        &self.elements[1..=self.length]
    }

    /// Appends `count` values from `source`, then heapifies in one bulk pass.
    pub fn fill_random(&mut self, count: usize, source: &mut impl ValueSource) {
        for _ in 0..count {
            self.elements.push(source.next_value());
            self.length += 1;
        }
        self.min_heapify(self.length);
    }

    /// Appends `value` at the next free slot. In `Faithful` mode the heap
    /// order is not re-established; callers are expected to run
    /// [`MinHeap::min_heapify`] over the full length before querying.
    /// `Hardened` mode sifts the new element up immediately.
    pub fn insert(&mut self, value: i32) {
        self.elements.push(value);
        self.length += 1;
        if self.mode == Mode::Hardened {
            self.sift_up(self.length);
        }
    }

    /// Lowers the value at index `i` to `k` and sifts it toward the root.
    /// Silent no-op when `k` is not strictly smaller.
    pub fn decrease_key(&mut self, i: usize, k: i32) -> Result<(), HeapError> {
        if i == 0 || i > self.length {
            return Err(HeapError::IndexOutOfRange(i));
        }
        if k < self.elements[i] {
            self.elements[i] = k;
            self.sift_up(i);
        }
        Ok(())
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 1 && self.elements[Self::parent_index(i)] > self.elements[i] {
            self.elements.swap(i, Self::parent_index(i));
            i = Self::parent_index(i);
        }
    }

    pub fn minimum(&self) -> Result<i32, HeapError> {
        if self.length == 0 {
            return Err(HeapError::EmptyHeap);
        }
        Ok(self.elements[1])
    }

    /// Removes and returns the minimum. `Faithful` mode shift-deletes the
    /// root slot, which can disturb the heap order deeper down; `Hardened`
    /// mode swaps the root with the last live slot first, so the order
    /// survives and draining the heap yields a non-decreasing sequence.
    pub fn extract_min(&mut self) -> Result<i32, HeapError> {
        let minimum = self.minimum()?;
        match self.mode {
            Mode::Faithful => self.delete(1),
            Mode::Hardened => {
                self.swap_values(1, self.length);
                self.delete(self.length);
            }
        }
        self.min_heapify(1);
        Ok(minimum)
    }

    /// Removes the storage slot at index `i`, shifting later slots down.
    /// Index 0 (the sentinel) is never removed. An index past the storage
    /// bounds is logged and swallowed; the heap is left untouched.
    pub fn delete(&mut self, i: usize) {
        if i == 0 {
            return;
        }
        if i >= self.elements.len() {
            warn!("delete: index {} does not exist, won't remove it", i);
            return;
        }
        self.elements.remove(i);
        self.length = self.length.saturating_sub(1);
    }

    /// Restores heap order scanning indices 1..=i: whenever a child value is
    /// smaller, swap and re-heapify from the child's index. Left child wins
    /// over an equally small right child; the right child is only taken when
    /// strictly smaller than the left.
    pub fn min_heapify(&mut self, i: usize) {
        for j in 1..=i {
            if j >= self.elements.len() {
                break;
            }
            let value = self.elements[j];
            let left = self.left_child_value(j);
            let right = self.right_child_value(j);

            let mut smallest = j;
            if left < value {
                smallest = 2 * j;
                if right < left {
                    smallest = 2 * j + 1;
                }
            } else if right < value {
                smallest = 2 * j + 1;
            }

            if smallest != j {
                self.swap_values(smallest, j);
                self.min_heapify(smallest);
            }
        }
    }

    /// Destructive in-place heap-sort. Returns the elements ascending; the
    /// heap is empty afterwards, with the storage holding the sorted values
    /// in reverse as scratch.
    pub fn sort(&mut self) -> Vec<i32> {
        let mut sorted = Vec::with_capacity(self.length);
        while self.length > 0 {
            let last = self.elements[self.length];
            sorted.push(self.elements[1]);
            self.elements[self.length] = self.elements[1];
            self.elements[1] = last;
            self.length -= 1;
            self.min_heapify(1);
        }
        sorted
    }

    pub fn parent_index(i: usize) -> usize {
        i / 2
    }

    pub fn left_child_value(&self, i: usize) -> i32 {
        if self.length >= 2 * i {
            self.elements[2 * i]
        } else {
            Self::INFINITY
        }
    }

    pub fn right_child_value(&self, i: usize) -> i32 {
        if self.length >= 2 * i + 1 {
            self.elements[2 * i + 1]
        } else {
            Self::INFINITY
        }
    }

    pub fn swap_values(&mut self, a: usize, b: usize) {
        self.elements.swap(a, b);
    }
}

impl Default for MinHeap {
    fn default() -> Self {
        MinHeap::new()
    }
}
