//! Array-backed binary min-heap.
//!
//! [`MinHeap`] keeps its elements in a `Vec` laid out as an implicit binary
//! tree: the children of index `i` live at `2i + 1` and `2i + 2`, and its
//! parent at `(i - 1) / 2`. Ordering is supplied by the element type through
//! [`HeapOrder`], so one heap instance only ever holds a single concrete
//! element type.
//!
//! When both children of a node compare equal the left child is chosen as
//! the swap target, which keeps drain order reproducible for a given
//! insertion sequence.

use crate::error::HeapError;

/// Strict "is-less-than" relation used to order heap elements.
///
/// Implementations must describe a total preorder: irreflexive and
/// transitive, with incomparable elements treated as equal.
///
/// # Examples
/// ```
/// use spanwalk_core::HeapOrder;
///
/// struct Job {
///     priority: u8,
/// }
///
/// impl HeapOrder for Job {
///     fn less_than(&self, other: &Self) -> bool {
///         self.priority < other.priority
///     }
/// }
///
/// assert!(Job { priority: 1 }.less_than(&Job { priority: 2 }));
/// ```
pub trait HeapOrder {
    /// Returns `true` when `self` must sit above `other` in the heap.
    fn less_than(&self, other: &Self) -> bool;
}

macro_rules! impl_heap_order_for_primitives {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl HeapOrder for $ty {
                fn less_than(&self, other: &Self) -> bool {
                    self < other
                }
            }
        )+
    };
}

impl_heap_order_for_primitives!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Binary min-heap over elements implementing [`HeapOrder`].
///
/// # Examples
/// ```
/// use spanwalk_core::MinHeap;
///
/// let mut heap = MinHeap::from_vec(vec![5, 3, 8]);
/// heap.insert(1);
/// assert_eq!(heap.fetch(), Ok(&1));
/// assert_eq!(heap.pop(), Ok(1));
/// assert_eq!(heap.pop(), Ok(3));
/// assert_eq!(heap.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct MinHeap<T> {
    items: Vec<T>,
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: HeapOrder> MinHeap<T> {
    /// Creates an empty heap.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty heap able to hold `capacity` elements without
    /// reallocating.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Builds a heap in place from an arbitrary sequence.
    ///
    /// Runs the linear-time bottom-up heapify, sifting down from the last
    /// interior node to the root.
    #[must_use]
    pub fn from_vec(items: Vec<T>) -> Self {
        let mut heap = Self { items };
        let len = heap.items.len();
        if len <= 1 {
            return heap;
        }

        let last_interior = (len >> 1).saturating_sub(1);
        for index in (0..=last_interior).rev() {
            heap.sift_down(index);
        }
        heap
    }

    /// Adds `item`, restoring the heap property in at most `O(log n)` swaps.
    pub fn insert(&mut self, item: T) {
        self.items.push(item);
        let last = self.items.len().saturating_sub(1);
        self.sift_up(last);
    }

    /// Removes and returns the minimum element.
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] when the heap holds no elements.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        let last = self.items.len().checked_sub(1).ok_or(HeapError::Empty)?;
        self.items.swap(0, last);
        let min = self.items.pop().ok_or(HeapError::Empty)?;
        self.sift_down(0);
        Ok(min)
    }

    /// Returns the minimum element without removing it.
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] when the heap holds no elements.
    pub fn fetch(&self) -> Result<&T, HeapError> {
        self.items.first().ok_or(HeapError::Empty)
    }

    /// Returns the number of elements in the heap.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the heap holds no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consumes the heap, returning the backing storage in heap layout.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Pops every element, returning them in ascending order and leaving the
    /// heap empty.
    ///
    /// # Examples
    /// ```
    /// use spanwalk_core::MinHeap;
    ///
    /// let mut heap = MinHeap::from_vec(vec![4_u8, 1, 3]);
    /// assert_eq!(heap.drain_sorted(), vec![1, 3, 4]);
    /// assert!(heap.is_empty());
    /// ```
    pub fn drain_sorted(&mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.items.len());
        while let Ok(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    fn is_less(&self, left: usize, right: usize) -> bool {
        match (self.items.get(left), self.items.get(right)) {
            (Some(lhs), Some(rhs)) => lhs.less_than(rhs),
            _ => false,
        }
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) >> 1;
            if !self.is_less(index, parent) {
                break;
            }
            self.items.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.items.len();
        loop {
            let left = index.saturating_mul(2).saturating_add(1);
            if left >= len {
                break;
            }
            let right = left.saturating_add(1);
            // Equal children resolve to the left one.
            let child = if self.is_less(right, left) { right } else { left };
            if !self.is_less(child, index) {
                break;
            }
            self.items.swap(index, child);
            index = child;
        }
    }
}

impl<T: HeapOrder> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: HeapOrder> Extend<T> for MinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}
