use crate::compare::{Compare, NaturalOrder};
use crate::error::EmptyError;
use crate::{left, parent, right};
use core::fmt;
use core::iter::FromIterator;
use log::{debug, trace};

/// A binary min-heap stored in a `Vec`.
///
/// The element that compares smallest under `C` is always at index 0, and
/// every element compares no greater than its children. Equal elements are
/// returned in no particular order.
///
/// | operation      | cost       |
/// |----------------|------------|
/// | `insert`       | O(log n)   |
/// | `extract_min`  | O(log n)   |
/// | `peek_min`     | O(1)       |
/// | `from_vec`     | O(n)       |
///
/// ```
/// use minheap::MinHeap;
///
/// let mut heap = MinHeap::from_vec(vec![30, 20, 50, 40, 10, 60]);
/// heap.insert(5);
/// assert_eq!(heap.extract_min(), Ok(5));
/// assert_eq!(heap.peek_min(), Ok(&10));
/// ```
#[derive(Clone)]
pub struct MinHeap<T, C = NaturalOrder> {
    heap: Vec<T>,
    cmp: C,
}

impl<T: Ord> MinHeap<T> {
    pub fn new() -> Self {
        Self::new_by(NaturalOrder)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_by(capacity, NaturalOrder)
    }

    /// Takes ownership of `items` and rearranges them into heap order in
    /// linear time.
    pub fn from_vec(items: Vec<T>) -> Self {
        Self::from_vec_by(items, NaturalOrder)
    }

    /// Copies `items` into a new heap. The caller's slice is left untouched.
    pub fn from_slice(items: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from_vec(items.to_vec())
    }
}

impl<T, C: Compare<T>> MinHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`.
    ///
    /// ```
    /// use minheap::MinHeap;
    ///
    /// let mut heap = MinHeap::<i32, _>::new_by(|a: &i32, b: &i32| b.cmp(a));
    /// heap.insert(1);
    /// heap.insert(7);
    /// assert_eq!(heap.peek_min(), Ok(&7));
    /// ```
    pub fn new_by(cmp: C) -> Self {
        Self {
            heap: Vec::new(),
            cmp,
        }
    }

    pub fn with_capacity_by(capacity: usize, cmp: C) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Builds a heap ordered by `cmp` from `items` in linear time.
    ///
    /// ```
    /// use minheap::MinHeap;
    ///
    /// let mut heap = MinHeap::from_vec_by(vec![5.5, 2.1, 9.8], f64::total_cmp);
    /// assert_eq!(heap.extract_min(), Ok(2.1));
    /// ```
    pub fn from_vec_by(items: Vec<T>, cmp: C) -> Self {
        let mut heap = Self { heap: items, cmp };
        heap.build_min_heap();
        heap
    }

    // Every index at or past n/2 is a leaf. Walking the parents from the
    // deepest one up means both subtrees are already heaps when a node is
    // sifted, so one sift-down per parent is enough.
    fn build_min_heap(&mut self) {
        let n = self.heap.len();
        if n < 2 {
            return;
        }
        debug!("build_min_heap: heapifying {} parents of {} items", n / 2, n);
        for i in (0..n / 2).rev() {
            self.heapify(n, i);
        }
    }

    /// Sift-down from `i`, looking only at the first `size` elements.
    fn heapify(&mut self, size: usize, mut i: usize) {
        debug_assert!(size <= self.heap.len());
        loop {
            let left = left(i);
            let right = right(i);
            let mut smallest = i;
            if left < size && self.cmp.less(&self.heap[left], &self.heap[smallest]) {
                smallest = left;
            }
            if right < size && self.cmp.less(&self.heap[right], &self.heap[smallest]) {
                smallest = right;
            }
            if smallest == i {
                debug_assert!(!(left < size && self.cmp.less(&self.heap[left], &self.heap[i])));
                break;
            }
            self.heap.swap(i, smallest);
            i = smallest;
        }
    }

    /// Returns the index the element came to rest at.
    fn sift_up(&mut self, mut i: usize) -> usize {
        while i > 0 {
            let parent = parent(i);
            if !self.cmp.less(&self.heap[i], &self.heap[parent]) {
                break;
            }
            self.heap.swap(i, parent);
            i = parent;
        }
        debug_assert!(i == 0 || !self.cmp.less(&self.heap[i], &self.heap[parent(i)]));
        i
    }

    /// Inserts an item into the heap.
    pub fn insert(&mut self, value: T) {
        let index = self.heap.len();
        self.heap.push(value);
        let settled = self.sift_up(index);
        trace!("insert: pushed at {}, settled at {}", index, settled);
    }

    /// Removes and returns the smallest item.
    pub fn extract_min(&mut self) -> Result<T, EmptyError> {
        if self.heap.is_empty() {
            return Err(EmptyError);
        }
        if self.heap.len() == 1 {
            return self.heap.pop().ok_or(EmptyError);
        }
        let last_index = self.heap.len() - 1;
        self.heap.swap(0, last_index);
        let min = self.heap.pop().ok_or(EmptyError)?;
        let size = self.heap.len();
        self.heapify(size, 0);
        trace!("extract_min: {} items remain", size);
        Ok(min)
    }

    /// Returns the smallest item without removing it.
    pub fn peek_min(&self) -> Result<&T, EmptyError> {
        self.heap.first().ok_or(EmptyError)
    }

    /// Returns `true` if every element compares no greater than its children.
    /// Always holds between calls; exposed for diagnostics and tests.
    pub fn is_heap(&self) -> bool {
        (1..self.heap.len()).all(|i| !self.cmp.less(&self.heap[i], &self.heap[parent(i)]))
    }

    /// Removes every item in ascending order.
    ///
    /// Items the iterator has not yielded yet are dropped along with it.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, C> {
        DrainSorted { inner: self }
    }

    /// Consumes the heap, returning its items in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        debug!("into_sorted_vec: draining {} items", self.heap.len());
        let mut sorted = Vec::with_capacity(self.heap.len());
        sorted.extend(self.drain_sorted());
        sorted
    }
}

impl<T, C> MinHeap<T, C> {
    pub fn size(&self) -> usize {
        self.heap.len()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.heap.reserve(additional);
    }

    pub fn shrink_to_fit(&mut self) {
        self.heap.shrink_to_fit();
    }

    pub fn clear(&mut self) {
        debug!("clear: dropping {} items", self.heap.len());
        self.heap.clear();
    }

    /// The items in internal array order. Only index 0 is guaranteed to be
    /// the minimum.
    pub fn as_slice(&self) -> &[T] {
        &self.heap
    }

    /// Iterates in internal array order, not sorted order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.heap.iter()
    }

    /// Returns a copy of the items in internal array order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.heap.clone()
    }

    /// Gives back the underlying storage in internal array order.
    pub fn into_vec(self) -> Vec<T> {
        self.heap
    }
}

/// Iterator returned by [`MinHeap::drain_sorted`].
pub struct DrainSorted<'a, T, C: Compare<T>> {
    inner: &'a mut MinHeap<T, C>,
}

impl<'a, T, C: Compare<T>> Iterator for DrainSorted<'a, T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.extract_min().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<'a, T, C: Compare<T>> ExactSizeIterator for DrainSorted<'a, T, C> {}

impl<'a, T, C: Compare<T>> Drop for DrainSorted<'a, T, C> {
    fn drop(&mut self) {
        self.inner.clear();
    }
}

impl<T, C: Compare<T> + Default> Default for MinHeap<T, C> {
    fn default() -> Self {
        Self::new_by(C::default())
    }
}

impl<T: Ord> From<Vec<T>> for MinHeap<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T: Ord + Clone> From<&[T]> for MinHeap<T> {
    fn from(items: &[T]) -> Self {
        Self::from_slice(items)
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

/// Appends the whole batch, then restores heap order either by sifting each
/// new item up or, when the batch is at least half the old size, by one
/// linear rebuild.
impl<T, C: Compare<T>> Extend<T> for MinHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        let start = self.heap.len();
        self.heap.extend(iter);
        let added = self.heap.len() - start;
        if added == 0 {
            return;
        }
        if added >= start / 2 {
            self.build_min_heap();
        } else {
            for i in start..self.heap.len() {
                self.sift_up(i);
            }
        }
        trace!("extend: added {} items to {}", added, start);
    }
}

impl<'a, T, C> IntoIterator for &'a MinHeap<T, C> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.heap.iter()
    }
}

impl<T: fmt::Display, C> fmt::Display for MinHeap<T, C> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "[")?;
        for (i, item) in self.heap.iter().enumerate() {
            if i > 0 {
                write!(fmt, ", ")?;
            }
            write!(fmt, "{}", item)?;
        }
        write!(fmt, "]")
    }
}

impl<T: fmt::Debug, C> fmt::Debug for MinHeap<T, C> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_list().entries(self.heap.iter()).finish()
    }
}
