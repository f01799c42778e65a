//! An array-backed binary min-heap.
//!
//! The heap is stored as a complete binary tree laid out in a `Vec`: the root
//! is at index 0 and the children of `i` are at `2i + 1` and `2i + 2`.

pub mod compare;
pub mod error;
pub mod min_heap;

#[cfg(test)]
mod testing;

pub use crate::compare::{Compare, NaturalOrder};
pub use crate::error::EmptyError;
pub use crate::min_heap::{DrainSorted, MinHeap};

// index of the parent of a non-root node
pub(crate) fn parent(child: usize) -> usize {
    (child - 1) / 2
}

pub(crate) fn left(parent: usize) -> usize {
    parent * 2 + 1
}

pub(crate) fn right(parent: usize) -> usize {
    parent * 2 + 2
}

#[test]
fn tree_index_test() {
    assert_eq!(left(0), 1);
    assert_eq!(right(0), 2);
    assert_eq!(left(2), 5);
    assert_eq!(right(2), 6);
    for i in 1..100 {
        let p = parent(i);
        assert!(left(p) == i || right(p) == i);
    }
}
