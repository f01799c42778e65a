use core::fmt;

/// Returned by [`MinHeap::extract_min`](crate::MinHeap::extract_min) and
/// [`MinHeap::peek_min`](crate::MinHeap::peek_min) when the heap holds no
/// elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyError;

impl fmt::Display for EmptyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("heap is empty")
    }
}

impl std::error::Error for EmptyError {}
