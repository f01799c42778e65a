use core::cmp::Ordering;

/// Supplies the total order a [`MinHeap`](crate::MinHeap) is kept in.
///
/// The smallest element under `compare` sits at the root. Closures of the
/// form `Fn(&T, &T) -> Ordering` implement this trait, so `f64::total_cmp`
/// or `|a, b| b.cmp(a)` can be passed directly.
pub trait Compare<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;

    fn less(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}

/// Orders elements by their `Ord` impl. This is the default comparator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Compare<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
