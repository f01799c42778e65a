use crate::compare::Compare;
use crate::{left, right};

pub fn init_test() {
    drop(env_logger::try_init());
}

/// Panics if any parent in `items` compares greater than one of its children.
pub fn assert_heap_property<T, C>(items: &[T], cmp: &C)
where
    T: core::fmt::Debug,
    C: Compare<T>,
{
    for i in 0..items.len() {
        for child in [left(i), right(i)].iter().copied() {
            if child < items.len() {
                assert!(
                    !cmp.less(&items[child], &items[i]),
                    "heap property violated: items[{}] = {:?} > items[{}] = {:?} in {:?}",
                    i,
                    items[i],
                    child,
                    items[child],
                    items
                );
            }
        }
    }
}
