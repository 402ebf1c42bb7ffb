//! Search algorithms over ordered sequences
//!
//! Both functions are generic over any element that borrows as the target,
//! so they work on `&[String]` with a `&str` target as well as on plain slices.

use std::borrow::Borrow;
use std::cmp::Ordering;

/// Find the first element equal to `target`, scanning front to back
///
/// Comparison is exact (case-sensitive for strings). Runs in O(n).
///
/// # Examples
/// ```
/// use dictionary_manager::core::search::linear_find;
///
/// let words = vec!["apple".to_string(), "banana".to_string(), "banana".to_string()];
/// assert_eq!(linear_find(&words, "banana"), Some(1));
/// assert_eq!(linear_find(&words, "Banana"), None);
/// ```
pub fn linear_find<T, Q>(items: &[T], target: &Q) -> Option<usize>
where
    T: Borrow<Q>,
    Q: PartialEq + ?Sized,
{
    items.iter().position(|item| item.borrow() == target)
}

/// Find `target` in an ascending-sorted slice by recursive halving
///
/// The slice must be sorted in ascending order under `Ord`. On unsorted input
/// the result is unspecified (it may miss elements that are present) but the
/// search never panics. With duplicates, any matching index may be returned.
/// Runs in O(log n).
///
/// # Examples
/// ```
/// use dictionary_manager::core::search::binary_search;
///
/// let words = ["ant", "bee", "cat", "dog", "elk"].map(String::from);
/// assert_eq!(binary_search(&words, "cat"), Some(2));
/// assert_eq!(binary_search(&words, "fox"), None);
/// ```
pub fn binary_search<T, Q>(items: &[T], target: &Q) -> Option<usize>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    search_range(items, target, 0, items.len())
}

/// Search the half-open range `[low, high)`
fn search_range<T, Q>(items: &[T], target: &Q, low: usize, high: usize) -> Option<usize>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    if low >= high {
        return None;
    }

    let mid = low + (high - low) / 2;

    match items[mid].borrow().cmp(target) {
        Ordering::Equal => Some(mid),
        Ordering::Less => search_range(items, target, mid + 1, high),
        Ordering::Greater => search_range(items, target, low, mid),
    }
}
