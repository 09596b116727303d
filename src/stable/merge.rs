use std::cmp::Ordering;

sort_impl!("merge_sort");

/// Sorts the slice.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n* \* log(*n*)) in all
/// cases. It is not adaptive, already sorted input costs the same as random input.
///
/// Allocates temporary storage for both halves on every level of recursion, the merged result
/// is written back into `arr`.
#[inline]
pub fn sort<T>(arr: &mut [T])
where
    T: Ord + Clone,
{
    merge_sort(arr, &mut |a: &T, b: &T| a.cmp(b));
}

/// Sorts the slice with a comparator function.
///
/// The comparator function must define a total ordering for the elements in the slice. If
/// the ordering is not total, the order of the elements is unspecified, but no element is lost.
#[inline]
pub fn sort_by<T, F>(arr: &mut [T], mut compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort(arr, &mut compare);
}

fn merge_sort<T, F>(v: &mut [T], compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len <= 1 {
        return;
    }

    // For odd lengths the extra element goes to the right half.
    let mid = len / 2;
    let mut left = v[..mid].to_vec();
    let mut right = v[mid..].to_vec();

    merge_sort(&mut left, compare);
    merge_sort(&mut right, compare);

    merge(v, left, right, compare);
}

/// Merges the sorted runs `left` and `right` into `dst`, which must be exactly as long as both
/// together.
fn merge<T, F>(dst: &mut [T], left: Vec<T>, right: Vec<T>, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    debug_assert_eq!(dst.len(), left.len() + right.len());

    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    for slot in dst.iter_mut() {
        let take_left = match (left.peek(), right.peek()) {
            // Ties are taken from the left run, this is what makes the sort stable.
            (Some(l), Some(r)) => compare(l, r) != Ordering::Greater,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };

        let next = if take_left { left.next() } else { right.next() };
        if let Some(elem) = next {
            *slot = elem;
        }
    }
}
