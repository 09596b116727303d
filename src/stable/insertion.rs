use std::cmp::Ordering;

sort_impl!("insertion_sort");

/// Sorts the slice.
///
/// This sort is stable (i.e., does not reorder equal elements), in-place and adaptive.
/// *O*(*n*) comparisons for already sorted input, *O*(*n*^2) worst-case.
#[inline]
pub fn sort<T>(arr: &mut [T])
where
    T: Ord,
{
    insertion_sort(arr, &mut |a: &T, b: &T| a.cmp(b));
}

/// Sorts the slice with a comparator function.
///
/// The comparator function must define a total ordering for the elements in the slice. If
/// the ordering is not total, the order of the elements is unspecified, but no element is lost.
#[inline]
pub fn sort_by<T, F>(arr: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort(arr, &mut compare);
}

fn insertion_sort<T, F>(v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..v.len() {
        // Walk `v[i]` left one swap at a time. Stopping on `Equal` keeps equal elements in input
        // order and gives exactly one comparison per element for sorted input.
        let mut j = i;
        while j > 0 && compare(&v[j - 1], &v[j]) == Ordering::Greater {
            crate::swap(v, j - 1, j);
            j -= 1;
        }
    }
}
