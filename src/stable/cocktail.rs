use std::cmp::Ordering;

sort_impl!("cocktail_sort");

/// Sorts the slice.
///
/// This sort is stable (i.e., does not reorder equal elements), in-place and adaptive.
/// *O*(*n*) comparisons for already sorted input, *O*(*n*^2) worst-case.
#[inline]
pub fn sort<T>(arr: &mut [T])
where
    T: Ord,
{
    cocktail_sort(arr, &mut |a: &T, b: &T| a.cmp(b));
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
    cocktail_sort(arr, &mut compare);
}

/// Alternates forward and backward bubble passes. Instead of shrinking the window by one element
/// per pass, each pass moves the opposite boundary to the position of its last swap: nothing past
/// the last forward swap, and nothing before the last backward swap, can still be out of place.
fn cocktail_sort<T, F>(v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mut start = 0;
    let mut end = len - 1;
    let mut last_swap = 0;
    let mut swapped = true;

    while swapped {
        swapped = false;
        for i in start..end {
            if compare(&v[i], &v[i + 1]) == Ordering::Greater {
                crate::swap(v, i, i + 1);
                swapped = true;
                last_swap = i;
            }
        }

        // On a pass without swaps `last_swap` is stale, but then the loop ends right here and the
        // boundary is never read again.
        end = last_swap;

        if swapped {
            swapped = false;
            for i in (start + 1..=last_swap).rev() {
                if compare(&v[i], &v[i - 1]) == Ordering::Less {
                    crate::swap(v, i, i - 1);
                    swapped = true;
                    last_swap = i;
                }
            }
        }

        start = last_swap;
    }
}
