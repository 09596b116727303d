use std::cmp::Ordering;

use rand::Rng;

sort_impl!("quick_sort");

/// Sorts the slice, choosing pivots with [`rand::thread_rng`].
///
/// This sort is unstable (i.e., may reorder equal elements), in-place and not adaptive.
/// *O*(*n* \* log(*n*)) expected, *O*(*n*^2) worst-case.
#[inline]
pub fn sort<T>(arr: &mut [T])
where
    T: Ord,
{
    quicksort(arr, &mut |a: &T, b: &T| a.cmp(b), &mut rand::thread_rng());
}

/// Sorts the slice with a comparator function, choosing pivots with [`rand::thread_rng`].
///
/// The comparator function must define a total ordering for the elements in the slice. If
/// the ordering is not total, the order of the elements is unspecified, but no element is lost.
#[inline]
pub fn sort_by<T, F>(arr: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort(arr, &mut compare, &mut rand::thread_rng());
}

/// Sorts the slice with a comparator function, drawing every pivot from `rng`.
///
/// With a seeded `rng` the sequence of pivots, and so the number of comparisons, is
/// reproducible.
#[inline]
pub fn sort_by_with_rng<T, F, R>(arr: &mut [T], mut compare: F, rng: &mut R)
where
    F: FnMut(&T, &T) -> Ordering,
    R: Rng + ?Sized,
{
    quicksort(arr, &mut compare, rng);
}

fn quicksort<T, F, R>(v: &mut [T], compare: &mut F, rng: &mut R)
where
    F: FnMut(&T, &T) -> Ordering,
    R: Rng + ?Sized,
{
    // Pending `(start, end)` ranges, `end` exclusive. Lopsided partitions, e.g. many equal
    // elements, would make plain recursion as deep as the slice is long. The left range is pushed
    // last so it is sorted first, which keeps the order of pivot draws of a left-first recursion.
    let mut pending = vec![(0, v.len())];

    while let Some((start, end)) = pending.pop() {
        let len = end - start;
        if len < 2 {
            continue;
        }

        let pivot_pos = rng.gen_range(0..=len - 1);
        let mid = start + partition(&mut v[start..end], pivot_pos, compare);

        // Split the range into `left`, `pivot`, and `right`.
        pending.push((mid + 1, end));
        pending.push((start, mid));
    }
}

/// Moves `v[pivot]` to its final position and returns that position. Everything left of it
/// compares less or equal, everything right of it greater or equal.
///
/// Two cursors walk towards each other: `i` skips elements not greater than the pivot, `j` skips
/// elements not less than the pivot, and the pair they stop on is swapped. Elements equal to the
/// pivot may end up on either side.
fn partition<T, F>(v: &mut [T], pivot: usize, compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    debug_assert!(len >= 2 && pivot < len);

    // Place the pivot at the beginning of slice.
    crate::swap(v, 0, pivot);

    let mut i = 1;
    let mut j = len - 1;

    // `j` never drops below `i - 1`, which is at least 0.
    while i <= j {
        while i <= j && compare(&v[i], &v[0]) != Ordering::Greater {
            i += 1;
        }
        while i <= j && compare(&v[j], &v[0]) != Ordering::Less {
            j -= 1;
        }
        if i <= j {
            crate::swap(v, i, j);
            i += 1;
            j -= 1;
        }
    }

    // Place the pivot between the two partitions.
    crate::swap(v, 0, j);

    j
}
