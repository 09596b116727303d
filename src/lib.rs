use std::cmp::Ordering;
use std::error::Error;
use std::fmt;

use rand::Rng;

/// Implements [`sort_test_tools::Sort`] for the `sort` and `sort_by` functions of the module it is
/// invoked in.
macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord + Clone,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                T: Clone,
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod stable;
pub mod unstable;

/// The only way a sort in this crate can fail.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SortError {
    /// A required argument was absent. Holds the name of the first missing one: `"sequence"`,
    /// `"comparator"` or `"rng"`.
    InvalidArgument(&'static str),
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortError::InvalidArgument(what) => write!(f, "invalid argument: {what} is missing"),
        }
    }
}

impl Error for SortError {}

/// Swaps the elements at `a` and `b`.
///
/// Panics if either index is out of bounds.
#[inline]
pub fn swap<T>(v: &mut [T], a: usize, b: usize) {
    if a != b {
        v.swap(a, b);
    }
}

fn require<A>(arg: Option<A>, what: &'static str) -> Result<A, SortError> {
    arg.ok_or_else(|| {
        log::debug!("rejecting sort call, {what} is missing");
        SortError::InvalidArgument(what)
    })
}

/// Sorts `arr` in place with insertion sort. Stable, adaptive, *O*(*n*^2) worst-case.
///
/// Fails without touching `arr` if `arr` or `compare` is `None`.
pub fn insertion_sort<T, F>(arr: Option<&mut [T]>, compare: Option<F>) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let arr = require(arr, "sequence")?;
    let compare = require(compare, "comparator")?;

    log::trace!("insertion_sort len: {}", arr.len());
    stable::insertion::sort_by(arr, compare);
    Ok(())
}

/// Sorts `arr` in place with cocktail shaker sort using the last swap optimization. Stable,
/// adaptive, *O*(*n*^2) worst-case.
///
/// Fails without touching `arr` if `arr` or `compare` is `None`.
pub fn cocktail_sort<T, F>(arr: Option<&mut [T]>, compare: Option<F>) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let arr = require(arr, "sequence")?;
    let compare = require(compare, "comparator")?;

    log::trace!("cocktail_sort len: {}", arr.len());
    stable::cocktail::sort_by(arr, compare);
    Ok(())
}

/// Sorts `arr` with top-down merge sort, writing the merged result back into `arr`. Stable,
/// *O*(*n* \* log(*n*)) in all cases.
///
/// Fails without touching `arr` if `arr` or `compare` is `None`.
pub fn merge_sort<T, F>(arr: Option<&mut [T]>, compare: Option<F>) -> Result<(), SortError>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let arr = require(arr, "sequence")?;
    let compare = require(compare, "comparator")?;

    log::trace!("merge_sort len: {}", arr.len());
    stable::merge::sort_by(arr, compare);
    Ok(())
}

/// Sorts `arr` in place with quicksort, drawing every pivot from `rng`. Unstable, *O*(*n*^2)
/// worst-case and *O*(*n* \* log(*n*)) expected.
///
/// Fails without touching `arr` if any argument is `None`.
pub fn quick_sort<T, F, R>(
    arr: Option<&mut [T]>,
    compare: Option<F>,
    rng: Option<&mut R>,
) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
    R: Rng + ?Sized,
{
    let arr = require(arr, "sequence")?;
    let compare = require(compare, "comparator")?;
    let rng = require(rng, "rng")?;

    log::trace!("quick_sort len: {}", arr.len());
    unstable::quick::sort_by_with_rng(arr, compare, rng);
    Ok(())
}

/// Sorts `arr` in place with a base 10 least significant digit radix sort. Stable, *O*(*k* \* *n*)
/// where *k* is the number of digits of the largest magnitude element.
///
/// Fails if `arr` is `None`.
pub fn lsd_radix_sort(arr: Option<&mut [i32]>) -> Result<(), SortError> {
    let arr = require(arr, "sequence")?;

    log::trace!("lsd_radix_sort len: {}", arr.len());
    stable::lsd_radix::sort(arr);
    Ok(())
}

/// Returns a new vector holding the elements of `data` in ascending order, produced by
/// heapifying a copy of `data` into a min-heap and draining it. `data` itself is not modified.
///
/// Fails if `data` is `None`.
pub fn heap_sort(data: Option<&[i32]>) -> Result<Vec<i32>, SortError> {
    let data = require(data, "sequence")?;

    log::trace!("heap_sort len: {}", data.len());
    Ok(unstable::heap::sorted(data))
}
