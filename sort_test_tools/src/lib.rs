use std::cell::Cell;
use std::cmp::Ordering;

pub mod fixtures;
pub mod patterns;

#[doc(hidden)]
pub use paste;

pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Clone;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering;
}

/// Wraps an ordering function and counts how often it is called.
///
/// ```ignore
/// let cmp = CountingCompare::new(|a: &i32, b: &i32| a.cmp(b));
/// S::sort_by(&mut v, |a, b| cmp.compare(a, b));
/// assert!(cmp.count() <= v.len() - 1);
/// ```
pub struct CountingCompare<F> {
    compare: F,
    count: Cell<usize>,
}

impl<F> CountingCompare<F> {
    pub fn new(compare: F) -> Self {
        Self {
            compare,
            count: Cell::new(0),
        }
    }

    pub fn compare<T>(&self, a: &T, b: &T) -> Ordering
    where
        F: Fn(&T, &T) -> Ordering,
    {
        self.count.set(self.count.get() + 1);
        (self.compare)(a, b)
    }

    pub fn count(&self) -> usize {
        self.count.get()
    }

    pub fn reset(&self) {
        self.count.set(0);
    }
}

/// Installs `env_logger` in test mode. Safe to call from every test, only the first call has an
/// effect. Control the output with `RUST_LOG`.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Generates one `#[test]` per entry of [`tests`] for the given [`Sort`] implementation.
#[macro_export]
macro_rules! instantiate_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_sort_tests!(
            @tests $sort_impl;
            basic,
            fixed_seed,
            random,
            random_narrow,
            random_zipf,
            random_str,
            ascending,
            descending,
            all_equal,
            saw_mixed,
            int_edge,
            named_records,
            sort_vs_sort_by,
            reverse_comparator,
            idempotent,
            comparator_panic_free_on_inconsistent_order,
        );
    };
    (@tests $sort_impl:ty; $($test:ident),* $(,)?) => {
        $(
            $crate::paste::paste! {
                #[test]
                fn [<sort_ $test>]() {
                    $crate::init_logging();
                    $crate::tests::$test::<$sort_impl>();
                }
            }
        )*
    };
}

/// Generates the stability tests for the given stable [`Sort`] implementation.
#[macro_export]
macro_rules! instantiate_stable_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_sort_tests!(
            @tests $sort_impl;
            stability,
            stability_with_patterns,
            stability_named_records,
        );
    };
}
