use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::SeedableRng;

use sort_test_tools::fixtures::{self, Named};
use sort_test_tools::{patterns, tests as sort_tests, CountingCompare};

use textbook_sorts::stable::{cocktail, insertion, merge};
use textbook_sorts::unstable::quick;
use textbook_sorts::{cocktail_sort, insertion_sort, merge_sort, quick_sort};

const N: usize = 21;

type NameCmp = fn(&Named, &Named) -> Ordering;

fn name_counter() -> CountingCompare<NameCmp> {
    CountingCompare::new(Named::cmp_by_name as NameCmp)
}

#[test]
fn insertion_sort_sorted_input_costs_n_minus_one() {
    sort_test_tools::init_logging();

    let mut v = fixtures::data_structures_by_name();
    let cmp = name_counter();

    insertion_sort(Some(&mut v[..]), Some(|a: &Named, b: &Named| cmp.compare(a, b))).unwrap();

    assert_eq!(v, fixtures::data_structures_by_name());
    assert!(cmp.count() <= N - 1 && cmp.count() != 0, "comparisons: {}", cmp.count());
    assert_eq!(cmp.count(), N - 1);
}

#[test]
fn insertion_sort_reversed_input_within_quadratic_bound() {
    let mut v = fixtures::data_structures_by_name_reversed();
    let cmp = name_counter();

    insertion_sort(Some(&mut v[..]), Some(|a: &Named, b: &Named| cmp.compare(a, b))).unwrap();

    // Sorted by name, the two equal names ("Trie") come out in reversed input order.
    let names = |v: &[Named]| v.iter().map(|n| n.name.clone()).collect::<Vec<_>>();
    assert_eq!(names(&v), names(&fixtures::data_structures_by_name()));
    assert!(cmp.count() <= N * (N - 1) / 2 && cmp.count() != 0, "comparisons: {}", cmp.count());
}

#[test]
fn insertion_sort_is_stable_for_named_records() {
    let mut v = fixtures::data_structures();
    let first_trie = v[16].clone();
    let second_trie = v[20].clone();

    insertion_sort(Some(&mut v[..]), Some(Named::cmp_by_name)).unwrap();

    assert_eq!(v, fixtures::data_structures_by_name());
    assert_eq!(v[19], first_trie);
    assert_eq!(v[20], second_trie);
}

#[test]
fn cocktail_sort_sorted_input_costs_single_pass() {
    let mut v = fixtures::data_structures_by_name();
    let cmp = name_counter();

    cocktail_sort(Some(&mut v[..]), Some(|a: &Named, b: &Named| cmp.compare(a, b))).unwrap();

    assert_eq!(v, fixtures::data_structures_by_name());
    assert_eq!(cmp.count(), N - 1);
}

#[test]
fn cocktail_sort_reversed_input_within_quadratic_bound() {
    let mut v = fixtures::data_structures_by_name_reversed();
    let cmp = name_counter();

    cocktail_sort(Some(&mut v[..]), Some(|a: &Named, b: &Named| cmp.compare(a, b))).unwrap();

    let names = |v: &[Named]| v.iter().map(|n| n.name.clone()).collect::<Vec<_>>();
    assert_eq!(names(&v), names(&fixtures::data_structures_by_name()));
    assert!(cmp.count() <= N * (N - 1) / 2 && cmp.count() != 0, "comparisons: {}", cmp.count());
}

#[test]
fn cocktail_sort_is_stable_for_named_records() {
    let mut v = fixtures::data_structures();
    let first_trie = v[16].clone();
    let second_trie = v[20].clone();

    cocktail_sort(Some(&mut v[..]), Some(Named::cmp_by_name)).unwrap();

    assert_eq!(v, fixtures::data_structures_by_name());
    assert_eq!(v[19], first_trie);
    assert_eq!(v[20], second_trie);
}

#[test]
fn cocktail_sort_terminates_after_pass_without_swaps() {
    // Only the first forward pass swaps. The backward pass then finds nothing, and the next
    // forward pass must not be needed.
    let mut v = [1, 2, 4, 3, 5, 6];
    let cmp = CountingCompare::new(|a: &i32, b: &i32| a.cmp(b));

    cocktail::sort_by(&mut v, |a, b| cmp.compare(a, b));

    assert_eq!(v, [1, 2, 3, 4, 5, 6]);
    // 5 forward comparisons, then the backward pass from index 2 down to 1.
    assert_eq!(cmp.count(), 5 + 2);
}

#[test]
fn cocktail_sort_shrinks_window_to_last_swap() {
    for test_size in [2, 3, 10, 21, 100] {
        let mut v = patterns::descending(test_size);
        let count = sort_tests::count_comparisons::<i32, cocktail::SortImpl>(&mut v);

        assert_eq!(v, patterns::ascending(test_size));
        assert!(count <= test_size * (test_size - 1) / 2, "len {test_size}: {count}");
    }
}

#[test]
fn merge_sort_is_stable_for_named_records() {
    let mut v = fixtures::data_structures();
    let first_trie = v[16].clone();
    let second_trie = v[20].clone();

    merge_sort(Some(&mut v[..]), Some(Named::cmp_by_name)).unwrap();

    assert_eq!(v, fixtures::data_structures_by_name());
    assert_eq!(v[19], first_trie);
    assert_eq!(v[20], second_trie);
}

#[test]
fn merge_sort_within_n_log_n_comparisons() {
    let mut rng = patterns::fixed_rng();

    for _ in 0..100 {
        let mut v = patterns::random_strings(100, 7);
        rand::seq::SliceRandom::shuffle(v.as_mut_slice(), &mut rng);
        let mut expected = v.clone();
        expected.sort();

        let cmp = CountingCompare::new(|a: &String, b: &String| a.cmp(b));
        merge_sort(Some(&mut v[..]), Some(|a: &String, b: &String| cmp.compare(a, b))).unwrap();

        assert_eq!(v, expected);
        let bound = 100.0 * (100f64).log2();
        assert!(cmp.count() as f64 <= bound && cmp.count() != 0, "comparisons: {}", cmp.count());
    }
}

#[test]
fn merge_sort_is_not_adaptive() {
    // Sorted input still pays for every merge, at least n/2 comparisons per level.
    let mut v = patterns::ascending(64);
    let count = sort_tests::count_comparisons::<i32, merge::SortImpl>(&mut v);

    assert_eq!(v, patterns::ascending(64));
    assert!(count >= 32 * 6, "comparisons: {count}");
}

#[test]
fn quick_sort_within_quadratic_bound() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);

    for _ in 0..100 {
        let mut v = patterns::random_strings(100, 7);
        rand::seq::SliceRandom::shuffle(v.as_mut_slice(), &mut rng);
        let mut expected = v.clone();
        expected.sort();

        let cmp = CountingCompare::new(|a: &String, b: &String| a.cmp(b));
        quick_sort(
            Some(&mut v[..]),
            Some(|a: &String, b: &String| cmp.compare(a, b)),
            Some(&mut rng),
        )
        .unwrap();

        assert_eq!(v, expected);
        assert!(cmp.count() <= 100 * 99 / 2 && cmp.count() != 0, "comparisons: {}", cmp.count());
    }
}

#[test]
fn quick_sort_same_seed_same_comparisons() {
    let input = patterns::random(500);
    let mut counts = Vec::new();

    for _ in 0..2 {
        let mut v = input.clone();
        let mut rng = StdRng::seed_from_u64(42);
        let cmp = CountingCompare::new(|a: &i32, b: &i32| a.cmp(b));

        quick::sort_by_with_rng(&mut v, |a, b| cmp.compare(a, b), &mut rng);

        assert!(v.windows(2).all(|w| w[0] <= w[1]));
        counts.push(cmp.count());
    }

    assert_eq!(counts[0], counts[1]);
}

#[test]
fn quick_sort_two_elements() {
    let mut rng = StdRng::seed_from_u64(3);

    for input in [[1, 2], [2, 1], [7, 7]] {
        let mut v = input;
        quick::sort_by_with_rng(&mut v, |a: &i32, b: &i32| a.cmp(b), &mut rng);
        assert!(v[0] <= v[1]);
    }
}

#[test]
fn quick_sort_many_equal_elements() {
    // Every partition puts all elements left of the pivot, so each step only removes the pivot.
    let mut v = vec![7i32; 50_000];
    let mut rng = StdRng::seed_from_u64(1);

    quick_sort(Some(&mut v[..]), Some(|a: &i32, b: &i32| a.cmp(b)), Some(&mut rng)).unwrap();

    assert_eq!(v.len(), 50_000);
    assert!(v.iter().all(|&x| x == 7));
}

#[test]
fn quick_sort_constant_comparator() {
    let input = patterns::random(30_000);
    let mut v = input.clone();
    let mut rng = StdRng::seed_from_u64(2);

    quick::sort_by_with_rng(&mut v, |_: &i32, _: &i32| Ordering::Equal, &mut rng);

    // Any order is allowed, the elements must all still be there.
    let mut expected = input;
    expected.sort();
    v.sort();
    assert_eq!(v, expected);
}

#[test]
fn quick_sort_two_elements_comparison_count() {
    // With the smaller value as pivot, `i` stops on the larger one and `j` then compares that same
    // element again before stepping onto the pivot. That is 2 comparisons for n = 2, one more than
    // n * (n - 1) / 2. With the larger value as pivot `i` runs past the end after 1 comparison.
    let mut saw_extra_comparison = false;

    for seed in 0..32 {
        for input in [[1, 2], [2, 1]] {
            let mut rng = StdRng::seed_from_u64(seed);
            let pivot_pos = rand::Rng::gen_range(&mut rng.clone(), 0..=1usize);
            let pivot_is_min = input[pivot_pos] == 1;

            let mut v = input;
            let cmp = CountingCompare::new(|a: &i32, b: &i32| a.cmp(b));
            quick::sort_by_with_rng(&mut v, |a, b| cmp.compare(a, b), &mut rng);

            assert_eq!(v, [1, 2]);
            assert_eq!(cmp.count(), if pivot_is_min { 2 } else { 1 }, "seed {seed} {input:?}");
            saw_extra_comparison |= pivot_is_min;
        }
    }

    assert!(saw_extra_comparison);
}

#[test]
fn comparison_sorts_match_std_on_random_strings() {
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..100 {
        let mut input = patterns::random_strings(100, 7);
        rand::seq::SliceRandom::shuffle(input.as_mut_slice(), &mut rng);
        let mut expected = input.clone();
        expected.sort();

        let mut v = input.clone();
        insertion::sort(&mut v);
        assert_eq!(v, expected);

        let mut v = input.clone();
        cocktail::sort(&mut v);
        assert_eq!(v, expected);

        let mut v = input.clone();
        merge::sort(&mut v);
        assert_eq!(v, expected);

        let mut v = input.clone();
        quick::sort_by_with_rng(&mut v, |a: &String, b: &String| a.cmp(b), &mut rng);
        assert_eq!(v, expected);
    }
}
