//! Hand written inputs with known sorted order.

use std::cmp::Ordering;

/// A record that is sorted by `name` only. `id` tells apart records with equal names, which
/// makes stability observable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Named {
    pub name: String,
    pub id: usize,
}

impl Named {
    pub fn new(name: &str, id: usize) -> Self {
        Self {
            name: name.to_string(),
            id,
        }
    }

    pub fn cmp_by_name(a: &Named, b: &Named) -> Ordering {
        a.name.cmp(&b.name)
    }
}

const DATA_STRUCTURE_NAMES: [&str; 21] = [
    "Singly Linked List",
    "Doubly Linked List",
    "Array",
    "Binary Search Tree",
    "AVL Tree",
    "HashMap",
    "Graph",
    "SkipList",
    "Circular Singly Linked List",
    "Queue",
    "Stack",
    "Deque",
    "ArrayList",
    "2-4 Tree",
    "Red Black Tree",
    "Splay Tree",
    "Trie",
    "Segment Tree",
    "B Tree",
    "Set",
    "Trie",
];

// Positions into `DATA_STRUCTURE_NAMES` in ascending name order. The two "Trie" entries keep
// their input order.
const BY_NAME: [usize; 21] = [
    13, 4, 2, 12, 18, 3, 8, 11, 1, 6, 5, 9, 14, 17, 19, 0, 7, 15, 10, 16, 20,
];

/// 21 data structure names in no particular order, containing "Trie" twice (ids 16 and 20).
pub fn data_structures() -> Vec<Named> {
    DATA_STRUCTURE_NAMES
        .iter()
        .enumerate()
        .map(|(id, name)| Named::new(name, id))
        .collect()
}

/// [`data_structures`] sorted by name, stable.
pub fn data_structures_by_name() -> Vec<Named> {
    let all = data_structures();
    BY_NAME.iter().map(|&id| all[id].clone()).collect()
}

/// [`data_structures_by_name`] reversed.
pub fn data_structures_by_name_reversed() -> Vec<Named> {
    let mut v = data_structures_by_name();
    v.reverse();
    v
}

/// `(key, position)` pairs with keys drawn from `keys`. Sorting by key only, a stable sort must
/// leave the positions of equal keys ascending.
pub fn keyed(keys: &[i32]) -> Vec<(i32, usize)> {
    keys.iter().copied().zip(0..).collect()
}

/// Checks `v` is ordered by key, and by position for equal keys.
pub fn is_stably_sorted(v: &[(i32, usize)]) -> bool {
    v.windows(2).all(|w| w[0] <= w[1])
}
