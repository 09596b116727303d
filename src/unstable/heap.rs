/// Returns the elements of `data` in ascending order in a newly allocated vector of the same
/// length. `data` is left untouched.
///
/// The copy is turned into a binary min-heap in one bottom-up construction step, *O*(*n*), and
/// then drained one minimum at a time, *O*(log(*n*)) each. Not stable and not adaptive.
pub fn sorted(data: &[i32]) -> Vec<i32> {
    let mut heap = data.to_vec();
    let is_less = &mut |a: &i32, b: &i32| a < b;

    heapify(&mut heap, is_less);

    let mut out = Vec::with_capacity(heap.len());
    while let Some(min) = pop_min(&mut heap, is_less) {
        out.push(min);
    }

    out
}

/// Establishes the heap invariant for all of `v`, sifting down every inner node starting from the
/// last one.
fn heapify<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    for node in (0..len / 2).rev() {
        sift_down(v, node, is_less);
    }
}

/// Removes and returns the smallest element, or `None` if the heap is empty.
fn pop_min<T, F>(heap: &mut Vec<T>, is_less: &mut F) -> Option<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let last = heap.len().checked_sub(1)?;
    crate::swap(heap, 0, last);
    let min = heap.pop();
    sift_down(heap, 0, is_less);
    min
}

// This binary heap respects the invariant `parent <= child`.
fn sift_down<T, F>(v: &mut [T], mut node: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    loop {
        // Children of `node`.
        let mut child = 2 * node + 1;
        if child >= len {
            break;
        }

        // Choose the lesser child.
        if child + 1 < len && is_less(&v[child + 1], &v[child]) {
            child += 1;
        }

        // Stop if the invariant holds at `node`.
        if !is_less(&v[child], &v[node]) {
            break;
        }

        v.swap(node, child);
        node = child;
    }
}
