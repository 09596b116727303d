//! Least significant digit radix sort in base 10.
//!
//! Negative numbers are handled by the digit itself: truncating division keeps the sign, so the
//! digits of a negative number range over `-9..=0`. Offsetting every digit by 9 maps `-9..=9` onto
//! 19 buckets, which orders negative values before positive ones in every pass.

const BASE: i32 = 10;
const BUCKET_COUNT: usize = 19;
const DIGIT_OFFSET: i32 = 9;

/// Sorts the slice in ascending order.
///
/// This sort is stable and not adaptive. Each pass distributes all elements into buckets and
/// collects them again, so the cost is *O*(*k* \* *n*) with *k* the number of decimal digits of
/// the largest magnitude element.
#[inline]
pub fn sort(arr: &mut [i32]) {
    sort_by_key(arr, |&num| num);
}

/// Sorts the slice in ascending order of `key`, keeping elements with equal keys in input order.
///
/// `key` must return the same value for an element every time it is called.
pub fn sort_by_key<T, K>(arr: &mut [T], mut key: K)
where
    T: Clone,
    K: FnMut(&T) -> i32,
{
    if arr.len() < 2 {
        return;
    }

    let mut buckets: [Vec<T>; BUCKET_COUNT] = std::array::from_fn(|_| Vec::new());
    let mut place: i32 = 1;

    loop {
        let mut more_digits = false;

        for elem in arr.iter() {
            let shifted = key(elem) / place;
            if shifted / BASE != 0 {
                more_digits = true;
            }
            buckets[bucket_index(shifted)].push(elem.clone());
        }

        // Drain in bucket order, which also clears the buckets for the next pass.
        let mut pos = 0;
        for bucket in buckets.iter_mut() {
            for elem in bucket.drain(..) {
                arr[pos] = elem;
                pos += 1;
            }
        }

        if !more_digits {
            break;
        }

        // Some key had a tens digit left, so `place * BASE <= |key|` and this can't overflow.
        place *= BASE;
    }
}

#[inline]
fn bucket_index(shifted: i32) -> usize {
    ((shifted % BASE) + DIGIT_OFFSET) as usize
}
