use std::env;

use once_cell::sync::OnceCell;
use rand::distributions::Alphanumeric;
use rand::prelude::*;
use zipf::ZipfDistribution;

static SEED: OnceCell<u64> = OnceCell::new();

/// Seed for every generated pattern. Read once from `OVERRIDE_SEED`, or drawn at random and
/// printed so that a failing run can be reproduced.
pub fn random_init_seed() -> u64 {
    *SEED.get_or_init(|| {
        let seed = match env::var("OVERRIDE_SEED") {
            Ok(val) => val
                .parse::<u64>()
                .unwrap_or_else(|_| panic!("OVERRIDE_SEED is not a u64: {val}")),
            Err(_) => thread_rng().gen(),
        };

        eprintln!("Seed: {seed}");
        seed
    })
}

fn new_rng(len: usize) -> StdRng {
    StdRng::seed_from_u64(random_init_seed().wrapping_add(len as u64))
}

/// Fixed seed RNG for tests that must see the same input on every run.
pub fn fixed_rng() -> StdRng {
    StdRng::seed_from_u64(0x5EED_u64)
}

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_rng(len);
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

/// Random values in `range`, lots of duplicates for short ranges.
pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    let mut rng = new_rng(len);
    let dist: rand::distributions::Uniform<i32> = range.into();
    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

/// Zipfian distributed values, a few values make up most of the input.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_rng(len);
    let dist = ZipfDistribution::new(len, exponent).expect("valid zipf parameters");
    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
}

/// Alternating ascending and descending runs of random values.
pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random(len);
    let chunk_len = (len / saw_count.max(1)).max(1);

    for (i, chunk) in vals.chunks_mut(chunk_len).enumerate() {
        if i % 2 == 0 {
            chunk.sort_unstable();
        } else {
            chunk.sort_unstable_by(|a, b| b.cmp(a));
        }
    }

    vals
}

/// Random alphanumeric strings of length `0..=max_len`.
pub fn random_strings(len: usize, max_len: usize) -> Vec<String> {
    let mut rng = new_rng(len);
    (0..len)
        .map(|_| {
            let str_len = rng.gen_range(0..=max_len);
            (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(str_len)
                .map(char::from)
                .collect()
        })
        .collect()
}
