// Concrete aggregates and their text drivers.
//
// Every driver reads whitespace-separated integers from `input` and writes one line per
// query, in input order, to `out`.

pub mod bitset;
pub mod distinct;
pub mod frequency;
pub mod pairs;
pub mod xor;

use crate::compress_coord::Compressed;
use crate::error::Result;
use crate::io::InputStream;
use crate::mo::Query;

// `m` pairs `l r`, numbered in input order.
pub fn read_ranges(input: &mut impl InputStream, m: usize) -> Result<Vec<Query>> {
    (0..m)
        .map(|id| {
            let l = input.value()?;
            let r = input.value()?;
            Ok(Query::new(id, l, r))
        })
        .collect()
}

// `n`, then n values, then `m` and m ranges.
pub fn read_array_and_ranges(input: &mut impl InputStream) -> Result<(Vec<i64>, Vec<Query>)> {
    let n: usize = input.value()?;
    let xs = input.vec(n)?;
    let m: usize = input.value()?;
    let queries = read_ranges(input, m)?;
    Ok((xs, queries))
}

// Dense ids for count-array aggregates; returns (ids, number of distinct values).
pub fn compress(xs: &[i64]) -> (Vec<u32>, usize) {
    let c = Compressed::new(xs.iter().copied());
    (c.map(xs), c.len())
}
