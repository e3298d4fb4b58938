use std::io::Write;

use super::read_ranges;
use crate::compress_coord::{Compressed, Counter};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::io::InputStream;
use crate::mo::{self, Aggregate, Query};

// Pairs of prefixes p, q in the window with p ^ q == k. A subarray [i, j] has xor k iff
// prefixes i - 1 and j form such a pair.
#[derive(Clone, Debug)]
pub struct XorPairs {
    count: Counter,
    partner: Vec<Option<u32>>,
    pairs: i64,
}

impl XorPairs {
    // `prefixes` is the set of values the window may hold.
    pub fn new(prefixes: &Compressed<u64>, k: u64) -> Self {
        let partner = (0..prefixes.len() as u32)
            .map(|id| prefixes.find(&(prefixes.value(id) ^ k)))
            .collect();
        Self {
            count: Counter::new(prefixes.len()),
            partner,
            pairs: 0,
        }
    }

    fn matches(&self, x: u32) -> i64 {
        self.partner[x as usize].map_or(0, |y| self.count.get(y) as i64)
    }
}

impl Aggregate for XorPairs {
    type Value = u32;
    type Aux = ();
    type Answer = i64;

    fn add(&mut self, x: &u32) {
        self.pairs += self.matches(*x);
        self.count.inc(*x);
    }

    fn del(&mut self, x: &u32) {
        self.count.dec(*x);
        self.pairs -= self.matches(*x);
    }

    fn answer(&self, _: &()) -> i64 {
        self.pairs
    }
}

// Prefix xors p[0..=n], p[0] = 0.
pub fn prefix_xors(xs: &[u64]) -> Vec<u64> {
    let mut prefix = Vec::with_capacity(xs.len() + 1);
    prefix.push(0);
    let mut acc = 0;
    for &x in xs {
        acc ^= x;
        prefix.push(acc);
    }
    prefix
}

// Counts subarrays of [l, r] with xor k; the window runs over prefixes l - 1 ..= r,
// i.e. positions [l, r + 1] of the prefix array.
pub fn solve_xor_pairs(
    xs: &[u64],
    k: u64,
    queries: &[Query],
    config: &EngineConfig,
) -> Result<Vec<i64>> {
    for q in queries {
        q.check(xs.len())?;
    }
    let prefix = prefix_xors(xs);
    let c = Compressed::new(prefix.iter().copied());
    let ids = c.map(&prefix);
    let shifted: Vec<Query> = queries
        .iter()
        .map(|q| Query::new(q.id, q.left, q.right + 1))
        .collect();
    mo::solve(&ids, &shifted, XorPairs::new(&c, k), config)
}

// n m k, array, m × (l r)
pub fn run(mut input: &[u8], out: &mut impl Write, config: &EngineConfig) -> Result<()> {
    let n: usize = input.value()?;
    let m: usize = input.value()?;
    let k: u64 = input.value()?;
    let xs: Vec<u64> = input.vec(n)?;
    let queries = read_ranges(&mut input, m)?;

    let answers = solve_xor_pairs(&xs, k, &queries, config)?;
    for a in answers {
        writeln!(out, "{a}")?;
    }
    Ok(())
}
