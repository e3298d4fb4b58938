use std::io::Write;

use super::{compress, read_array_and_ranges};
use crate::compress_coord::Counter;
use crate::config::EngineConfig;
use crate::error::{Error, Result};
use crate::frac::Frac;
use crate::io::InputStream;
use crate::mo::{self, Aggregate, Query, SignedQuery};

// Number of unordered pairs of positions in the window holding equal values.
#[derive(Clone, Debug)]
pub struct EqualPairs {
    count: Counter,
    pairs: i64,
}

impl EqualPairs {
    pub fn new(n_values: usize) -> Self {
        Self {
            count: Counter::new(n_values),
            pairs: 0,
        }
    }
}

impl Aggregate for EqualPairs {
    type Value = u32;
    type Aux = ();
    type Answer = i64;

    fn add(&mut self, x: &u32) {
        self.pairs += self.count.inc(*x) as i64 - 1;
    }

    fn del(&mut self, x: &u32) {
        self.pairs -= self.count.dec(*x) as i64;
    }

    fn answer(&self, _: &()) -> i64 {
        self.pairs
    }
}

// Probability that two distinct positions drawn from [l, r] hold the same value.
pub fn socks(equal_pairs: i64, len: usize) -> Frac {
    let len = len as u64;
    let total = len * len.saturating_sub(1) / 2;
    if total == 0 {
        return Frac::zero();
    }
    Frac::new(equal_pairs as u64, total)
}

pub fn run_socks(mut input: &[u8], out: &mut impl Write, config: &EngineConfig) -> Result<()> {
    let (xs, queries) = read_array_and_ranges(&mut input)?;
    let (ids, n_values) = compress(&xs);
    let answers = mo::solve(&ids, &queries, EqualPairs::new(n_values), config)?;
    for (q, pairs) in queries.iter().zip(answers) {
        writeln!(out, "{}", socks(pairs, q.right - q.left + 1))?;
    }
    Ok(())
}

// Pairs (i, j) with i in [l1, r1], j in [l2, r2] and a[i] == a[j], for r1 < l2.
// With M = [r1 + 1, l2 - 1] in between:
//   cross = P(l1..r2) - P(l1..l2-1) - P(r1+1..r2) + P(M)
// where P counts equal pairs inside a range; the P(M) term is dropped when M is empty.
pub fn cross_terms(
    id: usize,
    (l1, r1): (usize, usize),
    (l2, r2): (usize, usize),
) -> Result<Vec<SignedQuery>> {
    if l1 > r1 || l2 > r2 || r1 >= l2 {
        return Err(Error::OverlappingIntervals { id, l1, r1, l2, r2 });
    }
    let term = |l, r, sign| SignedQuery {
        query: Query::new(id, l, r),
        sign,
    };
    let mut terms = vec![term(l1, r2, 1), term(l1, l2 - 1, -1), term(r1 + 1, r2, -1)];
    if r1 + 1 < l2 {
        terms.push(term(r1 + 1, l2 - 1, 1));
    }
    Ok(terms)
}

// n, array, m, m × (l1 r1 l2 r2)
pub fn run_cross(mut input: &[u8], out: &mut impl Write, config: &EngineConfig) -> Result<()> {
    let n: usize = input.value()?;
    let xs: Vec<i64> = input.vec(n)?;
    let m: usize = input.value()?;
    let mut terms = vec![];
    for id in 0..m {
        let [l1, r1, l2, r2]: [usize; 4] = [
            input.value()?,
            input.value()?,
            input.value()?,
            input.value()?,
        ];
        terms.extend(cross_terms(id, (l1, r1), (l2, r2))?);
    }

    let (ids, n_values) = compress(&xs);
    let answers = mo::solve_signed(&ids, &terms, m, EqualPairs::new(n_values), config)?;
    for a in answers {
        writeln!(out, "{a}")?;
    }
    Ok(())
}
