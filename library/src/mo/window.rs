use std::borrow::Borrow;

use log::{debug, info, trace};

use super::{order, query, Query, SignedQuery};
use crate::config::EngineConfig;
use crate::error::Result;

// Per-problem state of a Mo's window: `add` and `del` are called once per element
// entering and leaving the window, `answer` reads the current state.
pub trait Aggregate {
    type Value;
    type Aux;
    type Answer;

    fn add(&mut self, x: &Self::Value);
    fn del(&mut self, x: &Self::Value);
    fn answer(&self, aux: &Self::Aux) -> Self::Answer;
}

// Inclusive window [left, right] over 1-based positions, starting out empty (1, 0).
// The aggregate always equals `add` applied to exactly the values inside the window.
#[derive(Clone, Debug)]
pub struct Window<S> {
    left: usize,
    right: usize,
    agg: S,
    steps: u64,
}

impl<S: Aggregate> Window<S> {
    pub fn new(agg: S) -> Self {
        Self {
            left: 1,
            right: 0,
            agg,
            steps: 0,
        }
    }

    pub fn bounds(&self) -> (usize, usize) {
        (self.left, self.right)
    }

    #[inline]
    pub fn contains(&self, pos: usize) -> bool {
        self.left <= pos && pos <= self.right
    }

    pub fn aggregate(&self) -> &S {
        &self.agg
    }

    pub(crate) fn aggregate_mut(&mut self) -> &mut S {
        &mut self.agg
    }

    // Total number of add/del calls so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn answer(&self, aux: &S::Aux) -> S::Answer {
        self.agg.answer(aux)
    }

    // Moves one position at a time: both ends grow before either shrinks, so the window
    // never passes through a state with left > right + 1 and nothing is removed before
    // it was added.
    pub fn move_to(&mut self, values: &[S::Value], l: usize, r: usize) {
        debug_assert!(1 <= l && l <= r + 1 && r <= values.len());
        while self.right < r {
            self.right += 1;
            self.agg.add(&values[self.right - 1]);
            self.steps += 1;
        }
        while self.left > l {
            self.left -= 1;
            self.agg.add(&values[self.left - 1]);
            self.steps += 1;
        }
        while self.left < l {
            self.agg.del(&values[self.left - 1]);
            self.left += 1;
            self.steps += 1;
        }
        while self.right > r {
            self.agg.del(&values[self.right - 1]);
            self.right -= 1;
            self.steps += 1;
        }
    }

    // Replays the current window into `fresh`, for checking against the incremental state.
    pub fn rebuild(&self, values: &[S::Value], mut fresh: S) -> S {
        for x in &values[self.left - 1..self.right] {
            fresh.add(x);
        }
        fresh
    }
}

fn sweep<S, Q>(
    values: &[S::Value],
    queries: &[Q],
    agg: S,
    config: &EngineConfig,
    mut record: impl FnMut(&Q, S::Answer),
) -> Result<Window<S>>
where
    S: Aggregate,
    Q: Borrow<Query<S::Aux>>,
{
    let n = values.len();
    let blocks = config.blocks(n, queries.len())?;
    debug!(
        "mo: n = {n}, {} queries, block length {} ({} blocks), {:?} order",
        queries.len(),
        blocks.len(),
        blocks.count(),
        config.order
    );

    let mut window = Window::new(agg);
    for i in order::sort::<Q, S::Aux>(queries, &blocks, config.order) {
        let q: &Query<S::Aux> = queries[i].borrow();
        window.move_to(values, q.left, q.right);
        trace!("query #{} [{}, {}]: {} steps", q.id, q.left, q.right, window.steps());
        let ans = window.answer(&q.aux);
        record(&queries[i], ans);
    }
    info!(
        "mo: answered {} queries with {} pointer steps",
        queries.len(),
        window.steps()
    );
    Ok(window)
}

// Answers every query; the i-th result belongs to id i.
// Query ids must be exactly 0..queries.len().
pub fn solve<S: Aggregate>(
    values: &[S::Value],
    queries: &[Query<S::Aux>],
    agg: S,
    config: &EngineConfig,
) -> Result<Vec<S::Answer>> {
    query::validate(queries, values.len(), queries.len(), true)?;

    let mut results: Vec<Option<S::Answer>> = (0..queries.len()).map(|_| None).collect();
    sweep(values, queries, agg, config, |q, ans| results[q.id] = Some(ans))?;
    Ok(results.into_iter().flatten().collect())
}

// Answers a batch of inclusion-exclusion terms: result[id] = sum of sign * answer over the
// terms carrying that id.
pub fn solve_signed<S>(
    values: &[S::Value],
    terms: &[SignedQuery<S::Aux>],
    n_results: usize,
    agg: S,
    config: &EngineConfig,
) -> Result<Vec<i64>>
where
    S: Aggregate,
    S::Answer: Into<i64>,
{
    query::validate(terms.iter().map(|t| &t.query), values.len(), n_results, false)?;

    let mut results = vec![0i64; n_results];
    sweep(values, terms, agg, config, |t, ans| {
        results[t.query.id] += t.sign * ans.into();
    })?;
    Ok(results)
}
