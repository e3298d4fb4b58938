// Mo's algorithm without deletions.
//
// Queries are grouped by the block of their left end. Within a group the right end
// only grows (the queries are sorted by r), and the segment between the block boundary
// and l is added on top of that, answered, and then rolled back. Queries lying
// inside a single block are answered by a direct scan.
//
// Total adds: O(n) per block for the right ends plus O(B) per query, i.e.
// O(n^2 / B + Q B) = O(n sqrt(Q)) with the tuned block length.

use log::{debug, info};

use super::{query, Blocks, Query};
use crate::config::EngineConfig;
use crate::error::Result;

// Add-only aggregate that can return to any earlier checkpoint.
pub trait Rollback {
    type Value;
    type Aux;
    type Answer;
    type Checkpoint: Clone;

    fn add(&mut self, x: &Self::Value);
    fn answer(&self, aux: &Self::Aux) -> Self::Answer;
    fn checkpoint(&self) -> Self::Checkpoint;
    // Restores the exact state at `checkpoint`, which must have been taken on this
    // aggregate and not yet rolled past.
    fn rollback(&mut self, checkpoint: Self::Checkpoint);
}

// Engine state: the aggregate holds positions (block_end, right] of the current block
// run, on top of the empty state saved in `base`.
pub struct RollbackWindow<S: Rollback> {
    agg: S,
    base: S::Checkpoint,
    blocks: Blocks,
    block: usize,
    right: usize,
    adds: u64,
}

impl<S: Rollback> RollbackWindow<S> {
    pub fn new(agg: S, blocks: Blocks) -> Self {
        let base = agg.checkpoint();
        Self {
            agg,
            base,
            blocks,
            block: 0,
            right: 0,
            adds: 0,
        }
    }

    pub fn aggregate(&self) -> &S {
        &self.agg
    }

    pub fn adds(&self) -> u64 {
        self.adds
    }

    fn add(&mut self, x: &S::Value) {
        self.agg.add(x);
        self.adds += 1;
    }

    // Empties the aggregate and starts a run for block `b`.
    fn restart(&mut self, b: usize) {
        self.agg.rollback(self.base.clone());
        self.block = b;
        self.right = self.blocks.end(b);
    }

    // Any order of queries is answered correctly; sorted by (block of l, r) each block
    // restarts only once.
    pub fn query(&mut self, values: &[S::Value], q: &Query<S::Aux>) -> S::Answer {
        debug_assert!(q.check(values.len()).is_ok());
        let bl = self.blocks.of(q.left);
        let block_end = self.blocks.end(bl);

        if self.blocks.of(q.right) == bl {
            if self.block != bl || self.right != block_end {
                self.restart(bl);
            }
            let checkpoint = self.agg.checkpoint();
            for x in &values[q.left - 1..q.right] {
                self.add(x);
            }
            let ans = self.agg.answer(&q.aux);
            self.agg.rollback(checkpoint);
            return ans;
        }

        if self.block != bl || self.right > q.right {
            self.restart(bl);
        }
        while self.right < q.right {
            self.right += 1;
            self.add(&values[self.right - 1]);
        }

        let checkpoint = self.agg.checkpoint();
        for x in values[q.left - 1..block_end].iter().rev() {
            self.add(x);
        }
        let ans = self.agg.answer(&q.aux);
        self.agg.rollback(checkpoint);
        ans
    }
}

pub fn solve_rollback<S: Rollback>(
    values: &[S::Value],
    queries: &[Query<S::Aux>],
    agg: S,
    config: &EngineConfig,
) -> Result<Vec<S::Answer>> {
    let n = values.len();
    query::validate(queries, n, queries.len(), true)?;

    let blocks = config.blocks(n, queries.len())?;
    debug!(
        "rollback mo: n = {n}, {} queries, block length {}",
        queries.len(),
        blocks.len()
    );

    let mut perm: Vec<usize> = (0..queries.len()).collect();
    perm.sort_unstable_by_key(|&i| (blocks.of(queries[i].left), queries[i].right));

    let mut window = RollbackWindow::new(agg, blocks);
    let mut results: Vec<Option<S::Answer>> = (0..queries.len()).map(|_| None).collect();
    for i in perm {
        let q = &queries[i];
        results[q.id] = Some(window.query(values, q));
    }
    info!(
        "rollback mo: answered {} queries with {} adds",
        queries.len(),
        window.adds()
    );
    Ok(results.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mo::query::from_ranges;

    // Maximum of the window with an undo journal.
    #[derive(Clone, Debug, Default, PartialEq)]
    struct Max {
        best: i64,
        journal: Vec<i64>,
    }

    impl Rollback for Max {
        type Value = i64;
        type Aux = ();
        type Answer = i64;
        type Checkpoint = usize;

        fn add(&mut self, x: &i64) {
            self.journal.push(self.best);
            self.best = self.best.max(*x);
        }
        fn answer(&self, _: &()) -> i64 {
            self.best
        }
        fn checkpoint(&self) -> usize {
            self.journal.len()
        }
        fn rollback(&mut self, checkpoint: usize) {
            while self.journal.len() > checkpoint {
                self.best = self.journal.pop().unwrap();
            }
        }
    }

    fn brute(values: &[i64], l: usize, r: usize) -> i64 {
        values[l - 1..r].iter().copied().fold(0, i64::max)
    }

    #[test]
    fn matches_brute_force_for_every_range() {
        let values: Vec<i64> = (0..17).map(|i| (i * 7 + 3) % 11).collect();
        let n = values.len();
        let ranges: Vec<_> = (1..=n)
            .flat_map(|l| (l..=n).map(move |r| (l, r)))
            .collect();
        for block_len in [None, Some(1), Some(4), Some(17)] {
            let config = EngineConfig {
                block_len,
                ..Default::default()
            };
            let got = solve_rollback(&values, &from_ranges(ranges.clone()), Max::default(), &config)
                .unwrap();
            let expected: Vec<_> = ranges.iter().map(|&(l, r)| brute(&values, l, r)).collect();
            assert_eq!(got, expected);
        }
    }

    #[test]
    fn queries_leave_the_run_state_untouched() {
        let values: Vec<i64> = vec![3, 9, 1, 4, 4, 8, 2, 7, 5];
        let blocks = Blocks::with_len(values.len(), 3).unwrap();
        let mut window = RollbackWindow::new(Max::default(), blocks);

        for (l, r) in [(2, 7), (1, 8), (3, 9), (5, 6), (4, 9), (4, 9)] {
            let q = Query::new(0, l, r);
            let first = window.query(&values, &q);
            let before = window.aggregate().clone();
            let second = window.query(&values, &q);
            assert_eq!(first, second);
            assert_eq!(first, brute(&values, l, r));
            assert_eq!(window.aggregate(), &before);
        }
    }
}
