use std::io::Write;

use super::read_array_and_ranges;
use crate::compress_coord::{Compressed, Counter};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::mo::{self, Rollback};

// max over values v in the window of weight(v) * count(v); the maximum cannot be
// repaired after a removal, so it is kept add-only with an undo journal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeightedMaxFrequency {
    count: Counter,
    weight: Vec<i64>,
    best: i64,
    // (value added, best before the add)
    journal: Vec<(u32, i64)>,
}

impl WeightedMaxFrequency {
    pub fn new(weight: Vec<i64>) -> Self {
        Self {
            count: Counter::new(weight.len()),
            weight,
            best: 0,
            journal: vec![],
        }
    }

    // Highest multiplicity of any value.
    pub fn frequency(n_values: usize) -> Self {
        Self::new(vec![1; n_values])
    }

    // Highest v * count(v); ids are mapped back to their values.
    pub fn importance(values: &Compressed<i64>) -> Self {
        Self::new((0..values.len() as u32).map(|id| *values.value(id)).collect())
    }
}

impl Rollback for WeightedMaxFrequency {
    type Value = u32;
    type Aux = ();
    type Answer = i64;
    type Checkpoint = usize;

    fn add(&mut self, x: &u32) {
        self.journal.push((*x, self.best));
        let c = self.count.inc(*x) as i64;
        let score = self.weight[*x as usize] * c;
        // the journal is as long as the window, so len 1 means it was empty
        if self.journal.len() == 1 || score > self.best {
            self.best = score;
        }
    }

    fn answer(&self, _: &()) -> i64 {
        self.best
    }

    fn checkpoint(&self) -> usize {
        self.journal.len()
    }

    fn rollback(&mut self, checkpoint: usize) {
        while self.journal.len() > checkpoint {
            let Some((x, best)) = self.journal.pop() else {
                break;
            };
            self.count.dec(x);
            self.best = best;
        }
    }
}

// n, array, m, m × (l r)
pub fn run_max_frequency(
    mut input: &[u8],
    out: &mut impl Write,
    config: &EngineConfig,
) -> Result<()> {
    let (xs, queries) = read_array_and_ranges(&mut input)?;
    let c = Compressed::new(xs.iter().copied());
    let agg = WeightedMaxFrequency::frequency(c.len());
    let answers = mo::solve_rollback(&c.map(&xs), &queries, agg, config)?;
    for a in answers {
        writeln!(out, "{a}")?;
    }
    Ok(())
}

pub fn run_importance(mut input: &[u8], out: &mut impl Write, config: &EngineConfig) -> Result<()> {
    let (xs, queries) = read_array_and_ranges(&mut input)?;
    let c = Compressed::new(xs.iter().copied());
    let agg = WeightedMaxFrequency::importance(&c);
    let answers = mo::solve_rollback(&c.map(&xs), &queries, agg, config)?;
    for a in answers {
        writeln!(out, "{a}")?;
    }
    Ok(())
}
