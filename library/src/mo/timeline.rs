// Mo's algorithm with point updates ("Mo's with time").
//
// Each query is tagged with the number of updates preceding it. A third pointer walks
// the update list one record at a time, patching the aggregate whenever the updated
// position lies inside the current window.

use log::{debug, info};

use super::{order, query, Aggregate, Query, Window};
use crate::config::EngineConfig;
use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Modification<V> {
    pub position: usize,
    pub old: V,
    pub new: V,
}

// Derives (position, old, new) records by replaying `updates` over `base`.
pub fn modifications<V: Clone>(
    base: &[V],
    updates: &[(usize, V)],
) -> Result<Vec<Modification<V>>> {
    let mut values = base.to_vec();
    updates
        .iter()
        .enumerate()
        .map(|(index, (position, new))| {
            let position = *position;
            if position == 0 || position > values.len() {
                return Err(Error::ModificationOutOfRange {
                    index,
                    position,
                    n: values.len(),
                });
            }
            let old = std::mem::replace(&mut values[position - 1], new.clone());
            Ok(Modification {
                position,
                old,
                new: new.clone(),
            })
        })
        .collect()
}

// A range query evaluated after the first `time` modifications.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimedQuery<A = ()> {
    pub query: Query<A>,
    pub time: usize,
}

pub struct Timeline<S: Aggregate> {
    values: Vec<S::Value>,
    mods: Vec<Modification<S::Value>>,
    time: usize,
    window: Window<S>,
    time_steps: u64,
}

impl<S> Timeline<S>
where
    S: Aggregate,
    S::Value: Clone,
{
    pub fn new(base: Vec<S::Value>, mods: Vec<Modification<S::Value>>, agg: S) -> Self {
        Self {
            values: base,
            mods,
            time: 0,
            window: Window::new(agg),
            time_steps: 0,
        }
    }

    pub fn time(&self) -> usize {
        self.time
    }

    pub fn values(&self) -> &[S::Value] {
        &self.values
    }

    pub fn window(&self) -> &Window<S> {
        &self.window
    }

    pub fn time_steps(&self) -> u64 {
        self.time_steps
    }

    // Applies modification #time and advances time by one.
    pub fn apply(&mut self) {
        debug_assert!(self.time < self.mods.len());
        let m = &self.mods[self.time];
        if self.window.contains(m.position) {
            let agg = self.window.aggregate_mut();
            agg.del(&m.old);
            agg.add(&m.new);
        }
        self.values[m.position - 1] = m.new.clone();
        self.time += 1;
        self.time_steps += 1;
    }

    // Reverts the most recent modification and steps time back by one.
    pub fn undo(&mut self) {
        debug_assert!(self.time > 0);
        self.time -= 1;
        let m = &self.mods[self.time];
        if self.window.contains(m.position) {
            let agg = self.window.aggregate_mut();
            agg.del(&m.new);
            agg.add(&m.old);
        }
        self.values[m.position - 1] = m.old.clone();
        self.time_steps += 1;
    }

    pub fn travel(&mut self, time: usize) {
        while self.time < time {
            self.apply();
        }
        while self.time > time {
            self.undo();
        }
    }

    pub fn move_to(&mut self, l: usize, r: usize) {
        self.window.move_to(&self.values, l, r);
    }

    pub fn answer(&self, aux: &S::Aux) -> S::Answer {
        self.window.answer(aux)
    }
}

pub fn solve_timeline<S>(
    base: &[S::Value],
    mods: &[Modification<S::Value>],
    queries: &[TimedQuery<S::Aux>],
    agg: S,
    config: &EngineConfig,
) -> Result<Vec<S::Answer>>
where
    S: Aggregate,
    S::Value: Clone,
{
    let n = base.len();
    query::validate(queries.iter().map(|t| &t.query), n, queries.len(), true)?;
    for t in queries {
        if t.time > mods.len() {
            return Err(Error::TimeOutOfRange {
                id: t.query.id,
                time: t.time,
                n_modifications: mods.len(),
            });
        }
    }
    for (index, m) in mods.iter().enumerate() {
        if m.position == 0 || m.position > n {
            return Err(Error::ModificationOutOfRange {
                index,
                position: m.position,
                n,
            });
        }
    }

    let blocks = config.timeline_blocks(n)?;
    debug!(
        "timeline mo: n = {n}, {} queries, {} modifications, block length {}",
        queries.len(),
        mods.len(),
        blocks.len()
    );

    let mut perm: Vec<usize> = (0..queries.len()).collect();
    perm.sort_unstable_by_key(|&i| {
        let t = &queries[i];
        order::timeline_key(&blocks, t.query.left, t.query.right, t.time)
    });

    let mut timeline = Timeline::new(base.to_vec(), mods.to_vec(), agg);
    let mut results: Vec<Option<S::Answer>> = (0..queries.len()).map(|_| None).collect();
    for i in perm {
        let TimedQuery { query: q, time } = &queries[i];
        timeline.travel(*time);
        timeline.move_to(q.left, q.right);
        results[q.id] = Some(timeline.answer(&q.aux));
    }
    info!(
        "timeline mo: answered {} queries with {} window steps and {} time steps",
        queries.len(),
        timeline.window().steps(),
        timeline.time_steps()
    );
    Ok(results.into_iter().flatten().collect())
}
