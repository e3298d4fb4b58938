use std::io::Write;

use super::{compress, read_array_and_ranges};
use crate::compress_coord::{Compressed, Counter};
use crate::config::EngineConfig;
use crate::error::{Error, Result};
use crate::io::InputStream;
use crate::mo::{self, Aggregate, PathQuery, Query, TimedQuery};
use crate::tree::EulerTour;

// Number of distinct values in the window.
#[derive(Clone, Debug)]
pub struct DistinctCount {
    count: Counter,
    distinct: u32,
}

impl DistinctCount {
    pub fn new(n_values: usize) -> Self {
        Self {
            count: Counter::new(n_values),
            distinct: 0,
        }
    }
}

impl Aggregate for DistinctCount {
    type Value = u32;
    type Aux = ();
    type Answer = u32;

    fn add(&mut self, x: &u32) {
        if self.count.inc(*x) == 1 {
            self.distinct += 1;
        }
    }

    fn del(&mut self, x: &u32) {
        if self.count.dec(*x) == 0 {
            self.distinct -= 1;
        }
    }

    fn answer(&self, _: &()) -> u32 {
        self.distinct
    }
}

fn write_lines<T: std::fmt::Display>(out: &mut impl Write, answers: &[T]) -> Result<()> {
    for a in answers {
        writeln!(out, "{a}")?;
    }
    Ok(())
}

// n, array, m, m × (l r)
pub fn run(mut input: &[u8], out: &mut impl Write, config: &EngineConfig) -> Result<()> {
    let (xs, queries) = read_array_and_ranges(&mut input)?;
    let (ids, n_values) = compress(&xs);
    let answers = mo::solve(&ids, &queries, DistinctCount::new(n_values), config)?;
    write_lines(out, &answers)
}

// n m, array, m × (Q l r | R p v); one line per Q.
pub fn run_timeline(mut input: &[u8], out: &mut impl Write, config: &EngineConfig) -> Result<()> {
    let n: usize = input.value()?;
    let m: usize = input.value()?;
    let xs: Vec<i64> = input.vec(n)?;

    let mut queries = vec![];
    let mut updates: Vec<(usize, i64)> = vec![];
    for _ in 0..m {
        match input.word()?.as_str() {
            "Q" => {
                let l = input.value()?;
                let r = input.value()?;
                let query = Query::new(queries.len(), l, r);
                queries.push(TimedQuery {
                    query,
                    time: updates.len(),
                });
            }
            "R" => {
                let p = input.value()?;
                let v = input.value()?;
                updates.push((p, v));
            }
            kind => return Err(Error::UnknownQueryKind(kind.to_owned())),
        }
    }

    let c = Compressed::new(xs.iter().chain(updates.iter().map(|(_, v)| v)).copied());
    let ids = c.map(&xs);
    let updates: Vec<(usize, u32)> = updates.iter().map(|&(p, v)| (p, c.id(&v))).collect();
    let mods = mo::modifications(&ids, &updates)?;

    let answers = mo::solve_timeline(&ids, &mods, &queries, DistinctCount::new(c.len()), config)?;
    write_lines(out, &answers)
}

// 1-based node label to a 0-based id.
fn read_node(input: &mut impl InputStream, n: usize) -> Result<u32> {
    let node: usize = input.value()?;
    if node == 0 || node > n {
        return Err(Error::NodeOutOfRange { node, n });
    }
    Ok(node as u32 - 1)
}

// n m, node values, n - 1 edges, m × (u v); rooted at node 1.
pub fn run_tree(mut input: &[u8], out: &mut impl Write, config: &EngineConfig) -> Result<()> {
    let n: usize = input.value()?;
    let m: usize = input.value()?;
    let xs: Vec<i64> = input.vec(n)?;
    let mut edges = vec![];
    for _ in 1..n {
        let u = read_node(&mut input, n)?;
        let v = read_node(&mut input, n)?;
        edges.push((u, v));
    }
    let mut queries = vec![];
    for id in 0..m {
        let u = read_node(&mut input, n)?;
        let v = read_node(&mut input, n)?;
        queries.push(PathQuery::new(id, u, v));
    }

    let tour = EulerTour::new(n, &edges, 0)?;
    let (ids, n_values) = compress(&xs);
    let answers = mo::solve_tree_path(tour, ids, &queries, DistinctCount::new(n_values), config)?;
    write_lines(out, &answers)
}
