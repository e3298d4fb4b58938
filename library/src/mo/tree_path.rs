// Mo's algorithm on tree paths.
//
// The bracket sequence lists every node twice. A node occurring exactly once in
// [exit(u), enter(v)] lies on the path u .. v (lca excluded), and one occurring twice
// is in a closed subtree off the path. So the window toggles a node on every
// occurrence, and the lca is toggled in by hand for the duration of the answer.

use log::{debug, info};

use super::{order, query, Aggregate, Query, Window};
use crate::bitvec::BitVec;
use crate::config::EngineConfig;
use crate::error::{Error, Result};
use crate::tree::{EulerTour, Lca};

// Path between two 0-based nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathQuery<A = ()> {
    pub u: u32,
    pub v: u32,
    pub aux: A,
    pub id: usize,
}

impl PathQuery {
    pub fn new(id: usize, u: u32, v: u32) -> Self {
        Self { u, v, aux: (), id }
    }
}

// A path as a range of the bracket sequence, plus the lca when it is not covered by it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathRange {
    pub left: usize,
    pub right: usize,
    pub lca: Option<u32>,
}

// Wraps a node-value aggregate so that the window runs over node ids: the first
// occurrence of a node adds its value, the second removes it.
pub struct Toggle<S: Aggregate> {
    on: BitVec,
    values: Vec<S::Value>,
    inner: S,
}

impl<S: Aggregate> Toggle<S> {
    pub fn new(values: Vec<S::Value>, inner: S) -> Self {
        Self {
            on: BitVec::zero_bits(values.len()),
            values,
            inner,
        }
    }

    pub fn is_on(&self, u: u32) -> bool {
        self.on.get(u as usize)
    }

    pub(crate) fn flip(&mut self, u: u32) {
        if self.on.toggle(u as usize) {
            self.inner.add(&self.values[u as usize]);
        } else {
            self.inner.del(&self.values[u as usize]);
        }
    }
}

impl<S: Aggregate> Aggregate for Toggle<S> {
    type Value = u32;
    type Aux = S::Aux;
    type Answer = S::Answer;

    fn add(&mut self, u: &u32) {
        self.flip(*u);
    }

    fn del(&mut self, u: &u32) {
        self.flip(*u);
    }

    fn answer(&self, aux: &S::Aux) -> S::Answer {
        self.inner.answer(aux)
    }
}

pub struct TreePath<S: Aggregate> {
    tour: EulerTour,
    lca: Lca,
    window: Window<Toggle<S>>,
}

impl<S: Aggregate> TreePath<S> {
    pub fn new(tour: EulerTour, node_values: Vec<S::Value>, agg: S) -> Self {
        debug_assert_eq!(tour.len(), node_values.len());
        let lca = Lca::new(&tour.parent, &tour.depth);
        Self {
            tour,
            lca,
            window: Window::new(Toggle::new(node_values, agg)),
        }
    }

    pub fn window(&self) -> &Window<Toggle<S>> {
        &self.window
    }

    pub fn range(&self, u: u32, v: u32) -> PathRange {
        let tour = &self.tour;
        let (u, v) = if tour.enter[u as usize] <= tour.enter[v as usize] {
            (u, v)
        } else {
            (v, u)
        };
        let w = self.lca.lca(u, v);
        if w == u {
            PathRange {
                left: tour.enter[u as usize] as usize,
                right: tour.enter[v as usize] as usize,
                lca: None,
            }
        } else {
            PathRange {
                left: tour.exit[u as usize] as usize,
                right: tour.enter[v as usize] as usize,
                lca: Some(w),
            }
        }
    }

    pub fn answer_range(&mut self, path: PathRange, aux: &S::Aux) -> S::Answer {
        self.window.move_to(&self.tour.seq, path.left, path.right);
        if let Some(w) = path.lca {
            self.window.aggregate_mut().flip(w);
        }
        let ans = self.window.answer(aux);
        if let Some(w) = path.lca {
            self.window.aggregate_mut().flip(w);
        }
        ans
    }

    pub fn query(&mut self, u: u32, v: u32, aux: &S::Aux) -> S::Answer {
        let path = self.range(u, v);
        self.answer_range(path, aux)
    }
}

pub fn solve_tree_path<S: Aggregate>(
    tour: EulerTour,
    node_values: Vec<S::Value>,
    queries: &[PathQuery<S::Aux>],
    agg: S,
    config: &EngineConfig,
) -> Result<Vec<S::Answer>> {
    let n = tour.len();
    if node_values.len() != n {
        return Err(Error::InvalidTree("expected one value per node"));
    }
    for q in queries {
        for node in [q.u, q.v] {
            if node as usize >= n {
                // reported 1-based
                return Err(Error::NodeOutOfRange {
                    node: node as usize + 1,
                    n,
                });
            }
        }
    }

    let mut engine = TreePath::new(tour, node_values, agg);
    let paths: Vec<PathRange> = queries.iter().map(|q| engine.range(q.u, q.v)).collect();
    let ranges: Vec<Query> = paths
        .iter()
        .zip(queries)
        .map(|(p, q)| Query::new(q.id, p.left, p.right))
        .collect();
    query::validate(&ranges, 2 * n, queries.len(), true)?;

    let blocks = config.blocks(2 * n, queries.len())?;
    debug!(
        "tree mo: {n} nodes, {} queries, block length {} over the bracket sequence",
        queries.len(),
        blocks.len()
    );

    let mut results: Vec<Option<S::Answer>> = (0..queries.len()).map(|_| None).collect();
    for i in order::sort::<Query, ()>(&ranges, &blocks, config.order) {
        results[queries[i].id] = Some(engine.answer_range(paths[i], &queries[i].aux));
    }
    info!(
        "tree mo: answered {} queries with {} pointer steps",
        queries.len(),
        engine.window().steps()
    );
    Ok(results.into_iter().flatten().collect())
}
