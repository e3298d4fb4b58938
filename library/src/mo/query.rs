use crate::error::{Error, Result};

// Inclusive 1-based range [left, right]; `id` is the slot its answer is reported in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Query<A = ()> {
    pub left: usize,
    pub right: usize,
    pub aux: A,
    pub id: usize,
}

impl Query {
    pub fn new(id: usize, left: usize, right: usize) -> Self {
        Self::with_aux(id, left, right, ())
    }
}

impl<A> Query<A> {
    pub fn with_aux(id: usize, left: usize, right: usize, aux: A) -> Self {
        Self {
            left,
            right,
            aux,
            id,
        }
    }

    pub fn check(&self, n: usize) -> Result<()> {
        let &Self {
            left, right, id, ..
        } = self;
        if left > right {
            return Err(Error::InvertedQuery { id, left, right });
        }
        if left == 0 || right > n {
            return Err(Error::QueryOutOfRange { id, left, right, n });
        }
        Ok(())
    }
}

// One term of an inclusion-exclusion decomposition; its answer is
// multiplied by `sign` and summed into slot `query.id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignedQuery<A = ()> {
    pub query: Query<A>,
    pub sign: i64,
}

impl<A> std::borrow::Borrow<Query<A>> for SignedQuery<A> {
    fn borrow(&self) -> &Query<A> {
        &self.query
    }
}

// Ranges numbered in input order.
pub fn from_ranges(ranges: impl IntoIterator<Item = (usize, usize)>) -> Vec<Query> {
    ranges
        .into_iter()
        .enumerate()
        .map(|(id, (l, r))| Query::new(id, l, r))
        .collect()
}

// Every query in bounds, every id in 0..n_results, and (when `unique`) no id twice.
pub fn validate<'a, A: 'a>(
    queries: impl IntoIterator<Item = &'a Query<A>>,
    n: usize,
    n_results: usize,
    unique: bool,
) -> Result<()> {
    let mut seen = vec![false; n_results];
    for q in queries {
        q.check(n)?;
        if q.id >= n_results {
            return Err(Error::BadQueryId {
                id: q.id,
                n_results,
            });
        }
        if unique && std::mem::replace(&mut seen[q.id], true) {
            return Err(Error::DuplicateQueryId(q.id));
        }
    }
    Ok(())
}
