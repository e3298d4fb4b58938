// Query orderings for Mo's algorithm.
//
// Moving from one range query [l, r] to another [l', r'] costs the Manhattan distance
// |l - l'| + |r - r'|, so an ordering is a heuristic tour through the query points.
// For Q random points in a square of side N the shortest tour is O(N sqrt(Q))
// (Beardwood-Halton-Hammersley), so no ordering escapes that bound; the orderings here
// attain it.

use std::borrow::Borrow;

use super::{Blocks, Query};
use crate::config::Order;

// Flipping the bits reverses the order, so odd blocks sweep r upwards and
// even blocks sweep it back down.
#[inline]
fn flip_by_parity(b: usize, key: usize) -> usize {
    if b % 2 == 1 {
        key
    } else {
        !key
    }
}

// Simple while efficient. Requires almost no precomputation cost.
pub fn snake_key(blocks: &Blocks, l: usize, r: usize) -> (usize, usize) {
    let bl = blocks.of(l);
    (bl, flip_by_parity(bl, r))
}

// Permutation of `queries` in processing order.
pub fn sort<Q, A>(queries: &[Q], blocks: &Blocks, order: Order) -> Vec<usize>
where
    Q: Borrow<Query<A>>,
{
    let mut perm: Vec<usize> = (0..queries.len()).collect();
    match order {
        Order::Snake => perm.sort_unstable_by_key(|&i| {
            let q: &Query<A> = queries[i].borrow();
            snake_key(blocks, q.left, q.right)
        }),
        Order::Hilbert => {
            // Hilbert keys are costly; compute once per query.
            let key = hilbert_order(blocks.n() + 1);
            perm.sort_by_cached_key(|&i| {
                let q: &Query<A> = queries[i].borrow();
                key(q.left as u32, q.right as u32)
            });
        }
    }
    perm
}

// Key (block of l, block of r, time); the second key alternates with the parity of the
// first, and the third with the parity of the second.
pub fn timeline_key(blocks: &Blocks, l: usize, r: usize, time: usize) -> (usize, usize, usize) {
    let (bl, br) = (blocks.of(l), blocks.of(r));
    (bl, flip_by_parity(bl, br), flip_by_parity(br, time))
}

// Space-filling curve of TSP for random sampled points.
// https://codeforces.com/blog/entry/61203
// https://codeforces.com/blog/entry/115590
pub fn hilbert_order(n_lattice: usize) -> impl Fn(u32, u32) -> i64 {
    assert!(n_lattice > 0);
    let log2n_ceil = usize::BITS - 1 - n_lattice.next_power_of_two().leading_zeros();

    move |l, r| {
        debug_assert!(l < n_lattice as u32);
        debug_assert!(r < n_lattice as u32);
        hilbert_rec(l, r, log2n_ceil)
    }
}

fn hilbert_rec(mut x: u32, mut y: u32, mut exp: u32) -> i64 {
    let mut res = 0;
    let mut sign = 1;
    let mut rot = 0;

    while exp > 0 {
        let w_half = 1 << (exp - 1);
        let quadrant = match (x < w_half, y < w_half) {
            (true, true) => rot % 4,
            (false, true) => (rot + 1) % 4,
            (false, false) => (rot + 2) % 4,
            (true, false) => (rot + 3) % 4,
        };
        rot = match quadrant {
            0 => (rot + 3) % 4,
            3 => (rot + 1) % 4,
            _ => rot,
        };

        x &= !w_half;
        y &= !w_half;

        let square_area_half: i64 = 1 << (2 * exp - 2);
        res += sign * quadrant as i64 * square_area_half;
        if quadrant == 0 || quadrant == 3 {
            res += sign * (square_area_half - 1);
            sign = -sign;
        };

        exp -= 1;
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mo::query::from_ranges;

    #[test]
    fn snake_alternates_per_block() {
        let blocks = Blocks::with_len(9, 3).unwrap();
        let queries = from_ranges([(1, 9), (2, 4), (4, 5), (5, 9), (7, 8), (8, 9), (3, 3)]);
        let perm = sort::<_, ()>(&queries, &blocks, Order::Snake);
        let ranges: Vec<_> = perm
            .iter()
            .map(|&i| (queries[i].left, queries[i].right))
            .collect();
        // block 1 ascending r, block 2 descending r, block 3 ascending r
        assert_eq!(
            ranges,
            [(3, 3), (2, 4), (1, 9), (5, 9), (4, 5), (7, 8), (8, 9)]
        );
    }

    #[test]
    fn timeline_key_alternates() {
        let blocks = Blocks::with_len(9, 3).unwrap();
        let mut keys = [(1, 2, 5), (1, 2, 1), (1, 5, 3), (1, 5, 7), (4, 4, 0), (4, 9, 0)];
        keys.sort_by_key(|&(l, r, t)| timeline_key(&blocks, l, r, t));
        assert_eq!(
            keys,
            [(1, 2, 1), (1, 2, 5), (1, 5, 7), (1, 5, 3), (4, 9, 0), (4, 4, 0)]
        );
    }

    #[test]
    fn hilbert_visits_every_cell_once() {
        let n = 8;
        let key = hilbert_order(n);
        let mut cells: Vec<(i64, u32, u32)> = (0..n as u32)
            .flat_map(|x| (0..n as u32).map(move |y| (x, y)))
            .map(|(x, y)| (key(x, y), x, y))
            .collect();
        cells.sort_unstable();
        let mut keys: Vec<i64> = cells.iter().map(|c| c.0).collect();
        keys.dedup();
        assert_eq!(keys.len(), n * n);
        // consecutive cells on the curve are lattice neighbours
        for w in cells.windows(2) {
            let d = w[0].1.abs_diff(w[1].1) + w[0].2.abs_diff(w[1].2);
            assert_eq!(d, 1);
        }
    }

    #[test]
    fn hilbert_sort_is_a_permutation() {
        let blocks = Blocks::sqrt(6);
        let queries = from_ranges([(1, 6), (2, 2), (3, 5), (1, 1)]);
        let mut perm = sort::<_, ()>(&queries, &blocks, Order::Hilbert);
        perm.sort_unstable();
        assert_eq!(perm, [0, 1, 2, 3]);
    }
}
