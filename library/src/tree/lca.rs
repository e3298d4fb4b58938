use std::iter::successors;

// Binary lifting: up[j][u] is the 2^j-th ancestor of u (the root is its own parent).
// O(n log n) preprocessing, O(log n) per query.
#[derive(Clone, Debug)]
pub struct Lca {
    up: Vec<Vec<u32>>,
    depth: Vec<u32>,
}

impl Lca {
    pub fn new(parent: &[u32], depth: &[u32]) -> Self {
        let n = parent.len();
        let levels = ((usize::BITS - n.leading_zeros()) as usize).max(1);
        let up = successors(Some(parent.to_vec()), |prev_row| {
            Some(prev_row.iter().map(|&u| prev_row[u as usize]).collect())
        })
        .take(levels)
        .collect();
        Self {
            up,
            depth: depth.to_vec(),
        }
    }

    fn nth_parent(&self, mut u: u32, n: u32) -> u32 {
        for j in 0..self.up.len() {
            if (n >> j) & 1 != 0 {
                u = self.up[j][u as usize];
            }
        }
        u
    }

    pub fn lca(&self, mut u: u32, mut v: u32) -> u32 {
        if self.depth[u as usize] > self.depth[v as usize] {
            std::mem::swap(&mut u, &mut v);
        }
        v = self.nth_parent(v, self.depth[v as usize] - self.depth[u as usize]);
        if u == v {
            return u;
        }
        for row in self.up.iter().rev() {
            if row[u as usize] != row[v as usize] {
                u = row[u as usize];
                v = row[v as usize];
            }
        }
        self.up[0][u as usize]
    }
}
