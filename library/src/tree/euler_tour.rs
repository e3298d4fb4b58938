use super::csr::Csr;
use crate::bitvec::BitVec;
use crate::error::{Error, Result};

// Bracket sequence of a rooted tree: every node is written once on entry and once on exit,
// so `seq` has length 2n and the occurrences of a subtree lie inside
// [enter[u], exit[u]]. Positions are 1-based, nodes 0-based.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EulerTour {
    pub seq: Vec<u32>,
    pub enter: Vec<u32>,
    pub exit: Vec<u32>,
    pub parent: Vec<u32>,
    pub depth: Vec<u32>,
}

impl EulerTour {
    pub fn new(n: usize, edges: &[(u32, u32)], root: u32) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidTree("no nodes"));
        }
        if edges.len() != n - 1 {
            return Err(Error::InvalidTree("a tree on n nodes has exactly n - 1 edges"));
        }
        for &(u, v) in edges {
            if u as usize >= n || v as usize >= n {
                return Err(Error::InvalidTree("edge endpoint out of range"));
            }
            if u == v {
                return Err(Error::InvalidTree("self loop"));
            }
        }
        if root as usize >= n {
            return Err(Error::InvalidTree("root out of range"));
        }

        let neighbors = Csr::from_pairs(n, edges.iter().flat_map(|&(u, v)| [(u, v), (v, u)]));

        let mut seq = Vec::with_capacity(2 * n);
        let mut enter = vec![0u32; n];
        let mut exit = vec![0u32; n];
        let mut parent = vec![root; n];
        let mut depth = vec![0u32; n];

        // Explicit stack; `cursor[u]` is the next neighbour of u to try.
        let mut visited = BitVec::zero_bits(n);
        let mut cursor = vec![0u32; n];
        let mut stack = vec![root];
        visited.set(root as usize);
        seq.push(root);
        enter[root as usize] = seq.len() as u32;

        while let Some(&u) = stack.last() {
            let i = cursor[u as usize] as usize;
            if let Some(&v) = neighbors[u as usize].get(i) {
                cursor[u as usize] += 1;
                if visited.get(v as usize) {
                    continue;
                }
                visited.set(v as usize);
                parent[v as usize] = u;
                depth[v as usize] = depth[u as usize] + 1;
                seq.push(v);
                enter[v as usize] = seq.len() as u32;
                stack.push(v);
            } else {
                stack.pop();
                seq.push(u);
                exit[u as usize] = seq.len() as u32;
            }
        }

        // n - 1 edges and connected <=> tree
        if visited.count_ones() as usize != n {
            return Err(Error::InvalidTree("graph is not connected"));
        }

        Ok(Self {
            seq,
            enter,
            exit,
            parent,
            depth,
        })
    }

    pub fn len(&self) -> usize {
        self.enter.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enter.is_empty()
    }

    pub fn is_ancestor(&self, u: u32, v: u32) -> bool {
        let (u, v) = (u as usize, v as usize);
        self.enter[u] <= self.enter[v] && self.exit[v] <= self.exit[u]
    }
}
