use std::{collections::HashMap, hash::Hash};

// Maps each distinct value to a dense id in 0..len, preserving order.
#[derive(Clone, Debug)]
pub struct Compressed<T> {
    values: Vec<T>,
    ids: HashMap<T, u32>,
}

impl<T: Ord + Clone + Hash> Compressed<T> {
    pub fn new(xs: impl IntoIterator<Item = T>) -> Self {
        let mut values: Vec<T> = xs.into_iter().collect();
        values.sort_unstable();
        values.dedup();

        let ids = values
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, x)| (x, i as u32))
            .collect();

        Self { values, ids }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    // Panics on values that were not part of the construction set.
    pub fn id(&self, x: &T) -> u32 {
        self.ids[x]
    }

    pub fn find(&self, x: &T) -> Option<u32> {
        self.ids.get(x).copied()
    }

    pub fn value(&self, id: u32) -> &T {
        &self.values[id as usize]
    }

    pub fn map(&self, xs: &[T]) -> Vec<u32> {
        xs.iter().map(|x| self.id(x)).collect()
    }
}

// Multiplicity table over compressed ids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Counter {
    count: Vec<u32>,
}

impl Counter {
    pub fn new(n_values: usize) -> Self {
        Self {
            count: vec![0; n_values],
        }
    }

    #[inline]
    pub fn get(&self, x: u32) -> u32 {
        self.count[x as usize]
    }

    // Returns the multiplicity after the increment.
    #[inline]
    pub fn inc(&mut self, x: u32) -> u32 {
        let c = &mut self.count[x as usize];
        *c += 1;
        *c
    }

    // Returns the multiplicity after the decrement.
    #[inline]
    pub fn dec(&mut self, x: u32) -> u32 {
        let c = &mut self.count[x as usize];
        debug_assert!(*c > 0, "removing value {x} that is not in the window");
        *c -= 1;
        *c
    }
}
