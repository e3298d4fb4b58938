use std::ops::Index;

// Compressed sparse row format for jagged array
// Provides good locality for graph traversal, but works only for static ones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Csr<T> {
    data: Vec<T>,
    head: Vec<u32>,
}

impl<T: Clone> Csr<T> {
    pub fn from_pairs<I>(n: usize, pairs: I) -> Self
    where
        I: IntoIterator<Item = (u32, T)>,
        I::IntoIter: Clone,
    {
        let mut head = vec![0u32; n + 1];

        let pairs = pairs.into_iter();
        let mut fill = None;
        for (u, x) in pairs.clone() {
            debug_assert!(u < n as u32);
            head[u as usize] += 1;
            fill.get_or_insert(x);
        }
        for i in 0..n {
            head[i + 1] += head[i];
        }

        // Placeholder for slots that are overwritten below; rows are filled back to front.
        let mut data = match fill {
            Some(x) => vec![x; head[n] as usize],
            None => vec![],
        };
        for (u, v) in pairs {
            head[u as usize] -= 1;
            data[head[u as usize] as usize] = v;
        }

        Csr { data, head }
    }
}

impl<T> Csr<T> {
    pub fn len(&self) -> usize {
        self.head.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Index<usize> for Csr<T> {
    type Output = [T];

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[self.head[index] as usize..self.head[index + 1] as usize]
    }
}
