use crate::error::{Error, Result};

pub fn isqrt(n: usize) -> usize {
    if n == 0 {
        return 0;
    }

    let mut x = n;
    loop {
        let next_x = (x + n / x) / 2;
        if next_x >= x {
            return x;
        }
        x = next_x;
    }
}

pub fn icbrt(n: usize) -> usize {
    let mut x = (n as f64).cbrt() as usize;
    while x * x * x > n {
        x -= 1;
    }
    while (x + 1) * (x + 1) * (x + 1) <= n {
        x += 1;
    }
    x
}

// Partition of the 1-based positions 1..=n into consecutive blocks of `len`.
// Block ids are 1-based as well.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Blocks {
    n: usize,
    len: usize,
}

impl Blocks {
    pub fn with_len(n: usize, len: usize) -> Result<Self> {
        if len == 0 {
            return Err(Error::ZeroBlockLength);
        }
        Ok(Self { n, len })
    }

    pub fn sqrt(n: usize) -> Self {
        Self {
            n,
            len: isqrt(n).max(1),
        }
    }

    // Time complexity: T ~ O(Q B + N^2/B)
    // => optimal bucket size: B = N/sqrt(Q), so T ~ O(N sqrt(Q))
    pub fn tuned(n: usize, n_queries: usize) -> Self {
        if n_queries == 0 {
            return Self::sqrt(n);
        }
        Self {
            n,
            len: (n / isqrt(n_queries)).max(1),
        }
    }

    // Three moving pointers (left, right, time): B = n^(2/3) balances
    // O(Q B) window moves against O(n^2 / B^2) sweeps of the timeline.
    pub fn cube(n: usize) -> Self {
        let len = n / icbrt(n).max(1);
        Self { n, len: len.max(1) }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn count(&self) -> usize {
        self.n.div_ceil(self.len)
    }

    #[inline]
    pub fn of(&self, i: usize) -> usize {
        debug_assert!(1 <= i && i <= self.n, "position {i} outside 1..={}", self.n);
        (i - 1) / self.len + 1
    }

    pub fn start(&self, b: usize) -> usize {
        (b - 1) * self.len + 1
    }

    pub fn end(&self, b: usize) -> usize {
        (b * self.len).min(self.n)
    }
}
