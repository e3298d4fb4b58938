pub type B = u64;
pub const BW: usize = 64;

// Fixed-width bitset over 64-bit words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitVec {
    words: Vec<B>,
    n_bits: usize,
}

impl BitVec {
    pub fn zero_bits(n: usize) -> Self {
        Self {
            words: vec![0; n.div_ceil(BW)],
            n_bits: n,
        }
    }

    pub fn len(&self) -> usize {
        self.n_bits
    }

    pub fn is_empty(&self) -> bool {
        self.n_bits == 0
    }

    #[inline]
    pub fn get(&self, i: usize) -> bool {
        debug_assert!(i < self.n_bits);
        let (b, s) = (i / BW, i % BW);
        (self.words[b] >> s) & 1 != 0
    }

    #[inline]
    pub fn set(&mut self, i: usize) {
        debug_assert!(i < self.n_bits);
        self.words[i / BW] |= 1 << (i % BW);
    }

    #[inline]
    pub fn clear(&mut self, i: usize) {
        debug_assert!(i < self.n_bits);
        self.words[i / BW] &= !(1 << (i % BW));
    }

    #[inline]
    pub fn toggle(&mut self, i: usize) -> bool {
        debug_assert!(i < self.n_bits);
        self.words[i / BW] ^= 1 << (i % BW);
        self.get(i)
    }

    pub fn count_ones(&self) -> u32 {
        self.words.iter().map(|&m| m.count_ones()).sum()
    }

    pub fn any(&self) -> bool {
        self.words.iter().any(|&m| m != 0)
    }

    // Word `w` of `self >> shift`.
    #[inline]
    fn shr_word(&self, w: usize, shift: usize) -> B {
        let (q, r) = (shift / BW, shift % BW);
        let lo = self.words.get(w + q).copied().unwrap_or(0);
        if r == 0 {
            return lo;
        }
        let hi = self.words.get(w + q + 1).copied().unwrap_or(0);
        (lo >> r) | (hi << (BW - r))
    }

    // Whether some i has self[i] and other[i + shift], i.e. (self & (other >> shift)) != 0.
    // Runs in O(n / 64) without materializing the shifted copy.
    pub fn intersects_shifted(&self, other: &Self, shift: usize) -> bool {
        if shift >= other.n_bits {
            return false;
        }
        (0..self.words.len()).any(|w| self.words[w] & other.shr_word(w, shift) != 0)
    }
}
