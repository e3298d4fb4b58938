use crate::error::Result;
use crate::mo::Blocks;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Order {
    // (block of l, r) with r alternating direction per block
    #[default]
    Snake,
    // position on a Hilbert curve over the (l, r) lattice
    Hilbert,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EngineConfig {
    pub order: Order,
    pub block_len: Option<usize>,
}

impl EngineConfig {
    pub fn blocks(&self, n: usize, n_queries: usize) -> Result<Blocks> {
        match self.block_len {
            Some(len) => Blocks::with_len(n, len),
            None => Ok(Blocks::tuned(n, n_queries)),
        }
    }

    pub fn timeline_blocks(&self, n: usize) -> Result<Blocks> {
        match self.block_len {
            Some(len) => Blocks::with_len(n, len),
            None => Ok(Blocks::cube(n)),
        }
    }
}
