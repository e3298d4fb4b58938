pub mod bitvec;
pub mod compress_coord;
pub mod config;
pub mod error;
pub mod frac;
pub mod io;
pub mod mo;
pub mod problems;
pub mod tree;

pub use config::{EngineConfig, Order};
pub use error::{Error, Result};
