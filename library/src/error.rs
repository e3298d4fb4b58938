use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },
    #[error("cannot parse token {token:?} as {expected}")]
    BadToken { token: String, expected: &'static str },
    #[error("query #{id}: bounds [{left}, {right}] out of range 1..={n}")]
    QueryOutOfRange {
        id: usize,
        left: usize,
        right: usize,
        n: usize,
    },
    #[error("query #{id}: left bound {left} exceeds right bound {right}")]
    InvertedQuery { id: usize, left: usize, right: usize },
    #[error("query #{id}: intervals [{l1}, {r1}] and [{l2}, {r2}] must be disjoint and ordered")]
    OverlappingIntervals {
        id: usize,
        l1: usize,
        r1: usize,
        l2: usize,
        r2: usize,
    },
    #[error("query id {id} out of range ({n_results} result slots)")]
    BadQueryId { id: usize, n_results: usize },
    #[error("query id {0} used twice")]
    DuplicateQueryId(usize),
    #[error("query #{id}: time {time} exceeds modification count {n_modifications}")]
    TimeOutOfRange {
        id: usize,
        time: usize,
        n_modifications: usize,
    },
    #[error("modification #{index}: position {position} out of range 1..={n}")]
    ModificationOutOfRange {
        index: usize,
        position: usize,
        n: usize,
    },
    #[error("node {node} out of range 1..={n}")]
    NodeOutOfRange { node: usize, n: usize },
    #[error("invalid tree: {0}")]
    InvalidTree(&'static str),
    #[error("unknown query kind {0:?}")]
    UnknownQueryKind(String),
    #[error("value {value} out of range 0..={max}")]
    ValueOutOfRange { value: i64, max: i64 },
    #[error("block length must be positive")]
    ZeroBlockLength,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
