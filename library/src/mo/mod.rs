// Offline range queries with Mo's algorithm.
//
// Queries are reordered so that a window [left, right] walking from one query to the
// next makes O((n + Q) sqrt n) unit moves in total; the per-problem state is
// maintained by an `Aggregate` (or a `Rollback` when removal is not available).

pub mod block;
pub mod order;
pub mod query;
pub mod rollback;
pub mod timeline;
pub mod tree_path;
pub mod window;

pub use block::Blocks;
pub use query::{Query, SignedQuery};
pub use rollback::{solve_rollback, Rollback, RollbackWindow};
pub use timeline::{modifications, solve_timeline, Modification, TimedQuery, Timeline};
pub use tree_path::{solve_tree_path, PathQuery, PathRange, Toggle, TreePath};
pub use window::{solve, solve_signed, Aggregate, Window};
