//! Memoization cache with lazy evaluation.
//!
//! Values of a recurrence are computed on demand and cached, with storage
//! pluggable per index shape:
//!
//! - [`DenseStore`]: growable Vec for dense, sequential `usize` indices
//! - [`SparseStore`]: HashMap for arbitrary hashable indices
//!
//! [`MemoCache`] resolves dependencies iteratively with an explicit work
//! stack, so deep chains never exhaust the call stack. Each index is
//! computed at most once per cache lifetime; once stored, a value never
//! changes.
//!
//! # Warning: Cycle Behavior
//!
//! The cache does **not** detect cycles. Dependency graphs must be acyclic
//! or `get` never terminates.
//!
//! # Example
//!
//! ```
//! use pascal_core::memo::{MemoCache, Recurrence, SparseStore};
//! use std::convert::Infallible;
//!
//! struct GridPaths;
//!
//! impl Recurrence<(u32, u32), u64> for GridPaths {
//!     type Error = Infallible;
//!
//!     fn deps(&self, &(r, c): &(u32, u32)) -> Vec<(u32, u32)> {
//!         if r == 0 || c == 0 {
//!             vec![]
//!         } else {
//!             vec![(r - 1, c), (r, c - 1)]
//!         }
//!     }
//!
//!     fn compute(&self, _pos: &(u32, u32), deps: Vec<u64>) -> Result<u64, Infallible> {
//!         Ok(if deps.is_empty() { 1 } else { deps.iter().sum() })
//!     }
//! }
//!
//! let cache = MemoCache::new(SparseStore::new(), GridPaths);
//! assert_eq!(cache.get(&(4, 4)).unwrap(), 70);
//! ```

mod cache;
mod recurrence;
mod store;

pub use cache::MemoCache;
pub use recurrence::Recurrence;
pub use store::{DenseStore, MemoStore, SparseStore};
