//! Iterative memoization cache.

use std::cell::RefCell;
use std::marker::PhantomData;

use super::recurrence::Recurrence;
use super::store::MemoStore;

/// A lazy memoization cache over a [`Recurrence`].
///
/// Dependencies are resolved with an explicit work stack rather than
/// recursion, in depth-first order, so arbitrarily deep dependency chains
/// do not grow the call stack. Each index is computed at most once per
/// cache lifetime and a stored value is never replaced. A failed
/// computation leaves the cache without an entry for the failing index.
///
/// # Warning
///
/// There is no cycle detection. Dependencies must form a DAG; a cyclic
/// recurrence loops forever.
///
/// # Example
///
/// ```
/// use pascal_core::memo::{DenseStore, MemoCache, Recurrence};
/// use std::convert::Infallible;
///
/// struct Triangular;
///
/// impl Recurrence<usize, u64> for Triangular {
///     type Error = Infallible;
///
///     fn deps(&self, n: &usize) -> Vec<usize> {
///         if *n == 0 { vec![] } else { vec![n - 1] }
///     }
///
///     fn compute(&self, n: &usize, deps: Vec<u64>) -> Result<u64, Infallible> {
///         Ok(if *n == 0 { 0 } else { *n as u64 + deps[0] })
///     }
/// }
///
/// let cache = MemoCache::new(DenseStore::new(), Triangular);
/// assert_eq!(cache.get(&4).unwrap(), 10);
/// ```
pub struct MemoCache<I, K, S, R>
where
    S: MemoStore<I, K>,
    R: Recurrence<I, K>,
{
    store: RefCell<S>,
    rule: R,
    _marker: PhantomData<(I, K)>,
}

impl<I, K, S, R> MemoCache<I, K, S, R>
where
    I: Clone,
    K: Clone,
    S: MemoStore<I, K>,
    R: Recurrence<I, K>,
{
    /// Creates a cache from a storage backend and a recurrence.
    pub fn new(store: S, rule: R) -> Self {
        Self {
            store: RefCell::new(store),
            rule,
            _marker: PhantomData,
        }
    }

    /// Returns the value for the index, computing it and any missing
    /// dependencies first.
    pub fn get(&self, index: &I) -> Result<K, R::Error> {
        if let Some(value) = self.store.borrow().get(index) {
            return Ok(value.clone());
        }

        let mut pending = vec![index.clone()];
        while let Some(top) = pending.last().cloned() {
            if self.store.borrow().get(&top).is_some() {
                pending.pop();
                continue;
            }

            let deps = self.rule.deps(&top);
            let mut resolved = Vec::with_capacity(deps.len());
            let mut missing = Vec::new();
            {
                let store = self.store.borrow();
                for dep in &deps {
                    match store.get(dep) {
                        Some(value) => resolved.push(value.clone()),
                        None => missing.push(dep.clone()),
                    }
                }
            }

            if missing.is_empty() {
                let value = self.rule.compute(&top, resolved)?;
                self.store.borrow_mut().get_or_insert(top, || value);
                pending.pop();
            } else {
                // The first listed dependency must come off the stack first.
                missing.reverse();
                pending.append(&mut missing);
            }
        }

        let store = self.store.borrow();
        let value = store.get(index).expect("work loop resolves the root index");
        Ok(value.clone())
    }
}
