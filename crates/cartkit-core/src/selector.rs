//! Memoized selectors.
//!
//! A [`Selector`] splits a projection into two steps: an *input* function
//! that picks shared (`Arc`) pieces out of the state, and a *compute*
//! function that derives a value from them. The derived value is cached and
//! only recomputed when an input is a different allocation than last time.
//! Equal-but-distinct inputs still trigger a recompute; identity is the key.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

/// Input of a memoized selector, compared by identity.
pub trait SelectorInput: Send + Sync {
    /// Whether `other` is the same input as `self`.
    fn same_as(&self, other: &Self) -> bool;
}

impl<T: ?Sized + Send + Sync> SelectorInput for Arc<T> {
    fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<A: SelectorInput, B: SelectorInput> SelectorInput for (A, B) {
    fn same_as(&self, other: &Self) -> bool {
        self.0.same_as(&other.0) && self.1.same_as(&other.1)
    }
}

impl<A: SelectorInput, B: SelectorInput, C: SelectorInput> SelectorInput for (A, B, C) {
    fn same_as(&self, other: &Self) -> bool {
        self.0.same_as(&other.0) && self.1.same_as(&other.1) && self.2.same_as(&other.2)
    }
}

type InputFn<S, I> = Box<dyn Fn(&S) -> I + Send + Sync>;
type ComputeFn<I, O> = Box<dyn Fn(&I) -> O + Send + Sync>;

/// A cached projection over state `S`.
///
/// The cache holds the last inputs it saw, which keeps those allocations
/// alive. A state update that goes through `Arc::make_mut` therefore always
/// produces a fresh allocation while the selector still references the old
/// one, so identity comparison cannot miss a change.
pub struct Selector<S, I, O> {
    name: &'static str,
    input: InputFn<S, I>,
    compute: ComputeFn<I, O>,
    cache: Mutex<Option<(I, O)>>,
    recomputations: AtomicU64,
}

impl<S, I, O> Selector<S, I, O>
where
    I: SelectorInput,
    O: Clone,
{
    /// Create a selector from an input projection and a compute function.
    pub fn new(
        name: &'static str,
        input: impl Fn(&S) -> I + Send + Sync + 'static,
        compute: impl Fn(&I) -> O + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            input: Box::new(input),
            compute: Box::new(compute),
            cache: Mutex::new(None),
            recomputations: AtomicU64::new(0),
        }
    }

    /// Evaluate against `state`, reusing the cached value when the inputs
    /// are unchanged.
    pub fn select(&self, state: &S) -> O {
        let input = (self.input)(state);
        let mut cache = self.cache.lock();

        if let Some((cached_input, output)) = cache.as_ref() {
            if cached_input.same_as(&input) {
                return output.clone();
            }
        }

        tracing::trace!(selector = self.name, "recomputing");
        let output = (self.compute)(&input);
        self.recomputations.fetch_add(1, Ordering::Relaxed);
        *cache = Some((input, output.clone()));
        output
    }

    /// How many times the compute function has run.
    pub fn recomputations(&self) -> u64 {
        self.recomputations.load(Ordering::Relaxed)
    }

    /// Reset the recomputation counter.
    pub fn reset_recomputations(&self) {
        self.recomputations.store(0, Ordering::Relaxed);
    }
}

impl<S, I, O> fmt::Debug for Selector<S, I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selector")
            .field("name", &self.name)
            .field(
                "recomputations",
                &self.recomputations.load(Ordering::Relaxed),
            )
            .finish()
    }
}
