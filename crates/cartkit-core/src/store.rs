//! Explicit state container.

use parking_lot::RwLock;
use tokio::sync::watch;

use crate::reducer::Reducer;
use crate::selector::{Selector, SelectorInput};

/// State container owning a reducer and the state it drives.
///
/// The store is created once at the composition root and handed to every
/// consumer by reference (or behind an `Arc`). Writes go through
/// [`Store::dispatch`], reads through [`Store::select`].
///
/// Each dispatch runs under the write lock and the lock is released before
/// the call returns, so nothing holds it across an `.await`.
pub struct Store<R: Reducer> {
    reducer: R,
    state: RwLock<R::State>,
    version: watch::Sender<u64>,
}

impl<R: Reducer> Store<R> {
    /// Create a store with an explicit initial state.
    pub fn new(reducer: R, initial: R::State) -> Self {
        let (version, _) = watch::channel(0);
        Self {
            reducer,
            state: RwLock::new(initial),
            version,
        }
    }

    /// Create a store starting from `R::State::default()`.
    pub fn with_default_state(reducer: R) -> Self
    where
        R::State: Default,
    {
        Self::new(reducer, R::State::default())
    }

    /// Apply an action and notify subscribers.
    pub fn dispatch(&self, action: impl Into<R::Action>) {
        let action = action.into();
        tracing::debug!(?action, "dispatch");

        {
            let mut state = self.state.write();
            self.reducer.reduce(&mut state, action);
        }

        self.version.send_modify(|v| *v = v.wrapping_add(1));
    }

    /// Read a projection of the current state.
    pub fn select<T>(&self, f: impl FnOnce(&R::State) -> T) -> T {
        f(&self.state.read())
    }

    /// Read through a memoized selector.
    pub fn select_with<I, O>(&self, selector: &Selector<R::State, I, O>) -> O
    where
        I: SelectorInput,
        O: Clone,
    {
        selector.select(&self.state.read())
    }

    /// Clone the whole state.
    pub fn snapshot(&self) -> R::State
    where
        R::State: Clone,
    {
        self.state.read().clone()
    }

    /// Subscribe to change notifications.
    ///
    /// The received value is the number of dispatches applied so far.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.version.subscribe()
    }

    /// Number of dispatches applied so far.
    pub fn version(&self) -> u64 {
        *self.version.borrow()
    }
}

impl<R: Reducer> std::fmt::Debug for Store<R>
where
    R::State: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &*self.state.read())
            .field("version", &self.version())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Counter {
        value: i64,
        history: Vec<i64>,
    }

    #[derive(Debug)]
    enum CounterAction {
        Add(i64),
        Reset,
    }

    struct CounterReducer;

    impl Reducer for CounterReducer {
        type State = Counter;
        type Action = CounterAction;

        fn reduce(&self, state: &mut Counter, action: CounterAction) {
            match action {
                CounterAction::Add(n) => {
                    state.value += n;
                    state.history.push(n);
                }
                CounterAction::Reset => *state = Counter::default(),
            }
        }
    }

    #[test]
    fn test_dispatch_and_select() {
        let store = Store::with_default_state(CounterReducer);
        store.dispatch(CounterAction::Add(2));
        store.dispatch(CounterAction::Add(3));

        assert_eq!(store.select(|s| s.value), 5);
        assert_eq!(store.select(|s| s.history.len()), 2);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let store = Store::with_default_state(CounterReducer);
        store.dispatch(CounterAction::Add(1));

        let before = store.snapshot();
        store.dispatch(CounterAction::Reset);

        assert_eq!(before.value, 1);
        assert_eq!(store.snapshot(), Counter::default());
    }

    #[test]
    fn test_version_counts_dispatches() {
        let store = Store::with_default_state(CounterReducer);
        assert_eq!(store.version(), 0);

        store.dispatch(CounterAction::Add(1));
        store.dispatch(CounterAction::Reset);
        assert_eq!(store.version(), 2);
    }

    #[tokio::test]
    async fn test_subscribe_sees_dispatch() {
        let store = Arc::new(Store::with_default_state(CounterReducer));
        let mut rx = store.subscribe();

        let writer = Arc::clone(&store);
        tokio::spawn(async move {
            writer.dispatch(CounterAction::Add(7));
        });

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), 1);
        assert_eq!(store.select(|s| s.value), 7);
    }

    #[test]
    fn test_select_with_memoized_selector() {
        let store = Store::new(
            SharedReducer,
            Shared {
                values: Arc::new(vec![1, 2, 3]),
            },
        );
        let sum = Selector::new(
            "sum",
            |s: &Shared| Arc::clone(&s.values),
            |values: &Arc<Vec<i64>>| values.iter().sum::<i64>(),
        );

        assert_eq!(store.select_with(&sum), 6);
        assert_eq!(store.select_with(&sum), 6);
        assert_eq!(sum.recomputations(), 1);

        store.dispatch(SharedAction::Push(4));
        assert_eq!(store.select_with(&sum), 10);
        assert_eq!(sum.recomputations(), 2);
    }

    #[derive(Debug, Clone)]
    struct Shared {
        values: Arc<Vec<i64>>,
    }

    #[derive(Debug)]
    enum SharedAction {
        Push(i64),
    }

    struct SharedReducer;

    impl Reducer for SharedReducer {
        type State = Shared;
        type Action = SharedAction;

        fn reduce(&self, state: &mut Shared, action: SharedAction) {
            match action {
                SharedAction::Push(v) => Arc::make_mut(&mut state.values).push(v),
            }
        }
    }
}
