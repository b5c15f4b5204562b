//! Reducer trait.

use std::fmt;

/// A pure state-transition function.
///
/// Implementations must handle every action without suspending and without
/// failing: a reducer is total over its action type.
pub trait Reducer: Send + Sync {
    /// State owned by the store.
    type State: Send + Sync;
    /// Closed set of intents accepted by this reducer.
    type Action: fmt::Debug + Send;

    /// Apply `action` to `state` in place.
    fn reduce(&self, state: &mut Self::State, action: Self::Action);
}

impl<R: Reducer + ?Sized> Reducer for Box<R> {
    type State = R::State;
    type Action = R::Action;

    fn reduce(&self, state: &mut Self::State, action: Self::Action) {
        (**self).reduce(state, action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    enum CounterAction {
        Increment,
        Set(i64),
    }

    struct CounterReducer;

    impl Reducer for CounterReducer {
        type State = i64;
        type Action = CounterAction;

        fn reduce(&self, state: &mut i64, action: CounterAction) {
            match action {
                CounterAction::Increment => *state += 1,
                CounterAction::Set(value) => *state = value,
            }
        }
    }

    #[test]
    fn test_reduce_in_place() {
        let mut state = 0;
        CounterReducer.reduce(&mut state, CounterAction::Increment);
        CounterReducer.reduce(&mut state, CounterAction::Increment);
        assert_eq!(state, 2);

        CounterReducer.reduce(&mut state, CounterAction::Set(-4));
        assert_eq!(state, -4);
    }

    #[test]
    fn test_boxed_reducer() {
        let reducer: Box<CounterReducer> = Box::new(CounterReducer);
        let mut state = 10;
        reducer.reduce(&mut state, CounterAction::Increment);
        assert_eq!(state, 11);
    }
}
