//! Model-View-Intent primitives shared by the page containers.
//!
//! ```text
//! key press / fetch completion ──→ Intent ──→ Reducer ──→ State ──→ draw
//! ```
//!
//! Reducers are pure; side effects (HTTP commands) are issued by `App`
//! after it has stored the new state.

/// Snapshot of one page container. Cloned into reducers, compared in tests.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Something that happened to a container: user input or a tagged reply.
pub trait Intent: Send + 'static {}

/// The only place container state changes.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// `(State, Intent) -> State`, with no I/O.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Counter(u32);
    impl UiState for Counter {}

    enum Step {
        Add(u32),
        Clear,
    }
    impl Intent for Step {}

    struct CounterReducer;

    impl Reducer for CounterReducer {
        type State = Counter;
        type Intent = Step;

        fn reduce(state: Counter, intent: Step) -> Counter {
            match intent {
                Step::Add(n) => Counter(state.0 + n),
                Step::Clear => Counter::default(),
            }
        }
    }

    #[test]
    fn reducers_fold_intents_in_order() {
        let state = [Step::Add(2), Step::Add(3), Step::Clear, Step::Add(1)]
            .into_iter()
            .fold(Counter::default(), CounterReducer::reduce);
        assert_eq!(state, Counter(1));
    }
}
