//! Incremental automaton construction.

use crate::automaton::{Automaton, State, Symbol};
use crate::error::CoreError;

/// Populates an [`Automaton`] one element at a time.
///
/// Every mutator registers the states and symbols it references, so an
/// automaton built only through this type always has its state set and
/// alphabet closed over the rest of its contents.
#[derive(Debug, Default)]
pub struct AutomatonBuilder {
    automaton: Automaton,
}

impl AutomatonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a state. Adding a known state is a no-op.
    pub fn add_state(&mut self, state: State) -> &mut Self {
        self.automaton.states.insert(state);
        self
    }

    /// Adds a symbol to the input alphabet. Adding a known symbol is a no-op.
    pub fn add_symbol(&mut self, symbol: Symbol) -> &mut Self {
        self.automaton.input_alphabet.insert(symbol);
        self
    }

    /// Adds `from --symbol--> to`, registering both states and the symbol.
    ///
    /// A transition already present for `(from, symbol)` is overwritten; its
    /// old destination is returned.
    pub fn add_transition(&mut self, from: State, symbol: Symbol, to: State) -> Option<State> {
        self.automaton.states.insert(from.clone());
        self.automaton.states.insert(to.clone());
        self.automaton.input_alphabet.insert(symbol.clone());

        self.automaton
            .transitions
            .entry(from)
            .or_default()
            .insert(symbol, to)
    }

    /// Sets the start state, registering it. Returns the replaced start state.
    pub fn set_start_state(&mut self, state: State) -> Option<State> {
        self.automaton.states.insert(state.clone());
        self.automaton.start_state.replace(state)
    }

    /// Marks a state as final, registering it.
    pub fn add_final_state(&mut self, state: State) -> &mut Self {
        self.automaton.states.insert(state.clone());
        self.automaton.final_states.insert(state);
        self
    }

    /// Returns the automaton built so far.
    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    /// Finishes construction without validating.
    pub fn build(self) -> Automaton {
        self.automaton
    }

    /// Finishes construction and checks the referential invariants.
    pub fn build_validated(self) -> Result<Automaton, CoreError> {
        self.automaton.validate()?;
        Ok(self.automaton)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::Invariant;

    #[test]
    fn test_add_transition_registers_endpoints() {
        let mut builder = AutomatonBuilder::new();
        builder.add_transition(State::new("A"), Symbol::new("0"), State::new("B"));

        let automaton = builder.automaton();
        assert!(automaton.states().contains(&State::new("A")));
        assert!(automaton.states().contains(&State::new("B")));
        assert!(automaton.input_alphabet().contains(&Symbol::new("0")));
    }

    #[test]
    fn test_last_transition_wins() {
        let mut builder = AutomatonBuilder::new();
        let first = builder.add_transition(State::new("A"), Symbol::new("0"), State::new("B"));
        let second = builder.add_transition(State::new("A"), Symbol::new("0"), State::new("C"));

        assert!(first.is_none());
        assert_eq!(second, Some(State::new("B")));

        let automaton = builder.build();
        assert_eq!(
            automaton.transition(&State::new("A"), &Symbol::new("0")),
            Some(&State::new("C"))
        );
        // The shadowed destination stays a registered state.
        assert_eq!(automaton.states().len(), 3);
    }

    #[test]
    fn test_start_and_final_registration() {
        let mut builder = AutomatonBuilder::new();
        assert!(builder.set_start_state(State::new("A")).is_none());
        assert_eq!(
            builder.set_start_state(State::new("B")),
            Some(State::new("A"))
        );
        builder.add_final_state(State::new("F"));

        let automaton = builder.build_validated().unwrap();
        assert_eq!(automaton.start_state(), Some(&State::new("B")));
        assert_eq!(automaton.states().len(), 3);
        assert!(automaton.is_final(&State::new("F")));
    }

    #[test]
    fn test_idempotent_insertion() {
        let mut builder = AutomatonBuilder::new();
        builder
            .add_state(State::new("A"))
            .add_state(State::new("A"))
            .add_symbol(Symbol::new("x"))
            .add_symbol(Symbol::new("x"));

        assert_eq!(builder.automaton().states().len(), 1);
        assert_eq!(builder.automaton().input_alphabet().len(), 1);
    }

    #[test]
    fn test_build_validated_without_start() {
        let mut builder = AutomatonBuilder::new();
        builder.add_state(State::new("A"));

        let result = builder.build_validated();
        assert!(matches!(
            result,
            Err(CoreError::InconsistentAutomaton {
                invariant: Invariant::StartStateSet,
                ..
            })
        ));
    }
}
