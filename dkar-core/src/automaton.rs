//! Deterministic finite automaton model.
//!
//! An [`Automaton`] is a plain aggregate of states, input alphabet,
//! transition table, start state and final states. It does not keep itself
//! consistent: the bulk setters replace a collection without touching the
//! others, so callers run [`Automaton::validate`] after populating it.
//! [`crate::AutomatonBuilder`] is the incremental path that registers every
//! referenced state and symbol as it goes.

use crate::error::CoreError;
use crate::validate;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// A state of the automaton, identified by its name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct State(String);

impl State {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for State {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for State {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// An input symbol. The empty string is a valid symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    /// Creates a symbol from a value that may be missing in the source.
    pub fn from_option(symbol: Option<impl Into<String>>) -> Result<Self, CoreError> {
        symbol
            .map(Self::new)
            .ok_or_else(|| CoreError::invalid_argument("symbol must not be missing"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Sparse transition table: source state -> symbol -> destination state.
pub type TransitionTable = HashMap<State, HashMap<Symbol, State>>;

/// A deterministic finite automaton.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Automaton {
    pub(crate) states: HashSet<State>,
    pub(crate) input_alphabet: HashSet<Symbol>,
    pub(crate) transitions: TransitionTable,
    pub(crate) start_state: Option<State>,
    pub(crate) final_states: HashSet<State>,
}

impl Automaton {
    /// Creates an empty automaton with no start state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn states(&self) -> &HashSet<State> {
        &self.states
    }

    pub fn input_alphabet(&self) -> &HashSet<Symbol> {
        &self.input_alphabet
    }

    pub fn transitions(&self) -> &TransitionTable {
        &self.transitions
    }

    pub fn start_state(&self) -> Option<&State> {
        self.start_state.as_ref()
    }

    pub fn final_states(&self) -> &HashSet<State> {
        &self.final_states
    }

    /// Looks up the destination for `state` on `symbol`.
    pub fn transition(&self, state: &State, symbol: &Symbol) -> Option<&State> {
        self.transitions.get(state).and_then(|row| row.get(symbol))
    }

    /// Returns true if `state` is a final state.
    pub fn is_final(&self, state: &State) -> bool {
        self.final_states.contains(state)
    }

    /// Replaces the state set.
    pub fn set_states(&mut self, states: HashSet<State>) {
        self.states = states;
    }

    /// Replaces the input alphabet.
    pub fn set_input_alphabet(&mut self, input_alphabet: HashSet<Symbol>) {
        self.input_alphabet = input_alphabet;
    }

    /// Replaces the whole transition table.
    pub fn set_transitions(&mut self, transitions: TransitionTable) {
        self.transitions = transitions;
    }

    /// Replaces the final state set.
    pub fn set_final_states(&mut self, final_states: HashSet<State>) {
        self.final_states = final_states;
    }

    /// Replaces the start state without registering it in the state set.
    pub fn replace_start_state(&mut self, start_state: Option<State>) {
        self.start_state = start_state;
    }

    /// Checks the referential invariants. See [`crate::validate::validate`].
    pub fn validate(&self) -> Result<(), CoreError> {
        validate::validate(self)
    }
}
