//! Referential consistency checks for [`Automaton`].

use crate::automaton::Automaton;
use crate::error::CoreError;
use std::fmt;

/// The invariants checked by [`validate`], in checking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Invariant {
    /// A start state is set.
    StartStateSet,
    /// The start state is a member of the state set.
    StartStateKnown,
    /// Every final state is a member of the state set.
    FinalStateKnown,
    /// Every transition source is a member of the state set.
    TransitionSourceKnown,
    /// Every transition symbol is a member of the input alphabet.
    TransitionSymbolKnown,
    /// Every transition destination is a member of the state set.
    TransitionTargetKnown,
}

impl Invariant {
    /// Position of the invariant in the checking order, starting at 1.
    pub fn number(&self) -> u8 {
        match self {
            Invariant::StartStateSet => 1,
            Invariant::StartStateKnown => 2,
            Invariant::FinalStateKnown => 3,
            Invariant::TransitionSourceKnown => 4,
            Invariant::TransitionSymbolKnown => 5,
            Invariant::TransitionTargetKnown => 6,
        }
    }
}

impl fmt::Display for Invariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Invariant::StartStateSet => "start state is not set",
            Invariant::StartStateKnown => "start state is not in the state set",
            Invariant::FinalStateKnown => "final state is not in the state set",
            Invariant::TransitionSourceKnown => "transition source is not in the state set",
            Invariant::TransitionSymbolKnown => "transition symbol is not in the input alphabet",
            Invariant::TransitionTargetKnown => "transition target is not in the state set",
        };
        f.write_str(msg)
    }
}

/// Checks the six invariants in order and fails on the first violation.
///
/// Collections are walked in name order so the reported entity does not
/// depend on hash iteration order. The automaton is never modified.
pub fn validate(automaton: &Automaton) -> Result<(), CoreError> {
    let start = automaton
        .start_state()
        .ok_or_else(|| CoreError::inconsistent(Invariant::StartStateSet, None))?;

    if !automaton.states().contains(start) {
        return Err(CoreError::inconsistent(
            Invariant::StartStateKnown,
            Some(start.as_str()),
        ));
    }

    let mut finals: Vec<_> = automaton.final_states().iter().collect();
    finals.sort_unstable();
    if let Some(unknown) = finals.iter().find(|s| !automaton.states().contains(**s)) {
        return Err(CoreError::inconsistent(
            Invariant::FinalStateKnown,
            Some(unknown.as_str()),
        ));
    }

    let mut sources: Vec<_> = automaton.transitions().iter().collect();
    sources.sort_unstable_by(|a, b| a.0.cmp(b.0));
    for (from, row) in sources {
        if !automaton.states().contains(from) {
            return Err(CoreError::inconsistent(
                Invariant::TransitionSourceKnown,
                Some(from.as_str()),
            ));
        }

        let mut edges: Vec<_> = row.iter().collect();
        edges.sort_unstable_by(|a, b| a.0.cmp(b.0));
        for (symbol, to) in edges {
            if !automaton.input_alphabet().contains(symbol) {
                return Err(CoreError::inconsistent(
                    Invariant::TransitionSymbolKnown,
                    Some(symbol.as_str()),
                ));
            }
            if !automaton.states().contains(to) {
                return Err(CoreError::inconsistent(
                    Invariant::TransitionTargetKnown,
                    Some(to.as_str()),
                ));
            }
        }
    }

    Ok(())
}
