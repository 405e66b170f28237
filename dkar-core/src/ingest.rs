//! Normalized source records and their ingestion into an [`Automaton`].
//!
//! Source readers decode their document into a [`RecordSet`]; [`ingest`]
//! applies name mapping and builds the automaton incrementally.

use crate::automaton::{Automaton, State, Symbol};
use crate::builder::AutomatonBuilder;
use crate::error::CoreError;
use crate::naming::NameMapper;
use std::collections::HashMap;

/// A state as described by the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateRecord {
    /// Source-local numeric id, referenced by transition records.
    pub id: i32,
    /// Source-format name, before mapping.
    pub name: Option<String>,
    /// Marked as the start state.
    pub initial: bool,
    /// Marked as a final state.
    pub accepting: bool,
}

/// A transition as described by the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionRecord {
    pub from: i32,
    pub to: i32,
    /// Input symbol; empty string is allowed, a missing value is not.
    pub read: Option<String>,
}

/// Everything a source reader extracts from one document, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    pub states: Vec<StateRecord>,
    pub transitions: Vec<TransitionRecord>,
}

/// Builds an automaton from source records.
///
/// The result is not validated.
pub fn ingest(records: RecordSet, mapper: &NameMapper) -> Result<Automaton, CoreError> {
    let mut builder = AutomatonBuilder::new();
    let mut by_id: HashMap<i32, State> = HashMap::with_capacity(records.states.len());

    for record in &records.states {
        let state = State::new(mapper.map_optional(record.name.as_deref())?);
        tracing::debug!("Mapped state id {} ({:?}) to '{}'", record.id, record.name, state);

        builder.add_state(state.clone());
        by_id.insert(record.id, state.clone());

        if record.initial {
            if let Some(previous) = builder.set_start_state(state.clone()) {
                tracing::warn!(
                    "Several initial states; '{}' replaces '{}' as start state",
                    state,
                    previous
                );
            }
        }
        if record.accepting {
            builder.add_final_state(state);
        }
    }

    for record in records.transitions {
        let from = lookup(&by_id, record.from)?;
        let to = lookup(&by_id, record.to)?;
        let symbol = Symbol::from_option(record.read)?;

        if let Some(shadowed) = builder.add_transition(from.clone(), symbol.clone(), to.clone()) {
            tracing::warn!(
                "Transition {} --{}--> {} overrides earlier destination {}",
                from,
                symbol,
                to,
                shadowed
            );
        }
    }

    Ok(builder.build())
}

fn lookup(by_id: &HashMap<i32, State>, id: i32) -> Result<State, CoreError> {
    by_id.get(&id).cloned().ok_or_else(|| {
        CoreError::invalid_argument(format!("transition references unknown state id {}", id))
    })
}
