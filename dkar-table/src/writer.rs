//! DKAR table writer.
//!
//! Layout (one item per line, `\n` separated):
//!
//! ```text
//! DKAR
//! <state count>
//! <symbol count>
//! <state>: <t(state, sym_1)> <t(state, sym_2)> ...   one row per state
//! <start state>
//! <final count> <final_1> <final_2> ...
//! ```
//!
//! States and symbols are ordered by name; a missing transition is written
//! as [`MISSING_TRANSITION`].

use dkar_core::{Automaton, CoreError, Encode, Invariant, State, Symbol};
use std::io::Write;

/// Header line identifying the format.
pub const FORMAT_TAG: &str = "DKAR";

/// Placeholder for an absent transition.
pub const MISSING_TRANSITION: &str = "_";

/// Writes automata as DKAR tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct DkarFormatter;

impl DkarFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Renders the table as a string.
    pub fn render(&self, automaton: &Automaton) -> Result<String, CoreError> {
        let bytes = self.encode_to_vec(automaton)?;
        String::from_utf8(bytes).map_err(|e| CoreError::malformed(FORMAT_TAG, e.to_string()))
    }
}

impl Encode for DkarFormatter {
    fn format_name(&self) -> &'static str {
        FORMAT_TAG
    }

    fn encode(&self, automaton: &Automaton, writer: &mut dyn Write) -> Result<(), CoreError> {
        // An unvalidated automaton may lack a start state; refuse rather than
        // emit a table with a hole in it.
        let start = automaton
            .start_state()
            .ok_or(CoreError::InconsistentAutomaton {
                invariant: Invariant::StartStateSet,
                entity: None,
            })?;

        let mut states: Vec<&State> = automaton.states().iter().collect();
        states.sort_by(|a, b| a.as_str().cmp(b.as_str()));

        let mut alphabet: Vec<&Symbol> = automaton.input_alphabet().iter().collect();
        alphabet.sort_by(|a, b| a.as_str().cmp(b.as_str()));

        writeln!(writer, "{}", FORMAT_TAG)?;
        writeln!(writer, "{}", states.len())?;
        writeln!(writer, "{}", alphabet.len())?;

        for state in &states {
            let row: Vec<&str> = alphabet
                .iter()
                .map(|symbol| {
                    automaton
                        .transition(state, symbol)
                        .map_or(MISSING_TRANSITION, State::as_str)
                })
                .collect();
            writeln!(writer, "{}: {}", state, row.join(" "))?;
        }

        writeln!(writer, "{}", start)?;

        // Sorted on its own, independent of the row order above.
        let mut finals: Vec<&str> = automaton.final_states().iter().map(State::as_str).collect();
        finals.sort();
        writeln!(writer, "{} {}", finals.len(), finals.join(" "))?;

        tracing::debug!(
            "Encoded DKAR table: {} rows, {} columns",
            states.len(),
            alphabet.len()
        );
        Ok(())
    }
}
