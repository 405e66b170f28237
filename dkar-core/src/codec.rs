//! Capabilities for reading automata from, and writing them to, a format.

use crate::automaton::Automaton;
use crate::error::CoreError;
use std::io::{BufRead, Write};

/// Decodes a source document into an automaton.
///
/// Implementations may return an automaton that has not been validated.
pub trait Decode {
    /// Short name of the format, used in logs and errors.
    fn format_name(&self) -> &'static str;

    fn decode(&self, reader: &mut dyn BufRead) -> Result<Automaton, CoreError>;
}

/// Encodes a validated automaton.
pub trait Encode {
    /// Short name of the format, used in logs and errors.
    fn format_name(&self) -> &'static str;

    fn encode(&self, automaton: &Automaton, writer: &mut dyn Write) -> Result<(), CoreError>;

    /// Encodes into an in-memory buffer.
    fn encode_to_vec(&self, automaton: &Automaton) -> Result<Vec<u8>, CoreError> {
        let mut buf = Vec::new();
        self.encode(automaton, &mut buf)?;
        Ok(buf)
    }
}
