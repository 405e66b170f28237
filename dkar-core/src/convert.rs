//! Conversion between formats: decode, validate, encode.

use crate::automaton::Automaton;
use crate::codec::{Decode, Encode};
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// How the destination file is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteMode {
    /// Stream into the destination. A failed write may leave a truncated file.
    #[default]
    Direct,
    /// Render in memory, write a temporary file next to the destination and
    /// rename it into place.
    Atomic,
}

/// Counts describing a finished conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionSummary {
    pub states: usize,
    pub symbols: usize,
    pub final_states: usize,
}

impl ConversionSummary {
    fn of(automaton: &Automaton) -> Self {
        Self {
            states: automaton.states().len(),
            symbols: automaton.input_alphabet().len(),
            final_states: automaton.final_states().len(),
        }
    }
}

/// Reads an automaton with a [`Decode`] and writes it with an [`Encode`].
///
/// The two stages are not transactional: a failed write discards the
/// automaton that was read.
pub struct Converter<D, E> {
    decoder: D,
    encoder: E,
    write_mode: WriteMode,
}

impl<D: Decode, E: Encode> Converter<D, E> {
    pub fn new(decoder: D, encoder: E) -> Self {
        Self {
            decoder,
            encoder,
            write_mode: WriteMode::default(),
        }
    }

    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }

    pub fn write_mode(&self) -> WriteMode {
        self.write_mode
    }

    /// Converts `input` into `output`.
    pub fn convert(&self, input: &Path, output: &Path) -> Result<ConversionSummary, CoreError> {
        let automaton = self.read(input)?;
        self.write(&automaton, output)?;

        let summary = ConversionSummary::of(&automaton);
        tracing::info!(
            "Converted {} ({}) to {} ({}): {} states, {} symbols, {} final",
            input.display(),
            self.decoder.format_name(),
            output.display(),
            self.encoder.format_name(),
            summary.states,
            summary.symbols,
            summary.final_states
        );
        Ok(summary)
    }

    /// Decodes and validates the automaton stored at `input`.
    pub fn read(&self, input: &Path) -> Result<Automaton, CoreError> {
        let file = File::open(input)?;
        let mut reader = BufReader::new(file);
        let automaton = self.decoder.decode(&mut reader)?;
        automaton.validate()?;

        tracing::debug!(
            "Read {} automaton with {} states from {}",
            self.decoder.format_name(),
            automaton.states().len(),
            input.display()
        );
        Ok(automaton)
    }

    /// Encodes `automaton` into `output` according to the write mode.
    pub fn write(&self, automaton: &Automaton, output: &Path) -> Result<(), CoreError> {
        match self.write_mode {
            WriteMode::Direct => self.write_direct(automaton, output),
            WriteMode::Atomic => self.write_atomic(automaton, output),
        }
    }

    fn write_direct(&self, automaton: &Automaton, output: &Path) -> Result<(), CoreError> {
        let mut writer = BufWriter::new(File::create(output)?);
        self.encoder.encode(automaton, &mut writer)?;
        // Dropping a BufWriter swallows flush errors.
        writer.flush()?;
        Ok(())
    }

    fn write_atomic(&self, automaton: &Automaton, output: &Path) -> Result<(), CoreError> {
        let data = self.encoder.encode_to_vec(automaton)?;

        let dir = match output.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(&data)?;
        tmp.as_file().sync_all()?;
        tmp.persist(output).map_err(|e| CoreError::Io(e.error))?;

        tracing::debug!("Wrote {} bytes atomically to {}", data.len(), output.display());
        Ok(())
    }
}
