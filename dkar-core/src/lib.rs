//! # dkar-core
//!
//! Automaton model for jflap2dkar.
//!
//! This crate provides:
//! - State, symbol and deterministic automaton types
//! - Incremental construction and referential validation
//! - Source state name mapping (`q0` -> `A`)
//! - Ingestion of normalized source records
//! - Decode/encode capabilities and the converter that chains them

pub mod automaton;
pub mod builder;
pub mod codec;
pub mod convert;
pub mod error;
pub mod ingest;
pub mod naming;
pub mod validate;

pub use automaton::{Automaton, State, Symbol, TransitionTable};
pub use builder::AutomatonBuilder;
pub use codec::{Decode, Encode};
pub use convert::{ConversionSummary, Converter, WriteMode};
pub use error::CoreError;
pub use ingest::{ingest, RecordSet, StateRecord, TransitionRecord};
pub use naming::{map_state_name, NameMapper, OverflowPolicy};
pub use validate::{validate, Invariant};
