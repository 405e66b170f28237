//! # dkar-jflap
//!
//! JFLAP input for jflap2dkar.
//!
//! Decodes the XML files written by JFLAP for finite automata into
//! [`dkar_core::RecordSet`]s and ingests them into an automaton.

pub mod document;
pub mod reader;

pub use document::JflapDocument;
pub use reader::{JflapReader, FORMAT_NAME};
