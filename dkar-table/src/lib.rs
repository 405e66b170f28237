//! # dkar-table
//!
//! The DKAR line format for jflap2dkar.
//!
//! This crate provides:
//! - [`DkarFormatter`], the [`dkar_core::Encode`] implementation
//! - [`DkarTable`], a reader for tables written by the formatter

pub mod table;
pub mod writer;

pub use table::{DkarTable, Row};
pub use writer::{DkarFormatter, FORMAT_TAG, MISSING_TRANSITION};
