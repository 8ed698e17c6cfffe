//! Foundation types for the adding strip.
//!
//! An adding strip is an ordered list of entries, each an arithmetic step
//! with an operand or a checkpoint marker. This crate provides those
//! entries and the single fold step every running total is built from.
//!
//! # Key Types
//!
//! - [`Operator`] — The closed set of entry operators and their signs
//! - [`Entry`] — One strip line: an arithmetic step or a checkpoint
//! - [`TypeError`] — Construction failures for entries and operators

pub mod entry;
pub mod error;
pub mod operator;

pub use entry::Entry;
pub use error::TypeError;
pub use operator::Operator;
