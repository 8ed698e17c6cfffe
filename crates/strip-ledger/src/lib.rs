//! Ledger engine for the adding strip.
//!
//! This crate is the heart of the calculator. It provides:
//! - The [`Ledger`]: an ordered list of entries with structural mutations
//! - Running-total recomputation with subtotal/total checkpoints
//! - The published [`Strip`] view and the [`StripView`] consumer boundary
//! - The line-oriented text format (strict parse, canonical encode)
//! - File persistence with dirty tracking
//! - Single-page print layout
//! - TOML configuration

pub mod codec;
pub mod config;
pub mod error;
pub mod fold;
pub mod ledger;
pub mod persist;
pub mod print;
pub mod view;

pub use codec::{decode, encode, parse_record, RecordError, LINE_SEPARATOR};
pub use config::{ConfigError, StripConfig};
pub use error::LedgerError;
pub use fold::{recompute, state, total, RunningTotal};
pub use ledger::Ledger;
pub use print::{print_page, DrawCommand, FontStyle, PageGeometry, PrintedPage};
pub use view::{Line, NullView, RecordingView, Strip, StripView};

pub use strip_types::{Entry, Operator};
