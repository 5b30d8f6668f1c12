//! Tag-based test selection for test runners.
//!
//! This crate provides the filtering core a test runner consults between
//! registration and execution:
//! - [`Filter`] — immutable selection policy built from an optional inclusion
//!   tag set and an exclusion tag set
//! - [`FilterEntry`] — ordered output rows pairing each surviving test with
//!   its ignored flag
//! - [`Verdict`] — per-test decision (runnable, ignored, or excluded)
//! - [`RunSummary`] — runnable/ignored tallies for run reporting
//! - [`tags`] — reserved tag constants, notably the ignore tag
//!
//! Selection is pure and order-stable: results come back sorted ascending by
//! test name, and a test carrying the ignore tag is reported as skipped
//! rather than silently dropped, so run output can show why it did not
//! execute.

#![warn(missing_docs)]

pub mod error;
pub mod filter;
pub mod summary;
pub mod tags;

pub use error::{FilterError, FilterResult};
pub use filter::{Filter, FilterEntry, Verdict};
pub use summary::RunSummary;
