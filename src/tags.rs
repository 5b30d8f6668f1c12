//! Reserved tag constants.
//!
//! Tags are opaque strings everywhere else in the crate; the one value with
//! built-in meaning lives here so use sites never spell it out by hand.

/// Tag marking a test as deliberately skipped.
///
/// A test carrying this tag is still reported (as ignored) rather than
/// silently dropped, so a run summary can show why it did not execute. The
/// exact string value is part of the contract with registration frontends.
pub const IGNORE: &str = "org.scalatest.Ignore";
