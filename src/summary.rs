//! Run-summary tallies produced by a filter pass.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Counts of runnable and ignored tests in a filtered universe.
///
/// Produced by [`Filter::summarize`](crate::Filter::summarize); feeds run
/// reporting ("N tests, M ignored") without requiring the full entry list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Tests that will actually execute.
    pub runnable: usize,
    /// Tests reported as skipped.
    pub ignored: usize,
}

impl RunSummary {
    /// Create a summary from the two tallies.
    pub fn new(runnable: usize, ignored: usize) -> Self {
        RunSummary { runnable, ignored }
    }

    /// Total tests that survived filtering (runnable plus ignored).
    pub fn total(&self) -> usize {
        self.runnable + self.ignored
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} tests, {} ignored", self.total(), self.ignored)
    }
}
