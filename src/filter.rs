//! Tag-based test selection.
//!
//! This module implements the selection policy a runner consults once per
//! run. A [`Filter`] is built from two pieces of configuration:
//!
//! - an optional inclusion set: when present, only tests sharing at least one
//!   tag with it are eligible at all
//! - an exclusion set: tests sharing a tag with it are dropped from the run
//!
//! The reserved [`tags::IGNORE`](crate::tags::IGNORE) tag cuts across both: an
//! ignored test is reported as skipped instead of being dropped, so it stays
//! visible in run output. The precedence is deliberately asymmetric:
//!
//! 1. Under an inclusion gate, the gate is checked first — the ignore tag does
//!    not rescue a test that never qualified for the run.
//! 2. The ignore tag is checked before the exclusion set — a test that would
//!    otherwise be excluded still surfaces as ignored.
//!
//! Validation of the tags map (no name may carry an explicit empty tag set)
//! runs as a separate pass before any selection decision, so a malformed
//! universe fails the whole operation atomically.
//!
//! ## Usage
//!
//! ```
//! use std::collections::{BTreeMap, BTreeSet};
//! use tagsieve::Filter;
//!
//! let filter = Filter::new(None, BTreeSet::from(["Slow".to_string()])).unwrap();
//!
//! let names = BTreeSet::from(["fast one".to_string(), "slow one".to_string()]);
//! let tags = BTreeMap::from([(
//!     "slow one".to_string(),
//!     BTreeSet::from(["Slow".to_string()]),
//! )]);
//!
//! let entries = filter.apply(&names, &tags).unwrap();
//! assert_eq!(entries.len(), 1);
//! assert_eq!(entries[0].test_name, "fast one");
//! ```

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{FilterError, FilterResult};
use crate::summary::RunSummary;
use crate::tags;

/// Per-test selection decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The test runs.
    Runnable,
    /// The test is reported as skipped but does not run.
    Ignored,
    /// The test is omitted from the run and from reporting.
    Excluded,
}

/// One row of a filter pass: a surviving test and its ignored flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterEntry {
    /// Test name, unique within the filtered universe.
    pub test_name: String,
    /// Whether the test is reported as skipped instead of running.
    pub ignored: bool,
}

/// Immutable test selection policy.
///
/// Constructed once per run from the runner configuration; both query
/// operations are pure, so a single instance may be shared across threads and
/// applied to any number of test universes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Filter {
    tags_to_include: Option<BTreeSet<String>>,
    tags_to_exclude: BTreeSet<String>,
}

impl Filter {
    /// Create a filter from an optional inclusion set and an exclusion set.
    ///
    /// `None` for `tags_to_include` means no inclusion gate; `Some` with an
    /// empty set is rejected, since it would select nothing.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::EmptyIncludeSet`] when the inclusion set is
    /// present but empty.
    pub fn new(
        tags_to_include: Option<BTreeSet<String>>,
        tags_to_exclude: BTreeSet<String>,
    ) -> FilterResult<Self> {
        if let Some(include) = &tags_to_include {
            if include.is_empty() {
                return Err(FilterError::EmptyIncludeSet);
            }
        }
        Ok(Filter {
            tags_to_include,
            tags_to_exclude,
        })
    }

    /// The inclusion gate, if one is configured.
    pub fn tags_to_include(&self) -> Option<&BTreeSet<String>> {
        self.tags_to_include.as_ref()
    }

    /// The exclusion set (possibly empty).
    pub fn tags_to_exclude(&self) -> &BTreeSet<String> {
        &self.tags_to_exclude
    }

    /// Select from a test universe, in ascending name order.
    ///
    /// Returns one [`FilterEntry`] per surviving test: runnable tests with
    /// `ignored = false`, ignored tests with `ignored = true`. Tests that fail
    /// the inclusion gate or match the exclusion set are absent. Names absent
    /// from `tags` are treated as untagged.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::EmptyTagSet`] when any entry in `tags` maps a
    /// name to an empty set; no selection is performed in that case.
    pub fn apply(
        &self,
        test_names: &BTreeSet<String>,
        tags: &BTreeMap<String, BTreeSet<String>>,
    ) -> FilterResult<Vec<FilterEntry>> {
        check_tags_map(tags)?;

        let mut entries = Vec::new();
        for test_name in test_names {
            match self.decide(tags.get(test_name)) {
                Verdict::Runnable => entries.push(FilterEntry {
                    test_name: test_name.clone(),
                    ignored: false,
                }),
                Verdict::Ignored => entries.push(FilterEntry {
                    test_name: test_name.clone(),
                    ignored: true,
                }),
                Verdict::Excluded => {}
            }
        }

        tracing::debug!(
            universe = test_names.len(),
            surviving = entries.len(),
            ignored = entries.iter().filter(|e| e.ignored).count(),
            "filtered test universe"
        );
        Ok(entries)
    }

    /// Count the tests that would actually run, without materializing entries.
    ///
    /// Equal to the number of `ignored = false` rows [`apply`](Self::apply)
    /// would produce for the same inputs.
    ///
    /// # Errors
    ///
    /// Same contract as [`apply`](Self::apply).
    pub fn runnable_test_count(
        &self,
        test_names: &BTreeSet<String>,
        tags: &BTreeMap<String, BTreeSet<String>>,
    ) -> FilterResult<usize> {
        check_tags_map(tags)?;
        Ok(test_names
            .iter()
            .filter(|name| self.decide(tags.get(*name)) == Verdict::Runnable)
            .count())
    }

    /// Decide a single test without walking the whole universe.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::EmptyTagSet`] when `tags` maps `test_name` to an
    /// empty set. Other entries in the map are not validated here.
    pub fn verdict(
        &self,
        test_name: &str,
        tags: &BTreeMap<String, BTreeSet<String>>,
    ) -> FilterResult<Verdict> {
        let test_tags = tags.get(test_name);
        if test_tags.is_some_and(BTreeSet::is_empty) {
            return Err(FilterError::EmptyTagSet {
                test_name: test_name.to_string(),
            });
        }
        Ok(self.decide(test_tags))
    }

    /// Tally a universe into runnable and ignored counts in one pass.
    ///
    /// # Errors
    ///
    /// Same contract as [`apply`](Self::apply).
    pub fn summarize(
        &self,
        test_names: &BTreeSet<String>,
        tags: &BTreeMap<String, BTreeSet<String>>,
    ) -> FilterResult<RunSummary> {
        check_tags_map(tags)?;
        let mut runnable = 0;
        let mut ignored = 0;
        for test_name in test_names {
            match self.decide(tags.get(test_name)) {
                Verdict::Runnable => runnable += 1,
                Verdict::Ignored => ignored += 1,
                Verdict::Excluded => {}
            }
        }
        Ok(RunSummary::new(runnable, ignored))
    }

    /// Per-name policy. `test_tags = None` means the test carries no tags.
    fn decide(&self, test_tags: Option<&BTreeSet<String>>) -> Verdict {
        let untagged = BTreeSet::new();
        let test_tags = test_tags.unwrap_or(&untagged);

        if let Some(include) = &self.tags_to_include {
            // Gate first: the ignore tag does not rescue a test that never
            // qualified for the run.
            if test_tags.is_disjoint(include) {
                return Verdict::Excluded;
            }
        }
        if test_tags.contains(tags::IGNORE) {
            // Ignore beats exclusion so the skip stays visible in reporting.
            return Verdict::Ignored;
        }
        if !test_tags.is_disjoint(&self.tags_to_exclude) {
            return Verdict::Excluded;
        }
        Verdict::Runnable
    }
}

/// Reject any name mapped to an empty tag set, before any selection decision.
fn check_tags_map(tags: &BTreeMap<String, BTreeSet<String>>) -> FilterResult<()> {
    for (test_name, test_tags) in tags {
        if test_tags.is_empty() {
            return Err(FilterError::EmptyTagSet {
                test_name: test_name.clone(),
            });
        }
    }
    Ok(())
}
