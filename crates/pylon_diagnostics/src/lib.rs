//! Defines everything needed for proper error reporting in the Pylon
//! compiler: [`Diagnostic`], [`Severity`], [`Label`], the [`BuildDiagnostic`]
//! trait, and the accumulating [`Diagnostics`] collection.

#![warn(missing_docs, clippy::dbg_macro)]
#![allow(clippy::module_name_repetitions)]

pub mod diagnostic;

use pylon_fx_hash::FxHashSet;
use pylon_interner::PathId;

pub use crate::diagnostic::{BuildDiagnostic, Diagnostic, Label, LabelStyle, Severity};

/// An accumulating collection of diagnostics produced over the course of a
/// compilation phase.
///
/// Resolution (§7 of the name-resolution spec) is an *accumulating
/// validation*: independent sub-resolutions keep going after one of them
/// fails, so a single run surfaces every defect rather than stopping at the
/// first. `Diagnostics` is the accumulator that collects them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Diagnostics {
    /// Files referenced by at least one collected diagnostic.
    pub files_involved: FxHashSet<PathId>,

    /// The diagnostics collected so far.
    pub diagnostics: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates a new, empty diagnostics accumulator.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a diagnostic, building it from its strongly-typed representation.
    #[inline]
    pub fn add_diagnostic(&mut self, diagnostic: impl BuildDiagnostic) {
        let diagnostic = diagnostic.build();

        self.files_involved.extend(diagnostic.files_involved());
        self.diagnostics.push(diagnostic);
    }

    /// Merges another accumulator's diagnostics into this one. Used by the
    /// driver to combine the independently-accumulated errors of sibling
    /// namespaces/categories (§5: error collection is commutative).
    pub fn extend(&mut self, other: Diagnostics) {
        self.files_involved.extend(other.files_involved);
        self.diagnostics.extend(other.diagnostics);
    }

    /// Returns `true` if any collected diagnostic is fatal.
    #[inline]
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        !self.is_ok()
    }

    /// Returns `true` if no collected diagnostic is fatal.
    #[inline]
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.diagnostics.iter().all(|d| !is_fatal_severity(d.severity))
    }
}

/// Returns `true` if the given [`Severity`] should fail the surrounding
/// compilation phase.
#[inline]
#[must_use]
pub const fn is_fatal_severity(severity: Severity) -> bool {
    matches!(severity, Severity::Error | Severity::Bug)
}

#[cfg(test)]
mod tests {
    use pylon_filesystem::location::DUMMY_LOCATION;

    use super::*;

    struct DummyError;

    impl BuildDiagnostic for DummyError {
        fn build(&self) -> Diagnostic {
            Diagnostic::error()
                .with_code("E999")
                .with_message("dummy error")
                .with_labels([Label::primary(DUMMY_LOCATION)])
        }
    }

    #[test]
    fn empty_diagnostics_is_ok() {
        assert!(Diagnostics::new().is_ok());
    }

    #[test]
    fn adding_an_error_makes_diagnostics_fatal() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.add_diagnostic(DummyError);

        assert!(diagnostics.is_fatal());
        assert_eq!(diagnostics.diagnostics.len(), 1);
    }

    #[test]
    fn extend_merges_both_sides() {
        let mut left = Diagnostics::new();
        left.add_diagnostic(DummyError);

        let mut right = Diagnostics::new();
        right.add_diagnostic(DummyError);

        left.extend(right);

        assert_eq!(left.diagnostics.len(), 2);
    }
}
