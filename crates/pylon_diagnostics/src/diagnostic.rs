//! Diagnostic data structures.

use std::string::ToString;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use pylon_filesystem::location::Location;

/// A severity level for diagnostic messages.
///
/// These are ordered:
///
/// ```
/// use pylon_diagnostics::diagnostic::Severity;
///
/// assert!(Severity::Bug > Severity::Error);
/// assert!(Severity::Error > Severity::Warning);
/// assert!(Severity::Warning > Severity::Note);
/// ```
#[derive(Copy, Clone, Hash, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Severity {
    /// A note.
    Note,
    /// A warning.
    Warning,
    /// An error. Resolution errors (§7) are always this severity.
    Error,
    /// An unexpected bug — a Named Program invariant the naming phase was
    /// supposed to guarantee didn't hold.
    Bug,
}

/// The style of a diagnostic label.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LabelStyle {
    /// Labels that describe the primary cause of a diagnostic.
    Primary,
    /// Labels that provide additional context for a diagnostic.
    Secondary,
}

/// A label describing an underlined region of source code.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Label {
    /// The style of the label.
    pub style: LabelStyle,
    /// The location of the labeled snippet.
    pub location: Location,
    /// An optional message describing the labeled code.
    pub message: String,
}

impl Label {
    /// Creates a new label with a style of [`LabelStyle::Primary`].
    #[inline]
    #[must_use]
    pub const fn primary(location: Location) -> Self {
        Self {
            style: LabelStyle::Primary,
            location,
            message: String::new(),
        }
    }

    /// Creates a new label with a style of [`LabelStyle::Secondary`].
    #[inline]
    #[must_use]
    pub const fn secondary(location: Location) -> Self {
        Self {
            style: LabelStyle::Secondary,
            location,
            message: String::new(),
        }
    }

    /// Attaches a message to the label.
    #[inline]
    #[must_use]
    pub fn with_message(mut self, message: impl ToString) -> Self {
        self.message = message.to_string();
        self
    }
}

/// A diagnostic message produced by the compiler.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Diagnostic {
    /// The overall severity of the diagnostic.
    pub severity: Severity,
    /// A stable code identifying this diagnostic, e.g. `"E101"`.
    pub code: Option<String>,
    /// The main message. Should make sense without the labels.
    pub message: String,
    /// Source labels. The order here carries no meaning; the labels are
    /// rendered in source order by the surrounding diagnostic infrastructure.
    pub labels: Vec<Label>,
    /// Free-form notes associated with the diagnostic.
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Creates a new diagnostic with the given severity.
    #[inline]
    #[must_use]
    pub const fn new(severity: Severity) -> Self {
        Self {
            severity,
            code: None,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
        }
    }

    /// Creates a new diagnostic with a severity of [`Severity::Error`].
    #[inline]
    #[must_use]
    pub const fn error() -> Self {
        Self::new(Severity::Error)
    }

    /// Sets the diagnostic's code.
    #[inline]
    #[must_use]
    pub fn with_code(mut self, code: impl ToString) -> Self {
        self.code = Some(code.to_string());
        self
    }

    /// Sets the diagnostic's message.
    #[inline]
    #[must_use]
    pub fn with_message(mut self, message: impl ToString) -> Self {
        self.message = message.to_string();
        self
    }

    /// Adds labels to the diagnostic.
    #[inline]
    #[must_use]
    pub fn with_labels(mut self, labels: impl IntoIterator<Item = Label>) -> Self {
        self.labels.extend(labels);
        self
    }

    /// Adds notes to the diagnostic.
    #[inline]
    #[must_use]
    pub fn with_notes(mut self, notes: impl IntoIterator<Item = impl ToString>) -> Self {
        self.notes.extend(notes.into_iter().map(|n| n.to_string()));
        self
    }

    /// Returns the source files referenced by this diagnostic's labels.
    #[inline]
    #[must_use]
    pub fn files_involved(&self) -> Vec<pylon_interner::PathId> {
        self.labels.iter().map(|label| label.location.filepath).collect()
    }
}

/// Builds a [`Diagnostic`] from a strongly-typed error value.
pub trait BuildDiagnostic {
    /// Converts `self` into a [`Diagnostic`].
    #[must_use]
    fn build(&self) -> Diagnostic;
}
