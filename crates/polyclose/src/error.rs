//! Typed failures of the correction engine and the polygon builder.
//!
//! Three families, reported through [`AngleError::kind`]:
//! - format: malformed DMS text (`parse_dms`, `parse_angle_fields`);
//! - validation: too few angles, a side count that disagrees with the angle
//!   list, or an angle outside the DMS ranges;
//! - degenerate: an all-zero angle set that still carries a closure error.
//!
//! The core never recovers from these; callers map them to user messages.

use std::fmt;

use thiserror::Error;

use crate::dms::Angle;

/// Why a DMS text failed to parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormatIssue {
    /// Blank input.
    Empty,
    /// Splitting did not yield exactly three components.
    TokenCount(usize),
    /// A component is not a base-10 integer.
    NotInteger(String),
    /// A component is below zero.
    Negative,
    /// Minutes not in `[0, 60)`.
    MinutesOutOfRange(i64),
    /// Seconds not in `[0, 60)`.
    SecondsOutOfRange(i64),
}

impl fmt::Display for FormatIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatIssue::Empty => write!(f, "missing input"),
            FormatIssue::TokenCount(n) => write!(f, "expected 3 components, found {n}"),
            FormatIssue::NotInteger(tok) => write!(f, "component {tok:?} is not an integer"),
            FormatIssue::Negative => write!(f, "components must be non-negative"),
            FormatIssue::MinutesOutOfRange(m) => write!(f, "minutes {m} not in [0, 60)"),
            FormatIssue::SecondsOutOfRange(s) => write!(f, "seconds {s} not in [0, 60)"),
        }
    }
}

/// Coarse classification of [`AngleError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Format,
    Validation,
    Degenerate,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AngleError {
    #[error("invalid DMS format {text:?}: {issue}; use 'D:M:S' or 'D M S' (e.g. 235:20:25)")]
    Format { text: String, issue: FormatIssue },

    /// A format error tagged with the 1-based input field it came from.
    #[error("Angle {index}")]
    Field {
        index: usize,
        #[source]
        source: Box<AngleError>,
    },

    #[error("polygon must have at least 3 angles, got {0}")]
    TooFewAngles(usize),

    #[error("side count {sides} does not match {angles} supplied angles")]
    SideCountMismatch { sides: usize, angles: usize },

    #[error("Angle {index} is out of range: {angle}")]
    OutOfRange { index: usize, angle: Angle },

    #[error("all angles are zero; a closure error of {error_seconds}\" cannot be distributed")]
    Degenerate { error_seconds: i128 },
}

impl AngleError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AngleError::Format { .. } => ErrorKind::Format,
            AngleError::Field { source, .. } => source.kind(),
            AngleError::TooFewAngles(_)
            | AngleError::SideCountMismatch { .. }
            | AngleError::OutOfRange { .. } => ErrorKind::Validation,
            AngleError::Degenerate { .. } => ErrorKind::Degenerate,
        }
    }

    /// 1-based field index, when the error was raised for a specific input field.
    pub fn field_index(&self) -> Option<usize> {
        match self {
            AngleError::Field { index, .. } | AngleError::OutOfRange { index, .. } => Some(*index),
            _ => None,
        }
    }

    pub(crate) fn format(text: &str, issue: FormatIssue) -> Self {
        AngleError::Format {
            text: text.to_string(),
            issue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_errors_inherit_kind_and_index() {
        let inner = AngleError::format("1:2", FormatIssue::TokenCount(2));
        let e = AngleError::Field {
            index: 4,
            source: Box::new(inner),
        };
        assert_eq!(e.kind(), ErrorKind::Format);
        assert_eq!(e.field_index(), Some(4));
        assert_eq!(e.to_string(), "Angle 4");
        let cause = std::error::Error::source(&e).unwrap().to_string();
        assert!(cause.starts_with("invalid DMS format \"1:2\""), "{cause}");
    }

    #[test]
    fn kinds() {
        assert_eq!(AngleError::TooFewAngles(2).kind(), ErrorKind::Validation);
        assert_eq!(
            AngleError::Degenerate { error_seconds: -648000 }.kind(),
            ErrorKind::Degenerate
        );
        assert_eq!(AngleError::TooFewAngles(2).field_index(), None);
    }
}
