use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::cfg::{SECONDS_PER_DEGREE, SECONDS_PER_MINUTE};
use crate::error::{AngleError, FormatIssue};

/// One angle as surveyors write it: whole degrees, minutes and seconds.
///
/// Invariants
/// - `minutes` and `seconds` lie in `[0, 60)`.
/// - `degrees` has no upper bound (`235°` is a valid reading). It is
///   non-negative for anything built through [`Angle::new`] or parsing; only
///   [`super::from_seconds`] on a negative total yields negative degrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Angle {
    degrees: i64,
    minutes: i64,
    seconds: i64,
}

impl Angle {
    /// Checked constructor; same range rules as parsing.
    pub fn new(degrees: i64, minutes: i64, seconds: i64) -> Result<Self, FormatIssue> {
        if degrees < 0 || minutes < 0 || seconds < 0 {
            return Err(FormatIssue::Negative);
        }
        if minutes >= SECONDS_PER_MINUTE {
            return Err(FormatIssue::MinutesOutOfRange(minutes));
        }
        if seconds >= SECONDS_PER_MINUTE {
            return Err(FormatIssue::SecondsOutOfRange(seconds));
        }
        Ok(Self {
            degrees,
            minutes,
            seconds,
        })
    }

    #[inline]
    pub(crate) fn from_parts_unchecked(degrees: i64, minutes: i64, seconds: i64) -> Self {
        Self {
            degrees,
            minutes,
            seconds,
        }
    }

    #[inline]
    pub fn degrees(&self) -> i64 {
        self.degrees
    }
    #[inline]
    pub fn minutes(&self) -> i64 {
        self.minutes
    }
    #[inline]
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// `(d, m, s)` tuple, the shape front-ends exchange with the core.
    #[inline]
    pub fn as_tuple(&self) -> (i64, i64, i64) {
        (self.degrees, self.minutes, self.seconds)
    }

    /// Total arc-seconds; see [`super::to_seconds`].
    #[inline]
    pub fn total_seconds(&self) -> i128 {
        super::to_seconds(*self)
    }

    /// `d + m/60 + s/3600`.
    #[inline]
    pub fn to_decimal_degrees(&self) -> f64 {
        self.degrees as f64 + self.minutes as f64 / 60.0 + self.seconds as f64 / SECONDS_PER_DEGREE as f64
    }

    /// True when every component satisfies the [`Angle::new`] ranges.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        Angle::new(self.degrees, self.minutes, self.seconds).is_ok()
    }
}

impl TryFrom<(i64, i64, i64)> for Angle {
    type Error = FormatIssue;

    fn try_from((d, m, s): (i64, i64, i64)) -> Result<Self, Self::Error> {
        Angle::new(d, m, s)
    }
}

impl Ord for Angle {
    fn cmp(&self, other: &Self) -> Ordering {
        self.total_seconds().cmp(&other.total_seconds())
    }
}

impl PartialOrd for Angle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// `235°20'25"`; the alternate form `{:#}` prints `235:20:25`.
impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}:{}:{}", self.degrees, self.minutes, self.seconds)
        } else {
            write!(f, "{}°{}'{}\"", self.degrees, self.minutes, self.seconds)
        }
    }
}

impl FromStr for Angle {
    type Err = AngleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parse_dms(s)
    }
}
