//! crates/cconsole/src/levels.rs
//! Severity levels, their ranks, tags and color hints.

use std::fmt;
use std::str::FromStr;

use console_sink::Color;

/// Message severity, ordered by increasing urgency.
///
/// Each level maps to a strictly increasing rank (`Debug` = 1 through
/// `Error` = 4). A message is forwarded when its rank is at least the
/// console's threshold rank.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
#[repr(u8)]
pub enum LogLevel {
    /// Diagnostic detail.
    Debug = 1,
    /// Routine progress.
    Info = 2,
    /// Something unexpected that did not stop the work.
    Warn = 3,
    /// A failure.
    Error = 4,
}

impl LogLevel {
    /// Every level from least to most urgent.
    pub const ALL: [Self; 4] = [Self::Debug, Self::Info, Self::Warn, Self::Error];

    /// Numeric rank used for gating.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Returns the level with the given rank.
    #[must_use]
    pub const fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            1 => Some(Self::Debug),
            2 => Some(Self::Info),
            3 => Some(Self::Warn),
            4 => Some(Self::Error),
            _ => None,
        }
    }

    /// Canonical upper-case name, as accepted by [`LogLevel::from_name`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    /// Bracketed tag placed in front of decorated messages.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Debug => "[DEBUG]",
            Self::Info => "[INFO]",
            Self::Warn => "[WARN]",
            Self::Error => "[ERROR]",
        }
    }

    /// Display color hint for this level.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Debug => Color::Green,
            Self::Info => Color::Blue,
            Self::Warn => Color::Yellow,
            Self::Error => Color::Red,
        }
    }

    /// Looks up a level by exact, case-sensitive name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.name() == name)
    }

    /// Reports whether a message at `self` passes the `threshold`.
    #[must_use]
    pub const fn passes(self, threshold: Self) -> bool {
        self.rank() >= threshold.rank()
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LogLevel {
    type Err = LevelParseError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::from_name(name).ok_or_else(|| LevelParseError::new(name))
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = LevelParseError;

    fn try_from(rank: u8) -> Result<Self, LevelParseError> {
        Self::from_rank(rank).ok_or_else(|| LevelParseError::new(rank.to_string()))
    }
}

/// Error returned when a name or rank does not denote a [`LogLevel`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid log level \"{value}\" (expected DEBUG, INFO, WARN or ERROR)")]
pub struct LevelParseError {
    value: String,
}

impl LevelParseError {
    /// Creates an error for the rejected value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The rejected input.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_increase_with_urgency() {
        let ranks: Vec<u8> = LogLevel::ALL.iter().map(|level| level.rank()).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn color_hints_are_fixed() {
        assert_eq!(LogLevel::Debug.color(), Color::Green);
        assert_eq!(LogLevel::Info.color(), Color::Blue);
        assert_eq!(LogLevel::Warn.color(), Color::Yellow);
        assert_eq!(LogLevel::Error.color(), Color::Red);
    }

    #[test]
    fn names_match_exactly() {
        for level in LogLevel::ALL {
            assert_eq!(LogLevel::from_name(level.name()), Some(level));
            assert_eq!(level.name().parse::<LogLevel>(), Ok(level));
        }
        assert_eq!(LogLevel::from_name("debug"), None);
        assert_eq!(LogLevel::from_name(" INFO"), None);
        assert_eq!(LogLevel::from_name("WARNING"), None);
        assert_eq!(LogLevel::from_name(""), None);
    }

    #[test]
    fn parse_error_reports_rejected_value() {
        let error = "INVALID".parse::<LogLevel>().unwrap_err();
        assert_eq!(error.value(), "INVALID");
        assert_eq!(
            error.to_string(),
            "invalid log level \"INVALID\" (expected DEBUG, INFO, WARN or ERROR)"
        );
    }

    #[test]
    fn rank_conversion_rejects_out_of_range() {
        assert_eq!(LogLevel::try_from(3u8), Ok(LogLevel::Warn));
        assert!(LogLevel::try_from(0u8).is_err());
        assert!(LogLevel::try_from(5u8).is_err());
    }

    #[test]
    fn rank_conversion_error_names_rejected_rank() {
        let error = LogLevel::try_from(9u8).unwrap_err();
        assert_eq!(error.value(), "9");
        for level in LogLevel::ALL {
            assert_eq!(LogLevel::try_from(level.rank()), Ok(level));
        }
    }

    #[test]
    fn passes_compares_ranks() {
        assert!(LogLevel::Error.passes(LogLevel::Debug));
        assert!(LogLevel::Info.passes(LogLevel::Info));
        assert!(!LogLevel::Debug.passes(LogLevel::Info));
    }
}
