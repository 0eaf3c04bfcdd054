//! Interval/ordinal pairs and argument parsing

use crate::error::{ChronoNoteError, Result};
use std::fmt;
use std::str::FromStr;

/// Position of a note relative to the reference date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ordinal {
    Current,
    Next,
    Previous,
}

impl Ordinal {
    /// All ordinals, in declaration order
    pub const ALL: [Ordinal; 3] = [Ordinal::Current, Ordinal::Next, Ordinal::Previous];

    pub fn name(&self) -> &'static str {
        match self {
            Ordinal::Current => "Current",
            Ordinal::Next => "Next",
            Ordinal::Previous => "Previous",
        }
    }

    /// Signed number of interval units to move from the reference date
    pub fn offset(&self) -> i32 {
        match self {
            Ordinal::Current => 0,
            Ordinal::Next => 1,
            Ordinal::Previous => -1,
        }
    }
}

/// Calendar unit a note covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interval {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Annually,
}

impl Interval {
    /// All intervals, in declaration order
    pub const ALL: [Interval; 5] = [
        Interval::Daily,
        Interval::Weekly,
        Interval::Monthly,
        Interval::Quarterly,
        Interval::Annually,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Interval::Daily => "Daily",
            Interval::Weekly => "Weekly",
            Interval::Monthly => "Monthly",
            Interval::Quarterly => "Quarterly",
            Interval::Annually => "Annually",
        }
    }

    /// Prefix used for this interval's environment variables (e.g. `DAILY`)
    pub fn env_prefix(&self) -> String {
        self.name().to_uppercase()
    }
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Interval {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Interval::ALL
            .into_iter()
            .find(|interval| interval.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "Invalid interval: '{}'. Valid intervals are: daily, weekly, monthly, quarterly, annually",
                    s
                )
            })
    }
}

/// A parsed (interval, ordinal) pair, e.g. `NextWeekly`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChronoSpec {
    pub interval: Interval,
    pub ordinal: Ordinal,
}

impl ChronoSpec {
    pub fn new(interval: Interval, ordinal: Ordinal) -> Self {
        ChronoSpec { interval, ordinal }
    }

    /// Parse a free-text argument by case-insensitive substring matching.
    ///
    /// Every ordinal and every interval name is tested in declaration order
    /// and the last one contained in the input wins, so `NextPreviousDaily`
    /// parses as `Previous`. Fails unless both kinds matched.
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.to_lowercase();

        let mut ordinal = None;
        for candidate in Ordinal::ALL {
            if normalized.contains(&candidate.name().to_lowercase()) {
                ordinal = Some(candidate);
            }
        }

        let mut interval = None;
        for candidate in Interval::ALL {
            if normalized.contains(&candidate.name().to_lowercase()) {
                interval = Some(candidate);
            }
        }

        match (interval, ordinal) {
            (Some(interval), Some(ordinal)) => Ok(ChronoSpec { interval, ordinal }),
            _ => Err(ChronoNoteError::InvalidArgument(input.to_string())),
        }
    }
}

impl fmt::Display for ChronoSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.ordinal, self.interval)
    }
}
