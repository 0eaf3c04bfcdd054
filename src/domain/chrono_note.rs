//! Date resolution and file name formatting for periodic notes

use crate::domain::chrono_spec::{ChronoSpec, Interval, Ordinal};
use crate::domain::date_format::{format_tokens, local_week_number};
use crate::error::{ChronoNoteError, Result};
use chrono::{Datelike, Days, Months, NaiveDate};

/// Default token for day-based note names (e.g. "2024-01-01 Monday")
pub const DEFAULT_DAY_FORMAT: &str = "yyyy-MM-dd cccc";

/// Default token for week-based note names (e.g. "2024-W01")
pub const DEFAULT_WEEK_FORMAT: &str = "yyyy-'W'nn";

/// Move `reference` by the ordinal's offset in the interval's calendar unit.
///
/// Month-based units clamp to the end of the target month, so one month
/// after January 31st is the last day of February.
pub fn resolve_date(spec: ChronoSpec, reference: NaiveDate) -> Result<NaiveDate> {
    let offset = spec.ordinal.offset();
    let magnitude = offset.unsigned_abs();

    let resolved = match spec.interval {
        Interval::Daily => shift_days(reference, offset, u64::from(magnitude)),
        Interval::Weekly => shift_days(reference, offset, u64::from(magnitude) * 7),
        Interval::Monthly => shift_months(reference, offset, magnitude),
        Interval::Quarterly => shift_months(reference, offset, magnitude * 3),
        Interval::Annually => shift_months(reference, offset, magnitude * 12),
    };

    resolved.ok_or_else(|| {
        ChronoNoteError::DateOutOfRange(format!("{} from {}", spec, reference))
    })
}

fn shift_days(date: NaiveDate, direction: i32, days: u64) -> Option<NaiveDate> {
    if direction < 0 {
        date.checked_sub_days(Days::new(days))
    } else {
        date.checked_add_days(Days::new(days))
    }
}

fn shift_months(date: NaiveDate, direction: i32, months: u32) -> Option<NaiveDate> {
    if direction < 0 {
        date.checked_sub_months(Months::new(months))
    } else {
        date.checked_add_months(Months::new(months))
    }
}

/// A periodic note: the parsed spec plus the date it resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChronoNote {
    spec: ChronoSpec,
    date: NaiveDate,
}

impl ChronoNote {
    /// Resolve the note's date once, relative to `reference`
    pub fn new(spec: ChronoSpec, reference: NaiveDate) -> Result<Self> {
        let date = resolve_date(spec, reference)?;
        tracing::info!(
            "Date with {} interval and {} ordinal set to: {}",
            spec.interval,
            spec.ordinal,
            date.format("%Y-%m-%d")
        );
        Ok(ChronoNote { spec, date })
    }

    pub fn spec(&self) -> ChronoSpec {
        self.spec
    }

    pub fn interval(&self) -> Interval {
        self.spec.interval
    }

    pub fn ordinal(&self) -> Ordinal {
        self.spec.ordinal
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Format the resolved date with a Luxon-style token.
    ///
    /// Only an empty result is rejected; a malformed but non-empty token
    /// passes through and produces whatever literal text it spells.
    pub fn format_date(&self, format_token: &str) -> Result<String> {
        let formatted = format_tokens(self.date, format_token)?;
        if formatted.is_empty() {
            return Err(ChronoNoteError::InvalidDateFormat(format_token.to_string()));
        }
        Ok(formatted)
    }

    /// Format with `format_token`, or "yyyy-MM-dd cccc" when none is given
    pub fn format_day_date(&self, format_token: Option<&str>) -> Result<String> {
        self.format_date(format_token.unwrap_or(DEFAULT_DAY_FORMAT))
    }

    /// Format with `format_token`, or as "yyyy-Www" using the Sunday-first
    /// week number when none is given.
    ///
    /// The default keeps the calendar year of the date, not the week year.
    pub fn format_week_date(&self, format_token: Option<&str>) -> Result<String> {
        match format_token {
            Some(token) => self.format_date(token),
            None => Ok(format!("{:04}-W{:02}", self.date.year(), self.week_number()?)),
        }
    }

    /// Sunday-first (en-US) week number of the resolved date
    pub fn week_number(&self) -> Result<u32> {
        local_week_number(self.date).ok_or_else(|| {
            ChronoNoteError::DateOutOfRange(format!("local week of {}", self.date))
        })
    }
}
