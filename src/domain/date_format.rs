//! Luxon-style date format tokens and Sunday-first week numbering

use crate::error::{ChronoNoteError, Result};
use chrono::{Datelike, Days, NaiveDate};

/// Week number where weeks run Sunday to Saturday and week 1 is the week
/// containing January 1st. This is the en-US locale rule, not ISO 8601.
///
/// `None` when the week reaches past the supported calendar range.
pub fn local_week_number(date: NaiveDate) -> Option<u32> {
    let week_start = sunday_on_or_before(date)?;
    let first_week_start = first_local_week_start(local_week_year(date)?)?;
    Some(((week_start - first_week_start).num_days() / 7) as u32 + 1)
}

/// Year the local week belongs to: the year of the Saturday ending the week
pub fn local_week_year(date: NaiveDate) -> Option<i32> {
    sunday_on_or_before(date)?
        .checked_add_days(Days::new(6))
        .map(|saturday| saturday.year())
}

fn sunday_on_or_before(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_sunday())))
}

fn first_local_week_start(year: i32) -> Option<NaiveDate> {
    sunday_on_or_before(NaiveDate::from_ymd_opt(year, 1, 1)?)
}

fn week_out_of_range(date: NaiveDate) -> ChronoNoteError {
    ChronoNoteError::DateOutOfRange(format!("local week of {}", date))
}

/// Format a date with a Luxon-style token string.
///
/// Letters repeat to select a width (`yyyy`, `MM`, `cccc`); text inside single
/// quotes is copied verbatim and `''` yields a quote. Letter runs that are not
/// a known token are copied as-is. Week tokens fail with `DateOutOfRange`
/// when the week runs off the edge of the calendar.
pub fn format_tokens(date: NaiveDate, token: &str) -> Result<String> {
    let chars: Vec<char> = token.chars().collect();
    let mut output = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '\'' {
            if chars.get(i + 1) == Some(&'\'') {
                output.push('\'');
                i += 2;
                continue;
            }
            i += 1;
            while i < chars.len() && chars[i] != '\'' {
                output.push(chars[i]);
                i += 1;
            }
            // Skip the closing quote; an unterminated literal runs to the end
            i += 1;
            continue;
        }

        if !c.is_ascii_alphabetic() {
            output.push(c);
            i += 1;
            continue;
        }

        let mut run = 1;
        while i + run < chars.len() && chars[i + run] == c {
            run += 1;
        }

        match render_token(date, c, run)? {
            Some(rendered) => output.push_str(&rendered),
            None => output.extend(std::iter::repeat(c).take(run)),
        }
        i += run;
    }

    Ok(output)
}

fn render_token(date: NaiveDate, letter: char, width: usize) -> Result<Option<String>> {
    let rendered = match (letter, width) {
        ('y', 1) => date.year().to_string(),
        ('y', 2) => format!("{:02}", date.year().rem_euclid(100)),
        ('y', 4) => format!("{:04}", date.year()),
        ('M' | 'L', 1) => date.month().to_string(),
        ('M' | 'L', 2) => format!("{:02}", date.month()),
        ('M' | 'L', 3) => date.format("%b").to_string(),
        ('M' | 'L', 4) => date.format("%B").to_string(),
        ('d', 1) => date.day().to_string(),
        ('d', 2) => format!("{:02}", date.day()),
        ('c' | 'E', 1) => date.weekday().number_from_monday().to_string(),
        ('c' | 'E', 3) => date.format("%a").to_string(),
        ('c' | 'E', 4) => date.format("%A").to_string(),
        ('W', 1) => date.iso_week().week().to_string(),
        ('W', 2) => format!("{:02}", date.iso_week().week()),
        ('k', 2) => format!("{:02}", date.iso_week().year().rem_euclid(100)),
        ('k', 4) => format!("{:04}", date.iso_week().year()),
        ('n', 1) => local_week(date)?.to_string(),
        ('n', 2) => format!("{:02}", local_week(date)?),
        ('i', 2) => format!("{:02}", local_year(date)?.rem_euclid(100)),
        ('i', 4) => format!("{:04}", local_year(date)?),
        ('q', 1) => quarter(date).to_string(),
        ('q', 2) => format!("{:02}", quarter(date)),
        ('o', 1) => date.ordinal().to_string(),
        ('o', 3) => format!("{:03}", date.ordinal()),
        _ => return Ok(None),
    };
    Ok(Some(rendered))
}

fn local_week(date: NaiveDate) -> Result<u32> {
    local_week_number(date).ok_or_else(|| week_out_of_range(date))
}

fn local_year(date: NaiveDate) -> Result<i32> {
    local_week_year(date).ok_or_else(|| week_out_of_range(date))
}

fn quarter(date: NaiveDate) -> u32 {
    (date.month() - 1) / 3 + 1
}
