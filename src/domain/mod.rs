//! Domain layer - Date resolution and note naming

pub mod chrono_note;
pub mod chrono_spec;
pub mod date_format;

pub use chrono_note::{resolve_date, ChronoNote, DEFAULT_DAY_FORMAT, DEFAULT_WEEK_FORMAT};
pub use chrono_spec::{ChronoSpec, Interval, Ordinal};
