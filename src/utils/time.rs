use chrono::{NaiveDate, Utc};

/// Calendar day in UTC, the date stamped on newly appended records.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}
