use chrono::{DateTime, Datelike, NaiveDate};

/// Parses `YYYY-MM-DD` or an RFC 3339 timestamp into its calendar date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|timestamp| timestamp.date_naive())
}

/// Whole years between `birth_date` and `today`; `None` for unparseable or future dates.
pub fn date_string_to_age(birth_date: &str, today: NaiveDate) -> Option<u32> {
    let born = parse_date(birth_date)?;
    let mut years = today.year() - born.year();
    if (today.month(), today.day()) < (born.month(), born.day()) {
        years -= 1;
    }
    u32::try_from(years).ok()
}

pub fn date_string_to_human(value: &str) -> Option<String> {
    parse_date(value).map(|date| date.format("%b %-d, %Y").to_string())
}
