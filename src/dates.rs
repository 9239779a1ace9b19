use chrono::{Datelike, Months, NaiveDate};

/// Canonical `YYYY-MM-DD` key for a calendar day.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a `YYYY-MM-DD` key back into a date. Returns `None` for malformed
/// or non-numeric input, and for out-of-range components (a day of 35 is
/// rejected rather than rolled into the next month).
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    let mut parts = key.splitn(3, '-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Convert the 8-digit `YYYYMMDD` form used by the meal API into a date key.
/// Anything that is not exactly eight ASCII digits yields an empty string.
pub fn ymd_to_key(value: &str) -> String {
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return String::new();
    }
    format!("{}-{}-{}", &value[..4], &value[4..6], &value[6..8])
}

/// 8-digit `YYYYMMDD` form expected by the meal API.
pub fn ymd_from_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Inclusive fetch window: the first day of the month `past_months` back
/// through the last day of the month `future_months` ahead of `base`.
pub fn monthly_range(base: NaiveDate, past_months: u32, future_months: u32) -> (NaiveDate, NaiveDate) {
    let month_start = NaiveDate::from_ymd_opt(base.year(), base.month(), 1).unwrap_or(base);
    let from = month_start
        .checked_sub_months(Months::new(past_months))
        .unwrap_or(month_start);
    let to = month_start
        .checked_add_months(Months::new(future_months + 1))
        .and_then(|next_month| next_month.pred_opt())
        .unwrap_or(month_start);
    (from, to)
}
