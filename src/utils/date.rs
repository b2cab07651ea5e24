use chrono::{Duration, NaiveDate};

use crate::consts::DATE_FORMAT;
use crate::error::AppError;

pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, AppError> {
    let trimmed = s.trim();
    // Try YYYYMMDD
    if trimmed.len() == 8
        && let Ok(d) = NaiveDate::parse_from_str(trimmed, "%Y%m%d")
    {
        return Ok(d);
    }
    // Try YYYY-MM-DD
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| AppError::InvalidDate {
        input: s.to_string(),
    })
}

/// First day of a window of `days` days ending at `end` (inclusive on both ends)
pub(crate) fn window_start(end: NaiveDate, days: u32) -> Result<NaiveDate, AppError> {
    end.checked_sub_signed(Duration::days(i64::from(days)))
        .ok_or(AppError::InvalidWindow { end, days })
}
