//! Calendar day key

use chrono::{DateTime, NaiveDate, TimeZone};
use std::fmt;
use std::str::FromStr;

/// Calendar date (`YYYY-MM-DD`, local time) that the stored entries belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Day of `dt` in its own time zone
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self(dt.date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for DateKey {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_display_is_zero_padded() {
        let key = DateKey::new(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(key.to_string(), "2024-01-02");
    }

    #[test]
    fn test_parse() {
        let key: DateKey = "2024-01-01".parse().unwrap();
        assert_eq!(key.date(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert!("01/01/2024".parse::<DateKey>().is_err());
        assert!("".parse::<DateKey>().is_err());
    }

    #[test]
    fn test_day_follows_time_zone() {
        let utc = Utc.with_ymd_and_hms(2024, 1, 1, 23, 30, 0).unwrap();
        let tokyo = utc.with_timezone(&FixedOffset::east_opt(9 * 3600).unwrap());
        assert_eq!(DateKey::from_datetime(&utc).to_string(), "2024-01-01");
        assert_eq!(DateKey::from_datetime(&tokyo).to_string(), "2024-01-02");
    }
}
