use chrono::NaiveDate;

use crate::error::{Error, Result};

/// Wire format for all dates crossing the service boundary.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` local-date string. This is the single place where
/// boundary date strings become typed dates; everything past it compares
/// `NaiveDate` values, never strings or raw timestamps.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        Error::InvalidArgument(format!("invalid date '{value}', expected YYYY-MM-DD"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_dates() {
        let date = parse_date("2024-02-29").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(parse_date(" 2024-02-01 ").unwrap().to_string(), "2024-02-01");
    }

    #[test]
    fn rejects_malformed_dates() {
        for bad in ["2024/02/01", "01-02-2024", "2023-02-29", "", "tomorrow"] {
            assert!(matches!(parse_date(bad), Err(Error::InvalidArgument(_))), "{bad}");
        }
    }
}
