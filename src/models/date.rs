//! Flexible date parsing for the BFS and swisstopo feeds.

use chrono::NaiveDate;

/// Parse a date in any of the formats the upstream feeds use:
/// DD-MM-YYYY (BFS API), YYYY-MM-DD (ISO) or DD.MM.YYYY (Swiss).
pub fn parse_flexible(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    for format in ["%d-%m-%Y", "%Y-%m-%d", "%d.%m.%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(input, format) {
            return Some(date);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bfs_format() {
        assert_eq!(
            parse_flexible("12-09-1848"),
            NaiveDate::from_ymd_opt(1848, 9, 12)
        );
    }

    #[test]
    fn test_parse_iso_format() {
        assert_eq!(
            parse_flexible("2020-01-15"),
            NaiveDate::from_ymd_opt(2020, 1, 15)
        );
    }

    #[test]
    fn test_parse_swiss_format() {
        assert_eq!(
            parse_flexible("23.07.2024"),
            NaiveDate::from_ymd_opt(2024, 7, 23)
        );
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(parse_flexible("not-a-date"), None);
        assert_eq!(parse_flexible(""), None);
        assert_eq!(parse_flexible("31-02-2020"), None);
    }
}
