//! Timestamp-based file naming shared by transcripts and error records.

use chrono::NaiveDateTime;

/// Timestamp component of every output filename
pub const FILE_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Prefix for error record files, shared by all providers
pub const ERROR_PREFIX: &str = "error_log";

/// Extension of every output file
pub const EXTENSION: &str = "txt";

/// Build the file stem `<prefix>_<YYYYMMDD_HHMMSS>`.
pub fn file_stem(prefix: &str, timestamp: &NaiveDateTime) -> String {
    format!("{}_{}", prefix, timestamp.format(FILE_TIMESTAMP_FORMAT))
}

/// Build the full file name `<prefix>_<YYYYMMDD_HHMMSS>.txt`.
pub fn file_name(prefix: &str, timestamp: &NaiveDateTime) -> String {
    format!("{}.{}", file_stem(prefix, timestamp), EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 9)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_file_name_layout() {
        assert_eq!(
            file_name("deepseek_conversation", &at(14, 5, 9)),
            "deepseek_conversation_20250309_140509.txt"
        );
        assert_eq!(file_name(ERROR_PREFIX, &at(0, 0, 0)), "error_log_20250309_000000.txt");
    }

    #[test]
    fn test_second_granularity() {
        let a = at(14, 5, 9);
        let b = a + chrono::Duration::milliseconds(400);
        let c = a + chrono::Duration::seconds(1);
        assert_eq!(file_stem("p", &a), file_stem("p", &b));
        assert_ne!(file_stem("p", &a), file_stem("p", &c));
    }
}
