//! Boundary validation for ledger submissions.
//!
//! Raw form fields come in as strings; everything is checked here before
//! any mutation is attempted, and every rejection carries a message the
//! frontend can show as-is.

use chrono::NaiveDate;
use tempo_domain::constants::{LEDGER_DATE_FORMAT, MAX_ENTRY_MINUTES};
use tempo_domain::{Result, TempoError};

/// A fully validated ledger submission.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedEntry {
    pub date: NaiveDate,
    pub activity: String,
    pub minutes: u32,
    pub category: String,
}

/// Validate raw add/update fields into a [`ValidatedEntry`].
pub fn validate_entry(
    date: &str,
    activity: &str,
    minutes: &str,
    category: &str,
) -> Result<ValidatedEntry> {
    let date = NaiveDate::parse_from_str(date.trim(), LEDGER_DATE_FORMAT).map_err(|_| {
        TempoError::InvalidInput("Invalid date format. Use DD-MM-YYYY".to_string())
    })?;

    let activity = free_text("Activity", activity)?;
    let category = free_text("Category", category)?;

    let minutes: u32 = minutes
        .trim()
        .parse()
        .map_err(|_| TempoError::InvalidInput("Minutes must be a whole number".to_string()))?;
    if minutes == 0 {
        return Err(TempoError::InvalidInput(
            "Minutes must be greater than zero".to_string(),
        ));
    }
    if minutes > MAX_ENTRY_MINUTES {
        return Err(TempoError::InvalidInput(
            "Minutes cannot exceed 1440 (24 hours)".to_string(),
        ));
    }

    Ok(ValidatedEntry { date, activity, minutes, category })
}

/// The flat file cannot represent commas or line breaks in a field, so they
/// are rejected rather than silently corrupting a row.
fn free_text(field: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(TempoError::InvalidInput(format!("{field} cannot be empty")));
    }
    if value.contains(',') || value.contains('\n') || value.contains('\r') {
        return Err(TempoError::InvalidInput(format!(
            "{field} must not contain commas or line breaks"
        )));
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_well_formed_entry() {
        let entry = validate_entry("02-01-2024", "Reading", "30", "Learning").unwrap();
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(entry.minutes, 30);
    }

    #[test]
    fn trims_whitespace() {
        let entry = validate_entry(" 02-01-2024 ", "  Reading ", " 30 ", " Learning ").unwrap();
        assert_eq!(entry.activity, "Reading");
        assert_eq!(entry.category, "Learning");
    }

    #[test]
    fn rejects_iso_dates() {
        let err = validate_entry("2024-01-02", "Reading", "30", "Learning").unwrap_err();
        assert!(err.to_string().contains("DD-MM-YYYY"), "got: {err}");
    }

    #[test]
    fn rejects_minutes_over_a_day() {
        let err = validate_entry("02-01-2024", "Reading", "1500", "Learning").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input: Minutes cannot exceed 1440 (24 hours)"
        );
    }

    #[test]
    fn rejects_zero_and_non_numeric_minutes() {
        assert!(validate_entry("02-01-2024", "Reading", "0", "Learning").is_err());
        assert!(validate_entry("02-01-2024", "Reading", "half an hour", "Learning").is_err());
        assert!(validate_entry("02-01-2024", "Reading", "-5", "Learning").is_err());
    }

    #[test]
    fn rejects_empty_and_comma_laden_text() {
        assert!(validate_entry("02-01-2024", "", "30", "Learning").is_err());
        assert!(validate_entry("02-01-2024", "Reading", "30", "  ").is_err());
        assert!(validate_entry("02-01-2024", "Reading, sort of", "30", "Learning").is_err());
    }

    #[test]
    fn accepts_the_full_day_boundary() {
        assert!(validate_entry("02-01-2024", "Sleep study", "1440", "Health").is_ok());
    }
}
