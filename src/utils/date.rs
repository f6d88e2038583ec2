use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse a "YYYY-MM" month selector into (year, month).
pub fn parse_month(s: &str) -> Option<(i32, u32)> {
    let d = NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d").ok()?;
    Some((d.year(), d.month()))
}

/// "YYYY-MM" key of the current month.
pub fn current_month() -> String {
    today().format("%Y-%m").to_string()
}

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

pub const WEEKDAYS_ES: [&str; 7] = ["Lun", "Mar", "Mié", "Jue", "Vie", "Sáb", "Dom"];

pub fn month_name(month: u32) -> &'static str {
    MONTHS_ES[(month as usize - 1) % 12]
}

/// Human label for a "YYYY-MM" selector, e.g. "julio 2024".
pub fn month_label(month_key: &str) -> String {
    match parse_month(month_key) {
        Some((year, month)) => format!("{} {}", month_name(month), year),
        None => month_key.to_string(),
    }
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap()
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap()
    };
    next.signed_duration_since(first).num_days() as u32
}

/// 0-based column (Monday-first week) of the month's first day.
pub fn first_weekday_offset(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .unwrap()
        .weekday()
        .num_days_from_monday()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_label_is_spanish() {
        assert_eq!(month_label("2024-07"), "julio 2024");
        assert_eq!(month_label("2025-01"), "enero 2025");
    }

    #[test]
    fn invalid_month_label_falls_back() {
        assert_eq!(month_label("not-a-month"), "not-a-month");
    }

    #[test]
    fn leap_february() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 2), 28);
    }

    #[test]
    fn monday_first_offset() {
        // 2024-07-01 was a Monday
        assert_eq!(first_weekday_offset(2024, 7), 0);
        // 2024-03-01 was a Friday
        assert_eq!(first_weekday_offset(2024, 3), 4);
    }
}
