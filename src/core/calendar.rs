//! Month-grid grouping for the calendar view.

use crate::errors::{AppError, AppResult};
use crate::models::location::Location;
use crate::models::record::MaintenanceRecord;
use crate::utils::date;
use chrono::NaiveDate;

pub struct DayCell {
    pub date: NaiveDate,
    /// Record count per location, only locations with at least one record.
    pub counts: Vec<(Location, usize)>,
}

pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    /// Monday-first weeks; `None` cells pad the first and last week.
    pub weeks: Vec<[Option<DayCell>; 7]>,
}

pub fn build_month_grid(month_key: &str, records: &[MaintenanceRecord]) -> AppResult<MonthGrid> {
    let (year, month) =
        date::parse_month(month_key).ok_or_else(|| AppError::InvalidMonth(month_key.into()))?;

    let mut weeks: Vec<[Option<DayCell>; 7]> = Vec::new();
    let mut week: [Option<DayCell>; 7] = Default::default();
    let mut col = date::first_weekday_offset(year, month) as usize;

    for day in 1..=date::days_in_month(year, month) {
        let d = NaiveDate::from_ymd_opt(year, month, day).unwrap();

        let mut counts: Vec<(Location, usize)> = Vec::new();
        for loc in Location::ALL {
            let n = records
                .iter()
                .filter(|r| r.date == d && r.location == loc)
                .count();
            if n > 0 {
                counts.push((loc, n));
            }
        }

        week[col] = Some(DayCell { date: d, counts });
        col += 1;
        if col == 7 {
            weeks.push(std::mem::take(&mut week));
            col = 0;
        }
    }
    if col > 0 {
        weeks.push(week);
    }

    Ok(MonthGrid { year, month, weeks })
}

/// Detail view of a single day, time-ordered.
pub fn records_for_day(records: &[MaintenanceRecord], day: NaiveDate) -> Vec<MaintenanceRecord> {
    let mut out: Vec<_> = records.iter().filter(|r| r.date == day).cloned().collect();
    out.sort_by_key(|r| r.time);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::equipment::EquipmentType;
    use chrono::NaiveTime;

    fn record(day: u32, location: Location) -> MaintenanceRecord {
        MaintenanceRecord::new(
            "T".into(),
            NaiveDate::from_ymd_opt(2024, 7, day).unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            location,
            None,
            EquipmentType::Elevator,
            "1".into(),
            None,
            None,
        )
    }

    #[test]
    fn grid_covers_every_day_once() {
        let grid = build_month_grid("2024-07", &[]).unwrap();
        let days: usize = grid
            .weeks
            .iter()
            .flatten()
            .filter(|c| c.is_some())
            .count();
        assert_eq!(days, 31);
        // July 2024 starts on a Monday and spans 5 weeks
        assert_eq!(grid.weeks.len(), 5);
        assert!(grid.weeks[0][0].is_some());
    }

    #[test]
    fn cells_count_records_per_location() {
        let records = vec![
            record(9, Location::Marina),
            record(9, Location::Marina),
            record(9, Location::Ama),
        ];
        let grid = build_month_grid("2024-07", &records).unwrap();

        let cell = grid
            .weeks
            .iter()
            .flatten()
            .flatten()
            .find(|c| c.date.format("%d").to_string() == "09")
            .unwrap();
        assert_eq!(cell.counts, vec![(Location::Marina, 2), (Location::Ama, 1)]);
    }
}
