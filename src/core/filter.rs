//! Explicit view state and the pure filtering functions derived from it.
//! Commands build a `ViewState` from their flags and every consumer of the
//! "filtered list" goes through `filter_records`.

use crate::errors::{AppError, AppResult};
use crate::models::equipment::EquipmentType;
use crate::models::location::Location;
use crate::models::record::MaintenanceRecord;
use crate::utils::date;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationFilter {
    All,
    One(Location),
}

impl LocationFilter {
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("all") || s.eq_ignore_ascii_case("todas") {
            return Some(LocationFilter::All);
        }
        Location::from_code(s).map(LocationFilter::One)
    }

    pub fn matches(&self, location: Location) -> bool {
        match self {
            LocationFilter::All => true,
            LocationFilter::One(l) => *l == location,
        }
    }

    /// Label used in report headers and share messages.
    pub fn label(&self) -> &'static str {
        match self {
            LocationFilter::All => "Todas las Ubicaciones",
            LocationFilter::One(l) => l.label(),
        }
    }
}

/// The whole presentation state: month selector, location tab, search box.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewState {
    pub month: String, // "YYYY-MM"
    pub location: LocationFilter,
    pub search: String,
}

impl ViewState {
    pub fn new(month: Option<String>, location: Option<String>, search: Option<String>) -> AppResult<Self> {
        let month = match month {
            Some(m) => {
                date::parse_month(&m).ok_or(AppError::InvalidMonth(m.clone()))?;
                m
            }
            None => date::current_month(),
        };

        let location = match location {
            Some(l) => LocationFilter::parse(&l).ok_or(AppError::InvalidLocation(l))?,
            None => LocationFilter::All,
        };

        Ok(Self {
            month,
            location,
            search: search.unwrap_or_default(),
        })
    }

    pub fn month_label(&self) -> String {
        date::month_label(&self.month)
    }
}

/// Three predicates ANDed: month-of-date equality, location
/// equality-or-wildcard, case-insensitive substring search.
pub fn filter_records(state: &ViewState, records: &[MaintenanceRecord]) -> Vec<MaintenanceRecord> {
    let term = state.search.to_lowercase();

    records
        .iter()
        .filter(|r| r.month_key() == state.month)
        .filter(|r| state.location.matches(r.location))
        .filter(|r| {
            term.is_empty()
                || r.technician.to_lowercase().contains(&term)
                || r.equipment_order.to_lowercase().contains(&term)
                || r.location.label().to_lowercase().contains(&term)
                || r.notes
                    .as_deref()
                    .is_some_and(|n| n.to_lowercase().contains(&term))
        })
        .cloned()
        .collect()
}

/// date + time ascending; stable for same-timestamp records.
pub fn sort_by_timestamp(records: &mut [MaintenanceRecord]) {
    records.sort_by_key(|r| r.timestamp());
}

pub struct Stats {
    pub total: usize,
    pub elevators: usize,
    pub escalators: usize,
}

pub fn stats(records: &[MaintenanceRecord]) -> Stats {
    Stats {
        total: records.len(),
        elevators: records
            .iter()
            .filter(|r| r.equipment_type == EquipmentType::Elevator)
            .count(),
        escalators: records
            .iter()
            .filter(|r| r.equipment_type == EquipmentType::Escalator)
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn record(date: &str, location: Location, notes: Option<&str>) -> MaintenanceRecord {
        MaintenanceRecord::new(
            "Víctor González".into(),
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            location,
            None,
            EquipmentType::Elevator,
            "7".into(),
            notes.map(String::from),
            None,
        )
    }

    fn state(month: &str, location: &str, search: &str) -> ViewState {
        ViewState::new(
            Some(month.into()),
            Some(location.into()),
            Some(search.into()),
        )
        .unwrap()
    }

    #[test]
    fn month_filter_ignores_other_predicates() {
        let records = vec![
            record("2024-07-01", Location::Marina, None),
            record("2024-07-30", Location::Ama, None),
            record("2024-08-01", Location::Marina, None),
        ];

        let hits = filter_records(&state("2024-07", "ALL", ""), &records);
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|r| r.month_key() == "2024-07"));
    }

    #[test]
    fn location_filter_is_exact_or_wildcard() {
        let records = vec![
            record("2024-07-01", Location::Marina, None),
            record("2024-07-02", Location::Boulevard, None),
        ];

        assert_eq!(filter_records(&state("2024-07", "Marina", ""), &records).len(), 1);
        assert_eq!(filter_records(&state("2024-07", "ALL", ""), &records).len(), 2);
    }

    #[test]
    fn search_spans_technician_equipment_location_notes() {
        let records = vec![
            record("2024-07-01", Location::Marina, Some("cambio de cables")),
            record("2024-07-02", Location::Boulevard, None),
        ];

        assert_eq!(filter_records(&state("2024-07", "ALL", "CABLES"), &records).len(), 1);
        assert_eq!(filter_records(&state("2024-07", "ALL", "víctor"), &records).len(), 2);
        assert_eq!(filter_records(&state("2024-07", "ALL", "boulevard"), &records).len(), 1);
        assert_eq!(filter_records(&state("2024-07", "ALL", "nada-parecido"), &records).len(), 0);
    }

    #[test]
    fn invalid_month_is_rejected() {
        assert!(ViewState::new(Some("julio".into()), None, None).is_err());
    }

    #[test]
    fn counts_split_by_equipment_type() {
        let mut a = record("2024-07-01", Location::Marina, None);
        a.equipment_type = EquipmentType::Escalator;
        let s = stats(&[a, record("2024-07-02", Location::Marina, None)]);
        assert_eq!((s.total, s.elevators, s.escalators), (2, 1, 1));
    }
}
