use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use utoipa::ToSchema;

use super::employee::EmployeeId;

/// Presence flags keyed by employee id. Missing ids count as absent.
pub type AttendanceEntries = BTreeMap<EmployeeId, bool>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "date": "2024-03-01",
        "entries": { "1": true, "2": false }
    })
)]
pub struct AttendanceRecord {
    #[schema(value_type = String, format = "date")]
    pub date: NaiveDate,

    #[schema(value_type = Object)]
    pub entries: AttendanceEntries,
}

impl AttendanceRecord {
    pub fn new(date: NaiveDate, entries: AttendanceEntries) -> Self {
        Self { date, entries }
    }

    /// Record with every given employee marked absent.
    pub fn absent_for<I>(date: NaiveDate, ids: I) -> Self
    where
        I: IntoIterator<Item = EmployeeId>,
    {
        Self {
            date,
            entries: ids.into_iter().map(|id| (id, false)).collect(),
        }
    }

    pub fn is_present(&self, id: EmployeeId) -> bool {
        self.entries.get(&id).copied().unwrap_or(false)
    }

    /// Copy of this record without entries for employees that no longer exist.
    pub fn without_stale(&self, known: &BTreeSet<EmployeeId>) -> Self {
        Self {
            date: self.date,
            entries: self
                .entries
                .iter()
                .filter(|(id, _)| known.contains(id))
                .map(|(id, present)| (*id, *present))
                .collect(),
        }
    }
}
