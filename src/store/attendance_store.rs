use chrono::NaiveDate;

use crate::model::{AttendanceEntries, AttendanceRecord, EmployeeId};

/// Immutable snapshot of the saved attendance sheets, one per date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttendanceStore {
    records: Vec<AttendanceRecord>,
}

impl AttendanceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert by date: an existing sheet for `date` is replaced wholesale,
    /// otherwise a new sheet is appended.
    pub fn save(&self, date: NaiveDate, entries: AttendanceEntries) -> Self {
        let mut records = self.records.clone();
        let record = AttendanceRecord::new(date, entries);

        match records.iter().position(|r| r.date == date) {
            Some(index) => records[index] = record,
            None => records.push(record),
        }

        Self { records }
    }

    /// The saved sheet for `date`, or one marking every id in `employee_ids`
    /// absent when nothing has been saved for that day.
    pub fn get<I>(&self, date: NaiveDate, employee_ids: I) -> AttendanceRecord
    where
        I: IntoIterator<Item = EmployeeId>,
    {
        self.find(date)
            .cloned()
            .unwrap_or_else(|| AttendanceRecord::absent_for(date, employee_ids))
    }

    pub fn find(&self, date: NaiveDate) -> Option<&AttendanceRecord> {
        self.records.iter().find(|r| r.date == date)
    }

    pub fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }
}
