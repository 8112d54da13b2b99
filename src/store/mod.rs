pub mod attendance_store;
pub mod employee_store;

pub use attendance_store::AttendanceStore;
pub use employee_store::EmployeeStore;

use chrono::NaiveDate;
use serde::Serialize;
use std::sync::RwLock;
use strum::Display;
use utoipa::ToSchema;

use crate::error::StoreError;
use crate::model::{AttendanceEntries, AttendanceRecord, Employee, EmployeeData, EmployeeId};
use crate::query;

/// Shared handle registered with actix as `web::Data<SharedStore>`.
pub type SharedStore = RwLock<AppStore>;

/// Progress of the one-shot employee ingestion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, Serialize, ToSchema)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Application state container owned by the composition root.
///
/// Holds the current snapshot of each store. Commands compute a new snapshot
/// from the current one and swap it in; a failed command leaves state as is.
#[derive(Debug, Clone, Default)]
pub struct AppStore {
    employees: EmployeeStore,
    attendance: AttendanceStore,
    status: LoadStatus,
    load_error: Option<String>,
}

impl AppStore {
    pub fn new() -> Self {
        Self {
            employees: EmployeeStore::new(),
            attendance: AttendanceStore::new(),
            status: LoadStatus::Idle,
            load_error: None,
        }
    }

    pub fn into_shared(self) -> SharedStore {
        RwLock::new(self)
    }

    // ---------- commands ----------

    pub fn add_employee(&mut self, data: EmployeeData) -> Result<Employee, StoreError> {
        let (next, id) = self.employees.add(data)?;
        self.employees = next;
        self.employees
            .get(id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    pub fn update_employee(
        &mut self,
        id: EmployeeId,
        data: EmployeeData,
    ) -> Result<Employee, StoreError> {
        self.employees = self.employees.update(id, data)?;
        self.employees
            .get(id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Returns whether a record was removed. Historical attendance is kept.
    pub fn delete_employee(&mut self, id: EmployeeId) -> bool {
        let existed = self.employees.contains(id);
        self.employees = self.employees.delete(id);
        existed
    }

    /// Stores the sheet as given and returns it as `get_attendance` reads it.
    pub fn save_attendance(&mut self, date: NaiveDate, entries: AttendanceEntries) -> AttendanceRecord {
        self.attendance = self.attendance.save(date, entries);
        self.get_attendance(date)
    }

    pub(crate) fn replace_employees(&mut self, employees: EmployeeStore) {
        self.employees = employees;
    }

    pub(crate) fn set_status(&mut self, status: LoadStatus, error: Option<String>) {
        self.status = status;
        self.load_error = error;
    }

    // ---------- queries ----------

    pub fn employees(&self) -> &EmployeeStore {
        &self.employees
    }

    pub fn attendance(&self) -> &AttendanceStore {
        &self.attendance
    }

    pub fn list_employees(&self) -> &[Employee] {
        self.employees.list()
    }

    pub fn filter_employees(&self, term: &str, role: &str) -> Vec<Employee> {
        query::filter(self.employees.list(), term, role)
    }

    pub fn get_employee(&self, id: EmployeeId) -> Result<&Employee, StoreError> {
        self.employees.get(id).ok_or(StoreError::NotFound(id))
    }

    /// Attendance for `date` restricted to current employees. Unsaved dates
    /// mark every current employee absent.
    pub fn get_attendance(&self, date: NaiveDate) -> AttendanceRecord {
        let known = self.employees.ids();
        self.attendance
            .get(date, known.iter().copied())
            .without_stale(&known)
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }
}
