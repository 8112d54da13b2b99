use std::collections::BTreeSet;

use crate::error::StoreError;
use crate::model::{Employee, EmployeeData, EmployeeId};

/// Immutable snapshot of the employee collection.
///
/// Every command borrows the current snapshot and returns a new one, so a
/// caller holding an older snapshot never observes a change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeStore {
    employees: Vec<Employee>,
    /// Next id to hand out. Only ever grows, so deleted ids are not reused.
    next_id: u64,
}

impl EmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new employee under a freshly issued id.
    pub fn add(&self, data: EmployeeData) -> Result<(Self, EmployeeId), StoreError> {
        validate(&data)?;

        let id = EmployeeId(self.next_id.max(1));
        let next_id = id.0.checked_add(1).ok_or(StoreError::IdsExhausted)?;
        let mut employees = self.employees.clone();
        employees.push(Employee::new(id, data));

        Ok((Self { employees, next_id }, id))
    }

    /// Append employees that already carry ids (ingested records). Ids already
    /// present, in the store or earlier in `batch`, are skipped and returned.
    /// An id of `u64::MAX` leaves no room for the counter and rejects the batch.
    pub(crate) fn extend_with_ids(
        &self,
        batch: Vec<Employee>,
    ) -> Result<(Self, Vec<EmployeeId>), StoreError> {
        let mut seen = self.ids();
        let mut skipped = Vec::new();
        let mut employees = self.employees.clone();
        let mut next_id = self.next_id;

        for employee in batch {
            if !seen.insert(employee.id) {
                skipped.push(employee.id);
                continue;
            }
            let after = employee.id.0.checked_add(1).ok_or(StoreError::IdsExhausted)?;
            next_id = next_id.max(after);
            employees.push(employee);
        }

        Ok((Self { employees, next_id }, skipped))
    }

    /// Replace the record for `id` in place, keeping its id and position.
    pub fn update(&self, id: EmployeeId, data: EmployeeData) -> Result<Self, StoreError> {
        validate(&data)?;

        let index = self
            .employees
            .iter()
            .position(|e| e.id == id)
            .ok_or(StoreError::NotFound(id))?;

        let mut employees = self.employees.clone();
        employees[index] = Employee::new(id, data);

        Ok(Self {
            employees,
            next_id: self.next_id,
        })
    }

    /// Remove the record for `id`. Unknown ids leave the snapshot unchanged.
    pub fn delete(&self, id: EmployeeId) -> Self {
        Self {
            employees: self
                .employees
                .iter()
                .filter(|e| e.id != id)
                .cloned()
                .collect(),
            next_id: self.next_id,
        }
    }

    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: EmployeeId) -> bool {
        self.get(id).is_some()
    }

    /// Employees in insertion order.
    pub fn list(&self) -> &[Employee] {
        &self.employees
    }

    pub fn ids(&self) -> BTreeSet<EmployeeId> {
        self.employees.iter().map(|e| e.id).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }
}

fn validate(data: &EmployeeData) -> Result<(), StoreError> {
    let required: [(&'static str, &str); 3] = [
        ("name", &data.name),
        ("email", &data.email),
        ("contact", &data.contact),
    ];

    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(StoreError::Validation { field });
        }
    }

    if let Some(salary) = data.salary {
        if salary <= 0.0 || !salary.is_finite() {
            return Err(StoreError::Validation { field: "salary" });
        }
    }

    Ok(())
}
