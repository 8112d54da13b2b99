use crate::model::Employee;

/// Role filter value that matches every role.
pub const ALL_ROLES: &str = "all";

/// Employees whose name contains `term` (case-insensitive) and whose role
/// equals `role`, or any role when `role` is [`ALL_ROLES`]. Input order is kept.
pub fn filter(employees: &[Employee], term: &str, role: &str) -> Vec<Employee> {
    let needle = term.to_lowercase();

    employees
        .iter()
        .filter(|e| e.name().to_lowercase().contains(&needle))
        .filter(|e| role == ALL_ROLES || e.role() == role)
        .cloned()
        .collect()
}

/// Distinct roles in first-seen order, for populating a role selector.
pub fn distinct_roles(employees: &[Employee]) -> Vec<String> {
    let mut roles: Vec<String> = Vec::new();
    for e in employees {
        if !roles.iter().any(|r| r == e.role()) {
            roles.push(e.role().to_string());
        }
    }
    roles
}
