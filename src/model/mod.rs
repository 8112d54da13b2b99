pub mod attendance;
pub mod employee;

pub use attendance::{AttendanceEntries, AttendanceRecord};
pub use employee::{Employee, EmployeeData, EmployeeId};
