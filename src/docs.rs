use crate::api::attendance::SaveAttendance;
use crate::api::employee::{EmployeeListResponse, RoleListResponse};
use crate::model::{AttendanceRecord, Employee, EmployeeData};
use crate::store::LoadStatus;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee Desk API",
        version = "0.1.0",
        description = r#"
## Employee Desk

In-memory employee directory and daily attendance sheet.

- **Employees**: create, view, replace, delete, filter by name and role
- **Attendance**: one sheet per day, saving a day again replaces its sheet

State lives for the lifetime of the process. An optional JSON feed seeds the
directory at start-up; the list endpoint reports its load status.
"#,
    ),
    paths(
        crate::api::employee::list_employees,
        crate::api::employee::create_employee,
        crate::api::employee::get_employee,
        crate::api::employee::update_employee,
        crate::api::employee::delete_employee,
        crate::api::employee::list_roles,

        crate::api::attendance::list_attendance,
        crate::api::attendance::get_attendance,
        crate::api::attendance::save_attendance
    ),
    components(
        schemas(
            Employee,
            EmployeeData,
            EmployeeListResponse,
            RoleListResponse,
            LoadStatus,
            AttendanceRecord,
            SaveAttendance
        )
    ),
    tags(
        (name = "Employee", description = "Employee directory APIs"),
        (name = "Attendance", description = "Daily attendance APIs"),
    )
)]
pub struct ApiDoc;
