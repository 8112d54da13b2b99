use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use utoipa::{IntoParams, ToSchema};

use super::{read_state, write_state};
use crate::model::{Employee, EmployeeData, EmployeeId};
use crate::query::{ALL_ROLES, distinct_roles};
use crate::store::{LoadStatus, SharedStore};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmployeeQuery {
    /// Case-insensitive substring of the name
    pub search: Option<String>,
    /// Exact role, or `all`
    pub role: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct EmployeeListResponse {
    pub data: Vec<Employee>,
    pub status: LoadStatus,
    #[schema(nullable = true)]
    pub error: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct RoleListResponse {
    #[schema(example = json!(["Front office", "Support"]))]
    pub roles: Vec<String>,
}

/// List Employees
#[utoipa::path(
    get,
    path = "/api/employee",
    params(EmployeeQuery),
    responses(
        (status = 200, description = "Filtered employee list with ingestion status", body = EmployeeListResponse)
    ),
    tag = "Employee"
)]
pub async fn list_employees(
    store: web::Data<SharedStore>,
    query: web::Query<EmployeeQuery>,
) -> actix_web::Result<impl Responder> {
    let app = read_state(&store)?;

    let search = query.search.as_deref().unwrap_or("");
    let role = query.role.as_deref().unwrap_or(ALL_ROLES);
    let data = app.filter_employees(search, role);
    debug!(search, role, matched = data.len(), "Listing employees");

    Ok(HttpResponse::Ok().json(EmployeeListResponse {
        data,
        status: app.status(),
        error: app.load_error().map(str::to_string),
    }))
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/api/employee",
    request_body = EmployeeData,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Missing required field", body = Object, example = json!({
            "message": "Invalid or missing field: email"
        }))
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    store: web::Data<SharedStore>,
    payload: web::Json<EmployeeData>,
) -> actix_web::Result<impl Responder> {
    let created = write_state(&store)?.add_employee(payload.into_inner())?;
    info!(id = %created.id, "Employee created");

    Ok(HttpResponse::Created().json(created))
}

/// Get Employee by ID
#[utoipa::path(
    get,
    path = "/api/employee/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee 7 not found"
        }))
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    store: web::Data<SharedStore>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let id = EmployeeId(path.into_inner());
    let app = read_state(&store)?;

    Ok(HttpResponse::Ok().json(app.get_employee(id)?))
}

/// Update Employee
#[utoipa::path(
    put,
    path = "/api/employee/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    request_body = EmployeeData,
    responses(
        (status = 200, description = "Employee replaced", body = Employee),
        (status = 400, description = "Missing required field"),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee 7 not found"
        }))
    ),
    tag = "Employee"
)]
pub async fn update_employee(
    store: web::Data<SharedStore>,
    path: web::Path<u64>,
    payload: web::Json<EmployeeData>,
) -> actix_web::Result<impl Responder> {
    let id = EmployeeId(path.into_inner());
    let updated = write_state(&store)?.update_employee(id, payload.into_inner())?;
    info!(%id, "Employee updated");

    Ok(HttpResponse::Ok().json(updated))
}

/// Delete Employee. Unknown ids are accepted as a no-op.
#[utoipa::path(
    delete,
    path = "/api/employee/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 204, description = "Employee removed, or was already absent")
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    store: web::Data<SharedStore>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let id = EmployeeId(path.into_inner());
    let removed = write_state(&store)?.delete_employee(id);
    info!(%id, removed, "Employee delete");

    Ok(HttpResponse::NoContent().finish())
}

/// Distinct roles
#[utoipa::path(
    get,
    path = "/api/employee/roles",
    responses(
        (status = 200, description = "Roles in first-seen order", body = RoleListResponse)
    ),
    tag = "Employee"
)]
pub async fn list_roles(store: web::Data<SharedStore>) -> actix_web::Result<impl Responder> {
    let app = read_state(&store)?;

    Ok(HttpResponse::Ok().json(RoleListResponse {
        roles: distinct_roles(app.list_employees()),
    }))
}
