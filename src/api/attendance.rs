use actix_web::{HttpResponse, Responder, web};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;
use tracing::info;
use utoipa::ToSchema;

use super::{read_state, write_state};
use crate::model::AttendanceEntries;
use crate::store::SharedStore;

#[derive(Debug, Deserialize, ToSchema)]
#[schema(example = json!({ "entries": { "1": true, "2": false } }))]
pub struct SaveAttendance {
    #[schema(value_type = Object)]
    pub entries: AttendanceEntries,
}

fn parse_date(raw: &str) -> Result<NaiveDate, HttpResponse> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        HttpResponse::BadRequest().json(json!({
            "message": "Date must be formatted as YYYY-MM-DD"
        }))
    })
}

/// All saved attendance sheets
#[utoipa::path(
    get,
    path = "/api/attendance",
    responses(
        (status = 200, description = "Saved sheets in the order they were first recorded", body = [AttendanceRecord])
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(store: web::Data<SharedStore>) -> actix_web::Result<impl Responder> {
    let app = read_state(&store)?;

    Ok(HttpResponse::Ok().json(app.attendance().records()))
}

/// Attendance for one day
#[utoipa::path(
    get,
    path = "/api/attendance/{date}",
    params(
        ("date", Path, description = "Day as YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Saved sheet, or every current employee marked absent", body = AttendanceRecord),
        (status = 400, description = "Malformed date", body = Object, example = json!({
            "message": "Date must be formatted as YYYY-MM-DD"
        }))
    ),
    tag = "Attendance"
)]
pub async fn get_attendance(
    store: web::Data<SharedStore>,
    path: web::Path<String>,
) -> actix_web::Result<HttpResponse> {
    let date = match parse_date(&path) {
        Ok(d) => d,
        Err(resp) => return Ok(resp),
    };
    let app = read_state(&store)?;

    Ok(HttpResponse::Ok().json(app.get_attendance(date)))
}

/// Save attendance for one day, replacing any earlier sheet for that day
#[utoipa::path(
    put,
    path = "/api/attendance/{date}",
    params(
        ("date", Path, description = "Day as YYYY-MM-DD, not in the future")
    ),
    request_body = SaveAttendance,
    responses(
        (status = 200, description = "Attendance saved", body = AttendanceRecord),
        (status = 400, description = "Malformed or future date", body = Object, example = json!({
            "message": "Attendance cannot be recorded for a future date"
        }))
    ),
    tag = "Attendance"
)]
pub async fn save_attendance(
    store: web::Data<SharedStore>,
    path: web::Path<String>,
    payload: web::Json<SaveAttendance>,
) -> actix_web::Result<HttpResponse> {
    let date = match parse_date(&path) {
        Ok(d) => d,
        Err(resp) => return Ok(resp),
    };

    if date > Local::now().date_naive() {
        return Ok(HttpResponse::BadRequest().json(json!({
            "message": "Attendance cannot be recorded for a future date"
        })));
    }

    let entries = payload.into_inner().entries;
    let present = entries.values().filter(|p| **p).count();
    let saved = write_state(&store)?.save_attendance(date, entries);
    info!(%date, present, "Attendance saved");

    Ok(HttpResponse::Ok().json(saved))
}
