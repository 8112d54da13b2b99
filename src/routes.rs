use crate::{
    api::{attendance, employee},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;
use anyhow::anyhow;
use std::sync::Arc;

pub type Limiter = Governor<PeerIpKeyExtractor, NoOpMiddleware>;

/// Per-IP limiter allowing `requests_per_min` with a burst of the same size.
pub fn build_limiter(requests_per_min: u32) -> anyhow::Result<Limiter> {
    let per_ms = 60_000 / u64::from(requests_per_min.max(1));
    let cfg = GovernorConfigBuilder::default()
        .per_millisecond(per_ms.max(1))
        .burst_size(requests_per_min.max(1))
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .ok_or_else(|| anyhow!("invalid rate limit of {requests_per_min} per minute"))?;
    Ok(Governor::new(&cfg))
}

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config, limiter: Arc<Limiter>) {
    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(limiter) // rate limiting
            .configure(api_routes),
    );
}

/// Employee and attendance resources, relative to the API prefix.
pub fn api_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/employee")
            // /employee
            .service(
                web::resource("")
                    .route(web::post().to(employee::create_employee))
                    .route(web::get().to(employee::list_employees)),
            )
            // /employee/roles, ahead of /{id}
            .service(web::resource("/roles").route(web::get().to(employee::list_roles)))
            // /employee/{id}
            .service(
                web::resource("/{id}")
                    .route(web::put().to(employee::update_employee))
                    .route(web::get().to(employee::get_employee))
                    .route(web::delete().to(employee::delete_employee)),
            ),
    )
    .service(
        web::scope("/attendance")
            // /attendance
            .service(web::resource("").route(web::get().to(attendance::list_attendance)))
            // /attendance/{date}
            .service(
                web::resource("/{date}")
                    .route(web::get().to(attendance::get_attendance))
                    .route(web::put().to(attendance::save_attendance)),
            ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::employee::fixtures::data;
    use crate::store::{AppStore, SharedStore};
    use actix_web::test as actix_test;
    use actix_web::{App, http::StatusCode};
    use chrono::{Duration, Local};
    use serde_json::{Value, json};

    fn state() -> web::Data<SharedStore> {
        web::Data::new(AppStore::new().into_shared())
    }

    macro_rules! app {
        ($state:expr) => {
            actix_test::init_service(App::new().app_data($state.clone()).configure(api_routes)).await
        };
    }

    fn dana() -> Value {
        json!({
            "name": "Dana",
            "email": "d@x.com",
            "contact": "555",
            "role": "IT",
            "joiningDate": "2024-01-15",
            "leaves": 0
        })
    }

    #[test]
    fn limiter_builds_for_small_and_large_rates() {
        assert!(build_limiter(60).is_ok());
        assert!(build_limiter(100_000).is_ok());
    }

    #[actix_web::test]
    async fn create_then_get_employee() {
        let state = state();
        let app = app!(state);

        let req = actix_test::TestRequest::post().uri("/employee").set_json(dana()).to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Value = actix_test::read_body_json(resp).await;
        let id = created["id"].as_u64().unwrap();

        let req = actix_test::TestRequest::get().uri(&format!("/employee/{id}")).to_request();
        let fetched: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched["name"], "Dana");
        assert_eq!(fetched["joiningDate"], "2024-01-15");
    }

    #[actix_web::test]
    async fn create_with_blank_email_is_bad_request() {
        let state = state();
        let app = app!(state);
        let mut body = dana();
        body["email"] = json!("");

        let req = actix_test::TestRequest::post().uri("/employee").set_json(body).to_request();
        let resp = actix_test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(state.read().unwrap().list_employees().is_empty());
    }

    #[actix_web::test]
    async fn update_unknown_is_not_found_and_delete_unknown_is_no_content() {
        let state = state();
        let app = app!(state);

        let req = actix_test::TestRequest::put().uri("/employee/999").set_json(dana()).to_request();
        assert_eq!(actix_test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let req = actix_test::TestRequest::delete().uri("/employee/999").to_request();
        assert_eq!(actix_test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn list_filters_by_search_and_role() {
        let state = state();
        {
            let mut app = state.write().unwrap();
            app.add_employee(data("Alice Johnson", "Front office")).unwrap();
            app.add_employee(data("Bob Smith", "Support")).unwrap();
        }
        let app = app!(state);

        let req = actix_test::TestRequest::get().uri("/employee?search=ALI&role=all").to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"][0]["name"], "Alice Johnson");
        assert_eq!(body["status"], "idle");

        let req = actix_test::TestRequest::get().uri("/employee?role=Support").to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"][0]["name"], "Bob Smith");

        let req = actix_test::TestRequest::get().uri("/employee/roles").to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["roles"], json!(["Front office", "Support"]));
    }

    #[actix_web::test]
    async fn attendance_save_replaces_previous_sheet() {
        let state = state();
        let (a, b) = {
            let mut app = state.write().unwrap();
            let a = app.add_employee(data("Alice", "IT")).unwrap().id;
            let b = app.add_employee(data("Bob", "IT")).unwrap().id;
            (a, b)
        };
        let app = app!(state);

        for entries in [json!({ (a.to_string()): true, (b.to_string()): true }), json!({ (b.to_string()): true })] {
            let req = actix_test::TestRequest::put()
                .uri("/attendance/2024-03-01")
                .set_json(json!({ "entries": entries }))
                .to_request();
            assert_eq!(actix_test::call_service(&app, req).await.status(), StatusCode::OK);
        }

        let req = actix_test::TestRequest::get().uri("/attendance/2024-03-01").to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["entries"], json!({ (b.to_string()): true }));

        let req = actix_test::TestRequest::get().uri("/attendance").to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.as_array().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn save_response_drops_unknown_ids_like_lookup() {
        let state = state();
        let id = state.write().unwrap().add_employee(data("Alice", "IT")).unwrap().id;
        let app = app!(state);

        let req = actix_test::TestRequest::put()
            .uri("/attendance/2024-03-01")
            .set_json(json!({ "entries": { (id.to_string()): true, "4242": true } }))
            .to_request();
        let saved: Value = actix_test::call_and_read_body_json(&app, req).await;

        let req = actix_test::TestRequest::get().uri("/attendance/2024-03-01").to_request();
        let fetched: Value = actix_test::call_and_read_body_json(&app, req).await;

        assert_eq!(saved["entries"], json!({ (id.to_string()): true }));
        assert_eq!(saved, fetched);
    }

    #[actix_web::test]
    async fn attendance_rejects_bad_and_future_dates() {
        let state = state();
        let app = app!(state);

        let req = actix_test::TestRequest::get().uri("/attendance/03-01-2024").to_request();
        assert_eq!(actix_test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

        let tomorrow = Local::now().date_naive() + Duration::days(1);
        let req = actix_test::TestRequest::put()
            .uri(&format!("/attendance/{tomorrow}"))
            .set_json(json!({ "entries": {} }))
            .to_request();
        assert_eq!(actix_test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
        assert!(state.read().unwrap().attendance().records().is_empty());
    }

    #[actix_web::test]
    async fn unsaved_day_lists_everyone_absent() {
        let state = state();
        let id = state.write().unwrap().add_employee(data("Alice", "IT")).unwrap().id;
        let app = app!(state);

        let req = actix_test::TestRequest::get().uri("/attendance/2024-03-02").to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["date"], "2024-03-02");
        assert_eq!(body["entries"], json!({ (id.to_string()): false }));
    }
}
