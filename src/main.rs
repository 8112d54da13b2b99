use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{App, HttpServer, Responder, get};
use std::sync::Arc;

mod api;
mod config;
mod docs;
mod error;
mod ingest;
mod model;
mod query;
mod routes;
mod store;

use config::Config;
use ingest::JsonFileSource;
use store::AppStore;

use crate::docs::ApiDoc;
use tracing::{error, info};
use tracing_appender::rolling;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[get("/")]
async fn index() -> impl Responder {
    "Employee Desk"
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!(addr = %config.server_addr, "Server starting...");

    let state = Data::new(AppStore::new().into_shared());
    let limiter = Arc::new(routes::build_limiter(config.rate_per_min)?);

    match config.seed_file.clone() {
        Some(path) => {
            let state_for_ingest = state.clone();
            actix_web::rt::spawn(async move {
                let source = JsonFileSource::new(path);
                if let Err(e) = ingest::run_ingestion(&state_for_ingest, &source).await {
                    error!(error = %e, "Employee ingestion aborted");
                }
            });
        }
        None => info!("No SEED_FILE configured, starting with an empty directory"),
    }

    let server_addr = config.server_addr.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}") // wildcard so JS/CSS assets resolve
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(state.clone())
            .service(index)
            .configure(|cfg| routes::configure(cfg, &config, limiter.clone()))
    })
    .bind(server_addr)?
    .run()
    .await?;

    Ok(())
}
