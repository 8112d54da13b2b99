use actix_web::web;
use anyhow::anyhow;
use chrono::NaiveDate;
use futures::future::BoxFuture;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::{info, instrument, warn};

use crate::error::FetchError;
use crate::model::{Employee, EmployeeData, EmployeeId};
use crate::store::{EmployeeStore, LoadStatus, SharedStore};

/// Role given to every employee arriving from the feed.
pub const DEFAULT_ROLE: &str = "Employee";

/// Employee as delivered by the upstream feed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEmployee {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact_number: String,
    #[serde(default)]
    pub address: String,
    /// `DD/MM/YYYY`
    pub dob: String,
}

impl TryFrom<RawEmployee> for Employee {
    type Error = FetchError;

    fn try_from(raw: RawEmployee) -> Result<Self, Self::Error> {
        let joining_date = NaiveDate::parse_from_str(raw.dob.trim(), "%d/%m/%Y").map_err(|_| {
            FetchError::InvalidDate {
                id: raw.id,
                value: raw.dob.clone(),
            }
        })?;

        Ok(Employee::new(
            EmployeeId(raw.id),
            EmployeeData {
                name: format!("{} {}", raw.first_name, raw.last_name),
                role: DEFAULT_ROLE.to_string(),
                email: raw.email,
                contact: raw.contact_number,
                address: raw.address,
                joining_date,
                leaves: 0,
                gender: None,
                location: None,
                salary: None,
            },
        ))
    }
}

/// Anything that can produce the initial employee list.
pub trait EmployeeSource: Send + Sync {
    fn fetch(&self) -> BoxFuture<'_, Result<Vec<RawEmployee>, FetchError>>;
}

/// Reads a JSON array of [`RawEmployee`] from disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl EmployeeSource for JsonFileSource {
    fn fetch(&self) -> BoxFuture<'_, Result<Vec<RawEmployee>, FetchError>> {
        let path = self.path.clone();
        Box::pin(async move {
            let body = web::block(move || std::fs::read_to_string(path))
                .await
                .map_err(|e| FetchError::Io(std::io::Error::other(e.to_string())))??;
            Ok(serde_json::from_str(&body)?)
        })
    }
}

/// Seed an empty store with `candidates`, keeping their ids. A non-empty store
/// is returned unchanged so repeated ingestion never duplicates records.
pub fn ingest(store: &EmployeeStore, candidates: Vec<Employee>) -> Result<EmployeeStore, FetchError> {
    if !store.is_empty() {
        return Ok(store.clone());
    }

    let (next, skipped) = store.extend_with_ids(candidates)?;
    for id in skipped {
        warn!(%id, "Duplicate employee id in feed, keeping first");
    }
    Ok(next)
}

/// Fetch from `source` and ingest into `shared`. The lock is not held while
/// the fetch is pending. A fetch failure is recorded as [`LoadStatus::Failed`].
#[instrument(skip_all)]
pub async fn run_ingestion(shared: &SharedStore, source: &dyn EmployeeSource) -> anyhow::Result<()> {
    shared
        .write()
        .map_err(|_| anyhow!("state lock poisoned"))?
        .set_status(LoadStatus::Loading, None);

    let fetched = source.fetch().await.and_then(|raw| {
        raw.into_iter()
            .map(Employee::try_from)
            .collect::<Result<Vec<_>, _>>()
    });

    let mut app = shared.write().map_err(|_| anyhow!("state lock poisoned"))?;
    let fetched_count = fetched.as_ref().map_or(0, Vec::len);
    match fetched.and_then(|candidates| ingest(app.employees(), candidates)) {
        Ok(next) => {
            let ingested = next.len().saturating_sub(app.employees().len());
            app.replace_employees(next);
            app.set_status(LoadStatus::Succeeded, None);
            info!(fetched_count, ingested, "Employee ingestion complete");
        }
        Err(e) => {
            warn!(error = %e, "Employee ingestion failed");
            app.set_status(LoadStatus::Failed, Some(e.to_string()));
        }
    }

    Ok(())
}
