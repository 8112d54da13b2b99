pub mod attendance;
pub mod employee;

use actix_web::error::ErrorInternalServerError;
use std::sync::{RwLockReadGuard, RwLockWriteGuard};
use tracing::error;

use crate::store::{AppStore, SharedStore};

pub(crate) fn read_state(store: &SharedStore) -> actix_web::Result<RwLockReadGuard<'_, AppStore>> {
    store.read().map_err(|_| {
        error!("State lock poisoned");
        ErrorInternalServerError("Internal Server Error")
    })
}

pub(crate) fn write_state(store: &SharedStore) -> actix_web::Result<RwLockWriteGuard<'_, AppStore>> {
    store.write().map_err(|_| {
        error!("State lock poisoned");
        ErrorInternalServerError("Internal Server Error")
    })
}
