pub mod account;
pub mod past;
pub mod platform;
pub mod trend;
pub mod upcoming;

use axum::{extract::Extension, http::StatusCode};
use contest_dashboard_libs::clist::core::{ClistCore, ContestCatalog};
use std::sync::Arc;

pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

pub async fn readiness(Extension(core): Extension<Arc<ClistCore>>) -> StatusCode {
    if core.ping().await.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}
