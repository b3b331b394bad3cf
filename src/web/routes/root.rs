use std::sync::Arc;

use axum::{extract::State, response::Redirect, Json};

use crate::database::activity_directory::ActivityDirectory;
use crate::services::activities_service::{self, HealthView};

pub const INDEX_PATH: &str = "/static/index.html";

pub async fn root_handler() -> Redirect {
    Redirect::temporary(INDEX_PATH)
}

pub async fn health_handler(
    State(directory): State<Arc<ActivityDirectory>>,
) -> Json<HealthView> {
    Json(activities_service::health(&directory))
}
