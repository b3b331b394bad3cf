use std::path::Path;
use std::sync::Arc;

use axum::{
    routing::{get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::database::activity_directory::ActivityDirectory;

pub mod error;
pub mod routes;

use routes::{activities, root};

/// Full application router: API routes, the root redirect and the static
/// front end served from `static_dir`.
pub fn router(directory: Arc<ActivityDirectory>, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(root::root_handler))
        .route("/health", get(root::health_handler))
        .route("/activities", get(activities::activities_handler))
        .route(
            "/activities/:activity_name",
            get(activities::activity_detail_handler),
        )
        .route(
            "/activities/:activity_name/signup",
            post(activities::signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            post(activities::unregister_handler),
        )
        .nest_service("/static", get_service(ServeDir::new(static_dir.as_ref())))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(directory)
}
