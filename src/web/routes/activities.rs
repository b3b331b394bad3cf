use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::warn;

use crate::database::activity_directory::ActivityDirectory;
use crate::database::seed::ActivityMap;
use crate::error::DirectoryError;
use crate::models::Activity;
use crate::services::activities_service::{self, MessageView, SignupAction, SignupQuery};

pub async fn activities_handler(
    State(directory): State<Arc<ActivityDirectory>>,
) -> Json<ActivityMap> {
    Json(activities_service::list_activities(&directory))
}

pub async fn activity_detail_handler(
    Path(activity_name): Path<String>,
    State(directory): State<Arc<ActivityDirectory>>,
) -> Result<Json<Activity>, DirectoryError> {
    let activity = activities_service::load_activity(&directory, &activity_name)?;
    Ok(Json(activity))
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<SignupQuery>,
    State(directory): State<Arc<ActivityDirectory>>,
) -> Result<Json<MessageView>, DirectoryError> {
    let action = SignupAction::Join;
    run_signup_command(&directory, &activity_name, &query.email, action)
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<SignupQuery>,
    State(directory): State<Arc<ActivityDirectory>>,
) -> Result<Json<MessageView>, DirectoryError> {
    let action = SignupAction::Leave;
    run_signup_command(&directory, &activity_name, &query.email, action)
}

fn run_signup_command(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
    action: SignupAction,
) -> Result<Json<MessageView>, DirectoryError> {
    activities_service::apply_signup_command(directory, activity_name, email, action)
        .map(Json)
        .map_err(|e| {
            warn!(
                action = action.as_str(),
                activity = %activity_name,
                %email,
                error = %e,
                "signup command rejected"
            );
            e
        })
}
