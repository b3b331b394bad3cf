use serde::{Deserialize, Serialize};
use tracing::info;

use crate::database::activity_directory::ActivityDirectory;
use crate::database::seed::ActivityMap;
use crate::error::DirectoryError;
use crate::models::Activity;

#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    // Taken as-is; no address format check.
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupAction {
    Join,
    Leave,
}

impl SignupAction {
    pub fn as_str(self) -> &'static str {
        match self {
            SignupAction::Join => "signup",
            SignupAction::Leave => "unregister",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageView {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HealthView {
    pub status: String,
    pub activities: usize,
}

pub fn list_activities(directory: &ActivityDirectory) -> ActivityMap {
    directory.snapshot()
}

pub fn load_activity(
    directory: &ActivityDirectory,
    name: &str,
) -> Result<Activity, DirectoryError> {
    directory.get(name).ok_or(DirectoryError::ActivityNotFound)
}

pub fn apply_signup_command(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
    action: SignupAction,
) -> Result<MessageView, DirectoryError> {
    let message = match action {
        SignupAction::Join => {
            let count = directory.add_participant(activity_name, email)?;
            info!(
                activity = %activity_name,
                %email,
                participants = count,
                "participant signed up"
            );
            format!("Signed up {} for {}", email, activity_name)
        }
        SignupAction::Leave => {
            let count = directory.remove_participant(activity_name, email)?;
            info!(
                activity = %activity_name,
                %email,
                participants = count,
                "participant unregistered"
            );
            format!("Unregistered {} from {}", email, activity_name)
        }
    };
    Ok(MessageView { message })
}

pub fn health(directory: &ActivityDirectory) -> HealthView {
    HealthView {
        status: "ok".to_string(),
        activities: directory.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::seed;

    const CYCLE: &str = "cycle@mergington.edu";
    const MULTI: &str = "multi@mergington.edu";
    const MICHAEL: &str = "michael@mergington.edu";
    const STRANGER: &str = "x@mergington.edu";

    fn directory() -> ActivityDirectory {
        ActivityDirectory::new(seed::embedded().unwrap())
    }

    fn join(
        dir: &ActivityDirectory,
        name: &str,
        email: &str,
    ) -> Result<MessageView, DirectoryError> {
        apply_signup_command(dir, name, email, SignupAction::Join)
    }

    fn leave(
        dir: &ActivityDirectory,
        name: &str,
        email: &str,
    ) -> Result<MessageView, DirectoryError> {
        apply_signup_command(dir, name, email, SignupAction::Leave)
    }

    fn participants(dir: &ActivityDirectory, name: &str) -> Vec<String> {
        load_activity(dir, name).unwrap().participants
    }

    #[test]
    fn signup_message_names_email_and_activity() {
        let dir = directory();
        let view = join(&dir, "Chess Club", "new@mergington.edu").unwrap();
        assert_eq!(view.message, "Signed up new@mergington.edu for Chess Club");
    }

    #[test]
    fn signup_then_leave_restores_list() {
        let dir = directory();
        let before = participants(&dir, "Basketball Team");
        join(&dir, "Basketball Team", CYCLE).unwrap();
        let view = leave(&dir, "Basketball Team", CYCLE).unwrap();
        assert!(view.message.contains(CYCLE));
        assert_eq!(participants(&dir, "Basketball Team"), before);
    }

    #[test]
    fn signup_in_one_activity_leaves_others_untouched() {
        let dir = directory();
        let before = list_activities(&dir);
        join(&dir, "Chess Club", MULTI).unwrap();
        join(&dir, "Programming Class", MULTI).unwrap();
        let after = list_activities(&dir);
        for (name, activity) in &after {
            if name == "Chess Club" || name == "Programming Class" {
                assert!(activity.has_participant(MULTI));
            } else {
                assert_eq!(activity, &before[name]);
            }
        }
    }

    #[test]
    fn empty_email_is_accepted() {
        let dir = directory();
        assert!(join(&dir, "Art Club", "").is_ok());
    }

    #[test]
    fn errors_carry_expected_text() {
        let dir = directory();
        let dup = join(&dir, "Chess Club", MICHAEL).unwrap_err().to_string();
        assert!(dup.to_lowercase().contains("already signed up"));
        let missing = leave(&dir, "Chess Club", STRANGER).unwrap_err().to_string();
        assert!(missing.to_lowercase().contains("not registered"));
        let unknown = load_activity(&dir, "Fake Activity").unwrap_err();
        assert!(unknown.to_string().to_lowercase().contains("not found"));
    }

    #[test]
    fn health_counts_activities() {
        let dir = directory();
        let view = health(&dir);
        assert_eq!(view.status, "ok");
        assert_eq!(view.activities, 9);
    }
}
