use std::collections::HashSet;
use std::path::Path;

use indexmap::IndexMap;

use crate::error::SeedError;
use crate::models::Activity;

const EMBEDDED_SEED: &str = include_str!("../../data/activities.json");

pub type ActivityMap = IndexMap<String, Activity>;

/// The catalog compiled into the binary.
pub fn embedded() -> Result<ActivityMap, SeedError> {
    parse(EMBEDDED_SEED)
}

pub fn from_file(path: &Path) -> Result<ActivityMap, SeedError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&raw)
}

/// Embedded seed unless an override file is configured.
pub fn load(path: Option<&Path>) -> Result<ActivityMap, SeedError> {
    match path {
        Some(p) => from_file(p),
        None => embedded(),
    }
}

pub fn parse(raw: &str) -> Result<ActivityMap, SeedError> {
    let activities: ActivityMap = serde_json::from_str(raw)?;
    validate(&activities)?;
    Ok(activities)
}

fn validate(activities: &ActivityMap) -> Result<(), SeedError> {
    for (name, activity) in activities {
        if name.trim().is_empty() {
            return Err(SeedError::EmptyName);
        }
        if activity.max_participants == 0 {
            return Err(SeedError::ZeroCapacity(name.clone()));
        }
        let mut seen = HashSet::with_capacity(activity.participants.len());
        for email in &activity.participants {
            if !seen.insert(email.as_str()) {
                return Err(SeedError::DuplicateParticipant {
                    activity: name.clone(),
                    email: email.clone(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_seed_is_valid_and_ordered() {
        let activities = embedded().unwrap();
        let names: Vec<&str> = activities.keys().map(String::as_str).collect();
        assert_eq!(names[0], "Chess Club");
        assert_eq!(names[1], "Programming Class");
        assert!(names.contains(&"Basketball Team"));
        assert!(activities["Chess Club"].has_participant("michael@mergington.edu"));
    }

    #[test]
    fn rejects_duplicate_participant() {
        let raw = r#"{
            "Chess Club": {
                "description": "d",
                "schedule": "s",
                "max_participants": 4,
                "participants": ["a@mergington.edu", "a@mergington.edu"]
            }
        }"#;
        match parse(raw) {
            Err(SeedError::DuplicateParticipant { activity, email }) => {
                assert_eq!(activity, "Chess Club");
                assert_eq!(email, "a@mergington.edu");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn rejects_zero_capacity() {
        let raw = r#"{"Choir": {"description": "d", "schedule": "s", "max_participants": 0}}"#;
        assert!(matches!(parse(raw), Err(SeedError::ZeroCapacity(name)) if name == "Choir"));
    }

    #[test]
    fn missing_participants_defaults_to_empty() {
        let raw = r#"{"Choir": {"description": "d", "schedule": "s", "max_participants": 10}}"#;
        let activities = parse(raw).unwrap();
        assert!(activities["Choir"].participants.is_empty());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = from_file(Path::new("/nonexistent/seed.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/seed.json"));
    }
}
