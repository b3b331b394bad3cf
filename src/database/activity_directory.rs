use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::database::seed::ActivityMap;
use crate::error::DirectoryError;
use crate::models::Activity;

/// In-memory activity directory, owned by the server instance.
///
/// Enroll and withdraw hold the write lock for the whole check-then-mutate
/// step, so an email can never be appended twice to the same list even when
/// requests race. Activities themselves are fixed at construction.
#[derive(Debug)]
pub struct ActivityDirectory {
    activities: RwLock<ActivityMap>,
}

impl ActivityDirectory {
    pub fn new(activities: ActivityMap) -> Self {
        Self {
            activities: RwLock::new(activities),
        }
    }

    // A poisoned lock still guards a consistent map: every mutation below
    // is a single push or remove.
    fn read(&self) -> RwLockReadGuard<'_, ActivityMap> {
        self.activities
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ActivityMap> {
        self.activities
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> ActivityMap {
        self.read().clone()
    }

    pub fn get(&self, name: &str) -> Option<Activity> {
        self.read().get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn add_participant(&self, name: &str, email: &str) -> Result<usize, DirectoryError> {
        let mut activities = self.write();
        let activity = activities
            .get_mut(name)
            .ok_or(DirectoryError::ActivityNotFound)?;
        if activity.has_participant(email) {
            return Err(DirectoryError::AlreadySignedUp);
        }
        activity.participants.push(email.to_string());
        Ok(activity.participants.len())
    }

    pub fn remove_participant(&self, name: &str, email: &str) -> Result<usize, DirectoryError> {
        let mut activities = self.write();
        let activity = activities
            .get_mut(name)
            .ok_or(DirectoryError::ActivityNotFound)?;
        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(DirectoryError::NotRegistered)?;
        // `remove`, not `swap_remove`: signup order is kept.
        activity.participants.remove(position);
        Ok(activity.participants.len())
    }
}
