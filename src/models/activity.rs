use serde::{Deserialize, Serialize};

// One extracurricular offering; the activity name is the directory key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    // Advisory capacity, shown to students but not enforced on signup.
    pub max_participants: u32,
    // Emails in signup order.
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }
}
