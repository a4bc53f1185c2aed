use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One extracurricular offering. The name is the map key and is not repeated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn spots_left(&self) -> usize {
        (self.max_participants as usize).saturating_sub(self.participants.len())
    }
}

/// name -> Activity in seed order, as served by `GET /activities`.
pub type ActivityMap = IndexMap<String, Activity>;
