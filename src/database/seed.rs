use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use thiserror::Error;

use crate::models::{Activity, ActivityMap};

const DEFAULT_SEED: &str = include_str!("../../data/activities.json");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("seed is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("seed contains an activity with an empty name")]
    EmptyName,

    #[error("{activity} is defined more than once")]
    DuplicateName { activity: String },

    #[error("{activity}: max_participants must be at least 1")]
    ZeroCapacity { activity: String },

    #[error("{activity}: {count} participants exceed capacity {max}")]
    OverCapacity {
        activity: String,
        count: usize,
        max: u32,
    },

    #[error("{activity}: {email} is listed more than once")]
    DuplicateParticipant { activity: String, email: String },
}

/// The activity set the school ships with.
pub fn default_activities() -> Result<ActivityMap, SeedError> {
    parse_activities(DEFAULT_SEED)
}

pub fn load_activities(path: &Path) -> Result<ActivityMap, SeedError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_activities(&raw)
}

/// Every `(name, activity)` pair of the seed object in document order.
/// Deserializing straight into a map would let a repeated key replace the
/// earlier entry without notice.
struct SeedEntries(Vec<(String, Activity)>);

impl<'de> Deserialize<'de> for SeedEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = SeedEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object keyed by activity name")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<SeedEntries, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, Activity>()? {
                    entries.push(entry);
                }
                Ok(SeedEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Parses a JSON object keyed by activity name, keeping seed order, and
/// checks the name and roster invariants.
pub fn parse_activities(raw: &str) -> Result<ActivityMap, SeedError> {
    let SeedEntries(entries) = serde_json::from_str(raw)?;

    let mut activities = ActivityMap::with_capacity(entries.len());
    for (name, activity) in entries {
        validate(&name, &activity)?;
        if activities.contains_key(&name) {
            return Err(SeedError::DuplicateName { activity: name });
        }
        activities.insert(name, activity);
    }

    Ok(activities)
}

fn validate(name: &str, activity: &Activity) -> Result<(), SeedError> {
    if name.trim().is_empty() {
        return Err(SeedError::EmptyName);
    }
    if activity.max_participants == 0 {
        return Err(SeedError::ZeroCapacity {
            activity: name.to_string(),
        });
    }
    if activity.participants.len() > activity.max_participants as usize {
        return Err(SeedError::OverCapacity {
            activity: name.to_string(),
            count: activity.participants.len(),
            max: activity.max_participants,
        });
    }
    let mut seen = HashSet::new();
    for email in &activity.participants {
        if !seen.insert(email.as_str()) {
            return Err(SeedError::DuplicateParticipant {
                activity: name.to_string(),
                email: email.clone(),
            });
        }
    }
    Ok(())
}
