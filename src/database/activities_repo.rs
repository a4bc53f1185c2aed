use tokio::sync::RwLock;

use crate::models::{Activity, ActivityMap};

/// In-memory activity store. Readers share the lock; every mutation goes
/// through `update`, which holds the write lock for the whole closure.
#[derive(Debug, Default)]
pub struct ActivityStore {
    activities: RwLock<ActivityMap>,
}

impl ActivityStore {
    pub fn new(activities: ActivityMap) -> Self {
        Self {
            activities: RwLock::new(activities),
        }
    }

    pub async fn get(&self, name: &str) -> Option<Activity> {
        self.activities.read().await.get(name).cloned()
    }

    pub async fn all(&self) -> ActivityMap {
        self.activities.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.activities.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.activities.read().await.is_empty()
    }

    /// Runs `f` against the named activity while holding the write lock.
    /// Returns `None` when no activity has that name.
    pub async fn update<T>(&self, name: &str, f: impl FnOnce(&mut Activity) -> T) -> Option<T> {
        let mut activities = self.activities.write().await;
        activities.get_mut(name).map(f)
    }
}
