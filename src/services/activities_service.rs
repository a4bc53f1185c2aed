use thiserror::Error;
use tracing::{info, warn};

use crate::database::ActivityStore;
use crate::models::ActivityMap;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivityError {
    #[error("{activity} not found")]
    NotFound { activity: String },

    #[error("{email} already signed up")]
    AlreadyRegistered { activity: String, email: String },

    #[error("{activity} is full")]
    CapacityExceeded { activity: String },

    #[error("{email} is not registered for {activity}")]
    NotRegistered { activity: String, email: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupConfirmation {
    pub activity: String,
    pub email: String,
}

impl SignupConfirmation {
    pub fn message(&self) -> String {
        format!("Signed up {} for {}", self.email, self.activity)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnregisterConfirmation {
    pub activity: String,
    pub email: String,
}

impl UnregisterConfirmation {
    pub fn message(&self) -> String {
        format!("Unregistered {} from {}", self.email, self.activity)
    }
}

pub struct ActivityService {
    store: ActivityStore,
}

impl ActivityService {
    pub fn new(store: ActivityStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &ActivityStore {
        &self.store
    }

    pub async fn list_activities(&self) -> ActivityMap {
        self.store.all().await
    }

    /// Appends `email` to the roster. Existence, duplicate and capacity are
    /// checked in that order under one write lock.
    pub async fn signup(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<SignupConfirmation, ActivityError> {
        let outcome = self
            .store
            .update(activity_name, |activity| {
                if activity.has_participant(email) {
                    return Err(ActivityError::AlreadyRegistered {
                        activity: activity_name.to_string(),
                        email: email.to_string(),
                    });
                }
                if activity.is_full() {
                    return Err(ActivityError::CapacityExceeded {
                        activity: activity_name.to_string(),
                    });
                }
                activity.participants.push(email.to_string());
                Ok(activity.spots_left())
            })
            .await
            .unwrap_or_else(|| {
                Err(ActivityError::NotFound {
                    activity: activity_name.to_string(),
                })
            });

        match outcome {
            Ok(spots_left) => {
                info!(activity = %activity_name, email = %email, spots_left, "signup accepted");
                Ok(SignupConfirmation {
                    activity: activity_name.to_string(),
                    email: email.to_string(),
                })
            }
            Err(e) => {
                warn!(activity = %activity_name, email = %email, error = %e, "signup rejected");
                Err(e)
            }
        }
    }

    pub async fn unregister(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<UnregisterConfirmation, ActivityError> {
        let outcome = self
            .store
            .update(activity_name, |activity| {
                let Some(pos) = activity.participants.iter().position(|p| p == email) else {
                    return Err(ActivityError::NotRegistered {
                        activity: activity_name.to_string(),
                        email: email.to_string(),
                    });
                };
                activity.participants.remove(pos);
                Ok(())
            })
            .await
            .unwrap_or_else(|| {
                Err(ActivityError::NotFound {
                    activity: activity_name.to_string(),
                })
            });

        match outcome {
            Ok(()) => {
                info!(activity = %activity_name, email = %email, "participant unregistered");
                Ok(UnregisterConfirmation {
                    activity: activity_name.to_string(),
                    email: email.to_string(),
                })
            }
            Err(e) => {
                warn!(activity = %activity_name, email = %email, error = %e, "unregister rejected");
                Err(e)
            }
        }
    }
}
