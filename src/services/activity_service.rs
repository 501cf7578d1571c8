use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::database::activity_store::{ActivityStore, MembershipChange};
use crate::models::ActivityDirectoryView;

/// Rejections from signup/unregister. The `Display` text is the exact
/// message returned to API callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActivityError {
    #[error("Activity not found")]
    NotFound,
    #[error("Student already signed up for this activity")]
    AlreadySignedUp,
    #[error("Student is not registered for this activity")]
    NotRegistered,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Confirmation {
    pub message: String,
}

pub async fn list_activities(store: &ActivityStore) -> ActivityDirectoryView {
    store.list().await
}

pub async fn signup(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<Confirmation, ActivityError> {
    match store.add_participant(activity_name, email).await {
        MembershipChange::Applied => {
            info!("Signed up {} for {}", email, activity_name);
            Ok(Confirmation {
                message: format!("Signed up {} for {}", email, activity_name),
            })
        }
        MembershipChange::Unchanged => Err(ActivityError::AlreadySignedUp),
        MembershipChange::UnknownActivity => Err(ActivityError::NotFound),
    }
}

pub async fn unregister(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<Confirmation, ActivityError> {
    match store.remove_participant(activity_name, email).await {
        MembershipChange::Applied => {
            info!("Unregistered {} from {}", email, activity_name);
            Ok(Confirmation {
                message: format!("Unregistered {} from {}", email, activity_name),
            })
        }
        MembershipChange::Unchanged => Err(ActivityError::NotRegistered),
        MembershipChange::UnknownActivity => Err(ActivityError::NotFound),
    }
}
