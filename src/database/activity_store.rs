use tokio::sync::RwLock;
use tracing::warn;

use crate::database::seed;
use crate::models::{Activity, ActivityDirectoryView};

/// Result of a membership mutation against the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipChange {
    Applied,
    /// The participant was already in the requested state; nothing changed.
    Unchanged,
    UnknownActivity,
}

/// In-memory activity directory. Records are kept in seed order and looked up
/// by exact name; only participant lists change after construction.
///
/// Every check-and-mutate sequence runs under a single write guard, so a
/// signup or unregister is applied completely or not at all.
#[derive(Debug, Default)]
pub struct ActivityStore {
    activities: RwLock<Vec<Activity>>,
}

impl ActivityStore {
    pub fn new(records: Vec<Activity>) -> Self {
        let mut activities: Vec<Activity> = Vec::with_capacity(records.len());
        for record in records {
            if activities.iter().any(|a| a.name == record.name) {
                warn!("Duplicate activity '{}' in seed data ignored", record.name);
                continue;
            }
            activities.push(record);
        }
        Self {
            activities: RwLock::new(activities),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::seed_activities())
    }

    pub async fn list(&self) -> ActivityDirectoryView {
        let activities = self.activities.read().await;
        ActivityDirectoryView {
            activities: activities.clone(),
        }
    }

    pub async fn find(&self, name: &str) -> Option<Activity> {
        let activities = self.activities.read().await;
        activities.iter().find(|a| a.name == name).cloned()
    }

    pub async fn add_participant(&self, name: &str, email: &str) -> MembershipChange {
        let mut activities = self.activities.write().await;
        let Some(activity) = activities.iter_mut().find(|a| a.name == name) else {
            return MembershipChange::UnknownActivity;
        };
        if activity.has_participant(email) {
            return MembershipChange::Unchanged;
        }
        activity.participants.push(email.to_string());
        MembershipChange::Applied
    }

    pub async fn remove_participant(&self, name: &str, email: &str) -> MembershipChange {
        let mut activities = self.activities.write().await;
        let Some(activity) = activities.iter_mut().find(|a| a.name == name) else {
            return MembershipChange::UnknownActivity;
        };
        let Some(pos) = activity.participants.iter().position(|p| p == email) else {
            return MembershipChange::Unchanged;
        };
        // `remove` (not `swap_remove`) keeps the remaining order intact.
        activity.participants.remove(pos);
        MembershipChange::Applied
    }
}
