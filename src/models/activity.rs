use serde::ser::{Serialize, SerializeMap, Serializer};

/// One extracurricular activity. `name` is the directory key and is not part
/// of the serialized record.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Activity {
    #[serde(skip_serializing)]
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32, // advisory, never enforced
    pub participants: Vec<String>,
}

impl Activity {
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

/// Point-in-time copy of the whole directory, serialized as a JSON object
/// keyed by activity name in seed order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityDirectoryView {
    pub activities: Vec<Activity>,
}

impl ActivityDirectoryView {
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

impl Serialize for ActivityDirectoryView {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.activities.len()))?;
        for activity in &self.activities {
            map.serialize_entry(&activity.name, activity)?;
        }
        map.end()
    }
}
