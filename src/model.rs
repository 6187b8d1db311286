use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Capacity minus current head count. Not clamped: an over-full activity
    /// reports a negative number.
    pub fn spots_left(&self) -> i64 {
        self.max_participants - self.participants.len() as i64
    }
}

/// The activity collection, in the order the server sent it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Activities(Vec<(String, Activity)>);

impl Activities {
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.0.iter().map(|(name, activity)| (name.as_str(), activity))
    }

    pub fn names(&self) -> Vec<String> {
        self.0.iter().map(|(name, _)| name.clone()).collect()
    }
}

impl From<Vec<(String, Activity)>> for Activities {
    fn from(entries: Vec<(String, Activity)>) -> Self {
        Self(entries)
    }
}

struct ActivitiesVisitor;

impl<'de> Visitor<'de> for ActivitiesVisitor {
    type Value = Activities;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of activity name to activity")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((name, activity)) = map.next_entry::<String, Activity>()? {
            entries.push((name, activity));
        }
        Ok(Activities(entries))
    }
}

impl<'de> Deserialize<'de> for Activities {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ActivitiesVisitor)
    }
}

/// Body of a successful signup.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SignupReply {
    pub message: String,
}

/// Body the backend sends with a non-success status.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ErrorReply {
    #[serde(default)]
    pub detail: Option<String>,
}
