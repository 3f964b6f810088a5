use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Skill level of a class, serialized as the capitalized strings the
/// mobile clients already use ("Beginner", "Intermediate", "Advanced").
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ClassLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ClassLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassLevel::Beginner => "Beginner",
            ClassLevel::Intermediate => "Intermediate",
            ClassLevel::Advanced => "Advanced",
        }
    }
}

/// A scheduled, bookable class instance with fixed capacity.
///
/// `spots_available` is mutated only through the catalog's
/// decrement/increment operations and stays within `[0, capacity_total]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSession {
    pub id: i64,
    pub name: String,
    pub instrument: String,
    pub level: ClassLevel,
    pub start_time: DateTime<Utc>,
    pub instructor_name: String,
    pub spots_available: u32,
    pub capacity_total: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_cents: Option<i32>,
}

/// Input for creating a catalog entry. Availability starts at full capacity.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClassSession {
    pub id: i64,
    pub name: String,
    pub instrument: String,
    pub level: ClassLevel,
    pub start_time: DateTime<Utc>,
    pub instructor_name: String,
    pub capacity_total: u32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub price_cents: Option<i32>,
}

impl NewClassSession {
    /// Materialize the stored session. A fresh class has every spot open.
    pub fn into_session(self) -> ClassSession {
        ClassSession {
            id: self.id,
            name: self.name,
            instrument: self.instrument,
            level: self.level,
            start_time: self.start_time,
            instructor_name: self.instructor_name,
            spots_available: self.capacity_total,
            capacity_total: self.capacity_total,
            description: self.description,
            location: self.location,
            duration_minutes: self.duration_minutes,
            price_cents: self.price_cents,
        }
    }
}
