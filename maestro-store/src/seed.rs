use chrono::{DateTime, TimeZone, Utc};
use maestro_catalog::{CatalogError, ClassLevel, NewClassSession};
use tracing::info;

use crate::memory::MemoryStore;

/// Load the demo catalog the mobile app ships with.
pub fn seed_demo_catalog(store: &MemoryStore) -> Result<(), CatalogError> {
    for class in demo_classes() {
        store.add_class(class)?;
    }
    info!("seeded demo catalog");
    Ok(())
}

fn demo_classes() -> Vec<NewClassSession> {
    vec![
        NewClassSession {
            id: 1,
            name: "Guitar Basics".to_string(),
            instrument: "Guitar".to_string(),
            level: ClassLevel::Beginner,
            start_time: start(2025, 4, 8, 18),
            instructor_name: "Priya S.".to_string(),
            capacity_total: 5,
            description: Some(
                "Learn the fundamentals of playing guitar in this beginner-friendly class. \
                 We'll cover basic chords, strumming patterns, and simple songs."
                    .to_string(),
            ),
            location: Some("Studio A".to_string()),
            duration_minutes: Some(60),
            price_cents: Some(2500),
        },
        NewClassSession {
            id: 2,
            name: "Piano Chords".to_string(),
            instrument: "Piano".to_string(),
            level: ClassLevel::Intermediate,
            start_time: start(2025, 4, 8, 19),
            instructor_name: "Amit K.".to_string(),
            capacity_total: 3,
            description: None,
            location: None,
            duration_minutes: None,
            price_cents: None,
        },
        NewClassSession {
            id: 3,
            name: "Advanced Guitar Solos".to_string(),
            instrument: "Guitar".to_string(),
            level: ClassLevel::Advanced,
            start_time: start(2025, 4, 8, 20),
            instructor_name: "Priya S.".to_string(),
            capacity_total: 2,
            description: None,
            location: None,
            duration_minutes: None,
            price_cents: None,
        },
        NewClassSession {
            id: 4,
            name: "Violin for Beginners".to_string(),
            instrument: "Violin".to_string(),
            level: ClassLevel::Beginner,
            start_time: start(2025, 4, 9, 17),
            instructor_name: "Rahul M.".to_string(),
            capacity_total: 4,
            description: None,
            location: None,
            duration_minutes: None,
            price_cents: None,
        },
        NewClassSession {
            id: 5,
            name: "Drum Basics".to_string(),
            instrument: "Drums".to_string(),
            level: ClassLevel::Beginner,
            start_time: start(2025, 4, 9, 18),
            instructor_name: "Neha P.".to_string(),
            capacity_total: 6,
            description: None,
            location: None,
            duration_minutes: None,
            price_cents: None,
        },
    ]
}

fn start(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .expect("valid demo timestamp")
}
