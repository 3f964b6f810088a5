use serde::Deserialize;

use crate::session::ClassSession;

/// Read-side filter for class listings.
///
/// Instrument and level are case-insensitive exact matches; instructor is a
/// case-insensitive substring match. An empty filter matches everything.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassFilter {
    pub instrument: Option<String>,
    pub level: Option<String>,
    pub instructor: Option<String>,
}

impl ClassFilter {
    pub fn matches(&self, session: &ClassSession) -> bool {
        if let Some(instrument) = &self.instrument {
            if !session.instrument.eq_ignore_ascii_case(instrument) {
                return false;
            }
        }

        if let Some(level) = &self.level {
            if !session.level.as_str().eq_ignore_ascii_case(level) {
                return false;
            }
        }

        if let Some(instructor) = &self.instructor {
            let haystack = session.instructor_name.to_lowercase();
            if !haystack.contains(&instructor.to_lowercase()) {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{ClassLevel, NewClassSession};
    use chrono::{TimeZone, Utc};

    fn guitar_basics() -> ClassSession {
        NewClassSession {
            id: 1,
            name: "Guitar Basics".to_string(),
            instrument: "Guitar".to_string(),
            level: ClassLevel::Beginner,
            start_time: Utc.with_ymd_and_hms(2025, 4, 8, 18, 0, 0).unwrap(),
            instructor_name: "Priya S.".to_string(),
            capacity_total: 5,
            description: None,
            location: None,
            duration_minutes: None,
            price_cents: None,
        }
        .into_session()
    }

    #[test]
    fn test_empty_filter_matches() {
        assert!(ClassFilter::default().matches(&guitar_basics()));
    }

    #[test]
    fn test_instrument_match_is_case_insensitive() {
        let filter = ClassFilter {
            instrument: Some("guitar".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&guitar_basics()));

        let filter = ClassFilter {
            instrument: Some("piano".to_string()),
            ..Default::default()
        };
        assert!(!filter.matches(&guitar_basics()));
    }

    #[test]
    fn test_instrument_match_is_exact_not_substring() {
        let filter = ClassFilter {
            instrument: Some("Guit".to_string()),
            ..Default::default()
        };
        assert!(!filter.matches(&guitar_basics()));
    }

    #[test]
    fn test_level_match() {
        let filter = ClassFilter {
            level: Some("BEGINNER".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&guitar_basics()));

        let filter = ClassFilter {
            level: Some("Advanced".to_string()),
            ..Default::default()
        };
        assert!(!filter.matches(&guitar_basics()));
    }

    #[test]
    fn test_instructor_substring_match() {
        let filter = ClassFilter {
            instructor: Some("priya".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&guitar_basics()));

        let filter = ClassFilter {
            instructor: Some("amit".to_string()),
            ..Default::default()
        };
        assert!(!filter.matches(&guitar_basics()));
    }

    #[test]
    fn test_combined_filters_all_must_match() {
        let filter = ClassFilter {
            instrument: Some("Guitar".to_string()),
            level: Some("Intermediate".to_string()),
            instructor: None,
        };
        assert!(!filter.matches(&guitar_basics()));
    }
}
