use serde::{Deserialize, Serialize};

use crate::Role;

pub const EVENT_TITLE_MIN_LEN: usize = 3;
pub const EVENT_TITLE_MAX_LEN: usize = 120;
pub const EVENT_MAX_CAPACITY: u32 = 100_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAccount {
    pub email: String,
    pub username: String,
    pub password: String,
    /// Students and organizers self-select at signup. The backend rejects
    /// attempts to self-assign the admin role.
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfile {
    pub display_name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateEvent {
    pub event_id: crate::EventId,
    pub event_details: crate::Event,
}

/// Validation result for organizer-supplied event details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventValidation {
    Valid,
    TitleTooShort,
    TitleTooLong,
    LocationEmpty,
    CapacityZero,
    CapacityTooLarge,
    EndsBeforeStarts,
}

impl EventValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::TitleTooShort => Some("Title must be at least 3 characters"),
            Self::TitleTooLong => Some("Title must be at most 120 characters"),
            Self::LocationEmpty => Some("Please enter a location"),
            Self::CapacityZero => Some("Capacity must be at least 1"),
            Self::CapacityTooLarge => {
                Some("Capacity must be at most 100,000")
            }
            Self::EndsBeforeStarts => Some("End time must be after the start"),
        }
    }
}

/// Validate event details before submission. Returns the first failing
/// rule; the backend re-validates everything.
pub fn validate_event(details: &crate::Event) -> EventValidation {
    let title = details.title.trim();
    if title.len() < EVENT_TITLE_MIN_LEN {
        return EventValidation::TitleTooShort;
    }
    if title.len() > EVENT_TITLE_MAX_LEN {
        return EventValidation::TitleTooLong;
    }
    if details.location.trim().is_empty() {
        return EventValidation::LocationEmpty;
    }
    if details.capacity == 0 {
        return EventValidation::CapacityZero;
    }
    if details.capacity > EVENT_MAX_CAPACITY {
        return EventValidation::CapacityTooLarge;
    }
    if details.ends_at <= details.starts_at {
        return EventValidation::EndsBeforeStarts;
    }
    EventValidation::Valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EventCategory;
    use jiff::{Timestamp, ToSpan};

    fn sample_event() -> crate::Event {
        let starts_at = Timestamp::UNIX_EPOCH + 1.hour();
        crate::Event {
            title: "Intro to Rust".to_string(),
            description: None,
            location: "Lecture Hall B".to_string(),
            category: EventCategory::Workshop,
            capacity: 40,
            starts_at,
            ends_at: starts_at + 2.hours(),
            fee: None,
        }
    }

    #[test]
    fn accepts_well_formed_details() {
        assert!(validate_event(&sample_event()).is_valid());
    }

    #[test]
    fn rejects_short_and_long_titles() {
        let mut event = sample_event();
        event.title = "ab".to_string();
        assert_eq!(validate_event(&event), EventValidation::TitleTooShort);

        event.title = "x".repeat(EVENT_TITLE_MAX_LEN + 1);
        assert_eq!(validate_event(&event), EventValidation::TitleTooLong);
    }

    #[test]
    fn title_is_trimmed_before_measuring() {
        let mut event = sample_event();
        event.title = "  ab  ".to_string();
        assert_eq!(validate_event(&event), EventValidation::TitleTooShort);
    }

    #[test]
    fn rejects_blank_location() {
        let mut event = sample_event();
        event.location = "   ".to_string();
        assert_eq!(validate_event(&event), EventValidation::LocationEmpty);
    }

    #[test]
    fn rejects_capacity_out_of_range() {
        let mut event = sample_event();
        event.capacity = 0;
        assert_eq!(validate_event(&event), EventValidation::CapacityZero);

        event.capacity = EVENT_MAX_CAPACITY + 1;
        assert_eq!(validate_event(&event), EventValidation::CapacityTooLarge);
    }

    #[test]
    fn rejects_inverted_schedule() {
        let mut event = sample_event();
        event.ends_at = event.starts_at;
        assert_eq!(validate_event(&event), EventValidation::EndsBeforeStarts);
    }
}
