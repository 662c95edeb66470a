use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError, ok_body, ok_empty};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::FromStr,
)]
pub struct UserId(pub Uuid);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::FromStr,
)]
pub struct EventId(pub Uuid);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::FromStr,
)]
pub struct RegistrationId(pub Uuid);

/// A user's role within the platform. Roles are assigned at account
/// creation (students and organizers self-select; admins are provisioned
/// by the backend).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Organizer,
    Student,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Organizer => "Organizer",
            Role::Student => "Student",
        }
    }
}

/// Lifecycle of an event. Draft events are visible only to their organizer
/// and admins; published events appear in public listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    Draft,
    Published,
    Cancelled,
    Completed,
}

impl EventStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EventStatus::Draft => "Draft",
            EventStatus::Published => "Published",
            EventStatus::Cancelled => "Cancelled",
            EventStatus::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegistrationStatus {
    Confirmed,
    Waitlisted,
    Cancelled,
}

impl RegistrationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RegistrationStatus::Confirmed => "Confirmed",
            RegistrationStatus::Waitlisted => "Waitlisted",
            RegistrationStatus::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventCategory {
    Workshop,
    Seminar,
    Social,
    Career,
    Sports,
    Other,
}

impl EventCategory {
    /// All categories, in the order they appear in select inputs.
    pub const ALL: [EventCategory; 6] = [
        EventCategory::Workshop,
        EventCategory::Seminar,
        EventCategory::Social,
        EventCategory::Career,
        EventCategory::Sports,
        EventCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EventCategory::Workshop => "Workshop",
            EventCategory::Seminar => "Seminar",
            EventCategory::Social => "Social",
            EventCategory::Career => "Career",
            EventCategory::Sports => "Sports",
            EventCategory::Other => "Other",
        }
    }

    /// Stable key for form values.
    pub fn key(&self) -> &'static str {
        match self {
            EventCategory::Workshop => "workshop",
            EventCategory::Seminar => "seminar",
            EventCategory::Social => "social",
            EventCategory::Career => "career",
            EventCategory::Sports => "sports",
            EventCategory::Other => "other",
        }
    }

    pub fn from_key(key: &str) -> Option<EventCategory> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }
}

/// The organizer-editable details of an event. Response envelopes wrap
/// this with the event id, organizer identity, status, and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    pub description: Option<String>,
    pub location: String,
    pub category: EventCategory,
    /// Maximum confirmed registrations; further signups are waitlisted.
    pub capacity: u32,
    pub starts_at: Timestamp,
    pub ends_at: Timestamp,
    /// Entry fee. None for free events.
    pub fee: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_wire_format_is_screaming_snake_case() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
        assert_eq!(
            serde_json::to_string(&Role::Organizer).unwrap(),
            "\"ORGANIZER\""
        );
        assert_eq!(
            serde_json::to_string(&Role::Student).unwrap(),
            "\"STUDENT\""
        );
    }

    #[test]
    fn event_id_round_trips_through_display() {
        let id = EventId(Uuid::new_v4());
        let parsed: EventId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn category_keys_resolve() {
        for category in EventCategory::ALL {
            assert_eq!(EventCategory::from_key(category.key()), Some(category));
        }
        assert_eq!(EventCategory::from_key("karaoke"), None);
    }
}
