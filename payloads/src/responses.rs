use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{EventId, EventStatus, RegistrationId, RegistrationStatus, Role, UserId};

/// User identification bundled with display information.
///
/// The frontend should display `display_name` (if present) or `username`,
/// but use `user_id` for any API calls that reference the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub user_id: UserId,
    pub username: String,
    pub display_name: Option<String>,
}

impl UserIdentity {
    pub fn display(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.username)
    }
}

/// The authenticated user's own profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: UserId,
    pub email: String,
    pub username: String,
    pub display_name: Option<String>,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub event_id: EventId,
    pub event_details: crate::Event,
    pub organizer: UserIdentity,
    pub status: EventStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl std::ops::Deref for Event {
    type Target = crate::Event;

    fn deref(&self) -> &Self::Target {
        &self.event_details
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub registration_id: RegistrationId,
    pub event_id: EventId,
    /// Included so organizers can render attendee lists; for a student's
    /// own registrations this is their own identity.
    pub attendee: UserIdentity,
    pub status: RegistrationStatus,
    pub registered_at: Timestamp,
}

/// Headline registration counts for a single event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationStats {
    pub confirmed: u32,
    pub waitlisted: u32,
    pub cancelled: u32,
    /// Confirmed seats still available.
    pub remaining: u32,
}

/// Platform-wide totals for the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminOverview {
    pub total_events: u64,
    pub published_events: u64,
    pub total_registrations: u64,
    pub total_users: u64,
}
