use reqwest::StatusCode;
use serde::Serialize;

use crate::{EventId, RegistrationId, requests, responses};

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the backend.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self.inner_client.post(self.format_url(path)).json(body);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn empty_post(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.post(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.get(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }
}

/// Methods on the backend API
impl APIClient {
    pub async fn health_check(&self) -> Result<(), ClientError> {
        let response = self.empty_get("health_check").await?;
        ok_empty(response).await
    }

    pub async fn create_account(
        &self,
        details: &requests::CreateAccount,
    ) -> Result<(), ClientError> {
        let response = self.post("create_account", details).await?;
        ok_empty(response).await
    }

    pub async fn login(
        &self,
        details: &requests::LoginCredentials,
    ) -> Result<(), ClientError> {
        let response = self.post("login", details).await?;
        ok_empty(response).await
    }

    pub async fn logout(&self) -> Result<(), ClientError> {
        let response = self.empty_post("logout").await?;
        ok_empty(response).await
    }

    /// Check if the user is logged in.
    pub async fn login_check(&self) -> Result<bool, ClientError> {
        let response = self.empty_post("login_check").await?;
        match response.status() {
            StatusCode::OK => Ok(true),
            StatusCode::UNAUTHORIZED => Ok(false),
            _ => Err(ClientError::APIError(
                response.status(),
                response.text().await?,
            )),
        }
    }

    /// Get the current user's profile information.
    pub async fn user_profile(
        &self,
    ) -> Result<responses::UserProfile, ClientError> {
        let response = self.empty_get("user_profile").await?;
        ok_body(response).await
    }

    pub async fn update_profile(
        &self,
        details: &requests::UpdateProfile,
    ) -> Result<responses::UserProfile, ClientError> {
        let response = self.post("update_profile", details).await?;
        ok_body(response).await
    }

    /// All published events, soonest first.
    pub async fn list_events(
        &self,
    ) -> Result<Vec<responses::Event>, ClientError> {
        let response = self.empty_get("events").await?;
        ok_body(response).await
    }

    /// Published events that have not yet started.
    pub async fn upcoming_events(
        &self,
    ) -> Result<Vec<responses::Event>, ClientError> {
        let response = self.empty_get("upcoming_events").await?;
        ok_body(response).await
    }

    pub async fn get_event(
        &self,
        event_id: &EventId,
    ) -> Result<responses::Event, ClientError> {
        let response = self.post("event", event_id).await?;
        ok_body(response).await
    }

    pub async fn create_event(
        &self,
        details: &crate::Event,
    ) -> Result<EventId, ClientError> {
        let response = self.post("create_event", details).await?;
        ok_body(response).await
    }

    pub async fn update_event(
        &self,
        details: &requests::UpdateEvent,
    ) -> Result<responses::Event, ClientError> {
        let response = self.post("update_event", details).await?;
        ok_body(response).await
    }

    pub async fn delete_event(
        &self,
        event_id: &EventId,
    ) -> Result<(), ClientError> {
        let response = self.post("delete_event", event_id).await?;
        ok_empty(response).await
    }

    /// Move a draft event into the public listings (organizer or admin).
    pub async fn publish_event(
        &self,
        event_id: &EventId,
    ) -> Result<responses::Event, ClientError> {
        let response = self.post("publish_event", event_id).await?;
        ok_body(response).await
    }

    /// Cancel a published event without deleting its registration history.
    pub async fn cancel_event(
        &self,
        event_id: &EventId,
    ) -> Result<responses::Event, ClientError> {
        let response = self.post("cancel_event", event_id).await?;
        ok_body(response).await
    }

    /// Events organized by the current user, any status.
    pub async fn list_my_events(
        &self,
    ) -> Result<Vec<responses::Event>, ClientError> {
        let response = self.empty_get("my_events").await?;
        ok_body(response).await
    }

    /// Every event on the platform (admin only).
    pub async fn list_all_events(
        &self,
    ) -> Result<Vec<responses::Event>, ClientError> {
        let response = self.empty_get("all_events").await?;
        ok_body(response).await
    }

    pub async fn register_for_event(
        &self,
        event_id: &EventId,
    ) -> Result<responses::Registration, ClientError> {
        let response = self.post("register", event_id).await?;
        ok_body(response).await
    }

    pub async fn cancel_registration(
        &self,
        registration_id: &RegistrationId,
    ) -> Result<(), ClientError> {
        let response =
            self.post("cancel_registration", registration_id).await?;
        ok_empty(response).await
    }

    /// Registrations for an event, scoped to the caller: the full list
    /// for the event's organizer or an admin, otherwise just the caller's
    /// own.
    pub async fn list_registrations(
        &self,
        event_id: &EventId,
    ) -> Result<Vec<responses::Registration>, ClientError> {
        let response = self.post("registrations", event_id).await?;
        ok_body(response).await
    }

    pub async fn registration_stats(
        &self,
        event_id: &EventId,
    ) -> Result<responses::RegistrationStats, ClientError> {
        let response = self.post("registration_stats", event_id).await?;
        ok_body(response).await
    }

    /// The current user's own registrations.
    pub async fn my_registrations(
        &self,
    ) -> Result<Vec<responses::Registration>, ClientError> {
        let response = self.empty_get("my_registrations").await?;
        ok_body(response).await
    }

    /// Platform-wide totals (admin only).
    pub async fn admin_overview(
        &self,
    ) -> Result<responses::AdminOverview, ClientError> {
        let response = self.empty_get("admin_overview").await?;
        ok_body(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

impl ClientError {
    /// Resolve the message to surface to the user.
    ///
    /// Preference order: a `message` field in a JSON error body, then the
    /// error's own text, then the caller's fallback. This is the only place
    /// that inspects error bodies; hooks just pass a fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        if let ClientError::APIError(_, body) = self
            && let Some(message) = extract_json_message(body)
        {
            return message;
        }
        let text = self.to_string();
        let text = text.trim();
        if text.is_empty() {
            fallback.to_string()
        } else {
            text.to_string()
        }
    }
}

fn extract_json_message(body: &str) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: String,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|parsed| parsed.message)
        .filter(|message| !message.is_empty())
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.json::<T>().await?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_message_field_from_json_body() {
        let error = ClientError::APIError(
            StatusCode::CONFLICT,
            r#"{"message":"An event with this title already exists"}"#
                .to_string(),
        );
        assert_eq!(
            error.user_message("Failed to create event"),
            "An event with this title already exists"
        );
    }

    #[test]
    fn falls_back_to_body_text_when_not_json() {
        let error = ClientError::APIError(
            StatusCode::INTERNAL_SERVER_ERROR,
            "something broke".to_string(),
        );
        assert_eq!(
            error.user_message("Failed to create event"),
            "something broke"
        );
    }

    #[test]
    fn json_without_message_field_uses_body_text() {
        let error = ClientError::APIError(
            StatusCode::BAD_REQUEST,
            r#"{"code":42}"#.to_string(),
        );
        assert_eq!(
            error.user_message("Failed to create event"),
            r#"{"code":42}"#
        );
    }

    #[test]
    fn empty_body_uses_caller_fallback() {
        let error =
            ClientError::APIError(StatusCode::BAD_GATEWAY, "  ".to_string());
        assert_eq!(
            error.user_message("Failed to create event"),
            "Failed to create event"
        );
    }

    #[test]
    fn empty_json_message_is_not_treated_as_a_message() {
        let error = ClientError::APIError(
            StatusCode::BAD_REQUEST,
            r#"{"message":""}"#.to_string(),
        );
        assert_eq!(
            error.user_message("Failed to load event"),
            r#"{"message":""}"#
        );
    }
}
