//! Google Calendar implementation of the calendar store port.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use genieflow_core::CalendarStore;
use genieflow_domain::{
    CalendarConfig, CalendarEvent, CalendarEventPayload, GenieFlowError, Result,
};
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};
use url::Url;

use super::auth::{AccessTokenProvider, EnvTokenProvider, StaticTokenProvider};
use super::types::{GoogleEventBody, GoogleEventResource, GoogleEventsResponse};
use crate::errors::InfraError;
use crate::http::HttpClient;

/// Calendar store backed by the Google Calendar v3 REST API.
pub struct GoogleCalendarStore {
    http: HttpClient,
    events_url: Url,
    tokens: Arc<dyn AccessTokenProvider>,
}

impl GoogleCalendarStore {
    /// Build a store for `config.calendar_id` using the given token source.
    ///
    /// # Errors
    /// Returns `GenieFlowError::Config` when the base URL is unusable.
    pub fn new(config: &CalendarConfig, tokens: Arc<dyn AccessTokenProvider>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs.max(1)))
            .max_attempts(config.max_attempts)
            .user_agent(concat!("genieflow/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, events_url: events_url(config)?, tokens })
    }

    /// Static token from config when present, otherwise the environment.
    ///
    /// # Errors
    /// Same as [`GoogleCalendarStore::new`].
    pub fn from_config(config: &CalendarConfig) -> Result<Self> {
        let tokens: Arc<dyn AccessTokenProvider> = match config.access_token.as_deref() {
            Some(token) if !token.trim().is_empty() => Arc::new(StaticTokenProvider::new(token)),
            _ => Arc::new(EnvTokenProvider::new()),
        };
        Self::new(config, tokens)
    }

    /// Swap the HTTP client (tests use a short backoff).
    #[must_use]
    pub fn with_http_client(mut self, http: HttpClient) -> Self {
        self.http = http;
        self
    }

    /// Collection URL events are queried from and created under.
    #[must_use]
    pub const fn events_url(&self) -> &Url {
        &self.events_url
    }

    fn event_url(&self, event_id: &str) -> Result<Url> {
        let mut url = self.events_url.clone();
        url.path_segments_mut()
            .map_err(|()| GenieFlowError::Config("calendar API URL cannot be a base".into()))?
            .push(event_id);
        Ok(url)
    }

    async fn write_event(
        &self,
        method: Method,
        url: Url,
        payload: &CalendarEventPayload,
        enable_conferencing: bool,
    ) -> Result<CalendarEvent> {
        let token = self.tokens.access_token().await?;
        let body = GoogleEventBody::from_payload(payload, enable_conferencing);

        let mut request = self.http.request(method, url).bearer_auth(token).json(&body);
        if enable_conferencing {
            request = request.query(&[("conferenceDataVersion", "1")]);
        }

        let response = self.http.send(request).await?;
        let resource: GoogleEventResource = parse_response(response).await?;
        Ok(resource.into())
    }
}

#[async_trait]
impl CalendarStore for GoogleCalendarStore {
    #[instrument(skip(self))]
    async fn query_by_private_property(
        &self,
        key: &str,
        value: &str,
        max_results: u32,
    ) -> Result<Vec<CalendarEvent>> {
        let started = Instant::now();
        let token = self.tokens.access_token().await?;
        let request = self
            .http
            .request(Method::GET, self.events_url.clone())
            .bearer_auth(token)
            .query(&[
                ("privateExtendedProperty", format!("{key}={value}")),
                ("maxResults", max_results.to_string()),
                ("singleEvents", "true".to_string()),
            ]);

        let response = self.http.send(request).await?;
        let page: GoogleEventsResponse = parse_response(response).await?;
        debug!(
            returned = page.items.len(),
            more = page.next_page_token.is_some(),
            elapsed_ms = elapsed_ms(started),
            "queried calendar by private property"
        );

        Ok(page.items.into_iter().map(CalendarEvent::from).collect())
    }

    #[instrument(skip(self, payload), fields(summary = %payload.summary))]
    async fn create_event(
        &self,
        payload: &CalendarEventPayload,
        enable_conferencing: bool,
    ) -> Result<CalendarEvent> {
        let started = Instant::now();
        let event = self
            .write_event(Method::POST, self.events_url.clone(), payload, enable_conferencing)
            .await?;
        info!(
            event_id = %event.id,
            elapsed_ms = elapsed_ms(started),
            "created Google Calendar event"
        );
        Ok(event)
    }

    #[instrument(skip(self, payload), fields(summary = %payload.summary))]
    async fn update_event(
        &self,
        event_id: &str,
        payload: &CalendarEventPayload,
        enable_conferencing: bool,
    ) -> Result<CalendarEvent> {
        let started = Instant::now();
        let url = self.event_url(event_id)?;
        let event = self.write_event(Method::PUT, url, payload, enable_conferencing).await?;
        info!(
            event_id = %event.id,
            elapsed_ms = elapsed_ms(started),
            "updated Google Calendar event"
        );
        Ok(event)
    }
}

/// `{api_base_url}/calendars/{calendar_id}/events`, with the calendar id
/// percent-encoded as a single path segment.
fn events_url(config: &CalendarConfig) -> Result<Url> {
    let mut url = Url::parse(config.api_base_url.trim()).map_err(InfraError::from)?;
    url.path_segments_mut()
        .map_err(|()| {
            GenieFlowError::Config(format!("calendar API URL cannot be a base: {}", config.api_base_url))
        })?
        .pop_if_empty()
        .push("calendars")
        .push(config.calendar_id.trim())
        .push("events");
    Ok(url)
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await.map_err(InfraError::from)?;

    if !status.is_success() {
        return Err(status_error(status, &body));
    }

    serde_json::from_str(&body).map_err(|err| InfraError::from(err).into())
}

fn status_error(status: StatusCode, body: &str) -> GenieFlowError {
    let message = format!("Google Calendar API error ({status}): {}", body.trim());
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GenieFlowError::Auth(message),
        StatusCode::NOT_FOUND => GenieFlowError::NotFound(message),
        StatusCode::TOO_MANY_REQUESTS => GenieFlowError::RateLimited(message),
        _ => GenieFlowError::Network(message),
    }
}
