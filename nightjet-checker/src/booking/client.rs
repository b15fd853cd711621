//! Nightjet booking HTTP client.
//!
//! Provides async methods for the booking backend's session, station,
//! connection and offer endpoints. Requests are issued one at a time by
//! the caller; the client itself holds no session state.

use chrono::NaiveDate;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::domain::EvaNumber;

use super::api::{AuthToken, BookingApi};
use super::error::BookingError;
use super::types::{
    ConnectionPage, InitResponse, OfferRequest, StationRecord, WithLang,
};

/// Default base URL for the booking backend.
pub const DEFAULT_BASE_URL: &str = "https://www.nightjet.com/nj-booking-ocp";

/// Default request language.
pub const DEFAULT_LANG: &str = "de";

/// Header carrying the session token.
const TOKEN_HEADER: &str = "X-Token";

/// Configuration for the booking client.
#[derive(Debug, Clone)]
pub struct BookingConfig {
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Language sent with every request
    pub lang: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl BookingConfig {
    /// Create a config pointing at the production backend.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            lang: DEFAULT_LANG.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the request language.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Booking backend API client.
#[derive(Debug, Clone)]
pub struct BookingClient {
    http: reqwest::Client,
    base_url: String,
    lang: String,
}

impl BookingClient {
    /// Create a new booking client with the given configuration.
    pub fn new(config: BookingConfig) -> Result<Self, BookingError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            lang: config.lang,
        })
    }

    /// The language sent with requests.
    pub fn lang(&self) -> &str {
        &self.lang
    }

    fn token_header(token: &AuthToken) -> Result<HeaderValue, BookingError> {
        HeaderValue::from_str(token.as_str()).map_err(|_| BookingError::MissingToken)
    }

    fn json_body<T: Serialize>(&self, body: &T) -> Result<String, BookingError> {
        let body = WithLang {
            lang: &self.lang,
            body,
        };
        serde_json::to_string(&body).map_err(|e| BookingError::Json {
            message: e.to_string(),
            body: None,
        })
    }

    /// Check the status and decode the body of a response.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, BookingError> {
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(BookingError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(BookingError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BookingError::Api {
                status: status.as_u16(),
                message: body.chars().take(500).collect(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| BookingError::json(e, &body))
    }
}

impl BookingApi for BookingClient {
    #[instrument(skip(self))]
    async fn start_session(&self) -> Result<AuthToken, BookingError> {
        let url = format!("{}/init/start", self.base_url);

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json; charset=utf-8")
            .body(self.json_body(&serde_json::Map::new())?)
            .send()
            .await?;

        let init: InitResponse = Self::decode(response).await?;
        let token = init.token.ok_or(BookingError::MissingToken)?;
        let token = AuthToken::parse(&token)?;

        debug!("booking session started");
        Ok(token)
    }

    #[instrument(skip(self, token))]
    async fn find_stations(
        &self,
        token: &AuthToken,
        name: &str,
    ) -> Result<Vec<StationRecord>, BookingError> {
        let url = format!("{}/stations/find", self.base_url);

        let response = self
            .http
            .get(&url)
            .header(TOKEN_HEADER, Self::token_header(token)?)
            .query(&[("lang", self.lang.as_str()), ("name", name)])
            .send()
            .await?;

        let stations: Vec<StationRecord> = Self::decode(response).await?;
        debug!(candidates = stations.len(), "station search returned");
        Ok(stations)
    }

    #[instrument(skip(self, token, from, to), fields(from = %from, to = %to))]
    async fn get_connections(
        &self,
        token: &AuthToken,
        from: EvaNumber,
        to: EvaNumber,
        date: NaiveDate,
        skip: usize,
    ) -> Result<ConnectionPage, BookingError> {
        let url = format!(
            "{}/connection/{}/{}/{}",
            self.base_url,
            from,
            to,
            date.format("%Y-%m-%d")
        );

        let response = self
            .http
            .get(&url)
            .header(TOKEN_HEADER, Self::token_header(token)?)
            .query(&[("skip", skip.to_string())])
            .send()
            .await?;

        let page: ConnectionPage = Self::decode(response).await?;
        debug!(
            count = page.connections.as_ref().map_or(0, Vec::len),
            "connection page returned"
        );
        Ok(page)
    }

    #[instrument(skip(self, token, request), fields(train = %request.filter.nj_train, departure = request.nj_dep))]
    async fn get_offers(
        &self,
        token: &AuthToken,
        request: &OfferRequest,
    ) -> Result<serde_json::Value, BookingError> {
        let url = format!("{}/offer/get", self.base_url);

        let response = self
            .http
            .post(&url)
            .header(TOKEN_HEADER, Self::token_header(token)?)
            .header(CONTENT_TYPE, "application/json; charset=utf-8")
            .body(self.json_body(request)?)
            .send()
            .await?;

        Self::decode(response).await
    }
}
