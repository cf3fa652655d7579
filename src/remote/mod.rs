//! HTTP client for the admin backend.
//!
//! Every operation issues exactly one request (the detail lookups re-fetch the
//! whole collection) and never retries. Non-2xx answers become
//! [`AppError::Http`] carrying the status; connection failures become
//! [`AppError::Transport`].

pub mod auth;
pub mod orders;
pub mod partners;

use std::sync::Arc;
use std::time::Instant;

use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue, ORIGIN, REFERER};
use reqwest::{Client, RequestBuilder, Response};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::AppError;
use crate::observability::metrics::Metrics;
use crate::session::Session;

const ACCEPT_VALUE: &str = "application/json, text/plain, */*";
const ACCEPT_LANGUAGE_VALUE: &str = "en-IN,en-GB;q=0.9,en-US;q=0.8,en;q=0.7,hi;q=0.6";

pub struct ApiClient {
    http: Client,
    base_url: String,
    session: Arc<Session>,
    metrics: Metrics,
}

impl ApiClient {
    pub fn new(config: &Config, session: Arc<Session>) -> Result<Self, AppError> {
        let origin = config.origin.trim_end_matches('/');

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE_VALUE));
        headers.insert(ORIGIN, header_value(origin)?);
        headers.insert(REFERER, header_value(&format!("{origin}/"))?);

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|err| AppError::Internal(format!("failed to build http client: {err}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
            metrics: Metrics::new(),
        })
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> Result<Response, AppError> {
        let request = match self.session.token().await {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        };

        let start = Instant::now();
        let result = match request.send().await {
            Ok(response) if response.status().is_success() => Ok(response),
            Ok(response) => {
                let status = response.status();
                Err(AppError::Http {
                    status: status.as_u16(),
                    message: format!("HTTP {status}"),
                })
            }
            Err(err) => Err(AppError::from(err)),
        };
        let elapsed = start.elapsed().as_secs_f64();
        self.metrics.observe_request(operation, result.is_ok(), elapsed);

        match &result {
            Ok(response) => debug!(operation, status = %response.status(), elapsed, "backend request ok"),
            Err(err) => warn!(operation, error = %err, "backend request failed"),
        }

        result
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
    ) -> Result<T, AppError> {
        let response = self.send(operation, self.http.get(self.url(path))).await?;
        Ok(response.json::<T>().await?)
    }
}

fn header_value(raw: &str) -> Result<HeaderValue, AppError> {
    HeaderValue::from_str(raw)
        .map_err(|err| AppError::Internal(format!("invalid header value {raw:?}: {err}")))
}

/// Backend ids are Mongo object ids. Anything outside `[A-Za-z0-9_-]` would
/// change the meaning of the URL it is spliced into.
fn require_id(field: &'static str, id: &str) -> Result<(), AppError> {
    if id.is_empty() {
        return Err(AppError::validation(field, format!("{field} cannot be empty")));
    }
    if !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
        return Err(AppError::validation(
            field,
            format!("{field} may only contain letters, digits, '-' and '_'"),
        ));
    }
    Ok(())
}
