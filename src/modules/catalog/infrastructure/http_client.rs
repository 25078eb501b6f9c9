//! JSON-over-HTTP client for the catalog service
//!
//! Classifies every failure into the crate's error taxonomy. It never retries:
//! the only recovery path is the user issuing the action again.

use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::{LogContext, TimedOperation};
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use std::time::Duration;

/// HTTP client that turns responses into typed results or classified errors
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    user_agent: String,
    provider_name: String,
}

impl HttpClient {
    /// Create a client whose requests give up after `timeout`
    pub fn new(provider_name: &str, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            AppError::ConfigurationError(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self {
            client,
            user_agent: format!("moviedeck/{}", env!("CARGO_PKG_VERSION")),
            provider_name: provider_name.to_string(),
        })
    }

    /// Make a GET request and decode the JSON body
    pub async fn get<T>(&self, url: &str) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let endpoint = redact(url);
        let timer = TimedOperation::new(&format!("{} GET {}", self.provider_name, endpoint));
        LogContext::api_call(&self.provider_name, endpoint, "started", None);

        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                log::warn!("{} request to {} failed: {}", self.provider_name, endpoint, e);
                AppError::from(e)
            })?;

        let status = response.status();
        LogContext::api_call(
            &self.provider_name,
            endpoint,
            status.as_str(),
            Some(timer.elapsed_ms()),
        );

        if !status.is_success() {
            return Err(self.status_error(status, response).await);
        }

        self.parse_response(response).await
    }

    /// Build the error for a non-success response, preferring the service's own message
    async fn status_error(&self, status: StatusCode, response: Response) -> AppError {
        let body = response.text().await.unwrap_or_default();
        let message = service_message(&body).unwrap_or_else(|| {
            format!(
                "{} API returned {}",
                self.provider_name,
                status.canonical_reason().unwrap_or("an unexpected status")
            )
        });

        if status == StatusCode::NOT_FOUND {
            AppError::NotFound(message)
        } else {
            AppError::ServiceError {
                status: status.as_u16(),
                message,
            }
        }
    }

    async fn parse_response<T>(&self, response: Response) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response_text = response.text().await.map_err(|e| {
            AppError::TransportError(format!(
                "Failed to read {} response: {}",
                self.provider_name, e
            ))
        })?;

        serde_json::from_str(&response_text).map_err(|e| {
            AppError::SerializationError(format!(
                "Failed to parse {} response: {}. Response: {}",
                self.provider_name,
                e,
                truncate(&response_text, 200)
            ))
        })
    }

    /// Get provider name
    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }
}

/// Strip the query string so credentials never reach the log
fn redact(url: &str) -> &str {
    url.split('?').next().unwrap_or(url)
}

/// Extract `status_message` from an error body, if the service sent one
fn service_message(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()?
        .get("status_message")?
        .as_str()
        .map(str::to_string)
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let head: String = text.chars().take(max_chars).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}
