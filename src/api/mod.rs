pub mod coupons;
pub mod homecare;
pub mod lookup;
pub mod orders;
pub mod riders;

use std::time::Duration;

use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::config::Config;
use crate::error::{map_reqwest_error, AdminError};
use crate::observability::metrics::Metrics;

/// One HTTP client for the whole admin backend. Every call carries a bearer
/// token and a JSON body; every response body carries a `success` flag that
/// is checked even on HTTP 200. No caching, no automatic retries: each call
/// site stands alone, but mutating calls carry an idempotency key so an
/// external retry cannot double-apply.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    metrics: Metrics,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

impl ApiClient {
    pub fn new(config: &Config, metrics: Metrics) -> Result<Self, AdminError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!("carelink-admin/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| AdminError::Transport(err.to_string()))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            metrics,
        })
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        resource: &'static str,
        path: &str,
        token: &str,
    ) -> Result<T, AdminError> {
        self.send(resource, Method::GET, path, token, None::<&()>)
            .await
    }

    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        resource: &'static str,
        path: &str,
        token: &str,
        body: &impl Serialize,
    ) -> Result<T, AdminError> {
        self.send(resource, Method::POST, path, token, Some(body))
            .await
    }

    pub(crate) async fn put<T: DeserializeOwned>(
        &self,
        resource: &'static str,
        path: &str,
        token: &str,
        body: &impl Serialize,
    ) -> Result<T, AdminError> {
        self.send(resource, Method::PUT, path, token, Some(body))
            .await
    }

    pub(crate) async fn patch<T: DeserializeOwned>(
        &self,
        resource: &'static str,
        path: &str,
        token: &str,
        body: &impl Serialize,
    ) -> Result<T, AdminError> {
        self.send(resource, Method::PATCH, path, token, Some(body))
            .await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(
        &self,
        resource: &'static str,
        path: &str,
        token: &str,
        body: Option<&impl Serialize>,
    ) -> Result<T, AdminError> {
        self.send(resource, Method::DELETE, path, token, body).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        resource: &'static str,
        method: Method,
        path: &str,
        token: &str,
        body: Option<&impl Serialize>,
    ) -> Result<T, AdminError> {
        if token.trim().is_empty() {
            return Err(AdminError::MissingToken);
        }

        self.metrics
            .api_requests_total
            .with_label_values(&[resource])
            .inc();

        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .http
            .request(method.clone(), &url)
            .bearer_auth(token)
            .header("content-type", "application/json");

        if method != Method::GET {
            // one fresh key per logical mutation attempt
            request = request.header("idempotency-key", Uuid::new_v4().to_string());
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        let result = self.dispatch(request).await;

        if let Err(err) = &result {
            let kind = match err {
                AdminError::Transport(_) => "transport",
                AdminError::Timeout => "timeout",
                AdminError::Http { .. } => "http",
                AdminError::Api(_) => "api",
                _ => "other",
            };
            self.metrics
                .api_failures_total
                .with_label_values(&[resource, kind])
                .inc();
            tracing::warn!(resource, %method, path, error = %err, "api call failed");
        }

        result
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, AdminError> {
        let response = request.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;

        if !status.is_success() {
            return Err(normalize_http_error(status, &bytes));
        }

        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|err| AdminError::Decode(format!("invalid response body: {err}")))?;

        let success = value
            .get("success")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        if !success {
            let message = value
                .get("message")
                .or_else(|| value.get("error"))
                .and_then(Value::as_str)
                .unwrap_or("request was not successful")
                .to_string();
            return Err(AdminError::Api(message));
        }

        serde_json::from_value(value).map_err(|err| AdminError::Decode(err.to_string()))
    }
}

/// Non-2xx handling: prefer the backend's `message`/`error` string, fall
/// back to a generic text when the body is not parseable JSON.
fn normalize_http_error(status: StatusCode, bytes: &[u8]) -> AdminError {
    let message = serde_json::from_slice::<ErrorBody>(bytes)
        .ok()
        .and_then(|body| body.message.or(body.error))
        .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));

    AdminError::http(status.as_u16(), message)
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::normalize_http_error;

    #[test]
    fn error_body_message_wins() {
        let err = normalize_http_error(
            StatusCode::BAD_REQUEST,
            br#"{"message": "pincode not serviceable"}"#,
        );
        assert_eq!(err.to_string(), "pincode not serviceable");
    }

    #[test]
    fn error_field_is_accepted_too() {
        let err = normalize_http_error(StatusCode::CONFLICT, br#"{"error": "order already assigned"}"#);
        assert_eq!(err.to_string(), "order already assigned");
    }

    #[test]
    fn unparseable_body_falls_back_to_generic_text() {
        let err = normalize_http_error(StatusCode::INTERNAL_SERVER_ERROR, b"<html>oops</html>");
        assert_eq!(err.to_string(), "HTTP error! status: 500");
    }

    #[test]
    fn json_body_without_known_fields_falls_back_too() {
        let err = normalize_http_error(StatusCode::NOT_FOUND, br#"{"detail": "nope"}"#);
        assert_eq!(err.to_string(), "HTTP error! status: 404");
    }
}
