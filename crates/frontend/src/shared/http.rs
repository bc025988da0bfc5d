//! HTTP transport for the `/bms` API.
//!
//! One helper per verb; every call attaches the stored session token as a
//! bearer credential when present. A 401 response trips the session expiry
//! latch (see `system::session::expiry`) and surfaces as a typed
//! `ApiError::Unauthorized` — the transport itself never navigates.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

use crate::system::session::{expiry, storage};

/// Failure of a single backend call. Errors are terminal for the triggering
/// operation: no helper retries, callers surface the message and wait for a
/// new user action.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 401 from the backend. The expiry latch has already been tripped by
    /// the time the caller sees this.
    Unauthorized,
    /// Non-2xx with an optional server-provided `{"message": ...}` body.
    Http { status: u16, message: Option<String> },
    /// Transport-level failure (DNS, refused connection, aborted request).
    Network(String),
    /// 2xx body that did not match the expected shape.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized => write!(f, "Session expired, please sign in again"),
            ApiError::Http { status, message } => match message {
                Some(msg) => write!(f, "{}", msg),
                None => write!(f, "Request failed: HTTP {}", status),
            },
            ApiError::Network(e) => write!(f, "Could not reach the server: {}", e),
            ApiError::Decode(e) => write!(f, "Unexpected response from the server: {}", e),
        }
    }
}

/// Base URL for API requests.
///
/// `BMS_API_BASE` at build time wins; otherwise the backend is assumed to
/// sit next to the frontend host on port 8080.
pub fn api_base() -> String {
    if let Some(base) = option_env!("BMS_API_BASE") {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8080", protocol, hostname)
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn with_bearer(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn check(response: Response) -> Result<Response, ApiError> {
    if response.status() == 401 {
        expiry::session_expired();
        return Err(ApiError::Unauthorized);
    }
    if !response.ok() {
        let status = response.status();
        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string));
        return Err(ApiError::Http { status, message });
    }
    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = with_bearer(Request::get(&api_url(path)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(check(response).await?).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = with_bearer(Request::post(&api_url(path)))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(check(response).await?).await
}

/// POST for the two legacy endpoints that answer with a plain text body.
pub async fn post_text<B: Serialize>(path: &str, body: &B) -> Result<String, ApiError> {
    let response = with_bearer(Request::post(&api_url(path)))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(response)
        .await?
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = with_bearer(Request::put(&api_url(path)))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(check(response).await?).await
}

pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = with_bearer(Request::patch(&api_url(path)))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(check(response).await?).await
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let response = with_bearer(Request::delete(&api_url(path)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(response).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_passes_through() {
        let err = ApiError::Http {
            status: 409,
            message: Some("Candidate already exists".to_string()),
        };
        assert_eq!(err.to_string(), "Candidate already exists");
    }

    #[test]
    fn test_generic_message_without_body() {
        let err = ApiError::Http {
            status: 500,
            message: None,
        };
        assert_eq!(err.to_string(), "Request failed: HTTP 500");
    }
}
