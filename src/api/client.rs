//! HTTP API Client
//!
//! Functions for communicating with the Xray backend REST API. Every call is
//! a single best-effort round trip: no retry, no timeout, no caching.

use gloo_net::http::{Method, Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::state::global::{Profile, Stats, SystemInfo};

/// Default API base URL (same-origin reverse proxy path)
pub const DEFAULT_API_BASE: &str = "/api";

/// Local storage key for the API base URL override
const API_URL_KEY: &str = "xray_api_url";

/// Uniform error shape for all API failures.
///
/// `Display` always yields the human-readable message a caller can surface
/// directly in a toast.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The round trip never completed
    #[error("Network error: {0}")]
    Network(String),
    /// Non-success HTTP status, with the backend's detail message when it
    /// sent one, or a synthesized status line otherwise
    #[error("{detail}")]
    Status { status: u16, detail: String },
    /// The response body was not the JSON we expected
    #[error("Parse error: {0}")]
    Parse(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_URL_KEY) {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_URL_KEY, url);
        }
    }
}

/// Structured error body sent by the backend (FastAPI shape)
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: String,
}

/// Generic JSON request against the backend.
///
/// Returns `Ok(None)` for `204 No Content`, the parsed body otherwise. All
/// failures are normalized into [`ApiError`].
pub async fn request<T: DeserializeOwned>(
    method: Method,
    path: &str,
    body: Option<serde_json::Value>,
) -> ApiResult<Option<T>> {
    let url = format!("{}{}", get_api_base(), path);
    let builder = RequestBuilder::new(&url).method(method);

    let request = match body {
        Some(body) => builder
            .json(&body)
            .map_err(|e| ApiError::Network(format!("Request build error: {}", e)))?,
        None => builder
            .build()
            .map_err(|e| ApiError::Network(format!("Request build error: {}", e)))?,
    };

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(status_error(response).await);
    }

    if response.status() == 204 {
        return Ok(None);
    }

    let parsed = response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))?;

    Ok(Some(parsed))
}

/// Normalize a non-success response into an [`ApiError::Status`].
///
/// Attempts to parse the backend's `{"detail": ...}` body; if that fails the
/// message is synthesized from the status line.
async fn status_error(response: Response) -> ApiError {
    let status = response.status();
    let status_text = response.status_text();

    let detail = match response.json::<ErrorBody>().await {
        Ok(body) if !body.detail.is_empty() => body.detail,
        Ok(_) => "Request failed".to_string(),
        Err(_) => format!("HTTP {}: {}", status, status_text),
    };

    ApiError::Status { status, detail }
}

/// Unwrap a response body for endpoints that never answer `204`
fn require_body<T>(body: Option<T>) -> ApiResult<T> {
    body.ok_or_else(|| ApiError::Parse("unexpected empty response".to_string()))
}

// ============ Profile Management ============

/// Fetch all profiles
pub async fn list_profiles() -> ApiResult<Vec<Profile>> {
    require_body(request(Method::GET, "/profiles", None).await?)
}

/// Fetch a single profile by id
pub async fn get_profile(profile_id: &str) -> ApiResult<Profile> {
    require_body(request(Method::GET, &format!("/profiles/{}", profile_id), None).await?)
}

/// Create a new profile for the given email
pub async fn create_profile(email: &str) -> ApiResult<Profile> {
    let body = serde_json::json!({ "email": email });
    require_body(request(Method::POST, "/profiles", Some(body)).await?)
}

/// Delete a profile (backend answers 204 or a JSON ack, either way the body
/// is irrelevant)
pub async fn delete_profile(profile_id: &str) -> ApiResult<()> {
    request::<serde_json::Value>(Method::DELETE, &format!("/profiles/{}", profile_id), None)
        .await?;
    Ok(())
}

/// Fetch the QR code PNG for a profile.
///
/// The payload is binary, so there is no structured-error parsing on this
/// path: any non-success status maps to one generic message.
pub async fn fetch_qr_code(profile_id: &str) -> ApiResult<Vec<u8>> {
    let url = format!("{}/profiles/{}/qr", get_api_base(), profile_id);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status {
            status: response.status(),
            detail: "Failed to generate QR code".to_string(),
        });
    }

    response
        .binary()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

// ============ Statistics ============

/// Fetch aggregate server statistics
pub async fn fetch_stats() -> ApiResult<Stats> {
    require_body(request(Method::GET, "/stats", None).await?)
}

/// Fetch server system information
pub async fn fetch_system_info() -> ApiResult<SystemInfo> {
    require_body(request(Method::GET, "/system", None).await?)
}

// ============ Configuration ============

/// Download the full server configuration as JSON
pub async fn create_backup() -> ApiResult<serde_json::Value> {
    require_body(request(Method::GET, "/backup", None).await?)
}

/// Restore the server configuration from a previously downloaded backup
pub async fn restore_backup(backup_file: &str) -> ApiResult<()> {
    let body = serde_json::json!({ "backup_file": backup_file });
    request::<serde_json::Value>(Method::POST, "/restore", Some(body)).await?;
    Ok(())
}

// ============ Health Check ============

/// Probe the backend health endpoint
pub async fn check_health() -> ApiResult<()> {
    request::<serde_json::Value>(Method::GET, "/health", None).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error_display() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn test_status_error_displays_detail_only() {
        let err = ApiError::Status {
            status: 404,
            detail: "Profile not found".to_string(),
        };
        assert_eq!(err.to_string(), "Profile not found");
    }

    #[test]
    fn test_synthesized_status_message_shape() {
        let err = ApiError::Status {
            status: 502,
            detail: format!("HTTP {}: {}", 502, "Bad Gateway"),
        };
        assert_eq!(err.to_string(), "HTTP 502: Bad Gateway");
    }

    #[test]
    fn test_parse_error_display() {
        let err = ApiError::Parse("expected value at line 1".to_string());
        assert_eq!(err.to_string(), "Parse error: expected value at line 1");
    }

    #[test]
    fn test_require_body() {
        assert_eq!(require_body(Some(3)), Ok(3));
        assert!(matches!(
            require_body::<u32>(None),
            Err(ApiError::Parse(_))
        ));
    }
}
