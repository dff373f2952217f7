//! HTTP layer shared by every resource client.
//!
//! All backend calls go through the helpers here: they construct the URL,
//! attach the bearer token when one is stored, and map failures into
//! [`ApiError`]. Resource modules stay thin typed wrappers on top.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::system::auth::storage;

/// Port the backend listens on; the host is taken from the window location.
const BACKEND_PORT: u16 = 3000;

/// Exact body the wishlist endpoint returns for a duplicate add.
const WISHLIST_DUPLICATE_MESSAGE: &str = "Product already in wishlist";

/// Failure of a backend call.
///
/// `Network` is transport-level (no response at all, or an unreadable one);
/// `Api` carries the backend's status and its `{ message }` body when present.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    Network(String),
    Api { status: u16, message: String },
}

impl ApiError {
    /// Text shown to the user. Backend-provided messages pass through;
    /// transport failures collapse to a generic string.
    pub fn message(&self) -> String {
        match self {
            ApiError::Network(_) => "An error occurred".to_string(),
            ApiError::Api { message, .. } => message.clone(),
        }
    }

    /// Whether the backend rejected the request as a duplicate. The wishlist
    /// endpoint reports duplicates as 400 with a fixed message.
    pub fn is_conflict(&self) -> bool {
        match self {
            ApiError::Api { status: 409, .. } => true,
            ApiError::Api { status: 400, message } => message == WISHLIST_DUPLICATE_MESSAGE,
            _ => false,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(detail) => write!(f, "network error: {}", detail),
            ApiError::Api { status, message } => write!(f, "HTTP {}: {}", status, message),
        }
    }
}

/// API base URL derived from the current window location.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

fn network(detail: impl fmt::Display) -> ApiError {
    ApiError::Network(format!("{}", detail))
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => format!("Request failed with status {}", status),
    };
    ApiError::Api { status, message }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(error_from_response(response).await);
    }
    response.json::<T>().await.map_err(network)
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = with_auth(Request::get(&api_url(path)))
        .send()
        .await
        .map_err(network)?;
    decode(response).await
}

pub async fn post_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = with_auth(Request::post(&api_url(path)))
        .json(body)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    decode(response).await
}

pub async fn put_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = with_auth(Request::put(&api_url(path)))
        .json(body)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    decode(response).await
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let response = with_auth(Request::delete(&api_url(path)))
        .send()
        .await
        .map_err(network)?;
    if !response.ok() {
        return Err(error_from_response(response).await);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_message_passes_through() {
        let err = ApiError::Api {
            status: 404,
            message: "Product not found".into(),
        };
        assert_eq!(err.message(), "Product not found");
    }

    #[test]
    fn network_error_falls_back_to_generic_message() {
        let err = ApiError::Network("timeout".into());
        assert_eq!(err.message(), "An error occurred");
    }

    #[test]
    fn wishlist_duplicate_is_a_conflict() {
        let err = ApiError::Api {
            status: 400,
            message: "Product already in wishlist".into(),
        };
        assert!(err.is_conflict());
    }

    #[test]
    fn plain_validation_failure_is_not_a_conflict() {
        let err = ApiError::Api {
            status: 400,
            message: "Name is required".into(),
        };
        assert!(!err.is_conflict());
    }

    #[test]
    fn other_duplicate_messages_are_not_wishlist_conflicts() {
        let err = ApiError::Api {
            status: 400,
            message: "Category already exists".into(),
        };
        assert!(!err.is_conflict());
    }
}
