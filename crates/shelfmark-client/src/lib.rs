//! HTTP client for the reading-tracker REST API.
//!
//! [`ApiClient`] attaches the stored access token to every call. When the
//! backend answers `401 Unauthorized` it exchanges the refresh token once,
//! replays the original request with the new access token, and only then
//! reports the outcome. If the session cannot be recovered both tokens are
//! cleared and a [`SessionEvent::Expired`] is broadcast so the embedding
//! application can send the user back to its login entry point.

mod client;
mod config;
mod error;
mod events;
mod request;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use events::SessionEvent;
pub use request::{ApiRequest, ApiResponse, MultipartPart, RequestBody};

pub use reqwest::{Method, StatusCode};
pub use shelfmark_keystore::{
    CredentialKind, FileSessionStore, KeyringSessionStore, MemorySessionStore, SessionStore,
    StoreError,
};
