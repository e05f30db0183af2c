use std::sync::Arc;
use std::time::Instant;

use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, info, warn};

use shelfmark_core::endpoints;
use shelfmark_core::{
    LoginRequest, RefreshRequest, RefreshResponse, RegisterRequest, RegisteredUser, TokenPair,
};
use shelfmark_keystore::{CredentialKind, SessionStore};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::events::SessionEvent;
use crate::request::{ApiRequest, ApiResponse};

const EVENT_CAPACITY: usize = 16;

/// Where a logical call is in its lifecycle. A retried call never refreshes
/// again.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Attempt {
    Initial,
    Retry { access: String },
}

pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    store: Arc<dyn SessionStore>,
    events: broadcast::Sender<SessionEvent>,
    refresh_lock: Mutex<()>,
}

impl ApiClient {
    pub fn new(config: ClientConfig, store: Arc<dyn SessionStore>) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Ok(Self::with_http_client(http, config, store))
    }

    /// Uses a preconfigured transport; `config.timeout` is not applied to it.
    pub fn with_http_client(
        http: reqwest::Client,
        config: ClientConfig,
        store: Arc<dyn SessionStore>,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            http,
            config,
            store,
            events,
            refresh_lock: Mutex::new(()),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    pub fn is_authenticated(&self) -> Result<bool, ApiError> {
        Ok(self.store.access_token()?.is_some())
    }

    /// Sends `method path` with an optional JSON body and query parameters.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        params: &[(&str, String)],
    ) -> Result<ApiResponse, ApiError> {
        let mut request = ApiRequest::new(method, path);
        for (key, value) in params {
            request = request.query(key, value);
        }
        if let Some(body) = body {
            request = request.json_value(body);
        }
        self.send(&request).await
    }

    /// Sends an authenticated request, refreshing the session at most once.
    pub async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut attempt = Attempt::Initial;
        loop {
            let access = match &attempt {
                Attempt::Initial => self.store.access_token()?,
                Attempt::Retry { access } => Some(access.clone()),
            };
            let response = self.dispatch(request, access.as_deref()).await?;
            let retried = matches!(attempt, Attempt::Retry { .. });
            if response.status() != StatusCode::UNAUTHORIZED || retried {
                return ApiResponse::read(response).await?.into_result();
            }

            info!(
                method = %request.method(),
                path = %request.path(),
                "http request unauthorized; attempting token refresh"
            );
            let access = self.refresh_session(access.as_deref()).await?;
            attempt = Attempt::Retry { access };
        }
    }

    pub async fn send_json<T: DeserializeOwned>(&self, request: &ApiRequest) -> Result<T, ApiError> {
        self.send(request).await?.json()
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send_json(&ApiRequest::get(path)).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(&ApiRequest::post(path).json(body)?).await
    }

    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(&ApiRequest::put(path).json(body)?).await
    }

    pub async fn patch_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(&ApiRequest::patch(path).json(body)?).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(&ApiRequest::delete(path)).await?;
        Ok(())
    }

    /// Exchanges credentials for a token pair and stores it. Bad credentials
    /// come back as a plain 401 [`ApiError::Status`].
    pub async fn login(&self, username: &str, password: &str) -> Result<(), ApiError> {
        let payload = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let request = ApiRequest::post(endpoints::LOGIN).json(&payload)?;
        let tokens: TokenPair = self.send_unauthenticated(&request).await?.json()?;
        self.store.store_pair(&tokens.access, &tokens.refresh)?;
        info!(username = %username, "logged in");
        self.emit(SessionEvent::LoggedIn);
        Ok(())
    }

    pub async fn register(&self, payload: &RegisterRequest) -> Result<RegisteredUser, ApiError> {
        let request = ApiRequest::post(endpoints::REGISTER).json(payload)?;
        self.send_unauthenticated(&request).await?.json()
    }

    pub fn logout(&self) -> Result<(), ApiError> {
        self.store.clear()?;
        info!("logged out");
        self.emit(SessionEvent::LoggedOut);
        Ok(())
    }

    async fn send_unauthenticated(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        let response = self.dispatch(request, None).await?;
        ApiResponse::read(response).await?.into_result()
    }

    async fn dispatch(
        &self,
        request: &ApiRequest,
        access: Option<&str>,
    ) -> Result<reqwest::Response, ApiError> {
        let url = self.config.endpoint(request.path())?;
        let mut headers = request.outbound_headers();
        if let Some(token) = access {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| ApiError::InvalidRequest("access token is not a valid header".into()))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let mut builder = self
            .http
            .request(request.method().clone(), &url)
            .headers(headers);
        if !request.query_pairs().is_empty() {
            builder = builder.query(request.query_pairs());
        }
        let builder = request.apply_body(builder)?;

        debug!(method = %request.method(), url = %url, "http request");
        let start = Instant::now();
        let response = builder.send().await?;
        debug!(
            method = %request.method(),
            url = %url,
            status = %response.status(),
            elapsed_ms = start.elapsed().as_millis(),
            "http response"
        );
        Ok(response)
    }

    /// Returns a usable access token after a 401 seen with `stale`.
    ///
    /// Refreshes are serialized: a caller that finds the stored token already
    /// replaced by a concurrent refresh reuses it instead of refreshing again.
    async fn refresh_session(&self, stale: Option<&str>) -> Result<String, ApiError> {
        let _guard = self.refresh_lock.lock().await;

        if let Some(current) = self.store.access_token()? {
            if stale != Some(current.as_str()) {
                debug!("access token already refreshed by a concurrent request");
                return Ok(current);
            }
        }

        let Some(refresh_token) = self.store.refresh_token()? else {
            warn!("no refresh token stored; session expired");
            return Err(self.expire_session());
        };

        match self.exchange_refresh_token(&refresh_token).await {
            Ok(tokens) => {
                self.store.store(CredentialKind::Access, &tokens.access)?;
                if let Some(rotated) = tokens.refresh.as_deref() {
                    self.store.store(CredentialKind::Refresh, rotated)?;
                }
                info!("access token refreshed");
                self.emit(SessionEvent::Refreshed);
                Ok(tokens.access)
            }
            Err(err) => {
                warn!(error = %err, "token refresh failed; session expired");
                Err(self.expire_session())
            }
        }
    }

    /// Never routed through [`Self::send`], so a 401 here is terminal.
    async fn exchange_refresh_token(&self, refresh_token: &str) -> Result<RefreshResponse, ApiError> {
        let payload = RefreshRequest {
            refresh: refresh_token.to_string(),
        };
        let request = ApiRequest::post(endpoints::TOKEN_REFRESH).json(&payload)?;
        self.send_unauthenticated(&request).await?.json()
    }

    /// Tokens that could not be removed surface as [`ApiError::Store`]
    /// instead of `AuthenticationRequired`.
    fn expire_session(&self) -> ApiError {
        let cleared = self.store.clear();
        self.emit(SessionEvent::Expired {
            redirect_to: self.config.login_path.clone(),
        });
        match cleared {
            Ok(()) => ApiError::AuthenticationRequired,
            Err(err) => {
                warn!(error = %err, "failed to clear stored tokens");
                ApiError::Store(err)
            }
        }
    }

    fn emit(&self, event: SessionEvent) {
        if self.events.send(event).is_err() {
            debug!("no session event subscribers");
        }
    }
}

