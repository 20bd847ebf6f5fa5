//! Main client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder};
use url::Url;

use crate::api::{EntitiesApi, IntentsApi, LanguageApi, MessageApi};
use crate::error::{Error, ErrorResponse, Result};
use crate::normalize::NameNormalization;

/// Default Wit API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.wit.ai";

/// API version pinned through the `v` query parameter (YYYYMMDD).
pub const DEFAULT_API_VERSION: &str = "20220511";

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable holding the server access token.
pub const TOKEN_ENV: &str = "WIT_ACCESS_TOKEN";

/// Environment variable overriding the API version.
pub const API_VERSION_ENV: &str = "WIT_API_VERSION";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "WIT_BASE_URL";

/// Wit API client.
///
/// Bound to one access token for its lifetime. Cloning is cheap and clones
/// share the same connection pool, so one client can serve concurrent calls.
///
/// # Example
///
/// ```no_run
/// use witai_client::WitClient;
///
/// # async fn example() -> witai_client::Result<()> {
/// let client = WitClient::new("server-access-token")?;
///
/// let intents = client.intents().list().await?;
/// for intent in intents.iter().filter(|i| i.is_custom) {
///     println!("{}", intent.name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct WitClient {
    /// Inner shared state.
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
pub(crate) struct ClientInner {
    /// HTTP client carrying the default headers.
    pub(crate) http: reqwest::Client,
    /// Base URL for API requests.
    pub(crate) base_url: Url,
    /// Value of the `v` query parameter.
    pub(crate) api_version: String,
    /// Request timeout.
    pub(crate) timeout: Duration,
    /// Which results get built-in name normalization.
    pub(crate) normalization: NameNormalization,
}

impl std::fmt::Debug for WitClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WitClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("api_version", &self.inner.api_version)
            .field("timeout", &self.inner.timeout)
            .finish_non_exhaustive()
    }
}

impl WitClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client for the public Wit endpoint with default settings.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::builder().auth_token(token).build()
    }

    /// Create a client configured from `WIT_ACCESS_TOKEN` and friends.
    pub fn from_env() -> Result<Self> {
        ClientBuilder::from_env().build()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Get the pinned API version.
    pub fn api_version(&self) -> &str {
        &self.inner.api_version
    }

    /// Get the request timeout.
    pub fn timeout(&self) -> Duration {
        self.inner.timeout
    }

    pub(crate) fn normalization(&self) -> NameNormalization {
        self.inner.normalization
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the message API.
    pub fn message(&self) -> MessageApi {
        MessageApi::new(self.clone())
    }

    /// Access the language detection API.
    pub fn language(&self) -> LanguageApi {
        LanguageApi::new(self.clone())
    }

    /// Access the intents API.
    pub fn intents(&self) -> IntentsApi {
        IntentsApi::new(self.clone())
    }

    /// Access the entities API.
    pub fn entities(&self) -> EntitiesApi {
        EntitiesApi::new(self.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal HTTP methods
    // ─────────────────────────────────────────────────────────────────────────

    /// Build a URL from path segments, with the version parameter attached.
    ///
    /// Each segment is percent-encoded on its own, so a caller-supplied name
    /// can never introduce extra path components or a query string.
    pub(crate) fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.inner.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Config("base_url cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        url.query_pairs_mut()
            .append_pair("v", &self.inner.api_version);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        let url = self.url(segments)?;
        tracing::debug!(method = %method, path = %url.path(), "Sending Wit request");
        Ok(self
            .inner
            .http
            .request(method, url)
            .timeout(self.inner.timeout))
    }

    /// Make a GET request.
    pub(crate) async fn get<T: serde::de::DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let response = self.request(Method::GET, segments)?.send().await?;
        self.handle_response(response).await
    }

    /// Make a GET request with query parameters.
    pub(crate) async fn get_with_query<T, Q>(&self, segments: &[&str], query: &Q) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let response = self
            .request(Method::GET, segments)?
            .query(query)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Make a POST request.
    pub(crate) async fn post<T, B>(&self, segments: &[&str], body: &B) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let response = self
            .request(Method::POST, segments)?
            .json(body)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Make a DELETE request, discarding the body of a successful response.
    pub(crate) async fn delete(&self, segments: &[&str]) -> Result<()> {
        let response = self.request(Method::DELETE, segments)?.send().await?;

        if !response.status().is_success() {
            return Err(self.extract_error(response).await);
        }

        Ok(())
    }

    /// Handle a response, extracting the body or error.
    ///
    /// The body is decoded from text so a schema mismatch surfaces as
    /// [`Error::Json`] rather than a transport error.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        if !response.status().is_success() {
            return Err(self.extract_error(response).await);
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::debug!(error = %e, "Wit response did not match expected shape");
            Error::from(e)
        })
    }

    /// Extract an error from a failed response.
    async fn extract_error(&self, response: reqwest::Response) -> Error {
        let status = response.status().as_u16();
        tracing::warn!(status, "Wit request failed");

        match response.text().await {
            Ok(body) => error_from_body(status, body),
            Err(e) => {
                tracing::debug!(status, error = %e, "Failed to read Wit error body");
                unreadable_body_error(status, &e)
            }
        }
    }
}

/// Map a non-success status and its body to an error.
fn error_from_body(status: u16, body: String) -> Error {
    match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(err) => match status {
            404 => Error::NotFound(err.error),
            401 => Error::Auth(err.error),
            _ => Error::Api {
                status,
                code: err.code.unwrap_or_else(|| "unknown".to_string()),
                message: err.error,
            },
        },
        Err(_) => Error::Api {
            status,
            code: "unknown".to_string(),
            message: if body.trim().is_empty() {
                format!("HTTP {}", status)
            } else {
                body
            },
        },
    }
}

/// Error for a non-success status whose body could not be read.
fn unreadable_body_error(status: u16, cause: &dyn std::fmt::Display) -> Error {
    Error::Api {
        status,
        code: "unknown".to_string(),
        message: format!("HTTP {} (error body unreadable: {})", status, cause),
    }
}

/// Builder for creating a WitClient.
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: String,
    auth_token: Option<String>,
    api_version: String,
    timeout: Duration,
    user_agent: Option<String>,
    normalization: NameNormalization,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            auth_token: None,
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
            normalization: NameNormalization::default(),
        }
    }

    /// Create a builder seeded from the environment.
    ///
    /// Reads [`TOKEN_ENV`], and [`API_VERSION_ENV`] / [`BASE_URL_ENV`] when set.
    /// A missing token is reported by [`ClientBuilder::build`].
    pub fn from_env() -> Self {
        let mut builder = Self::new();
        if let Ok(token) = std::env::var(TOKEN_ENV) {
            builder = builder.auth_token(token);
        }
        if let Ok(version) = std::env::var(API_VERSION_ENV) {
            builder = builder.api_version(version);
        }
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            builder = builder.base_url(url);
        }
        builder
    }

    /// Set the base URL. Defaults to `https://api.wit.ai`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the server access token.
    pub fn auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Set the API version sent as `v`.
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Choose which results get built-in name normalization.
    pub fn name_normalization(mut self, normalization: NameNormalization) -> Self {
        self.normalization = normalization;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<WitClient> {
        let token = self
            .auth_token
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| Error::Config("auth_token is required".to_string()))?;

        if self.api_version.trim().is_empty() {
            return Err(Error::Config("api_version must not be empty".to_string()));
        }

        // Parse and normalize base URL
        let mut base_url = Url::parse(&self.base_url)?;
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        // Build default headers
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| Error::Config("Invalid auth token".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("witai-client/{}", env!("CARGO_PKG_VERSION")));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(user_agent)
            .build()?;

        Ok(WitClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                api_version: self.api_version,
                timeout: self.timeout,
                normalization: self.normalization,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
