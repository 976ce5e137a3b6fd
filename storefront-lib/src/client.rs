//! The HTTP client every resource call goes through.

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use log::warn;
use reqwest::Client;
use reqwest::Method;
use reqwest::StatusCode;
use reqwest::header::ACCEPT;
use reqwest::header::HeaderValue;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::auth::TokenProvider;
use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::error::Error;

/// Request timeout used when the builder sets none.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// The client for the storefront admin REST API.
///
/// Clones share one connection pool and token provider. Every call unwraps
/// the response
/// [`Envelope`](crate::envelope::Envelope); resource operations live in
/// [`crate::api`].
///
/// # Example
///
/// ```ignore
/// use storefront_lib::{StorefrontClient, auth::StaticTokenProvider};
///
/// let client = StorefrontClient::builder()
///     .url("http://localhost:4000/api")
///     .token_provider(StaticTokenProvider::new("my-token"))
///     .build()?;
///
/// let colors = client.list_masters::<Colors>().await?;
/// ```
#[derive(Clone)]
pub struct StorefrontClient {
    inner: Arc<StorefrontClientInner>,
}

struct StorefrontClientInner {
    base_url: String,
    token_provider: Arc<dyn TokenProvider>,
    http_client: Client,
    timeout: Duration,
}

impl StorefrontClient {
    pub fn builder() -> StorefrontClientBuilder<Missing, Missing> {
        StorefrontClientBuilder::new()
    }

    /// Returns the base URL of the API, e.g. `http://localhost:4000/api`.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.inner.timeout
    }

    // -------------------------------------------------------------------------
    // Envelope requests
    // -------------------------------------------------------------------------

    /// `GET path`, unwrapping the envelope.
    ///
    /// `fallback` is the message used when the server rejects the request
    /// without saying why.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, fallback: &str) -> Result<T, Error> {
        self.send(Method::GET, path, &[], None, fallback).await
    }

    /// `GET path?query`, unwrapping the envelope.
    pub async fn get_with<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        fallback: &str,
    ) -> Result<T, Error> {
        self.send(Method::GET, path, query, None, fallback).await
    }

    /// `POST path` with a JSON body.
    pub async fn post<B, T>(&self, path: &str, body: &B, fallback: &str) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        self.send(Method::POST, path, &[], Some(body), fallback).await
    }

    /// `PUT path` with a JSON body.
    pub async fn put<B, T>(&self, path: &str, body: &B, fallback: &str) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        self.send(Method::PUT, path, &[], Some(body), fallback).await
    }

    /// `PATCH path` with a JSON body.
    pub async fn patch<B, T>(&self, path: &str, body: &B, fallback: &str) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        self.send(Method::PATCH, path, &[], Some(body), fallback).await
    }

    /// `PATCH path` without a body.
    pub async fn patch_empty<T: DeserializeOwned>(
        &self,
        path: &str,
        fallback: &str,
    ) -> Result<T, Error> {
        self.send(Method::PATCH, path, &[], None, fallback).await
    }

    /// `DELETE path`.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str, fallback: &str) -> Result<T, Error> {
        self.send(Method::DELETE, path, &[], None, fallback).await
    }

    // -------------------------------------------------------------------------
    // Internal
    // -------------------------------------------------------------------------

    fn build_url(&self, path: &str, query: &[(&str, String)]) -> Result<Url, ApiError> {
        let raw = format!("{}{}", self.inner.base_url.trim_end_matches('/'), path);
        let mut url = Url::parse(&raw).map_err(|e| ApiError::invalid_url(&raw, e))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<serde_json::Value>,
        fallback: &str,
    ) -> Result<T, Error> {
        let url = self.build_url(path, query)?;
        let token = self
            .inner
            .token_provider
            .token(&self.inner.base_url)
            .await?;

        debug!("{} {}", method, url);

        let mut request = self
            .inner
            .http_client
            .request(method.clone(), url.clone())
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .timeout(self.inner.timeout);

        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        if let Some(body) = body {
            request = request.json(&body);
        }

        let timeout = self.inner.timeout;
        let response = request.send().await.map_err(|e| {
            warn!("{} {} failed: {}", method, url, e);
            ApiError::from_transport(e, timeout)
        })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::from_transport(e, timeout))?;

        if status == StatusCode::UNAUTHORIZED {
            warn!("{} {} unauthorized, dropping token", method, url);
            self.inner.token_provider.invalidate().await;
        }

        if !status.is_success() {
            let message = Envelope::from_body(&text)
                .ok()
                .and_then(|envelope| envelope.message().map(str::to_string))
                .unwrap_or(text);
            warn!("{} {} returned {}: {}", method, url, status, message);
            return Err(ApiError::http(status.as_u16(), message).into());
        }

        let result = Envelope::from_body(&text)
            .map_err(Error::from)
            .and_then(|envelope| envelope.into_data(fallback));
        if let Err(e) = &result {
            warn!("{} {} failed: {}", method, url, e);
        }
        result
    }
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Builder slot not filled yet.
pub struct Missing;

/// Builder slot holding its value.
pub struct Set<T>(T);

/// Builder for constructing a [`StorefrontClient`].
///
/// `build` only exists once both the base url (with its `/api` prefix) and a
/// [`TokenProvider`] have been given.
///
/// # Example
///
/// ```ignore
/// let client = StorefrontClient::builder()
///     .url("https://shop.example.com/api")
///     .token_provider(AnonymousTokenProvider)
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// ```
pub struct StorefrontClientBuilder<UrlState, ProviderState> {
    url: UrlState,
    token_provider: ProviderState,
    timeout: Duration,
    connect_timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl StorefrontClientBuilder<Missing, Missing> {
    pub fn new() -> Self {
        Self {
            url: Missing,
            token_provider: Missing,
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: None,
            http_client: None,
        }
    }
}

impl Default for StorefrontClientBuilder<Missing, Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> StorefrontClientBuilder<Missing, P> {
    /// Base url of the API, e.g. `http://localhost:4000/api`.
    pub fn url(self, url: impl Into<String>) -> StorefrontClientBuilder<Set<String>, P> {
        StorefrontClientBuilder {
            url: Set(url.into()),
            token_provider: self.token_provider,
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            http_client: self.http_client,
        }
    }
}

impl<U> StorefrontClientBuilder<U, Missing> {
    /// Source of the bearer token; [`AnonymousTokenProvider`](crate::auth::AnonymousTokenProvider) sends none.
    pub fn token_provider<T: TokenProvider + 'static>(
        self,
        provider: T,
    ) -> StorefrontClientBuilder<U, Set<Arc<dyn TokenProvider>>> {
        StorefrontClientBuilder {
            url: self.url,
            token_provider: Set(Arc::new(provider) as Arc<dyn TokenProvider>),
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            http_client: self.http_client,
        }
    }
}

impl<U, P> StorefrontClientBuilder<U, P> {
    /// Whole-request limit, [`DEFAULT_TIMEOUT`] unless set.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Limit on establishing the TCP connection. Ignored with a custom `http_client`.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl StorefrontClientBuilder<Set<String>, Set<Arc<dyn TokenProvider>>> {
    /// Fails when the base url does not parse.
    pub fn build(self) -> Result<StorefrontClient, ApiError> {
        let base_url = self.url.0;
        Url::parse(&base_url).map_err(|e| ApiError::invalid_url(&base_url, e))?;

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                builder.build()?
            }
        };

        Ok(StorefrontClient {
            inner: Arc::new(StorefrontClientInner {
                base_url,
                token_provider: self.token_provider.0,
                http_client,
                timeout: self.timeout,
            }),
        })
    }
}
