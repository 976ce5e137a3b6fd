//! Where the client gets its bearer token from.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::AuthError;

/// Supplies the admin bearer token.
///
/// `token` is asked before every request; `Ok(None)` sends the request
/// without an `Authorization` header. After a 401 the client calls
/// `invalidate` and the provider should stop returning the rejected token.
///
/// ```ignore
/// struct SessionFile(PathBuf);
///
/// #[async_trait]
/// impl TokenProvider for SessionFile {
///     async fn token(&self, _base_url: &str) -> Result<Option<String>, AuthError> {
///         match std::fs::read_to_string(&self.0) {
///             Ok(token) => Ok(Some(token.trim().to_string())),
///             Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
///             Err(e) => Err(AuthError::Store(e.to_string())),
///         }
///     }
/// }
/// ```
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn token(&self, base_url: &str) -> Result<Option<String>, AuthError>;

    async fn invalidate(&self) {}
}

/// One token, dropped on the first 401.
///
/// ```
/// use storefront_lib::auth::StaticTokenProvider;
///
/// let provider = StaticTokenProvider::new("admin-session-token");
/// ```
#[derive(Debug)]
pub struct StaticTokenProvider {
    token: RwLock<Option<String>>,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        Self {
            token: RwLock::new((!token.trim().is_empty()).then_some(token)),
        }
    }

    /// `false` once the server has rejected the token.
    pub async fn has_token(&self) -> bool {
        self.token.read().await.is_some()
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn token(&self, _base_url: &str) -> Result<Option<String>, AuthError> {
        Ok(self.token.read().await.clone())
    }

    async fn invalidate(&self) {
        self.token.write().await.take();
    }
}

/// Sends every request unauthenticated, for the public storefront endpoints.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnonymousTokenProvider;

#[async_trait]
impl TokenProvider for AnonymousTokenProvider {
    async fn token(&self, _base_url: &str) -> Result<Option<String>, AuthError> {
        Ok(None)
    }
}

#[async_trait]
impl<P: TokenProvider + ?Sized> TokenProvider for std::sync::Arc<P> {
    async fn token(&self, base_url: &str) -> Result<Option<String>, AuthError> {
        (**self).token(base_url).await
    }

    async fn invalidate(&self) {
        (**self).invalidate().await
    }
}
