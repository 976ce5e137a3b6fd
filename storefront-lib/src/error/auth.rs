/// Failure to produce a bearer token.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("could not read the stored session: {0}")]
    Store(String),
}
