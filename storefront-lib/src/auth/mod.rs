//! Authentication for the storefront API.
//!
//! The admin API takes a bearer token obtained from the login endpoint. The
//! client asks its [`TokenProvider`] for the token before each request and
//! tells it to drop the token when the server answers 401.

mod token;

pub use token::*;
