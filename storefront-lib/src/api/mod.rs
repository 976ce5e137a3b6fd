//! Resource operations on [`StorefrontClient`](crate::StorefrontClient).
//!
//! Each submodule adds an `impl StorefrontClient` block for one resource.
//! Every operation unwraps the response envelope and, when the server rejects
//! a request without a message, reports that resource's fallback message.

mod coupons;
mod dashboard;
mod masters;
mod orders;
mod products;
mod reviews;
mod shipping;
mod users;

pub use masters::*;

/// Path segment for an id or slug, percent-encoded.
pub(crate) fn segment(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_encodes_reserved_characters() {
        assert_eq!(segment("summer-tee"), "summer-tee");
        assert_eq!(segment("a/b c"), "a%2Fb%20c");
    }
}
