//! Storefront admin API client library
//!
//! An async client for the e-commerce admin REST API: master data, coupons,
//! products, orders, reviews, users, partners, shipping settings and the
//! metrics dashboard. Every endpoint answers with a
//! `{ success, message, data }` envelope which the client unwraps.

pub mod api;
pub mod auth;
pub mod envelope;
pub mod error;
pub mod form;
pub mod model;

mod client;

pub use client::*;
pub use error::Error;
