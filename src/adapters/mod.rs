//! Concrete implementations of the trait seams in `crate::traits`.
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`mock::MockHttpClient`] - configurable responses for tests

pub mod mock;
pub mod reqwest_http;

pub use mock::{MockHttpClient, MockResponse};
pub use reqwest_http::ReqwestHttpClient;
