//! Test doubles for the trait seams.

pub mod http;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
