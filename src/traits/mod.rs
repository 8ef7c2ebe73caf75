//! Trait seams used for dependency injection in tests.
//!
//! - [`HttpClient`] - HTTP GET/POST

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
