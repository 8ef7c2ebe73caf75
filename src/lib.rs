//! qh-search - browse and search the Quran and Hadith collections from the terminal
//!
//! This library exposes modules for use in integration tests and benchmarks.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod cli_output;
pub mod dataset;
pub mod error;
pub mod input;
pub mod models;
pub mod render;
pub mod retrieval;
pub mod startup;
pub mod terminal;
pub mod traits;
pub mod ui;
