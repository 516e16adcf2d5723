//! REST API client module for the admission backend.
//!
//! This module provides the `ApiClient` for the info, stats and search
//! endpoints, and the `AdmissionApi` trait the page controller is written
//! against so it can be driven by a fake backend in tests.

pub mod client;
pub mod error;

use std::future::Future;

use anyhow::Result;

use crate::models::{AdmissionInfo, SearchResult, Stats};

pub use client::ApiClient;
pub use error::ApiError;

/// The three read-only calls the lookup page makes.
pub trait AdmissionApi {
    fn admission_info(&self) -> impl Future<Output = Result<AdmissionInfo>> + Send;

    fn stats(&self) -> impl Future<Output = Result<Stats>> + Send;

    fn search(&self, roll_number: &str) -> impl Future<Output = Result<SearchResult>> + Send;
}
