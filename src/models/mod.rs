//! Data models for the admission API.
//!
//! - `AdmissionInfo`, `FeeBreakdown`: fee structure per department
//! - `Stats`: selected-student counts
//! - `SearchResult`: per-roll admission outcome
//! - `Department`: the closed set of department keys

pub mod admission;

pub use admission::{
    AdmissionInfo, AdmissionInfoResponse, Department, FeeBreakdown, SearchResult, Stats,
};
