//! Pure view functions: view model in, markup tree out.
//!
//! - `stats`: statistics panel and its load-failure fallback
//! - `result`: selected / not-selected result panel
//! - `fees`: per-student fee breakdown and the fee-structure table
//! - `controls`: search button in its idle and searching states

pub mod controls;
pub mod fees;
pub mod result;
pub mod stats;

pub use controls::search_button;
pub use fees::{fee_breakdown, fee_table};
pub use result::result_panel;
pub use stats::{stats_panel, stats_unavailable};
