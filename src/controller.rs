//! Page controller for the admission lookup page.
//!
//! The controller owns the page surface and the one piece of cached state
//! (admission metadata). It turns fetch outcomes into rendered containers and
//! page events into actions.
//!
//! Fetches are split into an async half that calls the backend and a
//! synchronous `apply_*` / `finish_*` half that consumes the outcome, so a
//! host can run requests on background tasks and hand results back.

use anyhow::Result;
use tracing::{debug, error, info};

use crate::api::AdmissionApi;
use crate::config::Notices;
use crate::models::{AdmissionInfo, Department, SearchResult, Stats};
use crate::page::{ElementId, Key, Page, Subscription, UiEvent};
use crate::ui::views;

// ============================================================================
// Constants
// ============================================================================

pub const EMPTY_ROLL_ALERT: &str = "Please enter a roll number";
pub const SEARCH_FAILED_ALERT: &str = "Error occurred while searching. Please try again.";
pub const FEE_UNAVAILABLE_ALERT: &str = "Fee information is not available at the moment.";

/// Listeners registered by `subscribe_handlers` and removed by `teardown`.
const HANDLERS: [Subscription; 2] = [Subscription::RollInputKeyPress, Subscription::WindowClick];

// ============================================================================
// State
// ============================================================================

/// Cached application state.
///
/// `admission_info` is `None` until the first successful info fetch and is
/// only read afterwards (by the fee modal).
#[derive(Debug, Default)]
pub struct AppState {
    admission_info: Option<AdmissionInfo>,
}

impl AppState {
    pub fn admission_info(&self) -> Option<&AdmissionInfo> {
        self.admission_info.as_ref()
    }
}

/// Search control state machine: `Idle -> Searching -> Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchControl {
    Idle,
    Searching,
}

/// An accepted search: the trimmed roll number and the generation it was
/// issued under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub roll_number: String,
    pub generation: u64,
}

/// Work a page event asks the host to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Search,
}

// ============================================================================
// Controller
// ============================================================================

pub struct PageController<P: Page> {
    page: P,
    state: AppState,
    notices: Notices,
    search_control: SearchControl,
    search_generation: u64,
}

impl<P: Page> PageController<P> {
    pub fn new(page: P, notices: Notices) -> Self {
        Self {
            page,
            state: AppState::default(),
            notices,
            search_control: SearchControl::Idle,
            search_generation: 0,
        }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    #[cfg(test)]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn search_control(&self) -> SearchControl {
        self.search_control
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Register the roll-input key listener and the outside-click handler.
    pub fn subscribe_handlers(&mut self) {
        for subscription in HANDLERS {
            self.page.subscribe(subscription);
        }
        debug!("Page handlers subscribed");
    }

    /// Remove everything `subscribe_handlers` registered.
    pub fn teardown(&mut self) {
        for subscription in HANDLERS {
            self.page.unsubscribe(subscription);
        }
        debug!("Page handlers unsubscribed");
    }

    /// Subscribe handlers, then load admission info and statistics concurrently.
    pub async fn initialize<A: AdmissionApi>(&mut self, api: &A) {
        self.subscribe_handlers();
        let (info, stats) = futures::future::join(api.admission_info(), api.stats()).await;
        self.apply_admission_info(info);
        self.apply_stats(stats);
    }

    // =========================================================================
    // Admission info
    // =========================================================================

    pub async fn fetch_admission_info<A: AdmissionApi>(&mut self, api: &A) {
        let outcome = api.admission_info().await;
        self.apply_admission_info(outcome);
    }

    /// Failures are logged only; the cached value is left as it was.
    pub fn apply_admission_info(&mut self, outcome: Result<AdmissionInfo>) {
        match outcome {
            Ok(info) => {
                info!(departments = info.fee_structure.len(), "Admission info loaded");
                self.state.admission_info = Some(info);
            }
            Err(e) => {
                error!(error = %e, "Error loading admission info");
            }
        }
    }

    // =========================================================================
    // Statistics
    // =========================================================================

    pub async fn fetch_stats<A: AdmissionApi>(&mut self, api: &A) {
        let outcome = api.stats().await;
        self.apply_stats(outcome);
    }

    pub fn apply_stats(&mut self, outcome: Result<Stats>) {
        match outcome {
            Ok(stats) => {
                info!(total_selected = stats.total_selected, "Statistics loaded");
                for key in stats.departments.keys() {
                    if Department::from_key(key).is_none() {
                        debug!(department = %key, "Ignoring unknown department count");
                    }
                }
                self.page
                    .set_content(ElementId::StatsContent, views::stats_panel(&stats));
            }
            Err(e) => {
                error!(error = %e, "Error loading stats");
                self.page
                    .set_content(ElementId::StatsContent, views::stats_unavailable());
            }
        }
    }

    // =========================================================================
    // Search
    // =========================================================================

    fn set_search_control(&mut self, control: SearchControl) {
        self.search_control = control;
        self.page
            .set_content(ElementId::SearchButton, views::search_button(control));
        self.page
            .set_disabled(ElementId::SearchButton, control == SearchControl::Searching);
    }

    /// Validate the roll input and enter the searching state.
    ///
    /// Returns `None` (after alerting) when the trimmed input is empty; no
    /// request must be made in that case.
    pub fn begin_search(&mut self) -> Option<SearchTicket> {
        let roll_number = self.page.input_value(ElementId::RollInput).trim().to_string();

        if roll_number.is_empty() {
            self.page.alert(EMPTY_ROLL_ALERT);
            return None;
        }

        self.set_search_control(SearchControl::Searching);
        self.search_generation += 1;
        debug!(roll = %roll_number, generation = self.search_generation, "Search started");

        Some(SearchTicket {
            roll_number,
            generation: self.search_generation,
        })
    }

    /// Apply a search outcome and return the control to idle.
    ///
    /// Overlapping searches are not serialized: whichever response arrives
    /// last owns the results container.
    pub fn finish_search(&mut self, generation: u64, outcome: Result<SearchResult>) {
        match outcome {
            Ok(result) => {
                if generation != self.search_generation {
                    debug!(
                        generation = generation,
                        latest = self.search_generation,
                        "Response from an earlier search applied"
                    );
                }
                info!(roll = %result.roll_number, selected = result.selected, "Search completed");
                self.page.set_content(
                    ElementId::ResultContent,
                    views::result_panel(&result, &self.notices),
                );
                self.page.set_visible(ElementId::ResultsSection, true);
                self.page.scroll_into_view(ElementId::ResultsSection);
            }
            Err(e) => {
                error!(error = %e, generation = generation, "Error searching roll");
                self.page.alert(SEARCH_FAILED_ALERT);
            }
        }

        self.set_search_control(SearchControl::Idle);
    }

    pub async fn search<A: AdmissionApi>(&mut self, api: &A) {
        let Some(ticket) = self.begin_search() else {
            return;
        };
        let outcome = api.search(&ticket.roll_number).await;
        self.finish_search(ticket.generation, outcome);
    }

    // =========================================================================
    // Fee modal
    // =========================================================================

    pub fn show_fee_structure(&mut self) {
        let Some(info) = self.state.admission_info() else {
            self.page.alert(FEE_UNAVAILABLE_ALERT);
            return;
        };

        self.page
            .set_content(ElementId::FeeContent, views::fee_table(info, &self.notices));
        self.page.set_visible(ElementId::FeeModal, true);
    }

    pub fn close_fee_modal(&mut self) {
        self.page.set_visible(ElementId::FeeModal, false);
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Route a page event. Synchronous actions run here; a search is handed
    /// back to the caller as an [`Intent`] because it needs the backend.
    pub fn handle_event(&mut self, event: &UiEvent) -> Option<Intent> {
        match event {
            UiEvent::KeyPress {
                target: ElementId::RollInput,
                key: Key::Enter,
            } if self.page.is_subscribed(Subscription::RollInputKeyPress) => Some(Intent::Search),
            UiEvent::Click {
                target: ElementId::SearchButton,
            } if !self.page.is_disabled(ElementId::SearchButton) => Some(Intent::Search),
            UiEvent::Click {
                target: ElementId::FeeStructureButton,
            } => {
                self.show_fee_structure();
                None
            }
            UiEvent::Click {
                target: ElementId::FeeModalClose,
            } => {
                self.close_fee_modal();
                None
            }
            // Only the backdrop itself; clicks inside the modal content target
            // FeeContent and fall through.
            UiEvent::Click {
                target: ElementId::FeeModal,
            } if self.page.is_subscribed(Subscription::WindowClick) => {
                self.close_fee_modal();
                None
            }
            _ => None,
        }
    }

    /// Handle an event and run any resulting search inline.
    pub async fn dispatch<A: AdmissionApi>(&mut self, api: &A, event: &UiEvent) {
        if let Some(Intent::Search) = self.handle_event(event) {
            self.search(api).await;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
