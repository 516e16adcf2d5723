//! Terminal host for the admission lookup page.
//!
//! `App` owns the page controller and drives it from the UI loop. Network
//! calls run on spawned Tokio tasks and report back through an MPSC channel;
//! only the UI loop touches the controller.

use anyhow::Result;
use ratatui::layout::Rect;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::api::ApiClient;
use crate::config::Config;
use crate::controller::{Intent, PageController};
use crate::models::{AdmissionInfo, SearchResult, Stats};
use crate::page::{Document, ElementId, UiEvent};

// ============================================================================
// Constants
// ============================================================================

/// Buffer size for the background task message channel.
/// Two startup fetches plus a handful of overlapping searches.
const CHANNEL_BUFFER_SIZE: usize = 16;

// ============================================================================
// Background Task Results
// ============================================================================

/// Outcomes sent from background fetch tasks back to the UI loop.
enum FetchResult {
    AdmissionInfo(Result<AdmissionInfo>),
    Stats(Result<Stats>),
    Search {
        generation: u64,
        outcome: Result<SearchResult>,
    },
}

// ============================================================================
// Main Application Struct
// ============================================================================

pub struct App {
    pub config: Config,
    pub api: ApiClient,
    pub controller: PageController<Document>,

    /// Terminal area of the last drawn frame, for mouse hit-testing
    pub viewport: Rect,

    pub quitting: bool,

    /// Vertical scroll offset of the results panel
    pub results_scroll: u16,

    /// Requests sent but not yet answered
    pub in_flight: usize,

    results_rx: mpsc::Receiver<FetchResult>,
    results_tx: mpsc::Sender<FetchResult>,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let api = ApiClient::new(&config)?;
        let controller = PageController::new(Document::new(), config.notices.clone());
        let (tx, rx) = mpsc::channel(CHANNEL_BUFFER_SIZE);

        Ok(Self {
            config,
            api,
            controller,
            viewport: Rect::default(),
            quitting: false,
            results_scroll: 0,
            in_flight: 0,
            results_rx: rx,
            results_tx: tx,
        })
    }

    pub fn document(&self) -> &Document {
        self.controller.page()
    }

    pub fn document_mut(&mut self) -> &mut Document {
        self.controller.page_mut()
    }

    /// Page-ready routine: subscribe handlers and start both startup fetches.
    pub fn start(&mut self) {
        info!(api = %self.config.api_base_url, "Initializing page");
        self.controller.subscribe_handlers();

        let api = self.api.clone();
        let tx = self.results_tx.clone();
        self.in_flight += 1;
        tokio::spawn(async move {
            let outcome = api.fetch_admission_info().await;
            Self::send_result(&tx, FetchResult::AdmissionInfo(outcome)).await;
        });

        let api = self.api.clone();
        let tx = self.results_tx.clone();
        self.in_flight += 1;
        tokio::spawn(async move {
            let outcome = api.fetch_stats().await;
            Self::send_result(&tx, FetchResult::Stats(outcome)).await;
        });
    }

    /// Unsubscribe page handlers before exit.
    pub fn shutdown(&mut self) {
        self.controller.teardown();
        info!("Page torn down");
    }

    /// Deliver a page event to the controller and start any search it asks for.
    pub fn submit(&mut self, event: UiEvent) {
        if let Some(Intent::Search) = self.controller.handle_event(&event) {
            self.spawn_search();
        }
    }

    fn spawn_search(&mut self) {
        let Some(ticket) = self.controller.begin_search() else {
            return;
        };

        let api = self.api.clone();
        let tx = self.results_tx.clone();
        self.in_flight += 1;
        tokio::spawn(async move {
            let outcome = api.search_roll(&ticket.roll_number).await;
            Self::send_result(
                &tx,
                FetchResult::Search {
                    generation: ticket.generation,
                    outcome,
                },
            )
            .await;
        });
    }

    /// Helper to send fetch results, logging any channel errors
    async fn send_result(tx: &mpsc::Sender<FetchResult>, result: FetchResult) {
        if tx.send(result).await.is_err() {
            error!("Failed to send fetch result - channel closed");
        }
    }

    /// Check for completed background tasks and process results
    pub fn check_background_tasks(&mut self) {
        while let Ok(result) = self.results_rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            self.process_fetch_result(result);
        }

        if self.document_mut().take_scroll_target() == Some(ElementId::ResultsSection) {
            self.results_scroll = 0;
        }
    }

    pub fn scroll_results(&mut self, delta: i32) {
        let next = i32::from(self.results_scroll) + delta;
        self.results_scroll = next.clamp(0, i32::from(u16::MAX)) as u16;
    }

    fn process_fetch_result(&mut self, result: FetchResult) {
        match result {
            FetchResult::AdmissionInfo(outcome) => {
                debug!(ok = outcome.is_ok(), "Admission info fetch finished");
                self.controller.apply_admission_info(outcome);
            }
            FetchResult::Stats(outcome) => {
                debug!(ok = outcome.is_ok(), "Stats fetch finished");
                self.controller.apply_stats(outcome);
            }
            FetchResult::Search {
                generation,
                outcome,
            } => {
                self.controller.finish_search(generation, outcome);
            }
        }
    }
}
