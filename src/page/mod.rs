//! The page surface the controller renders into.
//!
//! `Page` is the contract with whatever hosts the markup: a browser DOM, or
//! the in-memory `Document` used by the terminal front end and the tests.

pub mod document;

use crate::ui::markup::Node;

pub use document::Document;

/// Containers and controls the controller reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    Body,
    RollInput,
    SearchButton,
    FeeStructureButton,
    ResultsSection,
    ResultContent,
    StatsContent,
    FeeModal,
    FeeModalClose,
    FeeContent,
}

impl ElementId {
    pub const ALL: [ElementId; 10] = [
        ElementId::Body,
        ElementId::RollInput,
        ElementId::SearchButton,
        ElementId::FeeStructureButton,
        ElementId::ResultsSection,
        ElementId::ResultContent,
        ElementId::StatsContent,
        ElementId::FeeModal,
        ElementId::FeeModalClose,
        ElementId::FeeContent,
    ];

    /// `id` attribute of the element in the page markup.
    pub fn dom_id(&self) -> &'static str {
        match self {
            ElementId::Body => "body",
            ElementId::RollInput => "rollInput",
            ElementId::SearchButton => "searchBtn",
            ElementId::FeeStructureButton => "feeStructureBtn",
            ElementId::ResultsSection => "resultsSection",
            ElementId::ResultContent => "resultContent",
            ElementId::StatsContent => "statsContent",
            ElementId::FeeModal => "feeModal",
            ElementId::FeeModalClose => "feeModalClose",
            ElementId::FeeContent => "feeContent",
        }
    }

    /// Containers that start out hidden.
    pub fn hidden_initially(&self) -> bool {
        matches!(self, ElementId::ResultsSection | ElementId::FeeModal)
    }
}

/// Listeners registered during initialization and removed at teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subscription {
    /// Key presses on the roll-number input.
    RollInputKeyPress,
    /// Clicks anywhere in the window (used for the modal backdrop).
    WindowClick,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Enter,
    Char(char),
    Other,
}

/// Input delivered by the page host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    KeyPress { target: ElementId, key: Key },
    Click { target: ElementId },
}

pub trait Page {
    /// Current value of an input element; empty for anything else.
    fn input_value(&self, id: ElementId) -> String;

    /// Replace the whole content of a container.
    fn set_content(&mut self, id: ElementId, markup: Node);

    fn set_visible(&mut self, id: ElementId, visible: bool);

    fn set_disabled(&mut self, id: ElementId, disabled: bool);

    fn is_disabled(&self, id: ElementId) -> bool;

    fn scroll_into_view(&mut self, id: ElementId);

    /// Blocking message the user has to acknowledge.
    fn alert(&mut self, message: &str);

    fn subscribe(&mut self, subscription: Subscription);

    fn unsubscribe(&mut self, subscription: Subscription);

    fn is_subscribed(&self, subscription: Subscription) -> bool;
}
