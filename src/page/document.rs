//! In-memory page state.
//!
//! `Document` keeps the content, visibility and disabled flags of every
//! container, the roll-number input value, the alert history and the active
//! subscriptions. The terminal renderer draws from it; tests assert on it.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::{ElementId, Page, Subscription};
use crate::ui::markup::Node;

/// Longest roll number the input accepts.
pub const MAX_ROLL_INPUT_LENGTH: usize = 32;

#[derive(Debug)]
pub struct Document {
    roll_input: String,
    contents: HashMap<ElementId, Node>,
    hidden: HashSet<ElementId>,
    disabled: HashSet<ElementId>,
    subscriptions: HashSet<Subscription>,
    alerts: Vec<String>,
    alert_open: bool,
    scroll_target: Option<ElementId>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let hidden = ElementId::ALL
            .into_iter()
            .filter(ElementId::hidden_initially)
            .collect();

        Self {
            roll_input: String::new(),
            contents: HashMap::new(),
            hidden,
            disabled: HashSet::new(),
            subscriptions: HashSet::new(),
            alerts: Vec::new(),
            alert_open: false,
            scroll_target: None,
        }
    }

    pub fn set_roll_input(&mut self, value: impl Into<String>) {
        self.roll_input = value.into();
    }

    pub fn roll_input(&self) -> &str {
        &self.roll_input
    }

    /// Type one character into the roll input. Returns false when rejected.
    pub fn type_char(&mut self, c: char) -> bool {
        if !can_add_roll_char(self.roll_input.chars().count(), c) {
            return false;
        }
        self.roll_input.push(c);
        true
    }

    pub fn backspace(&mut self) {
        self.roll_input.pop();
    }

    pub fn content(&self, id: ElementId) -> Option<&Node> {
        self.contents.get(&id)
    }

    /// Serialized content of a container, empty when nothing was rendered.
    pub fn content_html(&self, id: ElementId) -> String {
        self.content(id).map(Node::to_html).unwrap_or_default()
    }

    pub fn is_visible(&self, id: ElementId) -> bool {
        !self.hidden.contains(&id)
    }

    /// Every alert raised so far, oldest first.
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// The alert the user has not acknowledged yet.
    pub fn pending_alert(&self) -> Option<&str> {
        if self.alert_open {
            self.alerts.last().map(String::as_str)
        } else {
            None
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert_open = false;
    }

    pub fn scroll_target(&self) -> Option<ElementId> {
        self.scroll_target
    }

    /// Consume the last scroll request so the host acts on it once.
    pub fn take_scroll_target(&mut self) -> Option<ElementId> {
        self.scroll_target.take()
    }
}

impl Page for Document {
    fn input_value(&self, id: ElementId) -> String {
        match id {
            ElementId::RollInput => self.roll_input.clone(),
            _ => String::new(),
        }
    }

    fn set_content(&mut self, id: ElementId, markup: Node) {
        debug!(id = id.dom_id(), "Content replaced");
        self.contents.insert(id, markup);
    }

    fn set_visible(&mut self, id: ElementId, visible: bool) {
        if visible {
            self.hidden.remove(&id);
        } else {
            self.hidden.insert(id);
        }
    }

    fn set_disabled(&mut self, id: ElementId, disabled: bool) {
        if disabled {
            self.disabled.insert(id);
        } else {
            self.disabled.remove(&id);
        }
    }

    fn is_disabled(&self, id: ElementId) -> bool {
        self.disabled.contains(&id)
    }

    fn scroll_into_view(&mut self, id: ElementId) {
        self.scroll_target = Some(id);
    }

    fn alert(&mut self, message: &str) {
        debug!(message = message, "Alert raised");
        self.alerts.push(message.to_string());
        self.alert_open = true;
    }

    fn subscribe(&mut self, subscription: Subscription) {
        self.subscriptions.insert(subscription);
    }

    fn unsubscribe(&mut self, subscription: Subscription) {
        self.subscriptions.remove(&subscription);
    }

    fn is_subscribed(&self, subscription: Subscription) -> bool {
        self.subscriptions.contains(&subscription)
    }
}

/// Check if a character can be typed into the roll input.
pub fn can_add_roll_char(current_len: usize, c: char) -> bool {
    current_len < MAX_ROLL_INPUT_LENGTH && !c.is_control()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::markup::el;

    #[test]
    fn test_initial_visibility() {
        let doc = Document::new();
        assert!(!doc.is_visible(ElementId::ResultsSection));
        assert!(!doc.is_visible(ElementId::FeeModal));
        assert!(doc.is_visible(ElementId::StatsContent));
        assert!(doc.content(ElementId::StatsContent).is_none());
        assert_eq!(ElementId::ResultsSection.dom_id(), "resultsSection");
    }

    #[test]
    fn test_set_content_replaces_wholesale() {
        let mut doc = Document::new();
        doc.set_content(ElementId::StatsContent, el("p").text("first").into());
        doc.set_content(ElementId::StatsContent, el("p").text("second").into());
        assert_eq!(doc.content_html(ElementId::StatsContent), "<p>second</p>");
    }

    #[test]
    fn test_alert_pending_until_dismissed() {
        let mut doc = Document::new();
        assert!(doc.pending_alert().is_none());
        doc.alert("Please enter a roll number");
        assert_eq!(doc.pending_alert(), Some("Please enter a roll number"));
        doc.dismiss_alert();
        assert!(doc.pending_alert().is_none());
        assert_eq!(doc.alerts().len(), 1);
    }

    #[test]
    fn test_typing_into_roll_input() {
        let mut doc = Document::new();
        for c in "12345".chars() {
            assert!(doc.type_char(c));
        }
        assert!(!doc.type_char('\n'));
        doc.backspace();
        assert_eq!(doc.input_value(ElementId::RollInput), "1234");
        assert_eq!(doc.input_value(ElementId::StatsContent), "");
    }

    #[test]
    fn test_can_add_roll_char() {
        assert!(can_add_roll_char(0, '1'));
        assert!(can_add_roll_char(MAX_ROLL_INPUT_LENGTH - 1, 'a'));
        assert!(!can_add_roll_char(MAX_ROLL_INPUT_LENGTH, '1'));
        assert!(!can_add_roll_char(0, '\t'));
    }

    #[test]
    fn test_subscriptions() {
        let mut doc = Document::new();
        doc.subscribe(Subscription::WindowClick);
        assert!(doc.is_subscribed(Subscription::WindowClick));
        assert!(!doc.is_subscribed(Subscription::RollInputKeyPress));
        doc.unsubscribe(Subscription::WindowClick);
        assert!(!doc.is_subscribed(Subscription::WindowClick));
    }
}
