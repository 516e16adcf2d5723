use crate::controller::SearchControl;
use crate::ui::markup::{el, Node};

/// Inner markup of the search button for a control state.
pub fn search_button(control: SearchControl) -> Node {
    let (icon, label) = match control {
        SearchControl::Idle => ("fas fa-search", " Search"),
        SearchControl::Searching => ("fas fa-spinner fa-spin", " Searching..."),
    };
    Node::Fragment(vec![el("i").class(icon).into(), label.into()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_button_states() {
        assert_eq!(
            search_button(SearchControl::Idle).to_html(),
            "<i class=\"fas fa-search\"></i> Search"
        );
        assert_eq!(
            search_button(SearchControl::Searching).to_html(),
            "<i class=\"fas fa-spinner fa-spin\"></i> Searching..."
        );
    }
}
