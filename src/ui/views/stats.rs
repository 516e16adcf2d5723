use crate::models::{Department, Stats};
use crate::ui::markup::{el, Element, Node};

fn stat_item(number: u64, label: &str) -> Element {
    el("div")
        .class("stat-item")
        .child(el("div").class("stat-number").text(number.to_string()))
        .child(el("div").class("stat-label").text(label))
}

/// Total plus one counter per department; departments the backend left out
/// show 0.
pub fn stats_panel(stats: &Stats) -> Node {
    let items = std::iter::once(stat_item(stats.total_selected, "Total Selected")).chain(
        Department::STATS_ORDER
            .iter()
            .map(|dept| stat_item(stats.count(*dept), dept.stats_label())),
    );

    el("div").class("stats-grid").children(items).into()
}

pub fn stats_unavailable() -> Node {
    el("p").text("Failed to load statistics").into()
}
