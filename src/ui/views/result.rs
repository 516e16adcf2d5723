use crate::config::Notices;
use crate::models::SearchResult;
use crate::ui::markup::{el, Element, Node};
use crate::utils::format_deadline;

use super::fees::fee_breakdown;

fn roll_line(roll_number: &str) -> Element {
    el("div")
        .class("roll-number")
        .text(format!("Roll Number: {}", roll_number))
}

fn selected_panel(result: &SearchResult, notices: &Notices) -> Node {
    let mut panel = el("div")
        .class("result-success")
        .child(el("div").class("success-icon").child(el("i").class("fas fa-check-circle")))
        .child(el("h3").text("Congratulations! 🎉"))
        .child(roll_line(&result.roll_number))
        .child(
            el("div")
                .class("department")
                .child(el("strong").text(result.department.clone().unwrap_or_default()))
                .child(el("br"))
                .child(
                    el("span")
                        .style("color: #667eea;")
                        .text(result.department_bengali.clone().unwrap_or_default()),
                ),
        )
        .child(
            el("p")
                .style("color: #48bb78; font-weight: 600; margin-bottom: 20px;")
                .text(format!(
                    "You have been selected for admission to {}!",
                    notices.college_name
                )),
        )
        .child(
            el("p")
                .style("color: #4a5568; margin-bottom: 20px;")
                .text(format!(
                    "Please complete your admission process by {} through the college website.",
                    format_deadline(&notices.admission_deadline)
                )),
        );

    if let Some(ref fee) = result.fee_info {
        panel = panel.child(fee_breakdown(fee));
    }

    panel.into()
}

fn not_selected_panel(result: &SearchResult, notices: &Notices) -> Node {
    el("div")
        .class("result-failure")
        .child(el("div").class("failure-icon").child(el("i").class("fas fa-times-circle")))
        .child(el("h3").text("Not Selected"))
        .child(roll_line(&result.roll_number))
        .child(el("p").text(format!(
            "Unfortunately, this roll number was not selected for admission to {} for the {} academic session.",
            notices.college_name, notices.academic_session
        )))
        .child(
            el("p")
                .style("margin-top: 15px; color: #667eea;")
                .text("We encourage you to explore other educational opportunities. Best of luck with your future endeavors!"),
        )
        .into()
}

/// Result panel for one search. Only `selected` decides the variant; fee data
/// is never shown for a non-selected result.
pub fn result_panel(result: &SearchResult, notices: &Notices) -> Node {
    if result.selected {
        selected_panel(result, notices)
    } else {
        not_selected_panel(result, notices)
    }
}
