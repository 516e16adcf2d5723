use crate::config::Notices;
use crate::models::{AdmissionInfo, Department, FeeBreakdown};
use crate::ui::markup::{el, Element, Node};
use crate::utils::format_taka;

/// Placeholder for a department the backend sent no fees for
const MISSING_AMOUNT: &str = "N/A";

fn fee_item(label: &str, amount: u64) -> Element {
    el("div")
        .class("fee-item")
        .child(el("span").text(label))
        .child(el("span").text(format_taka(amount)))
}

/// Six line items for one student, ending in the bold grand total as sent.
pub fn fee_breakdown(fee: &FeeBreakdown) -> Node {
    el("div")
        .class("fee-details")
        .child(el("h4").text("Fee Information"))
        .child(fee_item("Admission Fee:", fee.admission_fee))
        .child(fee_item("Tuition Fee:", fee.tuition_fee))
        .child(fee_item("Board Registration:", fee.july_board_registration))
        .child(fee_item("Other Charges:", fee.hostel_bag_online_charge))
        .child(fee_item("Online Charge (1%):", fee.online_charge_1_percent))
        .child(
            el("div")
                .class("fee-item")
                .child(el("span").child(el("strong").text("Total Amount:")))
                .child(el("span").child(el("strong").text(format_taka(fee.grand_total)))),
        )
        .into()
}

fn amount_cell(amount: Option<u64>) -> Element {
    el("td").text(amount.map(format_taka).unwrap_or_else(|| MISSING_AMOUNT.to_string()))
}

fn fee_row(department: Department, fee: Option<&FeeBreakdown>) -> Element {
    el("tr")
        .attr("data-department", department.key())
        .child(
            el("td")
                .child(el("strong").text(department.display_name()))
                .child(el("br"))
                .child(el("small").text(department.bengali_name())),
        )
        .child(amount_cell(fee.map(|f| f.admission_fee)))
        .child(amount_cell(fee.map(|f| f.tuition_fee)))
        .child(amount_cell(fee.map(|f| f.july_board_registration)))
        .child(amount_cell(fee.map(|f| f.hostel_bag_online_charge)))
        .child(el("td").child(el("strong").text(
            fee.map(|f| format_taka(f.grand_total))
                .unwrap_or_else(|| MISSING_AMOUNT.to_string()),
        )))
}

/// Fee-structure table for the modal: always four rows, in
/// [`Department::FEE_TABLE_ORDER`], followed by the payment note.
pub fn fee_table(info: &AdmissionInfo, notices: &Notices) -> Node {
    let header = el("thead").child(
        el("tr").children(
            [
                "Department",
                "Admission Fee",
                "Tuition Fee",
                "Board Registration",
                "Other Charges",
                "Total Amount",
            ]
            .into_iter()
            .map(|h| el("th").text(h)),
        ),
    );

    let body = el("tbody").children(
        Department::FEE_TABLE_ORDER
            .iter()
            .map(|dept| fee_row(*dept, info.fee_for(*dept))),
    );

    let note = el("div")
        .class("fee-note")
        .child(
            el("p")
                .child(el("strong").text("Note:"))
                .text(format!(
                    " All fees include a 1% online processing charge. Payment must be made through {} as specified in the admission notice.",
                    notices.payment_channel
                )),
        )
        .child(
            el("p")
                .child(el("strong").text("Contact for queries:"))
                .text(format!(" {}", notices.contact_number)),
        );

    Node::Fragment(vec![
        el("table").class("fee-table").child(header).child(body).into(),
        note.into(),
    ])
}
