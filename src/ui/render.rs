use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::models::Department;
use crate::page::{ElementId, Page};

use super::markup::Node;
use super::styles;
use crate::utils::truncate_string;

/// Height of the statistics panel: the total and one line per department,
/// plus borders.
const STATS_HEIGHT: u16 = Department::STATS_ORDER.len() as u16 + 3;

/// Width of the search button.
const SEARCH_BUTTON_WIDTH: u16 = 18;

/// Width of the fee structure button.
const FEE_BUTTON_WIDTH: u16 = 22;

const FEE_BUTTON_LABEL: &str = "[F2] Fee Structure";
const CLOSE_LABEL: &str = "[×]";

/// Screen regions of the page, shared by the renderer and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub title: Rect,
    pub roll_input: Rect,
    pub search_button: Rect,
    pub fee_button: Rect,
    pub stats: Rect,
    pub results: Rect,
    pub status: Rect,
}

pub fn page_layout(area: Rect) -> PageLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title bar
            Constraint::Length(3),            // Search row
            Constraint::Length(STATS_HEIGHT), // Statistics
            Constraint::Min(5),               // Results
            Constraint::Length(1),            // Status bar
        ])
        .split(area);

    let search_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(SEARCH_BUTTON_WIDTH),
            Constraint::Length(FEE_BUTTON_WIDTH),
        ])
        .split(rows[1]);

    PageLayout {
        title: rows[0],
        roll_input: search_row[0],
        search_button: search_row[1],
        fee_button: search_row[2],
        stats: rows[2],
        results: rows[3],
        status: rows[4],
    }
}

/// Area of the fee modal content box.
pub fn modal_area(area: Rect) -> Rect {
    centered_rect_fixed(area.width.saturating_sub(8).min(72), area.height.saturating_sub(4).min(24), area)
}

/// The close control in the top-right corner of the modal border.
pub fn modal_close_area(modal: Rect) -> Rect {
    let width = CLOSE_LABEL.chars().count() as u16;
    Rect::new(
        (modal.x + modal.width).saturating_sub(width + 2),
        modal.y,
        width.min(modal.width),
        1.min(modal.height),
    )
}

/// Create a centered rectangle with fixed dimensions
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

pub fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

pub fn render(frame: &mut Frame, app: &App) {
    let layout = page_layout(frame.area());
    let doc = app.document();

    render_title_bar(frame, app, layout.title);
    render_search_row(frame, app, &layout);
    render_panel(
        frame,
        " Statistics ",
        doc.content(ElementId::StatsContent),
        "Loading statistics...",
        0,
        layout.stats,
    );

    if doc.is_visible(ElementId::ResultsSection) {
        render_panel(
            frame,
            " Result ",
            doc.content(ElementId::ResultContent),
            "",
            app.results_scroll,
            layout.results,
        );
    } else {
        let hint = Paragraph::new(Line::from(Span::styled(
            "  Type a roll number and press Enter to see the admission result.",
            styles::muted_style(),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styles::border_style(false)),
        );
        frame.render_widget(hint, layout.results);
    }

    render_status_bar(frame, app, layout.status);

    // Render overlays
    if doc.is_visible(ElementId::FeeModal) {
        render_fee_modal(frame, app);
    }

    if let Some(message) = doc.pending_alert() {
        render_alert_overlay(frame, message);
    }
}

/// Convert markup into styled terminal lines.
fn markup_lines(node: &Node) -> Vec<Line<'static>> {
    node.text_lines()
        .into_iter()
        .map(|segments| {
            Line::from(
                segments
                    .into_iter()
                    .map(|s| Span::styled(s.text, styles::tone_style(s.tone)))
                    .collect::<Vec<_>>(),
            )
        })
        .collect()
}

fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let notices = &app.config.notices;
    let title = format!(
        "  {} Admission {}",
        notices.college_name, notices.academic_session
    );
    let hint = "[Esc] Quit";
    let title = truncate_string(
        &title,
        (area.width as usize).saturating_sub(hint.len() + 4),
    );

    let title_line = Line::from(vec![
        Span::styled(title.clone(), styles::title_style()),
        Span::raw(" ".repeat(
            (area.width as usize).saturating_sub(title.chars().count() + hint.len() + 2),
        )),
        Span::styled(hint, styles::muted_style()),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    frame.render_widget(Paragraph::new(title_line).block(block), area);
}

fn render_search_row(frame: &mut Frame, app: &App, layout: &PageLayout) {
    let doc = app.document();
    let modal_open = doc.is_visible(ElementId::FeeModal) || doc.pending_alert().is_some();

    let input = Paragraph::new(Line::from(vec![
        Span::styled(doc.roll_input().to_string(), styles::input_style()),
        Span::styled(if modal_open { "" } else { "▌" }, styles::input_style()),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles::border_style(!modal_open))
            .title(" Roll Number "),
    );
    frame.render_widget(input, layout.roll_input);

    let disabled = doc.is_disabled(ElementId::SearchButton);
    let label = doc
        .content(ElementId::SearchButton)
        .and_then(|node| node.text_lines().into_iter().next())
        .map(|segments| segments.into_iter().map(|s| s.text).collect::<String>())
        .unwrap_or_else(|| " Search".to_string());
    let button = Paragraph::new(Line::from(Span::styled(
        label.trim().to_string(),
        styles::button_style(disabled),
    )))
    .centered()
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles::border_style(!disabled)),
    );
    frame.render_widget(button, layout.search_button);

    let fees = Paragraph::new(Line::from(Span::styled(
        FEE_BUTTON_LABEL,
        styles::button_style(false),
    )))
    .centered()
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles::border_style(false)),
    );
    frame.render_widget(fees, layout.fee_button);
}

fn render_panel(
    frame: &mut Frame,
    title: &str,
    content: Option<&Node>,
    placeholder: &str,
    scroll: u16,
    area: Rect,
) {
    let lines = match content {
        Some(node) => markup_lines(node),
        None => vec![Line::from(Span::styled(
            placeholder.to_string(),
            styles::muted_style(),
        ))],
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(false))
        .title(Span::styled(title.to_string(), styles::title_style()));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let left_text = if app.in_flight > 0 {
        " Loading... ".to_string()
    } else {
        format!(" {} ", app.config.api_base_url)
    };

    let right_spans = vec![
        Span::styled("[Enter]", styles::help_key_style()),
        Span::styled(" search  ", styles::muted_style()),
        Span::styled("[F2]", styles::help_key_style()),
        Span::styled(" fees  ", styles::muted_style()),
        Span::styled("[PgUp/PgDn]", styles::help_key_style()),
        Span::styled(" scroll ", styles::muted_style()),
    ];
    let right_len: usize = right_spans.iter().map(|s| s.content.chars().count()).sum();

    let width = area.width as usize;
    let padding_len = width
        .saturating_sub(left_text.chars().count())
        .saturating_sub(right_len);

    let mut spans = vec![
        Span::styled(left_text, styles::muted_style()),
        Span::raw(" ".repeat(padding_len)),
    ];
    spans.extend(right_spans);

    let paragraph = Paragraph::new(Line::from(spans)).style(styles::status_bar_style());
    frame.render_widget(paragraph, area);
}

fn render_fee_modal(frame: &mut Frame, app: &App) {
    let area = modal_area(frame.area());

    // Clear the area
    frame.render_widget(Clear, area);

    let lines = app
        .document()
        .content(ElementId::FeeContent)
        .map(markup_lines)
        .unwrap_or_default();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .title(Span::styled(" Fee Structure ", styles::title_style()))
        .style(Style::default());

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);

    let close = Paragraph::new(Span::styled(CLOSE_LABEL, styles::error_style()));
    frame.render_widget(close, modal_close_area(area));
}

fn render_alert_overlay(frame: &mut Frame, message: &str) {
    let width = (message.chars().count() as u16 + 6).clamp(30, 60);
    let area = centered_rect_fixed(width, 7, frame.area());

    // Clear the area
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(message.to_string(), styles::highlight_style())),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", styles::muted_style()),
            Span::styled("Enter", styles::help_key_style()),
            Span::styled(" to continue", styles::muted_style()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .title(" Notice ")
        .style(Style::default());

    let paragraph = Paragraph::new(lines)
        .centered()
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
