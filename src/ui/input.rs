//! Keyboard and mouse input handling for the TUI.
//!
//! Terminal events are translated into page events (`UiEvent`) and handed to
//! the app, so the terminal front end exercises the same handlers a browser
//! host would.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::app::App;
use crate::page::{ElementId, Key, UiEvent};

use super::render::{modal_area, modal_close_area, page_layout, rect_contains};

/// Lines moved by PageUp/PageDown in the results panel.
const PAGE_SCROLL_SIZE: i32 = 10;

/// Handle a terminal event. Returns true if the app should quit.
pub fn handle_input(app: &mut App, event: Event) -> bool {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Mouse(mouse) => {
            handle_mouse(app, mouse);
            false
        }
        _ => false,
    }
}

fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    // An open alert blocks everything until acknowledged
    if app.document().pending_alert().is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.document_mut().dismiss_alert();
        }
        return false;
    }

    // Fee modal
    if app.document().is_visible(ElementId::FeeModal) {
        if matches!(key.code, KeyCode::Esc | KeyCode::F(2)) {
            app.submit(UiEvent::Click {
                target: ElementId::FeeModalClose,
            });
        }
        return false;
    }

    match key.code {
        KeyCode::Esc => return true,
        KeyCode::Enter => app.submit(UiEvent::KeyPress {
            target: ElementId::RollInput,
            key: Key::Enter,
        }),
        KeyCode::F(2) => app.submit(UiEvent::Click {
            target: ElementId::FeeStructureButton,
        }),
        KeyCode::Backspace => app.document_mut().backspace(),
        KeyCode::Char(c) => {
            if app.document_mut().type_char(c) {
                app.submit(UiEvent::KeyPress {
                    target: ElementId::RollInput,
                    key: Key::Char(c),
                });
            }
        }
        KeyCode::Up => app.scroll_results(-1),
        KeyCode::Down => app.scroll_results(1),
        KeyCode::PageUp => app.scroll_results(-PAGE_SCROLL_SIZE),
        KeyCode::PageDown => app.scroll_results(PAGE_SCROLL_SIZE),
        KeyCode::Home => app.results_scroll = 0,
        _ => {}
    }

    false
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if app.document().pending_alert().is_some() {
                return;
            }
            if let Some(target) = click_target(app, mouse.column, mouse.row) {
                app.submit(UiEvent::Click { target });
            }
        }
        MouseEventKind::ScrollUp => app.scroll_results(-1),
        MouseEventKind::ScrollDown => app.scroll_results(1),
        _ => {}
    }
}

/// The element under a screen position, given what is currently shown.
fn click_target(app: &App, column: u16, row: u16) -> Option<ElementId> {
    if app.document().is_visible(ElementId::FeeModal) {
        let modal = modal_area(app.viewport);
        let target = if rect_contains(modal_close_area(modal), column, row) {
            ElementId::FeeModalClose
        } else if rect_contains(modal, column, row) {
            ElementId::FeeContent
        } else {
            ElementId::FeeModal
        };
        return Some(target);
    }

    let layout = page_layout(app.viewport);
    if rect_contains(layout.search_button, column, row) {
        Some(ElementId::SearchButton)
    } else if rect_contains(layout.fee_button, column, row) {
        Some(ElementId::FeeStructureButton)
    } else if rect_contains(layout.roll_input, column, row) {
        None
    } else if rect_contains(layout.results, column, row) {
        Some(ElementId::ResultContent)
    } else if rect_contains(layout.stats, column, row) {
        Some(ElementId::StatsContent)
    } else {
        Some(ElementId::Body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::controller::{EMPTY_ROLL_ALERT, FEE_UNAVAILABLE_ALERT};
    use crate::page::Page;
    use crossterm::event::KeyEventKind;
    use ratatui::layout::Rect;

    fn test_app() -> App {
        let mut app = App::new(Config::default()).expect("app builds");
        app.viewport = Rect::new(0, 0, 100, 40);
        app.controller.subscribe_handlers();
        app
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[tokio::test]
    async fn test_typing_and_empty_enter() {
        let mut app = test_app();
        for c in "12".chars() {
            assert!(!handle_input(&mut app, key(KeyCode::Char(c))));
        }
        assert_eq!(app.document().roll_input(), "12");

        handle_input(&mut app, key(KeyCode::Backspace));
        handle_input(&mut app, key(KeyCode::Backspace));
        handle_input(&mut app, key(KeyCode::Char(' ')));
        handle_input(&mut app, key(KeyCode::Enter));

        assert_eq!(app.document().pending_alert(), Some(EMPTY_ROLL_ALERT));
        assert_eq!(app.in_flight, 0);
    }

    #[tokio::test]
    async fn test_alert_blocks_until_dismissed() {
        let mut app = test_app();
        app.document_mut().alert(EMPTY_ROLL_ALERT);

        handle_input(&mut app, key(KeyCode::Char('5')));
        assert_eq!(app.document().roll_input(), "");
        assert!(!handle_input(&mut app, key(KeyCode::Esc)));
        assert!(app.document().pending_alert().is_none());
    }

    #[tokio::test]
    async fn test_f2_without_info_alerts() {
        let mut app = test_app();
        handle_input(&mut app, key(KeyCode::F(2)));
        assert_eq!(app.document().pending_alert(), Some(FEE_UNAVAILABLE_ALERT));
        assert!(!app.document().is_visible(ElementId::FeeModal));
    }

    #[tokio::test]
    async fn test_esc_closes_modal_before_quitting() {
        let mut app = test_app();
        app.document_mut().set_visible(ElementId::FeeModal, true);

        assert!(!handle_input(&mut app, key(KeyCode::Esc)));
        assert!(!app.document().is_visible(ElementId::FeeModal));
        assert!(handle_input(&mut app, key(KeyCode::Esc)));
    }

    #[tokio::test]
    async fn test_ctrl_c_quits() {
        let mut app = test_app();
        let event = Event::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        });
        assert!(handle_input(&mut app, event));
    }

    #[tokio::test]
    async fn test_modal_clicks() {
        let mut app = test_app();
        app.document_mut().set_visible(ElementId::FeeModal, true);
        let modal = modal_area(app.viewport);

        // Inside the content: stays open
        handle_input(&mut app, click(modal.x + 2, modal.y + 2));
        assert!(app.document().is_visible(ElementId::FeeModal));

        // Backdrop: closes
        handle_input(&mut app, click(0, 0));
        assert!(!app.document().is_visible(ElementId::FeeModal));

        // Close control
        app.document_mut().set_visible(ElementId::FeeModal, true);
        let close = modal_close_area(modal);
        handle_input(&mut app, click(close.x, close.y));
        assert!(!app.document().is_visible(ElementId::FeeModal));
    }

    #[tokio::test]
    async fn test_click_targets_on_page() {
        let app = test_app();
        let layout = page_layout(app.viewport);
        assert_eq!(
            click_target(&app, layout.search_button.x + 1, layout.search_button.y + 1),
            Some(ElementId::SearchButton)
        );
        assert_eq!(
            click_target(&app, layout.fee_button.x + 1, layout.fee_button.y + 1),
            Some(ElementId::FeeStructureButton)
        );
        assert_eq!(
            click_target(&app, layout.roll_input.x + 1, layout.roll_input.y + 1),
            None
        );
        assert_eq!(click_target(&app, 1, 1), Some(ElementId::Body));
    }

    #[tokio::test]
    async fn test_click_search_with_empty_input_alerts() {
        let mut app = test_app();
        let layout = page_layout(app.viewport);
        handle_input(&mut app, click(layout.search_button.x + 1, layout.search_button.y + 1));
        assert_eq!(app.document().pending_alert(), Some(EMPTY_ROLL_ALERT));
    }
}
