//! Event handler for the TUI
//!
//! Every key press goes through the global chord table first, so the
//! palette chord works regardless of focus and never reaches a text field.
//! After that, keys go to the open palette, the open dialog, the focused
//! newsletter field, or the page, in that order.

use anyhow::Result;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::palette::{CloseReason, OpenTrigger};
use crate::site::Route;

use super::app::{ActiveDialog, App, Focus};
use super::event::Event;
use super::layout::contains;

/// Rows moved per mouse wheel notch
const WHEEL_STEP: i32 = 3;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::Tick => app.on_tick(),
        Event::Resize(width, _) => {
            if !app.navbar.is_compact(width) {
                app.navbar.close_menu();
            }
        }
        Event::Subscription(ok) => app.on_subscription_result(ok),
    }
    Ok(())
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Repeat and release events would toggle the palette more than once
    if key.kind != KeyEventKind::Press {
        return;
    }

    if let Some(action) = app.global_keys.intercept(&key) {
        app.run_global_action(action);
        return;
    }

    if app.palette.is_open() {
        handle_palette_key(app, key);
        return;
    }

    if app.has_dialog() {
        app.close_dialog();
        return;
    }

    match app.focus {
        Focus::Newsletter => handle_newsletter_key(app, key),
        Focus::Page => handle_normal_key(app, key),
    }
}

fn is_plain_char(key: &KeyEvent) -> bool {
    !key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
}

/// Handle keys while the command palette is open
fn handle_palette_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_palette(CloseReason::Dismissed),
        KeyCode::Enter => app.commit_palette(),
        KeyCode::Up => app.palette.select_prev(),
        KeyCode::Down => app.palette.select_next(),
        KeyCode::Backspace => app.palette.pop_char(),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.palette.clear_query()
        }
        KeyCode::Char(c) if is_plain_char(&key) => app.palette.push_char(c),
        _ => {}
    }
}

/// Handle keys while the newsletter email field has focus
fn handle_newsletter_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Tab => app.focus = Focus::Page,
        KeyCode::Enter => app.submit_newsletter(),
        KeyCode::Backspace => app.newsletter.pop_char(),
        KeyCode::Char(c) if is_plain_char(&key) => app.newsletter.push_char(c),
        _ => {}
    }
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => {
            app.quit();
            return;
        }
        KeyCode::Char('?') => {
            app.open_dialog(ActiveDialog::Help);
            return;
        }
        KeyCode::Char('/') => {
            app.open_palette(OpenTrigger::Button);
            return;
        }
        KeyCode::Char('b') | KeyCode::Backspace => {
            app.go_back();
            return;
        }
        KeyCode::Char('t') => {
            app.toggle_theme();
            return;
        }
        KeyCode::Char('m') => {
            if app.navbar.is_compact(app.viewport_width) {
                app.navbar.toggle_menu();
            }
            return;
        }
        KeyCode::Char('n') => {
            app.focus_newsletter();
            return;
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            app.choose_nav_link(index);
            return;
        }
        KeyCode::Esc => {
            app.navbar.close_menu();
            return;
        }
        _ => {}
    }

    if matches!(app.router.current(), Route::Dashboard | Route::UserProfile) {
        handle_dashboard_key(app, key);
    } else {
        handle_page_key(app, key);
    }
}

fn handle_dashboard_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => app.dashboard.prev_tab(),
        KeyCode::Right | KeyCode::Char('l') => app.dashboard.next_tab(),
        KeyCode::Char('L') => app.sign_out(),
        _ => {}
    }
}

fn handle_page_key(app: &mut App, key: KeyEvent) {
    let page = app.viewport_height.max(1) as i32;
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_by(1),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_by(-1),
        KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_by(page),
        KeyCode::PageUp => app.scroll_by(-page),
        KeyCode::Home | KeyCode::Char('g') => app.scroll_to(0),
        KeyCode::End | KeyCode::Char('G') => app.scroll_to(u16::MAX),
        _ => {}
    }
}

fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    let (column, row) = (mouse.column, mouse.row);

    if app.palette.is_open() {
        handle_palette_mouse(app, mouse.kind, column, row);
        return;
    }

    if app.has_dialog() {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
            app.close_dialog();
        }
        return;
    }

    match mouse.kind {
        MouseEventKind::ScrollDown => app.scroll_by(WHEEL_STEP),
        MouseEventKind::ScrollUp => app.scroll_by(-WHEEL_STEP),
        MouseEventKind::Down(MouseButton::Left) => handle_click(app, column, row),
        _ => {}
    }
}

/// Result index under the pointer
fn palette_row_at(app: &App, column: u16, row: u16) -> Option<usize> {
    let rows = app.hit.palette_rows?;
    if !contains(rows, column, row) {
        return None;
    }
    Some(app.hit.palette_offset + (row - rows.y) as usize)
}

fn handle_palette_mouse(app: &mut App, kind: MouseEventKind, column: u16, row: u16) {
    let inside = app
        .hit
        .palette
        .is_some_and(|area| contains(area, column, row));

    match kind {
        MouseEventKind::Moved => {
            if inside {
                app.pointer_inside_palette = true;
                if let Some(index) = palette_row_at(app, column, row) {
                    app.palette.hover(index);
                }
            } else if app.pointer_inside_palette {
                app.pointer_inside_palette = false;
                app.palette.clear_highlight();
            }
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if !inside {
                app.close_palette(CloseReason::OutsideClick);
            } else if let Some(index) = palette_row_at(app, column, row) {
                app.commit_palette_row(index);
            }
        }
        MouseEventKind::ScrollDown if inside => app.palette.select_next(),
        MouseEventKind::ScrollUp if inside => app.palette.select_prev(),
        _ => {}
    }
}

fn handle_click(app: &mut App, column: u16, row: u16) {
    let hit_at = |area: Option<ratatui::layout::Rect>| area.is_some_and(|r| contains(r, column, row));

    let nav_link = app
        .hit
        .nav_links
        .iter()
        .find(|(area, _)| contains(*area, column, row))
        .map(|(_, index)| *index);
    if let Some(index) = nav_link {
        app.choose_nav_link(index);
        return;
    }

    let footer_link = app
        .hit
        .footer_links
        .iter()
        .find(|(area, _)| contains(*area, column, row))
        .map(|(_, href)| *href);
    if let Some(href) = footer_link {
        app.navigate(href);
        return;
    }

    let tab = app
        .hit
        .dashboard_tabs
        .iter()
        .find(|(area, _)| contains(*area, column, row))
        .map(|(_, tab)| *tab);
    if let Some(tab) = tab {
        app.dashboard.select(tab);
        return;
    }

    if hit_at(app.hit.search_button) {
        app.open_palette(OpenTrigger::Button);
    } else if hit_at(app.hit.menu_button) {
        app.navbar.toggle_menu();
    } else if hit_at(app.hit.brand) {
        app.navigate("/");
    } else if hit_at(app.hit.newsletter_input) {
        app.focus_newsletter();
    } else if hit_at(app.hit.subscribe_button) {
        app.submit_newsletter();
    } else if hit_at(app.hit.logout_button) {
        app.sign_out();
    } else {
        app.focus = Focus::Page;
        app.navbar.close_menu();
    }
}
