//! TUI Views module
//!
//! Navbar, content pages, dashboard, footer and status bar. Overlays (the
//! navbar dropdown, dialogs, the command palette, toasts) draw last.

pub mod dashboard;
pub mod footer;
pub mod navbar;
pub mod page;
pub mod status_bar;

use ratatui::{
    layout::Rect,
    style::Style,
    text::Span,
    widgets::Block,
    Frame,
};

use crate::site::Route;

use super::app::{ActiveDialog, App, HitAreas};
use super::dialogs;
use super::layout::AppLayout;
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    app.hit = HitAreas::default();

    let area = frame.area();
    app.viewport_width = area.width;
    frame.render_widget(
        Block::default().style(Style::default().bg(app.theme.surface).fg(app.theme.text)),
        area,
    );

    let layout = AppLayout::new(area, app.navbar.is_hidden());

    match app.router.current() {
        Route::Dashboard | Route::UserProfile => dashboard::render(frame, app, layout.content),
        _ => page::render(frame, app, layout.content),
    }
    footer::render(frame, app, layout.footer);
    status_bar::render(frame, app, layout.status_bar);
    navbar::render(frame, app, layout.navbar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
    if app.palette.is_open() {
        dialogs::command_palette::render(frame, app);
    }
    render_notification(frame, app, layout.content);
}

fn render_dialog(frame: &mut Frame, app: &mut App) {
    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::None => {}
    }
}

/// Current toast in the top-right corner of the content area
fn render_notification(frame: &mut Frame, app: &App, content: Rect) {
    let Some(notification) = app.notifications.current() else {
        return;
    };
    let width = 40.min(content.width);
    let height = 3.min(content.height);
    let area = Rect::new(content.right().saturating_sub(width), content.y, width, height);
    frame.render_widget(NotificationWidget::new(notification, &app.theme), area);
}

/// Draw a span at a position and return the cells it covers
pub(crate) fn place(frame: &mut Frame, x: u16, y: u16, span: Span<'_>, bounds: Rect) -> Rect {
    let width = (span.width() as u16).min(bounds.right().saturating_sub(x));
    let area = Rect::new(x, y, width, 1);
    if width > 0 && y < bounds.bottom() {
        frame.render_widget(span, area);
    }
    area
}
