//! Navbar view
//!
//! Brand, inline links and the search button on wide terminals. Below the
//! compact breakpoint the links move into a dropdown behind a menu button.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

use crate::site::{Route, NAV_LINKS};
use crate::tui::app::App;

use super::place;

const DROPDOWN_WIDTH: u16 = 20;

/// Render the navbar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    if area.height == 0 {
        return;
    }

    let theme = app.theme.clone();
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.border_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let row = inner.y + inner.height.saturating_sub(1) / 2;
    let compact = app.navbar.is_compact(area.width);

    app.hit.brand = Some(place(
        frame,
        inner.x + 1,
        row,
        Span::styled("◆ GyraLabs", theme.accent_style()),
        inner,
    ));

    let search_label = if compact {
        " ⌕ ".to_string()
    } else {
        format!(" ⌕ Search  {} ", app.navbar.chord())
    };
    let search_width = Span::raw(search_label.as_str()).width() as u16;
    let search_x = inner.right().saturating_sub(search_width + 1);
    app.hit.search_button = Some(place(
        frame,
        search_x,
        row,
        Span::styled(
            search_label,
            Style::default()
                .fg(theme.muted)
                .bg(theme.highlight_bg),
        ),
        inner,
    ));

    if compact {
        let icon = if app.navbar.menu_open() { " ✕ " } else { " ☰ " };
        let menu_x = search_x.saturating_sub(4);
        app.hit.menu_button = Some(place(
            frame,
            menu_x,
            row,
            Span::styled(icon, theme.text_style()),
            inner,
        ));
        if app.navbar.menu_open() {
            render_dropdown(frame, app, area);
        }
        return;
    }

    let current = app.router.current().clone();
    let mut x = inner.x + 16;
    for (index, link) in NAV_LINKS.iter().enumerate() {
        let style = if Route::from_path(link.href) == current {
            theme.accent_style().add_modifier(Modifier::UNDERLINED)
        } else {
            theme.muted_style()
        };
        let rect = place(frame, x, row, Span::styled(link.name, style), inner);
        if rect.width > 0 {
            app.hit.nav_links.push((rect, index));
        }
        x = x.saturating_add(rect.width + 3);
    }
}

/// Links dropdown under the menu button
fn render_dropdown(frame: &mut Frame, app: &mut App, navbar: Rect) {
    let full = frame.area();
    let height = (NAV_LINKS.len() as u16 + 2).min(full.bottom().saturating_sub(navbar.bottom()));
    let width = DROPDOWN_WIDTH.min(full.width);
    let area = Rect::new(full.right().saturating_sub(width + 1), navbar.bottom(), width, height);
    if area.height < 3 {
        return;
    }

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.border_style());
    let inner = block.inner(area);

    let items: Vec<ListItem> = NAV_LINKS
        .iter()
        .map(|link| ListItem::new(Span::styled(link.name, app.theme.text_style())))
        .collect();
    frame.render_widget(List::new(items).block(block), area);

    for index in 0..NAV_LINKS.len().min(inner.height as usize) {
        let rect = Rect::new(inner.x, inner.y + index as u16, inner.width, 1);
        app.hit.nav_links.push((rect, index));
    }
}
