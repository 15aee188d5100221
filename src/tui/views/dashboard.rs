//! Dashboard view
//!
//! Sidebar of tabs with a logout button, and the profile card for the
//! signed-in user. Tabs other than the profile are placeholders.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::site::identity::{DEFAULT_COUNTRY, DEFAULT_LOCATION};
use crate::site::{CurrentUser, DashboardTab};
use crate::tui::app::App;
use crate::tui::layout::DashboardLayout;
use crate::tui::theme::Theme;

/// Render the dashboard
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = DashboardLayout::new(area);
    render_sidebar(frame, app, layout.sidebar);

    let theme = app.theme.clone();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(Span::styled(" Account Settings ", theme.accent_style()))
        .padding(Padding::horizontal(1));
    let inner = block.inner(layout.main);
    frame.render_widget(block, layout.main);

    if app.dashboard.is_under_construction() {
        frame.render_widget(
            Paragraph::new(Line::styled(
                "This section is under construction.",
                theme.muted_style(),
            )),
            inner,
        );
        return;
    }

    match app.identity.current_user() {
        Some(user) => render_profile(frame, user, &theme, inner),
        None => frame.render_widget(
            Paragraph::new(Line::styled("Sign in to view your profile.", theme.muted_style())),
            inner,
        ),
    }
}

fn render_sidebar(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = app.theme.clone();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (name, role) = match app.identity.current_user() {
        Some(user) => (user.display_name(), user.role_label().to_string()),
        None => (crate::site::identity::DEFAULT_NAME.to_string(), String::new()),
    };
    let header = vec![
        Line::styled(name, theme.text_style().add_modifier(Modifier::BOLD)),
        Line::styled(role, theme.muted_style()),
        Line::default(),
        Line::styled("MENU", theme.muted_style()),
    ];
    let header_height = header.len() as u16;
    frame.render_widget(Paragraph::new(header), inner);

    let active = app.dashboard.active_tab();
    for (i, tab) in DashboardTab::ALL.iter().enumerate() {
        let y = inner.y + header_height + i as u16;
        if y >= inner.bottom() {
            break;
        }
        let rect = Rect::new(inner.x, y, inner.width, 1);
        let style = if *tab == active {
            theme.highlight_style()
        } else {
            theme.text_style()
        };
        let mut spans = vec![Span::styled(format!(" {}", tab.label()), style)];
        if let Some(badge) = tab.badge() {
            spans.push(Span::styled(format!(" {} ", badge), theme.accent_style()));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)).style(style), rect);
        app.hit.dashboard_tabs.push((rect, *tab));
    }

    if inner.height > header_height + DashboardTab::ALL.len() as u16 + 1 {
        let rect = Rect::new(inner.x, inner.bottom() - 1, inner.width, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(" ⏻ Logout", Style::default().fg(theme.error))),
            rect,
        );
        app.hit.logout_button = Some(rect);
    }
}

fn field(label: &'static str, value: String, theme: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::styled(label, theme.muted_style()),
        Line::styled(value, theme.text_style()),
    ]
}

fn render_profile(frame: &mut Frame, user: &CurrentUser, theme: &Theme, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(8),
            Constraint::Min(0),
        ])
        .split(area);

    let header = vec![
        Line::styled("My Profile", theme.accent_style()),
        Line::default(),
        Line::from(vec![
            Span::styled(
                format!(" {} ", user.initials()),
                Style::default()
                    .fg(theme.highlight_fg)
                    .bg(theme.highlight_bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(user.display_name(), theme.text_style().add_modifier(Modifier::BOLD)),
        ]),
        Line::styled(
            format!("     {}  ·  {}", user.role_label(), DEFAULT_LOCATION),
            theme.muted_style(),
        ),
    ];
    frame.render_widget(Paragraph::new(header), chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    let or_dash = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());
    let mut left = vec![Line::styled("Personal information", theme.accent_style())];
    left.extend(field("First Name", or_dash(&user.first_name), theme));
    left.extend(field("Last Name", or_dash(&user.last_name), theme));
    left.extend(field("Role", user.role_label().to_string(), theme));

    let mut right = vec![Line::default()];
    right.extend(field("Email Address", user.email_label().to_string(), theme));
    right.extend(field("Phone", user.phone_label().to_string(), theme));

    frame.render_widget(Paragraph::new(left), columns[0]);
    frame.render_widget(Paragraph::new(right), columns[1]);

    let mut address = vec![Line::styled("Address", theme.accent_style())];
    address.extend(field("Country", DEFAULT_COUNTRY.to_string(), theme));
    address.extend(field("City/State", DEFAULT_LOCATION.to_string(), theme));
    frame.render_widget(Paragraph::new(address), chunks[2]);
}
