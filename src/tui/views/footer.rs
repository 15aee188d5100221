//! Footer view: company blurb, useful links, social links and the
//! newsletter form

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

use crate::site::{NavLink, SubscriptionStatus};
use crate::tui::app::{App, Focus};
use crate::tui::widgets::TextInput;

use super::place;

pub const NEWSLETTER_TITLE: &str = "Subscribe our newsletter";

const DESCRIPTION: &str = "Building agentic AI systems designed for autonomy, memory, \
                           and real-time intelligence at scale.";

/// Links in the footer's "Useful Link" column
pub static FOOTER_LINKS: &[NavLink] = &[
    NavLink {
        name: "About",
        href: "/about",
    },
    NavLink {
        name: "Peanut",
        href: "/peanut",
    },
    NavLink {
        name: "Pricing",
        href: "/pricing",
    },
    NavLink {
        name: "Contact",
        href: "/contact",
    },
];

/// Social profiles in the "Follow Us" column. `#` marks a profile that
/// is not published yet.
pub static SOCIAL_LINKS: &[NavLink] = &[
    NavLink {
        name: "Twitter",
        href: "#",
    },
    NavLink {
        name: "GitHub",
        href: "#",
    },
    NavLink {
        name: "LinkedIn",
        href: "https://www.linkedin.com/company/gyralabs",
    },
];

/// Render the footer
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = app.theme.clone();
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme.border_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(20),
            Constraint::Percentage(15),
            Constraint::Percentage(35),
        ])
        .split(inner);

    let company = vec![
        Line::styled("◆ GyraLabs", theme.accent_style()),
        Line::styled(DESCRIPTION, theme.muted_style()),
    ];
    frame.render_widget(
        Paragraph::new(company)
            .wrap(Wrap { trim: true })
            .block(Block::default().padding(Padding::horizontal(1))),
        columns[0],
    );

    let links = columns[1];
    place(
        frame,
        links.x,
        links.y,
        Span::styled("Useful Link", theme.text_style().add_modifier(Modifier::BOLD)),
        links,
    );
    for (i, link) in FOOTER_LINKS.iter().enumerate() {
        let rect = place(
            frame,
            links.x,
            links.y + 1 + i as u16,
            Span::styled(link.name, theme.muted_style()),
            links,
        );
        if rect.width > 0 && rect.y < links.bottom() {
            app.hit.footer_links.push((rect, link.href));
        }
    }

    let social = columns[2];
    place(
        frame,
        social.x,
        social.y,
        Span::styled("Follow Us", theme.text_style().add_modifier(Modifier::BOLD)),
        social,
    );
    for (i, link) in SOCIAL_LINKS.iter().enumerate() {
        let label = if link.href.starts_with("http") {
            format!("{} ↗", link.name)
        } else {
            link.name.to_string()
        };
        place(
            frame,
            social.x,
            social.y + 1 + i as u16,
            Span::styled(label, theme.muted_style()),
            social,
        );
    }

    render_newsletter(frame, app, columns[3]);
}

fn render_newsletter(frame: &mut Frame, app: &mut App, area: Rect) {
    if area.height < 3 {
        return;
    }
    let theme = app.theme.clone();
    let form = &app.newsletter;

    place(
        frame,
        area.x,
        area.y,
        Span::styled(NEWSLETTER_TITLE, theme.text_style().add_modifier(Modifier::BOLD)),
        area,
    );

    let button_label = match form.status() {
        SubscriptionStatus::Submitting => " Subscribing... ",
        _ => " Subscribe ",
    };
    let button_width = Span::raw(button_label).width() as u16;
    let row = area.y + 2;
    let input_width = area.width.saturating_sub(button_width + 1);
    let input_area = Rect::new(area.x, row, input_width, 1);
    let button_area = Rect::new(area.x + input_width, row, button_width.min(area.width), 1);

    let focused = app.focus == Focus::Newsletter;
    let disabled = form.is_disabled();
    frame.render_widget(
        Paragraph::new("").style(Style::default().bg(theme.highlight_bg)),
        input_area,
    );
    frame.render_widget(
        TextInput::new(form.email())
            .placeholder("Your email address")
            .prefix(" ")
            .focused(focused)
            .disabled(disabled)
            .text_style(Style::default().fg(theme.text).bg(theme.highlight_bg))
            .placeholder_style(Style::default().fg(theme.muted).bg(theme.highlight_bg)),
        input_area,
    );

    let button_style = if disabled {
        Style::default().fg(theme.muted).bg(theme.border)
    } else {
        Style::default()
            .fg(theme.highlight_fg)
            .bg(theme.accent)
            .add_modifier(Modifier::BOLD)
    };
    frame.render_widget(Span::styled(button_label, button_style), button_area);

    // Result overlay, like the site's fade-in banner
    let result = match form.status() {
        SubscriptionStatus::Succeeded => Some(Span::styled(
            "Subscribed! 🎉",
            Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
        )),
        SubscriptionStatus::Failed => Some(Span::styled(
            "Failed. Try again.",
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
        )),
        _ => None,
    };
    if let Some(result) = result {
        let overlay = Rect::new(area.x, row, area.width, 1);
        frame.render_widget(
            Paragraph::new(Line::from(result).centered()).style(Style::default().bg(theme.surface)),
            overlay,
        );
    }

    app.hit.newsletter_input = Some(input_area);
    app.hit.subscribe_button = Some(button_area);
}
