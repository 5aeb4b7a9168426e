use super::app::{App, Panel, View};
use super::theme::{Theme, theme};
use super::ui_views;

use chrono::Datelike;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

pub fn draw(f: &mut Frame, app: &mut App) {
    let t = theme(app.theme);

    // The theme is applied to the whole screen first; every widget drawn
    // afterwards inherits it.
    f.render_widget(Block::default().style(t.root_style()), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(0),    // Active panel
            Constraint::Length(2), // Footer
        ])
        .split(f.area());

    draw_header(f, app, t, chunks[0]);
    draw_panel(f, app, t, chunks[1]);
    draw_footer(f, app, t, chunks[2]);
}

fn draw_header(f: &mut Frame, app: &App, t: &Theme, area: Rect) {
    let bar = Style::default().bg(t.header.0).fg(t.header.1);
    f.render_widget(Block::default().style(bar), area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let toggle = format!("[Ctrl+T] {} ", app.theme.toggle_label());
    let title_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(toggle.chars().count() as u16),
        ])
        .split(rows[0]);

    f.render_widget(
        Paragraph::new(Span::styled(
            " Support Ticket System",
            bar.add_modifier(Modifier::BOLD),
        )),
        title_row[0],
    );
    f.render_widget(Paragraph::new(Span::styled(toggle, bar)), title_row[1]);

    let active = app.active_view();
    let mut nav = vec![Span::styled(" ", bar)];
    for view in View::ALL {
        nav.push(Span::styled(
            format!(" {} {} ", view.hotkey(), view.label()),
            t.nav_style(view == active),
        ));
        nav.push(Span::styled(" ", bar));
    }
    f.render_widget(Paragraph::new(Line::from(nav)), rows[1]);
}

fn draw_panel(f: &mut Frame, app: &mut App, t: &Theme, area: Rect) {
    let view = app.active_view();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(t.border_style(false))
        .padding(Padding::horizontal(1))
        .title(Span::styled(format!(" {} ", view.title()), t.title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    match &mut app.panel {
        Panel::Form(form) => ui_views::draw_form(f, form, t, inner),
        Panel::Status(status) => ui_views::draw_status(f, status, t, inner),
        Panel::Dashboard(dashboard) => ui_views::draw_dashboard(f, dashboard, t, inner),
    }
}

fn draw_footer(f: &mut Frame, app: &App, t: &Theme, area: Rect) {
    let bar = Style::default().bg(t.footer.0).fg(t.footer.1);
    f.render_widget(Block::default().style(bar), area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let hints = match app.active_view() {
        View::Form => "Tab next field · Enter next/submit · Ctrl+S submit",
        View::Status => "0-9 type ID · Enter check · Esc clear",
        View::Dashboard => "↑↓ scroll · r refresh · q quit",
    };
    let keys = Line::from(vec![
        Span::styled(format!(" {} ", hints), bar),
        Span::styled("· F1-F3 switch view · Ctrl+C quit", bar.add_modifier(Modifier::DIM)),
    ]);
    f.render_widget(Paragraph::new(keys), rows[0]);

    let contact = Line::from(vec![
        Span::styled(" Need help? Contact us: ", bar),
        Span::styled("support@example.com", bar.fg(t.accent)),
        Span::styled(
            format!("  © {} Ticket System", chrono::Local::now().year()),
            bar,
        ),
    ]);
    f.render_widget(Paragraph::new(contact), rows[1]);
}
