use super::app::{DashboardState, FormField, FormState, StatusState};
use super::theme::Theme;
use super::ui_utils::{estimate_wrapped_lines, input_lines, visible_tail};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};

pub fn draw_form(f: &mut Frame, form: &FormState, t: &Theme, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Subject label
            Constraint::Length(3), // Subject input
            Constraint::Length(1), // Description label
            Constraint::Length(7), // Description textarea
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Submit button
            Constraint::Length(1), // Spacer
            Constraint::Min(0),    // Feedback
        ])
        .split(area);

    f.render_widget(Paragraph::new("Subject").style(t.label_style()), chunks[0]);

    let subject_focused = form.focus == FormField::Subject;
    let subject_width = chunks[1].width.saturating_sub(2) as usize;
    let subject = Paragraph::new(input_lines(
        visible_tail(&form.subject, subject_width),
        "Brief summary",
        subject_focused,
        t.input_style(),
        t.muted_style(),
        t.cursor_style(),
    ))
    .style(t.input_style())
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_style(subject_focused)),
    );
    f.render_widget(subject, chunks[1]);

    f.render_widget(
        Paragraph::new("Description").style(t.label_style()),
        chunks[2],
    );

    let description_focused = form.focus == FormField::Description;
    let inner_width = chunks[3].width.saturating_sub(2) as usize;
    let inner_height = chunks[3].height.saturating_sub(2);
    // Keep the end of the text, where the cursor is, in view.
    let total_lines = estimate_wrapped_lines(&format!("{}█", form.description), inner_width);
    let scroll = total_lines.saturating_sub(inner_height);
    let description = Paragraph::new(input_lines(
        &form.description,
        "Detailed description",
        description_focused,
        t.input_style(),
        t.muted_style(),
        t.cursor_style(),
    ))
    .style(t.input_style())
    .wrap(Wrap { trim: false })
    .scroll((scroll, 0))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_style(description_focused)),
    );
    f.render_widget(description, chunks[3]);

    let button = Paragraph::new(Line::from(Span::styled(
        format!("  {}  ", form.submit_label()),
        t.button_style(form.focus == FormField::Submit, form.submitting),
    )));
    f.render_widget(button, chunks[5]);

    let mut feedback = Vec::new();
    if let Some(err) = &form.error {
        feedback.push(Line::from(Span::styled(err.as_str(), t.error_style())));
    }
    if let Some(message) = form.success_message() {
        feedback.push(Line::from(Span::styled(message, t.success_style())));
    }
    f.render_widget(
        Paragraph::new(feedback).wrap(Wrap { trim: false }),
        chunks[7],
    );
}

pub fn draw_status(f: &mut Frame, status: &StatusState, t: &Theme, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Label
            Constraint::Length(3), // ID input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Button
            Constraint::Length(1), // Spacer
            Constraint::Min(0),    // Result
        ])
        .split(area);

    f.render_widget(Paragraph::new("Ticket ID").style(t.label_style()), chunks[0]);

    let input_width = chunks[1].width.saturating_sub(2) as usize;
    let input = Paragraph::new(input_lines(
        visible_tail(&status.ticket_id, input_width),
        "Enter the Ticket ID",
        true,
        t.input_style(),
        t.muted_style(),
        t.cursor_style(),
    ))
    .style(t.input_style())
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_style(true)),
    );
    f.render_widget(input, chunks[1]);

    let button = Paragraph::new(Line::from(Span::styled(
        format!("  {}  ", status.submit_label()),
        t.button_style(false, !status.can_submit()),
    )));
    f.render_widget(button, chunks[3]);

    if let Some(err) = &status.error {
        f.render_widget(
            Paragraph::new(Span::styled(err.as_str(), t.error_style())),
            chunks[5],
        );
    } else if let Some(ticket) = &status.ticket {
        let label = t.label_style().fg(t.primary);
        let mut lines = vec![
            Line::from(vec![
                Span::styled("ID: ", label),
                Span::raw(ticket.id.to_string()),
            ]),
            Line::from(vec![
                Span::styled("Subject: ", label),
                Span::raw(ticket.subject.as_str()),
            ]),
        ];

        // Spans never break on '\n', so each description line gets its own Line.
        let mut description = ticket.description.lines();
        lines.push(Line::from(vec![
            Span::styled("Description: ", label),
            Span::raw(description.next().unwrap_or_default()),
        ]));
        lines.extend(description.map(Line::raw));

        lines.push(Line::from(vec![
            Span::styled("Status: ", label),
            Span::styled(ticket.status.as_str(), t.label_style().fg(t.status)),
        ]));

        let card = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(t.border_style(true)),
        );
        f.render_widget(card, chunks[5]);
    }
}

pub fn draw_dashboard(f: &mut Frame, dashboard: &mut DashboardState, t: &Theme, area: Rect) {
    if dashboard.loading {
        f.render_widget(
            Paragraph::new("Loading...").style(t.label_style()),
            area,
        );
        return;
    }

    if let Some(err) = &dashboard.error {
        f.render_widget(
            Paragraph::new(Span::styled(err.as_str(), t.error_style())),
            area,
        );
        return;
    }

    if dashboard.tickets.is_empty() {
        f.render_widget(
            Paragraph::new("No tickets available.").style(t.muted_style()),
            area,
        );
        return;
    }

    let header = Row::new(vec!["ID", "Subject", "Description", "Status"]).style(
        ratatui::style::Style::default()
            .bg(t.table_header.0)
            .fg(t.table_header.1)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = dashboard
        .tickets
        .iter()
        .map(|ticket| {
            Row::new(vec![
                Cell::from(ticket.id.to_string()),
                Cell::from(ticket.subject.as_str()),
                Cell::from(ticket.description_preview()),
                Cell::from(ticket.status.as_str()).style(t.label_style().fg(t.status)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(6),
        Constraint::Percentage(25),
        Constraint::Fill(1),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .row_highlight_style(ratatui::style::Style::default().bg(t.row_highlight_bg));

    f.render_stateful_widget(table, area, &mut dashboard.table_state);
}
