use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::formatting::{format_deadlines, format_hours, get_status_icon, truncate};
use crate::interactive::app::InteractiveApp;
use crate::interactive::layout::ticket_rows;
use crate::models::{Priority, Status, Ticket};

pub fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::Low => Color::Blue,
        Priority::Mid => Color::Yellow,
        Priority::High => Color::Red,
    }
}

pub fn status_color(status: Status) -> Color {
    match status {
        Status::ToDo => Color::Gray,
        Status::InProgress => Color::Yellow,
        Status::Finished => Color::Green,
    }
}

fn badge(text: &str, color: Color) -> Span<'static> {
    Span::styled(
        format!(" {} ", text),
        Style::default().fg(Color::Black).bg(color).add_modifier(Modifier::BOLD),
    )
}

pub fn draw_tickets_heading(frame: &mut Frame, area: Rect) {
    let heading = Paragraph::new(Line::from(Span::styled(
        " Section Tickets",
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(heading, area);
}

pub fn draw_tickets(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let tickets = app.dashboard.visible_tickets();
    if tickets.is_empty() {
        let empty = Paragraph::new("  No tickets").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }

    for (ticket, row) in tickets.iter().zip(ticket_rows(area, tickets.len())) {
        if row.height == 0 {
            break;
        }
        draw_ticket_card(frame, row, ticket);
    }
}

fn draw_ticket_card(frame: &mut Frame, area: Rect, ticket: &Ticket) {
    let width = area.width.saturating_sub(4) as usize;
    let title = format!(" {} #{} {} ", get_status_icon(ticket.status), ticket.task_id, ticket.title);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            truncate(&title, width),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(status_color(ticket.status)));

    let description = if ticket.description.trim().is_empty() {
        Span::styled("No description", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(
            truncate(ticket.description.trim(), width),
            Style::default().fg(Color::Gray),
        )
    };

    let meta = Line::from(vec![
        badge(ticket.priority.label(), priority_color(ticket.priority)),
        Span::raw(" "),
        badge(ticket.status.label(), status_color(ticket.status)),
        Span::styled(
            format!(
                "  {} · est {} · real {} · {} pts",
                format_deadlines(ticket),
                format_hours(ticket.estimated_hours.as_deref()),
                format_hours(ticket.real_hours.as_deref()),
                ticket.user_points
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let paragraph = Paragraph::new(vec![Line::from(description), meta]).block(block);
    frame.render_widget(paragraph, area);
}
