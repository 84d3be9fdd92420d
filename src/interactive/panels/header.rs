use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::interactive::app::InteractiveApp;

pub fn draw_header(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let width = area.width.saturating_sub(2) as usize;

    let left = vec![Span::styled(
        " Taskboard",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];

    // Right: last successful sync of the team list
    let synced = match app.dashboard.team_list().last_synced() {
        Some(at) => format!("synced {} ", at.format("%H:%M:%S")),
        None => "not synced ".to_string(),
    };
    let right = vec![
        Span::styled(
            format!("{} teams · {} tickets  ", app.dashboard.teams().len(), app.dashboard.tickets().len()),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(synced, Style::default().fg(Color::DarkGray)),
    ];

    let right_text_len: usize = right.iter().map(|s| s.content.chars().count()).sum();
    let left_text_len: usize = left.iter().map(|s| s.content.chars().count()).sum();
    let pad = width.saturating_sub(left_text_len + right_text_len);

    let mut spans = left;
    spans.push(Span::raw(" ".repeat(pad)));
    spans.extend(right);

    let header = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .style(Style::default().bg(Color::Rgb(20, 22, 30)));
    frame.render_widget(header, area);
}
