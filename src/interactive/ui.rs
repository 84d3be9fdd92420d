use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::app::{InteractiveApp, Popup};
use super::layout::{app_layout, main_layout};
use super::panels::{header, sidebar, teams, tickets};
use super::popups;

pub fn draw(frame: &mut Frame, app: &InteractiveApp) {
    let layout = app_layout(frame.size());

    header::draw_header(frame, layout.header, app);
    sidebar::draw_sidebar(frame, layout.sidebar);

    let main = main_layout(layout.main);
    teams::draw_teams(frame, main.teams, app);
    tickets::draw_tickets_heading(frame, main.tickets_heading);
    tickets::draw_tickets(frame, main.tickets, app);

    draw_footer(frame, layout.footer, app);

    popups::draw_popup(frame, frame.size(), app);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let hints: &[(&str, &str)] = match app.popup {
        Some(Popup::ConfirmDelete(_)) => &[("y", "delete"), ("n", "keep")],
        Some(Popup::CreateTeam) => &[("Enter", "create"), ("Esc", "cancel")],
        None => &[
            ("←/→", "select"),
            ("Enter", "open"),
            ("a", "add team"),
            ("d", "delete team"),
            ("r", "refresh"),
            ("q", "quit"),
        ],
    };

    let mut spans = Vec::new();
    for (key, label) in hints {
        spans.push(Span::styled(format!(" {} ", key), Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(format!("{} ", label), Style::default().fg(Color::DarkGray)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
