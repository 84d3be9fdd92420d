use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::formatting::{format_date, truncate};
use crate::interactive::app::InteractiveApp;
use crate::interactive::layout::TEAM_CARD_WIDTH;
use crate::models::Team;

fn card_border(selected: bool) -> Style {
    if selected {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// First slot to draw so that `selected` stays on screen.
fn scroll_offset(selected: usize, visible: usize) -> usize {
    if visible == 0 || selected < visible {
        0
    } else {
        selected + 1 - visible
    }
}

pub fn draw_teams(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let teams = app.dashboard.teams();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Teams ({}) ", teams.len()))
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible = (inner.width / TEAM_CARD_WIDTH) as usize;
    let offset = scroll_offset(app.selected, visible);

    // Slot 0 is the add button, slot i + 1 is teams[i]
    for (column, slot) in (offset..=teams.len()).take(visible).enumerate() {
        let card = Rect::new(
            inner.x + column as u16 * TEAM_CARD_WIDTH,
            inner.y,
            TEAM_CARD_WIDTH.saturating_sub(1),
            inner.height,
        );
        let selected = slot == app.selected;
        match slot.checked_sub(1).and_then(|i| teams.get(i)) {
            Some(team) => draw_team_card(frame, card, team, selected),
            None => draw_add_button(frame, card, selected),
        }
    }

    if teams.is_empty() && visible > 1 {
        let hint_area = Rect::new(
            inner.x + TEAM_CARD_WIDTH,
            inner.y + inner.height / 2,
            inner.width.saturating_sub(TEAM_CARD_WIDTH),
            1,
        );
        let hint = Paragraph::new("No teams").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, hint_area);
    }
}

fn draw_add_button(frame: &mut Frame, area: Rect, selected: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(card_border(selected));
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  +  Add team",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn draw_team_card(frame: &mut Frame, area: Rect, team: &Team, selected: bool) {
    let width = area.width.saturating_sub(2) as usize;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(card_border(selected));
    let text = vec![
        Line::from(Span::styled(
            truncate(&team.team_name, width),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("#{}", team.team_id),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(Span::styled(
            format!("since {}", format_date(&team.created_at)),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(text).block(block), area);
}
