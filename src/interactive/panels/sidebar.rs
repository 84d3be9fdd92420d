use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

const NAV_ITEMS: [(&str, &str); 3] = [("▣", "Dashboard"), ("◆", "Teams"), ("≡", "Tickets")];

/// Static side navigation; the dashboard is the only view.
pub fn draw_sidebar(frame: &mut Frame, area: Rect) {
    if area.width == 0 {
        return;
    }

    let items: Vec<ListItem> = NAV_ITEMS
        .iter()
        .enumerate()
        .map(|(i, (icon, label))| {
            let style = if i == 0 {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", icon), style),
                Span::styled(*label, style),
            ]))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(List::new(items).block(block), area);
}
