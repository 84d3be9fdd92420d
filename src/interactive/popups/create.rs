use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::interactive::app::InteractiveApp;
use crate::interactive::layout::centered_popup;

/// Draw the new team dialog.
pub fn draw(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let width: u16 = 50;
    let height: u16 = 7;
    let popup_area = centered_popup(width, height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" New Team ")
        .border_style(Style::default().fg(Color::Green));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    if inner.height < 3 {
        return;
    }

    let form = &app.create_form;

    let label_area = Rect::new(inner.x, inner.y, inner.width, 1);
    frame.render_widget(
        Paragraph::new(Span::styled("Team name", Style::default().fg(Color::Gray))),
        label_area,
    );

    // Input with a block cursor
    let (before, under, rest) = form.input.split_at_cursor();
    let input_line = Line::from(vec![
        Span::styled(before, Style::default().fg(Color::White)),
        Span::styled(
            under.unwrap_or(' ').to_string(),
            Style::default()
                .fg(Color::Rgb(0, 0, 0))
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(rest, Style::default().fg(Color::White)),
    ]);
    let input_area = Rect::new(inner.x, inner.y + 1, inner.width, 1);
    frame.render_widget(Paragraph::new(input_line), input_area);

    let status = if form.is_submitting() {
        Some(Span::styled("Creating...", Style::default().fg(Color::Yellow)))
    } else {
        form.error
            .as_ref()
            .map(|e| Span::styled(e.clone(), Style::default().fg(Color::Red)))
    };
    if let Some(status) = status.filter(|_| inner.height >= 5) {
        let status_area = Rect::new(inner.x, inner.y + 3, inner.width, 1);
        frame.render_widget(Paragraph::new(status), status_area);
    }

    let hints_area = Rect::new(
        inner.x,
        inner.y + inner.height.saturating_sub(1),
        inner.width,
        1,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            "Enter: Create  Esc: Cancel",
            Style::default().fg(Color::DarkGray),
        )),
        hints_area,
    );
}
