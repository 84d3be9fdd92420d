use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Top-level layout regions
pub struct AppLayout {
    pub header: Rect,
    pub sidebar: Rect,
    pub main: Rect,
    pub footer: Rect,
}

/// Regions inside the main area
pub struct MainLayout {
    pub teams: Rect,
    pub tickets_heading: Rect,
    pub tickets: Rect,
}

pub const SIDEBAR_WIDTH: u16 = 20;
pub const TEAMS_HEIGHT: u16 = 7;
pub const TEAM_CARD_WIDTH: u16 = 24;
pub const TICKET_CARD_HEIGHT: u16 = 5;

/// Header on top, sidebar on the left, footer hints at the bottom.
/// The sidebar is dropped on narrow terminals (<60 cols).
pub fn app_layout(area: Rect) -> AppLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    let (sidebar, main) = if rows[1].width < 60 {
        (Rect::default(), rows[1])
    } else {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
            .split(rows[1]);
        (cols[0], cols[1])
    };

    AppLayout {
        header: rows[0],
        sidebar,
        main,
        footer: rows[2],
    }
}

pub fn main_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TEAMS_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    MainLayout {
        teams: chunks[0],
        tickets_heading: chunks[1],
        tickets: chunks[2],
    }
}

/// One fixed-height row per ticket card, stacked from the top.
pub fn ticket_rows(area: Rect, count: usize) -> Vec<Rect> {
    let mut constraints: Vec<Constraint> = (0..count)
        .map(|_| Constraint::Length(TICKET_CARD_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    chunks.iter().take(count).copied().collect()
}

/// Center a popup of given width/height in the area
pub fn centered_popup(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrow_terminal_hides_sidebar() {
        let layout = app_layout(Rect::new(0, 0, 50, 30));
        assert_eq!(layout.sidebar.width, 0);
        assert_eq!(layout.main.width, 50);
    }

    #[test]
    fn test_wide_terminal_has_sidebar() {
        let layout = app_layout(Rect::new(0, 0, 120, 40));
        assert_eq!(layout.sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.footer.height, 1);
    }

    #[test]
    fn test_centered_popup_clamped() {
        let popup = centered_popup(60, 10, Rect::new(0, 0, 40, 8));
        assert_eq!(popup, Rect::new(0, 0, 40, 8));
    }
}
