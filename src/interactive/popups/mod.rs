pub mod confirm;
pub mod create;

use ratatui::{Frame, layout::Rect};
use crate::interactive::app::{InteractiveApp, Popup};

/// Draw the active popup, if any. Draws on top of everything.
pub fn draw_popup(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let Some(popup) = &app.popup else { return };

    match popup {
        Popup::ConfirmDelete(_) => confirm::draw(frame, area, app),
        Popup::CreateTeam => create::draw(frame, area, app),
    }
}
