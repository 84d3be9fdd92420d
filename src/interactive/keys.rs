use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crate::interactive::app::Popup;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Team strip
    MoveLeft,
    MoveRight,
    Activate,
    NewTeam,
    DeleteTeam,
    Refresh,

    // Popup: confirmation
    Accept,
    Decline,

    // Popup: create form
    Submit,
    Cancel,
    TypeChar(char),
    Backspace,
    Delete,
    MoveCursorLeft,
    MoveCursorRight,
    CursorHome,
    CursorEnd,

    Quit,
    None,
}

pub fn map_key(key: KeyEvent, popup: &Option<Popup>) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }
    match popup {
        Some(Popup::ConfirmDelete(_)) => map_confirm_key(key),
        Some(Popup::CreateTeam) => map_create_key(key),
        None => map_board_key(key),
    }
}

fn map_board_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => Action::MoveLeft,
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => Action::MoveRight,
        KeyCode::Enter => Action::Activate,
        KeyCode::Char('a') | KeyCode::Char('+') => Action::NewTeam,
        KeyCode::Char('d') | KeyCode::Delete => Action::DeleteTeam,
        KeyCode::Char('r') => Action::Refresh,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::None,
    }
}

fn map_confirm_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => Action::Accept,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Action::Decline,
        _ => Action::None,
    }
}

fn map_create_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter => Action::Submit,
        KeyCode::Esc => Action::Cancel,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Delete => Action::Delete,
        KeyCode::Left => Action::MoveCursorLeft,
        KeyCode::Right => Action::MoveCursorRight,
        KeyCode::Home => Action::CursorHome,
        KeyCode::End => Action::CursorEnd,
        KeyCode::Char(c) => Action::TypeChar(c),
        _ => Action::None,
    }
}
