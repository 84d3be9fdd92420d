use std::sync::Arc;

use crossterm::event::KeyEvent;

use crate::dashboard::{
    create_team_request, Completion, Dashboard, DeletePrompt, Request, SubmissionId, Update,
};
use crate::interactive::input::InputState;
use crate::interactive::keys::{map_key, Action};
use crate::logging::{log_debug, DiagnosticSink};
use crate::models::Team;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Popup {
    ConfirmDelete(DeletePrompt),
    CreateTeam,
}

/// State of the "new team" dialog.
#[derive(Debug, Clone, Default)]
pub struct CreateTeamForm {
    pub input: InputState,
    pub error: Option<String>,
    /// The submission this form is waiting on, if any.
    pub pending: Option<SubmissionId>,
}

impl CreateTeamForm {
    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    fn reset(&mut self) {
        self.input.clear();
        self.error = None;
        self.pending = None;
    }
}

pub struct InteractiveApp {
    pub dashboard: Dashboard,
    /// Slot in the team strip: 0 is the add button, `i + 1` is `teams()[i]`.
    pub selected: usize,
    pub popup: Option<Popup>,
    pub create_form: CreateTeamForm,
    pub should_quit: bool,
    next_submission: SubmissionId,
    sink: Arc<dyn DiagnosticSink>,
}

impl InteractiveApp {
    pub fn new(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            dashboard: Dashboard::new(),
            selected: 0,
            popup: None,
            create_form: CreateTeamForm::default(),
            should_quit: false,
            next_submission: 0,
            sink,
        }
    }

    /// Mount the dashboard; the returned requests must be dispatched.
    pub fn mount(&mut self) -> Vec<Request> {
        self.dashboard.mount().1
    }

    pub fn quit(&mut self) {
        self.dashboard.unmount();
        self.should_quit = true;
    }

    pub fn selected_team(&self) -> Option<&Team> {
        self.selected
            .checked_sub(1)
            .and_then(|i| self.dashboard.teams().get(i))
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Vec<Request> {
        let action = map_key(key, &self.popup);
        self.handle_action(action)
    }

    pub fn handle_action(&mut self, action: Action) -> Vec<Request> {
        match self.popup.clone() {
            Some(Popup::ConfirmDelete(prompt)) => self.handle_confirm_action(action, prompt),
            Some(Popup::CreateTeam) => self.handle_create_action(action),
            None => self.handle_board_action(action),
        }
    }

    fn handle_board_action(&mut self, action: Action) -> Vec<Request> {
        let slots = self.dashboard.teams().len() + 1;
        match action {
            Action::MoveLeft => {
                self.selected = if self.selected == 0 { slots - 1 } else { self.selected - 1 };
            }
            Action::MoveRight => {
                self.selected = (self.selected + 1) % slots;
            }
            Action::Activate if self.selected == 0 => self.open_create_form(),
            Action::NewTeam => self.open_create_form(),
            Action::DeleteTeam => {
                if let Some(team) = self.selected_team() {
                    let prompt = self.dashboard.request_delete(team.team_id);
                    self.popup = Some(Popup::ConfirmDelete(prompt));
                }
            }
            Action::Refresh => return self.mount(),
            Action::Quit => self.quit(),
            _ => {}
        }
        Vec::new()
    }

    fn handle_confirm_action(&mut self, action: Action, prompt: DeletePrompt) -> Vec<Request> {
        let accepted = match action {
            Action::Accept => true,
            Action::Decline => false,
            Action::Quit => {
                self.quit();
                return Vec::new();
            }
            _ => return Vec::new(),
        };
        self.popup = None;
        prompt.resolve(accepted).into_iter().collect()
    }

    fn handle_create_action(&mut self, action: Action) -> Vec<Request> {
        match action {
            Action::Cancel => self.close_create_form(),
            Action::Quit => self.quit(),
            Action::Submit if !self.create_form.is_submitting() => {
                let submission = self.next_submission;
                match create_team_request(&self.create_form.input.content, submission) {
                    Ok(request) => {
                        self.next_submission += 1;
                        self.create_form.error = None;
                        self.create_form.pending = Some(submission);
                        return vec![request];
                    }
                    Err(e) => self.create_form.error = Some(e.to_string()),
                }
            }
            Action::TypeChar(c) => self.create_form.input.insert_char(c),
            Action::Backspace => self.create_form.input.backspace(),
            Action::Delete => self.create_form.input.delete_char(),
            Action::MoveCursorLeft => self.create_form.input.move_cursor_left(),
            Action::MoveCursorRight => self.create_form.input.move_cursor_right(),
            Action::CursorHome => self.create_form.input.move_cursor_home(),
            Action::CursorEnd => self.create_form.input.move_cursor_end(),
            _ => {}
        }
        Vec::new()
    }

    fn open_create_form(&mut self) {
        self.create_form.reset();
        self.popup = Some(Popup::CreateTeam);
    }

    fn close_create_form(&mut self) {
        self.create_form.reset();
        self.popup = None;
    }

    /// Fold a finished request into the dashboard. Returns follow-up requests.
    pub fn on_completion(&mut self, completion: Completion) -> Vec<Request> {
        if self.dashboard.is_live(completion.session) {
            if let Update::TeamCreated { submission, result } = &completion.update {
                // A cancelled submission must not touch a form reopened since
                if self.create_form.pending == Some(*submission) {
                    self.create_form.pending = None;
                    if result.is_ok() && self.popup == Some(Popup::CreateTeam) {
                        log_debug(&format!("Team created by submission {}, closing dialog", submission));
                        self.close_create_form();
                    }
                }
            }
        }

        let follow_ups = self.dashboard.apply(completion, self.sink.as_ref());
        self.clamp_selection();
        follow_ups
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.dashboard.teams().len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::SessionId;
    use crate::logging::MemorySink;

    fn team(id: i64) -> Team {
        Team {
            team_id: id,
            team_name: format!("Team {}", id),
            created_at: "2024-01-01".to_string(),
        }
    }

    fn app_with_teams(ids: &[i64]) -> (InteractiveApp, SessionId) {
        let mut app = InteractiveApp::new(Arc::new(MemorySink::new()));
        app.mount();
        let session = app.dashboard.session();
        app.on_completion(Completion {
            session,
            update: Update::Teams(Ok(ids.iter().copied().map(team).collect())),
        });
        (app, session)
    }

    #[test]
    fn test_selection_wraps_over_add_button() {
        let (mut app, _) = app_with_teams(&[1, 2]);
        assert!(app.selected_team().is_none());

        app.handle_action(Action::MoveLeft);
        assert_eq!(app.selected_team().map(|t| t.team_id), Some(2));

        app.handle_action(Action::MoveRight);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_delete_needs_confirmation() {
        let (mut app, _) = app_with_teams(&[1, 2]);
        app.handle_action(Action::MoveRight);

        assert!(app.handle_action(Action::DeleteTeam).is_empty());
        assert_eq!(app.popup, Some(Popup::ConfirmDelete(DeletePrompt::new(1))));

        assert_eq!(app.handle_action(Action::Accept), vec![Request::DeleteTeam(1)]);
        assert!(app.popup.is_none());
    }

    #[test]
    fn test_declined_delete_sends_nothing() {
        let (mut app, _) = app_with_teams(&[1]);
        app.handle_action(Action::MoveRight);
        app.handle_action(Action::DeleteTeam);

        assert!(app.handle_action(Action::Decline).is_empty());
        assert!(app.popup.is_none());
        assert_eq!(app.dashboard.teams().len(), 1);
    }

    #[test]
    fn test_delete_on_add_button_does_nothing() {
        let (mut app, _) = app_with_teams(&[1]);
        app.handle_action(Action::DeleteTeam);
        assert!(app.popup.is_none());
    }

    #[test]
    fn test_create_then_cancel_sends_nothing() {
        let (mut app, _) = app_with_teams(&[1, 2]);
        assert!(app.handle_action(Action::Activate).is_empty());
        assert_eq!(app.popup, Some(Popup::CreateTeam));

        app.handle_action(Action::TypeChar('x'));
        assert!(app.handle_action(Action::Cancel).is_empty());

        assert!(app.popup.is_none());
        assert!(app.create_form.input.content.is_empty());
        assert_eq!(app.dashboard.teams().len(), 2);
    }

    #[test]
    fn test_blank_name_is_rejected_in_form() {
        let (mut app, _) = app_with_teams(&[]);
        app.handle_action(Action::NewTeam);
        app.handle_action(Action::TypeChar(' '));

        assert!(app.handle_action(Action::Submit).is_empty());
        assert_eq!(app.popup, Some(Popup::CreateTeam));
        assert!(app.create_form.error.is_some());
    }

    #[test]
    fn test_successful_create_closes_form_and_refetches() {
        let (mut app, session) = app_with_teams(&[1]);
        app.handle_action(Action::NewTeam);
        for c in "Ops".chars() {
            app.handle_action(Action::TypeChar(c));
        }

        assert_eq!(
            app.handle_action(Action::Submit),
            vec![Request::CreateTeam { team_name: "Ops".to_string(), submission: 0 }]
        );
        assert!(app.create_form.is_submitting());
        assert!(app.handle_action(Action::Submit).is_empty());

        let follow_ups = app.on_completion(Completion {
            session,
            update: Update::TeamCreated { submission: 0, result: Ok(()) },
        });

        assert_eq!(follow_ups, vec![Request::FetchTeams]);
        assert!(app.popup.is_none());
        assert_eq!(app.dashboard.teams().len(), 1);
    }

    #[test]
    fn test_cancelled_create_does_not_close_reopened_form() {
        let (mut app, session) = app_with_teams(&[1]);
        app.handle_action(Action::NewTeam);
        app.handle_action(Action::TypeChar('A'));
        assert_eq!(app.handle_action(Action::Submit).len(), 1);
        app.handle_action(Action::Cancel);

        app.handle_action(Action::NewTeam);
        app.handle_action(Action::TypeChar('B'));

        let follow_ups = app.on_completion(Completion {
            session,
            update: Update::TeamCreated { submission: 0, result: Ok(()) },
        });

        // The abandoned create still refreshes the list
        assert_eq!(follow_ups, vec![Request::FetchTeams]);
        assert_eq!(app.popup, Some(Popup::CreateTeam));
        assert_eq!(app.create_form.input.content, "B");
        assert!(!app.create_form.is_submitting());
    }

    #[test]
    fn test_each_submission_gets_its_own_id() {
        let (mut app, session) = app_with_teams(&[]);
        app.handle_action(Action::NewTeam);
        app.handle_action(Action::TypeChar('A'));
        app.handle_action(Action::Submit);
        app.handle_action(Action::Cancel);

        app.handle_action(Action::NewTeam);
        app.handle_action(Action::TypeChar('B'));
        assert_eq!(
            app.handle_action(Action::Submit),
            vec![Request::CreateTeam { team_name: "B".to_string(), submission: 1 }]
        );

        app.on_completion(Completion {
            session,
            update: Update::TeamCreated { submission: 1, result: Ok(()) },
        });
        assert!(app.popup.is_none());
    }

    #[test]
    fn test_create_still_lands_after_refresh() {
        let (mut app, session) = app_with_teams(&[1]);
        app.handle_action(Action::NewTeam);
        app.handle_action(Action::TypeChar('C'));
        app.handle_action(Action::Submit);
        app.handle_action(Action::Cancel);
        app.handle_action(Action::Refresh);

        let follow_ups = app.on_completion(Completion {
            session,
            update: Update::TeamCreated { submission: 0, result: Ok(()) },
        });
        assert_eq!(follow_ups, vec![Request::FetchTeams]);
    }

    #[test]
    fn test_selection_clamped_after_delete() {
        let (mut app, session) = app_with_teams(&[1, 2]);
        app.handle_action(Action::MoveLeft);
        assert_eq!(app.selected, 2);

        app.on_completion(Completion {
            session,
            update: Update::TeamDeleted { team_id: 2, result: Ok(()) },
        });
        assert_eq!(app.selected, 1);
    }

    #[test]
    fn test_refresh_starts_new_session() {
        let (mut app, session) = app_with_teams(&[1]);
        let requests = app.handle_action(Action::Refresh);

        assert_eq!(requests, vec![Request::FetchTeams, Request::FetchTickets]);
        assert_ne!(app.dashboard.session(), session);
    }

    #[test]
    fn test_quit_unmounts() {
        let (mut app, session) = app_with_teams(&[1]);
        app.handle_action(Action::Quit);

        assert!(app.should_quit);
        assert!(!app.dashboard.is_current(session));
    }
}
