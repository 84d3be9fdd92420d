//! Client-side state of the dashboard: the held team and ticket lists, and the
//! rules for folding network completions into them.
//!
//! Network work is described by [`Request`]s and executed elsewhere (see
//! [`DashboardController`]); results come back as [`Completion`]s tagged with
//! the session that issued them. Nothing is applied once the view is unmounted.
//! A refresh only supersedes fetches: deletes and creates that finish after it
//! still take effect.

pub mod controller;
pub mod sync;
pub mod workflow;

use std::fmt;

use crate::constants::{
    CREATE_TEAM_FAILED, DELETE_TEAM_FAILED, FETCH_TASKS_FAILED, FETCH_TEAMS_FAILED,
    TICKET_PREVIEW_LIMIT,
};
use crate::error::BoardResult;
use crate::logging::{log_debug, DiagnosticSink};
use crate::models::{Team, TeamId, Ticket};

pub use controller::DashboardController;
pub use sync::ListSync;
pub use workflow::{create_team_request, validate_team_name, Answer, Confirm, DeletePrompt};

/// Identifies one submission of the create form.
pub type SubmissionId = u64;

/// Network work the dashboard asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    FetchTeams,
    FetchTickets,
    DeleteTeam(TeamId),
    CreateTeam {
        team_name: String,
        submission: SubmissionId,
    },
}

/// Result of executing a [`Request`].
#[derive(Debug)]
pub enum Update {
    Teams(BoardResult<Vec<Team>>),
    Tickets(BoardResult<Vec<Ticket>>),
    TeamDeleted {
        team_id: TeamId,
        result: BoardResult<()>,
    },
    TeamCreated {
        submission: SubmissionId,
        result: BoardResult<()>,
    },
}

/// A mount of the dashboard (`mount`) and the refresh within it (`refresh`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId {
    mount: u64,
    refresh: u64,
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}.{}", self.mount, self.refresh)
    }
}

#[derive(Debug)]
pub struct Completion {
    pub session: SessionId,
    pub update: Update,
}

#[derive(Debug)]
pub struct Dashboard {
    teams: ListSync<Team>,
    tickets: ListSync<Ticket>,
    /// Teams deleted during this mount; filtered out of fetches that raced the delete.
    deleted_teams: Vec<TeamId>,
    session: SessionId,
    mounted: bool,
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            teams: ListSync::new(FETCH_TEAMS_FAILED),
            tickets: ListSync::new(FETCH_TASKS_FAILED),
            deleted_teams: Vec::new(),
            session: SessionId { mount: 0, refresh: 0 },
            mounted: false,
        }
    }

    /// Start a session and return the initial fetches to run.
    ///
    /// Mounting an already mounted dashboard is a refresh: fetches still in
    /// flight are superseded, but deletes and creates are not. Held lists are
    /// kept until the new fetches land.
    pub fn mount(&mut self) -> (SessionId, Vec<Request>) {
        if self.mounted {
            self.session.refresh += 1;
            log_debug(&format!("Dashboard refreshed, session {}", self.session));
        } else {
            self.session = SessionId {
                mount: self.session.mount + 1,
                refresh: 0,
            };
            self.mounted = true;
            self.deleted_teams.clear();
            log_debug(&format!("Dashboard mounted, session {}", self.session));
        }
        (self.session, vec![Request::FetchTeams, Request::FetchTickets])
    }

    pub fn unmount(&mut self) {
        log_debug(&format!("Dashboard unmounted, session {}", self.session));
        self.mounted = false;
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    /// Whether `session` belongs to the current mount, refreshed since or not.
    pub fn is_live(&self, session: SessionId) -> bool {
        self.mounted && session.mount == self.session.mount
    }

    /// Whether `session` is the latest refresh of the current mount.
    pub fn is_current(&self, session: SessionId) -> bool {
        self.mounted && session == self.session
    }

    pub fn teams(&self) -> &[Team] {
        self.teams.items()
    }

    pub fn team_list(&self) -> &ListSync<Team> {
        &self.teams
    }

    pub fn team(&self, team_id: TeamId) -> Option<&Team> {
        self.teams().iter().find(|t| t.team_id == team_id)
    }

    /// Every ticket from the last successful fetch.
    pub fn tickets(&self) -> &[Ticket] {
        self.tickets.items()
    }

    /// The tickets the view shows: the first few, in fetch order.
    pub fn visible_tickets(&self) -> &[Ticket] {
        let tickets = self.tickets.items();
        &tickets[..tickets.len().min(TICKET_PREVIEW_LIMIT)]
    }

    pub fn request_delete(&self, team_id: TeamId) -> DeletePrompt {
        DeletePrompt::new(team_id)
    }

    /// Fold a completion into the held state and return any follow-up work.
    pub fn apply(&mut self, completion: Completion, sink: &dyn DiagnosticSink) -> Vec<Request> {
        let session = completion.session;
        if !self.is_live(session) {
            log_debug(&format!(
                "Dropping completion from session {} (current {}, mounted {})",
                session, self.session, self.mounted
            ));
            return Vec::new();
        }

        match completion.update {
            Update::Teams(result) if self.is_current(session) => {
                let deleted = &self.deleted_teams;
                let result = result.map(|teams| {
                    teams
                        .into_iter()
                        .filter(|t| !deleted.contains(&t.team_id))
                        .collect()
                });
                self.teams.apply(result, sink);
                Vec::new()
            }
            Update::Tickets(result) if self.is_current(session) => {
                self.tickets.apply(result, sink);
                Vec::new()
            }
            Update::Teams(_) | Update::Tickets(_) => {
                log_debug(&format!(
                    "Dropping fetch from session {}, superseded by {}",
                    session, self.session
                ));
                Vec::new()
            }
            Update::TeamDeleted { team_id, result } => {
                match result {
                    Ok(()) => {
                        self.deleted_teams.push(team_id);
                        self.teams.remove_where(|t| t.team_id == team_id);
                    }
                    Err(e) => sink.report(DELETE_TEAM_FAILED, &e),
                }
                Vec::new()
            }
            // The new team is never appended locally; the list is re-read.
            Update::TeamCreated { result, .. } => match result {
                Ok(()) => vec![Request::FetchTeams],
                Err(e) => {
                    sink.report(CREATE_TEAM_FAILED, &e);
                    Vec::new()
                }
            },
        }
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;
    use crate::logging::MemorySink;
    use crate::models::{Priority, Status};

    fn team(id: TeamId, name: &str) -> Team {
        Team {
            team_id: id,
            team_name: name.to_string(),
            created_at: "2024-01-01".to_string(),
        }
    }

    fn ticket(id: i64) -> Ticket {
        Ticket {
            task_id: id,
            title: format!("Task {}", id),
            description: String::new(),
            priority: Priority::Low,
            status: Status::ToDo,
            estimated_deadline: "2024-06-01".to_string(),
            real_deadline: None,
            estimated_hours: None,
            real_hours: None,
            user_points: 1,
        }
    }

    fn server_error() -> BoardError {
        BoardError::HttpStatus {
            status: 500,
            endpoint: "/teams/myteams".to_string(),
        }
    }

    fn mounted() -> (Dashboard, SessionId) {
        let mut dashboard = Dashboard::new();
        let (session, _) = dashboard.mount();
        (dashboard, session)
    }

    #[test]
    fn test_mount_requests_both_lists() {
        let mut dashboard = Dashboard::new();
        let (session, requests) = dashboard.mount();
        assert!(dashboard.is_current(session));
        assert_eq!(requests, vec![Request::FetchTeams, Request::FetchTickets]);
    }

    #[test]
    fn test_teams_replaced_in_order() {
        let sink = MemorySink::new();
        let (mut dashboard, session) = mounted();
        let fetched = vec![team(3, "C"), team(1, "A"), team(2, "B")];

        let follow_ups = dashboard.apply(
            Completion { session, update: Update::Teams(Ok(fetched.clone())) },
            &sink,
        );

        assert!(follow_ups.is_empty());
        assert_eq!(dashboard.teams(), fetched.as_slice());
    }

    #[test]
    fn test_visible_tickets_capped_at_five() {
        let sink = MemorySink::new();
        let (mut dashboard, session) = mounted();
        dashboard.apply(
            Completion { session, update: Update::Tickets(Ok((1..=8).map(ticket).collect())) },
            &sink,
        );

        let ids: Vec<i64> = dashboard.visible_tickets().iter().map(|t| t.task_id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(dashboard.tickets().len(), 8);
    }

    #[test]
    fn test_visible_tickets_under_limit() {
        let sink = MemorySink::new();
        let (mut dashboard, session) = mounted();
        dashboard.apply(
            Completion { session, update: Update::Tickets(Ok(vec![ticket(4), ticket(2)])) },
            &sink,
        );
        assert_eq!(dashboard.visible_tickets().len(), 2);
        assert_eq!(dashboard.visible_tickets()[0].task_id, 4);
    }

    #[test]
    fn test_failed_team_fetch_logs_once() {
        let sink = MemorySink::new();
        let (mut dashboard, session) = mounted();
        dashboard.apply(Completion { session, update: Update::Teams(Err(server_error())) }, &sink);

        assert!(dashboard.teams().is_empty());
        assert_eq!(sink.len(), 1);
        assert_eq!(sink.entries()[0].label, FETCH_TEAMS_FAILED);
    }

    #[test]
    fn test_delete_success_removes_only_that_team() {
        let sink = MemorySink::new();
        let (mut dashboard, session) = mounted();
        dashboard.apply(
            Completion { session, update: Update::Teams(Ok(vec![team(1, "A"), team(2, "B")])) },
            &sink,
        );

        dashboard.apply(
            Completion { session, update: Update::TeamDeleted { team_id: 1, result: Ok(()) } },
            &sink,
        );

        assert_eq!(dashboard.teams(), &[team(2, "B")]);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_delete_failure_keeps_team() {
        let sink = MemorySink::new();
        let (mut dashboard, session) = mounted();
        dashboard.apply(
            Completion { session, update: Update::Teams(Ok(vec![team(1, "A")])) },
            &sink,
        );

        dashboard.apply(
            Completion {
                session,
                update: Update::TeamDeleted { team_id: 1, result: Err(server_error()) },
            },
            &sink,
        );

        assert_eq!(dashboard.teams().len(), 1);
        assert_eq!(sink.entries()[0].label, DELETE_TEAM_FAILED);
    }

    #[test]
    fn test_created_team_triggers_refetch() {
        let sink = MemorySink::new();
        let (mut dashboard, session) = mounted();

        let follow_ups = dashboard.apply(Completion { session, update: Update::TeamCreated { submission: 0, result: Ok(()) } }, &sink);
        assert_eq!(follow_ups, vec![Request::FetchTeams]);
        assert!(dashboard.teams().is_empty());

        let follow_ups = dashboard.apply(
            Completion { session, update: Update::TeamCreated { submission: 0, result: Err(server_error()) } },
            &sink,
        );
        assert!(follow_ups.is_empty());
        assert_eq!(sink.entries()[0].label, CREATE_TEAM_FAILED);
    }

    #[test]
    fn test_completion_after_unmount_is_dropped() {
        let sink = MemorySink::new();
        let (mut dashboard, session) = mounted();
        dashboard.unmount();

        let follow_ups = dashboard.apply(
            Completion { session, update: Update::TeamCreated { submission: 0, result: Ok(()) } },
            &sink,
        );
        dashboard.apply(Completion { session, update: Update::Teams(Ok(vec![team(1, "A")])) }, &sink);
        dashboard.apply(Completion { session, update: Update::Teams(Err(server_error())) }, &sink);

        assert!(follow_ups.is_empty());
        assert!(dashboard.teams().is_empty());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_fetch_from_before_refresh_is_dropped() {
        let sink = MemorySink::new();
        let (mut dashboard, old) = mounted();
        let (current, _) = dashboard.mount();

        dashboard.apply(Completion { session: current, update: Update::Teams(Ok(vec![team(1, "New")])) }, &sink);
        dashboard.apply(Completion { session: old, update: Update::Teams(Ok(vec![team(9, "Old")])) }, &sink);
        dashboard.apply(Completion { session: old, update: Update::Teams(Err(server_error())) }, &sink);

        assert_eq!(dashboard.teams(), &[team(1, "New")]);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_delete_lands_after_refresh() {
        let sink = MemorySink::new();
        let (mut dashboard, old) = mounted();
        dashboard.apply(
            Completion { session: old, update: Update::Teams(Ok(vec![team(1, "A"), team(2, "B")])) },
            &sink,
        );

        // The refresh is answered before the delete commits
        let (current, _) = dashboard.mount();
        dashboard.apply(
            Completion { session: current, update: Update::Teams(Ok(vec![team(1, "A"), team(2, "B")])) },
            &sink,
        );
        dashboard.apply(
            Completion { session: old, update: Update::TeamDeleted { team_id: 1, result: Ok(()) } },
            &sink,
        );

        assert_eq!(dashboard.teams(), &[team(2, "B")]);
    }

    #[test]
    fn test_fetch_answered_before_delete_does_not_resurrect_team() {
        let sink = MemorySink::new();
        let (mut dashboard, session) = mounted();
        dashboard.apply(
            Completion { session, update: Update::Teams(Ok(vec![team(1, "A"), team(2, "B")])) },
            &sink,
        );

        dashboard.apply(
            Completion { session, update: Update::TeamDeleted { team_id: 1, result: Ok(()) } },
            &sink,
        );
        dashboard.apply(
            Completion { session, update: Update::Teams(Ok(vec![team(1, "A"), team(2, "B")])) },
            &sink,
        );

        assert_eq!(dashboard.teams(), &[team(2, "B")]);
    }

    #[test]
    fn test_create_lands_after_refresh() {
        let sink = MemorySink::new();
        let (mut dashboard, old) = mounted();
        dashboard.mount();

        let follow_ups = dashboard.apply(
            Completion { session: old, update: Update::TeamCreated { submission: 3, result: Ok(()) } },
            &sink,
        );

        assert_eq!(follow_ups, vec![Request::FetchTeams]);
    }

    #[test]
    fn test_remount_after_unmount_starts_new_lifecycle() {
        let sink = MemorySink::new();
        let (mut dashboard, first) = mounted();
        dashboard.unmount();
        let (second, _) = dashboard.mount();

        assert_ne!(first, second);
        assert!(!dashboard.is_live(first));
        let follow_ups = dashboard.apply(
            Completion { session: first, update: Update::TeamCreated { submission: 0, result: Ok(()) } },
            &sink,
        );
        assert!(follow_ups.is_empty());
    }
}
