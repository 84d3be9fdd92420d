use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinSet;

use super::{Completion, Dashboard, Request, SessionId, Update};
use crate::client::BoardApi;
use crate::error::{BoardResult, ErrorContext};
use crate::logging::{log_debug, DiagnosticSink};

/// Executes dashboard [`Request`]s against the backend.
#[derive(Clone)]
pub struct DashboardController {
    api: Arc<dyn BoardApi>,
}

impl DashboardController {
    pub fn new(api: Arc<dyn BoardApi>) -> Self {
        Self { api }
    }

    pub async fn execute(&self, session: SessionId, request: Request) -> Completion {
        log_debug(&format!("Executing {:?} for session {}", request, session));
        let update = match request {
            Request::FetchTeams => Update::Teams(self.api.my_teams().await),
            Request::FetchTickets => Update::Tickets(self.api.all_tasks().await),
            Request::DeleteTeam(team_id) => Update::TeamDeleted {
                team_id,
                result: self.api.delete_team(team_id).await,
            },
            Request::CreateTeam { team_name, submission } => Update::TeamCreated {
                submission,
                result: self.api.create_team(&team_name).await,
            },
        };
        Completion { session, update }
    }

    /// Run `request` in the background and deliver its completion to `tx`.
    ///
    /// The receiver decides whether the completion is still wanted.
    pub fn dispatch(&self, session: SessionId, request: Request, tx: UnboundedSender<Completion>) {
        let controller = self.clone();
        tokio::spawn(async move {
            let completion = controller.execute(session, request).await;
            if tx.send(completion).is_err() {
                log_debug("Completion receiver gone, result discarded");
            }
        });
    }

    /// Run `requests` concurrently, applying each completion as it lands and
    /// following up on whatever the dashboard asks for next, until nothing is
    /// left in flight.
    pub async fn settle(
        &self,
        dashboard: &mut Dashboard,
        requests: Vec<Request>,
        sink: &dyn DiagnosticSink,
    ) -> BoardResult<()> {
        let session = dashboard.session();
        let mut pending = JoinSet::new();

        for request in requests {
            self.spawn_into(&mut pending, session, request);
        }

        while let Some(joined) = pending.join_next().await {
            let completion = joined.context("Request task failed")?;
            for follow_up in dashboard.apply(completion, sink) {
                self.spawn_into(&mut pending, session, follow_up);
            }
        }

        Ok(())
    }

    /// Mount `dashboard` and wait for the initial fetches.
    pub async fn mount(&self, dashboard: &mut Dashboard, sink: &dyn DiagnosticSink) -> BoardResult<()> {
        let (_, requests) = dashboard.mount();
        self.settle(dashboard, requests, sink).await
    }

    fn spawn_into(&self, pending: &mut JoinSet<Completion>, session: SessionId, request: Request) {
        let controller = self.clone();
        pending.spawn(async move { controller.execute(session, request).await });
    }
}
