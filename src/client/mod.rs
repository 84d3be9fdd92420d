pub mod board_client;

use async_trait::async_trait;

use crate::error::BoardResult;
use crate::models::{Team, TeamId, Ticket};

pub use board_client::TaskBoardClient;

/// The backend operations the dashboard depends on.
#[async_trait]
pub trait BoardApi: Send + Sync {
    /// Teams the caller belongs to.
    async fn my_teams(&self) -> BoardResult<Vec<Team>>;

    /// Every task visible to the caller.
    async fn all_tasks(&self) -> BoardResult<Vec<Ticket>>;

    async fn delete_team(&self, team_id: TeamId) -> BoardResult<()>;

    async fn create_team(&self, team_name: &str) -> BoardResult<()>;
}
