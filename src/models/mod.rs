pub mod team;
pub mod ticket;

// Re-export commonly used types
pub use team::{CreateTeamRequest, Team, TeamId};
pub use ticket::{Priority, Status, Ticket};
