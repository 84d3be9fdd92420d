pub mod auth;
pub mod create;
pub mod delete;
pub mod teams;
pub mod tickets;

use clap::ArgMatches;

use crate::error::BoardResult;
use crate::formatting::OutputFormat;

pub use auth::{handle_login, handle_logout, handle_status};
pub use create::handle_create_team;
pub use delete::handle_delete_team;
pub use teams::handle_teams;
pub use tickets::handle_tickets;

fn output_format(matches: &ArgMatches) -> BoardResult<OutputFormat> {
    matches
        .get_one::<String>("format")
        .map(|f| f.parse())
        .unwrap_or(Ok(OutputFormat::Simple))
}
