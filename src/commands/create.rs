use clap::ArgMatches;
use colored::*;

use crate::board_error;
use crate::cli_context::CliContext;
use crate::dashboard::create_team_request;
use crate::error::{BoardResult, ErrorContext};
use crate::formatting::{print_teams, OutputFormat};

pub async fn handle_create_team(context: &mut CliContext, matches: &ArgMatches) -> BoardResult<()> {
    let name = matches
        .get_one::<String>("name")
        .ok_or_else(|| board_error!(InvalidInput, "Team name is required"))?;
    let request = create_team_request(name, 0)?;

    // The follow-up fetch replaces the list, so what we print is server truth
    let dashboard = context
        .run_requests(vec![request])
        .await
        .with_context(|| format!("Creating team '{}'", name.trim()))?;

    println!("{} {}", "✅".green(), "Team created successfully!".green().bold());
    print_teams(dashboard.teams(), OutputFormat::Simple)
}
