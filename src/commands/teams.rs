use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::dashboard::Request;
use crate::error::BoardResult;
use crate::formatting::{print_teams, OutputFormat};

pub async fn handle_teams(context: &mut CliContext, matches: &ArgMatches) -> BoardResult<()> {
    let format = super::output_format(matches)?;
    let dashboard = context.run_requests(vec![Request::FetchTeams]).await?;

    if format == OutputFormat::Simple && !dashboard.teams().is_empty() {
        println!("Found {} teams:", dashboard.teams().len());
    }
    print_teams(dashboard.teams(), format)
}
