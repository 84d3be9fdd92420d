use clap::ArgMatches;
use colored::*;

use crate::cli_context::CliContext;
use crate::dashboard::Request;
use crate::error::BoardResult;
use crate::formatting::{print_tickets, OutputFormat};

pub async fn handle_tickets(context: &mut CliContext, matches: &ArgMatches) -> BoardResult<()> {
    let format = super::output_format(matches)?;
    let show_all = matches.get_flag("all");
    let dashboard = context.run_requests(vec![Request::FetchTickets]).await?;

    let tickets = if show_all {
        dashboard.tickets()
    } else {
        dashboard.visible_tickets()
    };
    print_tickets(tickets, format)?;

    let hidden = dashboard.tickets().len() - tickets.len();
    if hidden > 0 && format != OutputFormat::Json {
        println!("{}", format!("{} more not shown (use --all)", hidden).dimmed());
    }
    Ok(())
}
