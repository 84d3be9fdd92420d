use clap::ArgMatches;
use colored::*;

use crate::board_error;
use crate::cli_context::CliContext;
use crate::dashboard::{Answer, Confirm, DeletePrompt};
use crate::error::{BoardError, BoardResult};
use crate::models::TeamId;

/// Interactive yes/no on the terminal.
struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&mut self, prompt: &str) -> BoardResult<bool> {
        dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|e| BoardError::TerminalError(e.to_string()))
    }
}

pub async fn handle_delete_team(context: &mut CliContext, matches: &ArgMatches) -> BoardResult<()> {
    let team_id = *matches
        .get_one::<TeamId>("id")
        .ok_or_else(|| board_error!(InvalidInput, "Team ID is required"))?;

    let prompt = DeletePrompt::new(team_id);
    let request = if matches.get_flag("yes") {
        prompt.ask(&mut Answer(true))?
    } else {
        prompt.ask(&mut TerminalConfirm)?
    };

    let Some(request) = request else {
        println!("{}", "Cancelled.".dimmed());
        return Ok(());
    };

    context.run_requests(vec![request]).await?;

    println!("{} {}", "✅".green(), "Team deleted successfully!".green().bold());
    println!("Team ID: {}", team_id);
    Ok(())
}
