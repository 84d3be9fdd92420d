use clap::ArgMatches;
use colored::*;

use crate::board_error;
use crate::cli_context::CliContext;
use crate::error::BoardResult;

pub fn handle_login(context: &mut CliContext, matches: &ArgMatches) -> BoardResult<()> {
    let token = matches
        .get_one::<String>("token")
        .ok_or_else(|| board_error!(InvalidInput, "Token is required"))?;
    let api_url = matches.get_one::<String>("api-url").cloned();

    context.login(token.clone(), api_url)?;

    println!("{} {}", "✅".green(), "Token saved.".green().bold());
    println!("{}: {}", "Backend".bold(), context.base_url());
    Ok(())
}

pub fn handle_logout(context: &mut CliContext) -> BoardResult<()> {
    if context.logout()? {
        println!("Token removed.");
    } else {
        println!("{}", "No token was stored.".dimmed());
    }
    Ok(())
}

pub fn handle_status(context: &CliContext) -> BoardResult<()> {
    println!("{}: {}", "Backend".bold(), context.base_url());
    match context.credentials() {
        Ok(credentials) => println!("{}: {}", "Token".bold(), credentials.masked()),
        Err(_) => println!("{}: {}", "Token".bold(), "not configured".dimmed()),
    }
    Ok(())
}
