use colored::*;

use super::utils::{format_date, format_relative_time, truncate};
use super::OutputFormat;
use crate::error::BoardResult;
use crate::models::Team;

pub fn print_teams(teams: &[Team], format: OutputFormat) -> BoardResult<()> {
    if teams.is_empty() && format != OutputFormat::Json {
        println!("{}", "No teams found.".dimmed());
        return Ok(());
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(teams)?),
        OutputFormat::Table => {
            println!("{}", "─".repeat(60).dimmed());
            println!("{:<8} {:<30} {:<12}", "ID".bold(), "Name".bold(), "Created".bold());
            println!("{}", "─".repeat(60).dimmed());
            for team in teams {
                println!(
                    "{:<8} {:<30} {:<12}",
                    team.team_id.to_string().cyan(),
                    truncate(&team.team_name, 30),
                    format_date(&team.created_at)
                );
            }
        }
        OutputFormat::Simple => {
            println!("{}", "Teams:".bold());
            for team in teams {
                println!(
                    "  {} {} {}",
                    format!("#{}", team.team_id).cyan(),
                    team.team_name,
                    format!("(created {})", format_relative_time(&team.created_at)).dimmed()
                );
            }
        }
    }

    Ok(())
}
