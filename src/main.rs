use std::process;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use taskboard_cli::cli_context::CliContext;
use taskboard_cli::commands;
use taskboard_cli::error::BoardResult;
use taskboard_cli::interactive;
use taskboard_cli::logging::{get_log_file_path, init_logging, log_error, log_info, log_panic_info};
use taskboard_cli::models::TeamId;

fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .short('f')
        .value_name("FORMAT")
        .help("Output format: simple, table, json")
        .default_value("simple")
}

fn build_cli() -> Command {
    Command::new("taskboard")
        .about("Taskboard - manage teams and browse tickets from the terminal")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand(
            Command::new("login")
                .about("Store the token used to authenticate every request")
                .arg(
                    Arg::new("token")
                        .long("token")
                        .value_name("TOKEN")
                        .help("Bearer token issued by the backend")
                        .required(true)
                )
                .arg(
                    Arg::new("api-url")
                        .long("api-url")
                        .value_name("URL")
                        .help("Backend base URL (default http://localhost:8080)")
                )
        )
        .subcommand(
            Command::new("logout")
                .about("Forget the stored token")
        )
        .subcommand(
            Command::new("status")
                .about("Show the configured backend and token")
        )
        .subcommand(
            Command::new("teams")
                .about("List your teams")
                .arg(format_arg())
        )
        .subcommand(
            Command::new("tickets")
                .about("List tickets (the first 5 unless --all)")
                .arg(
                    Arg::new("all")
                        .long("all")
                        .short('a')
                        .help("Show every ticket")
                        .action(ArgAction::SetTrue)
                )
                .arg(format_arg())
        )
        .subcommand(
            Command::new("create")
                .about("Create resources")
                .subcommand_required(true)
                .subcommand(
                    Command::new("team")
                        .about("Create a new team")
                        .arg(
                            Arg::new("name")
                                .value_name("NAME")
                                .help("Team name")
                                .required(true)
                                .index(1)
                        )
                )
        )
        .subcommand(
            Command::new("delete")
                .about("Delete resources")
                .subcommand_required(true)
                .subcommand(
                    Command::new("team")
                        .about("Delete a team")
                        .arg(
                            Arg::new("id")
                                .value_name("TEAM_ID")
                                .help("Team ID to delete")
                                .required(true)
                                .index(1)
                                .value_parser(value_parser!(TeamId))
                        )
                        .arg(
                            Arg::new("yes")
                                .long("yes")
                                .short('y')
                                .help("Skip the confirmation prompt")
                                .action(ArgAction::SetTrue)
                        )
                )
        )
        .subcommand(
            Command::new("dashboard")
                .about("Open the interactive dashboard (default)")
        )
}

async fn run(matches: ArgMatches) -> BoardResult<()> {
    let mut context = CliContext::load();

    match matches.subcommand() {
        Some(("login", sub_matches)) => commands::handle_login(&mut context, sub_matches),
        Some(("logout", _)) => commands::handle_logout(&mut context),
        Some(("status", _)) => commands::handle_status(&context),
        Some(("teams", sub_matches)) => commands::handle_teams(&mut context, sub_matches).await,
        Some(("tickets", sub_matches)) => commands::handle_tickets(&mut context, sub_matches).await,
        Some(("create", sub_matches)) => match sub_matches.subcommand() {
            Some(("team", team_matches)) => commands::handle_create_team(&mut context, team_matches).await,
            _ => unreachable_subcommand("create"),
        },
        Some(("delete", sub_matches)) => match sub_matches.subcommand() {
            Some(("team", team_matches)) => commands::handle_delete_team(&mut context, team_matches).await,
            _ => unreachable_subcommand("delete"),
        },
        Some(("dashboard", _)) | None => interactive::run_interactive_mode(&mut context).await,
        Some((other, _)) => {
            eprintln!("Unknown command '{}'. Use 'taskboard --help' for available commands.", other);
            process::exit(1);
        }
    }
}

fn unreachable_subcommand(parent: &str) -> BoardResult<()> {
    eprintln!("Unknown {} subcommand. Use 'taskboard {} --help' for available options.", parent, parent);
    process::exit(1);
}

#[tokio::main]
async fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Warning: could not initialize logging: {}", e);
    }

    std::panic::set_hook(Box::new(|info| {
        log_panic_info(info);
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(std::io::stdout(), crossterm::terminal::LeaveAlternateScreen);
        eprintln!("taskboard crashed: {}", info);
        if let Some(path) = get_log_file_path() {
            eprintln!("Details were written to {}", path.display());
        }
    }));

    let matches = build_cli().get_matches();
    log_info(&format!("Command: {:?}", matches.subcommand_name()));

    if let Err(e) = run(matches).await {
        log_error(&format!("Command failed: {}", e));
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_delete_team_parses_id() {
        let matches = build_cli()
            .try_get_matches_from(["taskboard", "delete", "team", "42", "--yes"])
            .unwrap();
        let (_, delete) = matches.subcommand().unwrap();
        let (_, team) = delete.subcommand().unwrap();
        assert_eq!(team.get_one::<TeamId>("id"), Some(&42));
        assert!(team.get_flag("yes"));
    }

    #[test]
    fn test_delete_team_rejects_non_numeric_id() {
        assert!(build_cli()
            .try_get_matches_from(["taskboard", "delete", "team", "abc"])
            .is_err());
    }
}
