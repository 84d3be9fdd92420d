use colored::*;

use super::utils::{format_date, format_hours, truncate};
use super::OutputFormat;
use crate::error::BoardResult;
use crate::models::{Priority, Status, Ticket};

pub fn format_priority(priority: Priority) -> ColoredString {
    match priority {
        Priority::High => priority.label().red().bold(),
        Priority::Mid => priority.label().yellow(),
        Priority::Low => priority.label().blue(),
    }
}

pub fn format_status(status: Status) -> ColoredString {
    match status {
        Status::ToDo => status.label().normal(),
        Status::InProgress => status.label().yellow(),
        Status::Finished => status.label().green(),
    }
}

pub fn get_status_icon(status: Status) -> &'static str {
    match status {
        Status::ToDo => "○",
        Status::InProgress => "◐",
        Status::Finished => "✓",
    }
}

/// "due 2024-05-01", plus "done 2024-05-03" once a real deadline exists.
pub fn format_deadlines(ticket: &Ticket) -> String {
    let mut text = format!("due {}", format_date(&ticket.estimated_deadline));
    if let Some(real) = &ticket.real_deadline {
        text.push_str(&format!(", done {}", format_date(real)));
    }
    text
}

pub fn print_tickets(tickets: &[Ticket], format: OutputFormat) -> BoardResult<()> {
    if tickets.is_empty() && format != OutputFormat::Json {
        println!("{}", "No tickets found.".dimmed());
        return Ok(());
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(tickets)?),
        OutputFormat::Table => {
            println!("{}", "─".repeat(110).dimmed());
            println!(
                "{:<6} {:<36} {:<12} {:<8} {:<12} {:<12} {:<11} {:<6}",
                "ID".bold(),
                "Title".bold(),
                "Status".bold(),
                "Priority".bold(),
                "Due".bold(),
                "Done".bold(),
                "Est/Real".bold(),
                "Points".bold()
            );
            println!("{}", "─".repeat(110).dimmed());
            for ticket in tickets {
                let done = ticket
                    .real_deadline
                    .as_deref()
                    .map(format_date)
                    .unwrap_or_else(|| "-".to_string());
                let hours = format!(
                    "{}/{}",
                    format_hours(ticket.estimated_hours.as_deref()),
                    format_hours(ticket.real_hours.as_deref())
                );
                println!(
                    "{:<6} {:<36} {:<12} {:<8} {:<12} {:<12} {:<11} {:<6}",
                    ticket.task_id,
                    truncate(&ticket.title, 36),
                    format_status(ticket.status),
                    format_priority(ticket.priority),
                    format_date(&ticket.estimated_deadline),
                    done,
                    hours,
                    ticket.user_points
                );
            }
        }
        OutputFormat::Simple => {
            for ticket in tickets {
                println!(
                    "{} {} {} [{}] {}",
                    get_status_icon(ticket.status),
                    format!("#{}", ticket.task_id).bright_blue(),
                    ticket.title.bold(),
                    format_priority(ticket.priority),
                    format_status(ticket.status)
                );
                if !ticket.description.trim().is_empty() {
                    println!("    {}", truncate(ticket.description.trim(), 100).dimmed());
                }
                println!(
                    "    {} · est {} · real {} · {} pts",
                    format_deadlines(ticket).dimmed(),
                    format_hours(ticket.estimated_hours.as_deref()),
                    format_hours(ticket.real_hours.as_deref()),
                    ticket.user_points
                );
            }
        }
    }

    Ok(())
}
