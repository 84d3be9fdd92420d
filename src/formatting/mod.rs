pub mod teams;
pub mod tickets;
pub mod utils;

use std::str::FromStr;

use crate::error::BoardError;

pub use teams::print_teams;
pub use tickets::{format_deadlines, format_priority, format_status, get_status_icon, print_tickets};
pub use utils::{format_date, format_hours, format_relative_time, truncate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Simple,
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "simple" => Ok(OutputFormat::Simple),
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(BoardError::InvalidInput(format!(
                "Unknown format '{}'. Use simple, table or json",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parse() {
        assert_eq!("TABLE".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
