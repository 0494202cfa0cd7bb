//! Browse session commands.

use std::str::FromStr;

use thiserror::Error;

use crate::config::SortMode;

/// One line of input to the browse session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the search query; an empty argument clears it
    Search(String),
    /// Select a category, or "all"
    Category(String),
    /// Change the sort mode
    Sort(SortMode),
    /// Print the link of the n-th displayed card (1-based)
    Open(usize),
    /// Reprint the current view
    Show,
    /// Print the category options
    Categories,
    /// Return every input to its default
    Reset,
    Help,
    Quit,
}

/// A line the session could not interpret.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Unknown sort mode: {0} (expected default or views)")]
    InvalidSort(String),

    #[error("Expected a card number, got: {0}")]
    InvalidCardNumber(String),

    #[error("Missing argument for {0}")]
    MissingArgument(&'static str),
}

pub const HELP: &str = "\
commands:
  search <text>      filter by title, description or category (empty clears)
  category <name>    show one category, or 'all'
  sort default|views order by catalog position or by view count
  open <n>           print the link of card n
  show               print the current results
  categories         list category options
  reset              clear search, category and sort
  help               show this message
  quit               leave";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "search" | "s" => {
                let query = rest.strip_suffix('\r').unwrap_or(rest);
                Ok(Command::Search(query.to_string()))
            }
            "category" | "c" => {
                let category = rest.trim();
                if category.is_empty() {
                    Err(CommandError::MissingArgument("category"))
                } else {
                    Ok(Command::Category(category.to_string()))
                }
            }
            "sort" => match rest.trim() {
                "default" => Ok(Command::Sort(SortMode::Default)),
                "views" => Ok(Command::Sort(SortMode::Views)),
                "" => Err(CommandError::MissingArgument("sort")),
                other => Err(CommandError::InvalidSort(other.to_string())),
            },
            "open" | "o" => {
                let arg = rest.trim();
                match arg.parse::<usize>() {
                    Ok(n) if n > 0 => Ok(Command::Open(n)),
                    _ if arg.is_empty() => Err(CommandError::MissingArgument("open")),
                    _ => Err(CommandError::InvalidCardNumber(arg.to_string())),
                }
            }
            "show" | "" => Ok(Command::Show),
            "categories" => Ok(Command::Categories),
            "reset" => Ok(Command::Reset),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            "search morning yoga".parse::<Command>(),
            Ok(Command::Search("morning yoga".to_string()))
        );
        assert_eq!("search".parse::<Command>(), Ok(Command::Search(String::new())));
        assert_eq!(
            "category pilates".parse::<Command>(),
            Ok(Command::Category("pilates".to_string()))
        );
        assert_eq!("sort views".parse::<Command>(), Ok(Command::Sort(SortMode::Views)));
        assert_eq!("sort default".parse::<Command>(), Ok(Command::Sort(SortMode::Default)));
        assert_eq!("open 2".parse::<Command>(), Ok(Command::Open(2)));
        assert_eq!("".parse::<Command>(), Ok(Command::Show));
        assert_eq!("QUIT".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn test_search_keeps_surrounding_space_of_query() {
        // Only the separator after the command word is consumed
        assert_eq!(
            "search  yoga".parse::<Command>(),
            Ok(Command::Search(" yoga".to_string()))
        );
        assert_eq!(
            "search yoga ".parse::<Command>(),
            Ok(Command::Search("yoga ".to_string()))
        );
        assert_eq!(
            "search yoga\r".parse::<Command>(),
            Ok(Command::Search("yoga".to_string()))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "dance".parse::<Command>(),
            Err(CommandError::Unknown("dance".to_string()))
        );
        assert_eq!(
            "sort newest".parse::<Command>(),
            Err(CommandError::InvalidSort("newest".to_string()))
        );
        assert_eq!(
            "open zero".parse::<Command>(),
            Err(CommandError::InvalidCardNumber("zero".to_string()))
        );
        assert_eq!(
            "open 0".parse::<Command>(),
            Err(CommandError::InvalidCardNumber("0".to_string()))
        );
        assert_eq!(
            "category".parse::<Command>(),
            Err(CommandError::MissingArgument("category"))
        );
    }
}
