//! Line parsing for the interactive session

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command: /{0} (try /help)")]
    Unknown(String),
}

/// One line typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Raw ticker field value, validated later by the page
    Ticker { raw: String },
    /// Probe the backend
    Health,
    /// Show help
    Help,
    /// Leave the session
    Exit,
}

impl Command {
    /// Parse a line from the prompt.
    ///
    /// Anything not starting with `/` is treated as the new ticker field
    /// value, including an empty line.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let input = input.trim();

        let Some(rest) = input.strip_prefix('/') else {
            return Ok(Command::Ticker {
                raw: input.to_string(),
            });
        };

        let mut parts = rest.split_whitespace();
        let cmd = parts.next().unwrap_or_default().to_lowercase();

        match cmd.as_str() {
            "analyze" | "a" => Ok(Command::Ticker {
                raw: parts.collect::<Vec<_>>().join(" "),
            }),
            "health" => Ok(Command::Health),
            "help" | "h" | "?" => Ok(Command::Help),
            "exit" | "quit" | "q" => Ok(Command::Exit),
            _ => Err(CommandError::Unknown(cmd)),
        }
    }

    pub fn help_text() -> &'static str {
        "Type a ticker symbol (1-5 letters, e.g. AAPL) and press Enter.\n\
        /analyze <symbol> - Same as typing the symbol\n\
        /health           - Check the analysis service\n\
        /help             - Show help\n\
        /quit             - Exit"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_line_is_ticker() {
        assert_eq!(
            Command::parse("aapl\n").unwrap(),
            Command::Ticker {
                raw: "aapl".to_string()
            }
        );
        assert_eq!(
            Command::parse("   ").unwrap(),
            Command::Ticker { raw: String::new() }
        );
    }

    #[test]
    fn test_analyze_command_passes_raw_argument() {
        assert_eq!(
            Command::parse("/analyze msft").unwrap(),
            Command::Ticker {
                raw: "msft".to_string()
            }
        );
        assert_eq!(
            Command::parse("/a BRK B").unwrap(),
            Command::Ticker {
                raw: "BRK B".to_string()
            }
        );
    }

    #[test]
    fn test_slash_commands() {
        assert_eq!(Command::parse("/health").unwrap(), Command::Health);
        assert_eq!(Command::parse("/HELP").unwrap(), Command::Help);
        assert_eq!(Command::parse("/?").unwrap(), Command::Help);
        assert_eq!(Command::parse("/quit").unwrap(), Command::Exit);
        assert_eq!(Command::parse("/exit").unwrap(), Command::Exit);
        assert_eq!(Command::parse("/q").unwrap(), Command::Exit);
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            Command::parse("/frobnicate"),
            Err(CommandError::Unknown("frobnicate".to_string()))
        );
        assert_eq!(Command::parse("/"), Err(CommandError::Unknown(String::new())));
    }
}
