//! Command-line argument parsing.

/// What to do, based on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Version,
    Help,
    /// Run the interactive UI (default)
    RunTui,
}

/// Parse arguments, including the program name in first position.
///
/// Unknown arguments are ignored.
///
/// # Examples
///
/// ```
/// use sniff::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["sniff".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    for arg in args.skip(1) {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            _ => {}
        }
    }
    CliCommand::RunTui
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        parse_args(args.iter().map(|a| a.to_string()))
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse(&["sniff", "--version"]), CliCommand::Version);
        assert_eq!(parse(&["sniff", "-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_help_flag() {
        assert_eq!(parse(&["sniff", "--help"]), CliCommand::Help);
        assert_eq!(parse(&["sniff", "-h"]), CliCommand::Help);
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&["sniff"]), CliCommand::RunTui);
    }

    #[test]
    fn test_program_name_is_not_a_flag() {
        assert_eq!(parse(&["--version"]), CliCommand::RunTui);
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(parse(&["sniff", "--unknown"]), CliCommand::RunTui);
    }
}
