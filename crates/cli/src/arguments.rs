//! Command-line parsing.

use std::ffi::OsString;
use std::fmt;
use std::str::FromStr;

use clap::{Arg, ArgAction, Command, builder::OsStringValueParser, value_parser};

use crate::PROGRAM_NAME;

/// Workflow selected by the `ACTION` operand.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Action {
    /// Build a patch from `BASE_FILE` to `OTHER_FILE`.
    Diff,
    /// Apply the patch in `OTHER_FILE` to `BASE_FILE`.
    Patch,
}

impl Action {
    /// Lowercase action name as typed on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Diff => "diff",
            Self::Patch => "patch",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for an `ACTION` other than `diff` or `patch`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownAction {
    action: String,
}

impl fmt::Display for UnknownAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown action '{}': expected 'diff' or 'patch'",
            self.action
        )
    }
}

impl std::error::Error for UnknownAction {}

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if text.eq_ignore_ascii_case("diff") {
            Ok(Self::Diff)
        } else if text.eq_ignore_ascii_case("patch") {
            Ok(Self::Patch)
        } else {
            Err(UnknownAction {
                action: text.to_owned(),
            })
        }
    }
}

/// Parsed command-line state before any validation of the operands.
///
/// **Warning**: This type is exposed via `cli::test_utils` for integration
/// tests; it is not a stable interface.
#[derive(Debug, Default)]
pub struct ParsedArgs {
    /// `-h`/`--help` was given.
    pub show_help: bool,
    /// `-V`/`--version` was given.
    pub show_version: bool,
    /// Number of `-v` flags.
    pub verbose: u8,
    /// `-f`/`--force` was given.
    pub force: bool,
    /// `-o`/`--out` value.
    pub output: Option<OsString>,
    /// `--compress-level` value.
    pub compress_level: Option<u32>,
    /// `--max-size` value.
    pub max_size: Option<u64>,
    /// Positional operands in order: action, base file, other file.
    pub operands: Vec<OsString>,
}

fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg_required_else_help(false)
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .help("Show this help message and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .short('V')
                .help("Output version information and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase verbosity; may be supplied multiple times.")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("out")
                .long("out")
                .short('o')
                .value_name("FILE")
                .help("Output file name.")
                .value_parser(OsStringValueParser::new())
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("force")
                .long("force")
                .short('f')
                .help("Apply the patch even if the base file integrity check fails.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("compress-level")
                .long("compress-level")
                .value_name("LEVEL")
                .help("zlib compression level (1-9) for diff output.")
                .value_parser(value_parser!(u32).range(1..=9))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("max-size")
                .long("max-size")
                .value_name("BYTES")
                .help("Refuse to diff inputs whose combined size exceeds BYTES.")
                .value_parser(value_parser!(u64))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("operands")
                .value_name("ACTION BASE_FILE OTHER_FILE")
                .num_args(0..)
                .value_parser(OsStringValueParser::new())
                .action(ArgAction::Append),
        )
}

/// Parses command-line arguments into a [`ParsedArgs`] structure.
pub fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();

    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let mut matches = clap_command().try_get_matches_from(args)?;

    Ok(ParsedArgs {
        show_help: matches.get_flag("help"),
        show_version: matches.get_flag("version"),
        verbose: matches.get_count("verbose"),
        force: matches.get_flag("force"),
        output: matches.remove_one::<OsString>("out"),
        compress_level: matches.remove_one::<u32>("compress-level"),
        max_size: matches.remove_one::<u64>("max-size"),
        operands: matches
            .remove_many::<OsString>("operands")
            .map(Iterator::collect)
            .unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_is_case_insensitive() {
        assert_eq!("DIFF".parse::<Action>(), Ok(Action::Diff));
        assert_eq!("Patch".parse::<Action>(), Ok(Action::Patch));
        assert!("merge".parse::<Action>().is_err());
    }

    #[test]
    fn unknown_action_message_names_the_action() {
        let err = "merge".parse::<Action>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown action 'merge': expected 'diff' or 'patch'"
        );
    }

    #[test]
    fn flags_and_operands_are_collected() {
        let parsed = parse_args([
            "bdelta", "-vv", "-f", "-o", "out.bin", "patch", "base", "p.patch",
        ])
        .unwrap();
        assert_eq!(parsed.verbose, 2);
        assert!(parsed.force);
        assert_eq!(parsed.output, Some(OsString::from("out.bin")));
        assert_eq!(parsed.operands, ["patch", "base", "p.patch"]);
    }

    #[test]
    fn compress_level_is_range_checked() {
        assert_eq!(
            parse_args(["bdelta", "--compress-level", "9", "diff", "a", "b"])
                .unwrap()
                .compress_level,
            Some(9)
        );
        assert!(parse_args(["bdelta", "--compress-level", "0", "diff", "a", "b"]).is_err());
        assert!(parse_args(["bdelta", "--compress-level", "10", "diff", "a", "b"]).is_err());
    }

    #[test]
    fn empty_arguments_parse() {
        let parsed = parse_args(Vec::<OsString>::new()).unwrap();
        assert!(parsed.operands.is_empty());
    }
}
