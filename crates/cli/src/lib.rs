#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the command-line front-end of `bdelta`:
//!
//! ```text
//! bdelta [OPTIONS] ACTION BASE_FILE OTHER_FILE
//! ```
//!
//! `ACTION` is `diff` (write a patch turning `BASE_FILE` into `OTHER_FILE`)
//! or `patch` (apply the patch stored in `OTHER_FILE` to `BASE_FILE`).
//!
//! # Design
//!
//! [`run`] accepts an argument iterator together with handles for standard
//! output and error and returns the process exit status, so the binary and
//! the tests drive exactly the same code path. A [`clap`] command performs
//! the parse; operands are validated afterwards so `--help` and `--version`
//! work without them. The selected workflow is delegated to the `engine`
//! crate.
//!
//! # Invariants
//!
//! - `run` never panics; failures surface as non-zero exit codes with a
//!   `bdelta: ` diagnostic on standard error.
//! - Help and version output go to standard output and exit with `0`.
//! - A forced apply over a mismatched base prints a `bdelta warning: ` line
//!   and still exits with `0`.
//!
//! # Errors
//!
//! Usage errors exit with `1`. Workflow failures exit with
//! [`engine::EngineError::exit_code`].
//!
//! # Examples
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let status = cli::run(["bdelta", "--version"], &mut stdout, &mut stderr);
//!
//! assert_eq!(status, 0);
//! assert!(String::from_utf8(stdout).unwrap().starts_with("bdelta "));
//! ```

use std::env;
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

use compress::zlib::CompressionLevel;
use engine::{DiffOptions, ExitCode, PatchOptions, run_diff, run_patch};
use logging::VerbosityConfig;

mod arguments;
mod help;

pub use arguments::{Action, UnknownAction};
pub use help::{render_help, render_version};

/// Name used in diagnostics and the version banner.
pub const PROGRAM_NAME: &str = "bdelta";

/// Parser internals exposed for integration tests.
pub mod test_utils {
    pub use crate::arguments::{ParsedArgs, parse_args};
}

/// Runs the CLI using the provided argument iterator and output handles.
///
/// Returns the process exit code that should be used by the caller.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    match arguments::parse_args(arguments) {
        Ok(parsed) => execute(parsed, stdout, stderr),
        Err(error) => {
            let rendered = error.to_string();
            let text = rendered.trim_end().trim_start_matches("error: ");
            let _ = writeln!(stderr, "{PROGRAM_NAME}: {text}");
            ExitCode::Syntax.as_i32()
        }
    }
}

fn usage_error<Err: Write>(stderr: &mut Err, message: &str) -> i32 {
    let _ = writeln!(stderr, "{PROGRAM_NAME}: {message}");
    let _ = writeln!(
        stderr,
        "Usage: {PROGRAM_NAME} [OPTIONS] ACTION BASE_FILE OTHER_FILE (see --help)"
    );
    ExitCode::Syntax.as_i32()
}

fn init_logging(verbose: u8) {
    if verbose > 0 || env::var_os("RUST_LOG").is_some() {
        logging::init_tracing(VerbosityConfig::from_verbose_level(verbose));
    }
}

fn execute<Out, Err>(parsed: arguments::ParsedArgs, stdout: &mut Out, stderr: &mut Err) -> i32
where
    Out: Write,
    Err: Write,
{
    if parsed.show_help {
        return match stdout.write_all(render_help().as_bytes()) {
            Ok(()) => ExitCode::Ok.as_i32(),
            Err(_) => ExitCode::FileIo.as_i32(),
        };
    }
    if parsed.show_version {
        return match stdout.write_all(render_version().as_bytes()) {
            Ok(()) => ExitCode::Ok.as_i32(),
            Err(_) => ExitCode::FileIo.as_i32(),
        };
    }

    let [action, base, other] = match <[OsString; 3]>::try_from(parsed.operands) {
        Ok(operands) => operands,
        Err(operands) if operands.len() < 3 => {
            return usage_error(stderr, "missing ACTION, BASE_FILE or OTHER_FILE operand");
        }
        Err(operands) => {
            let extra = operands[3].to_string_lossy();
            return usage_error(stderr, &format!("unexpected operand '{extra}'"));
        }
    };

    let action = match action.to_string_lossy().parse::<Action>() {
        Ok(action) => action,
        Err(error) => return usage_error(stderr, &error.to_string()),
    };

    init_logging(parsed.verbose);
    tracing::debug!(target: "bdelta::cli", %action, "starting");

    let base = PathBuf::from(base);
    let other = PathBuf::from(other);
    let output = parsed.output.map(PathBuf::from);

    let result = match action {
        Action::Diff => {
            let mut options = DiffOptions::new().with_output(output);
            if let Some(level) = parsed.compress_level {
                match CompressionLevel::from_numeric(level) {
                    Ok(level) => options = options.with_compression_level(level),
                    Err(error) => return usage_error(stderr, &error.to_string()),
                }
            }
            if let Some(limit) = parsed.max_size {
                options = options.with_max_input_len(usize::try_from(limit).unwrap_or(usize::MAX));
            }
            run_diff(&base, &other, &options).map(|_| None)
        }
        Action::Patch => {
            let options = PatchOptions::new().with_output(output).force(parsed.force);
            run_patch(&base, &other, &options).map(|summary| summary.mismatch)
        }
    };

    match result {
        Ok(None) => ExitCode::Ok.as_i32(),
        Ok(Some(mismatch)) => {
            let _ = writeln!(
                stderr,
                "{PROGRAM_NAME} warning: base file does not match the patch (expected {}, found {}); output written because --force was given",
                mismatch.expected, mismatch.actual
            );
            ExitCode::Ok.as_i32()
        }
        Err(error) => {
            let _ = writeln!(stderr, "{PROGRAM_NAME}: {error}");
            if error.exit_code() == ExitCode::HashMismatch {
                let _ = writeln!(
                    stderr,
                    "{PROGRAM_NAME}: use --force to apply the patch anyway"
                );
            }
            error.exit_code().as_i32()
        }
    }
}

/// Converts a numeric exit code into an [`std::process::ExitCode`].
///
/// Statuses outside `0..=255`, negative ones included, become `255` so they
/// are never reported as success.
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    std::process::ExitCode::from(u8::try_from(status).unwrap_or(u8::MAX))
}
