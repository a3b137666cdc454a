//! Process exit codes for the `bdelta` command.
//!
//! `1` is reserved for usage errors and `11` for file I/O. Patch-specific
//! failures occupy `2` through `4`.
//!
//! # Examples
//!
//! ```
//! use engine::ExitCode;
//!
//! assert_eq!(ExitCode::HashMismatch.as_i32(), 2);
//! assert_eq!(ExitCode::from_i32(11), Some(ExitCode::FileIo));
//! ```

use std::fmt;

/// Exit codes returned by `bdelta`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ExitCode {
    /// Successful completion, including a forced apply over a mismatched base.
    Ok = 0,

    /// Syntax or usage error.
    ///
    /// Returned for unknown actions, missing operands and invalid option
    /// values.
    Syntax = 1,

    /// The base does not match the fingerprint recorded in the patch and
    /// `--force` was not given.
    HashMismatch = 2,

    /// The patch is structurally invalid.
    MalformedPatch = 3,

    /// The inputs exceed the alignment size bound.
    ResourceExhausted = 4,

    /// Reading an input or writing the output failed.
    FileIo = 11,
}

impl ExitCode {
    /// Returns the numeric exit code value.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Returns a short human-readable description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Ok => "success",
            Self::Syntax => "syntax or usage error",
            Self::HashMismatch => "base file does not match the patch",
            Self::MalformedPatch => "malformed patch",
            Self::ResourceExhausted => "inputs too large to align",
            Self::FileIo => "error in file IO",
        }
    }

    /// Returns `true` if this represents a successful exit.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Creates an exit code from an i32 value.
    #[must_use]
    pub const fn from_i32(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Ok),
            1 => Some(Self::Syntax),
            2 => Some(Self::HashMismatch),
            3 => Some(Self::MalformedPatch),
            4 => Some(Self::ResourceExhausted),
            11 => Some(Self::FileIo),
            _ => None,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.description(), self.as_i32())
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.as_i32()
    }
}
