//! Help and version text.

use crate::PROGRAM_NAME;

const HELP_TEXT: &str = concat!(
    "Usage:\n",
    "  bdelta [OPTIONS] ACTION BASE_FILE OTHER_FILE\n",
    "\n",
    "Compute and apply integrity-checked binary patches.\n",
    "\n",
    "Application Options:\n",
    "  -o, --out=FILE             Output file name.\n",
    "  -f, --force                Apply the patch even if the base file integrity\n",
    "                             check fails.\n",
    "  -v, --verbose              Increase verbosity; may be supplied multiple times.\n",
    "      --compress-level=LEVEL zlib compression level (1-9) for diff output.\n",
    "      --max-size=BYTES       Refuse to diff inputs whose combined size exceeds\n",
    "                             BYTES.\n",
    "\n",
    "Help Options:\n",
    "  -h, --help                 Show this help message and exit.\n",
    "  -V, --version              Output version information and exit.\n",
    "\n",
    "Arguments:\n",
    "  ACTION                     'diff' or 'patch' (case-insensitive).\n",
    "  BASE_FILE                  The file the patch is computed against.\n",
    "  OTHER_FILE                 The new file for diff, the patch file for patch.\n",
    "\n",
    "Action Options:\n",
    "  diff          Create a diff between BASE_FILE and OTHER_FILE\n",
    "                (default output: <BASE_FILE name>.patch)\n",
    "  patch         Update the BASE_FILE using the diff file in OTHER_FILE\n",
    "                (default output: BASE_FILE name without '.patch',\n",
    "                 or prefixed with '[PATCHED]')\n",
    "\n",
    "Exit status: 0 success, 1 usage error, 2 base file mismatch,\n",
    "3 malformed patch, 4 inputs too large, 11 file I/O error.\n",
);

/// Renders the help text.
#[must_use]
pub fn render_help() -> &'static str {
    HELP_TEXT
}

/// Renders the version banner.
#[must_use]
pub fn render_version() -> String {
    format!("{PROGRAM_NAME} {}\n", env!("CARGO_PKG_VERSION"))
}
