//! Command-line interface definitions for stlib_probe

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "stlib_probe",
    about = "Replay output calls through the stlib C ABI",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Calls to make, in order: str:<text>, line:<text>, int:<n>, and the
    /// NUL-terminated compatibility forms cstr:<text>, cline:<text>, cint:<n>
    #[arg(required = true)]
    pub calls: Vec<String>,

    /// Print each call's result code to stderr after the run
    #[arg(long)]
    pub codes: bool,

    /// Sleep this many milliseconds before each call
    #[arg(long = "pause-ms", default_value_t = 0)]
    pub pause_ms: u64,

    /// Close the stdout descriptor before the first call (unix only)
    #[arg(long = "close-stdout")]
    pub close_stdout: bool,

    /// Exit with status 1 if any call returned a negative result code
    #[arg(long = "fail-on-error")]
    pub fail_on_error: bool,
}
