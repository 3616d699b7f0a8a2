//! Host driver for the stlib output runtime.
//!
//! Plays the part of generated code: each argument becomes one call into the
//! exported C ABI, in order. Nothing else is written to stdout.

mod cli;
mod script;

use anyhow::{Context, Result};
use clap::Parser;
use std::time::Duration;

use cli::Cli;
use script::parse_calls;

#[cfg(unix)]
fn close_stdout() -> Result<()> {
    if unsafe { libc::close(libc::STDOUT_FILENO) } != 0 {
        return Err(std::io::Error::last_os_error()).context("closing stdout");
    }
    Ok(())
}

#[cfg(not(unix))]
fn close_stdout() -> Result<()> {
    anyhow::bail!("--close-stdout is only supported on unix")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let calls = parse_calls(&cli.calls)?;
    let pause = Duration::from_millis(cli.pause_ms);

    // std reopens a closed fd 1 on /dev/null at startup, so a closed
    // descriptor can only be set up from inside the process.
    if cli.close_stdout {
        close_stdout()?;
    }

    let mut codes = Vec::with_capacity(calls.len());
    for call in &calls {
        if !pause.is_zero() {
            std::thread::sleep(pause);
        }
        codes.push(call.invoke());
    }

    if cli.codes {
        for code in &codes {
            eprintln!("{}", code);
        }
    }

    if cli.fail_on_error && codes.iter().any(|c| *c < 0) {
        std::process::exit(1);
    }
    Ok(())
}
