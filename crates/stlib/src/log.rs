//! Diagnostic tracing for the runtime
//!
//! Lines go to stderr only, so enabling the trace never changes what a
//! program writes to stdout.

use std::fmt;
use std::io::{self, Write};

use crate::config::runtime_config;

pub const LOG_PREFIX: &str = "[stlib runtime]";

/// Whether `STLIB_RUNTIME_LOG` enabled tracing for this process.
pub fn enabled() -> bool {
    runtime_config().log
}

/// Write one trace line to stderr if tracing is enabled.
pub fn trace(args: fmt::Arguments<'_>) {
    if !enabled() {
        return;
    }
    let _ = write_line(&mut io::stderr().lock(), args);
}

fn write_line<W: Write>(w: &mut W, args: fmt::Arguments<'_>) -> io::Result<()> {
    writeln!(w, "{} {}", LOG_PREFIX, args)
}

/// `format!`-style wrapper around [`trace`].
#[macro_export]
macro_rules! stlib_trace {
    ($($arg:tt)*) => {
        $crate::log::trace(format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_line_has_prefix() {
        let mut out = Vec::new();
        write_line(&mut out, format_args!("write_integer failed code={}", -1)).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[stlib runtime] write_integer failed code=-1\n"
        );
    }
}
