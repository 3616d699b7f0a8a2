//! Output gateway
//!
//! Turns the three payload shapes (raw string, string plus newline, integer)
//! into bytes on a sink. Every call flushes the sink before returning,
//! whether or not the write succeeded. That costs one sink flush per call
//! and is what makes each call's output visible as soon as it returns.

use libc::c_int;
use std::io::{self, IoSlice, Write};

use crate::decimal::{MAX_DECIMAL_LEN, render_i64};
use crate::error::{GatewayError, Result, WRITE_FAILED};
use crate::sink::StdoutSink;
use crate::stlib_trace;

/// Signed result of an ABI-level call: a byte count, or [`WRITE_FAILED`].
pub type ResultCode = c_int;

#[derive(Debug, Default)]
pub struct OutputGateway<W: Write> {
    sink: W,
}

impl OutputGateway<StdoutSink> {
    /// A gateway over the process's standard output.
    pub fn stdout() -> Self {
        Self::new(StdoutSink)
    }
}

impl<W: Write> OutputGateway<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    /// Write `message` verbatim. Returns the number of bytes written.
    pub fn try_write_string(&mut self, message: &[u8]) -> Result<usize> {
        self.deliver(&[message])
    }

    /// Write `message` followed by `\n`. The count includes the newline.
    pub fn try_write_line(&mut self, message: &[u8]) -> Result<usize> {
        self.deliver(&[message, b"\n".as_slice()])
    }

    /// Write `value` as decimal text. Returns the number of characters written.
    pub fn try_write_integer(&mut self, value: i64) -> Result<usize> {
        let mut buf = [0u8; MAX_DECIMAL_LEN];
        let digits = render_i64(value, &mut buf);
        self.deliver(&[digits])
    }

    pub fn write_string(&mut self, message: &[u8]) -> ResultCode {
        to_result_code("write_string", self.try_write_string(message))
    }

    pub fn write_line(&mut self, message: &[u8]) -> ResultCode {
        to_result_code("write_line", self.try_write_line(message))
    }

    pub fn write_integer(&mut self, value: i64) -> ResultCode {
        to_result_code("write_integer", self.try_write_integer(value))
    }

    /// Flush without writing anything, for calls rejected before the write.
    /// The flush result is ignored because the call has already failed.
    pub(crate) fn reject(&mut self, err: GatewayError) -> Result<usize> {
        let _ = self.sink.flush();
        Err(err)
    }

    fn deliver(&mut self, parts: &[&[u8]]) -> Result<usize> {
        let written = write_all_parts(&mut self.sink, parts);
        // Flush even if the write failed, so partially buffered bytes still go out.
        let flushed = self.sink.flush();

        match (written, flushed) {
            (Err(err), _) => Err(GatewayError::write(err)),
            (Ok(()), Err(err)) => Err(GatewayError::flush(err)),
            (Ok(()), Ok(())) => Ok(parts.iter().map(|part| part.len()).sum()),
        }
    }
}

/// Write every part, handing them to the sink together so a line and its
/// newline go out in one write when the sink supports vectored writes.
fn write_all_parts<W: Write>(sink: &mut W, parts: &[&[u8]]) -> io::Result<()> {
    let mut slices: Vec<IoSlice<'_>> = parts.iter().map(|part| IoSlice::new(part)).collect();
    let mut bufs = &mut slices[..];
    IoSlice::advance_slices(&mut bufs, 0);

    while !bufs.is_empty() {
        match sink.write_vectored(bufs) {
            Ok(0) => return Err(io::Error::from(io::ErrorKind::WriteZero)),
            Ok(n) => IoSlice::advance_slices(&mut bufs, n),
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

/// Collapse a typed result into the signed ABI result code.
///
/// Counts that do not fit in a `c_int` saturate at `c_int::MAX`.
pub fn to_result_code(op: &str, result: Result<usize>) -> ResultCode {
    match result {
        Ok(n) => ResultCode::try_from(n).unwrap_or(ResultCode::MAX),
        Err(err) => {
            stlib_trace!("{} failed: {} (code {})", op, err, err.code());
            WRITE_FAILED
        }
    }
}
