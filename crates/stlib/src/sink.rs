//! Process standard output as a gateway sink

use std::io::{self, IoSlice, Write};

/// Standard output, opened for the duration of each operation.
///
/// On unix the bytes go straight to fd 1 with `writev`, so a closed or
/// invalid descriptor surfaces as `EBADF` instead of being swallowed the way
/// `std::io::stdout()` does. The std stdout lock is held across the write,
/// after draining anything Rust code buffered there, so one call's parts
/// reach the descriptor in a single syscall and in program order.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

#[cfg(unix)]
fn writev_stdout(bufs: &[IoSlice<'_>]) -> io::Result<usize> {
    // IoSlice is ABI compatible with iovec on unix.
    let count = bufs.len().min(libc::c_int::MAX as usize) as libc::c_int;
    loop {
        let n = unsafe {
            libc::writev(
                libc::STDOUT_FILENO,
                bufs.as_ptr() as *const libc::iovec,
                count,
            )
        };
        if n >= 0 {
            return Ok(n as usize);
        }
        let err = io::Error::last_os_error();
        if err.kind() != io::ErrorKind::Interrupted {
            return Err(err);
        }
    }
}

impl Write for StdoutSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_vectored(&[IoSlice::new(buf)])
    }

    #[cfg(unix)]
    fn write_vectored(&mut self, bufs: &[IoSlice<'_>]) -> io::Result<usize> {
        let mut std_out = io::stdout().lock();
        std_out.flush()?;
        writev_stdout(bufs)
    }

    #[cfg(not(unix))]
    fn write_vectored(&mut self, bufs: &[IoSlice<'_>]) -> io::Result<usize> {
        io::stdout().lock().write_vectored(bufs)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }
}
