//! C ABI exports. Every C-callable symbol lives here so the public ABI
//! is easy to audit.
//!
//! The `stlib_*` entry points take an explicit `(ptr, len)` byte range. The
//! `writestr` / `writestrnewline` / `writeint` symbols keep the older
//! NUL-terminated convention for front-ends that already emit calls to them.

use libc::{c_char, c_int, c_long};
use std::ffi::CStr;

use crate::error::GatewayError;
use crate::gateway::{OutputGateway, to_result_code};

/// Borrow `len` bytes at `ptr`. A null pointer is only valid with `len == 0`.
///
/// # Safety
/// If non-null, `ptr` must point to `len` readable bytes that stay valid for
/// the duration of the call.
unsafe fn message_bytes<'a>(ptr: *const u8, len: usize) -> Result<&'a [u8], GatewayError> {
    if ptr.is_null() {
        if len == 0 {
            return Ok(&[]);
        }
        return Err(GatewayError::NullMessage { len });
    }
    Ok(unsafe { std::slice::from_raw_parts(ptr, len) })
}

/// Borrow the bytes of a NUL-terminated string, without the terminator.
/// Null is read as the empty string.
///
/// # Safety
/// If non-null, `message` must point to a NUL-terminated string that stays
/// valid for the duration of the call.
unsafe fn c_message_bytes<'a>(message: *const c_char) -> &'a [u8] {
    if message.is_null() {
        return &[];
    }
    unsafe { CStr::from_ptr(message).to_bytes() }
}

/// Write `len` bytes at `ptr` to stdout, then flush.
/// Returns the number of bytes written, or -1 on failure.
///
/// # Safety
/// `ptr` must be valid for reads of `len` bytes, or null with `len == 0`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn stlib_write_string(ptr: *const u8, len: usize) -> c_int {
    let mut gateway = OutputGateway::stdout();
    let result = match unsafe { message_bytes(ptr, len) } {
        Ok(message) => gateway.try_write_string(message),
        Err(err) => gateway.reject(err),
    };
    to_result_code("stlib_write_string", result)
}

/// Write `len` bytes at `ptr` and a newline to stdout, then flush.
/// Returns the number of bytes written including the newline, or -1 on failure.
///
/// # Safety
/// `ptr` must be valid for reads of `len` bytes, or null with `len == 0`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn stlib_write_line(ptr: *const u8, len: usize) -> c_int {
    let mut gateway = OutputGateway::stdout();
    let result = match unsafe { message_bytes(ptr, len) } {
        Ok(message) => gateway.try_write_line(message),
        Err(err) => gateway.reject(err),
    };
    to_result_code("stlib_write_line", result)
}

/// Write `value` in decimal to stdout, then flush.
/// Returns the number of characters written, or -1 on failure.
#[unsafe(no_mangle)]
pub extern "C" fn stlib_write_integer(value: i64) -> c_int {
    OutputGateway::stdout().write_integer(value)
}

/// # Safety
///
/// `message` must be a valid pointer to a null-terminated C string, or null.
/// An unterminated string is undefined behaviour.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn writestr(message: *const c_char) -> c_int {
    let bytes = unsafe { c_message_bytes(message) };
    OutputGateway::stdout().write_string(bytes)
}

/// # Safety
///
/// `message` must be a valid pointer to a null-terminated C string, or null.
/// An unterminated string is undefined behaviour.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn writestrnewline(message: *const c_char) -> c_int {
    let bytes = unsafe { c_message_bytes(message) };
    OutputGateway::stdout().write_line(bytes)
}

#[unsafe(no_mangle)]
pub extern "C" fn writeint(num: c_long) -> c_int {
    OutputGateway::stdout().write_integer(i64::from(num))
}
