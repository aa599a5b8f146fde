//! TinyC runtime library.
//!
//! Provides the four I/O primitives that compiled TinyC programs call by
//! name. This library is compiled as a static library (`staticlib`) and
//! linked with the generated `.s` object code to produce the final
//! executable.
//!
//! # ABI
//!
//! All exported functions use the C calling convention (`extern "C"`) so
//! that the hand-written assembly emitted by the code generator can call
//! them directly with `call print` / `call print_int` / etc.

use std::ffi::CStr;
use std::io::{self, Read, Write};
use std::os::raw::{c_char, c_int};

/// Converts a nullable C string pointer to `Option<&CStr>`.
///
/// # Safety
///
/// If `ptr` is non-null, it must point to a valid null-terminated C string.
unsafe fn cstr_from_nullable_ptr<'a>(ptr: *const c_char) -> Option<&'a CStr> {
    if ptr.is_null() {
        return None;
    }

    // SAFETY: The caller guarantees `ptr` is valid and null-terminated when non-null.
    Some(unsafe { CStr::from_ptr(ptr) })
}

/// Prints a string followed by a newline to stdout.
///
/// Matches `void print(char* str)` from the TinyC runtime interface. A null
/// pointer is treated as a no-op, mirroring the original C runtime's `if
/// (str)` guard.
///
/// # Safety
///
/// The caller must ensure that `str` is null or a valid null-terminated C
/// string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn print(str: *const c_char) {
    // SAFETY: `print` requires that non-null pointers are valid C strings.
    let Some(c_str) = (unsafe { cstr_from_nullable_ptr(str) }) else {
        return;
    };

    let bytes = c_str.to_bytes();
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let _ = handle.write_all(bytes);
    let _ = handle.write_all(b"\n");
}

/// Prints a 32-bit signed integer followed by a newline to stdout.
///
/// Matches `void print_int(int n)`.
#[unsafe(no_mangle)]
pub extern "C" fn print_int(n: c_int) {
    println!("{n}");
}

/// Prints a single byte followed by no newline to stdout.
///
/// Matches `void print_char(char c)`.
#[unsafe(no_mangle)]
pub extern "C" fn print_char(c: c_char) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let _ = handle.write_all(&[c as u8]);
}

/// Reads one line from stdin and parses it as a decimal integer.
///
/// Matches `int read_int(void)`. Returns `0` on empty input, a read error,
/// or input that does not parse as an integer, per spec: "returns 0 on
/// empty/invalid input".
#[unsafe(no_mangle)]
pub extern "C" fn read_int() -> c_int {
    let mut buffer = [0u8; 32];
    let bytes_read = match io::stdin().read(&mut buffer) {
        Ok(n) => n,
        Err(_) => return 0,
    };

    if bytes_read == 0 {
        return 0;
    }

    let text = String::from_utf8_lossy(&buffer[..bytes_read]);
    text.trim().parse::<c_int>().unwrap_or(0)
}
