// SPDX-License-Identifier: MIT
//
// Terminal readiness: the thin edge between the renderers and a real TTY.
//
// Safety: `isatty` is a plain POSIX query with no memory effects. It is the
// only unsafe call in the crate.
#![allow(unsafe_code)]
//
// The renderers never negotiate capabilities. They assume the console
// already interprets escape sequences. On Unix terminals that is always the
// case, so `init` has nothing to do; other platforms are left to the host
// to configure. What callers usually want to know is whether stdout is a
// terminal at all, so they can skip decoration when piped into a file.

use std::io;

/// Prepare the console for escape sequences.
///
/// # Errors
///
/// Reserved for platforms where enabling escape processing can fail. On
/// Unix this always succeeds.
#[allow(clippy::unnecessary_wraps)]
pub const fn init() -> io::Result<()> {
    Ok(())
}

/// Check whether stdout is connected to a terminal (TTY).
#[cfg(unix)]
#[must_use]
pub fn stdout_is_tty() -> bool {
    unsafe { libc::isatty(libc::STDOUT_FILENO) != 0 }
}

#[cfg(not(unix))]
#[must_use]
pub const fn stdout_is_tty() -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_succeeds() {
        assert!(init().is_ok());
    }

    #[test]
    fn tty_query_does_not_panic() {
        // Result depends on how the test runner is attached.
        let _ = stdout_is_tty();
    }
}
