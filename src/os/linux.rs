//! Linux entropy
//!
//! Reads from the kernel entropy pool through the `getrandom` system call.
//! With flags set to zero the call blocks only until the pool has been
//! initialized once after boot, then never again.
//!
//! Kernels older than 3.17 lack the system call and report `ENOSYS`; those
//! are served from `/dev/urandom` instead.

use std::io;

use libc::{ENOSYS, c_void, getrandom};

use super::urandom;

/// Fills `buf` with cryptographically secure random bytes from the kernel.
///
/// Short reads and `EINTR` are retried until the buffer is full. Any other
/// failure is returned as the underlying OS error.
pub(crate) fn sys_random(buf: &mut [u8]) -> io::Result<()> {
    fill_with(buf, syscall, urandom::sys_random)
}

fn syscall(rest: &mut [u8]) -> io::Result<usize> {
    let ret = unsafe { getrandom(rest.as_mut_ptr() as *mut c_void, rest.len(), 0) };

    if ret < 0 {
        return Err(io::Error::last_os_error());
    }

    Ok(ret as usize)
}

fn fill_with<F, B>(buf: &mut [u8], mut read: F, fallback: B) -> io::Result<()>
where
    F: FnMut(&mut [u8]) -> io::Result<usize>,
    B: FnOnce(&mut [u8]) -> io::Result<()>,
{
    let mut filled = 0;

    while filled < buf.len() {
        match read(&mut buf[filled..]) {
            Ok(n) => filled += n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) if err.raw_os_error() == Some(ENOSYS) => return fallback(buf),
            Err(err) => return Err(err),
        }
    }

    Ok(())
}
