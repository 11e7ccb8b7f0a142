//! Generic Unix entropy
//!
//! Fallback for targets without a dedicated system call wrapper: the
//! device is opened on each call and closed when the handle drops.

use std::fs::File;
use std::io::{self, Read};

pub(crate) fn sys_random(buf: &mut [u8]) -> io::Result<()> {
    File::open("/dev/urandom")?.read_exact(buf)
}
