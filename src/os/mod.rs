//! Operating system abstraction layer
//!
//! This module provides a single, platform-independent entry point to the
//! operating system's secure random generator.
//!
//! Platform-specific implementations are selected at compile time using
//! conditional compilation. Each submodule exposes the same function:
//!
//! ```ignore
//! pub(crate) fn sys_random(buf: &mut [u8]) -> std::io::Result<()>;
//! ```
//!
//! On success the whole buffer is initialized with random bytes. On error
//! the buffer contents are unspecified and must not be used.

#[cfg(any(target_os = "linux", target_os = "android"))]
mod linux;

#[cfg(any(target_os = "linux", target_os = "android"))]
pub(crate) use linux::*;

#[cfg(any(target_os = "macos", target_os = "ios"))]
mod macos;

#[cfg(any(target_os = "macos", target_os = "ios"))]
pub(crate) use macos::*;

#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "windows")]
pub(crate) use windows::*;

#[cfg(not(any(target_os = "macos", target_os = "ios", target_os = "windows")))]
mod urandom;

#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "ios",
    target_os = "windows"
)))]
pub(crate) use urandom::*;
