//! Fixed-width signed integer addition.

pub mod cli;

/// Adds two integers together and returns the result.
///
/// Overflow wraps around in two's complement, in debug and release builds alike, so this never
/// panics.
///
/// # Examples
///
/// ```
/// assert_eq!(guc::add(20, 22), 42);
/// assert_eq!(guc::add(i32::MAX, 1), i32::MIN);
/// ```
#[inline]
pub const fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}
