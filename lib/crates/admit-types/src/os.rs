//! Platform constants consumed by identifier validation.

/// Maximum length in bytes of a single path component.
#[cfg(not(windows))]
pub const NAME_MAX: usize = 255;

/// Maximum length in bytes of a single path component (`MAX_PATH`).
#[cfg(windows)]
pub const NAME_MAX: usize = 260;

pub const POSIX_PATH_SEPARATOR: char = '/';
pub const WINDOWS_PATH_SEPARATOR: char = '\\';
