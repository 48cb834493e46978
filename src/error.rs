//! Setup error taxonomy
//!
//! Everything that can go wrong goes wrong during setup; the steady
//! state has no detectable failures (register reads cannot fail, key
//! posts are best-effort). All three variants are fatal at startup.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SetupError {
    /// /dev/mem refused us. Needs root.
    #[error("permission denied opening /dev/mem")]
    PermissionDenied,
    #[error("failed to map GPIO register page: {0}")]
    MapFailed(#[source] io::Error),
    #[error("failed to register uinput keyboard: {0}")]
    DeviceCreateFailed(#[source] io::Error),
}

pub type SetupResult<T> = Result<T, SetupError>;

/// Classify a failure to open the physical memory device.
///
/// EACCES/EPERM mean insufficient privilege; anything else means the
/// window simply could not be established.
pub fn classify_mem_open_error(err: io::Error) -> SetupError {
    match err.raw_os_error() {
        Some(libc::EACCES) | Some(libc::EPERM) => SetupError::PermissionDenied,
        _ => SetupError::MapFailed(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eacces_is_permission_denied() {
        let err = io::Error::from_raw_os_error(libc::EACCES);
        assert!(matches!(
            classify_mem_open_error(err),
            SetupError::PermissionDenied
        ));
    }

    #[test]
    fn eperm_is_permission_denied() {
        let err = io::Error::from_raw_os_error(libc::EPERM);
        assert!(matches!(
            classify_mem_open_error(err),
            SetupError::PermissionDenied
        ));
    }

    #[test]
    fn other_errors_are_map_failures() {
        let err = io::Error::from_raw_os_error(libc::ENOENT);
        assert!(matches!(
            classify_mem_open_error(err),
            SetupError::MapFailed(_)
        ));
    }
}
