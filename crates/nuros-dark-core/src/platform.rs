//! Host platform gate.
//!
//! The declarative shell refuses to start anywhere but Linux. The check is a
//! pure function of the OS name so it can be exercised on any host.

use crate::error::{Error, Result};

/// The only host the shells are built for, as in `std::env::consts::OS`.
pub const SUPPORTED_OS: &str = "linux";

/// OS name of the running host.
pub fn host_os() -> &'static str {
    std::env::consts::OS
}

pub fn ensure_supported(os: &str) -> Result<()> {
    if os == SUPPORTED_OS {
        log::debug!("host platform {os} supported");
        Ok(())
    } else {
        Err(Error::UnsupportedPlatform { os: os.to_string() })
    }
}

pub fn ensure_supported_host() -> Result<()> {
    ensure_supported(host_os())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linux_is_accepted() {
        assert!(ensure_supported("linux").is_ok());
    }

    #[test]
    fn others_are_rejected_with_the_exact_message() {
        for os in ["windows", "macos", "freebsd", "android", ""] {
            let err = ensure_supported(os).unwrap_err();
            assert!(matches!(&err, Error::UnsupportedPlatform { os: o } if o == os));
            assert_eq!(
                err.to_string(),
                "This application is designed to run only on Linux!"
            );
        }
    }

    #[test]
    fn host_matches_compile_target() {
        assert_eq!(ensure_supported_host().is_ok(), cfg!(target_os = "linux"));
    }
}
