//! Unified error types for the BrailleBot firmware.
//!
//! The control core never fails; these cover platform bring-up only.
//! Every adapter error converts into [`Error`] so `main` can propagate
//! with `?` and leave the report to ESP-IDF's own diagnostics.

use core::fmt;

use crate::adapters::softap::AccessPointError;
use crate::drivers::hw_init::HwInitError;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// GPIO peripheral initialisation failed.
    Init(HwInitError),
    /// Soft-AP configuration or start failed.
    Wifi(AccessPointError),
    /// The HTTP server could not start or register a route.
    Http(&'static str),
    /// The compiled-in configuration failed validation.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(e) => write!(f, "init: {e}"),
            Self::Wifi(e) => write!(f, "wifi: {e}"),
            Self::Http(msg) => write!(f, "http: {msg}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<HwInitError> for Error {
    fn from(e: HwInitError) -> Self {
        Self::Init(e)
    }
}

impl From<AccessPointError> for Error {
    fn from(e: AccessPointError) -> Self {
        Self::Wifi(e)
    }
}
