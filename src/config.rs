//! Backend API configuration derived from the current page location.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend is served from the same host as the page but on its own port,
//! so the base URL is recomputed from `window.location` at startup instead of
//! being baked into the bundle.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::error::ClientError;

pub const DEFAULT_API_PORT: u16 = 8000;
pub const API_PATH: &str = "/api";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Protocol and hostname of the page the app was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    /// Scheme including the trailing colon, e.g. `"https:"`.
    pub protocol: String,
    pub hostname: String,
}

impl PageLocation {
    pub fn new(protocol: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self { protocol: protocol.into(), hostname: hostname.into() }
    }

    /// Read `window.location`. Falls back to `http://localhost` off-browser.
    pub fn current() -> Self {
        #[cfg(feature = "csr")]
        {
            if let Some(location) = web_sys::window().map(|w| w.location()) {
                if let (Ok(protocol), Ok(hostname)) = (location.protocol(), location.hostname()) {
                    return Self { protocol, hostname };
                }
            }
        }
        Self::new("http:", "localhost")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiConfig {
    /// Base URL `<protocol>//<hostname>:8000/api` with a 60 second timeout.
    pub fn for_location(location: &PageLocation) -> Self {
        Self::with_overrides(location, DEFAULT_API_PORT, DEFAULT_REQUEST_TIMEOUT_SECS)
    }

    fn with_overrides(location: &PageLocation, port: u16, timeout_secs: u64) -> Self {
        Self {
            base_url: base_url(location, port),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Build config for `location`, applying build-time overrides.
    ///
    /// Optional (read with `option_env!` when the bundle is compiled):
    /// - `IFMS_API_PORT`: default 8000
    /// - `IFMS_API_TIMEOUT_SECS`: default 60
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Config` when an override is not a valid number.
    pub fn from_build_env(location: &PageLocation) -> Result<Self, ClientError> {
        let port = parse_port(option_env!("IFMS_API_PORT"))?;
        let timeout_secs = parse_timeout_secs(option_env!("IFMS_API_TIMEOUT_SECS"))?;
        Ok(Self::with_overrides(location, port, timeout_secs))
    }

    /// Config for the current page, falling back to defaults when a build-time
    /// override is malformed.
    pub fn load() -> Self {
        let location = PageLocation::current();
        match Self::from_build_env(&location) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("invalid API override, using defaults: {e}");
                Self::for_location(&location)
            }
        }
    }
}

fn base_url(location: &PageLocation, port: u16) -> String {
    format!("{}//{}:{port}{API_PATH}", location.protocol, location.hostname)
}

fn parse_port(raw: Option<&str>) -> Result<u16, ClientError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_API_PORT),
        Some(value) => match value.parse::<u16>() {
            Ok(0) | Err(_) => Err(ClientError::Config(format!("IFMS_API_PORT: invalid port {value:?}"))),
            Ok(port) => Ok(port),
        },
    }
}

fn parse_timeout_secs(raw: Option<&str>) -> Result<u64, ClientError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_REQUEST_TIMEOUT_SECS),
        Some(value) => match value.parse::<u64>() {
            Ok(0) | Err(_) => Err(ClientError::Config(format!("IFMS_API_TIMEOUT_SECS: invalid timeout {value:?}"))),
            Ok(secs) => Ok(secs),
        },
    }
}
