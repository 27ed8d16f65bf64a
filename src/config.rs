//! Service configuration
//!
//! Read once at startup from the environment (and `.env`, if present).
//! Handlers only ever see an immutable copy.

use crate::error::AdvisorError;
use crate::speech::google::DEFAULT_ENDPOINT;
use crate::Result;
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";
const DEFAULT_FRONTEND_DIR: &str = "../Frontend";
const DEFAULT_TTS_LANGUAGE: &str = "en";
const DEFAULT_TTS_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TtsBackend {
    Google,
    Mock,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_address: IpAddr,
    pub port: u16,
    /// Directory holding the static client (index.html, forgotpassword.html, ...)
    pub frontend_dir: PathBuf,
    pub tts_backend: TtsBackend,
    pub tts_endpoint: String,
    pub tts_language: String,
    pub tts_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_address: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            frontend_dir: PathBuf::from(DEFAULT_FRONTEND_DIR),
            tts_backend: TtsBackend::Google,
            tts_endpoint: DEFAULT_ENDPOINT.to_string(),
            tts_language: DEFAULT_TTS_LANGUAGE.to_string(),
            tts_timeout: Duration::from_secs(DEFAULT_TTS_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    /// Load `.env` and read the process environment
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT").or_else(|| lookup("API_PORT")) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| AdvisorError::ConfigError(format!("Invalid port {:?}: {}", raw, e)))?,
            None => DEFAULT_PORT,
        };

        let bind_address = lookup("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .trim()
            .parse::<IpAddr>()?;

        let tts_backend = match lookup("TTS_BACKEND").as_deref().map(str::trim) {
            None | Some("") | Some("google") => TtsBackend::Google,
            Some("mock") => TtsBackend::Mock,
            Some(other) => {
                return Err(AdvisorError::ConfigError(format!(
                    "Unknown TTS_BACKEND {:?} (expected \"google\" or \"mock\")",
                    other
                )))
            }
        };

        let tts_timeout = match lookup("TTS_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(raw.trim().parse::<u64>().map_err(|e| {
                AdvisorError::ConfigError(format!("Invalid TTS_TIMEOUT_SECS {:?}: {}", raw, e))
            })?),
            None => Duration::from_secs(DEFAULT_TTS_TIMEOUT_SECS),
        };

        Ok(Self {
            bind_address,
            port,
            frontend_dir: lookup("FRONTEND_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_FRONTEND_DIR)),
            tts_backend,
            tts_endpoint: lookup("TTS_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            tts_language: lookup("TTS_LANGUAGE").unwrap_or_else(|| DEFAULT_TTS_LANGUAGE.to_string()),
            tts_timeout,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }
}
