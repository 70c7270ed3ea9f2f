use anyhow::Context;
use std::time::Duration;

/// Application configuration, loaded once at startup and injected into the
/// shared state. The face credentials are required; everything else has a
/// default.
#[derive(Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub face: FaceConfig,
}

#[derive(Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Clone)]
pub struct FaceConfig {
    /// Base URL of the remote face service.
    pub endpoint: String,
    /// Credential for the remote face service.
    pub api_key: String,
    /// Interval between training-status polls after a train submission.
    pub training_poll_interval: Duration,
    /// Upper bound on how long a request waits for training to finish.
    pub training_wait: Duration,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Fails when `FACE_APIKEY` or `FACE_ENDPOINT` is absent so the process
    /// refuses to start without working credentials.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var("FACE_APIKEY").context("FACE_APIKEY is not set")?;
        let endpoint = std::env::var("FACE_ENDPOINT").context("FACE_ENDPOINT is not set")?;

        Ok(Self {
            server: ServerConfig {
                host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env_u16("SERVER_PORT", 8080),
            },
            face: FaceConfig {
                endpoint,
                api_key,
                training_poll_interval: Duration::from_secs(env_u64(
                    "TRAINING_POLL_INTERVAL_SECS",
                    5,
                )),
                training_wait: Duration::from_secs(env_u64("TRAINING_WAIT_SECS", 120)),
            },
        })
    }
}

fn env_u16(key: &str, default: u16) -> u16 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
