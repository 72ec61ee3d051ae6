// src/config.rs

use std::{env, path::PathBuf, time::Duration};

use dotenvy::dotenv;
use url::Url;

use crate::error::AppError;

pub const DEFAULT_API_URL: &str = "https://api.quizrr.in/api/hiring/leaderboard";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Http,
    Fixture,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub source: SourceKind,
    pub api_url: Url,
    pub fixture_path: Option<PathBuf>,
    pub upstream_timeout: Duration,
    pub mock_viewer: bool,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    /// Reads the process environment, after loading `.env` if present.
    ///
    /// Call this once tracing is up: bad values are reported with
    /// `tracing::warn!` and replaced by defaults.
    pub fn from_env() -> Result<Self, AppError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Log filter from `RUST_LOG`, needed before the rest of the config so
    /// that configuration warnings are not lost.
    pub fn log_filter() -> String {
        dotenv().ok();
        env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let source = match lookup("LEADERBOARD_SOURCE").as_deref() {
            Some("fixture") => SourceKind::Fixture,
            Some("http") | None => SourceKind::Http,
            Some(other) => {
                tracing::warn!("Unknown LEADERBOARD_SOURCE '{}', using http", other);
                SourceKind::Http
            }
        };

        let raw_url = lookup("LEADERBOARD_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = Url::parse(&raw_url).map_err(|e| {
            AppError::InternalServerError(format!("Invalid LEADERBOARD_API_URL '{}': {}", raw_url, e))
        })?;

        let fixture_path = lookup("LEADERBOARD_FIXTURE").map(PathBuf::from);

        let upstream_timeout = Duration::from_secs(parse_or(&lookup, "UPSTREAM_TIMEOUT_SECS", 10));

        let mock_viewer = lookup("MOCK_VIEWER")
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let port = parse_or(&lookup, "PORT", 3000);

        let rust_log = lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            source,
            api_url,
            fixture_path,
            upstream_timeout,
            mock_viewer,
            port,
            rust_log,
        })
    }
}

fn parse_or<T: std::str::FromStr>(lookup: impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid {} '{}', using default", key, raw);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashMap,
        io,
        sync::{Arc, Mutex},
    };

    use super::*;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn config_from(vars: &[(&str, &str)]) -> (Result<Config, AppError>, String) {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let logs = Captured::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let config = tracing::subscriber::with_default(subscriber, || {
            Config::from_lookup(|key| vars.get(key).cloned())
        });
        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        (config, output)
    }

    #[test]
    fn defaults_when_unset() {
        let (config, logs) = config_from(&[]);
        let config = config.unwrap();

        assert_eq!(config.source, SourceKind::Http);
        assert_eq!(config.api_url.as_str(), DEFAULT_API_URL);
        assert_eq!(config.upstream_timeout, Duration::from_secs(10));
        assert_eq!(config.port, 3000);
        assert!(!config.mock_viewer);
        assert_eq!(config.rust_log, "info");
        assert!(logs.is_empty());
    }

    #[test]
    fn invalid_values_fall_back_with_a_warning() {
        let (config, logs) = config_from(&[
            ("LEADERBOARD_SOURCE", "ftp"),
            ("PORT", "eighty"),
            ("UPSTREAM_TIMEOUT_SECS", "-1"),
        ]);
        let config = config.unwrap();

        assert_eq!(config.source, SourceKind::Http);
        assert_eq!(config.port, 3000);
        assert_eq!(config.upstream_timeout, Duration::from_secs(10));
        assert!(logs.contains("WARN"));
        assert!(logs.contains("LEADERBOARD_SOURCE"));
        assert!(logs.contains("Invalid PORT 'eighty'"));
        assert!(logs.contains("Invalid UPSTREAM_TIMEOUT_SECS '-1'"));
    }

    #[test]
    fn reads_fixture_settings() {
        let (config, _) = config_from(&[
            ("LEADERBOARD_SOURCE", "fixture"),
            ("LEADERBOARD_FIXTURE", "fixtures/leaderboard.json"),
            ("MOCK_VIEWER", "TRUE"),
            ("PORT", "8080"),
        ]);
        let config = config.unwrap();

        assert_eq!(config.source, SourceKind::Fixture);
        assert_eq!(config.fixture_path, Some(PathBuf::from("fixtures/leaderboard.json")));
        assert!(config.mock_viewer);
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn unparseable_api_url_is_an_error() {
        let (config, _) = config_from(&[("LEADERBOARD_API_URL", "not a url")]);
        assert!(matches!(config, Err(AppError::InternalServerError(_))));
    }
}
