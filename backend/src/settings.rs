//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `CHIRP_*` environment variables, and an
//! optional configuration file, in that order of precedence.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_USERS_FILE: &str = "users.json";
const DEFAULT_TWEETS_FILE: &str = "tweets.json";

/// Runtime configuration for the HTTP server and its JSON stores.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CHIRP")]
pub struct AppSettings {
    /// Socket address the server listens on.
    pub bind_addr: Option<SocketAddr>,
    /// Directory holding the JSON store documents.
    pub data_dir: Option<PathBuf>,
    /// User store document name inside the data directory.
    pub users_file: Option<String>,
    /// Tweet store document name inside the data directory.
    pub tweets_file: Option<String>,
    /// Create empty store documents at startup when they are missing.
    #[ortho_config(default = true)]
    pub initialise_stores: bool,
}

impl AppSettings {
    /// Listen address, defaulting to `0.0.0.0:8080`.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr.unwrap_or(SocketAddr::V4(SocketAddrV4::new(
            Ipv4Addr::UNSPECIFIED,
            DEFAULT_PORT,
        )))
    }

    /// Data directory, defaulting to the working directory.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// User store document name, defaulting to `users.json`.
    #[must_use]
    pub fn users_file(&self) -> &str {
        self.users_file.as_deref().unwrap_or(DEFAULT_USERS_FILE)
    }

    /// Tweet store document name, defaulting to `tweets.json`.
    #[must_use]
    pub fn tweets_file(&self) -> &str {
        self.tweets_file.as_deref().unwrap_or(DEFAULT_TWEETS_FILE)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const KEYS: [&str; 5] = [
        "CHIRP_BIND_ADDR",
        "CHIRP_DATA_DIR",
        "CHIRP_USERS_FILE",
        "CHIRP_TWEETS_FILE",
        "CHIRP_INITIALISE_STORES",
    ];

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("chirp-backend")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(KEYS.map(|key| (key, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), "0.0.0.0:8080".parse().expect("addr"));
        assert_eq!(settings.data_dir(), PathBuf::from("."));
        assert_eq!(settings.users_file(), "users.json");
        assert_eq!(settings.tweets_file(), "tweets.json");
        assert!(settings.initialise_stores);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("CHIRP_BIND_ADDR", Some("127.0.0.1:9090".to_owned())),
            ("CHIRP_DATA_DIR", Some("/var/lib/chirp".to_owned())),
            ("CHIRP_USERS_FILE", Some("accounts.json".to_owned())),
            ("CHIRP_TWEETS_FILE", Some("posts.json".to_owned())),
            ("CHIRP_INITIALISE_STORES", Some("false".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), "127.0.0.1:9090".parse().expect("addr"));
        assert_eq!(settings.data_dir(), PathBuf::from("/var/lib/chirp"));
        assert_eq!(settings.users_file(), "accounts.json");
        assert_eq!(settings.tweets_file(), "posts.json");
        assert!(!settings.initialise_stores);
    }
}
