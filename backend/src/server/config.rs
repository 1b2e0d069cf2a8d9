//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use camino::Utf8PathBuf;
use chirp_backend::domain::person_directory::DEFAULT_PERSON_IDS;
use chirp_backend::settings::AppSettings;

/// Resolved configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) data_dir: Utf8PathBuf,
    pub(crate) users_file: String,
    pub(crate) tweets_file: String,
    pub(crate) initialise_stores: bool,
    pub(crate) person_ids: Vec<u64>,
}

impl ServerConfig {
    /// Resolve loaded settings, applying defaults for unset values.
    ///
    /// # Errors
    /// Returns [`std::io::Error`] when the data directory is not valid UTF-8.
    pub fn from_settings(settings: &AppSettings) -> std::io::Result<Self> {
        let data_dir = Utf8PathBuf::from_path_buf(settings.data_dir()).map_err(|path| {
            std::io::Error::other(format!(
                "data directory must be valid UTF-8: {}",
                path.display()
            ))
        })?;
        Ok(Self {
            bind_addr: settings.bind_addr(),
            data_dir,
            users_file: settings.users_file().to_owned(),
            tweets_file: settings.tweets_file().to_owned(),
            initialise_stores: settings.initialise_stores,
            person_ids: DEFAULT_PERSON_IDS.to_vec(),
        })
    }
}
