//! Connection settings for a particld daemon.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::Deserialize;
use url::{ParseError, Url};

use crate::error::{Error, Result};

/// Data directory used when none is configured.
pub const DEFAULT_DATA_DIR: &str = ".";

/// RPC host used when none is configured.
pub const DEFAULT_RPC_HOST: &str = "localhost";

/// particld mainnet RPC port.
pub const DEFAULT_RPC_PORT: u16 = 51735;

/// Name of the cookie file particld writes into its data directory.
pub const COOKIE_FILE_NAME: &str = ".cookie";

/// Characters escaped in URL userinfo. `%` is included so tokens survive the
/// percent-decoding done by the transport unchanged.
const USERINFO: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// On-disk config file. Every field is optional; absent, empty or
/// non-positive values leave the current setting alone.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    data_dir: Option<String>,
    rpc_host: Option<String>,
    rpc_port: Option<i64>,
}

/// Where and how to reach the daemon.
///
/// Host and port always hold a usable value. The auth token stays empty until
/// [`Config::load_credential`] (or one of the explicit setters) is called.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    data_dir: PathBuf,
    host: String,
    port: u16,
    auth_token: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            host: DEFAULT_RPC_HOST.to_string(),
            port: DEFAULT_RPC_PORT,
            auth_token: String::new(),
        }
    }
}

// The token is a credential; keep it out of debug output.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("data_dir", &self.data_dir)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("auth_token", &if self.auth_token.is_empty() { "" } else { "<redacted>" })
            .finish()
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn auth_token(&self) -> &str {
        &self.auth_token
    }

    /// Sets the daemon data directory. An empty path means `"."`.
    pub fn set_data_dir(&mut self, dir: impl AsRef<Path>) {
        let dir = dir.as_ref();
        self.data_dir = if dir.as_os_str().is_empty() {
            PathBuf::from(DEFAULT_DATA_DIR)
        } else {
            dir.to_path_buf()
        };
    }

    /// Sets the RPC host. An empty string means `"localhost"`.
    pub fn set_host(&mut self, host: impl Into<String>) {
        let host = host.into();
        self.host = if host.is_empty() {
            DEFAULT_RPC_HOST.to_string()
        } else {
            host
        };
    }

    /// Sets the RPC port. Anything outside `1..=65535` means 51735.
    pub fn set_port(&mut self, port: i64) {
        self.port = valid_port(port).unwrap_or(DEFAULT_RPC_PORT);
    }

    /// Sets the `user:password` token sent as basic auth.
    pub fn set_auth_token(&mut self, token: impl Into<String>) {
        self.auth_token = token.into();
    }

    /// Uses `rpcuser`/`rpcpassword` style credentials instead of the cookie.
    pub fn set_user_pass(&mut self, user: &str, pass: &str) {
        self.auth_token = format!("{user}:{pass}");
    }

    /// Applies the settings found in a JSON config file with the optional keys
    /// `data_dir`, `rpc_host` and `rpc_port`.
    pub fn load_config_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let file: ConfigFile =
            serde_json::from_slice(&data).map_err(|source| Error::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;

        if let Some(dir) = file.data_dir.filter(|d| !d.is_empty()) {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(host) = file.rpc_host.filter(|h| !h.is_empty()) {
            self.host = host;
        }
        if let Some(port) = file.rpc_port.and_then(valid_port) {
            self.port = port;
        }

        debug!(
            "loaded config from {}: data_dir={} host={} port={}",
            path.display(),
            self.data_dir.display(),
            self.host,
            self.port
        );
        Ok(())
    }

    /// Path of the cookie file inside the configured data directory.
    pub fn cookie_path(&self) -> PathBuf {
        self.data_dir.join(COOKIE_FILE_NAME)
    }

    /// Reads the auth token from `<data_dir>/.cookie`.
    pub fn load_credential(&mut self) -> Result<()> {
        let path = self.cookie_path();
        self.load_credential_from(path)
    }

    /// Reads the auth token from an explicit cookie file, trimming surrounding whitespace.
    pub fn load_credential_from(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let cookie = fs::read_to_string(path).map_err(|source| Error::CredentialRead {
            path: path.to_path_buf(),
            source,
        })?;
        self.auth_token = cookie.trim().to_string();
        debug!("loaded rpc credential from {}", path.display());
        Ok(())
    }

    /// Endpoint for a call: `http://<token>@<host>:<port>[/wallet/<wallet>]`.
    ///
    /// The token is split at its first `:` into user and password, each
    /// percent-encoded, so reserved characters never leak into host or path.
    pub fn url(&self, wallet: &str) -> Result<Url> {
        let mut url = Url::parse(&format!("http://{}:{}", self.host, self.port))?;
        if !wallet.is_empty() {
            url.set_path(&format!("/wallet/{wallet}"));
        }

        if !self.auth_token.is_empty() {
            let (user, pass) = match self.auth_token.split_once(':') {
                Some((user, pass)) => (user, Some(pass)),
                None => (self.auth_token.as_str(), None),
            };
            let user = utf8_percent_encode(user, USERINFO).to_string();
            let pass = pass.map(|p| utf8_percent_encode(p, USERINFO).to_string());
            // Both only fail for urls without a host, which parse() rejects for http.
            url.set_username(&user)
                .map_err(|()| Error::InvalidUrl(ParseError::EmptyHost))?;
            url.set_password(pass.as_deref())
                .map_err(|()| Error::InvalidUrl(ParseError::EmptyHost))?;
        }
        Ok(url)
    }
}

fn valid_port(port: i64) -> Option<u16> {
    u16::try_from(port).ok().filter(|p| *p > 0)
}
