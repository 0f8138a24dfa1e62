use serde::Serialize;
use std::collections::HashMap;
use std::env;
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::Path;
use url::Url;

use crate::error::{ConfigError, Result};

/// Application settings.
///
/// Every field maps to an environment variable of the same name, matched
/// case-insensitively (`SUPABASE_URL`, `supabase_url`, `Supabase_Url`). When
/// several spellings are set, the all-upper-case one wins. Variables already
/// present in the process environment win over values from a `.env` file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub app_name: String,
    pub app_version: String,
    pub environment: String,
    pub host: String,
    pub port: u16,
    /// Comma-separated list of allowed CORS origins
    pub cors_origins: String,
    pub supabase_url: String,
    pub supabase_key: String,
    /// Upstream request timeout
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: "Top SaaS Backend".to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "development".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_origins: "http://localhost:3000".to_string(),
            supabase_url: String::new(),
            supabase_key: String::new(),
            request_timeout_secs: 30,
        }
    }
}

impl Settings {
    /// Load settings from the process environment, after loading `.env`
    /// from the working directory if one exists.
    pub fn from_env() -> Result<Self> {
        load_env_file(None)?;
        Self::from_process_env()
    }

    /// Load settings from the process environment as it is now.
    pub fn from_process_env() -> Result<Self> {
        let vars = env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)));
        Self::from_vars(vars)
    }

    /// Build settings from `(name, value)` pairs, ignoring the case of names.
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut folded: HashMap<String, String> = HashMap::new();
        for (key, value) in vars {
            let upper = key == key.to_ascii_uppercase();
            let key = key.to_ascii_lowercase();
            if upper {
                folded.insert(key, value);
            } else {
                folded.entry(key).or_insert(value);
            }
        }
        Self::from_lookup(|key| folded.get(&key.to_ascii_lowercase()).cloned())
    }

    /// Build settings from an arbitrary key lookup.
    ///
    /// The lookup is asked for the upper-case name first, then lower-case.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key.to_ascii_uppercase().as_str())
                .or_else(|| lookup(key.to_ascii_lowercase().as_str()))
        };

        let mut settings = Self::default();

        if let Some(v) = get("app_name") {
            settings.app_name = v;
        }
        if let Some(v) = get("app_version") {
            settings.app_version = v;
        }
        if let Some(v) = get("environment") {
            settings.environment = v;
        }
        if let Some(v) = get("host") {
            settings.host = v;
        }
        if let Some(v) = get("port") {
            settings.port = parse_number("port", &v)?;
        }
        if let Some(v) = get("cors_origins") {
            settings.cors_origins = v;
        }
        if let Some(v) = get("supabase_url") {
            settings.supabase_url = v;
        }
        if let Some(v) = get("supabase_key") {
            settings.supabase_key = v;
        }
        if let Some(v) = get("request_timeout_secs") {
            settings.request_timeout_secs = parse_number("request_timeout_secs", &v)?;
        }

        Ok(settings)
    }

    /// Allowed CORS origins, trimmed, with empty entries dropped.
    pub fn cors_origin_list(&self) -> Vec<String> {
        self.cors_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_owned)
            .collect()
    }

    /// Resolve `host:port` into a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.to_socket_addrs()
            .ok()
            .and_then(|mut addrs| addrs.next())
            .ok_or(ConfigError::InvalidBindAddr { addr })
    }

    /// Check that the gateway settings are usable.
    pub fn validate(&self) -> Result<()> {
        if self.supabase_url.trim().is_empty() {
            return Err(ConfigError::Missing { key: "supabase_url" });
        }

        let url = Url::parse(&self.supabase_url).map_err(|e| ConfigError::InvalidUrl {
            key: "supabase_url",
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                key: "supabase_url",
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        if self.supabase_key.trim().is_empty() {
            return Err(ConfigError::Missing { key: "supabase_key" });
        }

        Ok(())
    }

    /// Copy suitable for printing: the gateway key is masked.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if !copy.supabase_key.is_empty() {
            copy.supabase_key = "********".to_string();
        }
        copy
    }
}

/// Load variables from an env file into the process environment.
///
/// With no path, a missing `.env` in the working directory is not an error.
/// An explicit path must exist.
pub fn load_env_file(path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => dotenvy::from_path(path)
            .map(|_| ())
            .map_err(|e| ConfigError::EnvFile {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }),
        None => {
            dotenvy::dotenv().ok();
            Ok(())
        }
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber {
            key,
            value: value.to_owned(),
        })
}
