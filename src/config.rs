//! Service configuration from environment variables.
//!
//! `main` loads a `.env` file first via dotenvy (a missing file is fine),
//! then calls [`Config::from_env`].

use std::env;
use std::path::PathBuf;

pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_PLATFORM: &str = "prod";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("FILESERVER_ROOT `{}` is not a directory", .0.display())]
    NotADirectory(PathBuf),
}

/// Central configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen address (`CHIRPY_ADDR`). Validated when the server binds.
    pub addr: String,
    /// Deployment tag (`PLATFORM`). `dev` lets `/admin/reset` also wipe users.
    pub platform: String,
    /// Directory served under `/app/` (`FILESERVER_ROOT`).
    pub fileserver_root: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let fileserver_root = get("FILESERVER_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        if !fileserver_root.is_dir() {
            return Err(ConfigError::NotADirectory(fileserver_root));
        }

        Ok(Self {
            addr: get("CHIRPY_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_owned()),
            platform: get("PLATFORM").unwrap_or_else(|| DEFAULT_PLATFORM.to_owned()),
            fileserver_root,
        })
    }

    pub fn is_dev(&self) -> bool {
        self.platform.eq_ignore_ascii_case("dev")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.addr, DEFAULT_ADDR);
        assert_eq!(config.platform, DEFAULT_PLATFORM);
        assert_eq!(config.fileserver_root, PathBuf::from("."));
        assert!(!config.is_dev());
    }

    #[test]
    fn reads_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_str().unwrap();
        let config = Config::from_lookup(lookup(&[
            ("CHIRPY_ADDR", "127.0.0.1:9000"),
            ("PLATFORM", "dev"),
            ("FILESERVER_ROOT", root),
        ]))
        .unwrap();
        assert_eq!(config.addr, "127.0.0.1:9000");
        assert!(config.is_dev());
        assert_eq!(config.fileserver_root, dir.path());
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup(&[("PLATFORM", "  ")])).unwrap();
        assert_eq!(config.platform, DEFAULT_PLATFORM);
    }

    #[test]
    fn missing_fileserver_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = Config::from_lookup(lookup(&[("FILESERVER_ROOT", missing.to_str().unwrap())]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::NotADirectory(p) if p == missing));
    }
}
