use std::env;
use std::path::PathBuf;

/// Environment variable names - single source of truth
pub mod env_vars {
    /// Path of the backing notes file (usually on a mounted volume).
    pub const NOTES_PATH: &str = "NOTES_PATH";
    pub const PORT: &str = "PORT";
    pub const BIND_ADDRESS: &str = "BIND_ADDRESS";
}

/// Default values
pub mod defaults {
    pub const NOTES_PATH: &str = "/data/notes.txt";
    pub const PORT: u16 = 3000;
    pub const BIND_ADDRESS: &str = "0.0.0.0";
}

#[derive(Clone, Debug)]
pub struct Config {
    pub notes_path: PathBuf,
    pub port: u16,
    pub bind_address: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get(env_vars::PORT) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!(
                    "Invalid {} value '{}', falling back to {}",
                    env_vars::PORT,
                    raw,
                    defaults::PORT
                );
                defaults::PORT
            }),
            None => defaults::PORT,
        };

        Self {
            notes_path: get(env_vars::NOTES_PATH)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(defaults::NOTES_PATH)),
            port,
            bind_address: get(env_vars::BIND_ADDRESS)
                .unwrap_or_else(|| defaults::BIND_ADDRESS.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
