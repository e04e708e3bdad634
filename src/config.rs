use std::{env, path::PathBuf};

use crate::Topology;

pub const DEFAULT_SAVE_FILE: &str = "golterm.json";
pub const DEFAULT_LOG_FILE: &str = "golterm.log";

#[derive(Debug, Clone)]
pub struct Config {
    /// where `s` writes and `9` reads the saved state
    pub save_path: PathBuf,
    pub log_path: PathBuf,
    pub topology: Topology,
    /// chance for each cell to start alive on `r`
    pub density: f64,
    /// fixed seed for the random fill, entropy when `None`
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from(DEFAULT_SAVE_FILE),
            log_path: env::temp_dir().join(DEFAULT_LOG_FILE),
            topology: Topology::default(),
            density: 0.5,
            seed: None,
        }
    }
}

impl Config {
    /// Reads the optional save path from the first positional argument.
    pub fn from_args(mut args: impl Iterator<Item = String>) -> Self {
        let mut config = Self::default();
        if let Some(path) = args.nth(1) {
            config.save_path = PathBuf::from(path);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn defaults_without_arguments() {
        let config = Config::from_args(args(&["golterm"]));
        assert_eq!(config.save_path, PathBuf::from(DEFAULT_SAVE_FILE));
        assert_eq!(config.topology, Topology::Bounded);
        assert_eq!(config.density, 0.5);
    }

    #[test]
    fn positional_argument_overrides_save_path() {
        let config = Config::from_args(args(&["golterm", "/tmp/mine.json"]));
        assert_eq!(config.save_path, PathBuf::from("/tmp/mine.json"));
    }
}
