use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChatError, Result};

pub const DEFAULT_CONFIG_PATH: &str = "config/chat_plus.json";
pub const DEFAULT_REPLY_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Độ trễ trước khi liên hệ "trả lời" (ms)
    pub reply_delay_ms: u64,
    pub dark_mode: bool,
    /// Seed cố định cho các câu trả lời ngẫu nhiên; `None` dùng entropy hệ thống
    pub rng_seed: Option<u64>,
    pub user_name: String,
    pub window_title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
            dark_mode: false,
            rng_seed: None,
            user_name: "Maheswari Sugumanchi".to_string(),
            window_title: "Chat Plus".to_string(),
        }
    }
}

pub fn read_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path).map_err(|source| ChatError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str::<AppConfig>(&content).map_err(|source| ChatError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_config(path: &str) -> AppConfig {
    match read_config(Path::new(path)) {
        Ok(config) => config,
        Err(err @ ChatError::ConfigRead { .. }) => {
            log::info!("{err}; using defaults");
            AppConfig::default()
        }
        Err(err) => {
            log::warn!("{err}; using defaults");
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let err = read_config(&path).unwrap_err();
        assert!(matches!(err, ChatError::ConfigRead { .. }));
        assert_eq!(load_config(path.to_str().unwrap()), AppConfig::default());
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "reply_delay_ms": 250, "dark_mode": true }}"#).unwrap();

        let config = load_config(file.path().to_str().unwrap());
        assert_eq!(config.reply_delay_ms, 250);
        assert!(config.dark_mode);
        assert_eq!(config.rng_seed, None);
        assert_eq!(config.window_title, "Chat Plus");
    }

    #[test]
    fn malformed_file_reports_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = read_config(file.path()).unwrap_err();
        assert!(matches!(err, ChatError::ConfigParse { .. }));
        assert_eq!(
            load_config(file.path().to_str().unwrap()),
            AppConfig::default()
        );
    }
}
