use serde::{Deserialize, Serialize};

const DEFAULT_ENDPOINT_URL: &str = "https://script.google.com/macros/s/AKfycby7tnDbkSUfVhh2uEh08inmURJmpF02plPRiQMmJUcEXuinFq88WZYW0GfpChx0otFJ/exec";
const DEFAULT_CACHE_KEY: &str = "dsa_nexus_cache";
const DEFAULT_PASSWORD_DIGEST: &str = "b46f6277c093cd4bb3f682b1d2f4db7454ad57af36a509f5cff7a824802f4f19";
const DEFAULT_AUTHORIZED_DIGESTS: &str = "f9d3022829fb47434e4a7a74634c7758d4a3c862d235c473a95a4382f70904c9,\
bcb464fc3b2a546d016383fe1a281208d1260d7e92be1177bc58c24c3053a5ce,\
ff526c35d6ab167652e6f51378ad03b5000f9ef91c27be8dcdca7d6e597bfe86,\
e49c2e49efbf54f5873976004e4735a09d9b332493803ba876b0478f5cfb9b1b";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub endpoint_url: String,
    pub cache_key: String,
    pub password_digest: String,
    pub authorized_digests: Vec<String>,
    pub ui_config: UIConfig,
    pub enable_logging: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UIConfig {
    pub toast_duration_ms: u32,
    pub toast_fade_ms: u32,
    pub back_to_top_threshold_px: f64,
    pub skeleton_count: usize,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: 5000,
            toast_fade_ms: 300,
            back_to_top_threshold_px: 300.0,
            skeleton_count: 3,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.to_string(),
            cache_key: DEFAULT_CACHE_KEY.to_string(),
            password_digest: DEFAULT_PASSWORD_DIGEST.to_string(),
            authorized_digests: parse_digest_list(DEFAULT_AUTHORIZED_DIGESTS),
            ui_config: UIConfig::default(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Builds the configuration from compile-time environment variables
    pub fn from_env() -> Self {
        let defaults = UIConfig::default();
        Self {
            endpoint_url: option_env!("BOARD_ENDPOINT_URL")
                .unwrap_or(DEFAULT_ENDPOINT_URL)
                .to_string(),
            cache_key: option_env!("BOARD_CACHE_KEY")
                .unwrap_or(DEFAULT_CACHE_KEY)
                .to_string(),
            password_digest: option_env!("BOARD_PASSWORD_DIGEST")
                .unwrap_or(DEFAULT_PASSWORD_DIGEST)
                .to_lowercase(),
            authorized_digests: parse_digest_list(
                option_env!("BOARD_AUTHORIZED_DIGESTS").unwrap_or(DEFAULT_AUTHORIZED_DIGESTS),
            ),
            ui_config: UIConfig {
                toast_duration_ms: option_env!("BOARD_TOAST_DURATION_MS")
                    .unwrap_or("5000")
                    .parse()
                    .unwrap_or(defaults.toast_duration_ms),
                toast_fade_ms: option_env!("BOARD_TOAST_FADE_MS")
                    .unwrap_or("300")
                    .parse()
                    .unwrap_or(defaults.toast_fade_ms),
                ..defaults
            },
            enable_logging: option_env!("BOARD_ENABLE_LOGGING")
                .unwrap_or("true")
                .parse()
                .unwrap_or(true),
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

/// Splits a comma separated digest list, dropping blanks and normalising case
pub fn parse_digest_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|d| d.trim().to_lowercase())
        .filter(|d| !d.is_empty())
        .collect()
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_list_ignores_blanks_and_case() {
        let list = parse_digest_list(" AbC1 ,, def2,\n");
        assert_eq!(list, vec!["abc1".to_string(), "def2".to_string()]);
    }

    #[test]
    fn defaults_carry_the_board_allow_list() {
        let config = AppConfig::default();
        assert_eq!(config.authorized_digests.len(), 4);
        assert_eq!(config.cache_key, "dsa_nexus_cache");
        assert_eq!(config.ui_config.toast_duration_ms, 5000);
        assert!(config.authorized_digests.iter().all(|d| d.len() == 64));
    }
}
