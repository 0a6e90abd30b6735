use std::{path::PathBuf, str::FromStr, time::Duration};

use thiserror::Error;

use crate::{
    embed::config::EmbedConfig,
    splash::timer::{DOT_PERIOD, SPLASH_DURATION},
};

pub const MARQUEE_THRESHOLD: usize = 15;
pub const BUTTON_RELEASE: Duration = Duration::from_millis(150);

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub embed: EmbedConfig,
    pub click_sound: Option<PathBuf>,
    pub marquee_threshold: usize,
    pub splash_duration: Duration,
    pub dot_period: Duration,
    pub button_release: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            embed: EmbedConfig::default(),
            click_sound: None,
            marquee_threshold: MARQUEE_THRESHOLD,
            splash_duration: SPLASH_DURATION,
            dot_period: DOT_PERIOD,
            button_release: BUTTON_RELEASE,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(id) = get("CASSETTE_PLAYLIST_ID") {
            config.embed.playlist_id = id.trim().to_string();
        }
        if let Some(path) = get("CASSETTE_MPV_PATH") {
            config.embed.mpv_path = path;
        }
        if let Some(autoplay) = get("CASSETTE_AUTOPLAY") {
            config.embed.autoplay = parse_flag("CASSETTE_AUTOPLAY", &autoplay)?;
        }
        config.click_sound = get("CASSETTE_CLICK_SOUND").map(PathBuf::from);
        if let Some(threshold) = get("CASSETTE_MARQUEE_THRESHOLD") {
            config.marquee_threshold = parse("CASSETTE_MARQUEE_THRESHOLD", &threshold)?;
        }
        if let Some(ms) = get("CASSETTE_SPLASH_MS") {
            config.splash_duration = Duration::from_millis(parse("CASSETTE_SPLASH_MS", &ms)?);
        }

        Ok(config)
    }
}

fn parse<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        }),
    }
}
