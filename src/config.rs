use std::env;
use std::str::FromStr;

use tracing::warn;

use crate::recommendation::DEFAULT_INSTRUCTION_PREAMBLE;

pub const DEFAULT_GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1/models/gemini-2.5-flash-lite:generateContent";
pub const DEFAULT_TIMEOUT_MS: u64 = 20_000;

/// Settings for the outbound Gemini call
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_url: String,
    pub api_key: String,
    pub timeout_ms: u64,
}

impl GeminiConfig {
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

// Keeps the key out of `Config` debug logging.
impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_url", &self.api_url)
            .field("api_key_loaded", &self.has_api_key())
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub gemini: GeminiConfig,
    pub instruction_preamble: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_or_default("PORT", 8080),
            gemini: GeminiConfig {
                api_url: env::var("GEMINI_API_URL")
                    .unwrap_or_else(|_| DEFAULT_GEMINI_API_URL.to_string()),
                api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
                timeout_ms: parse_or_default("GEMINI_TIMEOUT_MS", DEFAULT_TIMEOUT_MS),
            },
            instruction_preamble: env::var("AI_INSTRUCTION_PREAMBLE")
                .ok()
                .filter(|preamble| !preamble.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_INSTRUCTION_PREAMBLE.to_string()),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_or_default<T: FromStr + Copy + std::fmt::Display>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Invalid value {:?} for {}, using default {}", raw, key, default);
            default
        }),
        Err(_) => default,
    }
}
