use std::fmt;

use anyhow::{bail, Context, Result};

const DEFAULT_ALLOWED_ORIGINS: &str = "https://resume-builder-2icz.onrender.com,http://localhost:5173";
const DEFAULT_GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Variables that must be present before the server will start.
/// The ImageKit private key is only checked for presence; no route signs
/// uploads yet.
pub const REQUIRED_ENV_VARS: &[&str] = &[
    "DATABASE_URL",
    "JWT_SECRET",
    "GROQ_API_KEY",
    "IMAGEKIT_PUBLIC_KEY",
    "IMAGEKIT_PRIVATE_KEY",
    "IMAGEKIT_URL_ENDPOINT",
];

/// Public side of the image host configuration.
#[derive(Clone)]
pub struct ImageKitConfig {
    pub public_key: String,
    pub url_endpoint: String,
}

/// Application configuration loaded from environment variables.
/// Startup aborts if any required variable is missing.
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_expiry_days: i64,
    pub groq_api_key: String,
    pub groq_api_url: String,
    pub imagekit: ImageKitConfig,
    pub allowed_origins: Vec<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    ///
    /// Every missing required key is collected before failing, so the error
    /// names all of them at once.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let missing: Vec<&str> = REQUIRED_ENV_VARS
            .iter()
            .copied()
            .filter(|key| get(key).is_none())
            .collect();
        if !missing.is_empty() {
            let list = missing
                .iter()
                .map(|key| format!("   - {key}"))
                .collect::<Vec<_>>()
                .join("\n");
            bail!("Missing required environment variables:\n{list}");
        }

        let require = |key: &str| {
            get(key).with_context(|| format!("Required environment variable '{key}' is not set"))
        };

        Ok(Config {
            database_url: require("DATABASE_URL")?,
            jwt_secret: require("JWT_SECRET")?,
            jwt_expiry_days: get("JWT_EXPIRY_DAYS")
                .unwrap_or_else(|| "7".to_string())
                .parse::<i64>()
                .context("JWT_EXPIRY_DAYS must be a whole number of days")?,
            groq_api_key: require("GROQ_API_KEY")?,
            groq_api_url: get("GROQ_API_URL").unwrap_or_else(|| DEFAULT_GROQ_API_URL.to_string()),
            imagekit: ImageKitConfig {
                public_key: require("IMAGEKIT_PUBLIC_KEY")?,
                url_endpoint: require("IMAGEKIT_URL_ENDPOINT")?,
            },
            allowed_origins: parse_origins(
                &get("CORS_ALLOWED_ORIGINS").unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_string()),
            ),
            port: get("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    #[cfg(test)]
    pub fn test_default() -> Self {
        Config {
            database_url: "postgres://localhost/resume_test".to_string(),
            jwt_secret: "test_signing_key_32_bytes_long!!".to_string(),
            jwt_expiry_days: 7,
            groq_api_key: "test-groq-key".to_string(),
            groq_api_url: DEFAULT_GROQ_API_URL.to_string(),
            imagekit: ImageKitConfig {
                public_key: "public_test".to_string(),
                url_endpoint: "https://ik.imagekit.io/test".to_string(),
            },
            allowed_origins: parse_origins(DEFAULT_ALLOWED_ORIGINS),
            port: 3000,
            rust_log: "debug".to_string(),
        }
    }
}

// Secrets stay out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"<redacted>")
            .field("jwt_secret", &"<redacted>")
            .field("jwt_expiry_days", &self.jwt_expiry_days)
            .field("groq_api_key", &"<redacted>")
            .field("groq_api_url", &self.groq_api_url)
            .field("imagekit_public_key", &self.imagekit.public_key)
            .field("imagekit_url_endpoint", &self.imagekit.url_endpoint)
            .field("allowed_origins", &self.allowed_origins)
            .field("port", &self.port)
            .field("rust_log", &self.rust_log)
            .finish()
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|o| o.trim().trim_end_matches('/').to_string())
        .filter(|o| !o.is_empty())
        .collect()
}
