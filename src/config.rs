use std::env;

use secrecy::SecretString;

use crate::errors::{AppError, AppResult};

pub const DEFAULT_MONGODB_DB: &str = "quizdb";
pub const DEFAULT_RESULTS_COLLECTION: &str = "results";
pub const DEFAULT_ZEPTOMAIL_FROM: &str = "no-reply@example.com";
pub const DEFAULT_ZEPTOMAIL_URL: &str = "https://api.zeptomail.com/";

#[derive(Clone, Debug)]
pub struct Config {
    pub mongodb_uri: String,
    pub mongodb_db: String,
    pub results_collection: String,
    pub zeptomail_url: String,
    pub zeptomail_token: Option<SecretString>,
    pub zeptomail_from: String,
    pub mail_from_name: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origin: String,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key/value source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mongodb_uri = get("MONGODB_URI").ok_or_else(|| {
            AppError::ConfigError("MONGODB_URI must be set".to_string())
        })?;

        Ok(Self {
            mongodb_uri,
            mongodb_db: get("MONGODB_DB").unwrap_or_else(|| DEFAULT_MONGODB_DB.to_string()),
            results_collection: get("RESULTS_COLLECTION")
                .unwrap_or_else(|| DEFAULT_RESULTS_COLLECTION.to_string()),
            zeptomail_url: get("ZEPTOMAIL_URL")
                .unwrap_or_else(|| DEFAULT_ZEPTOMAIL_URL.to_string()),
            zeptomail_token: get("ZEPTOMAIL_TOKEN").map(SecretString::from),
            zeptomail_from: get("ZEPTOMAIL_FROM")
                .unwrap_or_else(|| DEFAULT_ZEPTOMAIL_FROM.to_string()),
            mail_from_name: "Quiz App".to_string(),
            web_server_host: get("WEB_SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            web_server_port: get("WEB_SERVER_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            cors_allowed_origin: get("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|| "http://localhost:3000".to_string()),
        })
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongodb_uri: "mongodb://localhost:27017".to_string(),
            mongodb_db: "quizdb-test".to_string(),
            results_collection: DEFAULT_RESULTS_COLLECTION.to_string(),
            zeptomail_url: "http://127.0.0.1:9/".to_string(),
            zeptomail_token: Some(SecretString::from("test-token".to_string())),
            zeptomail_from: DEFAULT_ZEPTOMAIL_FROM.to_string(),
            mail_from_name: "Quiz App".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            cors_allowed_origin: "http://localhost:3000".to_string(),
        }
    }
}
