//! Server configuration
//!
//! All settings come from the process environment at startup. Required
//! variables that are missing fail the process immediately instead of
//! surfacing on the first request.

use deckforge_gemini::DEFAULT_MODEL;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string
    pub database_url: String,
    /// API key for the Gemini generateContent endpoint
    pub gemini_api_key: String,
    /// Model identifier used for outline generation
    pub gemini_model: String,
    /// Address the HTTP server binds to
    pub bind_addr: String,
    /// Frontend origin allowed by CORS
    pub cors_origin: String,
}

impl Config {
    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - DATABASE_URL (required)
    /// - GEMINI_API_KEY (required)
    /// - GEMINI_MODEL (optional, default: gemini-2.5-flash)
    /// - BIND_ADDR (optional, default: 0.0.0.0:8000)
    /// - CORS_ORIGIN (optional, default: http://localhost:5173)
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable not set"))?;

        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| anyhow::anyhow!("GEMINI_API_KEY environment variable not set"))?;

        let gemini_model =
            std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());

        let cors_origin =
            std::env::var("CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:5173".to_string());

        let config = Self {
            database_url,
            gemini_api_key,
            gemini_model,
            bind_addr,
            cors_origin,
        };
        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.database_url.is_empty() {
            anyhow::bail!("database_url cannot be empty");
        }

        if self.gemini_api_key.is_empty() {
            anyhow::bail!("gemini_api_key cannot be empty");
        }

        if self.gemini_model.is_empty() {
            anyhow::bail!("gemini_model cannot be empty");
        }

        if self.bind_addr.is_empty() {
            anyhow::bail!("bind_addr cannot be empty");
        }

        if self.cors_origin.is_empty() {
            anyhow::bail!("cors_origin cannot be empty");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            database_url: "postgres://localhost/deckforge".to_string(),
            gemini_api_key: "test-key".to_string(),
            gemini_model: DEFAULT_MODEL.to_string(),
            bind_addr: "0.0.0.0:8000".to_string(),
            cors_origin: "http://localhost:5173".to_string(),
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_empty_database_url_rejected() {
        let mut config = valid_config();
        config.database_url = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_api_key_rejected() {
        let mut config = valid_config();
        config.gemini_api_key = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_model_rejected() {
        let mut config = valid_config();
        config.gemini_model = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_cors_origin_rejected() {
        let mut config = valid_config();
        config.cors_origin = String::new();
        assert!(config.validate().is_err());
    }
}
