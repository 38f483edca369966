use std::env;

const DEFAULT_DATABASE_URL: &str = "mongodb://localhost:27017";
const DEFAULT_API_PREFIX: &str = "/posts";

/// Environment-backed configuration. Loaded once at startup and passed down
/// explicitly; nothing here is read from the environment after that.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_name: String,
    pub port: u16,
    pub api_prefix: String,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            database_name: env::var("DATABASE_NAME").unwrap_or_else(|_| "blog_app".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            api_prefix: env::var("API_PREFIX").unwrap_or_else(|_| DEFAULT_API_PREFIX.to_string()),
        }
    }

    /// Test-run configuration. Points at a separate database so test
    /// teardown can never wipe normal data.
    pub fn test_default() -> Self {
        Config {
            database_url: env::var("TEST_DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            database_name: env::var("TEST_DATABASE_NAME")
                .unwrap_or_else(|_| "test_blog_app".to_string()),
            port: 0,
            api_prefix: DEFAULT_API_PREFIX.to_string(),
        }
    }
}
