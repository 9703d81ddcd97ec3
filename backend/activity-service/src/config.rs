/// Configuration management for Activity Service
///
/// This module handles loading and managing configuration from environment
/// variables.
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Home-feed fault toggles (test hooks, never enabled in production)
    pub feed_faults: FeedFaultConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (dev, staging, prod)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins
    pub allowed_origins: String,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL
    pub url: String,
    /// Max connections in pool
    pub max_connections: u32,
}

/// Test-only fault toggles for the home feed: an artificial delay and a
/// forced failure, used to exercise caller timeout and error paths
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedFaultConfig {
    pub simulate_latency: bool,
    pub simulate_error: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        Ok(Config {
            app: AppConfig {
                env: app_env.clone(),
                host: std::env::var("ACTIVITY_SERVICE_HOST")
                    .unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("ACTIVITY_SERVICE_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8081),
            },
            cors: {
                let allowed_origins = match std::env::var("CORS_ALLOWED_ORIGINS") {
                    Ok(value) => value,
                    Err(_) if app_env.eq_ignore_ascii_case("production") => {
                        return Err("CORS_ALLOWED_ORIGINS must be set in production".to_string())
                    }
                    Err(_) => "http://localhost:3000".to_string(),
                };

                if app_env.eq_ignore_ascii_case("production") && allowed_origins.trim() == "*" {
                    return Err("CORS_ALLOWED_ORIGINS cannot be '*' in production".to_string());
                }

                CorsConfig { allowed_origins }
            },
            database: DatabaseConfig {
                url: std::env::var("CONNECTION_URL")
                    .unwrap_or_else(|_| "postgresql://localhost/activities".to_string()),
                max_connections: std::env::var("DB_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|c| c.parse().ok())
                    .unwrap_or(10),
            },
            feed_faults: {
                let simulate_latency = env_flag("SIMULATE_HOME_LATENCY");
                let simulate_error = env_flag("SIMULATE_HOME_ERROR");

                if app_env.eq_ignore_ascii_case("production") && (simulate_latency || simulate_error)
                {
                    return Err(
                        "SIMULATE_HOME_LATENCY / SIMULATE_HOME_ERROR must not be set in production"
                            .to_string(),
                    );
                }

                FeedFaultConfig {
                    simulate_latency,
                    simulate_error,
                }
            },
        })
    }
}

fn env_flag(key: &str) -> bool {
    std::env::var(key).map(|v| v == "1").unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[serial_test::serial]
    fn test_defaults_without_env() {
        std::env::remove_var("APP_ENV");
        std::env::remove_var("ACTIVITY_SERVICE_HOST");
        std::env::remove_var("ACTIVITY_SERVICE_PORT");
        std::env::remove_var("CORS_ALLOWED_ORIGINS");
        std::env::remove_var("CONNECTION_URL");
        std::env::remove_var("SIMULATE_HOME_LATENCY");
        std::env::remove_var("SIMULATE_HOME_ERROR");

        let config = Config::from_env().unwrap();
        assert_eq!(config.app.env, "development");
        assert_eq!(config.app.port, 8081);
        assert!(!config.feed_faults.simulate_latency);
        assert!(!config.feed_faults.simulate_error);
    }

    #[test]
    #[serial_test::serial]
    fn test_fault_toggles_parse_only_literal_one() {
        std::env::remove_var("APP_ENV");
        std::env::set_var("SIMULATE_HOME_LATENCY", "1");
        std::env::set_var("SIMULATE_HOME_ERROR", "true");

        let config = Config::from_env().unwrap();
        assert!(config.feed_faults.simulate_latency);
        assert!(!config.feed_faults.simulate_error);

        std::env::remove_var("SIMULATE_HOME_LATENCY");
        std::env::remove_var("SIMULATE_HOME_ERROR");
    }

    #[test]
    #[serial_test::serial]
    fn test_fault_toggles_rejected_in_production() {
        std::env::set_var("APP_ENV", "production");
        std::env::set_var("CORS_ALLOWED_ORIGINS", "https://example.com");
        std::env::set_var("SIMULATE_HOME_ERROR", "1");

        assert!(Config::from_env().is_err());

        std::env::remove_var("APP_ENV");
        std::env::remove_var("CORS_ALLOWED_ORIGINS");
        std::env::remove_var("SIMULATE_HOME_ERROR");
    }
}
