use rand::Rng;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::env;

/// Compiled-in development signing secret. Deployments MUST set
/// MTENDERE_JWT_SECRET; this value exists so a fresh checkout runs.
pub const DEV_JWT_SECRET: &str = "mtendere-secret-key";

pub const TOKEN_EXPIRY_HOURS: i64 = 24;

/// MtendereConfig is the primary configuration struct for the back-office
/// server. All values are read from env variables with fallbacks suitable
/// for local development.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MtendereConfig {
    pub app_name: String,
    pub app_env: String,
    pub app_version: String,
    pub server_host: String,
    pub server_port: u16,
    pub jwt_secret: String,
    pub token_expiry_hours: i64,
    pub admin_email: String,
    pub admin_username: String,
    pub admin_password: String,
}

impl Default for MtendereConfig {
    fn default() -> Self {
        MtendereConfig {
            app_name: "mtendere".to_string(),
            app_env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            server_host: env::var("MTENDERE_SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("MTENDERE_SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            jwt_secret: env::var("MTENDERE_JWT_SECRET")
                .unwrap_or_else(|_| DEV_JWT_SECRET.to_string()),
            token_expiry_hours: TOKEN_EXPIRY_HOURS,
            admin_email: env::var("MTENDERE_ADMIN_EMAIL")
                .unwrap_or_else(|_| "admin@mtendere.com".to_string()),
            admin_username: env::var("MTENDERE_ADMIN_USERNAME")
                .unwrap_or_else(|_| "admin".to_string()),
            admin_password: env::var("MTENDERE_ADMIN_PASSWORD")
                .unwrap_or_else(|_| "admin123".to_string()),
        }
    }
}

impl MtendereConfig {
    pub fn new() -> Self {
        MtendereConfig::default()
    }

    /// True when the server is still signing tokens with the compiled-in
    /// development secret.
    pub fn using_default_secret(&self) -> bool {
        self.jwt_secret == DEV_JWT_SECRET
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

/// Random secret for throwaway configs in tests.
pub fn generate_jwt_secret() -> String {
    let mut rng = rand::thread_rng();
    (0..32)
        .map(|_| rng.sample(rand::distributions::Alphanumeric) as char)
        .collect()
}
