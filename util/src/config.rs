//! Global application configuration manager.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton containing
//! runtime configuration values loaded from environment variables. It provides
//! thread-safe access and mutation for testing or overrides in runtime environments.

use std::env;
use std::sync::{OnceLock, RwLock};

/// Which media backend uploads are sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaBackend {
    Local,
    Cloudinary,
}

impl MediaBackend {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "cloudinary" => MediaBackend::Cloudinary,
            _ => MediaBackend::Local,
        }
    }
}

/// Represents the complete application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub database_path: String,
    pub host: String,
    pub port: u16,
    pub cors_origin: String,
    pub access_token_secret: String,
    pub access_token_expiry_minutes: i64,
    pub refresh_token_secret: String,
    pub refresh_token_expiry_days: i64,
    pub cookie_secure: bool,
    pub media_backend: MediaBackend,
    pub storage_root: String,
    pub public_url: String,
    pub cloudinary_cloud_name: String,
    pub cloudinary_api_key: String,
    pub cloudinary_api_secret: String,
    pub max_upload_mb: usize,
}

/// Lazily-initialized, thread-safe singleton instance of `AppConfig`.
static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.into())
}

fn parsed_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    ///
    /// Secrets default to empty strings; call [`AppConfig::missing_required`]
    /// at startup to refuse to run without them.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let host = var_or("HOST", "127.0.0.1");
        let port: u16 = parsed_or("PORT", 8000);
        let public_url = env::var("PUBLIC_URL").unwrap_or_else(|_| format!("http://{host}:{port}"));

        Self {
            env: var_or("APP_ENV", "development"),
            project_name: var_or("PROJECT_NAME", "videotube"),
            log_level: var_or("LOG_LEVEL", "api=info"),
            log_file: var_or("LOG_FILE", "api.log"),
            log_to_stdout: var_or("LOG_TO_STDOUT", "false") == "true",
            database_path: var_or("DATABASE_PATH", "data/videotube.db"),
            host,
            port,
            cors_origin: var_or("CORS_ORIGIN", "*"),
            access_token_secret: env::var("ACCESS_TOKEN_SECRET").unwrap_or_default(),
            access_token_expiry_minutes: parsed_or("ACCESS_TOKEN_EXPIRY_MINUTES", 1440),
            refresh_token_secret: env::var("REFRESH_TOKEN_SECRET").unwrap_or_default(),
            refresh_token_expiry_days: parsed_or("REFRESH_TOKEN_EXPIRY_DAYS", 10),
            cookie_secure: var_or("COOKIE_SECURE", "true") != "false",
            media_backend: MediaBackend::parse(&var_or("MEDIA_BACKEND", "local")),
            storage_root: var_or("STORAGE_ROOT", "data"),
            public_url: public_url.trim_end_matches('/').to_string(),
            cloudinary_cloud_name: env::var("CLOUDINARY_CLOUD_NAME").unwrap_or_default(),
            cloudinary_api_key: env::var("CLOUDINARY_API_KEY").unwrap_or_default(),
            cloudinary_api_secret: env::var("CLOUDINARY_API_SECRET").unwrap_or_default(),
            max_upload_mb: parsed_or("MAX_UPLOAD_MB", 200),
        }
    }

    /// Names of required variables that are unset for the current configuration.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.access_token_secret.is_empty() {
            missing.push("ACCESS_TOKEN_SECRET");
        }
        if self.refresh_token_secret.is_empty() {
            missing.push("REFRESH_TOKEN_SECRET");
        }
        if self.media_backend == MediaBackend::Cloudinary {
            if self.cloudinary_cloud_name.is_empty() {
                missing.push("CLOUDINARY_CLOUD_NAME");
            }
            if self.cloudinary_api_key.is_empty() {
                missing.push("CLOUDINARY_API_KEY");
            }
            if self.cloudinary_api_secret.is_empty() {
                missing.push("CLOUDINARY_API_SECRET");
            }
        }
        missing
    }

    /// Returns a shared reference to the global configuration.
    ///
    /// # Panics
    /// Panics if the lock is poisoned.
    pub fn global() -> std::sync::RwLockReadGuard<'static, AppConfig> {
        CONFIG_INSTANCE
            .get_or_init(|| RwLock::new(AppConfig::from_env()))
            .read()
            .expect("Failed to acquire AppConfig read lock")
    }

    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut AppConfig),
    {
        let lock = CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()));
        let mut guard = lock
            .write()
            .expect("Failed to acquire AppConfig write lock");
        setter(&mut guard);
    }

    // --- Per-field setters below ---

    pub fn set_access_token_secret(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.access_token_secret = value.into());
    }

    pub fn set_access_token_expiry_minutes(value: i64) {
        AppConfig::set_field(|cfg| cfg.access_token_expiry_minutes = value);
    }

    pub fn set_refresh_token_secret(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.refresh_token_secret = value.into());
    }

    pub fn set_refresh_token_expiry_days(value: i64) {
        AppConfig::set_field(|cfg| cfg.refresh_token_expiry_days = value);
    }
}

// --- Free accessors ---

pub fn env() -> String {
    AppConfig::global().env.clone()
}

pub fn project_name() -> String {
    AppConfig::global().project_name.clone()
}

pub fn log_level() -> String {
    AppConfig::global().log_level.clone()
}

pub fn log_file() -> String {
    AppConfig::global().log_file.clone()
}

pub fn log_to_stdout() -> bool {
    AppConfig::global().log_to_stdout
}

pub fn database_path() -> String {
    AppConfig::global().database_path.clone()
}

pub fn host() -> String {
    AppConfig::global().host.clone()
}

pub fn port() -> u16 {
    AppConfig::global().port
}

pub fn cors_origin() -> String {
    AppConfig::global().cors_origin.clone()
}

pub fn access_token_secret() -> String {
    AppConfig::global().access_token_secret.clone()
}

pub fn access_token_expiry_minutes() -> i64 {
    AppConfig::global().access_token_expiry_minutes
}

pub fn refresh_token_secret() -> String {
    AppConfig::global().refresh_token_secret.clone()
}

pub fn refresh_token_expiry_days() -> i64 {
    AppConfig::global().refresh_token_expiry_days
}

pub fn cookie_secure() -> bool {
    AppConfig::global().cookie_secure
}

pub fn media_backend() -> MediaBackend {
    AppConfig::global().media_backend
}

pub fn storage_root() -> String {
    AppConfig::global().storage_root.clone()
}

pub fn public_url() -> String {
    AppConfig::global().public_url.clone()
}

pub fn max_upload_bytes() -> usize {
    AppConfig::global().max_upload_mb * 1024 * 1024
}

/// `(cloud_name, api_key, api_secret)`
pub fn cloudinary_credentials() -> (String, String, String) {
    let cfg = AppConfig::global();
    (
        cfg.cloudinary_cloud_name.clone(),
        cfg.cloudinary_api_key.clone(),
        cfg.cloudinary_api_secret.clone(),
    )
}
