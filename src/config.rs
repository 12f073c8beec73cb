use clap::Parser;
use once_cell::sync::Lazy;

pub const JWT_EXPIRED_TIME: i64 = 86400i64;

// Per-IP rate ceiling (blanket request-rate limit)
pub const RATE_LIMIT_PER_SECOND: u64 = 2;
pub const RATE_LIMIT_BURST: u32 = 20;

// Request bodies are small JSON forms; anything bigger is a mistake.
pub const MAX_REQUEST_BODY_BYTES: usize = 10 * 1024;

pub static APP_CONFIG: Lazy<Config> = Lazy::new(Config::parse);

#[derive(Debug, Parser, Clone)]
pub struct Config {
    #[clap(long, env, default_value_t = 10000)]
    pub port: u16,

    #[clap(long, env, default_value_t = true)]
    pub swagger_enabled: bool,

    #[clap(long, env, default_value = "info")]
    pub log_level: String,

    #[clap(long, env)]
    pub database_url: String,

    #[clap(long, env)]
    pub session_secret: String,

    #[clap(long, env, default_value = "*")]
    pub cors_allowed_origins: String,

    #[clap(long, env, default_value = "admin@ecole.local")]
    pub admin_email: String,

    #[clap(long, env, default_value = "ChangeMe123!")]
    pub admin_password: String,

    #[clap(long, env, default_value = "local")]
    pub app_env: String,
}

impl Config {
    pub fn is_production(&self) -> bool {
        self.app_env == "production"
    }
}
