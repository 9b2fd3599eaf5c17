use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub database_url: String,
    /// Origin prepended to stored relative upload paths when the server
    /// hands out absolute download URLs (exports, activity feed).
    pub public_base_url: String,
    pub uploads_dir: String,
    pub registration_rps: u32,
    pub admin_rps: u32,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env("SERVER_ADDRESS")?,
            database_url: get_env("DATABASE_URL")?,
            public_base_url: get_env("PUBLIC_BASE_URL")?,
            uploads_dir: env::var("UPLOADS_DIR").unwrap_or_else(|_| "./uploads".to_string()),
            registration_rps: get_env_parse("REGISTRATION_RPS")?,
            admin_rps: get_env_parse("ADMIN_RPS")?,
        })
    }

    /// Absolute URL for a stored relative file path like `uploads/candidates/<uuid>.pdf`.
    pub fn file_url(&self, relative_path: &str) -> String {
        format!(
            "{}/{}",
            self.public_base_url.trim_end_matches('/'),
            relative_path.trim_start_matches('/')
        )
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_parse<T>(name: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = get_env(name)?;
    raw.parse()
        .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e)))
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn file_url_joins_origin_and_relative_path() {
        let config = Config {
            server_address: "127.0.0.1:0".into(),
            database_url: "postgres://localhost/test".into(),
            public_base_url: "https://portal.example.com/".into(),
            uploads_dir: "./uploads".into(),
            registration_rps: 10,
            admin_rps: 10,
        };
        assert_eq!(
            config.file_url("uploads/candidates/abc.pdf"),
            "https://portal.example.com/uploads/candidates/abc.pdf"
        );
        assert_eq!(
            config.file_url("/uploads/agencies/x.png"),
            "https://portal.example.com/uploads/agencies/x.png"
        );
    }
}
