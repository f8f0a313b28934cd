use std::{borrow::Cow, str::FromStr, time::Duration};

pub const DEFAULT_PAGE_SIZE: i64 = 10;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum EnvError {
    #[error("{0} must be set in .env file or environment variable")]
    Missing(&'static str),
    #[error("{key} must be a valid {expected}, got {value:?}")]
    Invalid { key: &'static str, expected: Cow<'static, str>, value: String },
}

#[derive(Debug, Clone)]
pub struct Env {
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_acquire_timeout: Duration,
    pub run_migrations: bool,
    pub cors_allowed_origin: String,
    pub ip: String,
    pub port: u16,
    pub workers: usize,
}

impl Env {
    pub fn from_env() -> Result<Self, EnvError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, EnvError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").ok_or(EnvError::Missing("DATABASE_URL"))?;

        let db_max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", 5u32)?;
        let db_min_connections = parse_or(&lookup, "DB_MIN_CONNECTIONS", 1u32)?;
        let db_acquire_timeout =
            Duration::from_secs(parse_or(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", 30u64)?);
        let run_migrations = parse_or(&lookup, "RUN_MIGRATIONS", true)?;

        let cors_allowed_origin = lookup("CORS_ALLOWED_ORIGIN")
            .unwrap_or_else(|| "http://localhost:5173".to_string());
        let ip = lookup("IP").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = parse_or(&lookup, "PORT", 8080u16)?;
        let workers = parse_or(&lookup, "WORKERS", 2usize)?;

        Ok(Env {
            database_url,
            db_max_connections,
            db_min_connections,
            db_acquire_timeout,
            run_migrations,
            cors_allowed_origin,
            ip,
            port,
            workers,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, EnvError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => value.trim().parse::<T>().map_err(|_| EnvError::Invalid {
            key,
            expected: std::any::type_name::<T>().into(),
            value,
        }),
        None => Ok(default),
    }
}
