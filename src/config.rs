use dotenvy::dotenv;
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use tracing::warn;

/// Runtime configuration, loaded from the environment with sensible
/// defaults so the service starts with no setup at all.
pub struct Config {
    pub port: u16,
    pub cors_allow_origin: String,
    pub dataset_seed: u64,
}

impl Config {
    pub fn load() -> Self {
        dotenv().ok();

        Config {
            port: env_or("SERVER_PORT", 3001),
            cors_allow_origin: env::var("CORS_ALLOW_ORIGIN").unwrap_or_else(|_| "*".to_string()),
            dataset_seed: env_or("DATASET_SEED", 42),
        }
    }
}

/// Read and parse an env var, falling back to the default on absence or a
/// malformed value
fn env_or<T: FromStr>(key: &str, default: T) -> T
where
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            warn!(key, %raw, "Invalid value ({e}), using default");
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_or_falls_back_on_missing_or_malformed() {
        assert_eq!(env_or::<u16>("SALES_DASHBOARD_UNSET_VAR", 3001), 3001);

        unsafe { env::set_var("SALES_DASHBOARD_BAD_PORT", "not-a-port") };
        assert_eq!(env_or::<u16>("SALES_DASHBOARD_BAD_PORT", 3001), 3001);

        unsafe { env::set_var("SALES_DASHBOARD_GOOD_PORT", "8080") };
        assert_eq!(env_or::<u16>("SALES_DASHBOARD_GOOD_PORT", 3001), 8080);
    }
}
