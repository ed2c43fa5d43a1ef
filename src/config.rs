use chrono::NaiveDate;
use std::env;
use thiserror::Error;

pub const ADDR_VAR: &str = "APPOINTMENTS_ADDR";
pub const TODAY_VAR: &str = "APPOINTMENTS_TODAY";

const DEFAULT_ADDR: &str = "0.0.0.0:3043";
// fixed "today" the seed data is built around
const DEFAULT_TODAY: &str = "2023-10-27";
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a YYYY-MM-DD date, got {value:?}")]
    InvalidDate {
        var: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: String,
    pub today: NaiveDate,
}

impl Config {
    /// Reads the process environment. Call after `dotenv()` so `.env` values apply.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr = lookup(ADDR_VAR)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_ADDR.to_string());

        let today_raw = lookup(TODAY_VAR)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_TODAY.to_string());
        let today = NaiveDate::parse_from_str(&today_raw, DATE_FORMAT).map_err(|source| {
            ConfigError::InvalidDate {
                var: TODAY_VAR,
                value: today_raw.clone(),
                source,
            }
        })?;

        Ok(Self { addr, today })
    }
}
