//! Runtime configuration
//!
//! Settings come from the process environment, after loading a `.env` file
//! from the working directory when one exists.

use crate::core::resolver::DEFAULT_SUPPORTED_CURRENCIES;
use crate::io::SourceFormat;
use crate::rates::apilayer::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use log::{debug, warn};
use std::path::PathBuf;
use std::time::Duration;

/// Default data file per source format
const DEFAULT_JSON_PATH: &str = "data/operations.json";
const DEFAULT_CSV_PATH: &str = "data/transactions.csv";
const DEFAULT_XLSX_PATH: &str = "data/transactions_excel.xlsx";

/// Resolved configuration for one run
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Exchange-rate API key
    pub api_key: Option<String>,

    /// Exchange-rate service root
    pub rates_api_url: String,

    /// Timeout of one rate request
    pub rates_timeout: Duration,

    /// Currencies converted through the rate service
    pub supported_currencies: Vec<String>,

    /// Data file used when JSON is chosen without a path
    pub json_path: PathBuf,

    /// Data file used when CSV is chosen without a path
    pub csv_path: PathBuf,

    /// Data file used when XLSX is chosen without a path
    pub xlsx_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            rates_api_url: DEFAULT_BASE_URL.to_string(),
            rates_timeout: DEFAULT_TIMEOUT,
            supported_currencies: DEFAULT_SUPPORTED_CURRENCIES
                .iter()
                .map(|code| code.to_string())
                .collect(),
            json_path: PathBuf::from(DEFAULT_JSON_PATH),
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            xlsx_path: PathBuf::from(DEFAULT_XLSX_PATH),
        }
    }
}

impl Config {
    /// Load `.env` (if present) and read the process environment
    pub fn from_env() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => debug!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => debug!("No .env file found"),
            Err(e) => warn!("Ignoring unreadable .env file: {}", e),
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from a variable lookup
    ///
    /// Blank values count as unset; an unparseable timeout keeps the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = Config::default();

        let rates_timeout = match get("RATES_TIMEOUT_SECS") {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) => Duration::from_secs(secs),
                Err(_) => {
                    warn!("Invalid RATES_TIMEOUT_SECS '{}', using default", value);
                    defaults.rates_timeout
                }
            },
            None => defaults.rates_timeout,
        };

        let supported_currencies = get("SUPPORTED_CURRENCIES")
            .map(|value| {
                value
                    .split(',')
                    .map(|code| code.trim().to_uppercase())
                    .filter(|code| !code.is_empty())
                    .collect()
            })
            .unwrap_or(defaults.supported_currencies);

        Self {
            api_key: get("API_KEY").or_else(|| get("api_key")),
            rates_api_url: get("RATES_API_URL").unwrap_or(defaults.rates_api_url),
            rates_timeout,
            supported_currencies,
            json_path: get("OPERATIONS_JSON").map(PathBuf::from).unwrap_or(defaults.json_path),
            csv_path: get("TRANSACTIONS_CSV").map(PathBuf::from).unwrap_or(defaults.csv_path),
            xlsx_path: get("TRANSACTIONS_XLSX").map(PathBuf::from).unwrap_or(defaults.xlsx_path),
        }
    }

    /// Default data file for a format
    pub fn default_path(&self, format: SourceFormat) -> &PathBuf {
        match format {
            SourceFormat::Json => &self.json_path,
            SourceFormat::Csv => &self.csv_path,
            SourceFormat::Xlsx => &self.xlsx_path,
        }
    }
}
