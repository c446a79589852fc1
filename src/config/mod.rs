use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::core::SampleDataConfig;
use crate::currency::{CurrencyCode, LocaleConfig};
use crate::errors::LedgerError;
use crate::utils::app_data_dir;

const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// User preferences. Ledger data is never persisted, only these settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    pub sample_seed: u64,
    pub sample_months: u32,
}

impl Default for Config {
    fn default() -> Self {
        let sample = SampleDataConfig::default();
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            sample_seed: sample.seed,
            sample_months: sample.months,
        }
    }
}

impl Config {
    pub fn currency_code(&self) -> CurrencyCode {
        CurrencyCode::new(&self.currency)
    }

    pub fn locale_config(&self) -> LocaleConfig {
        let mut locale = LocaleConfig {
            language_tag: self.locale.clone(),
            ..LocaleConfig::default()
        };
        // Comma decimal locales.
        if matches!(
            self.locale.split('-').next(),
            Some("de" | "fr" | "es" | "it" | "pt" | "nl")
        ) {
            locale.decimal_separator = ',';
            locale.grouping_separator = '.';
        }
        locale
    }

    pub fn sample_data(&self) -> SampleDataConfig {
        SampleDataConfig {
            seed: self.sample_seed,
            months: self.sample_months.max(1),
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, LedgerError> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, LedgerError> {
        fs::create_dir_all(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    /// Reads the stored config, or the defaults when none was saved yet.
    pub fn load(&self) -> Result<Config, LedgerError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        serde_json::from_str(&data).map_err(|err| {
            LedgerError::Config(format!("{}: {}", self.path.display(), err))
        })
    }

    pub fn save(&self, config: &Config) -> Result<(), LedgerError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = self.path.with_extension(TMP_SUFFIX);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), "config saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn write_atomic(path: &Path, data: &str) -> Result<(), LedgerError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.sync_all()?;
    Ok(())
}
