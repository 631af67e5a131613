//! Optional TOML configuration.
//!
//! ```toml
//! currency = "EUR"
//! default_tip = 15
//! default_people = 4
//! log_level = "info"
//! ```
//!
//! Every key is optional. Command-line flags take precedence over the file.

use std::{fs, path::Path};

use serde::Deserialize;
use split_core::{BillSplitError, CurrencyCode, CurrencyError, PartySize, TipPercentage};
use thiserror::Error;
use tracing::debug;

use crate::logging::DEFAULT_FILTER;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Currency(#[from] CurrencyError),

    #[error(transparent)]
    Selection(#[from] BillSplitError),
}

/// Settings that apply to every session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Currency used to format amounts.
    pub currency: CurrencyCode,

    /// Tip percentage preselected when a form opens.
    pub default_tip: TipPercentage,

    /// Party size preselected when a form opens.
    pub default_people: PartySize,

    /// Log filter directive used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            currency: CurrencyCode::default(),
            default_tip: TipPercentage::default(),
            default_people: PartySize::default(),
            log_level: DEFAULT_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Parses configuration from TOML text. `origin` names the source in
    /// error messages.
    pub fn from_toml(
        text: &str,
        origin: &str,
    ) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_string(),
            source,
        })
    }

    /// Reads and parses a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let origin = path.display().to_string();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: origin.clone(),
            source,
        })?;
        let config = Self::from_toml(&text, &origin)?;
        debug!(path = %origin, ?config, "loaded config");
        Ok(config)
    }

    /// Applies values given on the command line over the file values.
    ///
    /// Nothing is changed when any of the overrides is invalid.
    pub fn apply_overrides(
        &mut self,
        currency: Option<&str>,
        tip: Option<u32>,
        people: Option<u32>,
    ) -> Result<(), ConfigError> {
        let currency = currency.map(CurrencyCode::new).transpose()?;
        let tip = tip.map(TipPercentage::new).transpose()?;
        let people = people.map(PartySize::new).transpose()?;

        if let Some(currency) = currency {
            self.currency = currency;
        }
        if let Some(tip) = tip {
            self.default_tip = tip;
        }
        if let Some(people) = people {
            self.default_people = people;
        }
        Ok(())
    }
}
