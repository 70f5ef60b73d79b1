// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Application configuration
//!
//! Built once at startup and passed by reference into the pipeline; the core
//! modules never read the process environment themselves.

use std::env;
use thiserror::Error;

use crate::search::SearchConfig;
use crate::synthesis::config::API_KEY_VAR;
use crate::synthesis::SynthesisConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The completion API credential is not set
    #[error("{var} is not set; export it or add it to a .env file")]
    MissingApiKey { var: &'static str },

    /// A setting failed validation
    #[error("invalid {section} configuration: {reason}")]
    Invalid {
        section: &'static str,
        reason: String,
    },
}

/// Immutable configuration for one process
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub synthesis: SynthesisConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let synthesis = SynthesisConfig::from_lookup(&lookup)
            .ok_or(ConfigError::MissingApiKey { var: API_KEY_VAR })?;
        let search = SearchConfig::from_lookup(&lookup);

        let config = Self { search, synthesis };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.search
            .validate()
            .map_err(|reason| ConfigError::Invalid {
                section: "search",
                reason,
            })?;
        self.synthesis
            .validate()
            .map_err(|reason| ConfigError::Invalid {
                section: "synthesis",
                reason,
            })?;
        Ok(())
    }
}
