//! Configuration handling for the TUI

use crate::state::DEFAULT_EMAIL_DOMAIN;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const LOG_FILE_NAME: &str = "onboarding-tui.log";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OnboardingConfig {
    /// Domain of the official address built from `companyEmailStart`
    pub email_domain: Option<String>,
    /// Block submit on any empty field the form marks required, including
    /// position, location of work and the "Other" companions
    pub enforce_required_markup: Option<bool>,
    /// Clear the form after a successful submit
    pub reset_after_submit: Option<bool>,
    /// Where logs and submitted records are written
    pub log_file: Option<PathBuf>,
}

impl OnboardingConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("in", "talentcorner", "onboarding-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: OnboardingConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn email_domain(&self) -> &str {
        self.email_domain
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_EMAIL_DOMAIN)
    }

    pub fn enforce_required_markup(&self) -> bool {
        self.enforce_required_markup.unwrap_or(false)
    }

    pub fn reset_after_submit(&self) -> bool {
        self.reset_after_submit.unwrap_or(false)
    }

    /// Log file location; `None` when no data directory can be determined
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| {
            Self::project_dirs().map(|dirs| dirs.data_dir().join(LOG_FILE_NAME))
        })
    }
}
