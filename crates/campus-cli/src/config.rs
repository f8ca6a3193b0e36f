//! CLI configuration

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::error::CliError;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    pub api_url: Option<String>,
    pub token: Option<String>,
    pub default_format: Option<String>,
}

impl Config {
    pub fn load(profile: Option<&str>) -> Result<Self, CliError> {
        let path = Self::config_path(profile)?;
        if path.exists() {
            let content =
                fs::read_to_string(&path).map_err(|e| CliError::Config(e.to_string()))?;
            toml::from_str(&content).map_err(|e| CliError::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<(), CliError> {
        let path = Self::config_path(None)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| CliError::Config(e.to_string()))?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| CliError::Config(e.to_string()))?;
        fs::write(&path, content).map_err(|e| CliError::Config(e.to_string()))
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "api_url" => self.api_url.clone(),
            "token" => self.token.clone(),
            "default_format" => self.default_format.clone(),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: String) -> Result<(), CliError> {
        match key {
            "api_url" => self.api_url = Some(value),
            "token" => self.token = Some(value),
            "default_format" => self.default_format = Some(value),
            other => return Err(CliError::Config(format!("unknown key: {other}"))),
        }
        Ok(())
    }

    fn config_path(profile: Option<&str>) -> Result<PathBuf, CliError> {
        let home =
            dirs::home_dir().ok_or_else(|| CliError::Config("cannot find home directory".into()))?;
        let filename = match profile {
            Some(p) => format!("config.{p}.toml"),
            None => "config.toml".to_string(),
        };
        Ok(home.join(".campus").join(filename))
    }
}
