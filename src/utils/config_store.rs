//! ConfigStore - Local Configuration Storage

use std::fs;
use std::path::PathBuf;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{Error, Result};

/// Settings file name inside the application data directory
pub const SETTINGS_FILE: &str = "settings.json";

/// Get the application data directory
pub fn app_data_dir() -> Result<PathBuf> {
    let dir = dirs::data_local_dir()
        .ok_or_else(|| Error::Invalid {
            message: "could not resolve the local data directory".to_string(),
        })?
        .join("opsdeck");

    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

/// Load a JSON config file, defaulting when the file does not exist yet
pub fn load_config<T: DeserializeOwned + Default>(filename: &str) -> Result<T> {
    let path = app_data_dir()?.join(filename);

    if !path.exists() {
        return Ok(T::default());
    }

    let content = fs::read_to_string(&path)?;
    let config: T = serde_json::from_str(&content)?;
    Ok(config)
}

/// Save a JSON config file
pub fn save_config<T: Serialize>(filename: &str, config: &T) -> Result<()> {
    let path = app_data_dir()?.join(filename);
    let content = serde_json::to_string_pretty(config)?;
    fs::write(&path, content)?;
    Ok(())
}
