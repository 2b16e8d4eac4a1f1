//! Gemini API key storage in the config directory.
//!
//! The settings panel lets the user paste a key once; it is then kept in a
//! dedicated `api-key` file (0o600 on Unix) and picked up on later runs when
//! `GEMINI_API_KEY` is not exported.

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::core::paths;

/// Errors when storing or removing the API key.
#[derive(Debug, thiserror::Error)]
pub enum ApiKeyError {
    #[error("No config directory available")]
    NoConfigDir,
    #[error("Failed to write API key file: {0}")]
    Io(#[from] io::Error),
}

fn key_file() -> Option<PathBuf> {
    paths::config_dir().map(|d| d.join("api-key"))
}

/// Stored API key, if any. Absent, empty, or unreadable files count as no key.
pub fn load_api_key() -> Option<String> {
    let content = fs::read_to_string(key_file()?).ok()?;
    let key = content.trim();
    (!key.is_empty()).then(|| key.to_string())
}

/// Persist the API key, creating the config dir if needed.
pub fn store_api_key(key: &str) -> Result<(), ApiKeyError> {
    let path = key_file().ok_or(ApiKeyError::NoConfigDir)?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(&path, format!("{}\n", key.trim()))?;

    // The key grants paid API access; keep it out of other users' reach.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o600))?;
    }

    Ok(())
}

/// Delete the stored key. Missing file is not an error.
pub fn remove_api_key() -> Result<(), ApiKeyError> {
    let path = key_file().ok_or(ApiKeyError::NoConfigDir)?;
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
