//! Persistence for the bearer token between runs.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
#[cfg(unix)]
use std::{io::Write, os::unix::fs::OpenOptionsExt};

fn root_path() -> Result<PathBuf> {
    Ok(dirs::config_dir()
        .context("Cannot determine config directory")?
        .join("dagbok"))
}

fn secure_write(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    #[cfg(unix)]
    {
        std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(path)?
            .write_all(content.as_bytes())?;
    }

    #[cfg(not(unix))]
    {
        std::fs::write(path, content)?;
    }

    Ok(())
}

pub fn token_path() -> Result<PathBuf> {
    Ok(root_path()?.join("token"))
}

fn load_token_at(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }

    let token = std::fs::read_to_string(path).context("Failed to read token file")?;
    let token = token.trim().to_string();
    if token.is_empty() {
        return Ok(None);
    }
    Ok(Some(token))
}

fn clear_token_at(path: &Path) -> Result<()> {
    if path.exists() {
        std::fs::remove_file(path)?;
    }
    Ok(())
}

pub fn load_token() -> Result<Option<String>> {
    load_token_at(token_path()?.as_path())
}

pub fn save_token(token: &str) -> Result<()> {
    let path = token_path()?;
    secure_write(path.as_path(), token)
}

pub fn clear_token() -> Result<()> {
    clear_token_at(token_path()?.as_path())
}
