//! Persistent generation settings stored as TOML.

use directories::ProjectDirs;
use nozoki_core::DungeonConfig;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::APP_NAME;

pub fn default_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|proj_dirs| {
        let mut path = proj_dirs.config_dir().to_path_buf();
        path.push("config.toml");
        path
    })
}

pub fn write_atomic(config: &DungeonConfig, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = path.with_extension("toml.tmp");
    let text = toml::to_string_pretty(config).map_err(io::Error::other)?;
    fs::write(&tmp_path, text)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

pub fn load(path: &Path) -> io::Result<DungeonConfig> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Like [`load`], but a missing file yields the default configuration.
pub fn load_or_default(path: &Path) -> io::Result<DungeonConfig> {
    match load(path) {
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(DungeonConfig::default()),
        other => other,
    }
}
