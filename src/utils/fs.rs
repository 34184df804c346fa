//! File System Utilities
//!
//! Application directory resolution and creation.

use crate::error::{Error, Result};
use directories::{ProjectDirs, UserDirs};
use home::home_dir;
use std::fs;
use std::path::PathBuf;

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("co", "aranceles", "arancel-gui").ok_or(Error::MissingDirectory {
        what: "project directories",
    })
}

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/arancel-gui/` or `$XDG_CONFIG_HOME/arancel-gui/`
/// - **macOS**: `~/Library/Application Support/co.aranceles.arancel-gui/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\aranceles\arancel-gui\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let dirs = project_dirs()?;
    let config_dir = dirs.config_dir();

    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    Ok(config_dir.to_path_buf())
}

/// Get the data directory for log files and larger artifacts
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/arancel-gui/`
/// - **macOS**: `~/Library/Application Support/co.aranceles.arancel-gui/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\aranceles\arancel-gui\data\`
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    let dirs = project_dirs()?;
    let data_dir = dirs.data_dir();

    if !data_dir.exists() {
        fs::create_dir_all(data_dir)?;
    }

    Ok(data_dir.to_path_buf())
}

/// Resolve the directory where exported files land.
///
/// Prefers the platform download directory, falls back to the home directory.
pub fn export_dir() -> Result<PathBuf> {
    if let Some(user_dirs) = UserDirs::new() {
        if let Some(download) = user_dirs.download_dir() {
            return Ok(download.to_path_buf());
        }
    }

    home_dir().ok_or(Error::MissingDirectory {
        what: "home directory",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_dir_resolves() {
        let dir = export_dir().expect("export dir should resolve");
        assert!(dir.is_absolute());
    }
}
