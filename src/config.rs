//! Where the application keeps its files.
//!
//! Everything lives under one data directory:
//!
//! - `domains.sqlite` holds the key-value table with the persisted records
//! - `webview2/` is handed to the desktop webview for its own profile data
//!
//! The directory is the platform's local data dir for the app unless
//! `DOMAIN_MANAGER_DATA_DIR` points somewhere else.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

pub const DATA_DIR_ENV: &str = "DOMAIN_MANAGER_DATA_DIR";
pub const STORAGE_KEY: &str = "domains";
pub const DB_FILE_NAME: &str = "domains.sqlite";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub db_path: PathBuf,
    pub storage_key: String,
}

impl AppConfig {
    pub fn resolve() -> Result<Self> {
        let override_dir = std::env::var_os(DATA_DIR_ENV)
            .map(PathBuf::from)
            .filter(|path| !path.as_os_str().is_empty());
        match override_dir {
            Some(dir) => Ok(Self::for_data_dir(dir)),
            None => Ok(Self::for_data_dir(default_data_dir()?)),
        }
    }

    pub fn for_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            db_path: data_dir.join(DB_FILE_NAME),
            data_dir,
            storage_key: STORAGE_KEY.to_string(),
        }
    }

    pub fn webview_data_dir(&self) -> Result<PathBuf> {
        ensure_webview_data_dir(&self.data_dir)
    }
}

pub fn default_data_dir() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from("com", "domainmanager", "domain-manager")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))?;
    Ok(project_dirs.data_local_dir().to_path_buf())
}

pub fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}
