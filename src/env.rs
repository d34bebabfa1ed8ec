use std::env;
use std::path::PathBuf;

const CATALOG_FILE: &str = "catalog.json";

/// Returns the root directory used by the launcher.
pub fn default_app_dir() -> PathBuf {
    let base = match env::consts::OS {
        "windows" => env::var_os("LOCALAPPDATA")
            .or_else(|| env::var_os("APPDATA"))
            .map(PathBuf::from),
        "macos" => env::var_os("HOME")
            .map(PathBuf::from)
            .map(|home| home.join("Library").join("Application Support")),
        _ => env::var_os("HOME")
            .map(PathBuf::from)
            .map(|home| home.join(".local").join("share")),
    }
    .unwrap_or_else(|| PathBuf::from("."));

    base.join("starmade-launcher")
}

/// Seed catalog looked up when `--catalog` is not given.
pub fn catalog_path() -> PathBuf {
    default_app_dir().join(CATALOG_FILE)
}
