use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::engine::models::{
    Account, ManagedItem, NewsItem, sample_accounts, sample_installations, sample_news,
    sample_servers,
};

/// Seed data the launcher starts from. Missing sections fall back to the samples.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default = "sample_installations")]
    pub installations: Vec<ManagedItem>,
    #[serde(default = "sample_servers")]
    pub servers: Vec<ManagedItem>,
    #[serde(default = "sample_accounts")]
    pub accounts: Vec<Account>,
    #[serde(default = "sample_news")]
    pub news: Vec<NewsItem>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            installations: sample_installations(),
            servers: sample_servers(),
            accounts: sample_accounts(),
            news: sample_news(),
        }
    }
}

/// Read a catalog file. A missing file is not an error and yields `None`.
pub fn read_catalog(path: &Path) -> Result<Option<Catalog>, String> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(format!("unable to read {}: {err}", path.display())),
    };
    let catalog: Catalog = serde_json::from_str(&raw)
        .map_err(|err| format!("invalid catalog {}: {err}", path.display()))?;
    if let Some(id) = duplicate_item_id(&catalog) {
        return Err(format!(
            "invalid catalog {}: id {id:?} is used more than once",
            path.display()
        ));
    }
    Ok(Some(catalog))
}

/// Ids must be unique across installations and servers together.
fn duplicate_item_id(catalog: &Catalog) -> Option<&str> {
    let mut seen = HashSet::new();
    catalog
        .installations
        .iter()
        .chain(&catalog.servers)
        .map(|item| item.id.as_str())
        .find(|id| !seen.insert(*id))
}

/// Load the seed catalog, falling back to the built-in samples on any problem.
pub fn load_catalog(path: &Path) -> Catalog {
    match read_catalog(path) {
        Ok(Some(catalog)) => {
            info!(
                "catalog: loaded {} installations, {} servers from {}",
                catalog.installations.len(),
                catalog.servers.len(),
                path.display()
            );
            catalog
        }
        Ok(None) => {
            info!("catalog: {} not found; using sample data", path.display());
            Catalog::default()
        }
        Err(err) => {
            warn!("catalog: {err}; using sample data");
            Catalog::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_uses_samples() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("catalog.json");
        assert_eq!(read_catalog(&path), Ok(None));
        assert_eq!(load_catalog(&path), Catalog::default());
    }

    #[test]
    fn partial_catalog_fills_missing_sections() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{"servers": [{{
                "id": "x1",
                "name": "LAN",
                "version": "1.0",
                "type": "release",
                "icon": "server",
                "path": "/srv/lan",
                "lastPlayed": "Never",
                "port": "5000"
            }}]}}"#
        )
        .expect("write catalog");

        let catalog = load_catalog(file.path());
        assert_eq!(catalog.servers.len(), 1);
        assert_eq!(catalog.servers[0].port.as_deref(), Some("5000"));
        assert_eq!(catalog.installations, sample_installations());
        assert_eq!(catalog.news, sample_news());
    }

    #[test]
    fn invalid_json_is_reported_and_recovered() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "{{ not json").expect("write catalog");

        let err = read_catalog(file.path()).expect_err("invalid catalog");
        assert!(err.starts_with("invalid catalog"));
        assert_eq!(load_catalog(file.path()), Catalog::default());
    }

    fn write_items(file: &mut tempfile::NamedTempFile, installations: &[&str], servers: &[&str]) {
        let item = |id: &&str| {
            format!(
                r#"{{"id": "{id}", "name": "Item {id}", "version": "1.0", "type": "release",
                    "icon": "release", "path": "/games/{id}", "lastPlayed": "Never"}}"#
            )
        };
        let installations: Vec<String> = installations.iter().map(item).collect();
        let servers: Vec<String> = servers.iter().map(item).collect();
        write!(
            file,
            r#"{{"installations": [{}], "servers": [{}]}}"#,
            installations.join(","),
            servers.join(",")
        )
        .expect("write catalog");
    }

    #[test]
    fn repeated_id_within_a_collection_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write_items(&mut file, &["7", "7"], &["s1"]);

        let err = read_catalog(file.path()).expect_err("duplicate ids");
        assert!(err.contains("\"7\""));
        assert_eq!(load_catalog(file.path()), Catalog::default());
    }

    #[test]
    fn repeated_id_across_collections_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write_items(&mut file, &["a"], &["b", "a"]);

        assert!(read_catalog(file.path()).is_err());
        assert_eq!(load_catalog(file.path()), Catalog::default());
    }

    #[test]
    fn distinct_ids_load_as_written() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write_items(&mut file, &["a", "b"], &["c"]);

        let catalog = read_catalog(file.path())
            .expect("valid catalog")
            .expect("file present");
        let ids: Vec<&str> = catalog.installations.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
        assert_eq!(catalog.servers[0].id, "c");
    }
}
