use crate::vfs::FileSystem;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the optional per-vault configuration file.
pub const CONFIG_FILE_NAME: &str = ".olabola.yml";

/// Settings of the movie grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridConfig {
    /// Title of the note holding the grid block
    pub index_note: String,
    /// Vault folder posters are moved into
    pub posters_dir: String,
    /// Folder prefix written into grid rows, as seen by the site generator
    pub poster_link_prefix: String,
    /// Info string of the fenced block
    pub fence_tag: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            index_note: "list of all movies".to_string(),
            posters_dir: "olabola-site/content/posters".to_string(),
            poster_link_prefix: "posters".to_string(),
            fence_tag: "grid".to_string(),
        }
    }
}

impl GridConfig {
    /// Load config from YAML. Missing keys take their defaults.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Load `.olabola.yml` from the vault root, or defaults when absent.
    pub fn load(fs: &dyn FileSystem, root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE_NAME);
        if !fs.exists(&path) {
            return Ok(Self::default());
        }
        Self::load_file(fs, &path)
    }

    pub fn load_file(fs: &dyn FileSystem, path: &Path) -> Result<Self, ConfigError> {
        let content = fs.read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::PhysicalFileSystem;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = GridConfig::from_yaml("indexNote: Films\nfenceTag: films\n").unwrap();
        assert_eq!(config.index_note, "Films");
        assert_eq!(config.fence_tag, "films");
        assert_eq!(config.posters_dir, GridConfig::default().posters_dir);
        assert_eq!(config.poster_link_prefix, "posters");
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = GridConfig::default();
        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("postersDir: olabola-site/content/posters"));
        assert_eq!(GridConfig::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn test_load_from_vault_root() {
        let temp_dir = TempDir::new().unwrap();
        let fs_impl = PhysicalFileSystem;

        let config = GridConfig::load(&fs_impl, temp_dir.path()).unwrap();
        assert_eq!(config, GridConfig::default());

        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "postersDir: site/posters\n",
        )
        .unwrap();
        let config = GridConfig::load(&fs_impl, temp_dir.path()).unwrap();
        assert_eq!(config.posters_dir, "site/posters");
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.yml");
        fs::write(&path, "fenceTag: [").unwrap();

        let err = GridConfig::load_file(&PhysicalFileSystem, &path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(GridConfig::from_yaml("indexNote: [unclosed").is_err());
    }
}
