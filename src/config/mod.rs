//! Configuration module
//!
//! Lookup order:
//! 1. Explicit path (`--config` / `AURELION_CONFIG`)
//! 2. Local `.aurelion/config.toml`, walking up from the current directory
//! 3. Global `~/.aurelion/config.toml`
//! 4. Defaults

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::catalog::{FloorCatalog, TagCatalog};

/// Environment variable naming the memory store root
pub const MEMORY_PATH_ENV: &str = "AURELION_MEMORY_PATH";

const CONFIG_DIR: &str = ".aurelion";
const CONFIG_FILE: &str = "config.toml";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub library: LibraryConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryConfig {
    /// Root of the memory store (floor directories live here)
    #[serde(default)]
    pub memory_path: Option<PathBuf>,

    /// Graph file name, relative to the memory root
    #[serde(default = "default_graph_file")]
    pub graph_file: String,

    /// Explicit graph location (overrides memory_path + graph_file)
    #[serde(default)]
    pub graph_path: Option<PathBuf>,

    #[serde(default = "default_max_hops")]
    pub default_max_hops: i64,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            memory_path: None,
            graph_file: default_graph_file(),
            graph_path: None,
            default_max_hops: default_max_hops(),
        }
    }
}

fn default_graph_file() -> String {
    "knowledge_graph.json".to_string()
}

fn default_max_hops() -> i64 {
    2
}

/// Static floor/tag tables handed to the query engine
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    #[serde(default)]
    pub floors: FloorCatalog,

    #[serde(default)]
    pub tags: TagCatalog,
}

/// MCP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_name")]
    pub name: String,

    #[serde(default = "default_instructions")]
    pub instructions: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: default_server_name(),
            instructions: default_instructions(),
        }
    }
}

fn default_server_name() -> String {
    "aurelion-memory".to_string()
}

fn default_instructions() -> String {
    "AURELION is a 5-floor personal knowledge library (1=Foundation, 2=Systems, 3=Networks, \
     4=Action, 5=Vision). Use library_concept, library_tag and library_related to find documents \
     through the concept graph, memory_search for full text, and memory_session at the start of \
     a session to restore context."
        .to_string()
}

impl Config {
    /// Load config from default locations
    pub fn load() -> Result<Self> {
        // Try local config first, then global
        if let Some(local) = Self::find_local_config() {
            return Self::load_from(&local);
        }

        if let Some(global) = Self::global_config_path() {
            if global.exists() {
                return Self::load_from(&global);
            }
        }

        Ok(Self::default())
    }

    /// Load from an explicit path when given, default locations otherwise
    pub fn load_with(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from(p),
            None => Self::load(),
        }
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Save config to a file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Find local .aurelion/config.toml walking up directories
    pub fn find_local_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;

        loop {
            let config_path = current.join(CONFIG_DIR).join(CONFIG_FILE);
            if config_path.exists() {
                return Some(config_path);
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Get global config path (~/.aurelion/config.toml)
    pub fn global_config_path() -> Option<PathBuf> {
        directories::UserDirs::new().map(|u| u.home_dir().join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Memory store root with priority:
    /// 1. AURELION_MEMORY_PATH env var
    /// 2. library.memory_path
    pub fn memory_root(&self) -> Option<PathBuf> {
        if let Ok(env_path) = std::env::var(MEMORY_PATH_ENV) {
            if !env_path.trim().is_empty() {
                return Some(PathBuf::from(env_path));
            }
        }

        self.library.memory_path.clone()
    }

    /// Knowledge graph file with priority:
    /// 1. library.graph_path
    /// 2. <memory root>/<graph_file>
    /// 3. ./<graph_file>
    pub fn graph_path(&self) -> PathBuf {
        if let Some(path) = &self.library.graph_path {
            return path.clone();
        }

        match self.memory_root() {
            Some(root) => root.join(&self.library.graph_file),
            None => PathBuf::from(&self.library.graph_file),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.library.graph_file, "knowledge_graph.json");
        assert_eq!(config.library.default_max_hops, 2);
        assert_eq!(config.catalog.floors, FloorCatalog::default());
        assert_eq!(config.catalog.tags, TagCatalog::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [library]
            graph_path = "/data/graph.json"
            default_max_hops = 4
            "#,
        )
        .unwrap();

        assert_eq!(config.graph_path(), PathBuf::from("/data/graph.json"));
        assert_eq!(config.library.default_max_hops, 4);
        assert_eq!(config.catalog.tags.entries().len(), 6);
        assert_eq!(config.server.name, "aurelion-memory");
    }

    #[test]
    fn test_catalog_override() {
        let config: Config = toml::from_str(
            r#"
            [catalog.floors]
            action = ["sprint.md"]

            [[catalog.tags]]
            tag = "fitness"
            documents = ["run.md"]
            "#,
        )
        .unwrap();

        assert_eq!(config.catalog.floors.search(4)[0].name, "sprint.md");
        assert_eq!(config.catalog.tags.search("fit")[0].name, "run.md");
        assert!(config.catalog.tags.search("career").is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".aurelion").join("config.toml");

        let mut config = Config::default();
        config.library.graph_file = "graph.json".into();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.library.graph_file, "graph.json");
        assert_eq!(loaded.catalog.floors, config.catalog.floors);
        assert_eq!(loaded.catalog.tags, config.catalog.tags);
    }

    #[test]
    fn test_load_from_missing_file_errors() {
        let dir = tempdir().unwrap();
        assert!(Config::load_from(&dir.path().join("absent.toml")).is_err());
    }
}
