//! Agent knowledge base: built-in profiles plus optional custom ones.

pub mod builtin;
pub mod parser;

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::models::AgentProfile;

/// Errors from catalog loading.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read agent profile {path}: {source}")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse agent profile: {0}")]
    ParseError(String),

    #[error("duplicate agent name: {0}")]
    DuplicateAgent(String),
}

/// Ordered, immutable map of agent name to profile.
///
/// Iteration order is definition order: built-ins first, then custom
/// profiles sorted by file name. Ranking ties resolve in this order.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    agents: IndexMap<String, AgentProfile>,
}

impl Catalog {
    /// Build a catalog from profiles, rejecting duplicate names.
    pub fn from_profiles(
        profiles: impl IntoIterator<Item = AgentProfile>,
    ) -> Result<Self, CatalogError> {
        let mut agents = IndexMap::new();
        for profile in profiles {
            if agents.contains_key(&profile.name) {
                return Err(CatalogError::DuplicateAgent(profile.name));
            }
            agents.insert(profile.name.clone(), profile);
        }
        Ok(Self { agents })
    }

    /// The built-in catalog (Copilot, Cursor, Replit).
    pub fn builtin() -> Result<Self, CatalogError> {
        let profiles = builtin::list_builtin_names()
            .into_iter()
            .map(|name| {
                builtin::get_builtin(name).ok_or_else(|| {
                    CatalogError::ParseError(format!("built-in profile '{name}' is invalid"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_profiles(profiles)
    }

    /// Built-in catalog extended with every `*.yaml`/`*.yml` profile in
    /// `profile_dir`.
    ///
    /// Invalid custom files are skipped with a warning; a missing directory
    /// is treated as empty.
    pub async fn load(profile_dir: Option<&Path>) -> Result<Self, CatalogError> {
        let mut profiles: Vec<AgentProfile> = Self::builtin()?.agents.into_values().collect();

        if let Some(dir) = profile_dir {
            profiles.extend(load_custom_profiles(dir).await?);
        }

        Self::from_profiles(profiles)
    }

    /// Look up a profile by agent name.
    pub fn get(&self, name: &str) -> Option<&AgentProfile> {
        self.agents.get(name)
    }

    /// Profiles in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &AgentProfile> {
        self.agents.values()
    }

    /// Agent names in catalog order.
    pub fn names(&self) -> Vec<&str> {
        self.agents.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

/// Serialized as `{ "<name>": { ...profile fields... }, ... }`.
impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.agents.serialize(serializer)
    }
}

async fn load_custom_profiles(dir: &Path) -> Result<Vec<AgentProfile>, CatalogError> {
    if !dir.exists() {
        tracing::warn!("profile directory {} does not exist, ignoring", dir.display());
        return Ok(Vec::new());
    }
    if !dir.is_dir() {
        tracing::warn!("profile directory {} is not a directory, ignoring", dir.display());
        return Ok(Vec::new());
    }

    let read_err = |e| CatalogError::ReadError {
        path: dir.display().to_string(),
        source: e,
    };

    let mut paths: Vec<PathBuf> = Vec::new();
    let mut entries = tokio::fs::read_dir(dir).await.map_err(read_err)?;
    while let Some(entry) = entries.next_entry().await.map_err(read_err)? {
        let path = entry.path();
        if path
            .extension()
            .is_some_and(|e| e == "yaml" || e == "yml")
        {
            paths.push(path);
        }
    }
    paths.sort();

    let mut profiles = Vec::new();
    for path in paths {
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| CatalogError::ReadError {
                path: path.display().to_string(),
                source: e,
            })?;
        match parser::parse_agent_profile(&content) {
            Ok(profile) => {
                tracing::debug!("loaded custom agent profile {} from {}", profile.name, path.display());
                profiles.push(profile);
            }
            Err(e) => {
                tracing::warn!("skipping {}: {e}", path.display());
            }
        }
    }

    Ok(profiles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_order() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.names(), vec!["Copilot", "Cursor", "Replit"]);
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn duplicate_names_rejected() {
        let copilot = builtin::get_builtin("Copilot").unwrap();
        let result = Catalog::from_profiles(vec![copilot.clone(), copilot]);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("duplicate agent name: Copilot"), "got: {err}");
    }

    #[test]
    fn serializes_as_name_keyed_map() {
        let catalog = Catalog::builtin().unwrap();
        let json = serde_json::to_value(&catalog).unwrap();
        let obj = json.as_object().unwrap();
        let keys: Vec<_> = obj.keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 3);
        assert!(obj["Cursor"].get("name").is_none());
        assert_eq!(obj["Cursor"]["tools"].as_array().unwrap().len(), 10);
        assert_eq!(
            obj["Cursor"]["complexity_handling"],
            serde_json::json!(["medium", "complex", "very_complex"])
        );
    }

    #[tokio::test]
    async fn load_without_profile_dir_is_builtin() {
        let catalog = Catalog::load(None).await.unwrap();
        assert_eq!(catalog, Catalog::builtin().unwrap());
    }

    #[tokio::test]
    async fn load_appends_custom_profiles_sorted_by_file_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.yaml"), "name: Zed\npricing: Free").unwrap();
        std::fs::write(dir.path().join("a.yml"), "name: Aider\npricing: Free").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not a profile").unwrap();

        let catalog = Catalog::load(Some(dir.path())).await.unwrap();
        assert_eq!(
            catalog.names(),
            vec!["Copilot", "Cursor", "Replit", "Aider", "Zed"]
        );
    }

    #[tokio::test]
    async fn load_skips_invalid_custom_profiles() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bad.yaml"), "strengths: [no name]").unwrap();

        let catalog = Catalog::load(Some(dir.path())).await.unwrap();
        assert_eq!(catalog.len(), 3);
    }

    #[tokio::test]
    async fn load_rejects_custom_profile_shadowing_builtin() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("copilot.yaml"), "name: Copilot").unwrap();

        let result = Catalog::load(Some(dir.path())).await;
        assert!(matches!(result, Err(CatalogError::DuplicateAgent(ref n)) if n == "Copilot"));
    }

    #[tokio::test]
    async fn load_nonexistent_profile_dir() {
        let catalog = Catalog::load(Some(Path::new("/tmp/agentmatch_no_such_dir")))
            .await
            .unwrap();
        assert_eq!(catalog.len(), 3);
    }

    #[tokio::test]
    async fn load_ignores_profile_dir_that_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("agents.yaml");
        std::fs::write(&file, "name: Aider\npricing: Free").unwrap();

        let catalog = Catalog::load(Some(&file)).await.unwrap();
        assert_eq!(catalog.names(), vec!["Copilot", "Cursor", "Replit"]);
    }
}
