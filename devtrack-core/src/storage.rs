//! JSON seed snapshot
//!
//! A snapshot bundles the login users, the project list and some metadata in
//! a single pretty-printed JSON file. The tracker reads it at start-up when
//! one is configured; `Snapshot::restore_default` rebuilds the canonical
//! file from scratch.

use anyhow::{Context, Result};
use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::auth::CredentialStore;
use crate::models::{Priority, Project, ProjectStatus};
use crate::registry::ProjectRegistry;

/// Format version written into new snapshots
pub const SNAPSHOT_VERSION: &str = "1.0.0";

/// Bookkeeping stored next to the data
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SnapshotMetadata {
    pub version: String,

    /// Local time the file was generated, `YYYY-MM-DD HH:MM:SS`
    #[serde(rename = "fecha_creacion")]
    pub created_at: String,

    #[serde(rename = "total_proyectos")]
    pub total_projects: usize,

    #[serde(rename = "total_usuarios")]
    pub total_users: usize,
}

/// Contents of a `database.json` file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    #[serde(rename = "usuarios")]
    pub users: BTreeMap<String, String>,

    #[serde(rename = "proyectos")]
    pub projects: Vec<Project>,

    pub metadata: SnapshotMetadata,
}

impl Snapshot {
    /// Builds a snapshot and fills in the metadata counts
    pub fn new(users: BTreeMap<String, String>, projects: Vec<Project>) -> Self {
        let metadata = SnapshotMetadata {
            version: SNAPSHOT_VERSION.to_string(),
            created_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            total_projects: projects.len(),
            total_users: users.len(),
        };

        Self {
            users,
            projects,
            metadata,
        }
    }

    /// The canonical three-project snapshot, with dates relative to `today`
    pub fn restore_default(today: NaiveDate) -> Self {
        let days_ago = |days: i64| today - Duration::days(days);

        let mut users = BTreeMap::new();
        users.insert("admin".to_string(), "1234".to_string());
        users.insert("jacqueline".to_string(), "dev2025".to_string());

        let mut nike = Project::new(1, "E-commerce Zapatillas", "Nike");
        nike.status = ProjectStatus::InProgress;
        nike.estimated_hours = 120;
        nike.completed_tasks = 5;
        nike.priority = Priority::High;
        nike.started_on = Some(days_ago(15));
        nike.updated_on = Some(today);

        let mut landing = Project::new(2, "Landing Page", "Abogado Perez");
        landing.estimated_hours = 10;
        landing.started_on = Some(days_ago(5));
        landing.updated_on = Some(today);

        let mut blog = Project::new(3, "Blog Corporativo", "Tech Solutions");
        blog.status = ProjectStatus::Finished;
        blog.estimated_hours = 40;
        blog.completed_tasks = 40;
        blog.priority = Priority::Low;
        blog.started_on = Some(days_ago(60));
        blog.finished_on = Some(days_ago(10));
        blog.updated_on = Some(today);

        Self::new(users, vec![nike, landing, blog])
    }

    /// Reads a snapshot from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot file: {:?}", path))?;

        let snapshot: Snapshot = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse snapshot file: {:?}", path))?;

        log::info!(
            "Loaded {} project(s) and {} user(s) from {:?}",
            snapshot.projects.len(),
            snapshot.users.len(),
            path
        );
        Ok(snapshot)
    }

    /// Writes the snapshot as pretty-printed JSON, creating parent directories
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).context("Failed to serialize snapshot")?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory {:?}", parent))?;
            }
        }

        fs::write(path, json).with_context(|| format!("Failed to write snapshot to {:?}", path))?;

        log::info!("Wrote snapshot to {:?}", path);
        Ok(())
    }

    /// Splits the snapshot into a registry and the login credentials
    ///
    /// A snapshot without users keeps the built-in logins; otherwise nobody
    /// could sign in.
    pub fn into_parts(self) -> (ProjectRegistry, CredentialStore) {
        let credentials = if self.users.is_empty() {
            log::warn!("Snapshot has no users; keeping the built-in logins");
            CredentialStore::default()
        } else {
            CredentialStore::from(self.users)
        };

        (ProjectRegistry::from_projects(self.projects), credentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ProjectRepository;
    use tempfile::{NamedTempFile, TempDir};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 20).unwrap()
    }

    #[test]
    fn test_restore_default_contents() {
        let snapshot = Snapshot::restore_default(today());

        assert_eq!(snapshot.users.len(), 2);
        assert_eq!(snapshot.users.get("admin"), Some(&"1234".to_string()));
        assert_eq!(snapshot.projects.len(), 3);
        assert_eq!(snapshot.metadata.version, "1.0.0");
        assert_eq!(snapshot.metadata.total_projects, 3);
        assert_eq!(snapshot.metadata.total_users, 2);

        let blog = &snapshot.projects[2];
        assert_eq!(blog.status, ProjectStatus::Finished);
        assert_eq!(blog.started_on, NaiveDate::from_ymd_opt(2025, 1, 19));
        assert_eq!(blog.finished_on, NaiveDate::from_ymd_opt(2025, 3, 10));
        assert_eq!(blog.updated_on, Some(today()));

        assert_eq!(snapshot.projects[0].started_on, NaiveDate::from_ymd_opt(2025, 3, 5));
        assert_eq!(snapshot.projects[1].finished_on, None);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("database.json");

        let snapshot = Snapshot::restore_default(today());
        snapshot.save(&path).unwrap();

        let loaded = Snapshot::load(&path).unwrap();
        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn test_saved_file_uses_snapshot_keys() {
        let temp_file = NamedTempFile::new().unwrap();
        Snapshot::restore_default(today()).save(temp_file.path()).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(temp_file.path()).unwrap()).unwrap();

        assert!(raw["usuarios"].is_object());
        assert_eq!(raw["proyectos"][0]["cliente"], "Nike");
        assert_eq!(raw["proyectos"][0]["prioridad"], serde_json::json!(["Alta", 1]));
        assert_eq!(raw["proyectos"][2]["fecha_fin"], "2025-03-10");
        assert_eq!(raw["metadata"]["total_usuarios"], 2);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let result = Snapshot::load(temp_dir.path().join("absent.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_invalid_json_fails() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), "{ not json").unwrap();

        let err = Snapshot::load(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse snapshot file"));
    }

    #[test]
    fn test_into_parts() {
        let (registry, credentials) = Snapshot::restore_default(today()).into_parts();

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.find_by_id(2).unwrap().client, "Abogado Perez");
        assert!(credentials.verify("jacqueline", "dev2025"));
    }

    #[test]
    fn test_save_fails_when_parent_is_a_file() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().join("database.json");

        let err = Snapshot::restore_default(today()).save(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to create directory"));
    }

    #[test]
    fn test_into_parts_without_users_keeps_built_in_logins() {
        let mut snapshot = Snapshot::restore_default(today());
        snapshot.users.clear();

        let (registry, credentials) = snapshot.into_parts();
        assert_eq!(registry.len(), 3);
        assert!(credentials.verify("admin", "1234"));
        assert!(credentials.verify("jacqueline", "dev2025"));
    }

    #[test]
    fn test_load_ignores_priority_level() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(
            temp_file.path(),
            r#"{
                "usuarios": {"admin": "1234"},
                "proyectos": [
                    {"id": 1, "nombre": "A", "cliente": "X", "estado": "Pendiente",
                     "horas_estimadas": 10, "tareas_completadas": 0, "prioridad": ["Alta", -1]},
                    {"id": 2, "nombre": "B", "cliente": "Y", "estado": "Finalizado",
                     "horas_estimadas": 5, "tareas_completadas": 5, "prioridad": ["Baja", 300]}
                ],
                "metadata": {"version": "1.0.0", "fecha_creacion": "2025-03-20 10:00:00",
                             "total_proyectos": 2, "total_usuarios": 1}
            }"#,
        )
        .unwrap();

        let snapshot = Snapshot::load(temp_file.path()).unwrap();
        assert_eq!(snapshot.projects[0].priority, Priority::High);
        assert_eq!(snapshot.projects[1].priority, Priority::Low);
    }
}
