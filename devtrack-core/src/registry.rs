use std::collections::HashSet;

use crate::models::{Priority, Project, ProjectStatus};

/// Core operations every project store must provide
///
/// The menu loop only talks to this trait, so the in-memory registry can be
/// swapped for a persistent store without touching the console code.
pub trait ProjectRepository {
    /// Returns every project in insertion order.
    ///
    /// The result is an owned copy; changing it does not affect the store.
    fn list(&self) -> Vec<Project>;

    /// Adds a project unless its id is missing (zero) or already taken.
    /// Returns true when the project was stored.
    fn add(&mut self, project: Project) -> bool;

    /// Returns the projects with the given status, preserving order
    fn filter_by_status(&self, status: ProjectStatus) -> Vec<Project>;

    /// Looks up a project by id
    fn find_by_id(&self, id: u32) -> Option<&Project>;

    /// Returns true if a project with this id is already stored
    fn contains_id(&self, id: u32) -> bool {
        self.find_by_id(id).is_some()
    }
}

/// In-memory registry of projects
///
/// Projects are kept in insertion order; a set of known ids sits alongside
/// them so duplicate checks do not need to scan the list.
#[derive(Debug, Default)]
pub struct ProjectRegistry {
    projects: Vec<Project>,
    ids: HashSet<u32>,
}

impl ProjectRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the agency's built-in project list
    pub fn with_default_projects() -> Self {
        Self::from_projects(default_projects())
    }

    /// Creates a registry from previously stored projects.
    ///
    /// Records with a missing or repeated id are skipped.
    pub fn from_projects<I>(projects: I) -> Self
    where
        I: IntoIterator<Item = Project>,
    {
        let mut registry = Self::new();
        for project in projects {
            let id = project.id;
            if !registry.add(project) {
                log::warn!("Skipping seed project with missing or duplicate id {}", id);
            }
        }
        registry
    }

    /// Number of stored projects
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl ProjectRepository for ProjectRegistry {
    fn list(&self) -> Vec<Project> {
        self.projects.clone()
    }

    fn add(&mut self, project: Project) -> bool {
        if project.id == 0 || self.ids.contains(&project.id) {
            log::debug!("Rejected project id {}", project.id);
            return false;
        }

        self.ids.insert(project.id);
        log::debug!("Added project {} ({})", project.id, project.name);
        self.projects.push(project);
        true
    }

    fn filter_by_status(&self, status: ProjectStatus) -> Vec<Project> {
        self.projects
            .iter()
            .filter(|p| p.status == status)
            .cloned()
            .collect()
    }

    fn find_by_id(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    fn contains_id(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }
}

fn seed(
    id: u32,
    name: &str,
    client: &str,
    status: ProjectStatus,
    estimated_hours: u32,
    completed_tasks: u32,
    priority: Priority,
) -> Project {
    let mut project = Project::new(id, name, client);
    project.status = status;
    project.estimated_hours = estimated_hours;
    project.completed_tasks = completed_tasks;
    project.priority = priority;
    project
}

/// The ten projects the agency starts every session with
pub fn default_projects() -> Vec<Project> {
    use Priority::{High, Low, Medium};
    use ProjectStatus::{Finished, InProgress, Pending};

    vec![
        seed(1, "Landing Page Turismo", "Andes Travel SpA", InProgress, 40, 20, High),
        seed(2, "E-commerce Repostería", "Dulces & Tentaciones", Pending, 80, 0, Medium),
        seed(3, "Script Automatización Excel", "Consultora Finanzas", Finished, 10, 10, High),
        seed(4, "Integración Webpay", "Tienda Zapatos CL", InProgress, 20, 15, High),
        seed(5, "Mantenimiento Servidor", "Clínica Dental Sonrisas", Finished, 5, 5, Low),
        seed(6, "API Django REST Framework", "Startup TechCL", InProgress, 60, 35, High),
        seed(7, "Scraper Python para Datos", "Agencia Marketing Digital", Pending, 25, 0, Medium),
        seed(8, "Dashboard Flask con Gráficos", "Empresa Logística", Finished, 45, 45, Medium),
        seed(9, "Bot Telegram con Python", "Tienda Online Ropa", InProgress, 30, 18, High),
        seed(10, "Migración Base de Datos", "Corporación Retail", Pending, 50, 5, Low),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: u32, status: ProjectStatus) -> Project {
        let mut p = Project::new(id, format!("Project {}", id), "Client");
        p.status = status;
        p
    }

    #[test]
    fn test_default_registry_has_ten_unique_projects() {
        let registry = ProjectRegistry::with_default_projects();
        assert_eq!(registry.len(), 10);

        let ids: HashSet<u32> = registry.list().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut registry = ProjectRegistry::with_default_projects();
        let seeded = registry.len();

        assert!(registry.add(project(11, ProjectStatus::Pending)));
        assert!(registry.add(project(12, ProjectStatus::Finished)));

        let all = registry.list();
        assert_eq!(all.len(), seeded + 2);
        assert_eq!(all[seeded].id, 11);
        assert_eq!(all[seeded + 1].id, 12);
    }

    #[test]
    fn test_add_duplicate_id_is_rejected() {
        let mut registry = ProjectRegistry::with_default_projects();
        let before = registry.list();

        let mut duplicate = project(3, ProjectStatus::Pending);
        duplicate.name = "Impostor".to_string();
        assert!(!registry.add(duplicate));

        assert_eq!(registry.list(), before);
        assert_eq!(
            registry.find_by_id(3).unwrap().name,
            "Script Automatización Excel"
        );
    }

    #[test]
    fn test_add_missing_id_is_rejected() {
        let mut registry = ProjectRegistry::new();
        assert!(!registry.add(project(0, ProjectStatus::Pending)));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_list_returns_a_copy() {
        let registry = ProjectRegistry::with_default_projects();

        let mut copy = registry.list();
        copy.clear();

        assert_eq!(registry.len(), 10);
        assert_eq!(registry.list().len(), 10);
    }

    #[test]
    fn test_filter_by_status_preserves_order() {
        let registry = ProjectRegistry::with_default_projects();

        let in_progress: Vec<u32> = registry
            .filter_by_status(ProjectStatus::InProgress)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(in_progress, vec![1, 4, 6, 9]);

        let finished: Vec<u32> = registry
            .filter_by_status(ProjectStatus::Finished)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(finished, vec![3, 5, 8]);
    }

    #[test]
    fn test_filter_by_status_without_matches_is_empty() {
        let mut registry = ProjectRegistry::new();
        registry.add(project(1, ProjectStatus::Pending));

        assert!(registry.filter_by_status(ProjectStatus::Finished).is_empty());
    }

    #[test]
    fn test_find_by_id() {
        let registry = ProjectRegistry::with_default_projects();

        assert_eq!(registry.find_by_id(9).unwrap().client, "Tienda Online Ropa");
        assert!(registry.find_by_id(99).is_none());
        assert!(registry.contains_id(10));
        assert!(!registry.contains_id(11));
    }

    #[test]
    fn test_from_projects_skips_duplicates() {
        let registry = ProjectRegistry::from_projects(vec![
            project(1, ProjectStatus::Pending),
            project(2, ProjectStatus::Pending),
            project(1, ProjectStatus::Finished),
        ]);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.find_by_id(1).unwrap().status, ProjectStatus::Pending);
    }

    #[test]
    fn test_many_distinct_adds_keep_ids_unique() {
        let mut registry = ProjectRegistry::with_default_projects();
        let mut accepted = 0;

        for id in [11, 12, 5, 13, 12, 0, 14] {
            if registry.add(project(id, ProjectStatus::Pending)) {
                accepted += 1;
            }
        }

        assert_eq!(accepted, 4);
        let all = registry.list();
        assert_eq!(all.len(), 10 + accepted);
        let ids: HashSet<u32> = all.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), all.len());
    }
}
