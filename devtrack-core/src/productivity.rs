use crate::models::{Project, ProjectStatus};

/// Total completed tasks across `projects`.
///
/// Recurses over the slice; no loop and no `Iterator::sum`. Each call splits
/// the slice in half, so the depth stays at log2 of the project count even for
/// a large loaded snapshot.
pub fn total_completed_tasks(projects: &[Project]) -> u64 {
    match projects {
        [] => 0,
        [only] => u64::from(only.completed_tasks),
        _ => {
            let (left, right) = projects.split_at(projects.len() / 2);
            total_completed_tasks(left) + total_completed_tasks(right)
        }
    }
}

/// Summary figures shown in the productivity report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProductivityReport {
    pub total_projects: usize,
    pub finished: usize,
    pub in_progress: usize,
    pub pending: usize,
    pub completed_tasks: u64,
}

impl ProductivityReport {
    /// Builds the report for the given projects
    pub fn from_projects(projects: &[Project]) -> Self {
        let count = |status: ProjectStatus| projects.iter().filter(|p| p.status == status).count();

        Self {
            total_projects: projects.len(),
            finished: count(ProjectStatus::Finished),
            in_progress: count(ProjectStatus::InProgress),
            pending: count(ProjectStatus::Pending),
            completed_tasks: total_completed_tasks(projects),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{default_projects, ProjectRegistry, ProjectRepository};

    fn with_tasks(id: u32, tasks: u32) -> Project {
        let mut p = Project::new(id, "P", "C");
        p.completed_tasks = tasks;
        p
    }

    #[test]
    fn test_total_of_empty_list_is_zero() {
        assert_eq!(total_completed_tasks(&[]), 0);
    }

    #[test]
    fn test_total_of_default_projects() {
        // 20 + 0 + 10 + 15 + 5 + 35 + 0 + 45 + 18 + 5
        assert_eq!(total_completed_tasks(&default_projects()), 153);
    }

    #[test]
    fn test_total_is_additive_over_splits() {
        let projects: Vec<Project> = (1..=8).map(|i| with_tasks(i, i * 3)).collect();
        let whole = total_completed_tasks(&projects);

        for mid in 0..=projects.len() {
            let (left, right) = projects.split_at(mid);
            assert_eq!(
                total_completed_tasks(left) + total_completed_tasks(right),
                whole
            );
        }

        let mut reversed = projects.clone();
        reversed.reverse();
        assert_eq!(total_completed_tasks(&reversed), whole);
    }

    #[test]
    fn test_total_does_not_overflow_u32() {
        let projects = vec![with_tasks(1, u32::MAX), with_tasks(2, 1)];
        assert_eq!(total_completed_tasks(&projects), u64::from(u32::MAX) + 1);
    }

    #[test]
    fn test_total_of_large_snapshot() {
        let projects: Vec<Project> = (1..=200_000).map(|i| with_tasks(i, 1 + i % 2)).collect();

        assert_eq!(total_completed_tasks(&projects), 300_000);
        assert_eq!(
            ProductivityReport::from_projects(&projects).completed_tasks,
            300_000
        );
    }

    #[test]
    fn test_report_counts_statuses() {
        let registry = ProjectRegistry::with_default_projects();
        let report = ProductivityReport::from_projects(&registry.list());

        assert_eq!(
            report,
            ProductivityReport {
                total_projects: 10,
                finished: 3,
                in_progress: 4,
                pending: 3,
                completed_tasks: 153,
            }
        );
    }
}
