use chrono::NaiveDate;
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents the status of a project
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum ProjectStatus {
    #[default]
    #[serde(rename = "Pendiente")]
    Pending,
    #[serde(rename = "En Progreso")]
    InProgress,
    #[serde(rename = "Finalizado")]
    Finished,
}

impl ProjectStatus {
    /// All statuses, in workflow order
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::Pending,
        ProjectStatus::InProgress,
        ProjectStatus::Finished,
    ];

    /// Label used in the seed snapshot
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Pending => "Pendiente",
            ProjectStatus::InProgress => "En Progreso",
            ProjectStatus::Finished => "Finalizado",
        }
    }

    /// Parse a status from either its snapshot label or its English name.
    /// Surrounding whitespace and letter case are ignored.
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pendiente" | "pending" => Some(ProjectStatus::Pending),
            "en progreso" | "in progress" | "in-progress" | "inprogress" => {
                Some(ProjectStatus::InProgress)
            }
            "finalizado" | "finished" => Some(ProjectStatus::Finished),
            _ => None,
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectStatus::Pending => write!(f, "Pending"),
            ProjectStatus::InProgress => write!(f, "In Progress"),
            ProjectStatus::Finished => write!(f, "Finished"),
        }
    }
}

/// Represents the priority of a project.
///
/// On the wire a priority is the pair `[label, level]`, e.g. `["Alta", 1]`.
/// Only the label is trusted when reading; the level is always derived from
/// it so the pair can never disagree, and a level of any type or range is
/// accepted and dropped.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(from = "(String, IgnoredAny)", into = "(String, u8)")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Fixed rank of the priority (1 is the most urgent)
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }

    /// Label used in the seed snapshot
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "Alta",
            Priority::Medium => "Media",
            Priority::Low => "Baja",
        }
    }

    /// Parse a priority label, ignoring surrounding whitespace and case
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "alta" | "high" => Some(Priority::High),
            "media" | "medium" => Some(Priority::Medium),
            "baja" | "low" => Some(Priority::Low),
            _ => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => write!(f, "High"),
            Priority::Medium => write!(f, "Medium"),
            Priority::Low => write!(f, "Low"),
        }
    }
}

impl From<(String, IgnoredAny)> for Priority {
    fn from((label, _level): (String, IgnoredAny)) -> Self {
        Priority::from_label(&label).unwrap_or_default()
    }
}

impl From<Priority> for (String, u8) {
    fn from(priority: Priority) -> Self {
        (priority.label().to_string(), priority.rank())
    }
}

/// Represents a single project tracked by the agency
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    /// Unique, positive identifier
    pub id: u32,

    /// Project name
    #[serde(rename = "nombre")]
    pub name: String,

    /// Client the project is delivered to
    #[serde(rename = "cliente")]
    pub client: String,

    #[serde(rename = "estado")]
    pub status: ProjectStatus,

    /// Estimated effort in hours, used as the progress denominator
    #[serde(rename = "horas_estimadas")]
    pub estimated_hours: u32,

    #[serde(rename = "tareas_completadas")]
    pub completed_tasks: u32,

    #[serde(rename = "prioridad")]
    pub priority: Priority,

    #[serde(rename = "fecha_inicio", default, skip_serializing_if = "Option::is_none")]
    pub started_on: Option<NaiveDate>,

    #[serde(rename = "fecha_fin", default, skip_serializing_if = "Option::is_none")]
    pub finished_on: Option<NaiveDate>,

    #[serde(
        rename = "fecha_actualizacion",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_on: Option<NaiveDate>,
}

impl Project {
    /// Creates a pending, medium priority project with no recorded work
    pub fn new(id: u32, name: impl Into<String>, client: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            client: client.into(),
            status: ProjectStatus::default(),
            estimated_hours: 1,
            completed_tasks: 0,
            priority: Priority::default(),
            started_on: None,
            finished_on: None,
            updated_on: None,
        }
    }

    /// Completed tasks relative to estimated hours, clamped to `0.0..=100.0`
    pub fn progress_percent(&self) -> f64 {
        progress_percent(self.completed_tasks, self.estimated_hours)
    }
}

/// Progress percentage for the given counts.
///
/// Returns `0.0` when no hours are estimated and never exceeds `100.0`.
pub fn progress_percent(completed_tasks: u32, estimated_hours: u32) -> f64 {
    if estimated_hours == 0 {
        return 0.0;
    }

    let percent = f64::from(completed_tasks) / f64::from(estimated_hours) * 100.0;
    percent.min(100.0)
}
