pub mod auth;
pub mod config;
pub mod models;
pub mod productivity;
pub mod registry;
pub mod storage;
pub mod validation;

// Re-export commonly used types
pub use auth::{
    AuthError, AuthEvent, AuthState, Authenticator, CredentialStore, MAX_LOGIN_ATTEMPTS,
};
pub use config::{default_restore_path, resolve_database_path};
pub use models::{progress_percent, Priority, Project, ProjectStatus};
pub use productivity::{total_completed_tasks, ProductivityReport};
pub use registry::{default_projects, ProjectRegistry, ProjectRepository};
pub use storage::{Snapshot, SnapshotMetadata};
pub use validation::{
    parse_positive_integer, parse_status_or_default, validate_positive_integer,
    validate_priority, validate_status, ValidationError,
};
