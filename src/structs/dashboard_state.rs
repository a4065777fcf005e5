use crate::structs::project_record::ProjectRecord;
use crate::ui::chart_builder::ChartRegistry;

/// Owned application state behind the dashboard. Single writer (the data
/// loader), many readers (filter handlers, re-renders). Shared as
/// `Arc<tokio::sync::RwLock<DashboardState>>` by the server.
#[derive(Debug, Default)]
pub struct DashboardState {
    projects: Vec<ProjectRecord>,
    pub charts: ChartRegistry,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source of truth for the filter engine and the table renderer.
    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    /// Wholesale replacement; records are never mutated in place.
    pub fn replace_projects(&mut self, projects: Vec<ProjectRecord>) {
        self.projects = projects;
    }
}
