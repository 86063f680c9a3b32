//! Application state - the root aggregate that gets persisted

use serde::{Deserialize, Serialize};

use super::{Persona, Project, UserProfile};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    #[serde(default)]
    pub projects: Vec<Project>,

    /// References a project in `projects`, or null
    #[serde(default)]
    pub active_project_id: Option<String>,

    #[serde(default)]
    pub user: UserProfile,
}

impl AppState {
    /// A state with no projects at all
    pub fn empty() -> Self {
        AppState {
            projects: Vec::new(),
            active_project_id: None,
            user: UserProfile::default(),
        }
    }

    pub fn project(&self, project_id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == project_id)
    }

    pub fn active_project(&self) -> Option<&Project> {
        self.active_project_id
            .as_deref()
            .and_then(|id| self.project(id))
    }

    pub fn active_persona(&self) -> Option<&Persona> {
        self.active_project().and_then(Project::active_persona)
    }

    pub(crate) fn active_project_mut(&mut self) -> Option<&mut Project> {
        let id = self.active_project_id.clone()?;
        self.projects.iter_mut().find(|p| p.id == id)
    }

    pub(crate) fn active_persona_mut(&mut self) -> Option<&mut Persona> {
        self.active_project_mut().and_then(Project::active_persona_mut)
    }
}
