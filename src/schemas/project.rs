//! Project schema - a named container of personas

use serde::{Deserialize, Serialize};

use super::Persona;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub personas: Vec<Persona>,

    /// References a persona of this project, or null
    #[serde(default)]
    pub active_persona_id: Option<String>,
}

impl Project {
    pub fn new(id: String, name: String) -> Self {
        Project {
            id,
            name,
            personas: Vec::new(),
            active_persona_id: None,
        }
    }

    pub fn persona(&self, persona_id: &str) -> Option<&Persona> {
        self.personas.iter().find(|p| p.id == persona_id)
    }

    pub fn active_persona(&self) -> Option<&Persona> {
        self.active_persona_id
            .as_deref()
            .and_then(|id| self.persona(id))
    }

    pub(crate) fn active_persona_mut(&mut self) -> Option<&mut Persona> {
        let id = self.active_persona_id.clone()?;
        self.personas.iter_mut().find(|p| p.id == id)
    }
}
