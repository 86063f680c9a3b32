//! Seed entities and the hard-coded default state

use crate::schemas::{new_id, AppState, Card, CardTag, Column, Persona, Project, UserProfile, Workflow};

/// A persona with placeholder copy and three empty steps
pub fn default_persona(name: &str) -> Persona {
    let mut persona = Persona::new(new_id(), name.to_string());
    persona.description = "Describe this persona...".to_string();
    persona.goals = vec!["Add a goal...".to_string()];
    persona.pain_points = vec!["Add a pain point...".to_string()];
    persona.columns = (1..=3)
        .map(|step| Column::new(new_id(), format!("Step {}", step)))
        .collect();
    persona
}

/// A project holding a single active default persona
pub fn default_project(name: &str) -> Project {
    let persona = default_persona("Persona 1");
    let mut project = Project::new(new_id(), name.to_string());
    project.active_persona_id = Some(persona.id.clone());
    project.personas.push(persona);
    project
}

/// The state used when nothing has been saved yet.
///
/// With `seed_sample_data` the board opens on the sample project, otherwise on
/// one empty project.
pub fn default_state(seed_sample_data: bool) -> AppState {
    if seed_sample_data {
        return sample_state();
    }
    let project = default_project("Project 1");
    AppState {
        active_project_id: Some(project.id.clone()),
        projects: vec![project],
        user: UserProfile::default(),
    }
}

fn card(id: &str, title: &str, description: Option<&str>, tags: &[CardTag]) -> Card {
    Card::new(id.to_string(), title.to_string())
        .with_description(description)
        .with_tags(tags.to_vec())
}

fn column(id: &str, title: &str, workflow_id: &str, cards: Vec<Card>) -> Column {
    Column::new(id.to_string(), title.to_string())
        .with_cards(cards)
        .with_workflow(Some(workflow_id.to_string()))
}

/// Demo project: a device protection app seen through one persona
pub fn sample_state() -> AppState {
    let persona = Persona {
        id: "persona-1".to_string(),
        name: "Alex Chen".to_string(),
        description: "A busy professional who wants to protect their household electronics and \
                      appliances with minimal effort. Values convenience and peace of mind."
            .to_string(),
        goals: vec![
            "Easily register devices for protection".to_string(),
            "Quick claim submission when issues arise".to_string(),
            "Clear visibility of coverage status".to_string(),
        ],
        pain_points: vec![
            "Too many steps to submit a claim".to_string(),
            "Unclear warranty coverage terms".to_string(),
            "Difficulty tracking multiple devices".to_string(),
        ],
        workflows: vec![
            Workflow::new("wf-onboarding".to_string(), "Onboarding".to_string(), Some("#E0F2FE".to_string())),
            Workflow::new("wf-usage".to_string(), "Active Usage".to_string(), Some("#F0FDF4".to_string())),
            Workflow::new("wf-support".to_string(), "Support & Claims".to_string(), Some("#FEF2F2".to_string())),
        ],
        columns: vec![
            column(
                "col-1",
                "Evidence Event / Trigger",
                "wf-onboarding",
                vec![
                    card(
                        "card-1",
                        "User receives device purchase confirmation email",
                        Some("Email contains receipt/invoice with product details"),
                        &[CardTag::System],
                    ),
                    card("card-2", "User discovers device issue requiring claim", None, &[CardTag::User]),
                ],
            ),
            column(
                "col-2",
                "Registration & Authentication",
                "wf-onboarding",
                vec![
                    card("card-3", "User logs in with phone number & verification code", None, &[CardTag::User]),
                    card("card-4", "System sends OTP via SMS", None, &[CardTag::System]),
                    card(
                        "card-5",
                        "Alternative: Social login (Google/Apple)",
                        Some("Fallback if SMS fails or user prefers"),
                        &[CardTag::User, CardTag::Edge],
                    ),
                ],
            ),
            column(
                "col-3",
                "Home Page",
                "wf-usage",
                vec![
                    card("card-6", "User views dashboard with registered devices", None, &[CardTag::User]),
                    card("card-7", "System displays coverage status indicators", None, &[CardTag::System]),
                ],
            ),
            column(
                "col-4",
                "Device Details",
                "wf-usage",
                vec![
                    card("card-9", "User views device info and warranty details", None, &[CardTag::User]),
                    card("card-10", "Upload evidence (optional)", Some("Receipt, photos, manual"), &[CardTag::User]),
                ],
            ),
            column(
                "col-5",
                "Claims",
                "wf-support",
                vec![
                    card("card-12", "User initiates claim for device", None, &[CardTag::User]),
                    card("card-13", "Upload photos of damage/issue", None, &[CardTag::User]),
                ],
            ),
        ],
    };

    AppState {
        projects: vec![Project {
            id: "project-1".to_string(),
            name: "Device Protection App".to_string(),
            personas: vec![persona],
            active_persona_id: Some("persona-1".to_string()),
        }],
        active_project_id: Some("project-1".to_string()),
        user: UserProfile::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::workflow_groups;

    #[test]
    fn test_default_persona_shape() {
        let persona = default_persona("Persona 2");
        assert_eq!(persona.name, "Persona 2");
        assert_eq!(persona.columns.len(), 3);
        assert_eq!(persona.columns[0].title, "Step 1");
        assert_eq!(persona.columns[2].title, "Step 3");
        assert!(persona.columns.iter().all(|c| c.cards.is_empty()));
        assert!(persona.workflows.is_empty());
    }

    #[test]
    fn test_default_project_has_active_persona() {
        let project = default_project("Project 2");
        assert_eq!(project.personas.len(), 1);
        assert_eq!(project.active_persona().map(|p| p.name.as_str()), Some("Persona 1"));
    }

    #[test]
    fn test_sample_state_is_consistent() {
        let state = sample_state();
        let persona = state.active_persona().unwrap();
        assert_eq!(persona.name, "Alex Chen");
        assert_eq!(persona.columns.len(), 5);
        assert_eq!(persona.card_count(), 11);
        for column in &persona.columns {
            let wf = column.workflow_id.as_deref().unwrap();
            assert!(persona.workflow(wf).is_some());
        }
        assert_eq!(workflow_groups(&persona.columns).len(), 3);
    }

    #[test]
    fn test_default_state_without_sample() {
        let state = default_state(false);
        assert_eq!(state.projects.len(), 1);
        assert_eq!(state.active_project().map(|p| p.name.as_str()), Some("Project 1"));
        assert!(state.active_persona().is_some());
    }
}
