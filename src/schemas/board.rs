//! Board schema - cards, journey-step columns and workflow bands

use serde::{Deserialize, Serialize};

use super::CardTag;

/// Background used when a workflow has no color of its own
pub const DEFAULT_WORKFLOW_COLOR: &str = "#f3f4f6";

/// Color assigned to workflows created from a column header
pub const NEW_WORKFLOW_COLOR: &str = "#F3F4F6";

/// Colors offered for workflow bands
pub const WORKFLOW_PALETTE: [&str; 7] = [
    "#E0F2FE", // blue
    "#F0FDF4", // green
    "#FEF2F2", // red
    "#FFF7ED", // orange
    "#F3F4F6", // gray
    "#FDF2F8", // pink
    "#FAF5FF", // purple
];

/// A single journey action or event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique within its column, never changes
    pub id: String,

    /// Never empty after trimming
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Treated as a set; order is insertion order
    #[serde(default)]
    pub tags: Vec<CardTag>,
}

impl Card {
    pub fn new(id: String, title: String) -> Self {
        Card {
            id,
            title,
            description: None,
            tags: Vec::new(),
        }
    }

    pub fn has_tag(&self, tag: CardTag) -> bool {
        self.tags.contains(&tag)
    }

    // ===== IMMUTABLE BUILDER METHODS =====

    /// Return a new Card with the trimmed title; a blank title keeps the old one
    pub fn with_title(mut self, title: &str) -> Self {
        let trimmed = title.trim();
        if !trimmed.is_empty() {
            self.title = trimmed.to_string();
        }
        self
    }

    /// Return a new Card with the trimmed description; blank clears it
    pub fn with_description(mut self, description: Option<&str>) -> Self {
        self.description = description
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);
        self
    }

    /// Return a new Card with exactly these tags, duplicates dropped
    pub fn with_tags(mut self, tags: Vec<CardTag>) -> Self {
        let mut unique = Vec::with_capacity(tags.len());
        for tag in tags {
            if !unique.contains(&tag) {
                unique.push(tag);
            }
        }
        self.tags = unique;
        self
    }

    /// Return a new Card with the tag removed if present, appended otherwise
    pub fn with_tag_toggled(mut self, tag: CardTag) -> Self {
        if self.has_tag(tag) {
            self.tags.retain(|t| *t != tag);
        } else {
            self.tags.push(tag);
        }
        self
    }
}

/// Named, colored band grouping adjacent columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workflow {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Workflow {
    pub fn new(id: String, title: String, color: Option<String>) -> Self {
        Workflow { id, title, color }
    }

    /// Color to paint the band with
    pub fn display_color(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_WORKFLOW_COLOR)
    }
}

/// A journey step holding an ordered list of cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub cards: Vec<Card>,

    /// Weak reference to a workflow of the owning persona; may be stale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_id: Option<String>,
}

impl Column {
    pub fn new(id: String, title: String) -> Self {
        Column {
            id,
            title,
            cards: Vec::new(),
            workflow_id: None,
        }
    }

    pub fn card(&self, card_id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == card_id)
    }

    // ===== IMMUTABLE BUILDER METHODS =====

    /// Return a new Column with the trimmed title; a blank title keeps the old one
    pub fn with_title(mut self, title: &str) -> Self {
        let trimmed = title.trim();
        if !trimmed.is_empty() {
            self.title = trimmed.to_string();
        }
        self
    }

    pub fn with_cards(mut self, cards: Vec<Card>) -> Self {
        self.cards = cards;
        self
    }

    pub fn with_workflow(mut self, workflow_id: Option<String>) -> Self {
        self.workflow_id = workflow_id;
        self
    }
}
