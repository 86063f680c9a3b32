//! Card tags and the tag filter

use serde::{Deserialize, Serialize};

/// Classification attached to a card
///
/// Role tags say who performs the step, release tags say when it ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardTag {
    User,
    System,
    Admin,
    Edge,
    Mvp,
    V1,
    V2,
    OutOfScope,
}

/// Which group of tags a tag belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagCategory {
    Role,
    Release,
}

impl CardTag {
    /// Role tags in display order
    pub const ROLE_TAGS: [CardTag; 4] = [CardTag::User, CardTag::System, CardTag::Admin, CardTag::Edge];

    /// Release tags in display order
    pub const RELEASE_TAGS: [CardTag; 4] =
        [CardTag::Mvp, CardTag::V1, CardTag::V2, CardTag::OutOfScope];

    pub fn category(self) -> TagCategory {
        match self {
            CardTag::User | CardTag::System | CardTag::Admin | CardTag::Edge => TagCategory::Role,
            CardTag::Mvp | CardTag::V1 | CardTag::V2 | CardTag::OutOfScope => TagCategory::Release,
        }
    }

    /// Human-readable badge label
    pub fn label(self) -> &'static str {
        match self {
            CardTag::User => "User",
            CardTag::System => "System",
            CardTag::Admin => "Admin",
            CardTag::Edge => "Edge Case",
            CardTag::Mvp => "MVP",
            CardTag::V1 => "V1",
            CardTag::V2 => "V2",
            CardTag::OutOfScope => "Out of Scope",
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            CardTag::User => "user",
            CardTag::System => "system",
            CardTag::Admin => "admin",
            CardTag::Edge => "edge",
            CardTag::Mvp => "mvp",
            CardTag::V1 => "v1",
            CardTag::V2 => "v2",
            CardTag::OutOfScope => "out-of-scope",
        }
    }
}

impl std::fmt::Display for CardTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CardTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(CardTag::User),
            "system" => Ok(CardTag::System),
            "admin" => Ok(CardTag::Admin),
            "edge" => Ok(CardTag::Edge),
            "mvp" => Ok(CardTag::Mvp),
            "v1" => Ok(CardTag::V1),
            "v2" => Ok(CardTag::V2),
            "out-of-scope" => Ok(CardTag::OutOfScope),
            _ => Err(format!("Unknown card tag: {}", s)),
        }
    }
}

/// Board filter selection: every card, or only cards carrying one tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagFilter {
    #[default]
    All,
    Tag(CardTag),
}

impl std::fmt::Display for TagFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TagFilter::All => f.write_str("all"),
            TagFilter::Tag(tag) => write!(f, "{}", tag),
        }
    }
}

impl std::str::FromStr for TagFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(TagFilter::All),
            other => other.parse().map(TagFilter::Tag),
        }
    }
}
