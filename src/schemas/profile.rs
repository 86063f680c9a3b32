//! User profile schema

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingInfo {
    #[serde(default)]
    pub card_holder: String,
    #[serde(default)]
    pub card_number: String,
    #[serde(default)]
    pub expiry: String,
}

/// Profile of the person using the editor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default = "default_plan")]
    pub plan: String,
    #[serde(default)]
    pub billing_info: BillingInfo,
}

fn default_name() -> String {
    "Guest".to_string()
}

fn default_plan() -> String {
    "Free".to_string()
}

impl Default for UserProfile {
    fn default() -> Self {
        UserProfile {
            name: default_name(),
            email: String::new(),
            plan: default_plan(),
            billing_info: BillingInfo::default(),
        }
    }
}

/// Field-by-field patch for a profile; `None` leaves a field alone
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub plan: Option<String>,
    pub billing_info: Option<BillingInfo>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.plan.is_none()
            && self.billing_info.is_none()
    }
}

impl UserProfile {
    /// Return a new profile with the update applied
    pub fn with_update(mut self, update: &ProfileUpdate) -> Self {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(email) = &update.email {
            self.email = email.clone();
        }
        if let Some(plan) = &update.plan {
            self.plan = plan.clone();
        }
        if let Some(billing) = &update.billing_info {
            self.billing_info = billing.clone();
        }
        self
    }
}
