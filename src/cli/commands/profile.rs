//! Profile command - Show or update the user profile

use std::path::Path;

use crate::domain::Command;
use crate::errors::Result;
use crate::schemas::{BillingInfo, ProfileUpdate, UserProfile};

use super::context::Workspace;

/// Profile fields given on the command line
#[derive(Debug, Default)]
pub struct ProfileArgs {
    pub name: Option<String>,
    pub email: Option<String>,
    pub plan: Option<String>,
    pub card_holder: Option<String>,
    pub card_number: Option<String>,
    pub expiry: Option<String>,
}

impl ProfileArgs {
    /// Billing fields are patched onto the current billing info.
    fn into_update(self, current: &UserProfile) -> ProfileUpdate {
        let billing_info = if self.card_holder.is_some() || self.card_number.is_some() || self.expiry.is_some() {
            let base = &current.billing_info;
            Some(BillingInfo {
                card_holder: self.card_holder.unwrap_or_else(|| base.card_holder.clone()),
                card_number: self.card_number.unwrap_or_else(|| base.card_number.clone()),
                expiry: self.expiry.unwrap_or_else(|| base.expiry.clone()),
            })
        } else {
            None
        };

        ProfileUpdate {
            name: self.name,
            email: self.email,
            plan: self.plan,
            billing_info,
        }
    }
}

pub fn run(cwd: Option<&Path>, dry_run: bool, args: ProfileArgs) -> Result<()> {
    let mut workspace = Workspace::open(cwd, dry_run)?;
    let update = args.into_update(&workspace.store.state().user);

    if !update.is_empty() {
        workspace.apply(Command::UpdateUserProfile(update))?;
    }

    let user = &workspace.store.state().user;
    println!("Name:  {}", user.name);
    println!("Email: {}", user.email);
    println!("Plan:  {}", user.plan);
    if !user.billing_info.card_number.is_empty() {
        println!("Card:  {}", masked(&user.billing_info.card_number));
    }
    Ok(())
}

/// Only the last four digits of a card number
fn masked(card_number: &str) -> String {
    let digits: Vec<char> = card_number.chars().filter(|c| c.is_ascii_digit()).collect();
    let tail: String = digits[digits.len().saturating_sub(4)..].iter().collect();
    format!("**** {}", tail)
}
