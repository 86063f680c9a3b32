//! Board controller: drag reorder/move, workflow grouping, column and card
//! edits, and the tag filter projection

mod edit;
mod filter;
mod groups;
mod reorder;

#[cfg(test)]
mod property_tests;

pub use edit::{
    add_card, add_column, append_columns, delete_card, delete_column, toggle_card_tag,
    update_card, update_column, CardUpdate, ColumnUpdate, NEW_CARD_TITLE, NEW_COLUMN_TITLE,
};
pub use filter::filter_columns;
pub use groups::{edit_group, set_column_workflow, workflow_groups, GroupEdit, WorkflowGroup};
pub use reorder::{apply_drag, reorder, DragEvent, ItemKind, Location};
