//! Workflow grouping over the column sequence
//!
//! Group spans use grid-line coordinates: a group covering the 0-based
//! columns `i..=j` has `start = i + 1` and `end = j + 2`.

use serde::{Deserialize, Serialize};

use crate::schemas::Column;

/// A maximal run of adjacent columns sharing one workflow id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowGroup {
    /// `None` for a run of unassigned columns
    pub workflow_id: Option<String>,
    /// 1-based first grid line
    pub start: usize,
    /// Exclusive last grid line
    pub end: usize,
}

/// Edge adjustments offered on a workflow band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupEdit {
    ExtendLeft,
    ExtendRight,
    RetractLeft,
    RetractRight,
}

impl std::str::FromStr for GroupEdit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "extend_left" | "extend-left" => Ok(GroupEdit::ExtendLeft),
            "extend_right" | "extend-right" => Ok(GroupEdit::ExtendRight),
            "retract_left" | "retract-left" => Ok(GroupEdit::RetractLeft),
            "retract_right" | "retract-right" => Ok(GroupEdit::RetractRight),
            _ => Err(format!("Unknown group edit: {}", s)),
        }
    }
}

impl WorkflowGroup {
    /// Whether the span describes at least one column on valid grid lines
    pub fn is_well_formed(&self) -> bool {
        self.start >= 1 && self.end > self.start
    }

    /// Number of columns in the group; `None` for a malformed span
    pub fn span(&self) -> Option<usize> {
        self.end.checked_sub(self.start).filter(|span| *span > 0)
    }

    /// 0-based index of the first column
    pub fn first_index(&self) -> Option<usize> {
        self.start.checked_sub(1)
    }

    /// 0-based index of the last column
    pub fn last_index(&self) -> Option<usize> {
        self.end.checked_sub(2)
    }

    pub fn contains(&self, column_index: usize) -> bool {
        match (self.first_index(), self.last_index()) {
            (Some(first), Some(last)) => column_index >= first && column_index <= last,
            _ => false,
        }
    }

    /// Only bands with a workflow are drawn
    pub fn is_assigned(&self) -> bool {
        self.workflow_id.is_some()
    }

    pub fn can_extend_left(&self) -> bool {
        self.start > 1
    }

    pub fn can_extend_right(&self, total_columns: usize) -> bool {
        self.end <= total_columns
    }

    pub fn can_retract(&self) -> bool {
        self.span().is_some_and(|span| span > 1)
    }

    /// Whether the edit is offered for this group on a board of `total_columns`
    pub fn allows(&self, edit: GroupEdit, total_columns: usize) -> bool {
        match edit {
            GroupEdit::ExtendLeft => self.can_extend_left(),
            GroupEdit::ExtendRight => self.can_extend_right(total_columns),
            GroupEdit::RetractLeft | GroupEdit::RetractRight => self.can_retract(),
        }
    }
}

/// Split the columns into contiguous runs of equal workflow id, left to right.
pub fn workflow_groups(columns: &[Column]) -> Vec<WorkflowGroup> {
    let mut groups: Vec<WorkflowGroup> = Vec::new();

    for (index, column) in columns.iter().enumerate() {
        match groups.last_mut() {
            Some(current) if current.workflow_id == column.workflow_id => {
                current.end = index + 2;
            }
            _ => groups.push(WorkflowGroup {
                workflow_id: column.workflow_id.clone(),
                start: index + 1,
                end: index + 2,
            }),
        }
    }

    groups
}

/// Set or clear the workflow of the column at `index`.
///
/// Returns `None` for an out-of-range index.
pub fn set_column_workflow(
    columns: &[Column],
    index: usize,
    workflow_id: Option<&str>,
) -> Option<Vec<Column>> {
    if index >= columns.len() {
        return None;
    }
    let mut next = columns.to_vec();
    next[index] = next[index].clone().with_workflow(workflow_id.map(str::to_string));
    Some(next)
}

/// Apply an extend/retract edit to a group.
///
/// Each edit is a single-column assignment; the affected index may fall
/// outside the board, in which case nothing changes. A malformed span is
/// also a no-op.
pub fn edit_group(
    columns: &[Column],
    group: &WorkflowGroup,
    edit: GroupEdit,
) -> Option<Vec<Column>> {
    if !group.is_well_formed() {
        return None;
    }
    let workflow_id = group.workflow_id.as_deref();
    match edit {
        GroupEdit::ExtendLeft => {
            let index = group.start.checked_sub(2)?;
            set_column_workflow(columns, index, workflow_id)
        }
        GroupEdit::ExtendRight => set_column_workflow(columns, group.end.checked_sub(1)?, workflow_id),
        GroupEdit::RetractLeft => set_column_workflow(columns, group.first_index()?, None),
        GroupEdit::RetractRight => set_column_workflow(columns, group.last_index()?, None),
    }
}
