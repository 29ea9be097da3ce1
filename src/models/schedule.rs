//! Schedule (solution) model.
//!
//! A schedule is the slot-grouped view of a successfully colored
//! conflict graph: for each time slot actually used, the subjects
//! sitting in it. It carries no reference back to the graph — once
//! derived, it is owned entirely by the caller.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ConflictGraph;

/// The subjects assigned to one time slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotGroup {
    /// 0-based slot index. Display layers render it 1-based.
    pub slot: u32,
    /// Subjects in this slot, in graph insertion order.
    pub subjects: Vec<String>,
}

/// A complete exam schedule.
///
/// Groups are held in ascending slot order. Only slots that received at
/// least one subject appear — slot indices need not be contiguous.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    groups: Vec<SlotGroup>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives a schedule from a colored graph.
    ///
    /// Walks nodes in insertion order and appends each subject to its
    /// slot's group, so subject order within a group matches the order
    /// subjects first appeared in the input. Nodes without a slot are
    /// skipped; the colorer guarantees there are none after a
    /// successful run.
    pub fn from_colored_graph(graph: &ConflictGraph) -> Self {
        let mut by_slot: BTreeMap<u32, Vec<String>> = BTreeMap::new();
        for node in graph.nodes() {
            if let Some(slot) = node.slot {
                by_slot.entry(slot).or_default().push(node.subject.clone());
            }
        }

        Self {
            groups: by_slot
                .into_iter()
                .map(|(slot, subjects)| SlotGroup { slot, subjects })
                .collect(),
        }
    }

    /// Slot groups in ascending slot order.
    pub fn groups(&self) -> &[SlotGroup] {
        &self.groups
    }

    /// Number of distinct slots used.
    pub fn slot_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of scheduled subjects.
    pub fn subject_count(&self) -> usize {
        self.groups.iter().map(|g| g.subjects.len()).sum()
    }

    /// Whether the schedule has no subjects.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Subjects in a given slot, if that slot is used.
    pub fn subjects_in_slot(&self, slot: u32) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|g| g.slot == slot)
            .map(|g| g.subjects.as_slice())
    }

    /// The slot a subject was assigned to, if scheduled.
    pub fn slot_of(&self, subject: &str) -> Option<u32> {
        self.groups
            .iter()
            .find(|g| g.subjects.iter().any(|s| s == subject))
            .map(|g| g.slot)
    }
}
