//! Conflict graph model.
//!
//! An undirected graph over exam subjects. An edge between two subjects
//! means they share at least one student and must sit in different time
//! slots. Nodes are created in the order subjects first appear in the
//! input; that order drives every traversal, so results are
//! deterministic for a given input.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A subject node in the conflict graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Subject name (trimmed at ingestion).
    pub subject: String,
    /// Assigned time slot. `None` until the colorer commits a solution.
    pub slot: Option<u32>,
    /// Indices of conflicting nodes, in first-seen order, deduplicated.
    pub conflicts: Vec<usize>,
}

impl Node {
    fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            slot: None,
            conflicts: Vec::new(),
        }
    }
}

/// Undirected conflict graph over exam subjects.
///
/// Adjacency is kept symmetric: adding the edge (A, B) records B in A's
/// conflict list and A in B's. Re-adding an existing edge is a no-op,
/// and a subject is never recorded as conflicting with itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConflictGraph {
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
}

impl ConflictGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensures a node exists for `subject`, returning its index.
    ///
    /// A new node starts with an empty conflict list and no slot.
    /// Looking up an existing subject does not change the graph.
    pub fn add_subject(&mut self, subject: &str) -> usize {
        if let Some(&idx) = self.index.get(subject) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(Node::new(subject));
        self.index.insert(subject.to_string(), idx);
        idx
    }

    /// Records that `a` and `b` must not share a time slot.
    ///
    /// Missing nodes are created. A self-pair (`a == b`) creates the
    /// node but records no edge: a subject never conflicts with itself,
    /// so the pair has no scheduling effect. Duplicate pairs are
    /// idempotent.
    pub fn add_conflict(&mut self, a: &str, b: &str) {
        let ia = self.add_subject(a);
        let ib = self.add_subject(b);
        if ia == ib {
            return;
        }
        if !self.nodes[ia].conflicts.contains(&ib) {
            self.nodes[ia].conflicts.push(ib);
        }
        if !self.nodes[ib].conflicts.contains(&ia) {
            self.nodes[ib].conflicts.push(ia);
        }
    }

    /// Number of subjects in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no subjects.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes, in first-insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The node at `idx`, if in bounds.
    pub fn node(&self, idx: usize) -> Option<&Node> {
        self.nodes.get(idx)
    }

    /// Index of `subject`, if present.
    pub fn index_of(&self, subject: &str) -> Option<usize> {
        self.index.get(subject).copied()
    }

    /// Whether `subject` is in the graph.
    pub fn contains(&self, subject: &str) -> bool {
        self.index.contains_key(subject)
    }

    /// Conflict indices of the node at `idx` (empty if out of bounds).
    pub fn neighbors(&self, idx: usize) -> &[usize] {
        self.nodes.get(idx).map(|n| n.conflicts.as_slice()).unwrap_or(&[])
    }

    /// Whether `a` and `b` are recorded as conflicting.
    pub fn in_conflict(&self, a: &str, b: &str) -> bool {
        match (self.index_of(a), self.index_of(b)) {
            (Some(ia), Some(ib)) => self.nodes[ia].conflicts.contains(&ib),
            _ => false,
        }
    }

    /// Assigned slot of `subject`, if present and assigned.
    pub fn slot_of(&self, subject: &str) -> Option<u32> {
        self.index_of(subject).and_then(|i| self.nodes[i].slot)
    }

    /// Subject names in first-insertion order.
    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.subject.as_str())
    }

    /// Writes a slot assignment. Single writer: only the colorer calls
    /// this, and only when committing a complete solution.
    pub(crate) fn set_slot(&mut self, idx: usize, slot: Option<u32>) {
        if let Some(node) = self.nodes.get_mut(idx) {
            node.slot = slot;
        }
    }

    /// Appends a raw adjacency entry without the symmetry and self-loop
    /// guards of [`add_conflict`](Self::add_conflict). Exists so tests
    /// can construct corrupted graphs for the validator.
    #[cfg(test)]
    pub(crate) fn push_adjacency_unchecked(&mut self, from: usize, to: usize) {
        self.nodes[from].conflicts.push(to);
    }
}
