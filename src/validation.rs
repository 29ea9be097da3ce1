//! Structural integrity checks for conflict graphs.
//!
//! A graph built through [`build_graph`](crate::parser::build_graph)
//! cannot violate these invariants; the checks exist to diagnose graphs
//! that reached the colorer in a corrupted state — the only way an
//! [`InfeasibleError`](crate::coloring::InfeasibleError) can arise in
//! practice. Detects:
//! - Asymmetric adjacency (A lists B, B does not list A)
//! - Self-loops
//! - Adjacency indices out of bounds
//! - Slot assignments present before coloring
//! - Duplicate adjacency entries

use crate::models::ConflictGraph;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A conflict edge is recorded in one direction only.
    AsymmetricAdjacency,
    /// A subject lists itself as a conflict.
    SelfLoop,
    /// An adjacency entry points outside the node table.
    DanglingNeighbor,
    /// A slot was already assigned before coloring ran.
    StaleAssignment,
    /// The same neighbor appears twice in one conflict list.
    DuplicateAdjacency,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the structural invariants of a conflict graph.
///
/// Checks:
/// 1. Every adjacency index is in bounds
/// 2. No subject lists itself
/// 3. No conflict list holds the same neighbor twice
/// 4. Adjacency is symmetric
/// 5. No node carries a slot assignment
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_graph(graph: &ConflictGraph) -> ValidationResult {
    let mut errors = Vec::new();
    let n = graph.len();

    for (i, node) in graph.nodes().iter().enumerate() {
        if node.slot.is_some() {
            errors.push(ValidationError::new(
                ValidationErrorKind::StaleAssignment,
                format!("Subject '{}' already holds slot {:?}", node.subject, node.slot),
            ));
        }

        for (pos, &nb) in node.conflicts.iter().enumerate() {
            if nb >= n {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DanglingNeighbor,
                    format!(
                        "Subject '{}' lists out-of-bounds neighbor index {nb}",
                        node.subject
                    ),
                ));
                continue;
            }

            if nb == i {
                errors.push(ValidationError::new(
                    ValidationErrorKind::SelfLoop,
                    format!("Subject '{}' lists itself as a conflict", node.subject),
                ));
                continue;
            }

            if node.conflicts[..pos].contains(&nb) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateAdjacency,
                    format!(
                        "Subject '{}' lists '{}' more than once",
                        node.subject,
                        graph.nodes()[nb].subject
                    ),
                ));
            }

            if !graph.neighbors(nb).contains(&i) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::AsymmetricAdjacency,
                    format!(
                        "Subject '{}' lists '{}' but not the reverse",
                        node.subject,
                        graph.nodes()[nb].subject
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::build_graph;

    fn sample_graph() -> ConflictGraph {
        build_graph(["A, B", "B, C", "A, C"]).unwrap()
    }

    #[test]
    fn test_built_graph_is_valid() {
        assert!(validate_graph(&sample_graph()).is_ok());
    }

    #[test]
    fn test_empty_graph_is_valid() {
        assert!(validate_graph(&ConflictGraph::new()).is_ok());
    }

    #[test]
    fn test_asymmetric_adjacency() {
        let mut g = ConflictGraph::new();
        g.add_subject("A");
        g.add_subject("B");
        g.push_adjacency_unchecked(0, 1); // no mirror entry

        let errors = validate_graph(&g).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::AsymmetricAdjacency));
    }

    #[test]
    fn test_self_loop() {
        let mut g = ConflictGraph::new();
        g.add_subject("A");
        g.push_adjacency_unchecked(0, 0);

        let errors = validate_graph(&g).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::SelfLoop));
    }

    #[test]
    fn test_dangling_neighbor() {
        let mut g = ConflictGraph::new();
        g.add_subject("A");
        g.push_adjacency_unchecked(0, 7);

        let errors = validate_graph(&g).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DanglingNeighbor));
    }

    #[test]
    fn test_duplicate_adjacency() {
        let mut g = ConflictGraph::new();
        g.add_conflict("A", "B");
        g.push_adjacency_unchecked(0, 1);

        let errors = validate_graph(&g).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateAdjacency));
    }

    #[test]
    fn test_stale_assignment() {
        let mut g = sample_graph();
        g.set_slot(1, Some(0));

        let errors = validate_graph(&g).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::StaleAssignment));
    }

    #[test]
    fn test_multiple_errors_collected() {
        let mut g = ConflictGraph::new();
        g.add_subject("A");
        g.add_subject("B");
        g.push_adjacency_unchecked(0, 0); // self-loop
        g.push_adjacency_unchecked(1, 9); // dangling
        g.set_slot(0, Some(2)); // stale

        let errors = validate_graph(&g).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
