//! Conflict list ingestion.
//!
//! Turns raw text lines of the form `"<subjectA>, <subjectB>"` into a
//! [`ConflictGraph`]. Ingestion is all-or-nothing: the first malformed
//! line aborts the whole build and no partial graph is returned.
//!
//! # Line format
//!
//! One conflict pair per line, two names separated by a comma. Names
//! are trimmed of surrounding whitespace; a line must yield exactly two
//! non-empty names. Blank lines are rejected, not skipped.

use thiserror::Error;

use crate::models::ConflictGraph;

/// Ingestion failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A line did not yield exactly two non-empty subject names.
    #[error("invalid input format at line {line_no}: {line:?}")]
    InvalidInputFormat {
        /// 1-based line number of the offending line.
        line_no: usize,
        /// The offending line, verbatim.
        line: String,
    },
}

/// Builds a conflict graph from an ordered sequence of raw lines.
///
/// Each valid pair (A, B) ensures nodes for both subjects exist and
/// records the conflict symmetrically. Duplicate pairs are idempotent;
/// a self-pair creates the subject but records no conflict.
///
/// # Errors
///
/// [`ParseError::InvalidInputFormat`] on the first line that does not
/// split into exactly two non-empty trimmed names. Edges from earlier
/// lines are discarded along with the rest of the build.
///
/// # Example
///
/// ```
/// use exam_slots::parser::build_graph;
///
/// let graph = build_graph(["Math, Physics", "Physics, Chemistry"]).unwrap();
/// assert_eq!(graph.len(), 3);
/// assert!(graph.in_conflict("Math", "Physics"));
/// assert!(!graph.in_conflict("Math", "Chemistry"));
/// ```
pub fn build_graph<I, S>(lines: I) -> Result<ConflictGraph, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut graph = ConflictGraph::new();

    for (i, line) in lines.into_iter().enumerate() {
        let raw = line.as_ref();
        let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
        match parts.as_slice() {
            [a, b] if !a.is_empty() && !b.is_empty() => graph.add_conflict(a, b),
            _ => {
                return Err(ParseError::InvalidInputFormat {
                    line_no: i + 1,
                    line: raw.to_string(),
                })
            }
        }
    }

    Ok(graph)
}

/// Builds a conflict graph from a whole text block.
///
/// Trims the block, then feeds it line by line to [`build_graph`].
/// Convenience for callers holding a text-area or file payload rather
/// than pre-split lines.
pub fn build_graph_from_text(text: &str) -> Result<ConflictGraph, ParseError> {
    build_graph(text.trim().lines())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_pairs() {
        let g = build_graph(["A, B", "B, C"]).unwrap();
        assert_eq!(g.len(), 3);
        assert!(g.in_conflict("A", "B"));
        assert!(g.in_conflict("B", "C"));
        assert!(!g.in_conflict("A", "C"));
    }

    #[test]
    fn test_whitespace_trimmed() {
        let g = build_graph(["  Math ,\tPhysics  "]).unwrap();
        assert!(g.contains("Math"));
        assert!(g.contains("Physics"));
        assert!(g.in_conflict("Math", "Physics"));
    }

    #[test]
    fn test_crlf_line_endings() {
        let g = build_graph_from_text("A, B\r\nB, C\r\n").unwrap();
        assert_eq!(g.len(), 3);
        assert!(g.in_conflict("B", "C"));
    }

    #[test]
    fn test_missing_second_name_fails() {
        let err = build_graph(["A, B", "C"]).unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidInputFormat {
                line_no: 2,
                line: "C".to_string(),
            }
        );
    }

    #[test]
    fn test_blank_line_fails() {
        let err = build_graph(["A, B", "", "B, C"]).unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidInputFormat { line_no: 2, .. }
        ));
    }

    #[test]
    fn test_empty_name_fails() {
        let err = build_graph(["A, "]).unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidInputFormat { line_no: 1, .. }
        ));
    }

    #[test]
    fn test_three_names_fail() {
        let err = build_graph(["A, B, C"]).unwrap_err();
        assert!(matches!(err, ParseError::InvalidInputFormat { .. }));
    }

    #[test]
    fn test_first_malformed_line_aborts() {
        // Nothing built from the lines before or after the bad one.
        let result = build_graph(["A, B", "oops", "C, D"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_duplicate_pair_matches_single_pair() {
        let once = build_graph(["A, B"]).unwrap();
        let twice = build_graph(["A, B", "A, B"]).unwrap();
        assert_eq!(once.len(), twice.len());
        assert_eq!(once.neighbors(0), twice.neighbors(0));
        assert_eq!(once.neighbors(1), twice.neighbors(1));
    }

    #[test]
    fn test_self_pair_accepted_as_noop() {
        let g = build_graph(["A, A"]).unwrap();
        assert_eq!(g.len(), 1);
        assert!(g.neighbors(0).is_empty());
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let g = build_graph(["math, Math"]).unwrap();
        assert_eq!(g.len(), 2);
    }

    #[test]
    fn test_empty_input_builds_empty_graph() {
        let g = build_graph(std::iter::empty::<&str>()).unwrap();
        assert!(g.is_empty());
        // A whitespace-only block trims to nothing at all.
        let g = build_graph_from_text("   \n  ").unwrap();
        assert!(g.is_empty());
    }

    #[test]
    fn test_error_display() {
        let err = ParseError::InvalidInputFormat {
            line_no: 3,
            line: "just-one-name".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid input format at line 3: \"just-one-name\""
        );
    }
}
