//! Backtracking slot assignment.
//!
//! Assigns each subject one of at most K time slots (K = subject count)
//! so that conflicting subjects never share a slot — exact graph
//! coloring by exhaustive backtracking with first-fit-safe pruning.
//!
//! # Algorithm
//!
//! 1. Visit subjects in graph insertion order.
//! 2. For the current subject, try colors `0..K` ascending; a color is
//!    safe iff no conflicting subject currently holds it.
//! 3. Take the first safe color and advance. If none is safe, step back
//!    to the previous subject and resume from its next untried color.
//! 4. The first complete assignment wins; the search never continues
//!    past it looking for a smaller slot count.
//!
//! The search runs on an explicit work stack (per-subject next-color
//! counters) over a local assignment vector, so its depth is bounded by
//! the heap rather than the call stack, and the graph itself is written
//! only once, when a complete solution is committed. A failed search
//! leaves the graph exactly as it was.
//!
//! # Complexity
//!
//! Worst case O(K^K) — acceptable because conflict lists are entered by
//! hand and K stays small. Correctness-first by design: no
//! most-constrained-variable ordering, no slot-count minimization.

use thiserror::Error;

use crate::models::{ConflictGraph, Schedule};

/// No valid slot assignment exists.
///
/// With K colors available for K subjects this cannot happen for a
/// well-formed conflict graph (a greedy argument always finds a color),
/// so seeing it means the graph's adjacency is corrupted. Diagnose with
/// [`validate_graph`](crate::validation::validate_graph). Kept distinct
/// from [`ParseError`](crate::parser::ParseError) so callers can
/// message the two cases separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unable to generate a valid schedule")]
pub struct InfeasibleError;

/// Colors the graph in place.
///
/// On success every node's `slot` holds its assigned color. On failure
/// the graph is untouched — all slots stay unassigned, so a retry sees
/// the same input and returns the same result.
///
/// The same input always yields the same assignment: subject order is
/// insertion order and colors are tried ascending.
pub fn color_graph(graph: &mut ConflictGraph) -> Result<(), InfeasibleError> {
    let n = graph.len();
    if n == 0 {
        return Ok(());
    }
    let num_colors = n as u32;

    // Local assignment; the graph is only written on success.
    let mut slots: Vec<Option<u32>> = vec![None; n];
    let mut next_color: Vec<u32> = vec![0; n];
    let mut depth = 0usize;

    loop {
        if depth == n {
            for (idx, &slot) in slots.iter().enumerate() {
                graph.set_slot(idx, slot);
            }
            return Ok(());
        }

        let mut placed = false;
        while next_color[depth] < num_colors {
            let color = next_color[depth];
            next_color[depth] += 1;
            if is_safe(graph, &slots, depth, color) {
                slots[depth] = Some(color);
                placed = true;
                break;
            }
        }

        if placed {
            depth += 1;
        } else {
            // Reset this subject for its next visit, then hand control
            // back to the previous one, which resumes at its next color.
            slots[depth] = None;
            next_color[depth] = 0;
            if depth == 0 {
                return Err(InfeasibleError);
            }
            depth -= 1;
            slots[depth] = None;
        }
    }
}

/// Whether `color` clashes with none of subject `idx`'s conflicts.
///
/// A subject is never checked against itself, so a (corrupt) self-loop
/// entry cannot make its own tentative color unsafe.
fn is_safe(graph: &ConflictGraph, slots: &[Option<u32>], idx: usize, color: u32) -> bool {
    graph
        .neighbors(idx)
        .iter()
        .all(|&nb| nb == idx || slots.get(nb).copied().flatten() != Some(color))
}

/// Colors the graph and derives the slot-grouped schedule.
///
/// The entry point the presentation layer calls after
/// [`build_graph`](crate::parser::build_graph).
///
/// # Example
///
/// ```
/// use exam_slots::coloring::color_and_schedule;
/// use exam_slots::parser::build_graph;
///
/// let mut graph = build_graph(["Math, Physics", "Physics, Chemistry"]).unwrap();
/// let schedule = color_and_schedule(&mut graph).unwrap();
///
/// // Math and Chemistry do not conflict, so they share slot 0.
/// assert_eq!(schedule.slot_count(), 2);
/// assert_eq!(schedule.slot_of("Math"), schedule.slot_of("Chemistry"));
/// assert_ne!(schedule.slot_of("Math"), schedule.slot_of("Physics"));
/// ```
pub fn color_and_schedule(graph: &mut ConflictGraph) -> Result<Schedule, InfeasibleError> {
    color_graph(graph)?;
    Ok(Schedule::from_colored_graph(graph))
}
