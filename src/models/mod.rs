//! Exam timetabling domain models.
//!
//! Provides the core data types for conflict-based exam scheduling:
//! the conflict graph built from raw input, and the slot-grouped
//! schedule derived from a colored graph.
//!
//! | exam-slots | Timetabling meaning |
//! |------------|---------------------|
//! | `Node` | One exam subject, its slot, and its conflicts |
//! | `ConflictGraph` | Which subjects must not share a slot |
//! | `Schedule` | Which subjects sit together in each slot |

mod graph;
mod schedule;

pub use graph::{ConflictGraph, Node};
pub use schedule::{Schedule, SlotGroup};
