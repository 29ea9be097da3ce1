//! Exam timetabling via conflict-graph coloring.
//!
//! Assigns exam subjects to time slots so that no two subjects sharing
//! a student land in the same slot. Raw conflict pairs become an
//! undirected [`ConflictGraph`](models::ConflictGraph); an exact
//! backtracking search assigns each subject one of at most K slots
//! (K = subject count); the colored graph is grouped into a
//! [`Schedule`](models::Schedule) for the caller to render.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ConflictGraph`, `Node`, `Schedule`,
//!   `SlotGroup`
//! - **`parser`**: Conflict-pair line ingestion (`build_graph`)
//! - **`coloring`**: Backtracking slot assignment (`color_and_schedule`)
//! - **`validation`**: Graph integrity diagnostics
//!
//! # Usage
//!
//! ```
//! use exam_slots::coloring::color_and_schedule;
//! use exam_slots::parser::build_graph;
//!
//! let mut graph = build_graph(["Math, Physics", "Physics, Chemistry"]).unwrap();
//! let schedule = color_and_schedule(&mut graph).unwrap();
//! assert_eq!(schedule.slot_count(), 2);
//! ```
//!
//! The crate is a pure, single-threaded library: no I/O, no logging, no
//! shared state. Presentation (input forms, error banners, rendering
//! "Time Slot {n}") belongs to the caller.
//!
//! # References
//!
//! - Werra (1985), "An introduction to timetabling"
//! - Garey & Johnson (1979), "Computers and Intractability" (GT4: Graph
//!   K-Colorability)

pub mod coloring;
pub mod models;
pub mod parser;
pub mod validation;
