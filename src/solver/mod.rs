//! Conflict detection and exhaustive backtracking enumeration.
//!
//! [`conflicts`] holds the pure placement predicates; [`search`] drives the
//! recursive enumeration over them. The split mirrors the two roles in the
//! algorithm: deciding whether a single placement is legal, and exploring
//! every sequence of legal placements exactly once.

/// Pure predicates deciding whether a placement duplicates a digit within a
/// row, column, or box.
pub mod conflicts;

/// The recursive backtracking enumerator and its output sinks.
pub mod search;
