//! Grid maze pathfinding.
//!
//! One traversal engine drives breadth-first, depth-first, and best-first
//! (A*) search over an immutable rectangular [`grid::Grid`]; the algorithms
//! differ only in their [`frontier::Strategy`]. A search yields a
//! [`search::SearchReport`] (path + explored set) which
//! [`annotate::AnnotatedGrid`] projects back onto the grid for rendering.

// Search space
// ------------
pub mod grid;

// Algorithms
// ----------
pub mod frontier;
pub mod heuristic;
pub mod search;

// Results
// -------
pub mod annotate;
pub mod path;
