#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
pub mod backtracking;
pub mod cell;
pub mod cell_selection;
pub mod clue;
pub mod error_model;
pub mod grid;
pub mod local_search;
pub mod parser;
pub mod pattern;
pub mod propagation;
pub mod puzzle;
pub mod restarter;
pub mod solver;
