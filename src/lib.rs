//! CutScope - bridge and articulation point analysis for undirected graphs
//!
//! This crate finds the structural weak points of undirected graphs: edges
//! and vertices whose removal disconnects part of the graph. It provides the
//! graph model, the linear-time analysis, input parsing, and report export.

pub mod analysis;
pub mod export;
pub mod graph;
pub mod parser;
