//! Reusable UI components.

pub mod identity_graph;
