pub mod identity_graph;
pub mod not_found;
