// handles street graph construction logic

pub mod boundary;
pub mod error;
pub mod graph;
pub mod hull;
pub mod node_gen;
pub mod prune;
pub mod streets;
pub mod utils;
