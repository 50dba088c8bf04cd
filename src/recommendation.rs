pub mod criteria;
pub mod graph;
