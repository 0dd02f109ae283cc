/// Table-based algorithms for discrete state and action spaces
pub mod tabular;
