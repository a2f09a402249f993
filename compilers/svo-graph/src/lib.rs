//! Entity/predicate graph over the output of one extraction.

pub mod graph;

pub use graph::{Entity, Predicate, SvoGraph, Triple};
