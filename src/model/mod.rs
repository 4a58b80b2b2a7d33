//! # Graph model
//!
//! The data types that cross every boundary in the crate: vertex identifiers
//! and edge records. Storage lives in [`crate::graph`] and scoring state in
//! [`crate::scorer`]; this module is pure data, no I/O, no state.

pub mod vertex;
pub mod edge;

pub use vertex::Vertex;
pub use edge::Edge;
