//! Core compute primitives (Vector, Matrix).
//!
//! Dense row-major storage backing the user-item count matrix and the
//! feature vectors handed to the neighbor index.

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
