//! Core types for the gridpath search engine.
//!
//! This crate provides the leaf types shared by the engine: grid
//! coordinates with a deterministic pairing hash, grid dimensions, and a
//! flat row-major matrix that is validated from nested input.

pub mod geom;
pub mod hash;
pub mod matrix;

pub use geom::{Coord, GridSize};
pub use hash::{BuildCoordHasher, CoordHasher, CoordMap, szudzik};
pub use matrix::{Matrix, ShapeError};
