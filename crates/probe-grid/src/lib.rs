//! Lattice grid geometry and field interpolation.

pub mod interp;
pub mod shape;
