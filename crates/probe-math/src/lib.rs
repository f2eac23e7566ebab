//! Numerical kernels for Probe Particle Core.

pub mod gauss;
pub mod matmul;
