//! Debug output helpers.

pub mod dump;
