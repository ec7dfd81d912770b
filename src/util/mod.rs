//! Contains some utility functions and structures

mod curve_data;

pub use curve_data::*;
