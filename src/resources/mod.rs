//! Lookup tables.

pub mod sine;
