//! Shared helpers for the parser

pub mod hashers;

pub use hashers::{create_hash_map, create_hash_map_with_capacity, HashMap};
