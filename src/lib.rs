//! Encode FunPuzz (KenKen-style) puzzles as extensional CSP models
//!
//! The encoding layer builds a [`csp::Csp`] from a [`puzzle::PuzzleSpec`]:
//! one variable per grid cell, row and column uniqueness constraints in one
//! of two interchangeable shapes, and one extensional constraint per cage
//! whose satisfying tuples are enumerated up front. Search and propagation
//! belong to an external solver; the model is handed over whole, together
//! with the square of variable ids used to read a solution back.

#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

pub mod collections;
pub mod csp;
pub mod encode;
pub mod error;
pub mod puzzle;

pub use crate::encode::{
    all_different_model, binary_not_equal_model, caged_model, grid_model, UniquenessStrategy,
};

pub(crate) type LinkedHashSet<T> = linked_hash_set::LinkedHashSet<T, ahash::RandomState>;
