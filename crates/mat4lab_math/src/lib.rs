//! 4x4 Matrix Library
//!
//! This crate provides the [`Matrix4x4`] value type and the operations
//! the mat4lab demo displays: addition, subtraction, multiplication,
//! transpose, identity, and Gauss-Jordan inversion.
//!
//! All operations are pure and return new values; nothing is mutated in
//! place. The only degenerate case in the whole crate is a near-zero
//! pivot during inversion, which yields the identity matrix as a
//! sentinel (see [`Matrix4x4::inverse`]).

mod matrix;

pub use matrix::{Matrix4x4, COMPARE_TOLERANCE, PIVOT_EPSILON};
