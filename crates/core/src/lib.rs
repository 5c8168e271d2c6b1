//! Core types shared by the Pedal crates.
//!
//! This crate holds the pieces the bicycle models build on:
//!
//! - [`Constrained`] — a wrapper enforcing a numeric invariant at construction
//! - [`NonNegative`], [`NonZero`] — the marker constraints used by the models
//! - [`ConstraintError`] — returned when a value violates its constraint

pub mod constraint;

pub use constraint::{Constrained, Constraint, ConstraintError, NonNegative, NonZero};
