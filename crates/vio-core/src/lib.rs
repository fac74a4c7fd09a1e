//! Core types for the VIO filter back end.
//!
//! This crate contains:
//! - linear algebra type aliases (`Real`, `Vec3`, `Matd`, ...),
//! - small geometry helpers (`skew`),
//! - the [`ErrorState`] contract that the EKF updater mutates through.

/// Linear algebra type aliases and helpers.
pub mod math;
/// Error-state contract consumed by the updater.
pub mod state;

pub use math::*;
pub use state::*;
