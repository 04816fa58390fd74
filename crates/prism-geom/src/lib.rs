#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    rust_2018_idioms,
    missing_docs,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![doc = r"Geometry primitives for Prism.

This crate provides:
- Axis-aligned bounding boxes (`Aabb`) with half-open point containment.

Design notes:
- Float32 throughout, layered on the prism-math value types.
- Boxes are immutable: position and size are fixed at construction.
- Rustdoc is treated as part of the contract; public items are documented.
"]

/// Foundational geometric types.
pub mod types;

pub use types::aabb::Aabb;
