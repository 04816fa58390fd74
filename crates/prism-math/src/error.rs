// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Failure kinds surfaced by fallible kernel operations.
///
/// Only two operations families can fail: component-wise or scalar division
/// (by an exact zero) and projection factories (given a zero-length extent or
/// plane separation). Singular-matrix inversion deliberately does *not* fail;
/// it degrades to the zero matrix instead (see [`crate::Matrix::invert`]).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// A divisor component or scalar was exactly zero.
    #[error("division by zero")]
    DivisionByZero,
    /// A projection factory received a zero-length extent or plane separation.
    #[error("degenerate extent: zero-length plane separation")]
    DegenerateExtent,
}
