//! # NPV Lab Math
//!
//! Numerical building blocks for the NPV Lab cash-flow analytics workspace.
//!
//! This crate provides:
//!
//! - **Grids**: Evenly spaced sampling of an interval
//! - **Solvers**: Bracket scanning, bisection and Newton-Raphson root finding
//! - **Polynomials**: All roots of a polynomial via companion-matrix eigenvalues
//!
//! Nothing here knows about cash flows; the analytics crate maps discount
//! rates onto these generic tools.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::neg_cmp_op_on_partial_ord)]
#![allow(clippy::similar_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod grid;
pub mod polynomial;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::grid::linspace;
    pub use crate::polynomial::{polynomial_roots, real_polynomial_roots};
    pub use crate::solvers::{
        bisection, newton_raphson, scan_brackets, Bracket, SolverConfig, SolverResult,
    };
}

pub use error::{MathError, MathResult};
