//! # NPV Lab Core
//!
//! Core types for the NPV Lab cash-flow analytics workspace.
//!
//! This crate provides the building blocks shared by the valuation engine,
//! the root finder and any presentation layer:
//!
//! - **Types**: `CashFlowSeries`, `RateRange`, `NpvCurve`, `IrrSet`
//! - **Errors**: `CoreError` for malformed inputs and out-of-domain rates
//!
//! ## Design Philosophy
//!
//! - **Validated Construction**: Invariants are checked once, when a value is built
//! - **Fractions Internally**: Rates are fractions; percentages belong to presentation
//! - **Immutable Inputs**: Everything downstream is recomputed from scratch
//!
//! ## Example
//!
//! ```rust
//! use npvlab_core::prelude::*;
//!
//! let series = CashFlowSeries::new(vec![-100.0, 30.0, 40.0, 50.0, 60.0]).unwrap();
//! let window = RateRange::from_percent(-10.0, 30.0).unwrap();
//!
//! assert_eq!(series.sign_changes(), 1);
//! assert!(window.contains(0.10));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{CashFlowSeries, CurvePoint, IrrSet, NpvCurve, RateRange};
}

pub use error::{CoreError, CoreResult};
pub use types::{CashFlowSeries, CurvePoint, IrrSet, NpvCurve, RateRange};
