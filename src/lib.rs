//! lamc - Phase catalog for the lamc compiler pipeline
//!
//! This crate is the facade over the lamc pipeline vocabulary: a [`Phase`]
//! value type identifying one stage of the multi-pass compilation
//! pipeline, and twelve pre-built catalog entries, one per known stage.
//!
//! # Quick Start
//!
//! ```rust
//! use lamc::{ANALYZER, DESUGARIZER, PARSER, START};
//!
//! // Display names for diagnostics
//! assert_eq!(PARSER.name(), "parser");
//!
//! // Tags route phase-specific behavior; desugaring and analysis are
//! // deliberately grouped under one category
//! assert_eq!(DESUGARIZER.tag(), ANALYZER.tag());
//!
//! // Boundary markers carry no tag
//! assert_eq!(START.tag(), None);
//! ```
//!
//! # Identity, not structure
//!
//! Catalog entries are singletons compared by identity. `Phase` has no
//! `PartialEq`; "is this the analyzer phase" is [`Phase::is`] against the
//! catalog entry, never a field comparison.
//!
//! # Stable Public API
//!
//! - [`Phase`] - the phase value type
//! - [`START`], [`PARSER`], [`DESUGARIZER`], [`ANALYZER`], [`REFCHECK`],
//!   [`UNCURRY`], [`TRANSMATCH`], [`LAMBDALIFT`], [`EXPLICITOUTER`],
//!   [`ERASURE`], [`UNKNOWN`], [`END`] - the catalog entries
//!
//! Phase ordering, execution, and lookup by name or tag are the driver's
//! concern and are not provided here.

pub use lamc_phase::Phase;

pub use lamc_phase::{
    ANALYZER, DESUGARIZER, END, ERASURE, EXPLICITOUTER, LAMBDALIFT, PARSER, REFCHECK, START,
    TRANSMATCH, UNCURRY, UNKNOWN,
};
