//! Phase value type and catalog for the lamc compiler pipeline
//!
//! This crate provides the shared vocabulary between the compiler driver
//! and the transformation passes: a [`Phase`] value identifying one stage
//! of the pipeline, and a fixed catalog of the stages that exist.
//!
//! # Purpose
//!
//! The driver labels pipeline steps and diagnostics with catalog entries.
//! This crate contains only the labels themselves; sequencing, execution,
//! and tag interpretation all live in the driver.
//!
//! # Identity semantics
//!
//! Catalog entries are singletons. "Is this the analyzer phase" checks
//! must compare against the catalog entry by identity (see [`Phase::is`]),
//! never by comparing fields: [`DESUGARIZER`] and [`ANALYZER`] are
//! distinct stages that deliberately share the `"ANALYZER"` tag, so
//! structural comparison would conflate them. `Phase` does not implement
//! `PartialEq` for this reason.

use std::fmt;
use std::sync::LazyLock;

use serde::Serialize;

/// A named stage in a multi-pass compilation pipeline.
///
/// A phase is an immutable record of a display name and an optional
/// symbolic tag. The tag correlates the stage with a diagnostic or
/// configuration category understood by the driver; pure markers such as
/// [`START`], [`END`], and [`UNKNOWN`] carry no tag.
///
/// Both fields are bound at construction and never change. The
/// constructor is public, so callers may build ad-hoc instances, but only
/// the catalog statics denote canonical pipeline stages.
///
/// # Serialization
///
/// `Phase` serializes to an object with `name` and, when present, `tag`.
/// It is deliberately not `Deserialize`: turning a name back into a
/// catalog entry is a lookup, and lookups belong to the driver.
#[derive(Debug, Clone, Serialize)]
pub struct Phase {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    tag: Option<String>,
}

impl Phase {
    /// Create a phase with the given display name and optional tag.
    ///
    /// No validation or normalization is performed: an empty name or an
    /// unrecognized tag is accepted uncritically. Callers that need
    /// stricter guarantees enforce them at the call site.
    #[must_use]
    pub fn new(name: &str, tag: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            tag: tag.map(str::to_string),
        }
    }

    /// The display name of this phase, exactly as constructed.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The symbolic category tag, if this phase carries one.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Whether `self` and `other` are the same phase instance.
    ///
    /// This is pointer identity, not structural comparison: a phase
    /// reconstructed with the same name and tag as a catalog entry is
    /// still a different phase.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lamc_phase::{ANALYZER, DESUGARIZER, Phase};
    ///
    /// assert!(ANALYZER.is(&ANALYZER));
    /// assert!(!ANALYZER.is(&DESUGARIZER));
    ///
    /// let imposter = Phase::new("analyzer", Some("ANALYZER"));
    /// assert!(!ANALYZER.is(&imposter));
    /// ```
    #[must_use]
    pub fn is(&self, other: &Phase) -> bool {
        std::ptr::eq(self, other)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

// Catalog entries are statics, not consts: a const would be inlined at
// each use site and identity comparison would no longer hold.

/// Boundary marker: before the first real stage.
pub static START: LazyLock<Phase> = LazyLock::new(|| Phase::new("start", None));

/// Source text to syntax trees.
pub static PARSER: LazyLock<Phase> = LazyLock::new(|| Phase::new("parser", Some("PARSER")));

/// Rewrites syntactic sugar; grouped with [`ANALYZER`] under one tag.
pub static DESUGARIZER: LazyLock<Phase> =
    LazyLock::new(|| Phase::new("desugarizer", Some("ANALYZER")));

/// Name and type analysis.
pub static ANALYZER: LazyLock<Phase> = LazyLock::new(|| Phase::new("analyzer", Some("ANALYZER")));

/// Reference checking.
pub static REFCHECK: LazyLock<Phase> = LazyLock::new(|| Phase::new("refcheck", Some("REFCHECK")));

/// Uncurrying of function types and applications.
pub static UNCURRY: LazyLock<Phase> = LazyLock::new(|| Phase::new("uncurry", Some("UNCURRY")));

/// Translation of pattern matches.
pub static TRANSMATCH: LazyLock<Phase> =
    LazyLock::new(|| Phase::new("transmatch", Some("TRANSMATCH")));

/// Lifting of nested functions.
pub static LAMBDALIFT: LazyLock<Phase> =
    LazyLock::new(|| Phase::new("lambdalift", Some("LAMBDALIFT")));

/// Making outer-instance links explicit.
pub static EXPLICITOUTER: LazyLock<Phase> =
    LazyLock::new(|| Phase::new("explicitouter", Some("EXPLICITOUTER")));

/// Type erasure.
pub static ERASURE: LazyLock<Phase> = LazyLock::new(|| Phase::new("erasure", Some("ERASURE")));

/// Marker for an unrecognized or not-yet-determined stage.
pub static UNKNOWN: LazyLock<Phase> = LazyLock::new(|| Phase::new("? !!!", None));

/// Boundary marker: after the last real stage.
pub static END: LazyLock<Phase> = LazyLock::new(|| Phase::new("-", None));
