//! CPE (Common Platform Enumeration) naming and matching
//!
//! This crate implements the CPE attribute data model, its three textual
//! bindings, and the set-theoretic comparison used to decide whether one
//! name matches, subsumes, or is disjoint from another:
//! - `Name`: the ordered 11-attribute naming record
//! - `Part`, `StringAttr`: the attribute model with lexical validation
//! - WFN, URI (CPE 2.2), and formatted-string (CPE 2.3) codecs
//! - `Relation` and the pairwise matching predicates
//!   (`is_disjoint`, `is_equal`, `is_subset`, `is_superset`)
//!
//! Everything here is pure, synchronous computation: parse, render, and
//! compare either return a value or report a validation/parse failure.

pub mod attribute;
pub mod binding;
pub mod error;
pub mod matching;
pub mod name;
pub mod part;

// Re-export commonly used types at crate root
pub use attribute::StringAttr;
pub use error::{Error, Result};
pub use matching::Relation;
pub use name::Name;
pub use part::Part;
