//! String-valued attributes and their lexical validation
//!
//! Every string attribute of a CPE name is one of three things: the open
//! value `Any`, the explicit `NotApplicable` marker, or a concrete value.
//! Concrete values may carry a single wildcard marker at either end: `*`
//! (zero or more characters) or a run of `?` (one character each).

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A string-valued CPE attribute
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StringAttr {
    /// Unconstrained; matches every value
    #[default]
    Any,
    /// The attribute has no meaningful value for this product
    NotApplicable,
    /// A concrete value, optionally wildcarded at either end
    Value(String),
}

/// Optional leading marker, one or more characters from the CPE character
/// set, optional trailing marker. Non-ASCII never matches.
static VALID_VALUE: OnceLock<Regex> = OnceLock::new();

fn valid_value_re() -> &'static Regex {
    VALID_VALUE.get_or_init(|| {
        Regex::new(r##"^(\*|\?+)?[a-zA-Z0-9\-_!"#$%&'()+,./:;<=>@\[\]\^`{}|~\\]+(\*|\?+)?$"##)
            .expect("value pattern compiles")
    })
}

/// Check a raw string against the attribute character and wildcard rules
pub fn is_valid_raw(raw: &str) -> bool {
    valid_value_re().is_match(raw)
}

impl StringAttr {
    /// Create a concrete value, validating it lexically
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if !is_valid_raw(&raw) {
            return Err(Error::InvalidAttribute {
                attribute: "string",
                value: raw,
            });
        }
        Ok(StringAttr::Value(raw))
    }

    /// True unless this is a `Value` whose raw string breaks the lexical
    /// rules. The `Value` variant is public, so an invalid raw can be
    /// constructed directly; comparisons re-check and return `Undefined`
    /// for such operands.
    pub fn is_valid(&self) -> bool {
        match self {
            StringAttr::Any | StringAttr::NotApplicable => true,
            StringAttr::Value(raw) => is_valid_raw(raw),
        }
    }

    /// True when the attribute carries no constraint (`Any`)
    pub fn is_empty(&self) -> bool {
        matches!(self, StringAttr::Any)
    }

    /// The raw value, if this is a concrete value
    pub fn raw(&self) -> Option<&str> {
        match self {
            StringAttr::Value(raw) => Some(raw),
            _ => None,
        }
    }

    /// True for a concrete value carrying a wildcard marker at either end
    pub fn has_wildcard(&self) -> bool {
        match self {
            StringAttr::Value(raw) => {
                raw.starts_with('*')
                    || raw.starts_with('?')
                    || raw.ends_with('*')
                    || raw.ends_with('?')
            }
            _ => false,
        }
    }
}
