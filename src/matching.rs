//! Set-theoretic comparison of attributes and names
//!
//! Comparison is pairwise and directional: `src.compare(&trg)` answers how
//! the set of products named by `src` relates to the set named by `trg`.
//! Wildcard-vs-wildcard pairs have no defined ordering and yield
//! `Undefined`, as does any pair with an invalid operand.

use serde::{Deserialize, Serialize};

use crate::attribute::StringAttr;
use crate::name::Name;
use crate::part::Part;

/// Outcome of comparing two attributes or two names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    /// The value sets share no element
    Disjoint,
    /// The value sets are identical
    Equal,
    /// The source set is contained in the target set
    Subset,
    /// The source set contains the target set
    Superset,
    /// No ordering is defined for this pair
    Undefined,
}

impl Part {
    /// Compare two part attributes
    ///
    /// Two identical valid parts are `Equal`, two different valid parts are
    /// `Disjoint`, and any `NotSet` operand makes the pair `Undefined`.
    pub fn compare(&self, target: &Part) -> Relation {
        if !self.is_valid() || !target.is_valid() {
            return Relation::Undefined;
        }
        if self == target {
            Relation::Equal
        } else {
            Relation::Disjoint
        }
    }
}

impl StringAttr {
    /// Compare two string attributes
    pub fn compare(&self, target: &StringAttr) -> Relation {
        if !self.is_valid() || !target.is_valid() {
            return Relation::Undefined;
        }

        match (self, target) {
            (StringAttr::Any, StringAttr::Any) => Relation::Equal,
            (StringAttr::Any, _) => Relation::Superset,

            (StringAttr::NotApplicable, StringAttr::Any) => Relation::Subset,
            (StringAttr::NotApplicable, StringAttr::NotApplicable) => Relation::Equal,
            (StringAttr::NotApplicable, StringAttr::Value(_)) => Relation::Disjoint,

            (StringAttr::Value(_), StringAttr::Any) => Relation::Subset,
            (StringAttr::Value(_), StringAttr::NotApplicable) => Relation::Disjoint,

            (StringAttr::Value(src), StringAttr::Value(trg)) => {
                match (self.has_wildcard(), target.has_wildcard()) {
                    (false, false) => {
                        if src == trg {
                            Relation::Equal
                        } else {
                            Relation::Disjoint
                        }
                    }
                    (true, false) => {
                        if matches_wildcard(src, trg) {
                            Relation::Superset
                        } else {
                            Relation::Disjoint
                        }
                    }
                    // No ordering is defined once the target is wildcarded.
                    (false, true) | (true, true) => Relation::Undefined,
                }
            }
        }
    }
}

/// Match a wildcarded pattern against a plain candidate
///
/// A pattern carries at most one marker per end, so after stripping the
/// markers the remainder is a fixed core and matching reduces to a single
/// substring search with offset constraints:
/// - a leading `?`-run of length q1 fixes (without `*`) or lower-bounds
///   (with `*`) the core's start offset;
/// - symmetrically for the trailing side and the core's end offset.
pub(crate) fn matches_wildcard(pattern: &str, candidate: &str) -> bool {
    let mut core = pattern.as_bytes();

    let mut q1 = 0usize;
    while core.first() == Some(&b'?') {
        core = &core[1..];
        q1 += 1;
    }
    let star_front = core.first() == Some(&b'*');
    if star_front {
        core = &core[1..];
    }

    let mut q2 = 0usize;
    while core.last() == Some(&b'?') {
        core = &core[..core.len() - 1];
        q2 += 1;
    }
    let star_back = core.last() == Some(&b'*');
    if star_back {
        core = &core[..core.len() - 1];
    }

    let cand = candidate.as_bytes();
    if cand.len() < q1 + core.len() + q2 {
        return false;
    }

    // Allowed start offsets for the core within the candidate.
    let first = q1;
    let last = cand.len() - q2 - core.len();
    let (lo, hi) = match (star_front, star_back) {
        (false, false) => {
            if cand.len() != q1 + core.len() + q2 {
                return false;
            }
            (first, first)
        }
        (false, true) => (first, first),
        (true, false) => (last, last),
        (true, true) => (first, last),
    };

    if lo > hi || lo < first || hi > last {
        return false;
    }

    (lo..=hi).any(|start| &cand[start..start + core.len()] == core)
}

impl Name {
    /// The pairwise relation for each of the eleven attribute positions
    fn relations(&self, other: &Name) -> [Relation; 11] {
        [
            self.part.compare(&other.part),
            self.vendor.compare(&other.vendor),
            self.product.compare(&other.product),
            self.version.compare(&other.version),
            self.update.compare(&other.update),
            self.edition.compare(&other.edition),
            self.language.compare(&other.language),
            self.sw_edition.compare(&other.sw_edition),
            self.target_sw.compare(&other.target_sw),
            self.target_hw.compare(&other.target_hw),
            self.other.compare(&other.other),
        ]
    }

    /// True if the set-theoretic relation between the names is DISJOINT:
    /// at least one attribute pair is disjoint
    pub fn is_disjoint(&self, other: &Name) -> bool {
        self.relations(other)
            .iter()
            .any(|r| *r == Relation::Disjoint)
    }

    /// True if the set-theoretic relation between the names is EQUAL:
    /// every attribute pair is equal
    pub fn is_equal(&self, other: &Name) -> bool {
        self.relations(other).iter().all(|r| *r == Relation::Equal)
    }

    /// True if the set-theoretic relation between the names is SUBSET:
    /// every attribute pair is a subset or equal
    pub fn is_subset(&self, other: &Name) -> bool {
        self.relations(other)
            .iter()
            .all(|r| matches!(r, Relation::Subset | Relation::Equal))
    }

    /// True if the set-theoretic relation between the names is SUPERSET:
    /// every attribute pair is a superset or equal
    pub fn is_superset(&self, other: &Name) -> bool {
        self.relations(other)
            .iter()
            .all(|r| matches!(r, Relation::Superset | Relation::Equal))
    }
}
