// ============================================================
// Layer 3 — Labeling Strategies
// ============================================================
// A row's category path can be turned into a training target in
// three ways:
//
//   Flat         — one class per leaf category
//   Level(l)     — one class per category at depth l
//   Section(s)   — one classifier per parent node; the target is
//                  the row's position inside each sibling group
//                  it passes through (fit), or the sibling group
//                  of its leaf (test)
//
// Reference: Rust Book §6 (Enums and Pattern Matching)

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which half of the workflow a dataset is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Training + validation
    Fit,
    /// Held-out evaluation
    Test,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Fit  => write!(f, "fit"),
            Stage::Test => write!(f, "test"),
        }
    }
}

/// Strategy family without its parameters.
/// Used for configuration and cache naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Flat,
    Level,
    Section,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Flat    => write!(f, "flat"),
            Method::Level   => write!(f, "level"),
            Method::Section => write!(f, "section"),
        }
    }
}

/// A fully parameterised labeling strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Flat,
    /// Zero-based depth into the category path
    Level(usize),
    Section(Stage),
}

/// One hop of a row's path through the section tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionStep {
    /// Index of the sibling group the node belongs to
    pub section: usize,

    /// Position of the node inside that sibling group
    pub local: usize,
}

/// The encoded label of a single row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Target {
    /// A single class index (flat, level, and section test targets)
    Class(usize),

    /// Section fit target: one step per node, root first.
    /// Holds a step for every level of the path, whatever its depth.
    Sections(Vec<SectionStep>),
}

impl Target {
    /// Single class index, if this is a class target.
    pub fn class(&self) -> Option<usize> {
        match self {
            Target::Class(idx) => Some(*idx),
            Target::Sections(_) => None,
        }
    }

    /// Most specific section touched by the row: the section of its
    /// leaf node. Only section paths have one.
    pub fn deepest_section(&self) -> Option<usize> {
        match self {
            Target::Class(_)        => None,
            Target::Sections(steps) => steps.last().map(|s| s.section),
        }
    }
}
