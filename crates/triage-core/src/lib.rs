//! # triage-core
//!
//! The deterministic Triage Engine - THE LOGIC.
//!
//! This crate turns a citizen's free-text issue description, optionally
//! augmented with image-recognition labels, into a structured verdict:
//! a severity tier, a severity score, an urgency score, up to three
//! suggested categories, and the reasons behind them.
//!
//! ## Pipeline
//!
//! ```text
//! description + labels ──► normalize ──► text
//!                                          │
//!          ┌───────────────────────────────┼─────────────────────┐
//!          ▼                               ▼                     ▼
//!   classify_severity ──score──► classify_urgency        detect_categories
//!          │                               │                     │
//!          └──────────────► AnalysisResult ◄─────────────────────┘
//! ```
//!
//! ## Architectural Constraints
//!
//! The engine:
//! - Is pure: no I/O, no logging, no hidden state
//! - Is closed: every rule table is compiled in
//! - Uses integer scores only
//! - Never fails: every input yields a valid `AnalysisResult`

// =============================================================================
// MODULES
// =============================================================================

pub mod category;
pub mod engine;
pub mod normalize;
pub mod primitives;
pub mod severity;
pub mod tables;
pub mod types;
pub mod urgency;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{
    AnalysisResult, IssueReport, SeverityTier, SeverityVerdict, TriageError, UrgencyVerdict,
};

// =============================================================================
// RE-EXPORTS: Engine
// =============================================================================

pub use category::detect_categories;
pub use engine::{Explanation, analyze_issue, analyze_report, explain};
pub use normalize::normalize;
pub use severity::classify_severity;
pub use urgency::classify_urgency;

// =============================================================================
// RE-EXPORTS: Tables
// =============================================================================

pub use tables::{CATEGORY_TABLE, Category, SEVERITY_KEYWORDS, URGENCY_PATTERNS, category_names};
