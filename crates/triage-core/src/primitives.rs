//! # Innate Primitives
//!
//! Hardcoded runtime constants for the triage engine and its callers.
//!
//! These primitives are compiled into the binary and are immutable at runtime.
//!
//! ## Primitives
//!
//! 1. **Verdict shape**: how many keywords and categories a verdict reports.
//! 2. **Fixed reasoning**: the canned reason strings.
//! 3. **Input limits**: bounds enforced at the API and CLI boundary.

/// Maximum number of matched keywords quoted in a severity reason.
pub const MAX_REASON_KEYWORDS: usize = 3;

/// Maximum number of categories suggested for a single report.
pub const MAX_SUGGESTED_CATEGORIES: usize = 3;

/// Upper bound of both the severity and the urgency score.
pub const MAX_SCORE: u8 = 100;

/// Reason emitted when no severity keyword matched.
pub const LOW_SEVERITY_REASON: &str = "Classified as Low Severity (maintenance/cosmetic issue)";

/// Reason substituted when a verdict would otherwise carry no reasoning.
pub const FALLBACK_REASON: &str = "Standard priority based on general keywords.";

/// Maximum description length accepted at the boundary (16 KiB).
///
/// The engine itself accepts any length; this only bounds request work.
pub const MAX_DESCRIPTION_LENGTH: usize = 16 * 1024;

/// Maximum number of image labels attached to one report.
pub const MAX_IMAGE_LABELS: usize = 32;

/// Maximum length of a single image label in bytes.
pub const MAX_LABEL_LENGTH: usize = 256;

/// Maximum number of reports in one batch file.
pub const MAX_BATCH_REPORTS: usize = 10_000;

/// Maximum batch file size (16 MiB).
pub const MAX_BATCH_FILE_SIZE: u64 = 16 * 1024 * 1024;
