//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use crate::api;
use crate::config::{AppConfig, RequestLimits};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use triage_core::{
    AnalysisResult, CATEGORY_TABLE, IssueReport, SeverityTier, TriageError, analyze_report,
    explain,
    primitives::{MAX_BATCH_FILE_SIZE, MAX_BATCH_REPORTS},
};

// =============================================================================
// FILE VALIDATION
// =============================================================================

/// Validate file path.
///
/// Canonicalizes the path (resolving symlinks and "..") and ensures it
/// names an existing regular file.
fn validate_file_path(path: &Path) -> Result<PathBuf, TriageError> {
    let canonical = path.canonicalize().map_err(|e| {
        TriageError::IoError(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(TriageError::IoError(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}

/// Validate file size before reading.
fn validate_file_size(path: &Path, max_size: u64) -> Result<(), TriageError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| TriageError::IoError(format!("Cannot read file metadata: {}", e)))?;

    if metadata.len() > max_size {
        return Err(TriageError::SerializationError(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            max_size
        )));
    }
    Ok(())
}

/// Read, parse and validate a batch file of issue reports.
pub fn load_reports(file: &Path, limits: &RequestLimits) -> Result<Vec<IssueReport>, TriageError> {
    let validated_path = validate_file_path(file)?;
    validate_file_size(&validated_path, MAX_BATCH_FILE_SIZE)?;

    let contents = std::fs::read(&validated_path)
        .map_err(|e| TriageError::IoError(format!("Read file: {}", e)))?;

    let reports: Vec<IssueReport> = serde_json::from_slice(&contents)
        .map_err(|e| TriageError::SerializationError(format!("Invalid batch file: {}", e)))?;

    if reports.len() > MAX_BATCH_REPORTS {
        return Err(TriageError::SerializationError(format!(
            "Report count {} exceeds maximum allowed {}",
            reports.len(),
            MAX_BATCH_REPORTS
        )));
    }

    for (index, report) in reports.iter().enumerate() {
        limits
            .check_report(&report.description, &report.image_labels)
            .map_err(|e| TriageError::InvalidReport(format!("Report #{}: {}", index, e)))?;
    }

    Ok(reports)
}

/// Count verdicts per severity tier, most severe first.
pub fn tier_counts(results: &[AnalysisResult]) -> BTreeMap<SeverityTier, usize> {
    let mut counts: BTreeMap<SeverityTier, usize> =
        SeverityTier::ALL.iter().map(|tier| (*tier, 0)).collect();
    for result in results {
        *counts.entry(result.severity).or_default() += 1;
    }
    counts
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), TriageError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| TriageError::SerializationError(e.to_string()))?;
    println!("{}", text);
    Ok(())
}

fn print_result(result: &AnalysisResult) {
    println!("Severity:   {} ({})", result.severity, result.severity_score);
    println!("Urgency:    {}", result.urgency_score);
    if result.suggested_categories.is_empty() {
        println!("Categories: (none)");
    } else {
        println!("Categories: {}", result.suggested_categories.join(", "));
    }
    println!("Reasoning:");
    for reason in &result.reasoning {
        println!("  - {}", reason);
    }
}

// =============================================================================
// ANALYZE COMMAND
// =============================================================================

/// Analyze a single description.
pub fn cmd_analyze(
    config: &AppConfig,
    json_mode: bool,
    description: &str,
    labels: &[String],
) -> Result<(), TriageError> {
    config.limits.check_report(description, labels)?;

    let report = IssueReport::new(description).with_labels(labels.iter().cloned());
    let result = analyze_report(&report);

    tracing::debug!(severity = %result.severity, urgency_score = result.urgency_score, "Analyzed");

    if json_mode {
        return print_json(&result);
    }

    println!("Issue Analysis");
    println!("==============");
    print_result(&result);

    Ok(())
}

// =============================================================================
// BATCH COMMAND
// =============================================================================

/// Analyze every report in a JSON batch file.
pub fn cmd_batch(config: &AppConfig, json_mode: bool, file: &Path) -> Result<(), TriageError> {
    tracing::info!("Analyzing batch from {:?}", file);

    let reports = load_reports(file, &config.limits)?;
    let results: Vec<AnalysisResult> = reports.iter().map(analyze_report).collect();

    tracing::info!("Analyzed {} reports", results.len());

    if json_mode {
        return print_json(&results);
    }

    println!("Batch Analysis: {} reports", results.len());
    println!("===============");
    for (index, (report, result)) in reports.iter().zip(&results).enumerate() {
        println!(
            "#{:<4} {:<8} sev={:<3} urg={:<3} {:<40} {}",
            index,
            result.severity.as_str(),
            result.severity_score,
            result.urgency_score,
            result.suggested_categories.join(", "),
            truncate(&report.description, 48)
        );
    }

    println!();
    println!("By severity:");
    for (tier, count) in tier_counts(&results).iter().rev() {
        println!("  {:<8} {}", tier.as_str(), count);
    }

    Ok(())
}

/// Shorten `text` to at most `max` characters for tabular output.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut short: String = text.chars().take(max.saturating_sub(3)).collect();
    short.push_str("...");
    short
}

// =============================================================================
// EXPLAIN COMMAND
// =============================================================================

/// Show which rules fired for a description.
pub fn cmd_explain(json_mode: bool, description: &str, labels: &[String]) -> Result<(), TriageError> {
    let explanation = explain(description, labels);

    if json_mode {
        let tiers: serde_json::Map<String, serde_json::Value> = explanation
            .tier_matches
            .iter()
            .map(|(tier, matches)| (tier.as_str().to_lowercase(), serde_json::json!(matches)))
            .collect();
        let urgency: Vec<serde_json::Value> = explanation
            .urgency_hits
            .iter()
            .map(|hit| serde_json::json!({ "matched": hit.matched, "weight": hit.weight }))
            .collect();
        let categories: Vec<serde_json::Value> = explanation
            .category_hits
            .iter()
            .map(|(name, count)| serde_json::json!({ "category": name, "hits": count }))
            .collect();

        let output = serde_json::json!({
            "text": explanation.text,
            "severity_keywords": tiers,
            "urgency_hits": urgency,
            "category_hits": categories,
            "result": explanation.result,
        });
        return print_json(&output);
    }

    println!("Rule Breakdown");
    println!("==============");
    println!("Text: {:?}", explanation.text);
    println!();
    println!("Severity keywords:");
    for (tier, matches) in &explanation.tier_matches {
        let shown = if matches.is_empty() {
            "-".to_string()
        } else {
            matches.join(", ")
        };
        println!("  {:<8} {}", tier.as_str(), shown);
    }
    println!();
    println!("Urgency hits:");
    if explanation.urgency_hits.is_empty() {
        println!("  -");
    }
    for hit in &explanation.urgency_hits {
        println!("  +{:<3} '{}'", hit.weight, hit.matched);
    }
    println!();
    println!("Category hits:");
    if explanation.category_hits.is_empty() {
        println!("  -");
    }
    for (name, count) in &explanation.category_hits {
        println!("  {:<20} {}", name, count);
    }
    println!();
    println!("Verdict");
    println!("-------");
    print_result(&explanation.result);

    Ok(())
}

// =============================================================================
// CATEGORIES COMMAND
// =============================================================================

/// List the category table.
pub fn cmd_categories(json_mode: bool) -> Result<(), TriageError> {
    if json_mode {
        let output: Vec<serde_json::Value> = CATEGORY_TABLE
            .iter()
            .map(|c| serde_json::json!({ "name": c.name, "keywords": c.keywords }))
            .collect();
        return print_json(&output);
    }

    println!("Categories ({})", CATEGORY_TABLE.len());
    println!("==========");
    for category in &CATEGORY_TABLE {
        println!("  {:<20} {}", category.name, category.keywords.join(", "));
    }

    Ok(())
}

// =============================================================================
// SERVER COMMAND
// =============================================================================

/// Start the HTTP server.
pub async fn cmd_server(host: &str, port: u16, limits: RequestLimits) -> Result<(), TriageError> {
    println!("Triage Server Starting...");
    println!();
    println!("Configuration:");
    println!("  Host:            {}", host);
    println!("  Port:            {}", port);
    println!("  Max description: {} bytes", limits.max_description_length);
    println!("  Max labels:      {}", limits.max_image_labels);
    println!();
    println!("Endpoints:");
    println!("  POST /api/analyze-issue - Analyze an issue");
    println!("  GET  /api/categories    - List categories");
    println!("  GET  /health            - Health check");
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    let addr = format!("{}:{}", host, port);
    api::run_server(&addr, limits).await
}

// =============================================================================
// TESTS
// =============================================================================
