//! Prompt rendering for the two analysis kinds.

use crate::models::LogEntry;
use crate::services::statistics::PathStatistics;
use std::collections::HashMap;

/// Size the prompt was once meant to be split at. Prompts are still sent
/// whole; exceeding this only produces a warning.
pub const PROMPT_CHUNK_SIZE: usize = 8000;

const LOG_ANALYSIS_INSTRUCTION: &str = r#"Analyze this log summary and provide insights. Return ONLY a JSON object with this exact structure (no markdown, no backticks):
{
    "popular_pages": ["page1", "page2"],
    "slow_pages": [{"path": "/example", "avg_duration": 1000, "request_count": 10, "error_rate": 5.0}],
    "potential_issues": [{"type": "security", "description": "desc", "severity": "high", "path": "/example"}],
    "insights": ["insight1", "insight2"]
}

Log Summary:
"#;

const PERFORMANCE_INSTRUCTION: &str = r#"Analyze this performance data and provide insights. Return ONLY a JSON object with this exact structure (no markdown, no backticks):
{
    "slow_endpoints": [{"path": "/example", "avg_duration": 1000, "request_count": 10, "error_rate": 5.0}],
    "performance_patterns": ["pattern1", "pattern2"],
    "resource_issues": [{"type": "memory", "description": "High memory usage", "severity": "high"}],
    "recommendations": ["recommendation1", "recommendation2"]
}

Performance Data:
"#;

/// Notable events followed by per-path statistics.
pub fn render_log_summary(entries: &[LogEntry], stats: &HashMap<String, PathStatistics>) -> String {
    let mut summary = String::from("Log Summary:\n\n");

    for entry in entries.iter().filter(|e| e.is_notable()) {
        summary.push_str(&format!(
            "- {} [{}] {} (Duration: {}ms, Status: {})\n",
            entry.timestamp, entry.level, entry.path, entry.duration, entry.status
        ));
    }

    summary.push_str("\nPath Statistics:\n");
    for (path, s) in stats {
        summary.push_str(&format!(
            "- {}: {} requests, avg time {}ms, error rate {:.1}%\n",
            path,
            s.count,
            s.avg_duration(),
            s.error_rate()
        ));
    }

    summary
}

/// Per-endpoint request count, duration spread and error rate.
pub fn render_performance_summary(stats: &HashMap<String, PathStatistics>) -> String {
    let mut summary = String::from("Performance Summary:\n\n");

    for (path, s) in stats {
        summary.push_str(&format!(
            "Endpoint: {path}\n\
             - Requests: {}\n\
             - Avg Time: {}ms\n\
             - Min Time: {}ms\n\
             - Max Time: {}ms\n\
             - Error Rate: {:.1}%\n\n",
            s.count,
            s.avg_duration(),
            s.min_duration,
            s.max_duration,
            s.error_rate()
        ));
    }

    summary
}

pub fn log_analysis_prompt(entries: &[LogEntry], stats: &HashMap<String, PathStatistics>) -> String {
    format!("{LOG_ANALYSIS_INSTRUCTION}{}", render_log_summary(entries, stats))
}

pub fn performance_prompt(stats: &HashMap<String, PathStatistics>) -> String {
    format!("{PERFORMANCE_INSTRUCTION}{}", render_performance_summary(stats))
}
