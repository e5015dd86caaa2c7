// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use crate::analytics::compute_analytics;
use crate::catalog::frameworks;
use crate::errors::{AssessmentError, Result};
use crate::reporting::formats::{
    html::HtmlReportGenerator, json::JsonReportGenerator, markdown::MarkdownReportGenerator,
};
use crate::reporting::types::*;
use crate::str_utils::contains_any;
use crate::types::Selection;
use chrono::{Duration, Local, Utc};
use tracing::info;

/// Report-level risk categories, matched as case-sensitive substrings.
/// Coarser than the classifier's tier lists and deliberately separate.
const REPORT_TECHNICAL_KEYWORDS: [&str; 6] =
    ["Network", "Firewall", "Patch", "Vulnerability", "SIEM", "Monitoring"];
const REPORT_HUMAN_KEYWORDS: [&str; 4] = ["Training", "Awareness", "Education", "User"];
const REPORT_GOVERNANCE_KEYWORDS: [&str; 5] =
    ["Policy", "Governance", "Compliance", "Audit", "Documentation"];

pub struct ReportEngine;

impl ReportEngine {
    pub fn new() -> Self {
        Self
    }

    /// Build a downloadable assessment report for one selection. Analytics
    /// are recomputed fresh; nothing is cached between calls.
    pub async fn generate_report(
        &self,
        selection: &Selection,
        config: ReportConfig,
    ) -> Result<ReportOutput> {
        if !selection.is_complete() {
            return Err(AssessmentError::IncompleteSelection);
        }

        let analytics = compute_analytics(selection);
        let report = self.create_report(selection, analytics);
        let branding = config.branding.clone().unwrap_or_default();
        let stamp = Local::now().format("%Y%m%d_%H%M%S");

        info!(report_id = %report.report_metadata.report_id, format = ?config.format, "generating assessment report");

        match config.format {
            ReportFormat::Html => {
                let data = HtmlReportGenerator::new()
                    .generate(&report, &branding)
                    .await
                    .map_err(|e| AssessmentError::Report(e.to_string()))?;
                Ok(ReportOutput {
                    format: ReportFormat::Html,
                    data,
                    filename: format!("cybersecurity_assessment_report_{stamp}.html"),
                    mime_type: "text/html".to_string(),
                })
            }
            ReportFormat::Json => {
                let data = JsonReportGenerator::new()
                    .generate(&report)
                    .await
                    .map_err(|e| AssessmentError::Report(e.to_string()))?;
                Ok(ReportOutput {
                    format: ReportFormat::Json,
                    data,
                    filename: format!("cybersecurity_assessment_report_{stamp}.json"),
                    mime_type: "application/json".to_string(),
                })
            }
            ReportFormat::Markdown => {
                let data = MarkdownReportGenerator::new()
                    .generate(&report, &branding)
                    .await
                    .map_err(|e| AssessmentError::Report(e.to_string()))?;
                Ok(ReportOutput {
                    format: ReportFormat::Markdown,
                    data,
                    filename: format!("cybersecurity_assessment_report_{stamp}.md"),
                    mime_type: "text/markdown".to_string(),
                })
            }
        }
    }

    fn create_report(
        &self,
        selection: &Selection,
        analytics: crate::types::AnalyticsResult,
    ) -> AssessmentReport {
        let missing = &analytics.missing_controls;

        let technical_risks: Vec<String> = missing
            .iter()
            .filter(|c| contains_any(c, &REPORT_TECHNICAL_KEYWORDS))
            .cloned()
            .collect();
        let human_risks: Vec<String> = missing
            .iter()
            .filter(|c| contains_any(c, &REPORT_HUMAN_KEYWORDS))
            .cloned()
            .collect();
        let governance_risks: Vec<String> = missing
            .iter()
            .filter(|c| contains_any(c, &REPORT_GOVERNANCE_KEYWORDS))
            .cloned()
            .collect();

        let risk_categories = RiskCategorySummary {
            technical: Self::category_share(technical_risks.len(), missing.len()),
            human: Self::category_share(human_risks.len(), missing.len()),
            governance: Self::category_share(governance_risks.len(), missing.len()),
        };

        let framework_names: Vec<String> = selection
            .selected_frameworks
            .iter()
            .map(|id| {
                frameworks::control_set_name(id)
                    .unwrap_or(id.as_str())
                    .to_string()
            })
            .collect();

        AssessmentReport {
            report_metadata: Self::build_metadata(),
            analytics,
            selected_frameworks: selection.selected_frameworks.clone(),
            selected_controls: selection.selected_controls.clone(),
            framework_names,
            technical_risks,
            human_risks,
            governance_risks,
            risk_categories,
        }
    }

    fn category_share(count: usize, missing_total: usize) -> CategoryShare {
        let percentage = if missing_total > 0 {
            (count as f64 / missing_total as f64 * 1000.0).round() / 10.0
        } else {
            0.0
        };
        CategoryShare { count, percentage }
    }

    fn build_metadata() -> ReportMetadata {
        let now = Local::now();
        let utc = Utc::now();
        ReportMetadata {
            report_id: format!("APHELION-RPT-{}", now.format("%Y%m%d-%H%M%S")),
            report_title: "aphelioncyber Cybersecurity Risk Assessment Report".to_string(),
            assessment_scope: "Multi-Framework Security Control Assessment by aphelioncyber"
                .to_string(),
            assessment_methodology: "aphelioncyber Standard Risk Assessment Framework".to_string(),
            compliance_level: "Enterprise Grade".to_string(),
            report_classification: "Confidential - aphelioncyber".to_string(),
            report_version: "2.1".to_string(),
            download_timestamp: now.format("%Y-%m-%d %H:%M:%S").to_string(),
            utc_timestamp: utc.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            timezone: now.format("%:z").to_string(),
            assessment_date_iso: now.format("%Y-%m-%dT%H:%M:%S").to_string(),
            next_assessment_due: (now + Duration::days(90)).format("%B %d, %Y").to_string(),
            system_info: SystemInfo {
                platform: std::env::consts::OS.to_string(),
                arch: std::env::consts::ARCH.to_string(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}

impl Default for ReportEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection() -> Selection {
        Selection::new(
            vec!["nist_csf".to_string()],
            vec!["Asset Inventory".to_string(), "Risk Register".to_string()],
        )
    }

    #[tokio::test]
    async fn test_incomplete_selection_is_rejected() {
        let engine = ReportEngine::new();
        let err = engine
            .generate_report(&Selection::default(), ReportConfig::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "No assessment data available");
    }

    #[tokio::test]
    async fn test_html_report_output_shape() {
        let engine = ReportEngine::new();
        let output = engine
            .generate_report(&selection(), ReportConfig::default())
            .await
            .unwrap();
        assert_eq!(output.format, ReportFormat::Html);
        assert_eq!(output.mime_type, "text/html");
        assert!(output.filename.starts_with("cybersecurity_assessment_report_"));
        assert!(output.filename.ends_with(".html"));
        let html = String::from_utf8(output.data).unwrap();
        assert!(html.contains("aphelioncyber"));
        assert!(html.contains("NIST CSF"));
    }

    #[tokio::test]
    async fn test_json_report_round_trips() {
        let engine = ReportEngine::new();
        let output = engine
            .generate_report(
                &selection(),
                ReportConfig {
                    format: ReportFormat::Json,
                    branding: None,
                },
            )
            .await
            .unwrap();
        let report: AssessmentReport = serde_json::from_slice(&output.data).unwrap();
        assert!(report.report_metadata.report_id.starts_with("APHELION-RPT-"));
        assert_eq!(report.report_metadata.report_version, "2.1");
        assert_eq!(report.framework_names, vec!["NIST CSF"]);
        assert_eq!(report.analytics.controls_implemented, 2);
    }

    #[test]
    fn test_report_categories_overlap_and_round_to_one_decimal() {
        let engine = ReportEngine::new();
        let analytics = compute_analytics(&Selection::new(
            vec!["nist_csf".to_string()],
            vec!["Asset Inventory".to_string()],
        ));
        let report = engine.create_report(
            &Selection::new(
                vec!["nist_csf".to_string()],
                vec!["Asset Inventory".to_string()],
            ),
            analytics,
        );
        // 14 missing NIST controls; "Patch Management" is technical,
        // "Security Awareness Training" is human, "Configuration Management"
        // is in no report category.
        assert!(report.technical_risks.contains(&"Patch Management".to_string()));
        assert!(report
            .human_risks
            .contains(&"Security Awareness Training".to_string()));
        assert!(!report
            .technical_risks
            .contains(&"Configuration Management".to_string()));
        let total = report.analytics.missing_controls.len();
        assert_eq!(total, 14);
        assert_eq!(
            report.risk_categories.technical.percentage,
            (report.risk_categories.technical.count as f64 / 14.0 * 1000.0).round() / 10.0
        );
    }
}
