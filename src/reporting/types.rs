// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use crate::types::AnalyticsResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportConfig {
    pub format: ReportFormat,
    pub branding: Option<BrandingConfig>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Html,
            branding: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Html,
    Json,
    Markdown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingConfig {
    pub company_name: String,
    pub report_title: Option<String>,
    pub primary_color: String,
    pub secondary_color: String,
    pub footer_text: Option<String>,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            company_name: "aphelioncyber".to_string(),
            report_title: None,
            primary_color: "#9c27b0".to_string(),
            secondary_color: "#673ab7".to_string(),
            footer_text: Some("Confidential - aphelioncyber".to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReportOutput {
    pub format: ReportFormat,
    pub data: Vec<u8>,
    pub filename: String,
    pub mime_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfo {
    pub platform: String,
    pub arch: String,
    pub engine_version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    /// APHELION-RPT-<yyyymmdd-hhmmss>
    pub report_id: String,
    pub report_title: String,
    pub assessment_scope: String,
    pub assessment_methodology: String,
    pub compliance_level: String,
    pub report_classification: String,
    pub report_version: String,
    pub download_timestamp: String,
    pub utc_timestamp: String,
    pub timezone: String,
    pub assessment_date_iso: String,
    /// 90 days out, "Month DD, YYYY"
    pub next_assessment_due: String,
    pub system_info: SystemInfo,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryShare {
    pub count: usize,
    pub percentage: f64,
}

/// Report-level grouping of missing controls. Unlike the analytics risk
/// tiers these categories are not exclusive: a control may appear in more
/// than one, or in none.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskCategorySummary {
    pub technical: CategoryShare,
    pub human: CategoryShare,
    pub governance: CategoryShare,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport {
    pub report_metadata: ReportMetadata,
    pub analytics: AnalyticsResult,
    pub selected_frameworks: Vec<String>,
    pub selected_controls: Vec<String>,
    /// Control-set names for the selected ids, falling back to the raw id
    /// for unmapped frameworks
    pub framework_names: Vec<String>,
    pub technical_risks: Vec<String>,
    pub human_risks: Vec<String>,
    pub governance_risks: Vec<String>,
    pub risk_categories: RiskCategorySummary,
}
