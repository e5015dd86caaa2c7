// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use crate::reporting::types::{AssessmentReport, BrandingConfig};
use crate::types::Priority;
use anyhow::Result;

pub struct HtmlReportGenerator;

impl HtmlReportGenerator {
    pub fn new() -> Self {
        Self
    }

    pub async fn generate(
        &self,
        report: &AssessmentReport,
        branding: &BrandingConfig,
    ) -> Result<Vec<u8>> {
        let html = self.generate_html(report, branding);
        Ok(html.into_bytes())
    }

    fn generate_html(&self, report: &AssessmentReport, branding: &BrandingConfig) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>
    <style>
        {}
    </style>
</head>
<body>
    <div class="container">
        {}
        {}
        {}
        {}
        {}
        {}
        {}
    </div>
</body>
</html>"#,
            report.report_metadata.report_title,
            self.get_css(branding),
            self.generate_header(report, branding),
            self.generate_score_summary(report),
            self.generate_framework_table(report),
            self.generate_risk_tiers(report),
            self.generate_missing_controls(report),
            self.generate_recommendations(report),
            self.generate_footer(report, branding)
        )
    }

    fn get_css(&self, branding: &BrandingConfig) -> String {
        format!(
            r#"
        * {{
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }}

        body {{
            font-family: 'Segoe UI', Arial, sans-serif;
            line-height: 1.6;
            color: #2c2c2c;
            background-color: #fafafa;
        }}

        .container {{
            max-width: 1100px;
            margin: 0 auto;
            padding: 24px;
        }}

        .report-header {{
            background: linear-gradient(135deg, {primary} 0%, {secondary} 100%);
            color: #ffffff;
            padding: 32px;
            border-radius: 8px;
            margin-bottom: 24px;
        }}

        .report-header h1 {{
            font-size: 1.6em;
            margin-bottom: 8px;
        }}

        .report-header .meta {{
            font-size: 0.85em;
            opacity: 0.9;
        }}

        .card {{
            background: #ffffff;
            border: 1px solid #e0e0e0;
            border-radius: 8px;
            padding: 24px;
            margin-bottom: 24px;
        }}

        .card h2 {{
            color: {primary};
            margin-bottom: 16px;
            font-size: 1.2em;
        }}

        .score-grid {{
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
            gap: 16px;
        }}

        .score-box {{
            text-align: center;
            padding: 16px;
            border-radius: 8px;
            background: #f5f0fa;
        }}

        .score-box .value {{
            font-size: 2em;
            font-weight: 700;
            color: {primary};
        }}

        .score-box .label {{
            font-size: 0.8em;
            color: #666666;
            text-transform: uppercase;
        }}

        table {{
            width: 100%;
            border-collapse: collapse;
        }}

        th, td {{
            text-align: left;
            padding: 8px 12px;
            border-bottom: 1px solid #e8e8e8;
        }}

        th {{
            background: #f5f0fa;
            color: {primary};
            font-size: 0.85em;
            text-transform: uppercase;
        }}

        .tier {{
            display: inline-block;
            padding: 2px 10px;
            border-radius: 10px;
            font-size: 0.75em;
            font-weight: 700;
            color: #ffffff;
        }}

        .tier-critical {{ background: #c62828; }}
        .tier-high {{ background: #ef6c00; }}
        .tier-medium {{ background: #f9a825; }}
        .tier-low {{ background: #2e7d32; }}

        .recommendation {{
            border-left: 4px solid {primary};
            padding: 12px 16px;
            margin-bottom: 12px;
            background: #f9f7fc;
        }}

        .recommendation .title {{
            font-weight: 600;
        }}

        .recommendation .description {{
            font-size: 0.9em;
            color: #555555;
        }}

        .footer {{
            text-align: center;
            font-size: 0.8em;
            color: #888888;
            padding: 16px 0;
        }}
        "#,
            primary = branding.primary_color,
            secondary = branding.secondary_color,
        )
    }

    fn generate_header(&self, report: &AssessmentReport, branding: &BrandingConfig) -> String {
        let meta = &report.report_metadata;
        let title = branding
            .report_title
            .as_deref()
            .unwrap_or(&meta.report_title);
        format!(
            r#"<div class="report-header">
            <h1>{title}</h1>
            <div class="meta">
                <div>Report ID: {} | Version {} | {}</div>
                <div>Generated: {} ({} UTC) | Next assessment due: {}</div>
                <div>Scope: {}</div>
            </div>
        </div>"#,
            meta.report_id,
            meta.report_version,
            meta.report_classification,
            meta.download_timestamp,
            meta.utc_timestamp,
            meta.next_assessment_due,
            meta.assessment_scope,
        )
    }

    fn generate_score_summary(&self, report: &AssessmentReport) -> String {
        let analytics = &report.analytics;
        format!(
            r#"<div class="card">
            <h2>Executive Summary</h2>
            <div class="score-grid">
                <div class="score-box">
                    <div class="value">{}</div>
                    <div class="label">Security Score / 100</div>
                </div>
                <div class="score-box">
                    <div class="value">{:.2}%</div>
                    <div class="label">Control Coverage</div>
                </div>
                <div class="score-box">
                    <div class="value">{} / {}</div>
                    <div class="label">Controls Implemented</div>
                </div>
                <div class="score-box">
                    <div class="value">{} / {}</div>
                    <div class="label">Critical Controls</div>
                </div>
            </div>
        </div>"#,
            analytics.security_score,
            analytics.coverage_percentage,
            analytics.controls_implemented,
            analytics.total_controls,
            analytics.critical_controls_status.implemented,
            analytics.critical_controls_status.total,
        )
    }

    fn generate_framework_table(&self, report: &AssessmentReport) -> String {
        let analytics = &report.analytics;
        let mut rows = String::new();
        for (framework, compliance) in &analytics.framework_compliance {
            let total = analytics.framework_coverage.get(framework).unwrap_or(&0);
            let missing = analytics
                .framework_missing_controls
                .get(framework)
                .unwrap_or(&0);
            rows.push_str(&format!(
                "<tr><td>{framework}</td><td>{compliance:.2}%</td><td>{total}</td><td>{missing}</td></tr>\n"
            ));
        }
        format!(
            r#"<div class="card">
            <h2>Framework Compliance</h2>
            <table>
                <thead>
                    <tr><th>Framework</th><th>Compliance</th><th>Applicable Controls</th><th>Missing</th></tr>
                </thead>
                <tbody>
                    {rows}
                </tbody>
            </table>
        </div>"#
        )
    }

    fn generate_risk_tiers(&self, report: &AssessmentReport) -> String {
        let counts = &report.analytics.risk_levels;
        format!(
            r#"<div class="card">
            <h2>Risk Profile</h2>
            <table>
                <thead>
                    <tr><th>Risk Tier</th><th>Missing Controls</th></tr>
                </thead>
                <tbody>
                    <tr><td><span class="tier tier-critical">CRITICAL</span></td><td>{}</td></tr>
                    <tr><td><span class="tier tier-high">HIGH</span></td><td>{}</td></tr>
                    <tr><td><span class="tier tier-medium">MEDIUM</span></td><td>{}</td></tr>
                    <tr><td><span class="tier tier-low">LOW</span></td><td>{}</td></tr>
                </tbody>
            </table>
        </div>"#,
            counts.critical, counts.high, counts.medium, counts.low,
        )
    }

    fn generate_missing_controls(&self, report: &AssessmentReport) -> String {
        let tiers = &report.analytics.risk_tiers;
        if report.analytics.missing_controls.is_empty() {
            return r#"<div class="card">
            <h2>Missing Controls</h2>
            <p>All applicable controls are implemented.</p>
        </div>"#
                .to_string();
        }

        let mut rows = String::new();
        for (class, label, bucket) in [
            ("tier-critical", "CRITICAL", &tiers.critical),
            ("tier-high", "HIGH", &tiers.high),
            ("tier-medium", "MEDIUM", &tiers.medium),
            ("tier-low", "LOW", &tiers.low),
        ] {
            for control in bucket {
                rows.push_str(&format!(
                    "<tr><td>{control}</td><td><span class=\"tier {class}\">{label}</span></td></tr>\n"
                ));
            }
        }
        format!(
            r#"<div class="card">
            <h2>Missing Controls</h2>
            <table>
                <thead>
                    <tr><th>Control</th><th>Risk Tier</th></tr>
                </thead>
                <tbody>
                    {rows}
                </tbody>
            </table>
        </div>"#
        )
    }

    fn generate_recommendations(&self, report: &AssessmentReport) -> String {
        if report.analytics.recommendations.is_empty() {
            return String::new();
        }
        let mut items = String::new();
        for rec in &report.analytics.recommendations {
            let class = match rec.priority {
                Priority::Critical => "tier-critical",
                Priority::High => "tier-high",
                Priority::Medium => "tier-medium",
            };
            items.push_str(&format!(
                r#"<div class="recommendation">
                <span class="tier {class}">{}</span>
                <div class="title">{}</div>
                <div class="description">{}</div>
            </div>"#,
                rec.priority.to_string().to_uppercase(),
                rec.title,
                rec.description,
            ));
        }
        format!(
            r#"<div class="card">
            <h2>Prioritized Recommendations</h2>
            {items}
        </div>"#
        )
    }

    fn generate_footer(&self, report: &AssessmentReport, branding: &BrandingConfig) -> String {
        let footer_text = branding.footer_text.as_deref().unwrap_or("");
        format!(
            r#"<div class="footer">
            <div>{} | {} | {}</div>
            <div>{footer_text}</div>
        </div>"#,
            branding.company_name,
            report.report_metadata.report_id,
            report.report_metadata.assessment_methodology,
        )
    }
}

impl Default for HtmlReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporting::engine::ReportEngine;
    use crate::reporting::types::ReportConfig;
    use crate::types::Selection;

    #[tokio::test]
    async fn test_html_contains_tiered_missing_controls() {
        let selection = Selection::new(
            vec!["nist_csf".to_string()],
            vec!["Asset Inventory".to_string()],
        );
        let output = ReportEngine::new()
            .generate_report(&selection, ReportConfig::default())
            .await
            .unwrap();
        let html = String::from_utf8(output.data).unwrap();
        assert!(html.contains("MFA (Multi-Factor Authentication)"));
        assert!(html.contains("tier-critical"));
        assert!(html.contains("Prioritized Recommendations"));
        assert!(html.contains("Framework Compliance"));
    }
}
