// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use crate::reporting::types::{AssessmentReport, BrandingConfig};
use anyhow::Result;

pub struct MarkdownReportGenerator;

impl MarkdownReportGenerator {
    pub fn new() -> Self {
        Self
    }

    pub async fn generate(
        &self,
        report: &AssessmentReport,
        branding: &BrandingConfig,
    ) -> Result<Vec<u8>> {
        let markdown = self.generate_markdown(report, branding);
        Ok(markdown.into_bytes())
    }

    fn generate_markdown(&self, report: &AssessmentReport, branding: &BrandingConfig) -> String {
        let analytics = &report.analytics;
        let meta = &report.report_metadata;
        let mut md = String::new();

        md.push_str(&format!("# {}\n\n", meta.report_title));
        md.push_str(&format!("**Report ID:** {}\n\n", meta.report_id));
        md.push_str(&format!("**Generated:** {}\n\n", meta.download_timestamp));
        md.push_str(&format!("**Scope:** {}\n\n", meta.assessment_scope));
        md.push_str(&format!(
            "**Next Assessment Due:** {}\n\n",
            meta.next_assessment_due
        ));
        md.push_str("---\n\n");

        md.push_str("## Executive Summary\n\n");
        md.push_str(&format!(
            "**Security Score:** {}/100\n\n",
            analytics.security_score
        ));
        md.push_str(&format!(
            "**Control Coverage:** {:.2}% ({} of {} applicable controls)\n\n",
            analytics.coverage_percentage,
            analytics.controls_implemented,
            analytics.total_controls
        ));
        md.push_str(&format!(
            "**Frameworks Assessed:** {} ({})\n\n",
            analytics.frameworks_selected,
            report.framework_names.join(", ")
        ));
        md.push_str(&format!(
            "**Critical Controls:** {} of {} implemented ({:.2}%)\n\n",
            analytics.critical_controls_status.implemented,
            analytics.critical_controls_status.total,
            analytics.critical_controls_status.percentage
        ));

        md.push_str("## Risk Summary\n\n");
        md.push_str("| Risk Tier | Missing Controls |\n");
        md.push_str("|-----------|------------------|\n");
        md.push_str(&format!("| CRITICAL | {} |\n", analytics.risk_levels.critical));
        md.push_str(&format!("| HIGH | {} |\n", analytics.risk_levels.high));
        md.push_str(&format!("| MEDIUM | {} |\n", analytics.risk_levels.medium));
        md.push_str(&format!("| LOW | {} |\n", analytics.risk_levels.low));
        md.push_str(&format!(
            "| **Total** | **{}** |\n\n",
            analytics.missing_controls.len()
        ));

        md.push_str("## Framework Compliance\n\n");
        md.push_str("| Framework | Compliance | Controls | Missing |\n");
        md.push_str("|-----------|-----------:|---------:|--------:|\n");
        for (framework, compliance) in &analytics.framework_compliance {
            let total = analytics.framework_coverage.get(framework).unwrap_or(&0);
            let missing = analytics
                .framework_missing_controls
                .get(framework)
                .unwrap_or(&0);
            md.push_str(&format!(
                "| {framework} | {compliance:.2}% | {total} | {missing} |\n"
            ));
        }
        md.push('\n');

        if !analytics.missing_controls.is_empty() {
            md.push_str("## Missing Controls by Risk Tier\n\n");
            for (tier, bucket) in [
                ("CRITICAL", &analytics.risk_tiers.critical),
                ("HIGH", &analytics.risk_tiers.high),
                ("MEDIUM", &analytics.risk_tiers.medium),
                ("LOW", &analytics.risk_tiers.low),
            ] {
                if bucket.is_empty() {
                    continue;
                }
                md.push_str(&format!("### {tier}\n\n"));
                for control in bucket {
                    md.push_str(&format!("- {control}\n"));
                }
                md.push('\n');
            }
        }

        if !analytics.recommendations.is_empty() {
            md.push_str("## Recommendations\n\n");
            for (idx, rec) in analytics.recommendations.iter().enumerate() {
                md.push_str(&format!(
                    "{}. **[{}]** {}\n   {}\n",
                    idx + 1,
                    rec.priority.to_string().to_uppercase(),
                    rec.title,
                    rec.description
                ));
            }
            md.push('\n');
        }

        md.push_str("## Implemented Controls\n\n");
        for control in &analytics.implemented_controls {
            md.push_str(&format!("- {control}\n"));
        }
        md.push('\n');

        md.push_str("---\n\n");
        if let Some(footer) = &branding.footer_text {
            md.push_str(&format!("*{}*\n", footer));
        }
        md.push_str(&format!(
            "*{} | {} | Classification: {}*\n",
            branding.company_name, meta.report_id, meta.report_classification
        ));

        md
    }
}

impl Default for MarkdownReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}
