// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Prioritized remediation recommendations derived from missing controls
//! and the selected frameworks.

use crate::catalog::{controls, frameworks};
use crate::str_utils::{contains_any, title_case};
use crate::types::{Priority, Recommendation};
use std::collections::HashSet;

/// At most this many recommendations are returned, in generation order
const MAX_RECOMMENDATIONS: usize = 6;

/// At most this many control names are listed in the critical
/// recommendation before an ellipsis
const MAX_LISTED_CONTROLS: usize = 3;

/// Phrases that flag a missing control as an emergency. Matched as
/// case-sensitive substrings; intentionally not the same list the scorer
/// uses (see `classification::CRITICAL_CONTROL_KEYWORDS`, which matches
/// case-insensitively).
pub const CRITICAL_RECOMMENDATION_KEYWORDS: [&str; 6] = [
    "MFA (Multi-Factor Authentication)",
    "Encryption",
    "Access Control",
    "Incident Response Plan",
    "Backup & Recovery",
    "Network Firewall",
];

/// Human-readable compliance focus per framework id
fn framework_blurb(framework_id: &str) -> Option<&'static str> {
    match framework_id {
        "nist_csf" => Some("Implement NIST Cybersecurity Framework core functions"),
        "iso_27001" => Some("Establish Information Security Management System (ISMS)"),
        "pci_dss" => Some("Secure cardholder data environment and payment processes"),
        "hipaa" => Some("Protect healthcare information and ensure patient data privacy"),
        "rbi_cybersecurity" => Some("Meet Reserve Bank of India cybersecurity requirements"),
        "cobit_2019" => Some("Align IT governance with business objectives"),
        "cert_in" => Some("Follow national cybersecurity guidelines and incident reporting"),
        "iso_27001_enterprise" => Some("Implement cloud-specific security controls"),
        _ => None,
    }
}

/// Generate the ranked recommendation list. A fully covered selection gets
/// no recommendations at all.
pub fn generate_recommendations(
    _selected_controls: &[String],
    missing_controls: &[String],
    selected_frameworks: &[String],
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if missing_controls.is_empty() {
        return recommendations;
    }

    let missing_critical: Vec<&str> = missing_controls
        .iter()
        .filter(|control| contains_any(control, &CRITICAL_RECOMMENDATION_KEYWORDS))
        .map(String::as_str)
        .collect();

    if !missing_critical.is_empty() {
        let listed = missing_critical
            .iter()
            .take(MAX_LISTED_CONTROLS)
            .copied()
            .collect::<Vec<_>>()
            .join(", ");
        let ellipsis = if missing_critical.len() > MAX_LISTED_CONTROLS {
            "..."
        } else {
            ""
        };
        recommendations.push(Recommendation {
            title: "CRITICAL: Implement essential security controls immediately".to_string(),
            description: format!("Missing critical controls: {listed}{ellipsis}"),
            priority: Priority::Critical,
        });
    }

    // One recommendation per selected framework that still has missing
    // controls, in selection order
    let by_framework = controls::controls_by_framework();
    for framework_id in selected_frameworks {
        let Some(set_name) = frameworks::control_set_name(framework_id) else {
            continue;
        };
        let Some(framework_controls) = by_framework.get(set_name) else {
            continue;
        };
        let framework_set: HashSet<&str> = framework_controls.iter().copied().collect();
        let missing_count = missing_controls
            .iter()
            .filter(|control| framework_set.contains(control.as_str()))
            .count();
        if missing_count == 0 {
            continue;
        }
        if let Some(blurb) = framework_blurb(framework_id) {
            recommendations.push(Recommendation {
                title: format!("Framework Compliance: {blurb}"),
                description: format!(
                    "Focus on {missing_count} missing controls specific to {} requirements",
                    title_case(&framework_id.replace('_', " "))
                ),
                priority: Priority::High,
            });
        }
    }

    if missing_controls
        .iter()
        .any(|c| c.contains("Patch") || c.contains("Vulnerability"))
    {
        recommendations.push(Recommendation {
            title: "Vulnerability Management: Implement patch management and vulnerability scanning"
                .to_string(),
            description: "Regular vulnerability assessments and timely patching are essential"
                .to_string(),
            priority: Priority::High,
        });
    }

    if missing_controls
        .iter()
        .any(|c| c.contains("Monitoring") || c.contains("SIEM") || c.contains("Logging"))
    {
        recommendations.push(Recommendation {
            title: "Security Monitoring: Deploy comprehensive monitoring and logging".to_string(),
            description: "Implement SIEM, continuous monitoring, and audit trail capabilities"
                .to_string(),
            priority: Priority::High,
        });
    }

    if missing_controls
        .iter()
        .any(|c| c.contains("Training") || c.contains("Awareness"))
    {
        recommendations.push(Recommendation {
            title: "Human Factor Security: Establish security awareness training program"
                .to_string(),
            description: "Regular training reduces risk of human error and social engineering"
                .to_string(),
            priority: Priority::Medium,
        });
    }

    if missing_controls
        .iter()
        .any(|c| c.contains("Backup") || c.contains("Recovery") || c.contains("Continuity"))
    {
        recommendations.push(Recommendation {
            title: "Business Continuity: Implement robust backup and disaster recovery".to_string(),
            description: "Ensure business continuity with tested backup and recovery procedures"
                .to_string(),
            priority: Priority::Medium,
        });
    }

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}
