// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Keyword-based risk classification of security controls.
//!
//! Classification is substring containment over free-text control names,
//! matched case-insensitively. The whole heuristic lives behind
//! [`risk_level`] so it can later be swapped for an explicit tag-based
//! model without touching callers.

use crate::str_utils::contains_any_ignore_case;
use crate::types::{RiskLevel, RiskTiers};

/// Enterprise priority controls. A control counts as critical when its name
/// contains any of these phrases, both for the 30%-weight scoring component
/// and for the critical risk tier.
pub const CRITICAL_CONTROL_KEYWORDS: [&str; 12] = [
    "MFA (Multi-Factor Authentication)",
    "Encryption at Rest",
    "Encryption in Transit",
    "Access Control & Identity Management",
    "Incident Response Plan",
    "Backup & Disaster Recovery",
    "Network Firewall & Segmentation",
    "Vulnerability Management & Scanning",
    "SIEM (Security Information and Event Management)",
    "Privileged Access Management",
    "Data Loss Prevention (DLP)",
    "Security Awareness Training",
];

/// Infrastructure and technical controls -> high tier
pub const TECHNICAL_KEYWORDS: [&str; 14] = [
    "Patch Management",
    "Vulnerability",
    "Firewall",
    "Monitoring",
    "Authentication",
    "Network Security",
    "Endpoint Protection",
    "Intrusion Detection",
    "SIEM",
    "Encryption",
    "Antivirus",
    "IDS",
    "IPS",
    "Security Tools",
];

/// Training, awareness and people controls -> medium tier
pub const HUMAN_KEYWORDS: [&str; 10] = [
    "Training",
    "Awareness",
    "Education",
    "User",
    "Phishing",
    "Social Engineering",
    "Security Culture",
    "Staff",
    "Employee",
    "Personnel",
];

/// Policies, procedures and compliance controls -> low tier. Controls
/// matching no list at all also land in the low tier, so this list and the
/// catch-all share a bucket.
pub const GOVERNANCE_KEYWORDS: [&str; 11] = [
    "Policy",
    "Procedure",
    "Governance",
    "Compliance",
    "Audit",
    "Documentation",
    "Risk Assessment",
    "Management",
    "Oversight",
    "Review",
    "Process",
];

/// Whether a control counts as critical for scoring purposes
pub fn is_critical_control(name: &str) -> bool {
    contains_any_ignore_case(name, &CRITICAL_CONTROL_KEYWORDS)
}

/// Assign a risk tier to a missing control. Tiers are tested in strict
/// precedence order and the first match wins; anything unmatched defaults
/// to the low (governance) tier.
pub fn risk_level(name: &str) -> RiskLevel {
    if contains_any_ignore_case(name, &CRITICAL_CONTROL_KEYWORDS) {
        RiskLevel::Critical
    } else if contains_any_ignore_case(name, &TECHNICAL_KEYWORDS) {
        RiskLevel::High
    } else if contains_any_ignore_case(name, &HUMAN_KEYWORDS) {
        RiskLevel::Medium
    } else {
        // Governance keywords and the catch-all both resolve to Low
        RiskLevel::Low
    }
}

/// Partition missing controls into the four disjoint tier buckets,
/// preserving input order within each bucket
pub fn partition_by_risk(missing_controls: &[String]) -> RiskTiers {
    let mut tiers = RiskTiers::default();
    for control in missing_controls {
        match risk_level(control) {
            RiskLevel::Critical => tiers.critical.push(control.clone()),
            RiskLevel::High => tiers.high.push(control.clone()),
            RiskLevel::Medium => tiers.medium.push(control.clone()),
            RiskLevel::Low => tiers.low.push(control.clone()),
        }
    }
    tiers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_critical_match_is_case_insensitive_substring() {
        assert!(is_critical_control("MFA (Multi-Factor Authentication)"));
        assert!(is_critical_control("mfa (multi-factor authentication) rollout"));
        assert!(is_critical_control("SIEM (Security Information and Event Management)"));
        // "Encryption" alone is not "Encryption at Rest"
        assert!(!is_critical_control("Encryption"));
        assert!(!is_critical_control("Network Firewall"));
    }

    #[test]
    fn test_precedence_critical_beats_technical() {
        // Contains both a critical phrase ("MFA ...") and a technical
        // keyword ("Authentication"); critical wins.
        assert_eq!(
            risk_level("MFA (Multi-Factor Authentication)"),
            RiskLevel::Critical
        );
    }

    #[test]
    fn test_precedence_technical_beats_human() {
        // "User Activity Monitoring" matches both "Monitoring" (technical)
        // and "User" (human); technical wins.
        assert_eq!(risk_level("User Activity Monitoring"), RiskLevel::High);
    }

    #[test]
    fn test_human_tier() {
        assert_eq!(risk_level("Customer Education & Awareness"), RiskLevel::Medium);
        assert_eq!(risk_level("Phishing & Social Engineering Defense"), RiskLevel::Medium);
    }

    #[test]
    fn test_governance_and_catch_all_land_in_low() {
        assert_eq!(risk_level("Cyber Security Policy"), RiskLevel::Low);
        assert_eq!(risk_level("Configuration Management"), RiskLevel::Low);
        // Matches none of the four keyword lists
        assert_eq!(risk_level("Asset Inventory"), RiskLevel::Low);
        assert_eq!(risk_level("Tokenization"), RiskLevel::Low);
    }

    #[test]
    fn test_partition_is_complete_and_disjoint() {
        let missing: Vec<String> = [
            "MFA (Multi-Factor Authentication)",
            "Encryption",
            "Security Awareness Training",
            "Cyber Security Policy",
            "Asset Inventory",
            "Customer Education & Awareness",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let tiers = partition_by_risk(&missing);
        assert_eq!(tiers.total(), missing.len());

        let mut rejoined: Vec<&String> = tiers
            .critical
            .iter()
            .chain(&tiers.high)
            .chain(&tiers.medium)
            .chain(&tiers.low)
            .collect();
        rejoined.sort();
        rejoined.dedup();
        assert_eq!(rejoined.len(), missing.len());

        assert_eq!(tiers.critical.len(), 2);
        assert_eq!(tiers.high, vec!["Encryption"]);
        assert_eq!(tiers.medium, vec!["Customer Education & Awareness"]);
        assert_eq!(tiers.low.len(), 2);
    }
}
