// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One assessment's worth of user input: the chosen framework ids and the
/// control names the user claims to have implemented. Carried explicitly
/// through every call instead of living in ambient session state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    #[serde(default)]
    pub selected_frameworks: Vec<String>,

    #[serde(default)]
    pub selected_controls: Vec<String>,
}

impl Selection {
    pub fn new(selected_frameworks: Vec<String>, selected_controls: Vec<String>) -> Self {
        Self {
            selected_frameworks,
            selected_controls,
        }
    }

    /// Both wizard steps done. The dashboard and report views refuse to
    /// render until this holds.
    pub fn is_complete(&self) -> bool {
        !self.selected_frameworks.is_empty() && !self.selected_controls.is_empty()
    }
}

/// Risk tier assigned to a missing control via keyword precedence
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Critical,
    High,
    Medium,
    Low,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Critical => "CRITICAL",
            RiskLevel::High => "HIGH",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::Low => "LOW",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Critical => write!(f, "critical"),
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

/// Missing controls partitioned into the four risk tiers. The buckets are
/// disjoint and their union is exactly the missing-control set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RiskTiers {
    pub critical: Vec<String>,
    pub high: Vec<String>,
    pub medium: Vec<String>,
    pub low: Vec<String>,
}

impl RiskTiers {
    pub fn counts(&self) -> RiskLevelCounts {
        RiskLevelCounts {
            critical: self.critical.len(),
            high: self.high.len(),
            medium: self.medium.len(),
            low: self.low.len(),
        }
    }

    pub fn total(&self) -> usize {
        self.critical.len() + self.high.len() + self.medium.len() + self.low.len()
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RiskLevelCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CriticalControlsStatus {
    pub implemented: usize,
    pub total: usize,
    pub percentage: f64,
}

/// Share of the missing-control set held by each report category, in
/// percent rounded to one decimal place.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskDistribution {
    pub technical_percent: f64,
    pub human_percent: f64,
    pub governance_percent: f64,
}

/// Derived, immutable snapshot of one assessment. Recomputed fresh on every
/// dashboard or report request; never cached or persisted.
///
/// Map-valued fields use BTreeMap so identical inputs always serialize
/// byte-identically.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResult {
    /// Composite security score, integer clamped to [0, 100]
    pub security_score: u32,
    /// Implemented share of applicable controls, percent to 2 decimals
    pub coverage_percentage: f64,
    pub frameworks_selected: usize,
    pub total_frameworks: usize,
    pub controls_implemented: usize,
    pub total_controls: usize,
    /// Selection-order subsequence of the claimed controls that are applicable
    pub implemented_controls: Vec<String>,
    /// Applicable controls not claimed, ascending by name
    pub missing_controls: Vec<String>,
    pub risk_tiers: RiskTiers,
    pub risk_levels: RiskLevelCounts,
    /// Per-framework implemented percentage, keyed by control-set name
    pub framework_compliance: BTreeMap<String, f64>,
    /// Per-framework applicable-control count, keyed by control-set name
    pub framework_coverage: BTreeMap<String, usize>,
    /// Per-framework missing-control count, keyed by control-set name
    pub framework_missing_controls: BTreeMap<String, usize>,
    pub critical_controls_status: CriticalControlsStatus,
    pub risk_distribution: RiskDistribution,
    pub recommendations: Vec<Recommendation>,
}
