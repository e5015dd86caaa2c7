// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Compliance Analytics Engine
 * Computes coverage, the composite security score and the risk-tier
 * partition for one assessment selection
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use crate::analytics::classification::{is_critical_control, partition_by_risk};
use crate::analytics::recommendations::generate_recommendations;
use crate::catalog::{controls, frameworks};
use crate::types::{
    AnalyticsResult, CriticalControlsStatus, RiskDistribution, Selection,
};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use tracing::debug;

/// Round to two decimal places (coverage and compliance percentages)
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to one decimal place (risk distribution shares)
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Compute the full analytics snapshot for a selection. Pure function of
/// the inputs plus the static reference tables; unknown framework ids are
/// skipped and every zero-denominator case degrades to zero.
pub fn compute_analytics(selection: &Selection) -> AnalyticsResult {
    let by_framework = controls::controls_by_framework();

    // Applicable controls: union of the selected frameworks' control sets,
    // ascending by name. Ids without a control-set mapping are skipped.
    let mut applicable: BTreeSet<&str> = BTreeSet::new();
    let mut framework_coverage: BTreeMap<String, usize> = BTreeMap::new();
    for framework_id in &selection.selected_frameworks {
        let Some(set_name) = frameworks::control_set_name(framework_id) else {
            debug!(framework_id, "skipping unmapped framework id");
            continue;
        };
        if let Some(framework_controls) = by_framework.get(set_name) {
            applicable.extend(framework_controls.iter().copied());
            framework_coverage.insert(set_name.to_string(), framework_controls.len());
        }
    }

    let applicable_controls: Vec<String> =
        applicable.iter().map(|c| c.to_string()).collect();
    let total_applicable = applicable_controls.len();

    // Implemented: selection-order subsequence of the claimed controls.
    // Missing: applicable minus claimed, already ascending.
    let claimed: HashSet<&str> = selection
        .selected_controls
        .iter()
        .map(String::as_str)
        .collect();
    let implemented_controls: Vec<String> = selection
        .selected_controls
        .iter()
        .filter(|control| applicable.contains(control.as_str()))
        .cloned()
        .collect();
    let implemented_count = implemented_controls.len();
    let missing_controls: Vec<String> = applicable_controls
        .iter()
        .filter(|control| !claimed.contains(control.as_str()))
        .cloned()
        .collect();

    let coverage_percentage = if total_applicable > 0 {
        round2(implemented_count as f64 / total_applicable as f64 * 100.0)
    } else {
        0.0
    };

    // Composite score: coverage 60%, critical controls 30%, framework
    // alignment 10%, floored and clamped to 100.
    let coverage_score = coverage_percentage * 0.6;

    let critical_implemented = implemented_controls
        .iter()
        .filter(|control| is_critical_control(control))
        .count();
    let critical_applicable = applicable_controls
        .iter()
        .filter(|control| is_critical_control(control))
        .count();
    let critical_score = if critical_applicable > 0 {
        critical_implemented as f64 / critical_applicable as f64 * 30.0
    } else {
        0.0
    };

    // Alignment rewards framework diversity, capped at 10 points. Counts
    // the raw selection, unknown ids included.
    let alignment_score = (selection.selected_frameworks.len() * 2).min(10) as f64;

    let security_score =
        ((coverage_score + critical_score + alignment_score).floor() as u32).min(100);

    let risk_tiers = partition_by_risk(&missing_controls);
    let risk_levels = risk_tiers.counts();

    // Per-framework compliance percentage and missing-control count, for
    // selected frameworks with a resolvable control set only.
    let mut framework_compliance: BTreeMap<String, f64> = BTreeMap::new();
    let mut framework_missing_controls: BTreeMap<String, usize> = BTreeMap::new();
    for framework_id in &selection.selected_frameworks {
        let Some(set_name) = frameworks::control_set_name(framework_id) else {
            continue;
        };
        let Some(framework_controls) = by_framework.get(set_name) else {
            continue;
        };
        let framework_set: HashSet<&str> = framework_controls.iter().copied().collect();
        let fw_total = framework_controls.len();
        let fw_implemented = selection
            .selected_controls
            .iter()
            .filter(|control| framework_set.contains(control.as_str()))
            .count();
        let compliance = if fw_total > 0 {
            round2(fw_implemented as f64 / fw_total as f64 * 100.0)
        } else {
            0.0
        };
        framework_compliance.insert(set_name.to_string(), compliance);

        let fw_missing = missing_controls
            .iter()
            .filter(|control| framework_set.contains(control.as_str()))
            .count();
        framework_missing_controls.insert(set_name.to_string(), fw_missing);
    }

    let missing_total = missing_controls.len();
    let risk_distribution = if missing_total > 0 {
        RiskDistribution {
            technical_percent: round1(risk_levels.high as f64 / missing_total as f64 * 100.0),
            human_percent: round1(risk_levels.medium as f64 / missing_total as f64 * 100.0),
            governance_percent: round1(
                (risk_levels.critical + risk_levels.low) as f64 / missing_total as f64 * 100.0,
            ),
        }
    } else {
        RiskDistribution::default()
    };

    let critical_controls_status = CriticalControlsStatus {
        implemented: critical_implemented,
        total: critical_applicable,
        percentage: if critical_applicable > 0 {
            round2(critical_implemented as f64 / critical_applicable as f64 * 100.0)
        } else {
            0.0
        },
    };

    let recommendations = generate_recommendations(
        &selection.selected_controls,
        &missing_controls,
        &selection.selected_frameworks,
    );

    debug!(
        security_score,
        coverage = coverage_percentage,
        applicable = total_applicable,
        implemented = implemented_count,
        missing = missing_total,
        "analytics computed"
    );

    AnalyticsResult {
        security_score,
        coverage_percentage,
        frameworks_selected: selection.selected_frameworks.len(),
        total_frameworks: frameworks::all_frameworks().len(),
        controls_implemented: implemented_count,
        total_controls: total_applicable,
        implemented_controls,
        missing_controls,
        risk_tiers,
        risk_levels,
        framework_compliance,
        framework_coverage,
        framework_missing_controls,
        critical_controls_status,
        risk_distribution,
        recommendations,
    }
}
