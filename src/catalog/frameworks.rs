// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Framework catalog and the authoritative framework id <-> control-set-name
//! table. The control-set name is the key used by
//! [`controls_by_framework`](crate::catalog::controls::controls_by_framework)
//! and can differ from the catalog display name (NIST CSF does).

use serde::Serialize;

/// One supported compliance framework, as shown on the selection page
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

static FRAMEWORKS: [FrameworkInfo; 8] = [
    FrameworkInfo {
        id: "nist_csf",
        name: "NIST CSF (Cybersecurity Framework)",
        description: "The NIST framework is US-based and focuses on identifying, protecting, detecting, responding to, and recovering from cybersecurity threats.",
        icon: "fas fa-shield-alt",
        color: "#9c27b0",
    },
    FrameworkInfo {
        id: "iso_27001",
        name: "ISO/IEC 27001/27005",
        description: "International standard for managing information security. Emphasizes confidentiality, integrity, and availability.",
        icon: "fas fa-certificate",
        color: "#673ab7",
    },
    FrameworkInfo {
        id: "cobit_2019",
        name: "COBIT 2019",
        description: "A governance framework focusing on aligning IT goals with business objectives.",
        icon: "fas fa-cogs",
        color: "#8e24aa",
    },
    FrameworkInfo {
        id: "rbi_cybersecurity",
        name: "RBI Cybersecurity",
        description: "India's Reserve Bank compliance framework for financial institutions.",
        icon: "fas fa-university",
        color: "#7b1fa2",
    },
    FrameworkInfo {
        id: "pci_dss",
        name: "PCI-DSS v4.0",
        description: "Security standard for organizations handling cardholder data.",
        icon: "fas fa-credit-card",
        color: "#6a1b9a",
    },
    FrameworkInfo {
        id: "hipaa",
        name: "HIPAA",
        description: "U.S. healthcare regulation emphasizing patient data privacy.",
        icon: "fas fa-user-md",
        color: "#9c27b0",
    },
    FrameworkInfo {
        id: "iso_27001_enterprise",
        name: "ISO 27001 (Enterprise/SaaS)",
        description: "Cloud-specific interpretation of ISO 27001 for SaaS or large-scale systems.",
        icon: "fas fa-cloud-upload-alt",
        color: "#673ab7",
    },
    FrameworkInfo {
        id: "cert_in",
        name: "CERT-IN",
        description: "India's national cybersecurity incident response body.",
        icon: "fas fa-flag",
        color: "#8e24aa",
    },
];

/// Framework id -> control-set name. One entry per supported framework; this
/// table must stay in sync with the keys of `controls_by_framework`.
const CONTROL_SET_NAMES: [(&str, &str); 8] = [
    ("nist_csf", "NIST CSF"),
    ("iso_27001", "ISO/IEC 27001/27005"),
    ("cobit_2019", "COBIT 2019"),
    ("rbi_cybersecurity", "RBI Cybersecurity"),
    ("pci_dss", "PCI-DSS v4.0"),
    ("hipaa", "HIPAA"),
    ("iso_27001_enterprise", "ISO 27001 (Enterprise/SaaS)"),
    ("cert_in", "CERT-IN"),
];

/// All supported frameworks, in selection-page order
pub fn all_frameworks() -> &'static [FrameworkInfo] {
    &FRAMEWORKS
}

pub fn framework_by_id(id: &str) -> Option<&'static FrameworkInfo> {
    FRAMEWORKS.iter().find(|f| f.id == id)
}

/// Resolve a framework id to its control-set name. Unknown ids return None
/// and are silently skipped by the analytics engine.
pub fn control_set_name(id: &str) -> Option<&'static str> {
    CONTROL_SET_NAMES
        .iter()
        .find(|(fw_id, _)| *fw_id == id)
        .map(|(_, name)| *name)
}

/// Reverse direction of [`control_set_name`]
pub fn framework_id_for_control_set(name: &str) -> Option<&'static str> {
    CONTROL_SET_NAMES
        .iter()
        .find(|(_, set_name)| *set_name == name)
        .map(|(fw_id, _)| *fw_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::controls;

    #[test]
    fn test_catalog_has_eight_frameworks() {
        assert_eq!(all_frameworks().len(), 8);
        assert_eq!(CONTROL_SET_NAMES.len(), 8);
    }

    #[test]
    fn test_bidirectional_table_round_trips() {
        for framework in all_frameworks() {
            let set_name = control_set_name(framework.id).expect("every id maps to a set name");
            assert_eq!(framework_id_for_control_set(set_name), Some(framework.id));
        }
    }

    #[test]
    fn test_every_control_set_name_resolves() {
        for (_, set_name) in &CONTROL_SET_NAMES {
            assert!(
                controls::controls_for_framework(set_name).is_some(),
                "no control set for {set_name}"
            );
        }
    }

    #[test]
    fn test_unknown_id_is_none() {
        assert!(control_set_name("not_a_real_framework").is_none());
        assert!(framework_by_id("not_a_real_framework").is_none());
    }
}
