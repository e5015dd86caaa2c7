// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Security control catalog and per-framework control sets. Control identity
//! is the exact display name; the global catalog and the union of the
//! per-framework sets overlap only partially, and callers must not assume
//! they are equal.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Full control catalog across all frameworks, display/reference only
static ALL_CONTROLS: [&str; 97] = [
    // NIST CSF
    "Asset Inventory",
    "Network Firewall",
    "IDS/IPS (Intrusion Detection/Prevention System)",
    "MFA (Multi-Factor Authentication)",
    "RBAC (Role-Based Access Control)",
    "Patch Management",
    "Security Awareness Training",
    "SIEM (Security Information and Event Management)",
    "Encryption",
    "Backup & Recovery",
    "Incident Response Plan",
    "Vulnerability Scanning",
    "Penetration Testing",
    "Configuration Management",
    "Risk Register",
    // ISO/IEC 27001/27005
    "Information Classification",
    "Access Control Policy",
    "Authentication & Authorization",
    "Physical and Environmental Security",
    "Secure Backup Procedures",
    "Logging & Monitoring",
    "Supplier Risk Management",
    "Secure Network Design",
    "Data Protection & Encryption",
    "Security Incident Handling",
    "Business Continuity Planning",
    "Secure Disposal of Assets",
    "Mobile Device Controls",
    "Internal Audit",
    // COBIT 2019
    "IT Governance Structure",
    "Strategic Risk Management",
    "Compliance Management",
    "Change Control",
    "Security Logging & Audit Trails",
    "Identity & Access Management",
    "Incident & Problem Management",
    "IT Asset Management",
    "Threat Monitoring",
    "Policy & Procedure Management",
    "Resource Optimization",
    "Performance Metrics",
    "Third-Party Risk Management",
    // RBI Cybersecurity
    "CISO Appointment & Governance",
    "Network Segmentation",
    "ATM & SWIFT Isolation",
    "User Access Reviews",
    "VA/PT Testing",
    "Email Security Controls",
    "Incident Reporting to RBI",
    "SIEM/SOC Operations",
    "DLP (Data Loss Prevention)",
    "Application Whitelisting",
    "Malware Detection",
    "Backup & Recovery Testing",
    "Board-Level Cyber Reporting",
    // PCI-DSS v4.0
    "Network Firewall Configuration",
    "CHD Encryption (Cardholder Data)",
    "Tokenization",
    "Access Logging & Monitoring",
    "Anti-Malware Protection",
    "Segmentation Testing",
    "Physical Security",
    "Secure Configuration Standards",
    "Key Management",
    "Audit Log Retention",
    // HIPAA
    "Access Control",
    "Audit Control",
    "Integrity Checks",
    "Data Encryption",
    "Physical Facility Access",
    "Device Security Policies",
    "User Activity Monitoring",
    "Contingency Planning",
    "Breach Notification",
    "Workforce Security Policies",
    // ISO 27001 (Enterprise/SaaS)
    "Cloud Access Control",
    "DevOps Security Controls",
    "Secure SDLC Practices",
    "API Gateway Security",
    "Secure API Authentication",
    "Vulnerability Management",
    "Configuration Baselines",
    "Container Security",
    "Key Rotation Policies",
    "Secure Remote Access",
    "Data Residency Compliance",
    "Service Availability Monitoring",
    // CERT-IN
    "Public Sector Threat Reporting",
    "Log Retention",
    "EDR (Endpoint Detection & Response)",
    "DNS Security Controls",
    "Zero Trust Implementation",
    "National Incident Alert Handling",
    "System Hardening Benchmarks",
    "Public Cloud Security Baselines",
    "Cyber Drill Participation",
    "Web Application Security Review",
];

static NIST_CSF_CONTROLS: [&str; 15] = [
    "Asset Inventory",
    "Network Firewall",
    "IDS/IPS (Intrusion Detection/Prevention System)",
    "MFA (Multi-Factor Authentication)",
    "RBAC (Role-Based Access Control)",
    "Patch Management",
    "Security Awareness Training",
    "SIEM (Security Information and Event Management)",
    "Encryption",
    "Backup & Recovery",
    "Incident Response Plan",
    "Vulnerability Scanning",
    "Penetration Testing",
    "Configuration Management",
    "Risk Register",
];

static ISO_27001_CONTROLS: [&str; 15] = [
    "Information Classification",
    "Access Control Policy",
    "Authentication & Authorization",
    "Physical and Environmental Security",
    "Secure Backup Procedures",
    "Logging & Monitoring",
    "Supplier Risk Management",
    "Secure Network Design",
    "Data Protection & Encryption",
    "Patch Management",
    "Security Incident Handling",
    "Business Continuity Planning",
    "Secure Disposal of Assets",
    "Mobile Device Controls",
    "Internal Audit",
];

static COBIT_2019_CONTROLS: [&str; 15] = [
    "IT Governance Structure",
    "Strategic Risk Management",
    "Compliance Management",
    "Change Control",
    "Security Logging & Audit Trails",
    "Identity & Access Management",
    "Business Process Controls",
    "IT Performance Management",
    "Resource Optimization",
    "Information Architecture",
    "Service Level Management",
    "Vendor Management",
    "Data Quality Management",
    "IT Project Management",
    "Benefits Realization",
];

static RBI_CYBERSECURITY_CONTROLS: [&str; 15] = [
    "Board Oversight",
    "Cyber Security Policy",
    "Organizational Structure",
    "Baseline Security Requirements",
    "Advanced Persistent Threat Detection",
    "Customer Education & Awareness",
    "Incident Response & Recovery",
    "Cyber Crisis Management Plan",
    "Inter-Bank Connectivity Security",
    "Mobile Payment Security",
    "Outsourcing Security",
    "Cyber Forensics & Evidence Management",
    "Business Continuity Planning",
    "Information Sharing & Intelligence",
    "Testing of Cyber Resilience",
];

static PCI_DSS_CONTROLS: [&str; 12] = [
    "Install & Maintain Network Security Controls",
    "Apply Secure Configurations",
    "Protect Stored Account Data",
    "Protect Cardholder Data with Strong Cryptography",
    "Protect All Systems & Networks from Malicious Software",
    "Develop & Maintain Secure Systems & Software",
    "Restrict Access by Business Need-to-Know",
    "Identify Users & Authenticate Access",
    "Restrict Physical Access to Cardholder Data",
    "Log & Monitor All Access",
    "Test Security of Systems & Networks Regularly",
    "Support Information Security with Organizational Policies",
];

static HIPAA_CONTROLS: [&str; 16] = [
    "Assigned Security Responsibility",
    "Workforce Training & Access Management",
    "Information Access Management",
    "Security Awareness & Training",
    "Security Incident Procedures",
    "Contingency Plan",
    "Evaluation",
    "Business Associate Contracts",
    "Facility Access Controls",
    "Workstation Use",
    "Device & Media Controls",
    "Access Control",
    "Audit Controls",
    "Integrity",
    "Person or Entity Authentication",
    "Transmission Security",
];

static ISO_27001_ENTERPRISE_CONTROLS: [&str; 15] = [
    "Cloud Security Architecture",
    "Multi-Tenant Data Isolation",
    "API Security Controls",
    "Container Security",
    "DevSecOps Integration",
    "Automated Security Testing",
    "Scalable Identity Management",
    "Service Mesh Security",
    "Cloud Access Security Broker (CASB)",
    "Zero Trust Network Architecture",
    "Microservices Security",
    "Data Loss Prevention (DLP)",
    "Cloud Workload Protection",
    "Security Orchestration & Response",
    "Compliance Automation",
];

static CERT_IN_CONTROLS: [&str; 15] = [
    "Incident Reporting",
    "Vulnerability Disclosure",
    "Cyber Threat Intelligence",
    "Security Advisory Compliance",
    "Critical Infrastructure Protection",
    "Cyber Security Framework Implementation",
    "Sectoral CERT Coordination",
    "Malware Analysis & Response",
    "Phishing & Social Engineering Defense",
    "Mobile & IoT Security",
    "Cloud Security Guidelines",
    "Cyber Forensics",
    "Capacity Building Programs",
    "International Cooperation",
    "Research & Development",
];

static CONTROLS_BY_FRAMEWORK: Lazy<HashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| {
        let mut map: HashMap<&'static str, &'static [&'static str]> = HashMap::new();
        map.insert("NIST CSF", &NIST_CSF_CONTROLS);
        map.insert("ISO/IEC 27001/27005", &ISO_27001_CONTROLS);
        map.insert("COBIT 2019", &COBIT_2019_CONTROLS);
        map.insert("RBI Cybersecurity", &RBI_CYBERSECURITY_CONTROLS);
        map.insert("PCI-DSS v4.0", &PCI_DSS_CONTROLS);
        map.insert("HIPAA", &HIPAA_CONTROLS);
        map.insert("ISO 27001 (Enterprise/SaaS)", &ISO_27001_ENTERPRISE_CONTROLS);
        map.insert("CERT-IN", &CERT_IN_CONTROLS);
        map
    });

/// Reverse mapping: control name -> frameworks (by control-set name) that
/// require it
static FRAMEWORKS_BY_CONTROL: Lazy<HashMap<&'static str, Vec<&'static str>>> = Lazy::new(|| {
    let mut map: HashMap<&'static str, Vec<&'static str>> = HashMap::new();
    for (framework, controls) in CONTROLS_BY_FRAMEWORK.iter() {
        for control in controls.iter() {
            map.entry(control).or_default().push(framework);
        }
    }
    map
});

/// The complete list of security controls across all frameworks
pub fn all_controls() -> &'static [&'static str] {
    &ALL_CONTROLS
}

/// Control sets keyed by control-set name (not framework id)
pub fn controls_by_framework() -> &'static HashMap<&'static str, &'static [&'static str]> {
    &CONTROLS_BY_FRAMEWORK
}

pub fn controls_for_framework(set_name: &str) -> Option<&'static [&'static str]> {
    CONTROLS_BY_FRAMEWORK.get(set_name).copied()
}

pub fn frameworks_by_control() -> &'static HashMap<&'static str, Vec<&'static str>> {
    &FRAMEWORKS_BY_CONTROL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size() {
        assert_eq!(all_controls().len(), 97);
        assert_eq!(controls_by_framework().len(), 8);
    }

    #[test]
    fn test_control_sets_nonempty() {
        for (framework, controls) in controls_by_framework() {
            assert!(!controls.is_empty(), "{framework} has no controls");
        }
    }

    #[test]
    fn test_shared_control_appears_in_both_frameworks() {
        // Patch Management belongs to two frameworks' applicable sets
        let frameworks = frameworks_by_control()
            .get("Patch Management")
            .expect("Patch Management is mapped");
        assert_eq!(frameworks.len(), 2);
        assert!(frameworks.contains(&"NIST CSF"));
        assert!(frameworks.contains(&"ISO/IEC 27001/27005"));
    }

    #[test]
    fn test_catalog_is_not_union_of_framework_sets() {
        // The per-framework sets contain names absent from the global
        // catalog (and vice versa); consumers must tolerate the overlap
        // being partial.
        let nist = controls_for_framework("NIST CSF").unwrap();
        assert!(nist.iter().all(|c| all_controls().contains(c)));

        let cobit = controls_for_framework("COBIT 2019").unwrap();
        assert!(cobit.contains(&"Business Process Controls"));
        assert!(!all_controls().contains(&"Business Process Controls"));
    }

    #[test]
    fn test_unknown_set_name_is_none() {
        assert!(controls_for_framework("SOC 2").is_none());
    }
}
