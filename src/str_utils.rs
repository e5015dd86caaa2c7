// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/// True when `haystack` contains any of `needles` as a substring.
/// Matching is case-sensitive.
#[inline]
pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Case-insensitive variant of [`contains_any`].
#[inline]
pub fn contains_any_ignore_case(haystack: &str, needles: &[&str]) -> bool {
    let lower = haystack.to_lowercase();
    needles
        .iter()
        .any(|needle| lower.contains(&needle.to_lowercase()))
}

/// Capitalize the first letter of every alphabetic run and lowercase the
/// rest. Non-alphabetic characters (spaces, digits, punctuation) reset the
/// run, so "iso 27001 enterprise" becomes "Iso 27001 Enterprise".
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_any_case_sensitive() {
        assert!(contains_any("Patch Management", &["Patch", "Firewall"]));
        assert!(!contains_any("patch management", &["Patch"]));
        assert!(!contains_any("Patch Management", &[]));
    }

    #[test]
    fn test_contains_any_ignore_case() {
        assert!(contains_any_ignore_case("MFA (Multi-Factor Authentication)", &["mfa"]));
        assert!(contains_any_ignore_case("siem/soc operations", &["SIEM"]));
        assert!(!contains_any_ignore_case("Asset Inventory", &["SIEM", "Firewall"]));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("nist csf"), "Nist Csf");
        assert_eq!(title_case("iso 27001 enterprise"), "Iso 27001 Enterprise");
        assert_eq!(title_case("PCI DSS"), "Pci Dss");
        assert_eq!(title_case(""), "");
    }
}
