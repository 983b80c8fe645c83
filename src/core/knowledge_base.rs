//! Static, read-only data behind the scanner: the keyword and shortener
//! tables the classifier matches against, the fixed threat lists for each
//! verdict, and the educational material shown on the Learn page.
//!
//! Everything here is plain data so it can be edited without touching the
//! classification logic.

use crate::core::models::{RiskStatus, Severity};

/// Brand and account-action words that make a URL look like a lure.
pub static SUSPICIOUS_KEYWORDS: &[&str] = &[
    "paypal",
    "amazon",
    "google",
    "microsoft",
    "apple",
    "facebook",
    "login",
    "secure",
    "verify",
    "update",
    "suspended",
    "account",
];

/// Link-shortener hosts. Any URL containing one of these is dangerous.
pub static SHORTENERS: &[&str] = &["bit.ly", "tinyurl"];

/// A URL containing one of these is never flagged by keyword alone.
pub static TRUSTED_TLD_MARKERS: &[&str] = &[".com", ".org"];

pub static DANGEROUS_THREATS: &[&str] = &[
    "Phishing attempt detected",
    "Suspicious domain",
    "Known malicious IP",
];

pub static SUSPICIOUS_THREATS: &[&str] = &["Suspicious domain pattern", "Recent registration"];

// Placeholder host details. Nothing is looked up.
pub const PLACEHOLDER_IP: &str = "192.168.1.1";
pub const PLACEHOLDER_COUNTRY: &str = "United States";
pub const PLACEHOLDER_REGISTRAR: &str = "Example Registrar";
pub const PLACEHOLDER_CREATED: &str = "2023-01-15";

/// Returns the fixed threat list for a verdict.
pub fn threats_for(status: RiskStatus) -> &'static [&'static str] {
    match status {
        RiskStatus::Dangerous => DANGEROUS_THREATS,
        RiskStatus::Suspicious => SUSPICIOUS_THREATS,
        RiskStatus::Safe => &[],
    }
}

/// Human-readable explanation for one of the threat strings above.
pub struct ThreatDetail {
    /// The exact threat string placed in a `ScanResult`.
    pub threat: &'static str,
    pub severity: Severity,
    /// What the finding means for the person about to click the link.
    pub description: &'static str,
    /// What they should do instead.
    pub advice: &'static str,
}

static THREAT_DETAILS: &[ThreatDetail] = &[
    ThreatDetail {
        threat: "Phishing attempt detected",
        severity: Severity::Critical,
        description: "The address matches patterns commonly used by pages that imitate a trusted brand to collect passwords or payment details.",
        advice: "Do not enter any credentials. Reach the service by typing its official address yourself.",
    },
    ThreatDetail {
        threat: "Suspicious domain",
        severity: Severity::Critical,
        description: "The domain combines brand or account words with an unusual host, or hides its real destination behind a link shortener.",
        advice: "Expand shortened links with a preview service and compare the domain letter by letter with the official one.",
    },
    ThreatDetail {
        threat: "Known malicious IP",
        severity: Severity::Critical,
        description: "The host is reported as serving malicious content.",
        advice: "Close the page. If you already entered data, change the affected passwords immediately.",
    },
    ThreatDetail {
        threat: "Suspicious domain pattern",
        severity: Severity::Warning,
        description: "The address uses words such as 'login', 'verify' or a brand name on a domain that does not belong to that brand.",
        advice: "Verify the link through an official channel before opening it.",
    },
    ThreatDetail {
        threat: "Recent registration",
        severity: Severity::Warning,
        description: "Recently registered domains are frequently used for short-lived phishing campaigns.",
        advice: "Treat the site with caution until its owner can be confirmed.",
    },
];

/// Retrieves the detail for a threat string, if it is a known one.
pub fn threat_detail(threat: &str) -> Option<&'static ThreatDetail> {
    THREAT_DETAILS.iter().find(|d| d.threat == threat)
}

// --- Educational Content ---

pub struct SecurityTip {
    pub title: &'static str,
    pub description: &'static str,
}

pub static SECURITY_TIPS: &[SecurityTip] = &[
    SecurityTip {
        title: "Check the URL carefully",
        description: "Look for misspellings, unusual domains, or suspicious characters in the web address.",
    },
    SecurityTip {
        title: "Look for HTTPS",
        description: "Legitimate sites use HTTPS encryption. Check for the lock icon in your browser.",
    },
    SecurityTip {
        title: "Be wary of urgent requests",
        description: "Phishing sites often create false urgency to pressure you into quick action.",
    },
    SecurityTip {
        title: "Verify the sender",
        description: "Always verify emails and messages through official channels before clicking links.",
    },
];

/// A sample address shown on the Learn page together with the label it is
/// taught under.
///
/// The label is editorial. It is not guaranteed to match what the classifier
/// returns for the same address: `https://paypa1-secure.com/login` is taught
/// as dangerous but the keyword rule skips anything containing `.com`.
pub struct ExampleUrl {
    pub url: &'static str,
    pub label: RiskStatus,
    pub reason: &'static str,
}

pub static EXAMPLE_URLS: &[ExampleUrl] = &[
    ExampleUrl {
        url: "https://paypa1-secure.com/login",
        label: RiskStatus::Dangerous,
        reason: "Suspicious domain with character substitution (1 instead of l)",
    },
    ExampleUrl {
        url: "https://amazon-security-alert.net",
        label: RiskStatus::Dangerous,
        reason: "Fake Amazon domain with suspicious subdomain",
    },
    ExampleUrl {
        url: "http://update-account.microsoft-login.com",
        label: RiskStatus::Dangerous,
        reason: "No HTTPS and fake Microsoft domain",
    },
    ExampleUrl {
        url: "https://github.com/user/repository",
        label: RiskStatus::Safe,
        reason: "Legitimate GitHub URL with proper domain",
    },
];

pub static PROTECTION_CHECKLIST: &[&str] = &[
    "Always verify sender identity",
    "Check URLs before clicking",
    "Use our scanner tool",
];

pub const STAY_PROTECTED: &str = "Remember: When in doubt, don't click. Always verify suspicious links through official channels and use our scanner to check URLs before visiting them.";

// --- Banner ---

pub const HERO_TITLE: &str = "Protect Yourself from Phishing Attacks";
pub const HERO_TAGLINE: &str = "Advanced AI-powered detection to identify malicious websites and protect your personal information from cybercriminals.";

/// Marketing figures shown under the banner as (value, label).
pub static HERO_STATS: &[(&str, &str)] = &[
    ("99.9%", "Detection Accuracy"),
    ("1M+", "URLs Scanned Daily"),
    ("50K+", "Threats Blocked"),
];

pub const COPYRIGHT: &str = "© 2024 PhishGuard. All rights reserved. | Privacy Policy | Terms of Service";
