// src/core/classifier.rs

use tracing::{debug, info};
use url::Url;

use crate::core::error::ScanError;
use crate::core::knowledge_base::{
    self, PLACEHOLDER_COUNTRY, PLACEHOLDER_CREATED, PLACEHOLDER_IP, PLACEHOLDER_REGISTRAR,
    SHORTENERS, SUSPICIOUS_KEYWORDS, TRUSTED_TLD_MARKERS,
};
use crate::core::models::{DomainDetails, RiskStatus, ScanResult};

/// Checks that the input is non-empty and parses as an absolute URL.
///
/// The input is used as-is: no trimming and no scheme is prepended, so
/// `example.com` is rejected.
pub fn validate(input: &str) -> Result<Url, ScanError> {
    if input.is_empty() {
        return Err(ScanError::EmptyInput);
    }
    Url::parse(input).map_err(|source| {
        debug!(input, error = %source, "Rejected input that is not a URL.");
        ScanError::InvalidUrl { input: input.to_string(), source }
    })
}

/// Keyword hit on the lowercased input, skipped entirely when the raw input
/// mentions `.com` or `.org`.
fn is_suspicious(input: &str) -> bool {
    let lowered = input.to_lowercase();
    let trusted = TRUSTED_TLD_MARKERS.iter().any(|marker| input.contains(marker));
    !trusted && SUSPICIOUS_KEYWORDS.iter().any(|keyword| lowered.contains(keyword))
}

fn uses_shortener(input: &str) -> bool {
    SHORTENERS.iter().any(|shortener| input.contains(shortener))
}

/// Assigns a verdict to an already validated URL.
///
/// `input` is the original string, which is what the rules match against and
/// what ends up in `ScanResult::url`. `parsed` only supplies the hostname.
///
/// A keyword hit is folded into the dangerous check, so `Suspicious` is never
/// produced with the current tables.
pub fn classify(input: &str, parsed: &Url) -> ScanResult {
    let suspicious = is_suspicious(input);
    let dangerous = uses_shortener(input) || suspicious;

    let status = if dangerous {
        RiskStatus::Dangerous
    } else if suspicious {
        RiskStatus::Suspicious
    } else {
        RiskStatus::Safe
    };

    let threats = knowledge_base::threats_for(status)
        .iter()
        .map(|t| t.to_string())
        .collect();

    ScanResult {
        url: input.to_string(),
        status,
        score: status.score(),
        threats,
        details: DomainDetails {
            domain: parsed.host_str().unwrap_or_default().to_string(),
            ip: PLACEHOLDER_IP.to_string(),
            country: PLACEHOLDER_COUNTRY.to_string(),
            registrar: PLACEHOLDER_REGISTRAR.to_string(),
            created: PLACEHOLDER_CREATED.to_string(),
        },
    }
}

/// Validates then classifies in one call.
pub fn scan_url(input: &str) -> Result<ScanResult, ScanError> {
    let parsed = validate(input)?;
    let result = classify(input, &parsed);
    info!(url = input, status = %result.status, score = result.score, "URL classified.");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(input: &str) -> ScanResult {
        scan_url(input).expect("input should be a valid URL")
    }

    #[test]
    fn shorteners_are_dangerous() {
        for input in [
            "https://bit.ly/3xYz",
            "http://tinyurl.com/abc",
            "https://example.com/?next=bit.ly",
        ] {
            let result = scan(input);
            assert_eq!(result.status, RiskStatus::Dangerous, "{input}");
            assert_eq!(result.score, 15);
            assert_eq!(result.threats.len(), 3);
        }
    }

    #[test]
    fn keyword_without_trusted_tld_is_flagged() {
        for input in [
            "https://paypal-verify.net",
            "http://my-login.io/start",
            "https://AMAZON-deals.xyz",
        ] {
            let result = scan(input);
            assert_ne!(result.status, RiskStatus::Safe, "{input}");
            assert!(result.score == 15 || result.score == 45);
        }
    }

    #[test]
    fn keyword_with_dot_com_is_safe() {
        let result = scan("https://paypa1-secure.com/login");
        assert_eq!(result.status, RiskStatus::Safe);
        assert_eq!(result.score, 95);
        assert!(result.threats.is_empty());
    }

    #[test]
    fn trusted_marker_check_is_case_sensitive() {
        // ".COM" is not ".com", so the keyword still counts.
        let result = scan("https://PAYPAL.COM");
        assert_eq!(result.status, RiskStatus::Dangerous);
    }

    #[test]
    fn org_marker_anywhere_in_the_url_counts() {
        let result = scan("https://login.example.net/?ref=wiki.org");
        assert_eq!(result.status, RiskStatus::Safe);
    }

    #[test]
    fn github_is_safe() {
        let result = scan("https://github.com/user/repository");
        assert_eq!(result.status, RiskStatus::Safe);
        assert_eq!(result.score, 95);
        assert!(result.threats.is_empty());
        assert_eq!(result.details.domain, "github.com");
    }

    #[test]
    fn details_use_placeholders() {
        let result = scan("https://example.net/path");
        assert_eq!(result.details.ip, "192.168.1.1");
        assert_eq!(result.details.country, "United States");
        assert_eq!(result.details.registrar, "Example Registrar");
        assert_eq!(result.details.created, "2023-01-15");
    }

    #[test]
    fn url_without_host_has_empty_domain() {
        let result = scan("mailto:someone@example.net");
        assert_eq!(result.details.domain, "");
        assert_eq!(result.url, "mailto:someone@example.net");
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(scan_url(""), Err(ScanError::EmptyInput)));
    }

    #[test]
    fn non_url_is_rejected() {
        for input in ["not a url", "example.com", "https://"] {
            assert!(
                matches!(scan_url(input), Err(ScanError::InvalidUrl { .. })),
                "{input}"
            );
        }
    }

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(ScanError::EmptyInput.to_string(), "Please enter a URL to scan");
        let err = scan_url("not a url").unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid URL");
    }

    #[test]
    fn classification_is_repeatable() {
        let input = "https://secure-update.net/account";
        assert_eq!(scan(input), scan(input));
    }

    #[test]
    fn suspicious_branch_is_never_taken() {
        // Every keyword hit is also a dangerous hit.
        for keyword in SUSPICIOUS_KEYWORDS {
            let input = format!("https://{keyword}.example.net");
            assert_eq!(scan(&input).status, RiskStatus::Dangerous, "{input}");
        }
    }
}
