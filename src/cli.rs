// src/cli.rs

use color_eyre::eyre::Result;
use std::io::Write;

use crate::config::Config;
use crate::core::error::ScanError;
use crate::core::models::{RiskStatus, ScanResult};
use crate::core::scanner;

/// Process exit code for a headless scan: 0 safe, 1 suspicious or dangerous,
/// 2 rejected input.
pub fn exit_code(outcome: &Result<ScanResult, ScanError>) -> i32 {
    match outcome {
        Ok(result) if result.status == RiskStatus::Safe => 0,
        Ok(_) => 1,
        Err(_) => 2,
    }
}

pub fn format_summary(result: &ScanResult) -> String {
    let mut out = format!(
        "URL:       {}\nStatus:    {}\nScore:     {}/100\nDomain:    {}\nIP:        {}\nCountry:   {}\nRegistrar: {}\nCreated:   {}\n",
        result.url,
        result.status.as_ref().to_uppercase(),
        result.score,
        result.details.domain,
        result.details.ip,
        result.details.country,
        result.details.registrar,
        result.details.created,
    );
    for threat in &result.threats {
        out.push_str(&format!("  ! {threat}\n"));
    }
    out
}

/// Runs one scan for `url` without the UI, writing the report to `out` and
/// rejections to `err`. Returns the exit code.
pub async fn run_headless(
    url: &str,
    config: &Config,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<i32> {
    let outcome = scanner::simulate_scan(url, config.scan_delay()).await;
    match &outcome {
        Ok(result) if config.json => writeln!(out, "{}", serde_json::to_string_pretty(result)?)?,
        Ok(result) => write!(out, "{}", format_summary(result))?,
        Err(e) => writeln!(err, "Error: {e}")?,
    }
    Ok(exit_code(&outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(url: &str, json: bool) -> Config {
        let mut args = vec!["phishguard", "--check", url, "--delay-ms", "0"];
        if json {
            args.push("--json");
        }
        Config::try_parse_from(args).unwrap()
    }

    async fn check(url: &str, json: bool) -> (i32, String, String) {
        let cfg = config(url, json);
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let code = run_headless(url, &cfg, &mut out, &mut err).await.unwrap();
        (code, String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[tokio::test]
    async fn empty_input_exits_with_two() {
        let (code, out, err) = check("", false).await;
        assert_eq!(code, 2);
        assert!(out.is_empty());
        assert_eq!(err.trim(), "Error: Please enter a URL to scan");
    }

    #[tokio::test]
    async fn invalid_input_exits_with_two() {
        let (code, _, err) = check("not a url", false).await;
        assert_eq!(code, 2);
        assert!(err.contains("Please enter a valid URL"));
    }

    #[tokio::test]
    async fn shortener_exits_with_one() {
        let (code, out, _) = check("https://bit.ly/x", false).await;
        assert_eq!(code, 1);
        assert!(out.contains("Status:    DANGEROUS"));
        assert!(out.contains("  ! Phishing attempt detected"));
    }

    #[tokio::test]
    async fn safe_url_exits_with_zero() {
        let (code, out, _) = check("https://github.com/user/repository", false).await;
        assert_eq!(code, 0);
        assert!(out.contains("Score:     95/100"));
        assert!(out.contains("Domain:    github.com"));
    }

    #[tokio::test]
    async fn json_output_parses_back() {
        let (code, out, _) = check("https://bit.ly/x", true).await;
        assert_eq!(code, 1);
        let parsed: ScanResult = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.score, 15);
    }

    #[test]
    fn suspicious_maps_to_one() {
        let mut result = crate::core::classifier::scan_url("https://github.com").unwrap();
        result.status = RiskStatus::Suspicious;
        assert_eq!(exit_code(&Ok(result)), 1);
    }
}
