// src/core/models.rs

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter};

// --- Core Data Models ---

// Severity of a single threat entry, used to colour it in the report.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display)]
pub enum Severity {
    Critical,
    Warning,
}

/// The verdict assigned to a scanned URL.
///
/// Serialized in lowercase so exported reports read `"safe"`, `"suspicious"`
/// or `"dangerous"`.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RiskStatus {
    Safe,
    Suspicious,
    Dangerous,
}

impl RiskStatus {
    /// The fixed security score tied to each verdict.
    pub fn score(self) -> u8 {
        match self {
            RiskStatus::Dangerous => 15,
            RiskStatus::Suspicious => 45,
            RiskStatus::Safe => 95,
        }
    }

    pub fn is_safe(self) -> bool {
        matches!(self, RiskStatus::Safe)
    }
}

// Host information attached to a result. Only `domain` comes from the URL,
// the rest are placeholders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DomainDetails {
    pub domain: String,
    pub ip: String,
    pub country: String,
    pub registrar: String,
    pub created: String,
}

// --- Main Report ---

/// The record produced by one simulated scan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanResult {
    /// The input exactly as the user typed it.
    pub url: String,
    pub status: RiskStatus,
    pub score: u8,
    pub threats: Vec<String>,
    pub details: DomainDetails,
}

impl ScanResult {
    pub fn has_threats(&self) -> bool {
        !self.threats.is_empty()
    }
}
