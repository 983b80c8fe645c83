// src/core/mod.rs

/// Data structures shared by the scanner and the UI: `ScanResult`,
/// `RiskStatus`, `DomainDetails`, `Severity`.
pub mod models;

/// Input validation and the keyword/shortener heuristic.
pub mod classifier;

/// Rejection reasons for user input.
pub mod error;

/// The artificial scan delay as a cancellable task.
pub mod scanner;

/// JSON export of a finished scan.
pub mod export;

/// Fixed tables and educational text. Acts as the repository of everything
/// the scanner "knows".
pub mod knowledge_base;
