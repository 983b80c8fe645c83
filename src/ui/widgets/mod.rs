// src/ui/widgets/mod.rs

pub mod education;      // Tips and example URLs on the Learn page.
pub mod footer;         // Key hints and copyright line.
pub mod header;         // Brand and page tabs.
pub mod hero;           // Banner above the scanner.
pub mod input;          // The URL input field.
pub mod log_view;       // Tail of the log file.
pub mod notification;   // Transient messages drawn over the UI.
pub mod report;         // Verdict, threats and domain details.
pub mod summary;        // Score gauge.
