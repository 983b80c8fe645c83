//! PhishGuard: a demo phishing-URL scanner with a terminal front end.
//!
//! The verdict logic lives in [`core`]; [`app`] and [`ui`] drive the
//! interactive screen.

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod events;
pub mod logging;
pub mod ui;
