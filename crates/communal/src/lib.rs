//! Command-line front end for the municipal finance generator
//!
//! Everything here is I/O around `communal_core`: logging setup, profile
//! files, CSV export, text charts and the console insight report.

#![warn(clippy::all)]

pub mod charts;
pub mod export;
pub mod logging;
pub mod profile_io;
pub mod report;

#[cfg(test)]
mod tests;

pub use logging::init_logging;
