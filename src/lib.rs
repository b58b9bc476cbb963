//! # catalog-sync
//!
//! Fetches a product catalog from a remote endpoint, persists it locally as
//! a JSON document, counts the records, and validates that each record's
//! long-text description stays within a length threshold.
//!
//! The pipeline is deliberately a single linear flow — one HTTP GET, one
//! stream-to-file copy, and two passes over the persisted document:
//!
//! 1. **Fetch** — GET the configured endpoint, streaming the body
//! 2. **Persist** — copy the body byte-for-byte to the output file
//! 3. **Count** — re-parse the file and count the array elements
//! 4. **Validate** — re-parse again and report over-length descriptions
//!
//! ## Quick Start
//!
//! ```no_run
//! use catalog_sync::{CatalogSync, Config, Environment};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config {
//!         environment: Environment::Stage,
//!         ..Default::default()
//!     };
//!
//!     let summary = CatalogSync::new(config)?.run().await?;
//!
//!     for record in &summary.report.over_length {
//!         println!("{}", record.report_line());
//!     }
//!     println!("over-length records: {}", summary.report.over_length_count());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Catalog document parsing and record counting
pub mod catalog;
/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// Catalog fetching and persistence
pub mod fetcher;
/// Pipeline orchestration
pub mod pipeline;
/// Long-text length validation
pub mod validator;

// Re-export commonly used types
pub use config::{Config, Environment};
pub use error::{Error, Result};
pub use pipeline::{CatalogSync, RunSummary};
pub use validator::{OverLengthRecord, ValidationReport};
