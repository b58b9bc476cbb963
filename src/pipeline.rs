//! Pipeline orchestration: fetch → persist → count → validate
//!
//! Each stage runs exactly once per invocation and fully consumes its input
//! before the next begins; there is no overlap and no shared state between
//! stages beyond the output file itself.

use crate::catalog;
use crate::config::Config;
use crate::error::Result;
use crate::fetcher;
use crate::validator::{self, ValidationReport};
use tracing::info;

/// Outcome of one pipeline run
#[derive(Clone, Debug)]
pub struct RunSummary {
    /// Whether the fetch/persist/count stages ran (false when the existing
    /// output file was reused)
    pub fetched: bool,
    /// Bytes written to the output file, when a fetch was performed
    pub bytes_written: Option<u64>,
    /// Record count from the persisted document, when a fetch was performed
    pub record_count: Option<usize>,
    /// The validation report, always produced
    pub report: ValidationReport,
}

/// Runs the catalog sync pipeline
///
/// Holds the validated configuration and the HTTP client; one instance can
/// drive any number of runs, though each run is fully sequential.
pub struct CatalogSync {
    config: Config,
    client: reqwest::Client,
}

impl CatalogSync {
    /// Create a pipeline runner from a configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation or the HTTP
    /// client cannot be constructed.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let client = fetcher::build_client(config.request_timeout())?;
        Ok(Self { config, client })
    }

    /// The configuration this runner was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Execute one full pipeline run
    ///
    /// With `reuse_existing_file` enabled and the output file present, the
    /// fetch, persist and count stages are skipped and validation runs
    /// directly against the existing file.
    pub async fn run(&self) -> Result<RunSummary> {
        let output_path = &self.config.output_path;

        if self.config.reuse_existing_file && output_path.exists() {
            info!(path = %output_path.display(), "output file exists, skipping fetch");
            let report = validator::validate_file(output_path, &self.config).await?;
            return Ok(RunSummary {
                fetched: false,
                bytes_written: None,
                record_count: None,
                report,
            });
        }

        let url = self.config.endpoint_url()?;
        info!(url = %url, "calling catalog endpoint");
        let response = fetcher::fetch_catalog(&self.client, &url).await?;

        info!(path = %output_path.display(), "fetch succeeded, writing file");
        let bytes_written = fetcher::persist_response(response, output_path).await?;

        info!(bytes = bytes_written, "file written, counting records");
        let record_count = catalog::count_records_in_file(output_path).await?;
        info!(record_count, "record count complete");

        let report = validator::validate_file(output_path, &self.config).await?;
        info!(
            scanned = report.scanned,
            over_length = report.over_length_count(),
            "validation complete"
        );

        Ok(RunSummary {
            fetched: true,
            bytes_written: Some(bytes_written),
            record_count: Some(record_count),
            report,
        })
    }
}
