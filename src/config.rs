//! Locations and endpoint used by the pipeline programs.

use std::path::PathBuf;

/// Base URL of the Wikipedia REST page summary endpoint
pub const DEFAULT_SUMMARY_ENDPOINT: &str = "https://en.wikipedia.org/api/rest_v1/page/summary";

/// Configuration shared by the normalizer, the fetcher and the orbit generator
///
/// The binaries always run with [`PipelineConfig::default`], which matches the
/// viewer's source layout. Tests and other callers can point any field
/// elsewhere.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Raw celestial body dataset
    pub raw_data_path: PathBuf,
    /// Normalized bodies output
    pub objects_path: PathBuf,
    /// Encyclopedia summaries output
    pub wiki_path: PathBuf,
    /// Precomputed orbit tracks output
    pub orbit_points_path: PathBuf,
    /// Summary endpoint, without a trailing slash
    pub summary_endpoint: String,
    /// User-Agent sent with every summary request
    pub user_agent: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            raw_data_path: PathBuf::from("src/data/raw_data.json"),
            objects_path: PathBuf::from("src/data/objects.json"),
            wiki_path: PathBuf::from("src/data/wiki.json"),
            orbit_points_path: PathBuf::from("public/data/orbit_points.txt"),
            summary_endpoint: DEFAULT_SUMMARY_ENDPOINT.to_string(),
            user_agent: format!(
                "{}/{} (solar system viewer data preparation)",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            ),
        }
    }
}
