//! Data preparation for the solar system viewer.
//!
//! This library produces the static documents the viewer loads at startup.
//! [`generate_objects`] filters and annotates the raw celestial body dataset
//! into `objects.json`; [`fetch_wiki`] fetches an encyclopedia summary for each
//! of those bodies and writes them, with photo attribution, to `wiki.json`.
//! [`generate_orbits`] samples a year-aligned orbit track for each planet and
//! Pluto from `objects.json` into `orbit_points.txt`. Each is run on its own
//! by the `generate-objects`, `fetch-wiki` and `generate-orbits` binaries.
//!
//! # Logging
//!
//! This library uses the [`log`] crate for logging. The binaries initialize
//! [`env_logger`]; set the RUST_LOG environment variable to control log levels
//! (e.g., `RUST_LOG=debug`).
//!
//! ```
//! // Initialize the logger in your application
//! env_logger::init();
//! ```
//!
//! Skipped summary requests are logged as warnings.

/// Module containing data model structures
pub mod models;

/// Module holding the static body tables
pub mod catalog;

/// Module with file locations and the summary endpoint
pub mod config;

/// Module normalizing the raw dataset
pub mod normalize;

/// Module handling summary URL generation
pub mod summary_url;

/// Module for API calls to fetch page summaries
pub mod wiki;

/// Module for enriching summaries with photo credits
pub mod enrich;

/// Module computing approximate planetary positions
pub mod ephemeris;

/// Module sampling and rendering orbit tracks
pub mod orbits;

/// Module containing utility functions for file handling
pub mod utils;

use chrono::{DateTime, Utc};
use config::PipelineConfig;
use log::info;

/// Loads and normalizes the raw dataset named by the configuration
///
/// This is the shared first step of both programs.
pub async fn load_bodies(
    config: &PipelineConfig,
) -> Result<models::NormalizedBodies, Box<dyn std::error::Error>> {
    let raw = utils::read_document(&config.raw_data_path).await?;
    let dataset = normalize::parse_raw_dataset(&raw)?;
    Ok(normalize::normalize_bodies(dataset)?)
}

/// Main entry point for generating the objects document
///
/// This function:
/// 1. Reads and parses the raw dataset
/// 2. Normalizes the allow-listed bodies
/// 3. Writes the result to the objects path
///
/// # Arguments
///
/// * `config` - File locations to read from and write to
///
/// # Returns
///
/// The normalized bodies that were written
pub async fn generate_objects(
    config: &PipelineConfig,
) -> Result<models::NormalizedBodies, Box<dyn std::error::Error>> {
    let bodies = load_bodies(config).await?;
    utils::write_json_document(&config.objects_path, &bodies).await?;
    info!("Objects document complete");
    Ok(bodies)
}

/// Main entry point for generating the wiki document
///
/// This function:
/// 1. Reads and normalizes the raw dataset
/// 2. Requests one summary per body, in allow-list order
/// 3. Attaches photo credits to each fetched summary
/// 4. Writes the result to the wiki path
///
/// # Arguments
///
/// * `config` - File locations, summary endpoint and user agent
///
/// # Returns
///
/// The wiki document that was written
pub async fn fetch_wiki(
    config: &PipelineConfig,
) -> Result<models::WikiDocument, Box<dyn std::error::Error>> {
    let bodies = load_bodies(config).await?;
    let client = wiki::build_client(&config.user_agent)?;
    let document = wiki::fetch_wiki_document(&client, &config.summary_endpoint, &bodies).await?;
    utils::write_json_document(&config.wiki_path, &document).await?;
    info!("Wiki document complete");
    Ok(document)
}

/// Main entry point for generating the orbit tracks
///
/// Reads the objects document written by [`generate_objects`], samples each
/// planet's track from the turn of `generated_at`'s year and writes the text
/// document to the orbit points path.
///
/// # Arguments
///
/// * `config` - File locations to read from and write to
/// * `generated_at` - Generation time stamped on the document
///
/// # Returns
///
/// The tracks that were written
pub async fn generate_orbits(
    config: &PipelineConfig,
    generated_at: DateTime<Utc>,
) -> Result<orbits::OrbitPoints, Box<dyn std::error::Error>> {
    let text = utils::read_document(&config.objects_path).await?;
    let objects = orbits::parse_objects(&text)?;
    let points = orbits::compute_orbit_points(&objects, generated_at)?;
    utils::write_document(&config.orbit_points_path, points.render().as_bytes()).await?;
    info!("Orbit points document complete");
    Ok(points)
}
