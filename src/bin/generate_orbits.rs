//! Writes the precomputed orbit tracks from the objects document.
//! See the lib.rs file for the actual functionality.

use chrono::Utc;
use solar_data_prep::config::PipelineConfig;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Use RUST_LOG environment variable to control log levels (e.g., RUST_LOG=info)
    env_logger::init();

    let config = PipelineConfig::default();
    match solar_data_prep::generate_orbits(&config, Utc::now()).await {
        Ok(points) => {
            let samples: usize = points.tracks.iter().map(|track| track.points.len()).sum();
            println!(
                "Wrote {} points for {} bodies to {}",
                samples,
                points.tracks.len(),
                config.orbit_points_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to generate orbits: {}", e);
            ExitCode::FAILURE
        }
    }
}
