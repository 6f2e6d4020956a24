//! Writes the normalized objects document from the raw celestial body dataset.
//! See the lib.rs file for the actual functionality.

use solar_data_prep::config::PipelineConfig;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Use RUST_LOG environment variable to control log levels (e.g., RUST_LOG=info)
    env_logger::init();

    let config = PipelineConfig::default();
    match solar_data_prep::generate_objects(&config).await {
        Ok(bodies) => {
            println!(
                "Wrote {} bodies to {}",
                bodies.len(),
                config.objects_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to generate objects: {}", e);
            ExitCode::FAILURE
        }
    }
}
