//! Fetches encyclopedia summaries and photo credits for every supported body.
//! See the lib.rs file for the actual functionality.

use solar_data_prep::config::PipelineConfig;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let config = PipelineConfig::default();
    match solar_data_prep::fetch_wiki(&config).await {
        Ok(document) => {
            println!(
                "Wrote {} summaries to {}",
                document.len(),
                config.wiki_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to fetch summaries: {}", e);
            ExitCode::FAILURE
        }
    }
}
