//! ABOUTME: Utility functions for reading the raw dataset and writing the generated documents
//! ABOUTME: JSON output is pretty printed with 4-space indentation; every file is written in a single call

use log::{debug, info};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::Path;

/// Serializes a value as JSON indented with four spaces
///
/// # Arguments
///
/// * `value` - Any serializable value
///
/// # Returns
///
/// The rendered document as bytes
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;
    Ok(buffer)
}

/// Writes a value to `path` as 4-space indented JSON, replacing any existing file
///
/// The whole document is rendered before the file is touched, so a
/// serialization failure leaves the previous output in place.
pub async fn write_json_document<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
) -> Result<(), Box<dyn std::error::Error>> {
    let rendered = to_pretty_json(value)?;
    write_document(path, &rendered).await?;
    Ok(())
}

/// Writes `contents` to `path` in a single call, replacing any existing file
///
/// Missing parent directories are created.
pub async fn write_document(path: &Path, contents: &[u8]) -> Result<(), std::io::Error> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && tokio::fs::metadata(parent).await.is_err() {
            debug!("Creating output directory {}", parent.display());
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    tokio::fs::write(path, contents).await?;
    info!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

/// Reads a whole text file
pub async fn read_document(path: &Path) -> Result<String, std::io::Error> {
    debug!("Reading {}", path.display());
    tokio::fs::read_to_string(path).await
}
