//! URL generation for encyclopedia summary requests.
//!
//! This module turns a body's display name into the page slug and the full
//! summary URL the fetcher requests.

use crate::catalog;

/// Error type for summary URL generation
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SummaryUrlError {
    #[error("Empty body name provided")]
    EmptyName,
    #[error("Invalid character in page slug: {0:?}")]
    InvalidSlugChar(char),
}

/// Characters that would change the meaning of the URL path
fn is_reserved(c: char) -> bool {
    matches!(c, '/' | '?' | '#' | '%') || c.is_control()
}

/// Computes the page slug requested for a display name
///
/// Names listed in the disambiguation overrides map to their dedicated page;
/// everything else uses the name with spaces replaced by underscores.
pub fn slug_for(name: &str) -> Result<String, SummaryUrlError> {
    if name.trim().is_empty() {
        return Err(SummaryUrlError::EmptyName);
    }

    let slug = catalog::wiki_slug(name);
    if let Some(c) = slug.chars().find(|c| is_reserved(*c)) {
        return Err(SummaryUrlError::InvalidSlugChar(c));
    }
    Ok(slug)
}

/// Generates the summary URL for a display name
///
/// The URL is constructed in the format `{endpoint}/{slug}`.
///
/// # Arguments
///
/// * `endpoint` - The summary endpoint base, with or without a trailing slash
/// * `name` - The body's display name
///
/// # Returns
///
/// The generated URL, or an error if the name cannot form a slug
pub fn summary_url(endpoint: &str, name: &str) -> Result<String, SummaryUrlError> {
    let slug = slug_for(name)?;
    Ok(format!("{}/{}", endpoint.trim_end_matches('/'), slug))
}
