//! API client for the encyclopedia page summary endpoint.
//!
//! This module fetches one summary per normalized body, strictly one request
//! at a time and in allow-list order, and assembles the wiki document.

use crate::catalog;
use crate::enrich;
use crate::models::{MetadataRecord, NormalizedBodies, WikiDocument};
use crate::summary_url::{self, SummaryUrlError};
use log::{debug, info, warn};
use reqwest::Client;
use serde_json::{Map, Value};
use std::error::Error;
use std::fmt;

/// Custom error type for summary fetch errors
#[derive(Debug)]
pub enum FetchError {
    /// Error from a network request
    NetworkError(reqwest::Error),
    /// Error when parsing JSON
    JsonParseError(String),
    /// The response was JSON but not an object
    UnexpectedPayload {
        /// Body the summary was requested for
        name: String,
        /// JSON type that was returned instead
        found: &'static str,
    },
    /// Error when building the request URL
    InvalidName(SummaryUrlError),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::NetworkError(e) => write!(f, "Network error: {}", e),
            FetchError::JsonParseError(msg) => write!(f, "JSON parse error: {}", msg),
            FetchError::UnexpectedPayload { name, found } => {
                write!(f, "Summary for {} is {} instead of an object", name, found)
            }
            FetchError::InvalidName(e) => write!(f, "Invalid body name: {}", e),
        }
    }
}

impl Error for FetchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FetchError::NetworkError(e) => Some(e),
            FetchError::InvalidName(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::NetworkError(err)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::JsonParseError(err.to_string())
    }
}

impl From<SummaryUrlError> for FetchError {
    fn from(err: SummaryUrlError) -> Self {
        FetchError::InvalidName(err)
    }
}

/// Builds the HTTP client used for summary requests
pub fn build_client(user_agent: &str) -> Result<Client, FetchError> {
    Ok(Client::builder().user_agent(user_agent).build()?)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Fetches the page summary for one body
///
/// Makes a single GET request, with no retry.
///
/// # Arguments
///
/// * `client` - A reqwest HTTP client
/// * `endpoint` - The summary endpoint base URL
/// * `name` - The body's display name
///
/// # Returns
///
/// The summary object, or `None` if the endpoint answered with a non-success
/// status. Transport failures and malformed bodies are errors.
pub async fn fetch_summary(
    client: &Client,
    endpoint: &str,
    name: &str,
) -> Result<Option<Map<String, Value>>, FetchError> {
    let url = summary_url::summary_url(endpoint, name)?;
    debug!("Requesting {}", url);

    let resp = client.get(&url).send().await?;

    if !resp.status().is_success() {
        warn!(
            "Summary request for {} failed with status {}",
            name,
            resp.status().as_u16()
        );
        return Ok(None);
    }

    let body = resp.text().await?;
    let data: Value = serde_json::from_str(&body)?;

    match data {
        Value::Object(summary) => Ok(Some(summary)),
        other => Err(FetchError::UnexpectedPayload {
            name: name.to_string(),
            found: json_type_name(&other),
        }),
    }
}

/// Fetches summaries for every normalized body and attaches photo credits
///
/// Bodies are visited in allow-list order; an allow-listed body missing from
/// `bodies` is not requested. A body whose summary request is answered with a
/// non-success status gets no entry, and therefore no credits either.
///
/// # Arguments
///
/// * `client` - A reqwest HTTP client
/// * `endpoint` - The summary endpoint base URL
/// * `bodies` - The normalized bodies
///
/// # Returns
///
/// The wiki document keyed by display name
pub async fn fetch_wiki_document(
    client: &Client,
    endpoint: &str,
    bodies: &NormalizedBodies,
) -> Result<WikiDocument, FetchError> {
    let mut document = WikiDocument::new();
    let mut skipped = 0;

    for name in catalog::ALLOW_LIST {
        let id = catalog::canonical_id(name);
        let Some(body) = bodies.get(&id) else {
            debug!("No raw data for {}, not requesting a summary", name);
            continue;
        };

        let Some(summary) = fetch_summary(client, endpoint, &body.name).await? else {
            skipped += 1;
            continue;
        };

        let mut record = MetadataRecord::new(summary);
        enrich::attach_photo_credits(&mut record, &id);

        let previous = document.insert(body.name.clone(), record);
        debug_assert!(previous.is_none(), "display names are unique");
    }

    info!(
        "Fetched {} summaries ({} skipped)",
        document.len(),
        skipped
    );
    Ok(document)
}
