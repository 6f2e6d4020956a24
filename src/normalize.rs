//! Normalization of the raw celestial body dataset.
//!
//! Filters the raw bodies down to the allow-list, re-keys them by canonical id
//! and annotates each one with its display name, classification and a
//! translated parent reference. Both generated documents are derived from the
//! result of [`normalize_bodies`].

use crate::catalog::{self, CatalogError};
use crate::models::{CelestialBodyRecord, NormalizedBodies, RawBody, RawDataset};
use indexmap::map::Entry;
use log::{debug, info};

/// Attributes of a raw body that normalization replaces
const REPLACED_ATTRIBUTES: [&str; 3] = ["id", "name", "type"];

/// Error type for normalization
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("Malformed raw dataset: {0}")]
    MalformedInput(#[from] serde_json::Error),
    #[error("Lookup failed for '{body}': {source}")]
    Lookup {
        body: String,
        #[source]
        source: CatalogError,
    },
    #[error("Body '{0}' appears more than once in the raw dataset")]
    DuplicateBody(String),
    #[error("Body '{body}' orbits '{parent}', which is not part of the output")]
    UnresolvedParent { body: String, parent: String },
}

/// Parses the raw dataset document
pub fn parse_raw_dataset(json: &str) -> Result<RawDataset, NormalizeError> {
    Ok(serde_json::from_str(json)?)
}

/// Turns one allow-listed raw body into its normalized record
///
/// # Arguments
///
/// * `raw` - The raw body, which must already have passed the allow-list
///
/// # Returns
///
/// The normalized record, or a lookup error if the body or its parent label
/// is missing from the static tables
pub fn normalize_body(raw: RawBody) -> Result<CelestialBodyRecord, NormalizeError> {
    let RawBody {
        english_name,
        around_planet,
        mut attributes,
    } = raw;

    let id = catalog::canonical_id(&english_name);
    let lookup_error = |source: CatalogError| NormalizeError::Lookup {
        body: english_name.clone(),
        source,
    };

    let body_type = catalog::body_type(&id).map_err(lookup_error)?;

    let around_planet = match around_planet {
        Some(mut parent) => {
            parent.planet = catalog::translate_parent(&parent.planet)
                .map_err(lookup_error)?
                .to_string();
            Some(parent)
        }
        None => None,
    };

    for key in REPLACED_ATTRIBUTES {
        attributes.remove(key);
    }

    debug!("Normalized {} as {} ({:?})", english_name, id, body_type);

    Ok(CelestialBodyRecord {
        id,
        name: english_name.clone(),
        body_type,
        english_name,
        around_planet,
        attributes,
    })
}

/// Filters, re-keys and annotates the raw dataset
///
/// Records keep the order in which they appear in the raw dataset. Every
/// parent reference must point at another body of the output.
///
/// # Arguments
///
/// * `dataset` - The parsed raw dataset
///
/// # Returns
///
/// The normalized bodies keyed by canonical id
pub fn normalize_bodies(dataset: RawDataset) -> Result<NormalizedBodies, NormalizeError> {
    let total = dataset.bodies.len();
    let mut bodies = NormalizedBodies::new();

    for raw in dataset.bodies {
        if !catalog::is_allowed(&raw.english_name) {
            continue;
        }

        let record = normalize_body(raw)?;
        match bodies.entry(record.id.clone()) {
            Entry::Occupied(entry) => {
                return Err(NormalizeError::DuplicateBody(entry.key().clone()));
            }
            Entry::Vacant(entry) => {
                entry.insert(record);
            }
        }
    }

    check_parents(&bodies)?;

    info!("Kept {} of {} raw bodies", bodies.len(), total);
    Ok(bodies)
}

/// Ensures every parent reference resolves to another body of the normalized set
fn check_parents(bodies: &NormalizedBodies) -> Result<(), NormalizeError> {
    for record in bodies.values() {
        if let Some(parent) = &record.around_planet {
            if parent.planet == record.id || !bodies.contains_key(&parent.planet) {
                return Err(NormalizeError::UnresolvedParent {
                    body: record.id.clone(),
                    parent: parent.planet.clone(),
                });
            }
        }
    }
    Ok(())
}
