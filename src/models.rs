//! Data structures for the raw dataset and the two generated documents.
//!
//! Raw bodies are only partially typed: the pipeline reads `englishName` and
//! `aroundPlanet` and carries every other attribute through untouched, in the
//! order it was read. Both documents are insertion-ordered maps so they are
//! written in the order they were built.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top level of the raw celestial body dataset
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RawDataset {
    /// Every body known to the source dataset
    pub bodies: Vec<RawBody>,
}

/// A single body as it appears in the raw dataset
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RawBody {
    /// English display name, also the allow-list key
    #[serde(rename = "englishName")]
    pub english_name: String,
    /// Parent body, absent or null for bodies orbiting nothing
    #[serde(rename = "aroundPlanet")]
    #[serde(default)]
    pub around_planet: Option<AroundPlanet>,
    /// All remaining attributes, passed through unchanged
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// Reference to the body this one orbits
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AroundPlanet {
    /// Parent label; a source-language label in raw data, a canonical id once normalized
    pub planet: String,
    /// Other fields of the reference (such as `rel`)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Classification of a celestial body
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyType {
    Star,
    Terrestrial,
    #[serde(rename = "Gas Giant")]
    GasGiant,
    #[serde(rename = "Ice Giant")]
    IceGiant,
    #[serde(rename = "Dwarf Planet")]
    DwarfPlanet,
    Satellite,
}

/// A normalized body, the unit of the objects document
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CelestialBodyRecord {
    /// Lowercase canonical key
    pub id: String,
    /// Display name
    pub name: String,
    #[serde(rename = "type")]
    pub body_type: BodyType,
    #[serde(rename = "englishName")]
    pub english_name: String,
    /// Parent reference with `planet` translated to a canonical id
    #[serde(rename = "aroundPlanet")]
    pub around_planet: Option<AroundPlanet>,
    /// Raw attributes other than the ones replaced above
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// License and author of one credited asset
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Credit {
    pub cc: String,
    pub by: String,
}

impl Credit {
    pub fn new(cc: &str, by: &str) -> Self {
        Credit {
            cc: cc.to_string(),
            by: by.to_string(),
        }
    }

    /// Placeholder written when no credit applies
    pub fn none() -> Self {
        Credit::new("None", "None")
    }
}

/// Attribution for the encyclopedia photo and the rendered texture
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PhotoCredits {
    pub wiki: Credit,
    pub texture: Credit,
}

/// An encyclopedia summary with injected attribution, the unit of the wiki document
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MetadataRecord {
    /// Summary payload exactly as returned by the API
    #[serde(flatten)]
    pub summary: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub photo_credits: Option<PhotoCredits>,
}

impl MetadataRecord {
    pub fn new(summary: Map<String, Value>) -> Self {
        MetadataRecord {
            summary,
            photo_credits: None,
        }
    }
}

/// The objects document: canonical id to normalized body, in raw dataset order
pub type NormalizedBodies = IndexMap<String, CelestialBodyRecord>;

/// The wiki document: display name to summary with attribution, in allow-list order
pub type WikiDocument = IndexMap<String, MetadataRecord>;
