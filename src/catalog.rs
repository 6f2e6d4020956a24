//! Static lookup tables for the supported celestial bodies.
//!
//! Everything the pipeline knows about a body without reading the raw dataset
//! lives here: which bodies are kept, how they are classified, how parent
//! labels from the raw data translate to canonical ids, which encyclopedia
//! pages need a disambiguated slug, and who to credit for the photos and
//! textures the viewer shows.

use crate::models::{BodyType, Credit, PhotoCredits};

/// Error type for catalog lookups
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("No body type registered for '{0}'")]
    UnknownBodyType(String),
    #[error("No translation registered for parent label '{0}'")]
    UntranslatedParent(String),
}

/// Display names of the bodies the pipeline keeps, in output order.
pub const ALLOW_LIST: [&str; 16] = [
    "Sun", "Mercury", "Venus", "Earth", "Moon", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune",
    "Pluto", "1 Ceres", "Io", "Ganymede", "Europa", "Callisto",
];

/// Canonical id to body classification.
pub const BODY_TYPES: [(&str, BodyType); 16] = [
    ("sun", BodyType::Star),
    ("mercury", BodyType::Terrestrial),
    ("venus", BodyType::Terrestrial),
    ("earth", BodyType::Terrestrial),
    ("moon", BodyType::Satellite),
    ("mars", BodyType::Terrestrial),
    ("jupiter", BodyType::GasGiant),
    ("saturn", BodyType::GasGiant),
    ("uranus", BodyType::IceGiant),
    ("neptune", BodyType::IceGiant),
    ("pluto", BodyType::DwarfPlanet),
    ("1 ceres", BodyType::DwarfPlanet),
    ("io", BodyType::Satellite),
    ("ganymede", BodyType::Satellite),
    ("europa", BodyType::Satellite),
    ("callisto", BodyType::Satellite),
];

/// Parent labels as they appear in the raw dataset, mapped to canonical ids.
pub const PARENT_TRANSLATIONS: [(&str, &str); 16] = [
    ("la lune", "moon"),
    ("uranus", "uranus"),
    ("pluton", "pluto"),
    ("neptune", "neptune"),
    ("jupiter", "jupiter"),
    ("mars", "mars"),
    ("mercure", "mercury"),
    ("saturne", "saturn"),
    ("le soleil", "sun"),
    ("terre", "earth"),
    ("vénus", "venus"),
    ("(1) Cérès", "1 ceres"),
    ("io", "io"),
    ("ganymede", "ganymede"),
    ("europe", "europa"),
    ("callisto", "callisto"),
];

/// Page titles for names whose plain form lands on the wrong article.
pub const SLUG_OVERRIDES: [(&str, &str); 6] = [
    ("Mercury", "Mercury_(planet)"),
    ("1 Ceres", "Ceres_(dwarf_planet)"),
    ("Io", "Io_(moon)"),
    ("Ganymede", "Ganymede_(moon)"),
    ("Europa", "Europa_(moon)"),
    ("Callisto", "Callisto_(moon)"),
];

/// Attribution for one body: the encyclopedia photo and, when the viewer
/// renders a texture for it, the texture asset.
#[derive(Debug, Clone, Copy)]
pub struct CreditEntry {
    pub wiki: (&'static str, &'static str),
    pub texture: Option<(&'static str, &'static str)>,
}

const SOLAR_SYSTEM_SCOPE: (&str, &str) = ("CC BY 4.0", "Solar System Scope");
const STELLARIUM: (&str, &str) = ("GPL v2.0", "Stellarium");

/// Canonical id to photo and texture attribution as `(license, author)` pairs.
pub const PHOTO_CREDITS: [(&str, CreditEntry); 16] = [
    (
        "sun",
        CreditEntry {
            wiki: ("Public Domain", "NASA/SDO (AIA)"),
            texture: Some(SOLAR_SYSTEM_SCOPE),
        },
    ),
    (
        "mercury",
        CreditEntry {
            wiki: (
                "Public Domain",
                "NASA/Johns Hopkins University Applied Physics Laboratory/Carnegie Institution of Washington",
            ),
            texture: Some(SOLAR_SYSTEM_SCOPE),
        },
    ),
    (
        "venus",
        CreditEntry {
            wiki: ("Public Domain", "NASA/JPL-Caltech"),
            texture: Some(SOLAR_SYSTEM_SCOPE),
        },
    ),
    (
        "earth",
        CreditEntry {
            wiki: ("Public Domain", "NASA/Apollo 17 crew"),
            texture: Some(SOLAR_SYSTEM_SCOPE),
        },
    ),
    (
        "moon",
        CreditEntry {
            wiki: ("CC BY-SA 3.0", "Gregory H. Revera"),
            texture: Some(SOLAR_SYSTEM_SCOPE),
        },
    ),
    (
        "mars",
        CreditEntry {
            wiki: ("CC BY-SA 3.0 IGO", "ESA & MPS for OSIRIS Team"),
            texture: Some(SOLAR_SYSTEM_SCOPE),
        },
    ),
    (
        "jupiter",
        CreditEntry {
            wiki: ("Public Domain", "NASA/JPL-Caltech/SwRI/MSSS/Kevin M. Gill"),
            texture: Some(SOLAR_SYSTEM_SCOPE),
        },
    ),
    (
        "saturn",
        CreditEntry {
            wiki: ("Public Domain", "NASA/JPL/Space Science Institute"),
            texture: Some(SOLAR_SYSTEM_SCOPE),
        },
    ),
    (
        "uranus",
        CreditEntry {
            wiki: ("Public Domain", "NASA/JPL-Caltech"),
            texture: Some(SOLAR_SYSTEM_SCOPE),
        },
    ),
    (
        "neptune",
        CreditEntry {
            wiki: ("Public Domain", "NASA/JPL"),
            texture: Some(SOLAR_SYSTEM_SCOPE),
        },
    ),
    (
        "pluto",
        CreditEntry {
            wiki: (
                "Public Domain",
                "NASA/Johns Hopkins University Applied Physics Laboratory/Southwest Research Institute",
            ),
            texture: Some(("Planet Pixel Emporium License", "James Hastings-Trew")),
        },
    ),
    (
        "1 ceres",
        CreditEntry {
            wiki: ("Public Domain", "NASA/JPL-Caltech/UCLA/MPS/DLR/IDA"),
            texture: Some(SOLAR_SYSTEM_SCOPE),
        },
    ),
    (
        "io",
        CreditEntry {
            wiki: ("Public Domain", "NASA/JPL/University of Arizona"),
            texture: Some(("Public Domain", "USGS")),
        },
    ),
    (
        "ganymede",
        CreditEntry {
            wiki: ("Public Domain", "NASA/JPL/DLR"),
            texture: Some(STELLARIUM),
        },
    ),
    (
        "europa",
        CreditEntry {
            wiki: ("Public Domain", "NASA/JPL-Caltech/SETI Institute"),
            texture: Some(STELLARIUM),
        },
    ),
    (
        "callisto",
        CreditEntry {
            wiki: ("Public Domain", "NASA/JPL/DLR"),
            texture: Some(STELLARIUM),
        },
    ),
];

/// Returns true if the display name is on the allow-list
pub fn is_allowed(name: &str) -> bool {
    ALLOW_LIST.contains(&name)
}

/// Derives the canonical id for a display name
pub fn canonical_id(name: &str) -> String {
    name.to_lowercase()
}

/// Looks up the classification of a body by canonical id
pub fn body_type(id: &str) -> Result<BodyType, CatalogError> {
    BODY_TYPES
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, body_type)| *body_type)
        .ok_or_else(|| CatalogError::UnknownBodyType(id.to_string()))
}

/// Translates a raw parent label into the canonical id of the parent body
pub fn translate_parent(label: &str) -> Result<&'static str, CatalogError> {
    PARENT_TRANSLATIONS
        .iter()
        .find(|(key, _)| *key == label)
        .map(|(_, id)| *id)
        .ok_or_else(|| CatalogError::UntranslatedParent(label.to_string()))
}

/// Returns the encyclopedia page slug for a display name
///
/// Names without an override use the name itself with spaces replaced by
/// underscores, which is how page titles are written in URLs.
pub fn wiki_slug(name: &str) -> String {
    SLUG_OVERRIDES
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, slug)| slug.to_string())
        .unwrap_or_else(|| name.replace(' ', "_"))
}

impl CreditEntry {
    /// Expands the entry, writing the `"None"` placeholder for a missing texture credit
    pub fn to_photo_credits(&self) -> PhotoCredits {
        PhotoCredits {
            wiki: Credit::new(self.wiki.0, self.wiki.1),
            texture: self
                .texture
                .map(|(cc, by)| Credit::new(cc, by))
                .unwrap_or_else(Credit::none),
        }
    }
}

/// Builds the `photo_credits` block for a body, if one is registered
pub fn photo_credits(id: &str) -> Option<PhotoCredits> {
    PHOTO_CREDITS
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, entry)| entry.to_photo_credits())
}
