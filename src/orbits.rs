//! Precomputed orbit tracks for the viewer.
//!
//! One heliocentric position is sampled per day for roughly one orbital period
//! of each planet and of Pluto, starting at the turn of the current year. The
//! tracks are written as plain text:
//!
//! ```text
//! 2026-10-17T08:30:00.000Z      generation time
//! Mercury,Venus,...             display names
//! 4,94,...                      line of each body's first point
//! 89                            point count for Mercury
//! -0.28853,0.010251,0.17826     one x,y,z point per line
//! ...
//! ```

use crate::ephemeris::{self, Planet};
use chrono::{DateTime, Datelike, Duration, NaiveTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use log::{debug, info};
use nalgebra::Vector3;
use serde::Deserialize;
use thiserror::Error;

/// Significant digits kept for each coordinate
pub const SIGNIFICANT_DIGITS: usize = 5;

/// Lines preceding the first point count
const HEADER_LINES: usize = 3;

/// Errors raised while computing orbit tracks
#[derive(Debug, Error)]
pub enum OrbitError {
    #[error("malformed objects document: {0}")]
    MalformedObjects(#[from] serde_json::Error),
    #[error("body {0} is missing from the objects document")]
    MissingBody(String),
    #[error("body {0} has no sideral orbit")]
    MissingOrbitalPeriod(String),
    #[error("body {body} has an invalid sideral orbit of {period} days")]
    InvalidOrbitalPeriod { body: String, period: f64 },
}

/// The slice of an objects document record the tracks need
#[derive(Debug, Clone, Deserialize)]
pub struct OrbitSource {
    /// Display name
    pub name: String,
    /// Orbital period in days
    #[serde(rename = "sideralOrbit", default)]
    pub sideral_orbit: Option<f64>,
}

/// Sampled positions of one body
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitTrack {
    pub name: String,
    pub points: Vec<Vector3<f64>>,
}

/// Every track together with the time they were generated at
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitPoints {
    pub generated_at: DateTime<Utc>,
    pub tracks: Vec<OrbitTrack>,
}

/// Parses the objects document, ignoring everything but names and periods
pub fn parse_objects(text: &str) -> Result<IndexMap<String, OrbitSource>, OrbitError> {
    Ok(serde_json::from_str(text)?)
}

/// Number of daily samples drawn for an orbital period, in days
pub fn sample_count(sideral_orbit: f64) -> usize {
    (366.0 * (sideral_orbit / 365.0)).floor() as usize
}

/// Midnight UTC of the last day of the previous year
///
/// Sample `i` falls `i` days after it, so sample 1 is January 1st.
pub fn first_sample_day(generated_at: &DateTime<Utc>) -> DateTime<Utc> {
    let midnight = generated_at.date_naive().and_time(NaiveTime::MIN).and_utc();
    midnight - Duration::days(i64::from(generated_at.ordinal()))
}

/// Samples a track for every body of the ephemeris
///
/// # Arguments
///
/// * `objects` - The objects document keyed by canonical id
/// * `generated_at` - Generation time; its year picks the first sample
///
/// # Returns
///
/// One track per body, from Mercury outwards
pub fn compute_orbit_points(
    objects: &IndexMap<String, OrbitSource>,
    generated_at: DateTime<Utc>,
) -> Result<OrbitPoints, OrbitError> {
    let first_day = first_sample_day(&generated_at);
    debug!("Sampling orbits from {}", first_day);

    let mut tracks = Vec::with_capacity(Planet::ALL.len());
    for planet in Planet::ALL {
        let id = planet.id();
        let source = objects
            .get(id)
            .ok_or_else(|| OrbitError::MissingBody(id.to_string()))?;
        let period = source
            .sideral_orbit
            .ok_or_else(|| OrbitError::MissingOrbitalPeriod(id.to_string()))?;
        if !period.is_finite() || period <= 0.0 {
            return Err(OrbitError::InvalidOrbitalPeriod {
                body: id.to_string(),
                period,
            });
        }

        let count = sample_count(period);
        info!(
            "{}: orbital period {} days, {} points",
            source.name, period, count
        );

        let points = (0..count)
            .map(|day| {
                let date = first_day + Duration::days(day as i64);
                ephemeris::viewer_position(planet, &date)
            })
            .collect();

        tracks.push(OrbitTrack {
            name: source.name.clone(),
            points,
        });
    }

    Ok(OrbitPoints {
        generated_at,
        tracks,
    })
}

impl OrbitPoints {
    /// Renders the tracks as newline-separated text without a trailing newline
    pub fn render(&self) -> String {
        let mut body: Vec<String> = Vec::new();
        let mut names = Vec::with_capacity(self.tracks.len());
        let mut indices = Vec::with_capacity(self.tracks.len());

        for track in &self.tracks {
            body.push(track.points.len().to_string());
            names.push(track.name.as_str());
            indices.push((HEADER_LINES + body.len()).to_string());
            body.extend(track.points.iter().map(format_point));
        }

        let mut lines = Vec::with_capacity(HEADER_LINES + body.len());
        lines.push(
            self.generated_at
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        );
        lines.push(names.join(","));
        lines.push(indices.join(","));
        lines.extend(body);
        lines.join("\n")
    }
}

fn format_point(point: &Vector3<f64>) -> String {
    format!(
        "{},{},{}",
        to_precision(point.x, SIGNIFICANT_DIGITS),
        to_precision(point.y, SIGNIFICANT_DIGITS),
        to_precision(point.z, SIGNIFICANT_DIGITS)
    )
}

/// Formats a number with `digits` significant digits
///
/// Fixed notation is used unless the decimal exponent is below -6 or at least
/// `digits`, in which case the number is written as `1.2346e+5`.
pub fn to_precision(value: f64, digits: usize) -> String {
    let digits = digits.max(1);
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return format!("{:.*}", digits - 1, 0.0);
    }

    let scientific = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -6 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{}", mantissa, sign, exponent.abs())
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        format!("{:.*}", decimals, value)
    }
}
