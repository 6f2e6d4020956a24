//! Approximate heliocentric positions of the major planets and Pluto.
//!
//! Positions come from the JPL "approximate positions of the planets" Keplerian
//! elements, valid for 1800 AD to 2050 AD. The heliocentric orbit is solved in
//! the ecliptic plane and rotated into the J2000 mean equator, then remapped
//! into the viewer's axes.

use chrono::{DateTime, Utc};
use nalgebra::{Rotation3, Vector3};

/// Julian date of the J2000 epoch, 2000-01-01T12:00:00
const J2000_JULIAN_DATE: f64 = 2_451_545.0;

/// Julian date of the Unix epoch
const UNIX_EPOCH_JULIAN_DATE: f64 = 2_440_587.5;

/// Mean obliquity of the ecliptic at J2000, in degrees
pub const J2000_OBLIQUITY: f64 = 23.43928;

const KEPLER_TOLERANCE: f64 = 1e-12;
const KEPLER_MAX_ITERATIONS: usize = 30;

/// Bodies with orbital elements in the approximate ephemeris
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Planet {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// Keplerian elements at J2000 and their rates of change per Julian century
///
/// Angles are in degrees, the semi-major axis in AU.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    /// Semi-major axis
    pub semi_major_axis: [f64; 2],
    /// Eccentricity
    pub eccentricity: [f64; 2],
    /// Inclination to the ecliptic
    pub inclination: [f64; 2],
    /// Mean longitude
    pub mean_longitude: [f64; 2],
    /// Longitude of perihelion
    pub perihelion_longitude: [f64; 2],
    /// Longitude of the ascending node
    pub node_longitude: [f64; 2],
}

impl Planet {
    /// Every body the ephemeris can place, from the Sun outwards
    pub const ALL: [Planet; 9] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Earth,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
        Planet::Pluto,
    ];

    /// Canonical id of the body in the objects document
    pub fn id(self) -> &'static str {
        match self {
            Planet::Mercury => "mercury",
            Planet::Venus => "venus",
            Planet::Earth => "earth",
            Planet::Mars => "mars",
            Planet::Jupiter => "jupiter",
            Planet::Saturn => "saturn",
            Planet::Uranus => "uranus",
            Planet::Neptune => "neptune",
            Planet::Pluto => "pluto",
        }
    }

    /// Orbital elements of the body
    ///
    /// Earth uses the Earth-Moon barycenter elements.
    pub fn elements(self) -> OrbitalElements {
        let [a, e, i, l, w, n] = match self {
            Planet::Mercury => [
                [0.38709927, 0.00000037],
                [0.20563593, 0.00001906],
                [7.00497902, -0.00594749],
                [252.25032350, 149472.67411175],
                [77.45779628, 0.16047689],
                [48.33076593, -0.12534081],
            ],
            Planet::Venus => [
                [0.72333566, 0.00000390],
                [0.00677672, -0.00004107],
                [3.39467605, -0.00078890],
                [181.97909950, 58517.81538729],
                [131.60246718, 0.00268329],
                [76.67984255, -0.27769418],
            ],
            Planet::Earth => [
                [1.00000261, 0.00000562],
                [0.01671123, -0.00004392],
                [-0.00001531, -0.01294668],
                [100.46457166, 35999.37244981],
                [102.93768193, 0.32327364],
                [0.0, 0.0],
            ],
            Planet::Mars => [
                [1.52371034, 0.00001847],
                [0.09339410, 0.00007882],
                [1.84969142, -0.00813131],
                [-4.55343205, 19140.30268499],
                [-23.94362959, 0.44441088],
                [49.55953891, -0.29257343],
            ],
            Planet::Jupiter => [
                [5.20288700, -0.00011607],
                [0.04838624, -0.00013253],
                [1.30439695, -0.00183714],
                [34.39644051, 3034.74612775],
                [14.72847983, 0.21252668],
                [100.47390909, 0.20469106],
            ],
            Planet::Saturn => [
                [9.53667594, -0.00125060],
                [0.05386179, -0.00050991],
                [2.48599187, 0.00193609],
                [49.95424423, 1222.49362201],
                [92.59887831, -0.41897216],
                [113.66242448, -0.28867794],
            ],
            Planet::Uranus => [
                [19.18916464, -0.00196176],
                [0.04725744, -0.00004397],
                [0.77263783, -0.00242939],
                [313.23810451, 428.48202785],
                [170.95427630, 0.40805281],
                [74.01692503, 0.04240589],
            ],
            Planet::Neptune => [
                [30.06992276, 0.00026291],
                [0.00859048, 0.00005105],
                [1.77004347, 0.00035372],
                [-55.12002969, 218.45945325],
                [44.96476227, -0.32241464],
                [131.78422574, -0.00508664],
            ],
            Planet::Pluto => [
                [39.48211675, -0.00031596],
                [0.24882730, 0.00005170],
                [17.14001206, 0.00004818],
                [238.92903833, 145.20780515],
                [224.06891629, -0.04062942],
                [110.30393684, -0.01183482],
            ],
        };

        OrbitalElements {
            semi_major_axis: a,
            eccentricity: e,
            inclination: i,
            mean_longitude: l,
            perihelion_longitude: w,
            node_longitude: n,
        }
    }
}

/// Julian centuries elapsed since J2000 at `date`
pub fn centuries_since_j2000(date: &DateTime<Utc>) -> f64 {
    let julian_date = date.timestamp_millis() as f64 / 86_400_000.0 + UNIX_EPOCH_JULIAN_DATE;
    (julian_date - J2000_JULIAN_DATE) / 36_525.0
}

/// Solves Kepler's equation `M = E - e sin E` for the eccentric anomaly
///
/// Both anomalies are in radians.
pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64) -> f64 {
    let mut eccentric = mean_anomaly + eccentricity * mean_anomaly.sin();
    for _ in 0..KEPLER_MAX_ITERATIONS {
        let delta = (eccentric - eccentricity * eccentric.sin() - mean_anomaly)
            / (1.0 - eccentricity * eccentric.cos());
        eccentric -= delta;
        if delta.abs() < KEPLER_TOLERANCE {
            break;
        }
    }
    eccentric
}

fn at(element: [f64; 2], centuries: f64) -> f64 {
    element[0] + element[1] * centuries
}

/// Heliocentric position in the J2000 ecliptic frame, in AU
pub fn heliocentric_ecliptic(planet: Planet, date: &DateTime<Utc>) -> Vector3<f64> {
    let elements = planet.elements();
    let t = centuries_since_j2000(date);

    let a = at(elements.semi_major_axis, t);
    let e = at(elements.eccentricity, t);
    let inclination = at(elements.inclination, t).to_radians();
    let mean_longitude = at(elements.mean_longitude, t);
    let perihelion = at(elements.perihelion_longitude, t);
    let node = at(elements.node_longitude, t);

    let argument_of_perihelion = (perihelion - node).to_radians();
    // Mean anomaly folded into [-180, 180)
    let mean_anomaly = ((mean_longitude - perihelion + 180.0).rem_euclid(360.0) - 180.0).to_radians();
    let eccentric = solve_kepler(mean_anomaly, e);

    let in_plane = Vector3::new(
        a * (eccentric.cos() - e),
        a * (1.0 - e * e).sqrt() * eccentric.sin(),
        0.0,
    );

    let to_ecliptic = Rotation3::from_axis_angle(&Vector3::z_axis(), node.to_radians())
        * Rotation3::from_axis_angle(&Vector3::x_axis(), inclination)
        * Rotation3::from_axis_angle(&Vector3::z_axis(), argument_of_perihelion);

    to_ecliptic * in_plane
}

/// Heliocentric position in the J2000 equatorial frame, in AU
pub fn heliocentric_equatorial(planet: Planet, date: &DateTime<Utc>) -> Vector3<f64> {
    let to_equator =
        Rotation3::from_axis_angle(&Vector3::x_axis(), J2000_OBLIQUITY.to_radians());
    to_equator * heliocentric_ecliptic(planet, date)
}

/// Heliocentric position in the viewer's axes, in AU
///
/// The viewer is Y-up: its x is the equatorial -y, its y the equatorial z and
/// its z the equatorial -x.
pub fn viewer_position(planet: Planet, date: &DateTime<Utc>) -> Vector3<f64> {
    let equatorial = heliocentric_equatorial(planet, date);
    Vector3::new(-equatorial.y, equatorial.z, -equatorial.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::TimeZone;

    fn j2000() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_centuries_since_j2000() {
        assert_relative_eq!(centuries_since_j2000(&j2000()), 0.0);

        let later = Utc.with_ymd_and_hms(2100, 1, 1, 12, 0, 0).unwrap();
        // 2000 and 2100 bracket 25 leap days; 2100 itself is not a leap year
        assert_relative_eq!(centuries_since_j2000(&later), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_solve_kepler() {
        for &(mean_anomaly, e) in &[(0.3, 0.0167), (-2.9, 0.2488), (1.0, 0.9)] {
            let eccentric = solve_kepler(mean_anomaly, e);
            assert_relative_eq!(
                eccentric - e * eccentric.sin(),
                mean_anomaly,
                epsilon = 1e-10
            );
        }

        // A circular orbit has no correction
        assert_relative_eq!(solve_kepler(1.2, 0.0), 1.2);
    }

    #[test]
    fn test_earth_at_j2000() {
        let ecliptic = heliocentric_ecliptic(Planet::Earth, &j2000());
        assert_relative_eq!(ecliptic.x, -0.1771, epsilon = 0.002);
        assert_relative_eq!(ecliptic.y, 0.9672, epsilon = 0.002);
        assert_relative_eq!(ecliptic.z, 0.0, epsilon = 1e-4);

        let equatorial = heliocentric_equatorial(Planet::Earth, &j2000());
        assert_relative_eq!(equatorial.x, -0.1771, epsilon = 0.002);
        assert_relative_eq!(equatorial.y, 0.8874, epsilon = 0.002);
        assert_relative_eq!(equatorial.z, 0.3847, epsilon = 0.002);

        let viewer = viewer_position(Planet::Earth, &j2000());
        assert_relative_eq!(viewer.x, -equatorial.y);
        assert_relative_eq!(viewer.y, equatorial.z);
        assert_relative_eq!(viewer.z, -equatorial.x);
    }

    #[test]
    fn test_distances_stay_within_perihelion_and_aphelion() {
        let start = j2000();
        for planet in Planet::ALL {
            let elements = planet.elements();
            let a = elements.semi_major_axis[0];
            let e = elements.eccentricity[0];
            for day in (0..3650).step_by(73) {
                let date = start + chrono::Duration::days(day);
                let distance = viewer_position(planet, &date).norm();
                assert!(
                    distance > a * (1.0 - e) * 0.999 && distance < a * (1.0 + e) * 1.001,
                    "{:?} is {} AU from the Sun",
                    planet,
                    distance
                );
            }
        }
    }

    #[test]
    fn test_inclination_lifts_pluto_out_of_the_ecliptic() {
        let z = (0..90_000)
            .step_by(1000)
            .map(|day| {
                let date = j2000() + chrono::Duration::days(day);
                heliocentric_ecliptic(Planet::Pluto, &date).z.abs()
            })
            .fold(0.0, f64::max);
        assert!(z > 5.0, "Pluto never left the ecliptic (max |z| = {})", z);
    }
}
