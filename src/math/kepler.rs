//! Low-precision analytic ephemeris.
//!
//! Heliocentric planet positions from mean Keplerian elements (Standish,
//! "Approximate Positions of the Planets", J2000 elements + centennial
//! rates) and a truncated Meeus lunar-distance series. Accuracy is on the
//! order of arcminutes / a few hundred km, which is far below the signal
//! level this tool looks for.
//!
//! All functions are pure: the same instant always yields bit-identical
//! distances.

use chrono::{DateTime, Utc};

pub const AU_KM: f64 = 149_597_870.7;

/// Julian day of a UTC instant.
pub fn julian_day(at: DateTime<Utc>) -> f64 {
    // Unix epoch 1970-01-01T00:00:00Z is JD 2440587.5.
    2_440_587.5 + at.timestamp() as f64 / 86_400.0
}

/// Julian centuries since J2000.0.
pub fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - 2_451_545.0) / 36_525.0
}

/// Mean Keplerian elements at J2000 plus per-century rates.
///
/// Angles in degrees, semi-major axis in AU.
struct Elements {
    a: (f64, f64),
    e: (f64, f64),
    incl: (f64, f64),
    mean_longitude: (f64, f64),
    perihelion_longitude: (f64, f64),
    node_longitude: (f64, f64),
}

const EARTH_MOON_BARY: Elements = Elements {
    a: (1.000_002_61, 0.000_005_62),
    e: (0.016_711_23, -0.000_043_92),
    incl: (-0.000_015_31, -0.012_946_68),
    mean_longitude: (100.464_571_66, 35_999.372_449_81),
    perihelion_longitude: (102.937_681_93, 0.323_273_64),
    node_longitude: (0.0, 0.0),
};

const MARS: Elements = Elements {
    a: (1.523_710_34, 0.000_018_47),
    e: (0.093_394_10, 0.000_078_82),
    incl: (1.849_691_42, -0.008_131_31),
    mean_longitude: (-4.553_432_05, 19_140.302_684_99),
    perihelion_longitude: (-23.943_629_59, 0.444_410_88),
    node_longitude: (49.559_538_91, -0.292_573_43),
};

fn at_epoch(term: (f64, f64), t: f64) -> f64 {
    term.0 + term.1 * t
}

fn normalize_degrees(mut deg: f64) -> f64 {
    deg %= 360.0;
    if deg < -180.0 {
        deg += 360.0;
    } else if deg > 180.0 {
        deg -= 360.0;
    }
    deg
}

/// Solve Kepler's equation `E - e sin E = M` by Newton iteration.
///
/// `m` in radians; converges in a handful of steps for planetary
/// eccentricities.
pub fn solve_kepler(m: f64, e: f64) -> f64 {
    let mut ecc_anomaly = if e < 0.8 { m } else { std::f64::consts::PI };
    for _ in 0..30 {
        let delta = (ecc_anomaly - e * ecc_anomaly.sin() - m) / (1.0 - e * ecc_anomaly.cos());
        ecc_anomaly -= delta;
        if delta.abs() < 1e-12 {
            break;
        }
    }
    ecc_anomaly
}

/// Heliocentric ecliptic-J2000 position in AU.
fn heliocentric_position(elements: &Elements, t: f64) -> [f64; 3] {
    let a = at_epoch(elements.a, t);
    let e = at_epoch(elements.e, t);
    let incl = at_epoch(elements.incl, t).to_radians();
    let mean_longitude = at_epoch(elements.mean_longitude, t);
    let perihelion = at_epoch(elements.perihelion_longitude, t);
    let node = at_epoch(elements.node_longitude, t);

    let arg_perihelion = (perihelion - node).to_radians();
    let node = node.to_radians();
    let mean_anomaly = normalize_degrees(mean_longitude - perihelion).to_radians();

    let ecc_anomaly = solve_kepler(mean_anomaly, e);

    // Position in the orbital plane, x' toward perihelion.
    let xp = a * (ecc_anomaly.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ecc_anomaly.sin();

    let (sin_w, cos_w) = arg_perihelion.sin_cos();
    let (sin_o, cos_o) = node.sin_cos();
    let (sin_i, cos_i) = incl.sin_cos();

    [
        (cos_w * cos_o - sin_w * sin_o * cos_i) * xp + (-sin_w * cos_o - cos_w * sin_o * cos_i) * yp,
        (cos_w * sin_o + sin_w * cos_o * cos_i) * xp + (-sin_w * sin_o + cos_w * cos_o * cos_i) * yp,
        (sin_w * sin_i) * xp + (cos_w * sin_i) * yp,
    ]
}

fn norm(v: [f64; 3]) -> f64 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

/// Earth–Sun distance in AU.
pub fn earth_sun_distance_au(jd: f64) -> f64 {
    let t = centuries_since_j2000(jd);
    norm(heliocentric_position(&EARTH_MOON_BARY, t))
}

/// Earth–Mars distance in AU.
pub fn earth_mars_distance_au(jd: f64) -> f64 {
    let t = centuries_since_j2000(jd);
    let earth = heliocentric_position(&EARTH_MOON_BARY, t);
    let mars = heliocentric_position(&MARS, t);
    norm([mars[0] - earth[0], mars[1] - earth[1], mars[2] - earth[2]])
}

/// Truncated Meeus lunar-distance series: (D, M, M', F, coefficient).
///
/// Coefficients in units of 0.001 km; terms with a solar mean-anomaly factor
/// are scaled by the eccentricity correction `E^|M|`.
const LUNAR_DISTANCE_TERMS: &[(i8, i8, i8, i8, f64)] = &[
    (0, 0, 1, 0, -20_905_355.0),
    (2, 0, -1, 0, -3_699_111.0),
    (2, 0, 0, 0, -2_955_968.0),
    (0, 0, 2, 0, -569_925.0),
    (0, 1, 0, 0, 48_888.0),
    (0, 0, 0, 2, -3_149.0),
    (2, 0, -2, 0, 246_158.0),
    (2, -1, -1, 0, -152_138.0),
    (2, 0, 1, 0, -170_733.0),
    (2, -1, 0, 0, -204_586.0),
    (0, 1, -1, 0, -129_620.0),
    (1, 0, 0, 0, 108_743.0),
    (0, 1, 1, 0, 104_755.0),
    (2, 0, 0, -2, 10_321.0),
    (0, 0, 1, -2, 79_661.0),
    (4, 0, -1, 0, -34_782.0),
    (0, 0, 3, 0, -23_210.0),
    (4, 0, -2, 0, -21_636.0),
    (2, 1, -1, 0, 24_208.0),
    (2, 1, 0, 0, 30_824.0),
    (1, 0, -1, 0, -8_379.0),
    (1, 1, 0, 0, -16_675.0),
    (2, -1, 1, 0, -12_831.0),
    (2, 0, 2, 0, -10_445.0),
    (4, 0, 0, 0, -11_650.0),
    (2, 0, -3, 0, 14_403.0),
];

/// Earth–Moon distance in AU (geocentric).
pub fn earth_moon_distance_au(jd: f64) -> f64 {
    let t = centuries_since_j2000(jd);

    // Mean elongation, solar/lunar mean anomalies, argument of latitude.
    let d = (297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t * t
        + t.powi(3) / 545_868.0
        - t.powi(4) / 113_065_000.0)
        .to_radians();
    let m = (357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t * t + t.powi(3) / 24_490_000.0)
        .to_radians();
    let mp = (134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t * t + t.powi(3) / 69_699.0
        - t.powi(4) / 14_712_000.0)
        .to_radians();
    let f = (93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t * t - t.powi(3) / 3_526_000.0
        + t.powi(4) / 863_310_000.0)
        .to_radians();

    let ecc = 1.0 - 0.002_516 * t - 0.000_007_4 * t * t;

    let mut distance_km = 385_000.56;
    for &(cd, cm, cmp, cf, coef) in LUNAR_DISTANCE_TERMS {
        let arg = f64::from(cd) * d + f64::from(cm) * m + f64::from(cmp) * mp + f64::from(cf) * f;
        let scale = match cm.abs() {
            0 => 1.0,
            1 => ecc,
            _ => ecc * ecc,
        };
        distance_km += coef * 1e-3 * scale * arg.cos();
    }

    distance_km / AU_KM
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn julian_day_of_j2000() {
        let j2000 = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert!((julian_day(j2000) - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn kepler_solver_circular_orbit() {
        for m in [0.0, 0.5, 1.0, 3.0] {
            assert!((solve_kepler(m, 0.0) - m).abs() < 1e-12);
        }
    }

    #[test]
    fn kepler_solver_satisfies_equation() {
        let m = 1.234;
        let e = 0.0934;
        let ecc_anomaly = solve_kepler(m, e);
        assert!((ecc_anomaly - e * ecc_anomaly.sin() - m).abs() < 1e-10);
    }

    #[test]
    fn earth_sun_distance_is_near_one_au() {
        // Perihelion in early January, aphelion in early July.
        let jan = julian_day(Utc.with_ymd_and_hms(2021, 1, 4, 9, 0, 0).unwrap());
        let jul = julian_day(Utc.with_ymd_and_hms(2021, 7, 5, 9, 0, 0).unwrap());
        let r_jan = earth_sun_distance_au(jan);
        let r_jul = earth_sun_distance_au(jul);
        assert!((0.980..0.987).contains(&r_jan), "perihelion {r_jan}");
        assert!((1.013..1.020).contains(&r_jul), "aphelion {r_jul}");
    }

    #[test]
    fn earth_mars_distance_is_plausible() {
        // Mars opposition 2020-10-13: roughly 0.41-0.42 AU.
        let jd = julian_day(Utc.with_ymd_and_hms(2020, 10, 13, 9, 0, 0).unwrap());
        let r = earth_mars_distance_au(jd);
        assert!((0.38..0.46).contains(&r), "opposition distance {r}");
    }

    #[test]
    fn moon_distance_stays_in_physical_band() {
        // Perigee ~356 500 km, apogee ~406 700 km.
        for day in [0, 7, 14, 21, 100, 1000] {
            let jd = 2_459_215.875 + f64::from(day); // 2021-01-01T09:00Z onward
            let km = earth_moon_distance_au(jd) * AU_KM;
            assert!((355_000.0..408_500.0).contains(&km), "day {day}: {km} km");
        }
    }

    #[test]
    fn distances_are_bit_identical_across_calls() {
        let jd = 2_459_215.875;
        assert_eq!(
            earth_mars_distance_au(jd).to_bits(),
            earth_mars_distance_au(jd).to_bits()
        );
        assert_eq!(
            earth_moon_distance_au(jd).to_bits(),
            earth_moon_distance_au(jd).to_bits()
        );
    }
}
