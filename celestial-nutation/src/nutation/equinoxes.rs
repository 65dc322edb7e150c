//! Complementary terms of the equation of the equinoxes (IAU 2000).
//!
//! The equation of the equinoxes is Δψ cos ε plus a small correction series,
//! the complementary terms (CT), which this module evaluates:
//!
//! ```text
//! CT = Σ (S sin(arg) + C cos(arg))  +  t · (-0.87 µas) sin Ω
//! ```
//!
//! over 33 periodic terms. The CT stays below 3 mas for centuries around
//! J2000.0.
//!
//! Unlike the nutation series, the luni-solar arguments here are built as
//! `poly(t) ″ + frac(n t) · 2π`: the whole-revolution part of each mean
//! motion is split off and reduced with a floor-based fraction, which keeps
//! the polynomial small. Planetary longitudes are not reduced.
//!
//! # References
//!
//! - IERS Conventions (2003), Chapter 5, Table 5.2e
//! - Capitaine, N., Wallace, P. T. & McCarthy, D. D. (2003), A&A 406, 1135
//! - SOFA Library: `iauEect00`

use crate::constants::{ARCSEC_TO_RAD, TWOPI};
use crate::math::{frac_floor, sincos};
use crate::utils::jd_to_centuries;

#[derive(Clone, Copy)]
struct SeriesTerm {
    /// Multipliers of `l, l', F, D, Ω, L_Ve, L_E, pA`.
    coeffs: [i8; 8],
    sine: f64,
    cosine: f64,
}

const fn term(coeffs: [i8; 8], sine: f64, cosine: f64) -> SeriesTerm {
    SeriesTerm {
        coeffs,
        sine,
        cosine,
    }
}

/// t⁰ terms, amplitudes in arcseconds.
#[rustfmt::skip]
const E0: [SeriesTerm; 33] = [
    // 1-10
    term([0, 0, 0,  0,  1,  0,  0,  0], 2640.96e-6, -0.39e-6),
    term([0, 0, 0,  0,  2,  0,  0,  0],   63.52e-6, -0.02e-6),
    term([0, 0, 2, -2,  3,  0,  0,  0],   11.75e-6,  0.01e-6),
    term([0, 0, 2, -2,  1,  0,  0,  0],   11.21e-6,  0.01e-6),
    term([0, 0, 2, -2,  2,  0,  0,  0],   -4.55e-6,  0.00e-6),
    term([0, 0, 2,  0,  3,  0,  0,  0],    2.02e-6,  0.00e-6),
    term([0, 0, 2,  0,  1,  0,  0,  0],    1.98e-6,  0.00e-6),
    term([0, 0, 0,  0,  3,  0,  0,  0],   -1.72e-6,  0.00e-6),
    term([0, 1, 0,  0,  1,  0,  0,  0],   -1.41e-6, -0.01e-6),
    term([0, 1, 0,  0, -1,  0,  0,  0],   -1.26e-6, -0.01e-6),
    // 11-20
    term([1, 0, 0,  0, -1,  0,  0,  0],   -0.63e-6,  0.00e-6),
    term([1, 0, 0,  0,  1,  0,  0,  0],   -0.63e-6,  0.00e-6),
    term([0, 1, 2, -2,  3,  0,  0,  0],    0.46e-6,  0.00e-6),
    term([0, 1, 2, -2,  1,  0,  0,  0],    0.45e-6,  0.00e-6),
    term([0, 0, 4, -4,  4,  0,  0,  0],    0.36e-6,  0.00e-6),
    term([0, 0, 1, -1,  1, -8, 12,  0],   -0.24e-6, -0.12e-6),
    term([0, 0, 2,  0,  0,  0,  0,  0],    0.32e-6,  0.00e-6),
    term([0, 0, 2,  0,  2,  0,  0,  0],    0.28e-6,  0.00e-6),
    term([1, 0, 2,  0,  3,  0,  0,  0],    0.27e-6,  0.00e-6),
    term([1, 0, 2,  0,  1,  0,  0,  0],    0.26e-6,  0.00e-6),
    // 21-30
    term([0, 0, 2, -2,  0,  0,  0,  0],   -0.21e-6,  0.00e-6),
    term([0, 1, -2, 2, -3,  0,  0,  0],    0.19e-6,  0.00e-6),
    term([0, 1, -2, 2, -1,  0,  0,  0],    0.18e-6,  0.00e-6),
    term([0, 0, 0,  0,  0,  8, -13, -1],  -0.10e-6,  0.05e-6),
    term([0, 0, 0,  2,  0,  0,  0,  0],    0.15e-6,  0.00e-6),
    term([2, 0, -2, 0, -1,  0,  0,  0],   -0.14e-6,  0.00e-6),
    term([1, 0, 0, -2,  1,  0,  0,  0],    0.14e-6,  0.00e-6),
    term([0, 1, 2, -2,  2,  0,  0,  0],   -0.14e-6,  0.00e-6),
    term([1, 0, 0, -2, -1,  0,  0,  0],    0.14e-6,  0.00e-6),
    term([0, 0, 4, -2,  4,  0,  0,  0],    0.13e-6,  0.00e-6),
    // 31-33
    term([0, 0, 2, -2,  4,  0,  0,  0],   -0.11e-6,  0.00e-6),
    term([1, 0, -2, 0, -3,  0,  0,  0],    0.11e-6,  0.00e-6),
    term([1, 0, -2, 0, -1,  0,  0,  0],    0.11e-6,  0.00e-6),
];

/// The single t¹ term, on Ω alone.
const E1: SeriesTerm = term([0, 0, 0, 0, 1, 0, 0, 0], -0.87e-6, 0.00e-6);

/// Complementary terms of the equation of the equinoxes, in radians, for a
/// two-part Julian Date (TT).
///
/// # Example
///
/// ```
/// use celestial_nutation::nutation::equation_of_the_equinoxes_complementary_terms;
///
/// let ct = equation_of_the_equinoxes_complementary_terms(2400000.5, 53736.0);
/// assert!((ct - 0.2046085004885125264e-8).abs() < 1e-20);
/// ```
pub fn equation_of_the_equinoxes_complementary_terms(jd1: f64, jd2: f64) -> f64 {
    complementary_terms(jd_to_centuries(jd1, jd2))
}

/// Same as [`equation_of_the_equinoxes_complementary_terms`] for `t` Julian
/// centuries since J2000.0.
pub fn complementary_terms(t: f64) -> f64 {
    let fa = arguments(t);
    let s0 = sum_terms(&E0, &fa);
    let s1 = sum_terms(std::slice::from_ref(&E1), &fa);
    (s0 + s1 * t) * ARCSEC_TO_RAD
}

#[inline]
fn sum_terms(terms: &[SeriesTerm], fa: &[f64; 8]) -> f64 {
    let mut w = 0.0;
    for term in terms {
        let mut arg = 0.0;
        for (&n, a) in term.coeffs.iter().zip(fa.iter()) {
            arg += f64::from(n) * a;
        }
        let (s, c) = sincos(arg);
        w += term.sine * s + term.cosine * c;
    }
    w
}

fn arguments(t: f64) -> [f64; 8] {
    [
        mean_anomaly_moon(t),
        mean_anomaly_sun(t),
        mean_longitude_moon_minus_node(t),
        mean_elongation_moon_sun(t),
        mean_longitude_ascending_node_moon(t),
        3.176146697 + 1021.3285546211 * t,
        1.753470314 + 628.3075849991 * t,
        (0.024381750 + 0.00000538691 * t) * t,
    ]
}

/// `poly` in arcseconds plus `revolutions · t` whole turns, in radians.
#[inline]
fn split_argument(poly: f64, revolutions: f64, t: f64) -> f64 {
    poly * ARCSEC_TO_RAD + frac_floor(revolutions * t) * TWOPI
}

fn mean_anomaly_moon(t: f64) -> f64 {
    split_argument(
        485868.249036 + t * (715923.2178 + t * (31.8792 + t * (0.051635 + t * (-0.00024470)))),
        1325.0,
        t,
    )
}

fn mean_anomaly_sun(t: f64) -> f64 {
    split_argument(
        1287104.793048 + t * (1292581.0481 + t * (-0.5532 + t * (0.000136 + t * (-0.00001149)))),
        99.0,
        t,
    )
}

fn mean_longitude_moon_minus_node(t: f64) -> f64 {
    split_argument(
        335779.526232 + t * (295262.8478 + t * (-12.7512 + t * (-0.001037 + t * 0.00000417))),
        1342.0,
        t,
    )
}

fn mean_elongation_moon_sun(t: f64) -> f64 {
    split_argument(
        1072260.703692 + t * (1105601.2090 + t * (-6.3706 + t * (0.006593 + t * (-0.00003169)))),
        1236.0,
        t,
    )
}

fn mean_longitude_ascending_node_moon(t: f64) -> f64 {
    split_argument(
        450160.398036 + t * (-482890.5431 + t * (7.4722 + t * (0.007702 + t * (-0.00005939)))),
        -5.0,
        t,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sofa_eect00_reference() {
        let ct = equation_of_the_equinoxes_complementary_terms(2400000.5, 53736.0);
        assert!(
            (ct - 0.2046085004885125264e-8).abs() < 1e-20,
            "complementary terms {:e}",
            ct
        );
    }

    #[test]
    fn test_magnitude_stays_small() {
        let limit = 3e-3 * ARCSEC_TO_RAD;
        for t in [-2.0, -0.5, 0.0, 0.25, 1.0, 2.0] {
            let ct = complementary_terms(t);
            assert!(ct.abs() < limit, "t = {}: {:e}", t, ct);
        }
    }

    #[test]
    fn test_whole_revolutions_split_off() {
        // frac(n t) only differs from n t by whole turns.
        let t = 0.37;
        let direct = (485868.249036
            + t * (715923.2178 + t * (31.8792 + t * (0.051635 + t * (-0.00024470)))))
            * ARCSEC_TO_RAD
            + 1325.0 * t * TWOPI;
        let split = mean_anomaly_moon(t);
        let turns = (direct - split) / TWOPI;
        assert!((turns - turns.round()).abs() < 1e-9);
    }

    #[test]
    fn test_secular_term_vanishes_at_epoch() {
        let fa = arguments(0.0);
        let s0 = sum_terms(&E0, &fa);
        assert_eq!(complementary_terms(0.0), s0 * ARCSEC_TO_RAD);
    }
}
