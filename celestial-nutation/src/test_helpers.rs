//! Float assertions shared by unit and integration tests.

use crate::nutation::NutationResult;

/// Maps an `f64` onto `u64` so that integer order matches float order.
#[inline]
pub fn f64_to_ordered_u64(x: f64) -> u64 {
    let bits = x.to_bits();
    if bits & 0x8000_0000_0000_0000 != 0 {
        !bits
    } else {
        bits | 0x8000_0000_0000_0000
    }
}

#[inline]
pub fn ulp_diff(a: f64, b: f64) -> u64 {
    f64_to_ordered_u64(a).abs_diff(f64_to_ordered_u64(b))
}

#[track_caller]
pub fn assert_ulp_le(a: f64, b: f64, max_ulp: u64, ctx: &str) {
    if a == 0.0 && b == 0.0 {
        return;
    }
    assert!(
        a.is_finite() && b.is_finite(),
        "non-finite value in {}",
        ctx
    );
    let d = ulp_diff(a, b);
    assert!(
        d <= max_ulp,
        "{}: ULP={} exceeds {}, a={} (0x{:016x}) b={} (0x{:016x})",
        ctx,
        d,
        max_ulp,
        a,
        a.to_bits(),
        b,
        b.to_bits()
    );
}

#[track_caller]
pub fn assert_abs_le(actual: f64, expected: f64, tolerance: f64, ctx: &str) {
    let d = (actual - expected).abs();
    assert!(
        d <= tolerance,
        "{}: |{:e} - {:e}| = {:e} exceeds {:e}",
        ctx,
        actual,
        expected,
        d,
        tolerance
    );
}

/// Checks both angles of a nutation result against reference radians.
#[track_caller]
pub fn assert_nutation_close(
    result: &NutationResult,
    delta_psi: f64,
    delta_eps: f64,
    tolerance: f64,
    ctx: &str,
) {
    assert_abs_le(result.delta_psi, delta_psi, tolerance, &format!("{} Δψ", ctx));
    assert_abs_le(result.delta_eps, delta_eps, tolerance, &format!("{} Δε", ctx));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacent_floats_are_one_ulp_apart() {
        let x = 1.0_f64;
        assert_eq!(ulp_diff(x, f64::from_bits(x.to_bits() + 1)), 1);
        assert_eq!(ulp_diff(-0.0, 0.0), 1);
        assert_eq!(ulp_diff(-1.0, -1.0), 0);
    }

    #[test]
    fn test_order_is_preserved_across_zero() {
        assert!(f64_to_ordered_u64(-1.0) < f64_to_ordered_u64(-0.0));
        assert!(f64_to_ordered_u64(0.0) < f64_to_ordered_u64(1e-300));
    }

    #[test]
    #[should_panic(expected = "exceeds")]
    fn test_abs_tolerance_failure_reports() {
        assert_abs_le(1.0, 1.1, 1e-3, "demo");
    }
}
