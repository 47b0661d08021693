use kurbo::Vec2;

const H: f64 = 0.5;
const R3_2: f64 = 0.866_025_403_784_438_6; // sqrt(3) / 2
const R2_2: f64 = 0.707_106_781_186_547_6; // sqrt(2) / 2

/// Unit vectors at 45 degree steps, clockwise in SVG space starting at +x.
///
/// Tables instead of `sin`/`cos`: libm results are not guaranteed bit-identical across
/// platforms, and pattern output must be.
pub(crate) const DIR8: [Vec2; 8] = [
    Vec2::new(1.0, 0.0),
    Vec2::new(R2_2, R2_2),
    Vec2::new(0.0, 1.0),
    Vec2::new(-R2_2, R2_2),
    Vec2::new(-1.0, 0.0),
    Vec2::new(-R2_2, -R2_2),
    Vec2::new(0.0, -1.0),
    Vec2::new(R2_2, -R2_2),
];

/// Unit vectors at 30 degree steps.
pub(crate) const DIR12: [Vec2; 12] = [
    Vec2::new(1.0, 0.0),
    Vec2::new(R3_2, H),
    Vec2::new(H, R3_2),
    Vec2::new(0.0, 1.0),
    Vec2::new(-H, R3_2),
    Vec2::new(-R3_2, H),
    Vec2::new(-1.0, 0.0),
    Vec2::new(-R3_2, -H),
    Vec2::new(-H, -R3_2),
    Vec2::new(0.0, -1.0),
    Vec2::new(H, -R3_2),
    Vec2::new(R3_2, -H),
];

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Canonical decimal form used for every number written into a document:
/// at most two fractional digits, no trailing zeros, never `-0`.
pub(crate) fn fmt_num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let rounded = (v * 100.0).round() / 100.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    let mut s = format!("{rounded:.2}");
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_num_is_canonical() {
        assert_eq!(fmt_num(0.0), "0");
        assert_eq!(fmt_num(-0.001), "0");
        assert_eq!(fmt_num(12.0), "12");
        assert_eq!(fmt_num(12.5), "12.5");
        assert_eq!(fmt_num(3.14159), "3.14");
        assert_eq!(fmt_num(-7.256), "-7.26");
        assert_eq!(fmt_num(f64::NAN), "0");
    }

    #[test]
    fn direction_tables_are_unit_length() {
        for d in DIR8.iter().chain(DIR12.iter()) {
            assert!((d.hypot() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
    }
}
