/// Convert HSL to RGB. Hue wraps into [0, 1); saturation and lightness
/// are clamped. Matches the usual graphics-library formulation.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    let h = h.rem_euclid(1.0);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    if s == 0.0 {
        return [l, l, l];
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    [
        hue_channel(p, q, h + 1.0 / 3.0),
        hue_channel(p, q, h),
        hue_channel(p, q, h - 1.0 / 3.0),
    ]
}

fn hue_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Stress gradient: blue (hue 0.6) at zero normalized stress through to
/// red (hue 0.0) at full stress, full saturation, half lightness.
pub fn stress_color(normalized: f32) -> [f32; 3] {
    hsl_to_rgb(0.6 * (1.0 - normalized), 1.0, 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: [f32; 3], expected: [f32; 3]) {
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!((a - e).abs() < 1e-5, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn full_stress_is_pure_red() {
        assert_close(stress_color(1.0), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn zero_stress_is_blue() {
        // hue 0.6 at s=1, l=0.5
        assert_close(stress_color(0.0), [0.0, 0.4, 1.0]);
    }

    #[test]
    fn midpoint_stress_is_green_ish() {
        let [r, g, b] = stress_color(0.5);
        assert!(g > r);
        assert!(g > b);
    }

    #[test]
    fn hue_wraps() {
        assert_close(hsl_to_rgb(1.0, 1.0, 0.5), hsl_to_rgb(0.0, 1.0, 0.5));
        assert_close(hsl_to_rgb(-0.4, 1.0, 0.5), hsl_to_rgb(0.6, 1.0, 0.5));
    }

    #[test]
    fn zero_saturation_is_gray() {
        assert_close(hsl_to_rgb(0.3, 0.0, 0.25), [0.25, 0.25, 0.25]);
    }

    #[test]
    fn primary_hues() {
        assert_close(hsl_to_rgb(0.0, 1.0, 0.5), [1.0, 0.0, 0.0]);
        assert_close(hsl_to_rgb(1.0 / 3.0, 1.0, 0.5), [0.0, 1.0, 0.0]);
        assert_close(hsl_to_rgb(2.0 / 3.0, 1.0, 0.5), [0.0, 0.0, 1.0]);
    }
}
