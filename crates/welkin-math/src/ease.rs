//! Scalar easing and blending helpers shared by the sky, celestial, and
//! reflection crates.
//!
//! `smoothstep` accepts reversed edges (`edge0 > edge1`) and then eases
//! downward, matching how the gradient renderer shapes falloffs from both
//! sides of a threshold.

/// Hermite interpolation between `edge0` and `edge1`, clamped to `[0, 1]`.
///
/// Reversed edges are allowed and produce the mirrored (decreasing) curve.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// 1.0 when `x >= edge`, else 0.0.
pub fn step(edge: f32, x: f32) -> f32 {
    if x >= edge { 1.0 } else { 0.0 }
}

/// Linear blend from `a` to `b` by `t`.
pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Schlick approximation of Fresnel reflectance.
///
/// `cos_angle` is the cosine of the angle between the view ray and the
/// surface normal, pre-clamped by the caller; `base_reflectance` is the
/// reflectance at normal incidence (0.02–0.05 for water and wet stone).
pub fn fresnel_schlick(cos_angle: f32, base_reflectance: f32) -> f32 {
    let c = (1.0 - cos_angle).clamp(0.0, 1.0);
    let c2 = c * c;
    base_reflectance + (1.0 - base_reflectance) * c2 * c2 * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smoothstep_clamps_outside_edges() {
        assert_eq!(smoothstep(0.0, 1.0, -5.0), 0.0);
        assert_eq!(smoothstep(0.0, 1.0, 5.0), 1.0);
    }

    #[test]
    fn test_smoothstep_midpoint() {
        let mid = smoothstep(0.0, 1.0, 0.5);
        assert!(
            (mid - 0.5).abs() < 1e-6,
            "Hermite curve should pass through 0.5 at the midpoint, got {mid}"
        );
    }

    #[test]
    fn test_smoothstep_reversed_edges_decrease() {
        let near = smoothstep(0.6, 0.4, 0.45);
        let far = smoothstep(0.6, 0.4, 0.55);
        assert!(
            near > far,
            "Reversed edges should ease downward: f(0.45)={near} f(0.55)={far}"
        );
        assert_eq!(smoothstep(0.6, 0.4, 0.3), 1.0);
        assert_eq!(smoothstep(0.6, 0.4, 0.7), 0.0);
    }

    #[test]
    fn test_step_threshold() {
        assert_eq!(step(0.0, -0.001), 0.0);
        assert_eq!(step(0.0, 0.0), 1.0);
        assert_eq!(step(0.0, 0.001), 1.0);
    }

    #[test]
    fn test_mix_endpoints() {
        assert_eq!(mix(2.0, 6.0, 0.0), 2.0);
        assert_eq!(mix(2.0, 6.0, 1.0), 6.0);
        assert_eq!(mix(2.0, 6.0, 0.5), 4.0);
    }

    #[test]
    fn test_fresnel_grazing_angle_reflects_fully() {
        let f = fresnel_schlick(0.0, 0.03);
        assert!(
            (f - 1.0).abs() < 1e-6,
            "Grazing incidence should approach full reflectance, got {f}"
        );
    }

    #[test]
    fn test_fresnel_normal_incidence_is_base() {
        let f = fresnel_schlick(1.0, 0.03);
        assert!(
            (f - 0.03).abs() < 1e-6,
            "Normal incidence should equal base reflectance, got {f}"
        );
    }

    #[test]
    fn test_fresnel_stays_in_unit_range() {
        for i in 0..=100 {
            let cos_angle = i as f32 / 100.0;
            let f = fresnel_schlick(cos_angle, 0.03);
            assert!(
                (0.0..=1.0).contains(&f),
                "Fresnel at cos={cos_angle} left [0, 1]: {f}"
            );
        }
    }
}
