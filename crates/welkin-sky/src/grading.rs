//! Output color grading: tone curve, exposure, saturation, gamma, tint.
//!
//! Applied once by the frame compositor after all sky/celestial/reflection
//! layers are composited; the sky math itself stays in linear HDR.

use glam::Vec3;

use welkin_config::{GradingConfig, ToneMapCurve};

const LUMA: Vec3 = Vec3::new(0.2126, 0.7152, 0.0722);

/// Extended Reinhard white point: inputs at or above this map to pure white.
const WHITE_POINT: f32 = 2.0;

/// Grade an HDR linear color for display.
pub fn grade(color: Vec3, cfg: &GradingConfig) -> Vec3 {
    let exposed = color.max(Vec3::ZERO) * cfg.exposure;
    let mut mapped = tonemap(exposed, cfg.tonemap);

    if let Some(tint) = cfg.tint {
        let lum = mapped.dot(LUMA).clamp(0.0, 1.0);
        mapped *= Vec3::from(tint.low).lerp(Vec3::from(tint.high), lum);
    }

    let lum = mapped.dot(LUMA);
    let saturated = Vec3::splat(lum).lerp(mapped, cfg.saturation);

    saturated.max(Vec3::ZERO).powf(1.0 / cfg.gamma)
}

fn tonemap(c: Vec3, curve: ToneMapCurve) -> Vec3 {
    match curve {
        ToneMapCurve::Exponential => Vec3::ONE - (-c).exp(),
        ToneMapCurve::Reinhard => c / (Vec3::ONE + c),
        ToneMapCurve::ExtendedReinhard => {
            let w2 = WHITE_POINT * WHITE_POINT;
            ((c * (Vec3::ONE + c / w2)) / (Vec3::ONE + c)).min(Vec3::ONE)
        }
        ToneMapCurve::Aces => {
            let num = c * (2.51 * c + Vec3::splat(0.03));
            let den = c * (2.43 * c + Vec3::splat(0.59)) + Vec3::splat(0.14);
            (num / den).clamp(Vec3::ZERO, Vec3::ONE)
        }
    }
}
