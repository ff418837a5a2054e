pub mod hysteresis;
pub mod lpf;

#[cfg(not(any(test, feature = "std")))]
use micromath::F32Ext;

pub use hysteresis::Hysteresis;
pub use lpf::LPF;

/// Blend factor of a first order lag running at `rate` over `dt` seconds
#[inline]
pub fn alpha(rate: f32, dt: f32) -> f32 {
    1.0 - (-rate * dt).exp()
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Moves `value` toward `target` with the frame-rate independent exponential approach
#[inline]
pub fn approach(value: f32, target: f32, rate: f32, dt: f32) -> f32 {
    lerp(value, target, alpha(rate, dt))
}

/// Shortest signed difference `to - from` in degrees, within [-180, 180]
pub fn angle_error(to: f32, from: f32) -> f32 {
    let mut error = to - from;
    if error > 180.0 {
        error -= 360.0;
    }
    if error < -180.0 {
        error += 360.0;
    }
    error
}

/// Wraps into [0, 360), non-finite headings read as north
pub fn wrap_heading(heading: f32) -> f32 {
    if !heading.is_finite() {
        return 0.0;
    }
    let heading = heading % 360.0;
    let heading = if heading < 0.0 { heading + 360.0 } else { heading };
    // -1e-6 + 360 rounds up to 360
    if heading >= 360.0 {
        0.0
    } else {
        heading
    }
}
