use nalgebra::{Vector3, Vector6};

// ---------------------------------------------------------------------------
// Two-body point-mass model
// ---------------------------------------------------------------------------

/// Point-mass gravitational acceleration: `-mu * r / |r|^3` (km/s^2).
pub fn two_body_accel(r: &Vector3<f64>, mu: f64) -> Vector3<f64> {
    let rn = r.norm();
    -mu / (rn * rn * rn) * r
}

/// Two-body equations of motion as a first-order ODE right-hand-side.
///
/// State layout is `[rx, ry, rz, vx, vy, vz]`; the derivative is
/// `[vx, vy, vz, ax, ay, az]`.
pub fn two_body_deriv(y: &Vector6<f64>, mu: f64) -> Vector6<f64> {
    let r = Vector3::new(y[0], y[1], y[2]);
    let a = two_body_accel(&r, mu);
    Vector6::new(y[3], y[4], y[5], a.x, a.y, a.z)
}

/// Specific orbital energy `|v|^2/2 - mu/|r|` (km^2/s^2).
///
/// Negative for bound orbits, non-negative for escape trajectories.
pub fn specific_energy(y: &Vector6<f64>, mu: f64) -> f64 {
    let r = Vector3::new(y[0], y[1], y[2]).norm();
    let v2 = y[3] * y[3] + y[4] * y[4] + y[5] * y[5];
    0.5 * v2 - mu / r
}

/// Orbital period derived from the state's energy (s).
///
/// Returns `None` for parabolic/hyperbolic states (energy >= 0), where no
/// finite period exists. Callers needing a time span for an unbound
/// trajectory must supply their own.
pub fn period(y: &Vector6<f64>, mu: f64) -> Option<f64> {
    let eps = specific_energy(y, mu);
    if eps >= 0.0 {
        return None;
    }
    let sma = -mu / (2.0 * eps);
    Some(2.0 * std::f64::consts::PI * (sma.powi(3) / mu).sqrt())
}
