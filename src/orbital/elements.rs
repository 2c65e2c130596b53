use crate::frames::{rotation_x, rotation_z};
use crate::orbital::propagator::{state_from_rv, StateVector};
use nalgebra::Vector3;

// ---------------------------------------------------------------------------
// Classical orbital elements
// ---------------------------------------------------------------------------

/// Classical Keplerian orbital elements, angles in radians.
///
/// `ecc >= 1` is a legal hyperbolic/parabolic input: the conversion below
/// and the propagator both handle open trajectories, only the period is
/// undefined for them.
#[derive(Debug, Clone, Copy)]
pub struct KeplerianElements {
    pub sma: f64,  // semi-major axis, km
    pub ecc: f64,  // eccentricity
    pub inc: f64,  // inclination, rad
    pub ta: f64,   // true anomaly, rad
    pub aop: f64,  // argument of periapsis, rad
    pub raan: f64, // right ascension of ascending node, rad
}

impl KeplerianElements {
    /// Build from angles in degrees, the caller-facing boundary where
    /// degree inputs are converted. Everything downstream is radians.
    pub fn from_degrees(
        sma: f64,
        ecc: f64,
        inc_deg: f64,
        ta_deg: f64,
        aop_deg: f64,
        raan_deg: f64,
    ) -> Self {
        KeplerianElements {
            sma,
            ecc,
            inc: inc_deg.to_radians(),
            ta: ta_deg.to_radians(),
            aop: aop_deg.to_radians(),
            raan: raan_deg.to_radians(),
        }
    }

    /// Convert to a Cartesian state vector in the inertial frame.
    ///
    /// Position and velocity are built in the perifocal frame (x-axis
    /// toward periapsis) and rotated out via `Rz(raan)·Rx(inc)·Rz(aop)`.
    pub fn to_state_vector(&self, mu: f64) -> StateVector {
        let (sta, cta) = self.ta.sin_cos();
        let p = self.sma * (1.0 - self.ecc * self.ecc); // semi-latus rectum
        let r_norm = p / (1.0 + self.ecc * cta);

        let r_perif = Vector3::new(cta, sta, 0.0) * r_norm;
        let v_perif = Vector3::new(-sta, self.ecc + cta, 0.0) * (mu / p).sqrt();

        let rot = rotation_z(self.raan) * rotation_x(self.inc) * rotation_z(self.aop);
        state_from_rv(&(rot * r_perif), &(rot * v_perif))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::EARTH;
    use crate::orbital::propagator::{position, velocity};
    use crate::physics::gravity::{period, specific_energy};

    #[test]
    fn circular_equatorial_lies_on_x_axis() {
        let coes = KeplerianElements {
            sma: 7000.0,
            ecc: 0.0,
            inc: 0.0,
            ta: 0.0,
            aop: 0.0,
            raan: 0.0,
        };
        let y = coes.to_state_vector(EARTH.mu);
        let v_circ = (EARTH.mu / 7000.0).sqrt();

        assert!((position(&y) - Vector3::new(7000.0, 0.0, 0.0)).norm() < 1e-9);
        assert!((velocity(&y) - Vector3::new(0.0, v_circ, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn period_round_trip_matches_keplers_third_law() {
        // coes -> state -> period must reproduce 2*pi*sqrt(a^3/mu).
        let coes = KeplerianElements::from_degrees(8500.0, 0.2, 60.0, 0.0, 50.0, 40.0);
        let y = coes.to_state_vector(EARTH.mu);

        let expected = 2.0 * std::f64::consts::PI * (8500.0_f64.powi(3) / EARTH.mu).sqrt();
        let t = period(&y, EARTH.mu).expect("elliptical orbit has a period");
        assert!(
            ((t - expected) / expected).abs() < 1e-9,
            "period {t:.3} s vs analytic {expected:.3} s"
        );
    }

    #[test]
    fn inclination_tilts_angular_momentum() {
        let coes = KeplerianElements::from_degrees(8000.0, 0.1, 63.4, 10.0, 270.0, 80.0);
        let y = coes.to_state_vector(EARTH.mu);
        let h = position(&y).cross(&velocity(&y));

        let inc = (h.z / h.norm()).acos();
        assert!(
            (inc - 63.4_f64.to_radians()).abs() < 1e-9,
            "recovered inclination {:.4} deg",
            inc.to_degrees()
        );
    }

    #[test]
    fn radius_matches_conic_equation() {
        let coes = KeplerianElements::from_degrees(8500.0, 0.2, 60.0, 35.0, 50.0, 40.0);
        let y = coes.to_state_vector(EARTH.mu);

        let p = 8500.0 * (1.0 - 0.2 * 0.2);
        let expected = p / (1.0 + 0.2 * 35.0_f64.to_radians().cos());
        assert!((position(&y).norm() - expected).abs() < 1e-9);
    }

    #[test]
    fn from_degrees_converts_angles_only() {
        let coes = KeplerianElements::from_degrees(8500.0, 0.2, 60.0, 0.0, 50.0, 40.0);
        assert_eq!(coes.sma, 8500.0);
        assert_eq!(coes.ecc, 0.2);
        assert!((coes.inc - 60.0_f64.to_radians()).abs() < 1e-15);
        assert!((coes.aop - 50.0_f64.to_radians()).abs() < 1e-15);
        assert!((coes.raan - 40.0_f64.to_radians()).abs() < 1e-15);
    }

    #[test]
    fn hyperbolic_elements_produce_positive_energy_state() {
        // Negative sma with ecc > 1 keeps p positive; the state must come
        // out on an escape trajectory, not be rejected.
        let coes = KeplerianElements::from_degrees(-10000.0, 1.5, 20.0, 0.0, 0.0, 0.0);
        let y = coes.to_state_vector(EARTH.mu);
        assert!(specific_energy(&y, EARTH.mu) > 0.0);
        assert_eq!(period(&y, EARTH.mu), None);
    }
}
