use nalgebra::{Rotation3, Vector3};

use crate::bodies::CentralBody;
use crate::orbital::propagator::{position, Trajectory};

// ---------------------------------------------------------------------------
// Principal-axis rotations
// ---------------------------------------------------------------------------

/// Rotation by `a` radians about the x-axis.
pub fn rotation_x(a: f64) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Vector3::x_axis(), a)
}

/// Rotation by `a` radians about the y-axis.
pub fn rotation_y(a: f64) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Vector3::y_axis(), a)
}

/// Rotation by `a` radians about the z-axis.
pub fn rotation_z(a: f64) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Vector3::z_axis(), a)
}

// ---------------------------------------------------------------------------
// Body-fixed frames and ground tracks
// ---------------------------------------------------------------------------

/// Inertial → body-fixed rotation after `et` seconds of spin:
/// `Rz(-omega * et)`.
///
/// Spin about the polar axis only; precession, nutation, and polar motion
/// are not modeled.
pub fn inertial_to_body_fixed(et: f64, omega: f64) -> Rotation3<f64> {
    rotation_z(-omega * et)
}

/// Sub-satellite point in planetocentric coordinates.
#[derive(Debug, Clone, Copy)]
pub struct GroundTrackPoint {
    pub radius: f64,  // km
    pub lon_deg: f64, // planetocentric longitude, deg, positive east
    pub lat_deg: f64, // planetocentric latitude, deg
}

/// Convert a body-fixed Cartesian position to radius/longitude/latitude,
/// degrees at the output boundary.
pub fn cartesian_to_latlon(r: &Vector3<f64>) -> GroundTrackPoint {
    let radius = r.norm();
    GroundTrackPoint {
        radius,
        lon_deg: r.y.atan2(r.x).to_degrees(),
        lat_deg: (r.z / radius).asin().to_degrees(),
    }
}

/// Ground track of a trajectory over its central body.
///
/// The body-fixed rotation is evaluated at each sample's own elapsed time,
/// so the planet rotates under the trajectory as simulated time advances.
pub fn ground_track(traj: &Trajectory, body: &CentralBody) -> Vec<GroundTrackPoint> {
    traj.states
        .iter()
        .zip(&traj.ets)
        .map(|(y, &et)| {
            let r_bf = inertial_to_body_fixed(et, body.omega) * position(y);
            cartesian_to_latlon(&r_bf)
        })
        .collect()
}

/// `n` evenly spaced values covering `[start, stop]` inclusive.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    let step = (stop - start) / (n - 1) as f64;
    (0..n).map(|i| start + step * i as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::EARTH;
    use crate::orbital::propagator::{propagate_orbit, StateVector};
    use crate::physics::gravity::period;

    #[test]
    fn body_fixed_rotation_is_identity_at_epoch() {
        let rot = inertial_to_body_fixed(0.0, EARTH.omega);
        let r = Vector3::new(7000.0, -1234.0, 42.0);
        assert!((rot * r - r).norm() < 1e-12);
    }

    #[test]
    fn latlon_spot_checks() {
        let p = cartesian_to_latlon(&Vector3::new(7000.0, 0.0, 0.0));
        assert!((p.radius - 7000.0).abs() < 1e-12);
        assert!(p.lon_deg.abs() < 1e-12 && p.lat_deg.abs() < 1e-12);

        let p = cartesian_to_latlon(&Vector3::new(0.0, 7000.0, 0.0));
        assert!((p.lon_deg - 90.0).abs() < 1e-12);

        let p = cartesian_to_latlon(&Vector3::new(0.0, 0.0, 7000.0));
        assert!((p.lat_deg - 90.0).abs() < 1e-9);

        let p = cartesian_to_latlon(&Vector3::new(-7000.0, 0.0, 0.0));
        assert!((p.lon_deg.abs() - 180.0).abs() < 1e-12);
    }

    #[test]
    fn quarter_spin_shifts_longitude_west() {
        // After a quarter of the spin period, a point fixed in inertial
        // space sits 90 deg further west in the body frame.
        let quarter = 0.5 * std::f64::consts::PI / EARTH.omega;
        let r_bf = inertial_to_body_fixed(quarter, EARTH.omega) * Vector3::new(7000.0, 0.0, 0.0);
        let p = cartesian_to_latlon(&r_bf);
        assert!((p.lon_deg + 90.0).abs() < 1e-9, "got lon {}", p.lon_deg);
    }

    #[test]
    fn ground_track_is_index_aligned_and_drifts_west() {
        let r = 6878.0;
        let v = (EARTH.mu / r).sqrt();
        let y0 = StateVector::from_column_slice(&[r, 0.0, 0.0, 0.0, v, 0.0]);
        let t = period(&y0, EARTH.mu).unwrap();
        let traj = propagate_orbit(&y0, EARTH.mu, t, 60.0);
        let track = ground_track(&traj, &EARTH);

        assert_eq!(track.len(), traj.len());
        // Equatorial orbit: latitude pinned to zero.
        for p in &track {
            assert!(p.lat_deg.abs() < 1e-6);
        }
        // The orbit beats the planet's spin, so after one revolution the
        // sub-satellite point lands west of the start.
        let last = track.last().unwrap();
        assert!(
            last.lon_deg < -10.0 && last.lon_deg > -40.0,
            "expected westward drift of roughly one spin-period fraction, got {}",
            last.lon_deg
        );
    }

    #[test]
    fn linspace_hits_both_endpoints() {
        let xs = linspace(0.0, 10.0, 5);
        assert_eq!(xs, vec![0.0, 2.5, 5.0, 7.5, 10.0]);
    }
}
