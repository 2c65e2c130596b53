use nalgebra::{Vector3, Vector6};

use crate::frames::linspace;
use crate::physics::gravity::two_body_deriv;
use crate::sim::integrator::rk4_step;

// ---------------------------------------------------------------------------
// Fixed-step two-body propagation
// ---------------------------------------------------------------------------

/// Cartesian state `[rx, ry, rz, vx, vy, vz]` (km, km/s) in an inertial
/// frame centered on the chosen body.
pub type StateVector = Vector6<f64>;

/// Pack a position/velocity pair into a state vector.
pub fn state_from_rv(r: &Vector3<f64>, v: &Vector3<f64>) -> StateVector {
    Vector6::new(r.x, r.y, r.z, v.x, v.y, v.z)
}

/// Position sub-vector (km).
pub fn position(y: &StateVector) -> Vector3<f64> {
    Vector3::new(y[0], y[1], y[2])
}

/// Velocity sub-vector (km/s).
pub fn velocity(y: &StateVector) -> Vector3<f64> {
    Vector3::new(y[3], y[4], y[5])
}

/// Propagated trajectory: one state per time step, with an index-aligned
/// elapsed-time series. Immutable once returned.
#[derive(Debug, Clone)]
pub struct Trajectory {
    pub states: Vec<StateVector>,
    pub ets: Vec<f64>, // s since the start of the run
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn last(&self) -> &StateVector {
        self.states
            .last()
            .expect("trajectory always holds the initial state")
    }
}

/// Propagate a two-body orbit with fixed-step RK4.
///
/// Index 0 of the result is the initial state, followed by
/// `ceil(tspan/dt)` propagated steps. The elapsed-time series is
/// `linspace(0, tspan)` rather than `i * dt`, so it spans exactly
/// `[0, tspan]` regardless of step-size rounding.
///
/// Step count is the caller's responsibility: a small `dt` over a long
/// span produces a proportionally long trajectory.
pub fn propagate_orbit(state: &StateVector, mu: f64, tspan: f64, dt: f64) -> Trajectory {
    let n_steps = (tspan / dt).ceil() as usize + 1;
    let f = |_t: f64, y: &StateVector| two_body_deriv(y, mu);

    let mut states = Vec::with_capacity(n_steps);
    states.push(*state);

    let mut y = *state;
    for n in 1..n_steps {
        y = rk4_step(&f, (n - 1) as f64 * dt, &y, dt);
        states.push(y);
    }

    let ets = linspace(0.0, tspan, n_steps);
    Trajectory { states, ets }
}
