use nalgebra::Vector3;

use crate::bodies::CentralBody;
use crate::error::Error;
use crate::frames::{ground_track, GroundTrackPoint};
use crate::orbital::elements::KeplerianElements;
use crate::orbital::propagator::{position, propagate_orbit, velocity, StateVector, Trajectory};
use crate::physics::gravity::period;

// ---------------------------------------------------------------------------
// Scenario layer: the engine's boundary with the UI
// ---------------------------------------------------------------------------

/// Span given to unbound trajectories when the caller's multiplier reads as
/// "a number of periods" (s).
pub const HYPERBOLIC_TSPAN: f64 = 35_000.0;

/// Initial conditions for one orbit: either a raw state vector or a set of
/// Keplerian elements converted with the scenario body's mu.
#[derive(Debug, Clone, Copy)]
pub enum OrbitInput {
    State(StateVector),
    Elements(KeplerianElements),
}

/// One propagation request.
///
/// `sim_time` is a period multiplier for bound orbits. For unbound orbits
/// no period exists, and the multiplier is reinterpreted: values below 50
/// still mean "a few periods' worth" and get [`HYPERBOLIC_TSPAN`], larger
/// values are taken literally as a span in seconds.
#[derive(Debug, Clone, Copy)]
pub struct OrbitScenario {
    pub body: CentralBody,
    pub input: OrbitInput,
    pub dt: f64,       // integration step, s
    pub sim_time: f64, // period multiplier (or span, see above)
}

/// Everything one propagation run produces.
#[derive(Debug, Clone)]
pub struct PropagationOutput {
    pub trajectory: Trajectory,
    pub ground_track: Vec<GroundTrackPoint>,
    /// Normalized angular-momentum direction of the initial state;
    /// constant over an unperturbed propagation.
    pub h_dir: Vector3<f64>,
    /// Resolved total span, s.
    pub tspan: f64,
}

impl OrbitScenario {
    /// Validate, resolve the time span, propagate, and derive the ground
    /// track.
    pub fn run(&self) -> Result<PropagationOutput, Error> {
        if self.dt <= 0.0 {
            return Err(Error::NonPositiveStep(self.dt));
        }
        if self.body.mu <= 0.0 {
            return Err(Error::NonPositiveMu(self.body.mu));
        }

        let state = match self.input {
            OrbitInput::State(y) => y,
            OrbitInput::Elements(coes) => coes.to_state_vector(self.body.mu),
        };
        if position(&state).norm() == 0.0 {
            return Err(Error::ZeroPositionVector);
        }

        let tspan = resolve_tspan(&state, self.body.mu, self.sim_time);
        let trajectory = propagate_orbit(&state, self.body.mu, tspan, self.dt);
        let track = ground_track(&trajectory, &self.body);
        let h_dir = position(&state).cross(&velocity(&state)).normalize();

        Ok(PropagationOutput {
            trajectory,
            ground_track: track,
            h_dir,
            tspan,
        })
    }
}

/// Period multiplier → absolute span, with the unbound-orbit fallback.
fn resolve_tspan(state: &StateVector, mu: f64, sim_time: f64) -> f64 {
    match period(state, mu) {
        Some(t) => t * sim_time,
        None if sim_time < 50.0 => HYPERBOLIC_TSPAN,
        None => sim_time,
    }
}
