pub mod bodies;
pub mod error;
pub mod frames;
pub mod io;
pub mod orbital;
pub mod physics;
pub mod sim;

pub use bodies::{BodyFixedFrame, CentralBody, ALL_BODIES, EARTH, MARS, MOON};
pub use error::Error;
pub use frames::{cartesian_to_latlon, ground_track, inertial_to_body_fixed, GroundTrackPoint};
pub use orbital::{propagate_orbit, KeplerianElements, StateVector, Trajectory};
pub use physics::gravity::{period, specific_energy, two_body_accel, two_body_deriv};
pub use sim::{euler_step, rk4_step, OrbitInput, OrbitScenario, PropagationOutput, HYPERBOLIC_TSPAN};
