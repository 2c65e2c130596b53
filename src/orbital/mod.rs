pub mod elements;
pub mod propagator;

pub use elements::KeplerianElements;
pub use propagator::{position, propagate_orbit, state_from_rv, velocity, StateVector, Trajectory};
