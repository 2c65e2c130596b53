pub mod integrator;
pub mod runner;

pub use integrator::{euler_step, rk4_step};
pub use runner::{OrbitInput, OrbitScenario, PropagationOutput, HYPERBOLIC_TSPAN};
