pub mod gravity;

pub use gravity::{period, specific_energy, two_body_accel, two_body_deriv};
