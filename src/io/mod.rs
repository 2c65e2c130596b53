pub mod csv;

pub use csv::{write_ground_track, write_ground_track_file, write_trajectory, write_trajectory_file};
