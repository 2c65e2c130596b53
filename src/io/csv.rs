use std::io::{self, Write};

use crate::frames::GroundTrackPoint;
use crate::orbital::propagator::Trajectory;

/// Write a trajectory to CSV format.
///
/// Columns: et, rx, ry, rz, vx, vy, vz (s, km, km/s)
pub fn write_trajectory<W: Write>(writer: &mut W, traj: &Trajectory) -> io::Result<()> {
    writeln!(writer, "et,rx,ry,rz,vx,vy,vz")?;

    for (y, et) in traj.states.iter().zip(&traj.ets) {
        writeln!(
            writer,
            "{:.3},{:.6},{:.6},{:.6},{:.9},{:.9},{:.9}",
            et, y[0], y[1], y[2], y[3], y[4], y[5],
        )?;
    }

    Ok(())
}

/// Write a trajectory CSV to a file at the given path.
pub fn write_trajectory_file(path: &str, traj: &Trajectory) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_trajectory(&mut file, traj)
}

/// Write a ground track to CSV format.
///
/// Columns: et, radius, lon_deg, lat_deg (s, km, deg, deg)
pub fn write_ground_track<W: Write>(
    writer: &mut W,
    ets: &[f64],
    track: &[GroundTrackPoint],
) -> io::Result<()> {
    writeln!(writer, "et,radius,lon_deg,lat_deg")?;

    for (p, et) in track.iter().zip(ets) {
        writeln!(
            writer,
            "{:.3},{:.6},{:.6},{:.6}",
            et, p.radius, p.lon_deg, p.lat_deg,
        )?;
    }

    Ok(())
}

/// Write a ground-track CSV to a file at the given path.
pub fn write_ground_track_file(
    path: &str,
    ets: &[f64],
    track: &[GroundTrackPoint],
) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_ground_track(&mut file, ets, track)
}
