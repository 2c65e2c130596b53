use orbit_prop::io::csv;
use orbit_prop::orbital::propagator::{position, velocity};
use orbit_prop::{
    specific_energy, KeplerianElements, OrbitInput, OrbitScenario, PropagationOutput, EARTH,
};
use nalgebra::Vector6;

fn main() {
    // -----------------------------------------------------------------------
    // Orbit 1: circular LEO from a raw state vector
    // -----------------------------------------------------------------------
    let leo = OrbitScenario {
        body: EARTH,
        input: OrbitInput::State(Vector6::new(6878.0, 0.0, 0.0, 0.0, 7.62, 0.0)),
        dt: 60.0,       // s
        sim_time: 2.0,  // periods
    };

    // -----------------------------------------------------------------------
    // Orbit 2: inclined ellipse from Keplerian elements (degrees in)
    // -----------------------------------------------------------------------
    let ellipse = OrbitScenario {
        body: EARTH,
        input: OrbitInput::Elements(KeplerianElements::from_degrees(
            8500.0, // sma, km
            0.2,    // ecc
            60.0,   // inc, deg
            0.0,    // true anomaly, deg
            50.0,   // aop, deg
            40.0,   // raan, deg
        )),
        dt: 60.0,
        sim_time: 2.0,
    };

    println!();
    println!("====================================================================");
    println!("  TWO-BODY ORBIT PROPAGATION — {}", EARTH.name);
    println!("====================================================================");

    for (name, scenario) in [("LEO (state vector)", leo), ("Ellipse (elements)", ellipse)] {
        let out = scenario.run().unwrap_or_else(|e| {
            eprintln!("{name}: {e}");
            std::process::exit(1);
        });

        report(name, &scenario, &out);

        let slug = name.split_whitespace().next().unwrap().to_lowercase();
        csv::write_trajectory_file(&format!("{slug}_trajectory.csv"), &out.trajectory)
            .expect("write trajectory csv");
        csv::write_ground_track_file(
            &format!("{slug}_groundtrack.csv"),
            &out.trajectory.ets,
            &out.ground_track,
        )
        .expect("write ground track csv");
        println!("  Wrote {slug}_trajectory.csv, {slug}_groundtrack.csv");
    }

    println!("====================================================================");
    println!();
}

fn report(name: &str, scenario: &OrbitScenario, out: &PropagationOutput) {
    let y0 = &out.trajectory.states[0];
    let yf = out.trajectory.last();

    let e0 = specific_energy(y0, scenario.body.mu);
    let ef = specific_energy(yf, scenario.body.mu);

    println!();
    println!("  {name}");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Span:          {:>10.1} s   ({:.0} steps of {} s)",
        out.tspan,
        (out.trajectory.len() - 1) as f64,
        scenario.dt
    );
    println!(
        "  r0:            {:>10.1} km  v0: {:>8.3} km/s",
        position(y0).norm(),
        velocity(y0).norm()
    );
    println!(
        "  rf:            {:>10.1} km  vf: {:>8.3} km/s",
        position(yf).norm(),
        velocity(yf).norm()
    );
    println!(
        "  Energy drift:  {:>10.2e}     (eps0 = {:.4} km^2/s^2)",
        ((ef - e0) / e0).abs(),
        e0
    );
    println!(
        "  h direction:   [{:+.4}, {:+.4}, {:+.4}]",
        out.h_dir.x, out.h_dir.y, out.h_dir.z
    );

    let first = out.ground_track.first().unwrap();
    let last = out.ground_track.last().unwrap();
    println!(
        "  Ground track:  ({:+7.2}, {:+6.2}) deg -> ({:+7.2}, {:+6.2}) deg",
        first.lon_deg, first.lat_deg, last.lon_deg, last.lat_deg
    );
}
