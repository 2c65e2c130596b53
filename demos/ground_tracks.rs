use orbit_prop::{KeplerianElements, OrbitInput, OrbitScenario, ALL_BODIES};

fn main() {
    println!("=== Ground tracks over Earth, Moon, Mars ===\n");

    for body in ALL_BODIES {
        // Low circular-ish orbit 100 km above each surface, 60 deg inclined.
        let scenario = OrbitScenario {
            body: *body,
            input: OrbitInput::Elements(KeplerianElements::from_degrees(
                body.radius + 100.0,
                0.01,
                60.0,
                0.0,
                0.0,
                0.0,
            )),
            dt: 60.0,
            sim_time: 1.0,
        };

        let out = scenario.run().expect("valid scenario");

        println!(
            "{}: one period = {:.1} min, {} samples",
            body.name,
            out.tspan / 60.0,
            out.trajectory.len()
        );

        // Longitude swath covered over one orbit, sampled sparsely.
        let step = (out.ground_track.len() / 8).max(1);
        for (i, p) in out.ground_track.iter().enumerate().step_by(step) {
            println!(
                "  t={:>7.0}s  lon={:>8.2} deg  lat={:>7.2} deg  r={:.1} km",
                out.trajectory.ets[i], p.lon_deg, p.lat_deg, p.radius
            );
        }

        let drift = out.ground_track.last().unwrap().lon_deg
            - out.ground_track.first().unwrap().lon_deg;
        println!("  net longitude drift after one orbit: {drift:.2} deg\n");
    }
}
