use transfer_sim::constants::{EARTH_GEO_RADIUS, EARTH_LEO_RADIUS, EARTH_MU, EARTH_RADIUS};
use transfer_sim::dynamics::{position, StateVec};
use transfer_sim::io::{csv, json};
use transfer_sim::orbital::{self, maneuvers};
use transfer_sim::sim::diagnostics::{energy_drift, energy_series};
use transfer_sim::sim::{propagate_with_events, Direction, EventSpec, DEFAULT_MAX_STEPS};
use transfer_sim::DynamicsParams;

fn main() {
    let r1 = EARTH_LEO_RADIUS;
    let r2 = EARTH_GEO_RADIUS;

    // -----------------------------------------------------------------------
    // Closed-form transfer budgets
    // -----------------------------------------------------------------------
    let hohmann = maneuvers::hohmann(r1, r2, EARTH_MU);
    let rb = 2.0 * r2;
    let bielliptic = maneuvers::bielliptic(r1, r2, rb, EARTH_MU).expect("rb > r2");

    println!();
    println!("====================================================================");
    println!("  ORBITAL TRANSFER COMPARISON — LEO -> GEO");
    println!("====================================================================");
    println!();
    println!("  Orbits");
    println!("  ------------------------------------------------------------------");
    println!(
        "  Initial:  r = {:>9.1} km   (altitude {:>8.1} km)",
        r1,
        r1 - EARTH_RADIUS
    );
    println!(
        "  Final:    r = {:>9.1} km   (altitude {:>8.1} km)",
        r2,
        r2 - EARTH_RADIUS
    );
    println!();

    println!("  Hohmann (two impulses)");
    println!("  ------------------------------------------------------------------");
    println!(
        "  dv1: {:>7.4} km/s   dv2: {:>7.4} km/s   total: {:>7.4} km/s",
        hohmann.dv1, hohmann.dv2, hohmann.total_dv
    );
    println!(
        "  Time of flight: {:>8.1} s  ({:.2} h)",
        hohmann.tof,
        hohmann.tof / 3600.0
    );
    println!();

    println!("  Bi-elliptic (three impulses, rb = {:.0} km)", rb);
    println!("  ------------------------------------------------------------------");
    println!(
        "  dv1: {:>7.4}   dv2: {:>7.4}   dv3: {:>7.4}   total: {:>7.4} km/s",
        bielliptic.dv1, bielliptic.dv2, bielliptic.dv3, bielliptic.total_dv
    );
    println!(
        "  Time of flight: {:>8.1} s  ({:.2} h)",
        bielliptic.tof,
        bielliptic.tof / 3600.0
    );
    println!();
    let winner = if hohmann.total_dv <= bielliptic.total_dv {
        "Hohmann"
    } else {
        "bi-elliptic"
    };
    println!(
        "  Cheaper transfer: {winner} (ratio r2/r1 = {:.2}, bi-elliptic wins above ~11.94)",
        r2 / r1
    );
    println!();

    // -----------------------------------------------------------------------
    // Propagate the Hohmann transfer leg and verify the integration
    // -----------------------------------------------------------------------
    let run = orbital::propagate_hohmann(r1, r2, EARTH_MU, 60.0).expect("valid transfer inputs");

    // Watch the spacecraft crossing the y-z plane on the way out
    let events = vec![EventSpec::new("x-plane", Direction::Any, |y: &StateVec| y[0])];
    let evented = propagate_with_events(
        transfer_sim::two_body_dynamics,
        &run.trajectory.states[0],
        (0.0, run.transfer.tof),
        60.0,
        &DynamicsParams { mu: EARTH_MU },
        &events,
        DEFAULT_MAX_STEPS,
    )
    .expect("valid span and step");

    let energies = energy_series(&run.trajectory.states, EARTH_MU);
    let drift = energy_drift(&energies);
    let (t_final, y_final) = run.trajectory.last().expect("non-empty trajectory");

    println!("  Propagated Hohmann transfer (RK4, dt = 60 s)");
    println!("  ------------------------------------------------------------------");
    println!(
        "  Steps: {:>6}   final t = {:>8.1} s   arrival radius = {:>9.1} km",
        run.trajectory.steps,
        t_final,
        position(y_final).norm()
    );
    println!(
        "  Specific energy: {:>9.4} km^2/s^2   drift over flight: {:.3e}",
        energies[0], drift
    );
    for e in &evented.events {
        println!("  EVENT  {}  at t = {:>8.1} s", e.name, e.time);
    }
    println!();

    // -----------------------------------------------------------------------
    // Optional artifacts: pass an output directory to dump CSV/JSON
    // -----------------------------------------------------------------------
    if let Some(dir) = std::env::args().nth(1) {
        let traj_path = format!("{dir}/transfer_trajectory.csv");
        let summary_path = format!("{dir}/transfer_summary.json");

        if let Err(e) = csv::write_trajectory_file(&traj_path, &run.trajectory) {
            eprintln!("  failed to write {traj_path}: {e}");
        } else {
            println!("  Wrote {traj_path}");
        }
        if let Err(e) = json::write_comparison_file(&summary_path, &hohmann, Some(&bielliptic)) {
            eprintln!("  failed to write {summary_path}: {e}");
        } else {
            println!("  Wrote {summary_path}");
        }
        println!();
    }
}
