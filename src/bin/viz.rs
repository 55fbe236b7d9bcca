use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints, Points};

use transfer_sim::constants::{EARTH_GEO_RADIUS, EARTH_LEO_RADIUS, EARTH_MU, EARTH_RADIUS};
use transfer_sim::dynamics::StateVec;
use transfer_sim::orbital::maneuvers::transfer_ellipse_points;
use transfer_sim::orbital::{propagate_hohmann, TransferPropagation};
use transfer_sim::sim::diagnostics::energy_series;
use transfer_sim::sim::{propagate_with_events, Direction, EventRecord, EventSpec, DEFAULT_MAX_STEPS};
use transfer_sim::DynamicsParams;

fn main() -> eframe::Result {
    let run = propagate_hohmann(EARTH_LEO_RADIUS, EARTH_GEO_RADIUS, EARTH_MU, 60.0)
        .expect("valid transfer inputs");

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

    let app = TransferViz {
        run,
        events: evented.events,
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Orbital Transfer Visualizer",
        options,
        Box::new(|_| Ok(Box::new(app))),
    )
}

struct TransferViz {
    run: TransferPropagation,
    events: Vec<EventRecord>,
}

fn circle_points(radius: f64, n: usize) -> PlotPoints<'static> {
    (0..=n)
        .map(|i| {
            let theta = 2.0 * std::f64::consts::PI * i as f64 / n as f64;
            [radius * theta.cos(), radius * theta.sin()]
        })
        .collect()
}

impl eframe::App for TransferViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let transfer = &self.run.transfer;
        let traj = &self.run.trajectory;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading("Hohmann Transfer: LEO -> GEO");
            ui.label(format!(
                "dv1: {:.3} km/s  |  dv2: {:.3} km/s  |  total: {:.3} km/s  |  \
                 time of flight: {:.2} h  |  {} samples",
                transfer.dv1,
                transfer.dv2,
                transfer.total_dv,
                transfer.tof / 3600.0,
                traj.len(),
            ));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let half_w = available.x / 2.0 - 8.0;

            ui.horizontal(|ui| {
                // Orbit geometry, x-y plane
                ui.vertical(|ui| {
                    ui.label("Orbit plane (km)");

                    let propagated: PlotPoints =
                        traj.states.iter().map(|y| [y[0], y[1]]).collect();
                    let analytic: PlotPoints =
                        transfer_ellipse_points(transfer.r1, transfer.r2, 200)
                            .into_iter()
                            .collect();
                    let crossings: PlotPoints = self
                        .events
                        .iter()
                        .map(|e| [e.state[0], e.state[1]])
                        .collect();

                    Plot::new("orbit")
                        .width(half_w)
                        .height(available.y - 16.0)
                        .data_aspect(1.0)
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Earth", circle_points(EARTH_RADIUS, 120)));
                            plot_ui.line(Line::new(
                                "Initial orbit",
                                circle_points(transfer.r1, 200),
                            ));
                            plot_ui.line(Line::new("Final orbit", circle_points(transfer.r2, 200)));
                            plot_ui.line(Line::new("Transfer (analytic)", analytic));
                            plot_ui.line(Line::new("Transfer (propagated)", propagated));
                            plot_ui.points(Points::new("Plane crossings", crossings).radius(4.0));
                        });
                });

                // Energy drift over the transfer
                ui.vertical(|ui| {
                    ui.label("Specific orbital energy (km^2/s^2)");

                    let energies = energy_series(&traj.states, EARTH_MU);
                    let points: PlotPoints = traj
                        .times
                        .iter()
                        .zip(energies.iter())
                        .map(|(t, e)| [*t, *e])
                        .collect();

                    Plot::new("energy")
                        .width(half_w)
                        .height(available.y - 16.0)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Energy", points));
                        });
                });
            });
        });
    }
}
